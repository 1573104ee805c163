//! Dense, owned extraction results

use alloc::vec::Vec;

use crate::format::OutputKind;

/// A single extracted value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Integer(i32),
    Real(f64),
}

/// A dense run of extracted values, uniformly typed
#[derive(Debug, Clone, PartialEq)]
pub enum Values {
    Integer(Vec<i32>),
    Real(Vec<f64>),
}

impl Values {
    /// Number of values held
    pub fn len(&self) -> usize {
        match self {
            Values::Integer(v) => v.len(),
            Values::Real(v) => v.len(),
        }
    }

    /// Whether no values are held
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Output kind of the held values
    pub fn kind(&self) -> OutputKind {
        match self {
            Values::Integer(_) => OutputKind::Integer,
            Values::Real(_) => OutputKind::Real,
        }
    }

    /// Value at `index`, if in range
    pub fn get(&self, index: usize) -> Option<Value> {
        match self {
            Values::Integer(v) => v.get(index).copied().map(Value::Integer),
            Values::Real(v) => v.get(index).copied().map(Value::Real),
        }
    }

    /// Borrow the values as `i32`, if integer-valued
    pub fn as_integer(&self) -> Option<&[i32]> {
        match self {
            Values::Integer(v) => Some(v.as_slice()),
            Values::Real(_) => None,
        }
    }

    /// Borrow the values as `f64`, if real-valued
    pub fn as_real(&self) -> Option<&[f64]> {
        match self {
            Values::Real(v) => Some(v.as_slice()),
            Values::Integer(_) => None,
        }
    }
}

/// Dense matrix result, stored column-major
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    nrow: usize,
    ncol: usize,
    values: Values,
}

impl DenseMatrix {
    /// Wrap column-major values. `values.len()` must equal `nrow * ncol`.
    pub(crate) fn from_column_major(nrow: usize, ncol: usize, values: Values) -> Self {
        debug_assert_eq!(Some(values.len()), nrow.checked_mul(ncol));
        Self { nrow, ncol, values }
    }

    /// Number of selected rows
    pub fn nrow(&self) -> usize {
        self.nrow
    }

    /// Number of selected columns
    pub fn ncol(&self) -> usize {
        self.ncol
    }

    /// Dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrow, self.ncol)
    }

    /// Number of elements, `nrow * ncol`
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Output kind of the elements
    pub fn kind(&self) -> OutputKind {
        self.values.kind()
    }

    /// Value at 0-based `(row, col)`, if in range
    pub fn get(&self, row: usize, col: usize) -> Option<Value> {
        if row >= self.nrow || col >= self.ncol {
            return None;
        }
        self.values.get(col * self.nrow + row)
    }

    /// Underlying column-major storage
    pub fn values(&self) -> &Values {
        &self.values
    }

    /// Take the column-major storage
    pub fn into_values(self) -> Values {
        self.values
    }
}
