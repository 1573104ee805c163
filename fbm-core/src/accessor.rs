//! Index-mapped accessors over a typed view
//!
//! Both accessors take caller-facing 1-based index lists, validate every
//! entry against the matrix shape up front, and keep only 0-based offsets.
//! Once constructed, every `element` call is in range.

use alloc::vec::Vec;

use crate::traits::StorageElement;
use crate::validation::translate_indices;
use crate::view::TypedView;
use crate::{Axis, FbmError, Result};

/// Selection of arbitrary positions in the flattened matrix
#[derive(Debug, Clone)]
pub struct VecAccessor<'a, T: StorageElement> {
    view: TypedView<'a, T>,
    offsets: Vec<usize>,
}

impl<'a, T: StorageElement> VecAccessor<'a, T> {
    /// Build from 1-based positions in `[1, nrow * ncol]`
    pub fn new(view: TypedView<'a, T>, indices: &[usize]) -> Result<Self> {
        let offsets = translate_indices(indices, view.nelem(), Axis::Element)?;
        Ok(Self { view, offsets })
    }

    /// Number of selected elements
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the selection is empty
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The `k`-th selected element, `k` in `[0, len)`
    #[inline]
    pub fn element(&self, k: usize) -> T::Output {
        self.view.read_at(self.offsets[k])
    }
}

/// Selection of a row subset crossed with a column subset
///
/// The source matrix is column-major: element `(r, c)` lives at offset
/// `c * nrow + r`.
#[derive(Debug, Clone)]
pub struct SubMatAccessor<'a, T: StorageElement> {
    view: TypedView<'a, T>,
    nrow: usize,
    rows: Vec<usize>,
    cols: Vec<usize>,
}

impl<'a, T: StorageElement> SubMatAccessor<'a, T> {
    /// Build from 1-based row indices in `[1, nrow]` and column indices in
    /// `[1, ncol]`
    ///
    /// `view` must cover exactly `nrow * ncol` elements, otherwise the shape
    /// is rejected as `InsufficientBuffer`.
    pub fn new(
        view: TypedView<'a, T>,
        nrow: usize,
        ncol: usize,
        rows: &[usize],
        cols: &[usize],
    ) -> Result<Self> {
        if nrow.checked_mul(ncol) != Some(view.nelem()) {
            let width = core::mem::size_of::<T>();
            return Err(FbmError::InsufficientBuffer {
                required: nrow
                    .checked_mul(ncol)
                    .and_then(|n| n.checked_mul(width))
                    .unwrap_or(usize::MAX),
                available: view.nelem() * width,
            });
        }
        let rows = translate_indices(rows, nrow, Axis::Row)?;
        let cols = translate_indices(cols, ncol, Axis::Column)?;
        Ok(Self {
            view,
            nrow,
            rows,
            cols,
        })
    }

    /// Selection shape as (rows, cols)
    pub fn dims(&self) -> (usize, usize) {
        (self.rows.len(), self.cols.len())
    }

    /// Element at selection position `(i, j)`
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> T::Output {
        self.view.read_at(self.cols[j] * self.nrow + self.rows[i])
    }
}
