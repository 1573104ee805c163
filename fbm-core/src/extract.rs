//! Extraction engine
//!
//! The two public operations resolve the handle's storage tag, pick the
//! matching typed view and accessor, and copy the selection into a freshly
//! allocated dense result of the promoted output type. Extraction is
//! all-or-nothing: any error is reported before the first element is read.

use alloc::vec::Vec;

use crate::accessor::{SubMatAccessor, VecAccessor};
use crate::format::StorageType;
use crate::traits::{MatrixHandle, OutputElement, StorageElement};
use crate::values::{DenseMatrix, Values};
use crate::view::TypedView;
use crate::{FbmError, Result};

/// Run `$body` with `$elem` bound to the element type of `$storage`
///
/// This is the one place that maps storage tags to element types.
macro_rules! dispatch_storage {
    ($storage:expr, $elem:ident => $body:expr) => {
        match $storage {
            StorageType::U8 => {
                type $elem = u8;
                $body
            }
            StorageType::U16 => {
                type $elem = u16;
                $body
            }
            StorageType::I32 => {
                type $elem = i32;
                $body
            }
            StorageType::F64 => {
                type $elem = f64;
                $body
            }
        }
    };
}

/// Extract elements by 1-based position in the flattened matrix
///
/// The result has one value per index, in index order. Duplicates are
/// read once per occurrence. Integer-valued for `u8`, `u16` and `i32`
/// storage, real-valued for `f64`.
pub fn extract_vector<H>(handle: &H, indices: &[usize]) -> Result<Values>
where
    H: MatrixHandle + ?Sized,
{
    let storage = StorageType::from_tag(handle.storage_tag())?;
    dispatch_storage!(storage, T => extract_vector_typed::<T, H>(handle, indices))
}

/// Extract the sub-matrix `rows x cols` by 1-based row and column indices
///
/// The result is `rows.len()` by `cols.len()`, filled column-major.
pub fn extract_matrix<H>(handle: &H, rows: &[usize], cols: &[usize]) -> Result<DenseMatrix>
where
    H: MatrixHandle + ?Sized,
{
    let storage = StorageType::from_tag(handle.storage_tag())?;
    dispatch_storage!(storage, T => extract_matrix_typed::<T, H>(handle, rows, cols))
}

fn typed_view<T, H>(handle: &H) -> Result<TypedView<'_, T>>
where
    T: StorageElement,
    H: MatrixHandle + ?Sized,
{
    let nelem = handle.descriptor().nelem()?;
    TypedView::new(handle.as_slice(), nelem)
}

fn alloc_output<O: OutputElement>(len: usize) -> Result<Vec<O>> {
    let mut out = Vec::new();
    out.try_reserve_exact(len)
        .map_err(|_| FbmError::AllocationFailed { requested: len })?;
    Ok(out)
}

fn extract_vector_typed<T, H>(handle: &H, indices: &[usize]) -> Result<Values>
where
    T: StorageElement,
    H: MatrixHandle + ?Sized,
{
    let acc = VecAccessor::new(typed_view::<T, H>(handle)?, indices)?;

    let mut out = alloc_output::<T::Output>(acc.len())?;
    for k in 0..acc.len() {
        out.push(acc.element(k));
    }

    Ok(<T::Output as OutputElement>::into_values(out))
}

fn extract_matrix_typed<T, H>(handle: &H, rows: &[usize], cols: &[usize]) -> Result<DenseMatrix>
where
    T: StorageElement,
    H: MatrixHandle + ?Sized,
{
    let acc = SubMatAccessor::new(
        typed_view::<T, H>(handle)?,
        handle.nrow(),
        handle.ncol(),
        rows,
        cols,
    )?;

    let (n, m) = acc.dims();
    let len = n.checked_mul(m).ok_or(FbmError::AllocationFailed {
        requested: usize::MAX,
    })?;

    let mut out = alloc_output::<T::Output>(len)?;
    for j in 0..m {
        for i in 0..n {
            out.push(acc.element(i, j));
        }
    }

    Ok(DenseMatrix::from_column_major(
        n,
        m,
        <T::Output as OutputElement>::into_values(out),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{MatrixDescriptor, OutputKind};
    use crate::slice::SliceMatrix;
    use crate::values::Value;
    use crate::Axis;
    use alloc::vec;

    const BYTES_3X2: [u8; 6] = [10, 20, 30, 40, 50, 60];

    fn u8_3x2() -> SliceMatrix<'static> {
        SliceMatrix::new(MatrixDescriptor::new(3, 2, StorageType::U8), &BYTES_3X2)
    }

    fn encode<T: bytemuck::Pod>(values: &[T], to_le: impl Fn(T) -> Vec<u8>) -> Vec<u8> {
        values.iter().flat_map(|&v| to_le(v)).collect()
    }

    #[test]
    fn test_extract_matrix_scenario() {
        let m = extract_matrix(&u8_3x2(), &[3, 1], &[2, 1]).unwrap();
        assert_eq!(m.dimensions(), (2, 2));
        assert_eq!(m.kind(), OutputKind::Integer);
        // [[60, 40], [30, 10]], column-major
        assert_eq!(m.values(), &Values::Integer(vec![60, 30, 40, 10]));
        assert_eq!(m.get(0, 1), Some(Value::Integer(40)));
        assert_eq!(m.get(1, 0), Some(Value::Integer(30)));
    }

    #[test]
    fn test_extract_vector_scenario() {
        let v = extract_vector(&u8_3x2(), &[4, 4, 1]).unwrap();
        assert_eq!(v, Values::Integer(vec![40, 40, 10]));
    }

    #[test]
    fn test_vector_matrix_roundtrip() {
        let handle = u8_3x2();
        let all: Vec<usize> = (1..=6).collect();
        let flat = extract_vector(&handle, &all).unwrap();
        let full = extract_matrix(&handle, &[1, 2, 3], &[1, 2]).unwrap();
        assert_eq!(full.values(), &flat);
    }

    #[test]
    fn test_permuted_indices_permute_output() {
        let handle = u8_3x2();
        let v = extract_vector(&handle, &[6, 2, 5]).unwrap();
        let w = extract_vector(&handle, &[5, 6, 2]).unwrap();
        assert_eq!(v, Values::Integer(vec![60, 20, 50]));
        assert_eq!(w, Values::Integer(vec![50, 60, 20]));
    }

    #[test]
    fn test_u16_above_i16_range() {
        let bytes = encode(&[1u16, 40_000, 65_535, 0], |v| v.to_le_bytes().to_vec());
        let handle = SliceMatrix::new(MatrixDescriptor::new(2, 2, StorageType::U16), &bytes);
        let v = extract_vector(&handle, &[3, 2]).unwrap();
        assert_eq!(v, Values::Integer(vec![65_535, 40_000]));
    }

    #[test]
    fn test_i32_keeps_sign() {
        let bytes = encode(&[-5i32, i32::MIN, 7, i32::MAX], |v| v.to_le_bytes().to_vec());
        let handle = SliceMatrix::new(MatrixDescriptor::new(2, 2, StorageType::I32), &bytes);
        let m = extract_matrix(&handle, &[2], &[1, 2]).unwrap();
        assert_eq!(m.values(), &Values::Integer(vec![i32::MIN, i32::MAX]));
    }

    #[test]
    fn test_f64_is_real_valued() {
        let bytes = encode(&[0.5f64, -1.25, 3.0], |v| v.to_le_bytes().to_vec());
        let handle = SliceMatrix::new(MatrixDescriptor::new(3, 1, StorageType::F64), &bytes);
        let v = extract_vector(&handle, &[2, 3]).unwrap();
        assert_eq!(v.kind(), OutputKind::Real);
        assert_eq!(v, Values::Real(vec![-1.25, 3.0]));
    }

    #[test]
    fn test_empty_selections() {
        let handle = u8_3x2();
        assert_eq!(extract_vector(&handle, &[]).unwrap(), Values::Integer(vec![]));

        let m = extract_matrix(&handle, &[], &[1, 2]).unwrap();
        assert_eq!(m.dimensions(), (0, 2));
        assert!(m.is_empty());
        assert_eq!(m.kind(), OutputKind::Integer);
    }

    #[test]
    fn test_out_of_range_indices() {
        let handle = u8_3x2();
        assert_eq!(
            extract_vector(&handle, &[1, 0]),
            Err(FbmError::IndexOutOfRange {
                axis: Axis::Element,
                index: 0,
                limit: 6
            })
        );
        assert_eq!(
            extract_vector(&handle, &[7]),
            Err(FbmError::IndexOutOfRange {
                axis: Axis::Element,
                index: 7,
                limit: 6
            })
        );
        assert_eq!(
            extract_matrix(&handle, &[4], &[1]),
            Err(FbmError::IndexOutOfRange {
                axis: Axis::Row,
                index: 4,
                limit: 3
            })
        );
        assert_eq!(
            extract_matrix(&handle, &[1], &[0]),
            Err(FbmError::IndexOutOfRange {
                axis: Axis::Column,
                index: 0,
                limit: 2
            })
        );
    }

    #[test]
    fn test_unsupported_tag_wins_over_valid_indices() {
        let handle = SliceMatrix::new(MatrixDescriptor::from_raw(3, 2, 3), &BYTES_3X2);
        assert_eq!(
            extract_vector(&handle, &[1, 2]),
            Err(FbmError::UnsupportedStorageType(3))
        );
        assert_eq!(
            extract_matrix(&handle, &[1], &[1]),
            Err(FbmError::UnsupportedStorageType(3))
        );
    }

    #[test]
    fn test_short_backing_store() {
        let handle = SliceMatrix::new(MatrixDescriptor::new(3, 2, StorageType::U16), &BYTES_3X2);
        assert_eq!(
            extract_vector(&handle, &[1]),
            Err(FbmError::InsufficientBuffer {
                required: 12,
                available: 6
            })
        );
    }

    #[test]
    fn test_shape_overflow_reports_allocation_failure() {
        // nrow * ncol overflows usize before any byte is read
        let handle = SliceMatrix::new(MatrixDescriptor::new(usize::MAX, 2, StorageType::U8), &[]);
        assert!(matches!(
            extract_vector(&handle, &[1]),
            Err(FbmError::AllocationFailed { .. })
        ));
        assert!(matches!(
            extract_matrix(&handle, &[1], &[1]),
            Err(FbmError::AllocationFailed { .. })
        ));
    }
}
