//! Index and buffer bounds validation
//!
//! Pure checks with overflow protection. Everything the accessors hand to
//! a storage view has been through one of these functions first.

use alloc::vec::Vec;

use crate::{Axis, FbmError, Result};

/// Translate a 1-based index into a 0-based offset
///
/// Valid indices lie in `[1, limit]`; `0` and anything above `limit` are
/// rejected.
pub const fn to_offset(index: usize, limit: usize, axis: Axis) -> Result<usize> {
    if index == 0 || index > limit {
        return Err(FbmError::IndexOutOfRange { axis, index, limit });
    }
    Ok(index - 1)
}

/// Translate a whole index list, failing on the first bad entry
///
/// Order and duplicates are preserved.
pub fn translate_indices(indices: &[usize], limit: usize, axis: Axis) -> Result<Vec<usize>> {
    let mut offsets = Vec::new();
    offsets
        .try_reserve_exact(indices.len())
        .map_err(|_| FbmError::AllocationFailed {
            requested: indices.len(),
        })?;
    for &index in indices {
        offsets.push(to_offset(index, limit, axis)?);
    }
    Ok(offsets)
}

/// Validate that `available` bytes can hold `nelem` elements of type `T`
pub const fn validate_byte_len<T>(available: usize, nelem: usize) -> Result<()> {
    let element_size = core::mem::size_of::<T>();

    let required = match nelem.checked_mul(element_size) {
        Some(required) => required,
        None => {
            return Err(FbmError::InsufficientBuffer {
                required: usize::MAX,
                available,
            })
        }
    };

    if available < required {
        return Err(FbmError::InsufficientBuffer {
            required,
            available,
        });
    }

    Ok(())
}
