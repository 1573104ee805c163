//! Shape and encoding of a file-backed matrix

use super::storage_type::StorageType;
use crate::{FbmError, Result};

/// Read-only description of one file-backed matrix
///
/// The storage tag is kept raw so that a descriptor read from an external
/// source can still be represented when its tag is unknown. It is resolved
/// with [`MatrixDescriptor::storage_type`] at the point of use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixDescriptor {
    /// Number of rows
    pub nrow: usize,
    /// Number of columns
    pub ncol: usize,
    /// Raw storage-type tag (1, 2, 4 or 8)
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub storage_tag: u8,
}

impl MatrixDescriptor {
    /// Create a descriptor for a known encoding
    pub const fn new(nrow: usize, ncol: usize, storage_type: StorageType) -> Self {
        Self {
            nrow,
            ncol,
            storage_tag: storage_type.tag(),
        }
    }

    /// Create a descriptor from a raw, unvalidated tag
    pub const fn from_raw(nrow: usize, ncol: usize, storage_tag: u8) -> Self {
        Self {
            nrow,
            ncol,
            storage_tag,
        }
    }

    /// Resolve the storage tag
    pub const fn storage_type(&self) -> Result<StorageType> {
        StorageType::from_tag(self.storage_tag)
    }

    /// Total number of elements, `nrow * ncol`
    pub fn nelem(&self) -> Result<usize> {
        self.nrow
            .checked_mul(self.ncol)
            .ok_or(FbmError::AllocationFailed {
                requested: usize::MAX,
            })
    }

    /// Number of backing bytes the declared shape occupies
    pub fn byte_len(&self) -> Result<usize> {
        let width = self.storage_type()?.size_bytes();
        self.nelem()?
            .checked_mul(width)
            .ok_or(FbmError::AllocationFailed {
                requested: usize::MAX,
            })
    }
}
