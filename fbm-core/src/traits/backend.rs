//! Backing store and matrix handle traits
//!
//! These are the only things the extraction engine knows about the
//! external owner of a matrix. Opening, mapping and lifetime management of
//! the bytes stay on the implementor's side.

use crate::format::MatrixDescriptor;

/// Trait for backends that expose file-backed matrix data
///
/// This trait provides a minimal interface for accessing the underlying
/// byte data of a storage backend, regardless of how it's implemented
/// (memory-mapped files, in-memory buffers, etc.).
pub trait StorageBackend {
    /// Get the raw bytes of the full column-major flattened matrix
    fn as_slice(&self) -> &[u8];

    /// Get the size of the data in bytes
    fn size(&self) -> usize {
        self.as_slice().len()
    }
}

/// A borrowed, read-only handle to one file-backed matrix
pub trait MatrixHandle: StorageBackend {
    /// Raw storage-type tag, not yet validated
    fn storage_tag(&self) -> u8;

    /// Number of rows
    fn nrow(&self) -> usize;

    /// Number of columns
    fn ncol(&self) -> usize;

    /// Shape and tag as a descriptor
    fn descriptor(&self) -> MatrixDescriptor {
        MatrixDescriptor::from_raw(self.nrow(), self.ncol(), self.storage_tag())
    }
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn as_slice(&self) -> &[u8] {
        (**self).as_slice()
    }
}

impl<M: MatrixHandle + ?Sized> MatrixHandle for &M {
    fn storage_tag(&self) -> u8 {
        (**self).storage_tag()
    }

    fn nrow(&self) -> usize {
        (**self).nrow()
    }

    fn ncol(&self) -> usize {
        (**self).ncol()
    }

    fn descriptor(&self) -> MatrixDescriptor {
        (**self).descriptor()
    }
}
