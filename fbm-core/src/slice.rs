//! In-memory matrix handle over a borrowed byte slice

use crate::format::MatrixDescriptor;
use crate::traits::{MatrixHandle, StorageBackend};

/// A [`MatrixHandle`] over bytes that are already resident
///
/// Useful when the caller manages the backing store itself, or for
/// matrices built in memory.
#[derive(Debug, Clone, Copy)]
pub struct SliceMatrix<'a> {
    descriptor: MatrixDescriptor,
    bytes: &'a [u8],
}

impl<'a> SliceMatrix<'a> {
    pub const fn new(descriptor: MatrixDescriptor, bytes: &'a [u8]) -> Self {
        Self { descriptor, bytes }
    }
}

impl StorageBackend for SliceMatrix<'_> {
    fn as_slice(&self) -> &[u8] {
        self.bytes
    }
}

impl MatrixHandle for SliceMatrix<'_> {
    fn storage_tag(&self) -> u8 {
        self.descriptor.storage_tag
    }

    fn nrow(&self) -> usize {
        self.descriptor.nrow
    }

    fn ncol(&self) -> usize {
        self.descriptor.ncol
    }

    fn descriptor(&self) -> MatrixDescriptor {
        self.descriptor
    }
}
