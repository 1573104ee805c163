//! Memory-mapped file-backed matrices
//!
//! Maps an existing backing file read-only and exposes it as a
//! [`MatrixHandle`]. The mapping covers exactly the bytes of the declared
//! shape, starting after the configured header offset.

use std::fs::File;
use std::path::{Path, PathBuf};

use fbm_core::{
    DenseMatrix, MatrixDescriptor, MatrixHandle, StorageBackend, StorageType, Values,
};
use memmap2::{Mmap, MmapOptions};
use tracing::{debug, warn};

use crate::config::MapConfig;
use crate::error::{Error, Result};

/// Read-only memory-mapped matrix that owns its mapping
///
/// The backing file must not be truncated or rewritten while mapped.
#[derive(Debug)]
pub struct MmapFbm {
    mmap: Mmap,
    path: PathBuf,
    descriptor: MatrixDescriptor,
    storage_type: StorageType,
}

impl MmapFbm {
    /// Map `path` as a matrix described by `descriptor`
    ///
    /// Fails on an unrecognized storage tag, or when the file (after the
    /// header offset) is too short for `nrow * ncol` elements.
    pub fn open<P: AsRef<Path>>(
        path: P,
        descriptor: MatrixDescriptor,
        config: &MapConfig,
    ) -> Result<Self> {
        let path = path.as_ref();
        let storage_type = descriptor.storage_type()?;
        let required = descriptor.byte_len()? as u64;

        let file = File::open(path).map_err(|e| Error::io("open", path, e))?;
        let file_len = file
            .metadata()
            .map_err(|e| Error::io("stat", path, e))?
            .len();
        if config.header_offset > file_len {
            return Err(Error::BackingFileTooSmall {
                path: path.to_path_buf(),
                required: config.header_offset.saturating_add(required),
                available: file_len,
            });
        }
        let available = file_len - config.header_offset;

        if available < required {
            return Err(Error::BackingFileTooSmall {
                path: path.to_path_buf(),
                required,
                available,
            });
        }
        if available > required {
            if config.strict_length {
                return Err(Error::LengthMismatch {
                    path: path.to_path_buf(),
                    expected: required,
                    actual: available,
                });
            }
            warn!(
                path = %path.display(),
                required,
                available,
                "backing file is longer than the declared shape"
            );
        }

        let mut options = MmapOptions::new();
        options.offset(config.header_offset).len(required as usize);
        if config.populate {
            options.populate();
        }

        // SAFETY: the mapping is read-only; the caller guarantees no one
        // truncates or rewrites the backing file while it is mapped
        let mmap = unsafe { options.map(&file) }.map_err(|e| Error::io("map", path, e))?;

        debug!(
            path = %path.display(),
            nrow = descriptor.nrow,
            ncol = descriptor.ncol,
            storage = %storage_type,
            bytes = required,
            "mapped file-backed matrix"
        );

        Ok(Self {
            mmap,
            path: path.to_path_buf(),
            descriptor,
            storage_type,
        })
    }

    /// Load a JSON descriptor sidecar and map the backing file it names
    #[cfg(feature = "serde")]
    pub fn from_descriptor_file<P: AsRef<Path>>(path: P, config: &MapConfig) -> Result<Self> {
        let desc = crate::descriptor::DescriptorFile::load(path)?;
        Self::open(&desc.backingfile, desc.matrix, config)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validated storage encoding
    pub fn storage_type(&self) -> StorageType {
        self.storage_type
    }

    /// Dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.descriptor.nrow, self.descriptor.ncol)
    }

    /// Extract elements by 1-based position in the flattened matrix
    pub fn extract_vector(&self, indices: &[usize]) -> Result<Values> {
        debug!(
            path = %self.path.display(),
            storage = %self.storage_type,
            len = indices.len(),
            "extracting vector"
        );
        Ok(fbm_core::extract_vector(self, indices)?)
    }

    /// Extract the sub-matrix selected by 1-based row and column indices
    pub fn extract_matrix(&self, rows: &[usize], cols: &[usize]) -> Result<DenseMatrix> {
        debug!(
            path = %self.path.display(),
            storage = %self.storage_type,
            nrow = rows.len(),
            ncol = cols.len(),
            "extracting sub-matrix"
        );
        Ok(fbm_core::extract_matrix(self, rows, cols)?)
    }
}

impl StorageBackend for MmapFbm {
    fn as_slice(&self) -> &[u8] {
        &self.mmap
    }
}

impl MatrixHandle for MmapFbm {
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
