//! JSON descriptor sidecar
//!
//! A file-backed matrix is a raw backing file plus a small descriptor
//! recording its shape and element type:
//!
//! ```json
//! {"backingfile": "scores.bk", "nrow": 3, "ncol": 2, "type": 1}
//! ```
//!
//! A relative `backingfile` is resolved against the directory holding the
//! descriptor.

use std::fs;
use std::path::{Path, PathBuf};

use fbm_core::MatrixDescriptor;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Contents of a descriptor sidecar file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorFile {
    /// Path to the raw backing file
    pub backingfile: PathBuf,
    /// Shape and storage tag
    #[serde(flatten)]
    pub matrix: MatrixDescriptor,
}

impl DescriptorFile {
    /// Parse a descriptor from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a descriptor and resolve its backing file path
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json =
            fs::read_to_string(path).map_err(|e| Error::io("read descriptor", path, e))?;
        let mut desc = Self::from_json(&json)?;

        if desc.backingfile.is_relative() {
            if let Some(dir) = path.parent() {
                desc.backingfile = dir.join(&desc.backingfile);
            }
        }

        debug!(
            descriptor = %path.display(),
            backingfile = %desc.backingfile.display(),
            nrow = desc.matrix.nrow,
            ncol = desc.matrix.ncol,
            storage_tag = desc.matrix.storage_tag,
            "loaded descriptor"
        );

        Ok(desc)
    }

    /// Serialize to JSON text
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fbm_core::StorageType;

    #[test]
    fn test_parse_descriptor() {
        let desc =
            DescriptorFile::from_json(r#"{"backingfile":"m.bk","nrow":3,"ncol":2,"type":2}"#)
                .unwrap();
        assert_eq!(desc.backingfile, PathBuf::from("m.bk"));
        assert_eq!(desc.matrix, MatrixDescriptor::new(3, 2, StorageType::U16));
    }

    #[test]
    fn test_unknown_tag_parses_but_does_not_resolve() {
        let desc =
            DescriptorFile::from_json(r#"{"backingfile":"m.bk","nrow":1,"ncol":1,"type":3}"#)
                .unwrap();
        assert!(desc.matrix.storage_type().is_err());
    }

    #[test]
    fn test_missing_field_rejected() {
        let err = DescriptorFile::from_json(r#"{"backingfile":"m.bk","nrow":1}"#).unwrap_err();
        assert!(matches!(err, Error::Descriptor(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let desc = DescriptorFile {
            backingfile: PathBuf::from("x.bk"),
            matrix: MatrixDescriptor::new(4, 5, StorageType::F64),
        };
        let json = desc.to_json().unwrap();
        assert_eq!(DescriptorFile::from_json(&json).unwrap(), desc);
    }
}
