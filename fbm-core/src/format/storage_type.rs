//! Storage-type tags for file-backed matrices
//!
//! The numeric value of each tag is the on-disk width of one element in
//! bytes. Elements are packed little-endian with no padding.

use crate::{FbmError, Result};

/// On-disk element encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StorageType {
    /// Unsigned 8-bit integer
    U8 = 1,
    /// Unsigned 16-bit integer
    U16 = 2,
    /// Signed 32-bit integer
    I32 = 4,
    /// 64-bit IEEE 754 float
    F64 = 8,
}

/// Numeric kind of an extraction result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Held as `i32`
    Integer,
    /// Held as `f64`
    Real,
}

impl StorageType {
    /// Every recognized encoding, in tag order
    pub const ALL: [StorageType; 4] = [
        StorageType::U8,
        StorageType::U16,
        StorageType::I32,
        StorageType::F64,
    ];

    /// Resolve a raw tag. Unknown tags are rejected rather than defaulted.
    pub const fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            1 => Ok(StorageType::U8),
            2 => Ok(StorageType::U16),
            4 => Ok(StorageType::I32),
            8 => Ok(StorageType::F64),
            other => Err(FbmError::UnsupportedStorageType(other)),
        }
    }

    /// Raw tag as stored in a descriptor
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Width of one element on disk
    pub const fn size_bytes(self) -> usize {
        self as usize
    }

    /// Output kind used for values of this encoding
    pub const fn output_kind(self) -> OutputKind {
        match self {
            StorageType::U8 | StorageType::U16 | StorageType::I32 => OutputKind::Integer,
            StorageType::F64 => OutputKind::Real,
        }
    }

    /// Human-readable element type name
    pub const fn name(self) -> &'static str {
        match self {
            StorageType::U8 => "unsigned char",
            StorageType::U16 => "unsigned short",
            StorageType::I32 => "integer",
            StorageType::F64 => "double",
        }
    }
}

impl TryFrom<u8> for StorageType {
    type Error = FbmError;

    fn try_from(tag: u8) -> Result<Self> {
        Self::from_tag(tag)
    }
}

impl core::fmt::Display for StorageType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip() {
        for ty in StorageType::ALL {
            assert_eq!(StorageType::from_tag(ty.tag()), Ok(ty));
            assert_eq!(ty.size_bytes(), ty.tag() as usize);
        }
    }

    #[test]
    fn test_unknown_tags_rejected() {
        for tag in [0u8, 3, 5, 6, 7, 9, 16, 255] {
            assert_eq!(
                StorageType::try_from(tag),
                Err(FbmError::UnsupportedStorageType(tag))
            );
        }
    }

    #[test]
    fn test_output_kind() {
        assert_eq!(StorageType::U8.output_kind(), OutputKind::Integer);
        assert_eq!(StorageType::U16.output_kind(), OutputKind::Integer);
        assert_eq!(StorageType::I32.output_kind(), OutputKind::Integer);
        assert_eq!(StorageType::F64.output_kind(), OutputKind::Real);
    }
}
