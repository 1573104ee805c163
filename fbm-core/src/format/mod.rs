//! File-backed matrix format definitions
//!
//! Pure data definitions for the on-disk encoding. No I/O.

pub mod descriptor;
pub mod storage_type;

pub use descriptor::MatrixDescriptor;
pub use storage_type::{OutputKind, StorageType};
