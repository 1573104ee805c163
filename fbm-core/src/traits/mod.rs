//! Abstract interfaces for file-backed matrices
//!
//! Element type constraints and the handle contract the extraction engine
//! consumes.

pub mod backend;
pub mod element;

pub use backend::{MatrixHandle, StorageBackend};
pub use element::{OutputElement, StorageElement};
