//! Validation utilities for file-backed matrices
//!
//! Pure functions with no I/O. This is the only place where caller-facing
//! 1-based indices become 0-based storage offsets.

pub mod bounds;

pub use bounds::{to_offset, translate_indices, validate_byte_len};
