#![no_std]

//! FBM Core - File-Backed Matrix Definitions and Extraction
//!
//! This crate provides the on-disk format definitions, handle traits and
//! the typed extraction engine for file-backed matrices. It performs no
//! I/O: callers supply a [`MatrixHandle`] over bytes that are already
//! resident (memory-mapped or otherwise directly addressable).
//!
//! ```
//! use fbm_core::{extract_matrix, MatrixDescriptor, SliceMatrix, StorageType, Values};
//!
//! let bytes = [10u8, 20, 30, 40, 50, 60];
//! let handle = SliceMatrix::new(MatrixDescriptor::new(3, 2, StorageType::U8), &bytes);
//!
//! let sub = extract_matrix(&handle, &[3, 1], &[2, 1]).unwrap();
//! assert_eq!(sub.values(), &Values::Integer(vec![60, 30, 40, 10]));
//! ```

extern crate alloc;

pub mod accessor;
pub mod error;
pub mod extract;
pub mod format;
pub mod slice;
pub mod traits;
pub mod validation;
pub mod values;
pub mod view;

pub use accessor::{SubMatAccessor, VecAccessor};
pub use error::*;
pub use extract::{extract_matrix, extract_vector};
pub use format::*;
pub use slice::SliceMatrix;
pub use traits::*;
pub use values::{DenseMatrix, Value, Values};
pub use view::TypedView;
