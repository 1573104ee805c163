//! FBM - Read-only File-Backed Matrix Access
//!
//! This library maps file-backed matrices into memory and extracts
//! arbitrary selections of their elements into dense, typed results.
//!
//! ## Architecture
//!
//! FBM separates format definitions from I/O:
//!
//! - **fbm-core**: Format definitions, handle traits, validation and the
//!   extraction engine (no I/O)
//! - **fbm**: Memory-mapped backing files, descriptor sidecars, and logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fbm::{MapConfig, MmapFbm, Values};
//!
//! fn example() -> fbm::Result<()> {
//!     let matrix = MmapFbm::from_descriptor_file("scores.json", &MapConfig::default())?;
//!
//!     // 1-based indices, any order, duplicates allowed
//!     let picked = matrix.extract_vector(&[4, 4, 1])?;
//!     let sub = matrix.extract_matrix(&[3, 1], &[2, 1])?;
//!
//!     if let Values::Integer(v) = picked {
//!         println!("picked {v:?} and a {:?} sub-matrix", sub.dimensions());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Storage types
//!
//! | tag | on disk          | result  |
//! |-----|------------------|---------|
//! | 1   | `u8`             | `i32`   |
//! | 2   | `u16`            | `i32`   |
//! | 4   | `i32`            | `i32`   |
//! | 8   | `f64`            | `f64`   |

// Re-export core abstractions and format definitions
pub use fbm_core::{
    // Extraction
    extract_matrix, extract_vector, DenseMatrix, Value, Values,
    // Format definitions
    MatrixDescriptor, OutputKind, StorageType,
    // Handles
    MatrixHandle, SliceMatrix, StorageBackend,
    // Core errors
    Axis, FbmError,
};

pub mod config;
#[cfg(feature = "serde")]
pub mod descriptor;
pub mod error;
#[cfg(feature = "mmap")]
pub mod mmap_backend;

pub use config::MapConfig;
#[cfg(feature = "serde")]
pub use descriptor::DescriptorFile;
pub use error::{Error, Result};
#[cfg(feature = "mmap")]
pub use mmap_backend::MmapFbm;
