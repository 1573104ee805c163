//! Error types for FBM extraction

/// Which index list an out-of-range index came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Position into the flattened, column-major matrix
    Element,
    /// Row index of a sub-matrix selection
    Row,
    /// Column index of a sub-matrix selection
    Column,
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Axis::Element => write!(f, "element"),
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Errors that can occur during extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FbmError {
    /// The storage-type tag is not one of the recognized encodings
    UnsupportedStorageType(u8),
    /// A 1-based index fell outside `[1, limit]`
    IndexOutOfRange {
        axis: Axis,
        index: usize,
        limit: usize,
    },
    /// The output container could not be allocated
    AllocationFailed {
        /// Number of elements requested, saturated on overflow
        requested: usize,
    },
    /// Backing bytes are shorter than the declared shape requires
    InsufficientBuffer { required: usize, available: usize },
}

impl core::fmt::Display for FbmError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FbmError::UnsupportedStorageType(tag) => {
                write!(f, "Unsupported storage type tag {tag}")
            }
            FbmError::IndexOutOfRange { axis, index, limit } => {
                write!(f, "Subscript out of bounds: {axis} index {index} not in [1, {limit}]")
            }
            FbmError::AllocationFailed { requested } => {
                write!(f, "Failed to allocate output of {requested} elements")
            }
            FbmError::InsufficientBuffer {
                required,
                available,
            } => write!(
                f,
                "Insufficient backing store: need {required} bytes, have {available}"
            ),
        }
    }
}

impl core::error::Error for FbmError {}

/// Result type for FBM operations
pub type Result<T> = core::result::Result<T, FbmError>;
