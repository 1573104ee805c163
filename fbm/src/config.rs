//! Options for mapping a backing file

/// Configuration for opening a memory-mapped matrix
#[derive(Debug, Clone, Default)]
pub struct MapConfig {
    /// Bytes to skip at the start of the backing file before element 0
    pub header_offset: u64,
    /// Pre-fault the whole mapping on open
    pub populate: bool,
    /// Reject backing files with trailing bytes past the last element
    pub strict_length: bool,
}

impl MapConfig {
    /// Config for a backing file whose data starts after `header_offset` bytes
    pub fn with_header_offset(header_offset: u64) -> Self {
        Self {
            header_offset,
            ..Self::default()
        }
    }

    /// Set whether pages are pre-faulted on open
    pub fn with_populate(mut self, populate: bool) -> Self {
        self.populate = populate;
        self
    }

    /// Set whether the data length must match the declared shape exactly
    pub fn with_strict_length(mut self, strict_length: bool) -> Self {
        self.strict_length = strict_length;
        self
    }
}
