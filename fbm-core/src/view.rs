//! Zero-copy typed view over raw matrix bytes

use core::marker::PhantomData;

use crate::traits::StorageElement;
use crate::validation::validate_byte_len;
use crate::Result;

/// Interprets a byte slice as `nelem` packed little-endian `T`s
///
/// The bytes are borrowed, never copied, and need no particular alignment.
#[derive(Debug, Clone, Copy)]
pub struct TypedView<'a, T: StorageElement> {
    bytes: &'a [u8],
    nelem: usize,
    _phantom: PhantomData<T>,
}

impl<'a, T: StorageElement> TypedView<'a, T> {
    /// Create a view over the first `nelem` elements of `bytes`
    ///
    /// Trailing bytes past `nelem` elements are ignored.
    pub fn new(bytes: &'a [u8], nelem: usize) -> Result<Self> {
        validate_byte_len::<T>(bytes.len(), nelem)?;
        Ok(Self {
            bytes,
            nelem,
            _phantom: PhantomData,
        })
    }

    /// Number of elements addressable through this view
    pub fn nelem(&self) -> usize {
        self.nelem
    }

    /// Value at 0-based linear `offset`, widened to the output type
    ///
    /// Callers guarantee `offset < nelem`. Slicing still bounds-checks, so a
    /// violation panics instead of reading unrelated memory.
    #[inline]
    pub fn read_at(&self, offset: usize) -> T::Output {
        debug_assert!(offset < self.nelem);
        let width = core::mem::size_of::<T>();
        let start = offset * width;
        let raw: T = bytemuck::pod_read_unaligned(&self.bytes[start..start + width]);
        raw.le_to_native().widen()
    }
}
