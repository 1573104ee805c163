//! Element type constraints for file-backed matrices
//!
//! Two sides of every extraction: the type an element has on disk
//! ([`StorageElement`]) and the type it is widened to in the result
//! ([`OutputElement`]).

use alloc::vec::Vec;

use crate::format::{OutputKind, StorageType};
use crate::values::Values;

/// Types an extraction result can be made of
pub trait OutputElement: Copy + PartialEq + core::fmt::Debug + Sized {
    /// Output kind this type represents
    const KIND: OutputKind;

    /// Wrap a filled buffer in the matching [`Values`] variant
    fn into_values(values: Vec<Self>) -> Values;
}

impl OutputElement for i32 {
    const KIND: OutputKind = OutputKind::Integer;

    fn into_values(values: Vec<Self>) -> Values {
        Values::Integer(values)
    }
}

impl OutputElement for f64 {
    const KIND: OutputKind = OutputKind::Real;

    fn into_values(values: Vec<Self>) -> Values {
        Values::Real(values)
    }
}

/// Types that can appear as on-disk elements
///
/// Implementors are plain-old-data so they can be read straight out of
/// mapped bytes. The widening to [`StorageElement::Output`] must be lossless.
pub trait StorageElement: bytemuck::Pod {
    /// Tag identifying this encoding
    const STORAGE_TYPE: StorageType;

    /// Type values are widened to in results
    type Output: OutputElement;

    /// Convert from little-endian byte order to native
    fn le_to_native(self) -> Self;

    /// Lossless widening to the output type
    fn widen(self) -> Self::Output;

    /// Width of one element on disk
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }
}

macro_rules! impl_integer_element {
    ($type:ty, $variant:ident) => {
        impl StorageElement for $type {
            const STORAGE_TYPE: StorageType = StorageType::$variant;
            type Output = i32;

            fn le_to_native(self) -> Self {
                <$type>::from_le(self)
            }

            fn widen(self) -> i32 {
                i32::from(self)
            }
        }
    };
}

impl_integer_element!(u8, U8);
impl_integer_element!(u16, U16);
impl_integer_element!(i32, I32);

impl StorageElement for f64 {
    const STORAGE_TYPE: StorageType = StorageType::F64;
    type Output = f64;

    fn le_to_native(self) -> Self {
        f64::from_bits(u64::from_le(self.to_bits()))
    }

    fn widen(self) -> f64 {
        self
    }
}
