//! ItemFactory trait - stack item construction
//!
//! The engine decides how items are built; the accessor only asks for an
//! item of a given kind. Every method is total.

use num_bigint::BigInt;

use crate::item::{InteropObject, StackItem};

/// Builds stack items from native payloads.
pub trait ItemFactory {
    /// Create a boolean item
    fn create_boolean(&self, value: bool) -> StackItem;

    /// Create an integer item
    fn create_integer(&self, value: BigInt) -> StackItem;

    /// Create a byte array item
    fn create_byte_array(&self, value: Vec<u8>) -> StackItem;

    /// Create an item wrapping a host object
    fn create_interop(&self, value: InteropObject) -> StackItem;

    /// Create an array item from already-built children
    fn create_array(&self, items: Vec<StackItem>) -> StackItem;
}

/// Factory that maps each payload straight onto its [`StackItem`] variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultItemFactory;

impl ItemFactory for DefaultItemFactory {
    #[inline]
    fn create_boolean(&self, value: bool) -> StackItem {
        StackItem::Boolean(value)
    }

    #[inline]
    fn create_integer(&self, value: BigInt) -> StackItem {
        StackItem::Integer(value)
    }

    #[inline]
    fn create_byte_array(&self, value: Vec<u8>) -> StackItem {
        StackItem::ByteArray(value)
    }

    #[inline]
    fn create_interop(&self, value: InteropObject) -> StackItem {
        StackItem::Interop(value)
    }

    #[inline]
    fn create_array(&self, items: Vec<StackItem>) -> StackItem {
        StackItem::Array(items)
    }
}
