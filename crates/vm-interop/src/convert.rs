//! Traits for converting between native values and stack items.
//!
//! [`IntoStackItem`] selects the factory method for a native type on push.
//! [`FromStackItem`] decides which popped items a requested type accepts.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use vm_interop::{StackAccessor, StackItem};
//!
//! accessor.push(42u32)?;
//! accessor.push(b"payload".as_slice())?;
//! accessor.push_interop(Rc::new(Block { index: 7 }))?;
//!
//! let block: Rc<Block> = accessor.pop()?;   // unwrap an interop payload
//! let raw: StackItem = accessor.pop()?;     // take the item itself
//! ```

use std::any::Any;
use std::rc::Rc;

use num_bigint::BigInt;

use crate::factory::ItemFactory;
use crate::item::{InteropObject, StackItem};

/// Native value that can be pushed as a single stack item.
pub trait IntoStackItem {
    /// Build the matching item through `factory`
    fn into_stack_item(self, factory: &dyn ItemFactory) -> StackItem;
}

impl IntoStackItem for bool {
    #[inline]
    fn into_stack_item(self, factory: &dyn ItemFactory) -> StackItem {
        factory.create_boolean(self)
    }
}

impl IntoStackItem for BigInt {
    #[inline]
    fn into_stack_item(self, factory: &dyn ItemFactory) -> StackItem {
        factory.create_integer(self)
    }
}

macro_rules! impl_into_stack_item_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoStackItem for $ty {
                #[inline]
                fn into_stack_item(self, factory: &dyn ItemFactory) -> StackItem {
                    factory.create_integer(BigInt::from(self))
                }
            }
        )*
    };
}

impl_into_stack_item_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl IntoStackItem for Vec<u8> {
    #[inline]
    fn into_stack_item(self, factory: &dyn ItemFactory) -> StackItem {
        factory.create_byte_array(self)
    }
}

impl IntoStackItem for &[u8] {
    #[inline]
    fn into_stack_item(self, factory: &dyn ItemFactory) -> StackItem {
        factory.create_byte_array(self.to_vec())
    }
}

impl<const N: usize> IntoStackItem for [u8; N] {
    #[inline]
    fn into_stack_item(self, factory: &dyn ItemFactory) -> StackItem {
        factory.create_byte_array(self.to_vec())
    }
}

/// Type that a popped stack item can be turned into.
///
/// On rejection the item is handed back so the caller decides when it is
/// released.
pub trait FromStackItem: Sized {
    /// Convert `item`, or return it unchanged if it does not fit
    fn from_stack_item(item: StackItem) -> Result<Self, StackItem>;
}

/// Unwraps an interop item holding a `T`.
impl<T: Any> FromStackItem for Rc<T> {
    fn from_stack_item(item: StackItem) -> Result<Self, StackItem> {
        match item {
            StackItem::Interop(obj) => obj.into_inner::<T>().map_err(StackItem::Interop),
            other => Err(other),
        }
    }
}

/// Any item is already a `StackItem`; ownership moves to the caller.
impl FromStackItem for StackItem {
    #[inline]
    fn from_stack_item(item: StackItem) -> Result<Self, StackItem> {
        Ok(item)
    }
}

/// The interop wrapper itself, without unwrapping its payload.
impl FromStackItem for InteropObject {
    fn from_stack_item(item: StackItem) -> Result<Self, StackItem> {
        match item {
            StackItem::Interop(obj) => Ok(obj),
            other => Err(other),
        }
    }
}
