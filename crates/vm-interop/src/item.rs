//! StackItem - tagged representation of evaluation stack entries
//!
//! Every entry on the evaluation stack is one of five kinds:
//!
//! ```text
//! Boolean    bool
//! Integer    arbitrary-precision signed integer
//! ByteArray  owned byte buffer
//! Interop    shared reference to a host object of erased type
//! Array      ordered child items (may mix kinds)
//! ```
//!
//! Items own their payloads. Dropping an item releases its buffers and its
//! share of any wrapped host object; nested arrays release their children.

use std::any::{type_name, Any};
use std::fmt;
use std::rc::Rc;

use num_bigint::BigInt;

/// Discriminant of a [`StackItem`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Boolean item
    Boolean,
    /// Integer item
    Integer,
    /// Byte buffer item
    ByteArray,
    /// Host object reference
    Interop,
    /// Array of items
    Array,
}

impl ItemKind {
    /// Human-readable kind name
    pub const fn name(self) -> &'static str {
        match self {
            ItemKind::Boolean => "Boolean",
            ItemKind::Integer => "Integer",
            ItemKind::ByteArray => "ByteArray",
            ItemKind::Interop => "Interop",
            ItemKind::Array => "Array",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// InteropObject
// ============================================================================

/// Type-erased host object held by an interop item.
///
/// The object is shared through an `Rc`; the stack item holds one strong
/// reference and gives it up when dropped. The concrete type is recovered
/// with a `TypeId` check, never by unchecked casts.
#[derive(Clone)]
pub struct InteropObject {
    value: Rc<dyn Any>,
    type_name: &'static str,
}

impl InteropObject {
    /// Wrap a host reference
    pub fn new<T: Any>(value: Rc<T>) -> Self {
        Self {
            value,
            type_name: type_name::<T>(),
        }
    }

    /// Name of the wrapped Rust type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check whether the wrapped object is a `T`
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Get a new reference to the wrapped object if it is a `T`
    pub fn downcast<T: Any>(&self) -> Option<Rc<T>> {
        Rc::clone(&self.value).downcast::<T>().ok()
    }

    /// Take the wrapped reference out as a `T`, or hand the wrapper back
    pub fn into_inner<T: Any>(self) -> Result<Rc<T>, Self> {
        let type_name = self.type_name;
        self.value
            .downcast::<T>()
            .map_err(|value| Self { value, type_name })
    }

    /// Check whether both wrappers share the same host object
    pub fn ptr_eq(&self, other: &InteropObject) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }
}

impl PartialEq for InteropObject {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for InteropObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InteropObject({})", self.type_name)
    }
}

// ============================================================================
// StackItem
// ============================================================================

/// A single evaluation stack entry.
#[derive(Debug, Clone, PartialEq)]
pub enum StackItem {
    /// Boolean value
    Boolean(bool),
    /// Arbitrary-precision integer
    Integer(BigInt),
    /// Byte buffer
    ByteArray(Vec<u8>),
    /// Host object reference
    Interop(InteropObject),
    /// Ordered child items
    Array(Vec<StackItem>),
}

impl StackItem {
    /// Kind discriminant of this item
    pub fn kind(&self) -> ItemKind {
        match self {
            StackItem::Boolean(_) => ItemKind::Boolean,
            StackItem::Integer(_) => ItemKind::Integer,
            StackItem::ByteArray(_) => ItemKind::ByteArray,
            StackItem::Interop(_) => ItemKind::Interop,
            StackItem::Array(_) => ItemKind::Array,
        }
    }

    /// Get the boolean payload
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StackItem::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the integer payload
    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            StackItem::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// Get the byte payload
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            StackItem::ByteArray(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Get the interop wrapper
    pub fn as_interop(&self) -> Option<&InteropObject> {
        match self {
            StackItem::Interop(obj) => Some(obj),
            _ => None,
        }
    }

    /// Get the array children
    pub fn as_array(&self) -> Option<&[StackItem]> {
        match self {
            StackItem::Array(items) => Some(items),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Contract {
        id: u32,
    }

    #[test]
    fn test_kind() {
        assert_eq!(StackItem::Boolean(true).kind(), ItemKind::Boolean);
        assert_eq!(StackItem::Integer(BigInt::from(7)).kind(), ItemKind::Integer);
        assert_eq!(StackItem::ByteArray(vec![]).kind(), ItemKind::ByteArray);
        assert_eq!(StackItem::Array(vec![]).kind(), ItemKind::Array);
        let obj = InteropObject::new(Rc::new(Contract { id: 1 }));
        assert_eq!(StackItem::Interop(obj).kind(), ItemKind::Interop);
    }

    #[test]
    fn test_accessors_match_kind_only() {
        let item = StackItem::ByteArray(vec![1, 2, 3]);
        assert_eq!(item.as_bytes(), Some(&[1u8, 2, 3][..]));
        assert!(item.as_bool().is_none());
        assert!(item.as_integer().is_none());
        assert!(item.as_interop().is_none());
        assert!(item.as_array().is_none());
    }

    #[test]
    fn test_interop_downcast() {
        let contract = Rc::new(Contract { id: 9 });
        let obj = InteropObject::new(Rc::clone(&contract));

        assert!(obj.is::<Contract>());
        assert!(!obj.is::<String>());
        assert!(obj.downcast::<String>().is_none());

        let back = obj.downcast::<Contract>().unwrap();
        assert_eq!(back.id, 9);
        assert!(Rc::ptr_eq(&back, &contract));
        assert_eq!(Rc::strong_count(&contract), 3);
    }

    #[test]
    fn test_interop_into_inner() {
        let contract = Rc::new(Contract { id: 4 });
        let obj = InteropObject::new(Rc::clone(&contract));

        let obj = obj.into_inner::<String>().unwrap_err();
        assert_eq!(Rc::strong_count(&contract), 2);

        let back = obj.into_inner::<Contract>().unwrap();
        assert_eq!(back.id, 4);
        assert_eq!(Rc::strong_count(&contract), 2);
    }

    #[test]
    fn test_drop_releases_interop() {
        let contract = Rc::new(Contract { id: 2 });
        let item = StackItem::Array(vec![
            StackItem::Interop(InteropObject::new(Rc::clone(&contract))),
            StackItem::Interop(InteropObject::new(Rc::clone(&contract))),
        ]);
        assert_eq!(Rc::strong_count(&contract), 3);
        drop(item);
        assert_eq!(Rc::strong_count(&contract), 1);
    }

    #[test]
    fn test_interop_equality_is_identity() {
        let a = Rc::new(Contract { id: 1 });
        let b = Rc::new(Contract { id: 1 });
        let wa = InteropObject::new(Rc::clone(&a));
        assert_eq!(wa, InteropObject::new(Rc::clone(&a)));
        assert_ne!(wa, InteropObject::new(b));
        assert!(format!("{:?}", wa).contains("Contract"));
    }
}
