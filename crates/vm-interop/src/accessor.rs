//! StackAccessor - typed push/pop/peek over an evaluation stack
//!
//! The accessor is the boundary between host code and the VM's untyped
//! stack storage. It borrows the stack of one execution context, copies that
//! context's script hash, and uses an [`ItemFactory`] to build items.
//!
//! # Release discipline
//!
//! Peeks never change the stack. Every pop owns the removed item for the rest
//! of the call and drops it before returning, whichever way the call ends:
//! payload extracted, absent result, or type mismatch. The only exception is
//! a pop that hands the item itself to the caller.
//!
//! # Mismatch policy
//!
//! | operation                         | mismatch result                  |
//! |-----------------------------------|----------------------------------|
//! | `peek_*`, `pop_integer`, ...      | `None`                           |
//! | `pop_array::<T>` element          | element skipped                  |
//! | `pop::<T>`                        | `AccessError::TypeMismatch`      |

use std::any::{type_name, Any};
use std::rc::Rc;

use num_bigint::BigInt;
use tracing::{debug, trace};

use crate::context::ExecutionContext;
use crate::convert::{FromStackItem, IntoStackItem};
use crate::error::{AccessError, AccessResult};
use crate::factory::ItemFactory;
use crate::item::{InteropObject, StackItem};
use crate::script_hash::UInt160;
use crate::stack::EvaluationStack;

/// Typed view over one context's evaluation stack.
pub struct StackAccessor<'a> {
    factory: &'a dyn ItemFactory,
    stack: &'a mut dyn EvaluationStack,
    script_hash: UInt160,
}

impl<'a> StackAccessor<'a> {
    /// Bind to the stack and script hash of `context`
    pub fn new(factory: &'a dyn ItemFactory, context: &'a mut dyn ExecutionContext) -> Self {
        let script_hash = context.script_hash();
        Self {
            factory,
            stack: context.evaluation_stack_mut(),
            script_hash,
        }
    }

    /// Bind directly to a stack, for callers that have no context object
    pub fn with_stack(
        factory: &'a dyn ItemFactory,
        stack: &'a mut dyn EvaluationStack,
        script_hash: UInt160,
    ) -> Self {
        Self {
            factory,
            stack,
            script_hash,
        }
    }

    /// Script hash of the bound context
    #[inline]
    pub fn script_hash(&self) -> UInt160 {
        self.script_hash
    }

    // ========================================================================
    // Push
    // ========================================================================

    /// Push a boolean, integer or byte buffer
    pub fn push<V: IntoStackItem>(&mut self, value: V) -> AccessResult<()> {
        let item = value.into_stack_item(self.factory);
        trace!(target: "vm_interop::accessor", kind = %item.kind(), "push");
        self.stack.push(item)?;
        Ok(())
    }

    /// Push a host object as an interop item
    pub fn push_interop<T: Any>(&mut self, value: Rc<T>) -> AccessResult<()> {
        trace!(target: "vm_interop::accessor", ty = type_name::<T>(), "push interop");
        let item = self.factory.create_interop(InteropObject::new(value));
        self.stack.push(item)?;
        Ok(())
    }

    /// Push host objects as one array item of interop children, in order
    pub fn push_interop_array<T: Any>(&mut self, values: &[Rc<T>]) -> AccessResult<()> {
        trace!(
            target: "vm_interop::accessor",
            ty = type_name::<T>(),
            len = values.len(),
            "push interop array"
        );
        let children: Vec<StackItem> = values
            .iter()
            .map(|value| self.factory.create_interop(InteropObject::new(Rc::clone(value))))
            .collect();
        let item = self.factory.create_array(children);
        self.stack.push(item)?;
        Ok(())
    }

    // ========================================================================
    // Peek
    // ========================================================================

    fn peek_item(&self, depth: usize) -> Option<&StackItem> {
        self.stack.peek(depth).ok()
    }

    /// Copy the bytes at `depth` if that item is a byte array
    pub fn peek_byte_array(&self, depth: usize) -> Option<Vec<u8>> {
        self.peek_item(depth)?.as_bytes().map(<[u8]>::to_vec)
    }

    /// Copy the integer at `depth` if that item is an integer
    pub fn peek_integer(&self, depth: usize) -> Option<BigInt> {
        self.peek_item(depth)?.as_integer().cloned()
    }

    /// Read the boolean at `depth` if that item is a boolean
    pub fn peek_boolean(&self, depth: usize) -> Option<bool> {
        self.peek_item(depth)?.as_bool()
    }

    /// Share the host object at `depth` if it is an interop item holding a `T`
    pub fn peek<T: Any>(&self, depth: usize) -> Option<Rc<T>> {
        self.peek_item(depth)?.as_interop()?.downcast::<T>()
    }

    /// [`peek_byte_array`](Self::peek_byte_array) at the top
    pub fn peek_byte_array_top(&self) -> Option<Vec<u8>> {
        self.peek_byte_array(0)
    }

    /// [`peek`](Self::peek) at the top
    pub fn peek_top<T: Any>(&self) -> Option<Rc<T>> {
        self.peek(0)
    }

    // ========================================================================
    // Pop
    // ========================================================================

    fn pop_item(&mut self) -> AccessResult<StackItem> {
        let item = self.stack.pop()?;
        trace!(target: "vm_interop::accessor", kind = %item.kind(), "pop");
        Ok(item)
    }

    /// Pop the top item and return its integer value, if it is one
    pub fn pop_integer(&mut self) -> AccessResult<Option<BigInt>> {
        match self.pop_item()? {
            StackItem::Integer(value) => Ok(Some(value)),
            _ => Ok(None),
        }
    }

    /// Pop the top item and return its bytes, if it is a byte array
    pub fn pop_byte_array(&mut self) -> AccessResult<Option<Vec<u8>>> {
        match self.pop_item()? {
            StackItem::ByteArray(bytes) => Ok(Some(bytes)),
            _ => Ok(None),
        }
    }

    /// Pop the top item and return its boolean value, if it is one
    pub fn pop_boolean(&mut self) -> AccessResult<Option<bool>> {
        match self.pop_item()? {
            StackItem::Boolean(value) => Ok(Some(value)),
            _ => Ok(None),
        }
    }

    /// Pop the top item as a `T`.
    ///
    /// `Rc<U>` unwraps an interop item holding a `U`; [`StackItem`] and
    /// [`InteropObject`] take the item itself. Anything else is released and
    /// reported as [`AccessError::TypeMismatch`].
    pub fn pop<T: FromStackItem>(&mut self) -> AccessResult<T> {
        let item = self.pop_item()?;
        match T::from_stack_item(item) {
            Ok(value) => Ok(value),
            Err(rejected) => {
                let got = rejected.kind();
                drop(rejected);
                debug!(
                    target: "vm_interop::accessor",
                    expected = type_name::<T>(),
                    %got,
                    "pop type mismatch"
                );
                Err(AccessError::TypeMismatch {
                    expected: type_name::<T>(),
                    got,
                })
            }
        }
    }

    /// Pop an array item and collect every child that holds a `T`.
    ///
    /// Returns `None` if the top item is not an array. Children of any other
    /// kind or type are released and left out, so the result can be shorter
    /// than the array.
    pub fn pop_array<T: Any>(&mut self) -> AccessResult<Option<Vec<Rc<T>>>> {
        let children = match self.pop_item()? {
            StackItem::Array(children) => children,
            _ => return Ok(None),
        };

        let total = children.len();
        let values: Vec<Rc<T>> = children
            .into_iter()
            .filter_map(|child| <Rc<T>>::from_stack_item(child).ok())
            .collect();

        if values.len() < total {
            debug!(
                target: "vm_interop::accessor",
                ty = type_name::<T>(),
                dropped = total - values.len(),
                "pop array skipped children"
            );
        }

        Ok(Some(values))
    }
}
