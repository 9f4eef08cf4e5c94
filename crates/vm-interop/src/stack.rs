//! Evaluation stack interface and a bounded reference implementation
//!
//! The accessor only talks to the [`EvaluationStack`] trait. [`VecStack`] is
//! the in-crate implementation used by [`ScriptContext`](crate::ScriptContext),
//! the tests and the benchmarks.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────┐
//! │ item₂   peek(0)      │  ← top (last pushed)
//! │ item₁   peek(1)      │
//! │ item₀   peek(2)      │  ← bottom
//! └──────────────────────┘
//! ```

use tracing::debug;

use crate::config::{StackConfig, MAX_INITIAL_CAPACITY};
use crate::error::{StackError, StackResult};
use crate::item::StackItem;

/// LIFO storage of stack items for one execution context.
///
/// Implementations must report out-of-range access through `StackError`
/// rather than panicking.
pub trait EvaluationStack {
    /// Push an item onto the top
    fn push(&mut self, item: StackItem) -> StackResult<()>;

    /// Remove and return the top item
    fn pop(&mut self) -> StackResult<StackItem>;

    /// Borrow the item `depth` slots below the top (0 = top)
    fn peek(&self, depth: usize) -> StackResult<&StackItem>;

    /// Number of items on the stack
    fn len(&self) -> usize;

    /// Check if the stack is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `Vec`-backed evaluation stack with a maximum size.
#[derive(Debug, Clone)]
pub struct VecStack {
    items: Vec<StackItem>,
    max_size: usize,
}

impl VecStack {
    /// Create a stack with the default configuration
    pub fn new() -> Self {
        Self::with_config(&StackConfig::default())
    }

    /// Create a stack sized from `config`.
    ///
    /// The preallocation never exceeds `max_stack_size` or
    /// [`MAX_INITIAL_CAPACITY`], even for a config that fails
    /// [`StackConfig::validate`]. A zero `max_stack_size` gives a stack that
    /// rejects every push with [`StackError::Overflow`].
    pub fn with_config(config: &StackConfig) -> Self {
        let capacity = config
            .initial_capacity
            .min(config.max_stack_size)
            .min(MAX_INITIAL_CAPACITY);
        Self {
            items: Vec::with_capacity(capacity),
            max_size: config.max_stack_size,
        }
    }

    /// Maximum number of items this stack accepts
    #[inline]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Items from bottom to top
    pub fn as_slice(&self) -> &[StackItem] {
        &self.items
    }

    /// Drop every item on the stack
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl Default for VecStack {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluationStack for VecStack {
    #[inline]
    fn push(&mut self, item: StackItem) -> StackResult<()> {
        if self.items.len() >= self.max_size {
            debug!(target: "vm_interop::stack", max_size = self.max_size, "stack overflow");
            return Err(StackError::Overflow {
                max_size: self.max_size,
            });
        }
        self.items.push(item);
        Ok(())
    }

    #[inline]
    fn pop(&mut self) -> StackResult<StackItem> {
        self.items.pop().ok_or_else(|| {
            debug!(target: "vm_interop::stack", "pop on empty stack");
            StackError::Underflow
        })
    }

    #[inline]
    fn peek(&self, depth: usize) -> StackResult<&StackItem> {
        let len = self.items.len();
        if depth >= len {
            return Err(StackError::Underflow);
        }
        Ok(&self.items[len - 1 - depth])
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }
}

// ============================================================================
// Tests
// ============================================================================
