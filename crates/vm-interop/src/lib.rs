//! vm-interop - typed access to a VM evaluation stack
//!
//! This crate is the boundary between host code embedding the VM and the VM's
//! untyped evaluation stack. It converts native values (booleans, integers,
//! byte buffers, host objects and arrays of host objects) into tagged stack
//! items on push, and back into native values on pop and peek.
//!
//! The VM itself stays outside: the accessor talks to it through three traits:
//! - [`ItemFactory`] builds stack items
//! - [`EvaluationStack`] stores them
//! - [`ExecutionContext`] exposes the stack and the script hash
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use vm_interop::{DefaultItemFactory, ScriptContext, StackAccessor, UInt160};
//!
//! struct Tx(u32);
//!
//! # fn main() -> Result<(), vm_interop::AccessError> {
//! let factory = DefaultItemFactory;
//! let mut ctx = ScriptContext::new(UInt160::ZERO);
//! let mut accessor = StackAccessor::new(&factory, &mut ctx);
//!
//! accessor.push(21u32)?;
//! assert_eq!(accessor.pop_integer()?, Some(21.into()));
//!
//! accessor.push_interop_array(&[Rc::new(Tx(1)), Rc::new(Tx(2))])?;
//! let txs: Vec<Rc<Tx>> = accessor.pop_array()?.unwrap_or_default();
//! assert_eq!(txs[1].0, 2);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod accessor;
pub mod config;
pub mod context;
pub mod convert;
pub mod error;
pub mod factory;
pub mod item;
pub mod script_hash;
pub mod stack;

pub use accessor::StackAccessor;
pub use config::StackConfig;
pub use context::{ExecutionContext, ScriptContext};
pub use convert::{FromStackItem, IntoStackItem};
pub use error::{AccessError, AccessResult, ConfigError, ScriptHashError, StackError, StackResult};
pub use factory::{DefaultItemFactory, ItemFactory};
pub use item::{InteropObject, ItemKind, StackItem};
pub use script_hash::UInt160;
pub use stack::{EvaluationStack, VecStack};

pub use num_bigint::BigInt;
