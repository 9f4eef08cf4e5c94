//! Error types for stack access

use crate::item::ItemKind;

/// Result type for evaluation stack operations
pub type StackResult<T> = Result<T, StackError>;

/// Result type for accessor operations
pub type AccessResult<T> = Result<T, AccessError>;

/// Evaluation stack errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    /// Push would exceed the configured stack size
    #[error("Stack overflow (max size {max_size})")]
    Overflow {
        /// Configured maximum number of items
        max_size: usize,
    },

    /// Pop or peek past the bottom of the stack
    #[error("Stack underflow")]
    Underflow,
}

/// Errors surfaced by [`StackAccessor`](crate::StackAccessor)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// The popped item was neither an interop wrapper of the requested type
    /// nor itself viewable as that type. The item has been released.
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        /// Requested Rust type
        expected: &'static str,
        /// Kind of the item that was popped
        got: ItemKind,
    },

    /// Underlying stack failure
    #[error(transparent)]
    Stack(#[from] StackError),
}

/// Errors from building or parsing a [`UInt160`](crate::UInt160)
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScriptHashError {
    /// Input did not hold exactly 20 bytes
    #[error("Invalid script hash length: expected 20 bytes, got {0}")]
    InvalidLength(usize),

    /// Input was not valid hexadecimal
    #[error("Invalid script hash hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Errors from loading a [`StackConfig`](crate::StackConfig)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config document is not valid TOML for this schema
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values parsed but violate a constraint
    #[error("Invalid config: {0}")]
    Invalid(String),
}
