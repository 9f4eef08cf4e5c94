//! Evaluation stack configuration
//!
//! Loaded from TOML. Every key is optional:
//!
//! ```toml
//! max_stack_size = 2048
//! initial_capacity = 64
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default maximum number of items on one evaluation stack
pub const DEFAULT_MAX_STACK_SIZE: usize = 2048;

/// Default number of slots preallocated for a new stack
pub const DEFAULT_INITIAL_CAPACITY: usize = 64;

/// Largest number of slots a stack will preallocate
pub const MAX_INITIAL_CAPACITY: usize = 64 * 1024;

/// Limits for a [`VecStack`](crate::VecStack)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Maximum number of items; pushes beyond this fail with overflow
    pub max_stack_size: usize,

    /// Slots reserved up front
    pub initial_capacity: usize,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            max_stack_size: DEFAULT_MAX_STACK_SIZE,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl StackConfig {
    /// Create a config with a specific maximum size
    pub fn with_max_stack_size(max_stack_size: usize) -> Self {
        Self {
            max_stack_size,
            initial_capacity: DEFAULT_INITIAL_CAPACITY.min(max_stack_size),
        }
    }

    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse config from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: StackConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_stack_size == 0 {
            return Err(ConfigError::Invalid(
                "max_stack_size must be greater than zero".to_string(),
            ));
        }

        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ConfigError::Invalid(format!(
                "initial_capacity ({}) exceeds the preallocation limit ({})",
                self.initial_capacity, MAX_INITIAL_CAPACITY
            )));
        }

        if self.initial_capacity > self.max_stack_size {
            return Err(ConfigError::Invalid(format!(
                "initial_capacity ({}) exceeds max_stack_size ({})",
                self.initial_capacity, self.max_stack_size
            )));
        }

        Ok(())
    }
}
