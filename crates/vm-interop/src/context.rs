//! ExecutionContext trait - what the accessor needs from a running script
//!
//! A context exposes the script hash it executes and its evaluation stack.
//! Instruction dispatch, call frames and script loading stay with the VM.

use crate::config::StackConfig;
use crate::script_hash::UInt160;
use crate::stack::{EvaluationStack, VecStack};

/// Execution context of one script.
pub trait ExecutionContext {
    /// Hash of the script this context runs
    fn script_hash(&self) -> UInt160;

    /// Evaluation stack of this context
    fn evaluation_stack(&self) -> &dyn EvaluationStack;

    /// Mutable evaluation stack of this context
    fn evaluation_stack_mut(&mut self) -> &mut dyn EvaluationStack;
}

/// Minimal context owning a script hash and a [`VecStack`].
#[derive(Debug, Clone)]
pub struct ScriptContext {
    script_hash: UInt160,
    evaluation_stack: VecStack,
}

impl ScriptContext {
    /// Create a context with a default-sized stack
    pub fn new(script_hash: UInt160) -> Self {
        Self::with_config(script_hash, &StackConfig::default())
    }

    /// Create a context whose stack is sized from `config`
    pub fn with_config(script_hash: UInt160, config: &StackConfig) -> Self {
        Self {
            script_hash,
            evaluation_stack: VecStack::with_config(config),
        }
    }

    /// Concrete stack, for inspection
    pub fn stack(&self) -> &VecStack {
        &self.evaluation_stack
    }
}

impl ExecutionContext for ScriptContext {
    fn script_hash(&self) -> UInt160 {
        self.script_hash
    }

    fn evaluation_stack(&self) -> &dyn EvaluationStack {
        &self.evaluation_stack
    }

    fn evaluation_stack_mut(&mut self) -> &mut dyn EvaluationStack {
        &mut self.evaluation_stack
    }
}
