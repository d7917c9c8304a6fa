//! Error types for the VM and (future) compiler

use thiserror::Error;

/// VM runtime errors
///
/// Every variant names the instruction that failed: its byte offset in the
/// chunk and, where available, the source line recorded for that byte.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    /// Push past the fixed stack capacity
    #[error("Stack overflow at offset {offset} (line {line})")]
    StackOverflow { offset: usize, line: u32 },

    /// Pop from an empty stack
    #[error("Stack underflow at offset {offset} (line {line})")]
    StackUnderflow { offset: usize, line: u32 },

    /// Constant operand outside the pool
    #[error("Invalid constant index {index} at offset {offset} (line {line})")]
    InvalidConstant {
        index: usize,
        offset: usize,
        line: u32,
    },

    /// Opcode byte not in the instruction set
    #[error("Invalid opcode {byte} at offset {offset} (line {line})")]
    InvalidOpcode { byte: u8, offset: usize, line: u32 },

    /// Instruction stream ended without OP_RETURN (or mid-instruction)
    #[error("Unexpected end of bytecode at offset {offset}")]
    UnexpectedEnd { offset: usize },
}

/// Compiler errors
///
/// Reserved for a front end that translates source text into chunks. The VM
/// never produces these, but downstream callers handle them uniformly as a
/// terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// Chunk constant operands are one byte wide
    #[error("Too many constants in one chunk (max 256)")]
    TooManyConstants,

    /// Compiler error with message
    #[error("Compiler error: {0}")]
    Error(String),
}
