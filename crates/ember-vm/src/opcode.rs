//! OpCode definitions for the Ember VM
//!
//! Instructions are encoded as a flat byte stream: one opcode byte, followed
//! by that opcode's operand bytes (if any). The only operand today is the
//! one-byte constant pool index of `OP_CONSTANT`, which bounds a single
//! chunk to 256 constants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Virtual machine instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum OpCode {
    /// Push constant from pool: operand is the pool index
    Constant = 0,
    /// Addition: pop b, pop a, push a + b
    Add = 1,
    /// Subtraction: pop b, pop a, push a - b
    Subtract = 2,
    /// Multiplication: pop b, pop a, push a * b
    Multiply = 3,
    /// Division: pop b, pop a, push a / b
    Divide = 4,
    /// Negation: pop v, push -v
    Negate = 5,
    /// Pop the final result and stop execution
    Return = 6,
}

impl OpCode {
    /// Get opcode from byte value
    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(OpCode::Constant),
            1 => Some(OpCode::Add),
            2 => Some(OpCode::Subtract),
            3 => Some(OpCode::Multiply),
            4 => Some(OpCode::Divide),
            5 => Some(OpCode::Negate),
            6 => Some(OpCode::Return),
            _ => None,
        }
    }

    /// Convert opcode to byte value
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Number of operand bytes following the opcode byte.
    pub fn operand_len(self) -> usize {
        match self {
            OpCode::Constant => 1,
            _ => 0,
        }
    }

    /// Get human-readable mnemonic
    pub fn name(self) -> &'static str {
        match self {
            OpCode::Constant => "OP_CONSTANT",
            OpCode::Add => "OP_ADD",
            OpCode::Subtract => "OP_SUBTRACT",
            OpCode::Multiply => "OP_MULTIPLY",
            OpCode::Divide => "OP_DIVIDE",
            OpCode::Negate => "OP_NEGATE",
            OpCode::Return => "OP_RETURN",
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
