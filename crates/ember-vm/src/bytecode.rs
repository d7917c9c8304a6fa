//! Bytecode format and data structures

use crate::memory::DynArray;
use crate::opcode::OpCode;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Constant pool for bytecode.
///
/// Append-only: indices are stable once assigned and duplicates are
/// permitted (no interning).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConstantPool {
    values: DynArray<Value>,
}

impl ConstantPool {
    /// Create a new empty constant pool
    pub fn new() -> Self {
        Self {
            values: DynArray::new(),
        }
    }

    /// Add a constant value and return its index
    pub fn add_constant(&mut self, value: Value) -> usize {
        self.values.push(value);
        self.values.len() - 1
    }

    /// Get constant by index
    pub fn get_constant(&self, index: usize) -> Option<Value> {
        self.values.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Release the pool's storage and reset it to empty.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

/// A self-contained unit of bytecode: instruction bytes, per-byte source
/// lines, and an owned constant pool.
///
/// `code` and `lines` stay the same length at all times; both are appended
/// to in one call by [`Chunk::write`]. Operand bytes are not validated at
/// append time — a well-formed producer keeps every `OP_CONSTANT` operand
/// inside the pool, and the VM checks at execution time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Chunk {
    code: DynArray<u8>,
    lines: DynArray<u32>,
    constants: ConstantPool,
}

impl Chunk {
    /// Create a new empty chunk
    pub fn new() -> Self {
        Self {
            code: DynArray::new(),
            lines: DynArray::new(),
            constants: ConstantPool::new(),
        }
    }

    /// Append one byte (opcode or operand) with its originating source line.
    pub fn write(&mut self, byte: u8, line: u32) {
        self.code.push(byte);
        self.lines.push(line);
    }

    /// Append an opcode byte with its originating source line.
    pub fn write_op(&mut self, op: OpCode, line: u32) {
        self.write(op.as_u8(), line);
    }

    /// Add a constant to the pool and return its index.
    pub fn add_constant(&mut self, value: Value) -> usize {
        self.constants.add_constant(value)
    }

    /// Release all storage and reset the chunk to the empty state.
    pub fn free(&mut self) {
        self.code.clear();
        self.lines.clear();
        self.constants.clear();
    }

    /// Number of instruction bytes.
    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Instruction byte at `offset`.
    pub fn byte(&self, offset: usize) -> Option<u8> {
        self.code.get(offset).copied()
    }

    /// Source line of the byte at `offset`.
    pub fn line(&self, offset: usize) -> Option<u32> {
        self.lines.get(offset).copied()
    }

    pub fn code(&self) -> &[u8] {
        self.code.as_slice()
    }

    pub fn constants(&self) -> &ConstantPool {
        &self.constants
    }
}
