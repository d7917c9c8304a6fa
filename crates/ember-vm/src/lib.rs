//! Ember Virtual Machine
//!
//! This crate implements the bytecode core of the Ember language: a growable
//! chunk of instructions, a disassembler for diagnostics, and a stack-based
//! interpreter that executes a chunk to completion.
//!
//! # Architecture
//!
//! The VM follows a classic stack-machine design:
//! - Instructions are a flat byte stream; an opcode byte optionally followed
//!   by operand bytes (one-byte constant pool indices).
//! - A fixed 256-slot value stack, bounds-checked on every push and pop.
//! - Per-byte source line numbers kept parallel to the instruction stream.
//! - One `VM` instance per execution context; no shared global state.
//!
//! # Modules
//!
//! - `memory`: generic growable array storage
//! - `value`: runtime value type
//! - `opcode`: instruction set definitions
//! - `bytecode`: chunk format and constant pool
//! - `bytecode_debug`: disassembler
//! - `vm`: virtual machine execution engine
//! - `error`: error types for VM and (future) compiler

pub mod bytecode;
pub mod bytecode_debug;
pub mod error;
pub mod memory;
pub mod opcode;
pub mod value;
pub mod vm;

// Re-export main types
pub use bytecode::{Chunk, ConstantPool};
pub use bytecode_debug::{disassemble_chunk, disassemble_instruction, Disassembly, InstructionText};
pub use error::{CompileError, VmError};
pub use opcode::OpCode;
pub use value::Value;
pub use vm::{InterpretResult, STACK_MAX, VM};
