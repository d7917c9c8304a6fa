//! Bytecode debugging utilities
//!
//! Pure, read-only disassembly: identical chunk state always yields
//! identical text, and malformed bytes are reported in the result rather
//! than only printed. Column layout is fixed for golden-output tests:
//! 4-digit zero-padded offset, 4-char right-justified source line (or the
//! `   | ` placeholder when the previous byte shares the line), then the
//! mnemonic — left-justified to 16 characters when an operand follows.

use crate::bytecode::Chunk;
use crate::opcode::OpCode;
use crate::value::format_value;
use std::fmt::Write;

/// One decoded instruction.
#[derive(Debug, Clone, PartialEq)]
pub struct InstructionText {
    /// Rendered instruction line (no trailing newline)
    pub text: String,
    /// Offset of the next instruction
    pub next_offset: usize,
    /// True when the byte at this offset did not decode cleanly
    pub unknown: bool,
}

/// Full disassembly of a chunk.
#[derive(Debug, Clone, PartialEq)]
pub struct Disassembly {
    /// Header plus one line per instruction
    pub text: String,
    /// True when any instruction was flagged unknown
    pub malformed: bool,
}

/// Disassemble an entire chunk under a display name.
pub fn disassemble_chunk(chunk: &Chunk, name: &str) -> Disassembly {
    let mut text = format!("== {} ==\n", name);
    let mut malformed = false;

    let mut offset = 0;
    while offset < chunk.len() {
        let instruction = disassemble_instruction(chunk, offset);
        text.push_str(&instruction.text);
        text.push('\n');
        malformed |= instruction.unknown;
        offset = instruction.next_offset;
    }

    Disassembly { text, malformed }
}

/// Disassemble the single instruction at `offset`.
///
/// Unknown opcode bytes are rendered with a diagnostic and skipped one byte
/// at a time (best-effort resynchronization); the scan never reads past the
/// end of the chunk.
pub fn disassemble_instruction(chunk: &Chunk, offset: usize) -> InstructionText {
    let mut text = format!("{:04} ", offset);

    let byte = match chunk.byte(offset) {
        Some(byte) => byte,
        None => {
            text.push_str("<end of chunk>");
            return InstructionText {
                text,
                next_offset: chunk.len(),
                unknown: true,
            };
        }
    };

    if offset > 0 && chunk.line(offset) == chunk.line(offset - 1) {
        text.push_str("   | ");
    } else {
        let _ = write!(text, "{:4} ", chunk.line(offset).unwrap_or_default());
    }

    match OpCode::from_u8(byte) {
        Some(OpCode::Constant) => constant_instruction(chunk, OpCode::Constant, offset, text),
        Some(op) => simple_instruction(op, offset, text),
        None => {
            let _ = write!(text, "Unknown OpCode {}", byte);
            InstructionText {
                text,
                next_offset: offset + 1,
                unknown: true,
            }
        }
    }
}

fn simple_instruction(op: OpCode, offset: usize, mut text: String) -> InstructionText {
    text.push_str(op.name());
    InstructionText {
        text,
        next_offset: offset + 1,
        unknown: false,
    }
}

fn constant_instruction(chunk: &Chunk, op: OpCode, offset: usize, mut text: String) -> InstructionText {
    let index = match chunk.byte(offset + 1) {
        Some(index) => index,
        None => {
            // Operand byte missing: the chunk ends mid-instruction.
            let _ = write!(text, "{:<16} <truncated>", op.name());
            return InstructionText {
                text,
                next_offset: offset + 1,
                unknown: true,
            };
        }
    };

    match chunk.constants().get_constant(index as usize) {
        Some(value) => {
            let _ = write!(text, "{:<16} {:4} '{}'", op.name(), index, format_value(value));
            InstructionText {
                text,
                next_offset: offset + 2,
                unknown: false,
            }
        }
        None => {
            let _ = write!(text, "{:<16} {:4} '???'", op.name(), index);
            InstructionText {
                text,
                next_offset: offset + 2,
                unknown: true,
            }
        }
    }
}
