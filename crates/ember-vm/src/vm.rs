//! Virtual Machine implementation

use crate::bytecode::Chunk;
use crate::bytecode_debug::disassemble_instruction;
use crate::error::{CompileError, VmError};
use crate::opcode::OpCode;
use crate::value::{format_value, Value};
use std::fmt::Write;

/// Maximum value-stack depth
pub const STACK_MAX: usize = 256;

/// Terminal state of one `interpret` call
#[derive(Debug, Clone, PartialEq)]
pub enum InterpretResult {
    /// Execution reached OP_RETURN; carries the final value
    Ok(Value),
    /// Reserved for the front end; the VM itself never produces this
    CompileError(CompileError),
    /// Execution stopped on malformed bytecode or stack misuse
    RuntimeError(VmError),
}

/// Virtual Machine
///
/// Each instance owns its stack and instruction cursor, so independent
/// chunks can execute concurrently on independent instances. The chunk is
/// borrowed read-only for the duration of one [`VM::interpret`] call and
/// the stack carries no meaning across calls.
pub struct VM {
    /// Value stack
    stack: [Value; STACK_MAX],

    /// Index one past the top of the stack
    stack_top: usize,

    /// Print stack contents and the next instruction before each step
    trace: bool,
}

impl VM {
    /// Create a new VM
    pub fn new() -> Self {
        Self {
            stack: [0.0; STACK_MAX],
            stack_top: 0,
            trace: false,
        }
    }

    /// Toggle execution tracing. Purely observational: tracing never alters
    /// control flow or the final result.
    pub fn set_trace(&mut self, trace: bool) {
        self.trace = trace;
    }

    /// Execute a chunk to completion.
    pub fn interpret(&mut self, chunk: &Chunk) -> InterpretResult {
        self.reset_stack();
        match self.run(chunk) {
            Ok(value) => InterpretResult::Ok(value),
            Err(err) => InterpretResult::RuntimeError(err),
        }
    }

    fn reset_stack(&mut self) {
        self.stack_top = 0;
    }

    /// Main fetch-decode-execute loop
    fn run(&mut self, chunk: &Chunk) -> Result<Value, VmError> {
        let mut ip = 0usize;

        loop {
            if self.trace {
                self.print_trace(chunk, ip);
            }

            // Fetch
            let offset = ip;
            let byte = chunk
                .byte(ip)
                .ok_or(VmError::UnexpectedEnd { offset: ip })?;
            ip += 1;
            let line = chunk.line(offset).unwrap_or_default();

            // Decode
            let opcode = OpCode::from_u8(byte).ok_or(VmError::InvalidOpcode {
                byte,
                offset,
                line,
            })?;

            // Execute
            match opcode {
                OpCode::Constant => {
                    let index = chunk
                        .byte(ip)
                        .ok_or(VmError::UnexpectedEnd { offset: ip })?
                        as usize;
                    ip += 1;
                    let value = chunk.constants().get_constant(index).ok_or(
                        VmError::InvalidConstant {
                            index,
                            offset,
                            line,
                        },
                    )?;
                    self.push(value, offset, line)?;
                }
                OpCode::Add => self.binary_op(offset, line, |a, b| a + b)?,
                OpCode::Subtract => self.binary_op(offset, line, |a, b| a - b)?,
                OpCode::Multiply => self.binary_op(offset, line, |a, b| a * b)?,
                // IEEE 754 semantics: division by zero produces Infinity,
                // 0 / 0 produces NaN; neither is a runtime error.
                OpCode::Divide => self.binary_op(offset, line, |a, b| a / b)?,
                OpCode::Negate => {
                    let value = self.pop(offset, line)?;
                    self.push(-value, offset, line)?;
                }
                OpCode::Return => return self.pop(offset, line),
            }
        }
    }

    /// Pop b, pop a, push `op(a, b)`: the first-pushed operand is the
    /// left-hand side.
    fn binary_op(
        &mut self,
        offset: usize,
        line: u32,
        op: impl Fn(Value, Value) -> Value,
    ) -> Result<(), VmError> {
        let b = self.pop(offset, line)?;
        let a = self.pop(offset, line)?;
        self.push(op(a, b), offset, line)
    }

    fn push(&mut self, value: Value, offset: usize, line: u32) -> Result<(), VmError> {
        if self.stack_top == STACK_MAX {
            return Err(VmError::StackOverflow { offset, line });
        }
        self.stack[self.stack_top] = value;
        self.stack_top += 1;
        Ok(())
    }

    fn pop(&mut self, offset: usize, line: u32) -> Result<Value, VmError> {
        if self.stack_top == 0 {
            return Err(VmError::StackUnderflow { offset, line });
        }
        self.stack_top -= 1;
        Ok(self.stack[self.stack_top])
    }

    /// Print the stack bottom-to-top and the instruction about to execute.
    fn print_trace(&self, chunk: &Chunk, ip: usize) {
        let mut cells = String::new();
        for slot in &self.stack[..self.stack_top] {
            let _ = write!(cells, "[ {} ]", format_value(*slot));
        }
        println!("          {}", cells);
        println!("{}", disassemble_instruction(chunk, ip).text);
    }
}

impl Default for VM {
    fn default() -> Self {
        Self::new()
    }
}
