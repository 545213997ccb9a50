//! Operation semantics
//!
//! Executes one decoded instruction against memory. Operand resolution
//! lives here; the caller decides which input, if any, to offer.

use bytecode_system::{AddressingMode, Instruction, Opcode, Parameter};
use core_types::{from_bool, is_truthy, VmError, VmResult, Word};
use memory_manager::Memory;

/// Outcome of a single step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult {
    /// Instruction completed with no output
    Continue,
    /// Instruction emitted a value
    Output(Word),
    /// INPUT found no value; the instruction must be retried
    InputNeeded,
    /// HALT executed
    Halted,
}

/// Stateless executor of decoded instructions
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher;

impl Dispatcher {
    /// Execute `instruction` against `memory`
    ///
    /// `input` is only consulted by INPUT. When INPUT receives `None`
    /// nothing is written and `InputNeeded` is returned; rewinding the
    /// instruction pointer is the caller's job.
    pub fn execute(
        memory: &mut Memory,
        instruction: &Instruction,
        input: Option<Word>,
    ) -> VmResult<StepResult> {
        match instruction.opcode {
            Opcode::Add => {
                let value =
                    operand(memory, instruction, 0)? + operand(memory, instruction, 1)?;
                let address = destination(memory, instruction, 2)?;
                memory.write(value, &address)?;
            }
            Opcode::Multiply => {
                let value =
                    operand(memory, instruction, 0)? * operand(memory, instruction, 1)?;
                let address = destination(memory, instruction, 2)?;
                memory.write(value, &address)?;
            }
            Opcode::Input => match input {
                Some(value) => {
                    let address = destination(memory, instruction, 0)?;
                    memory.write(value, &address)?;
                }
                None => return Ok(StepResult::InputNeeded),
            },
            Opcode::Output => {
                return Ok(StepResult::Output(operand(memory, instruction, 0)?));
            }
            Opcode::JumpIfTrue => {
                if is_truthy(&operand(memory, instruction, 0)?) {
                    let target = operand(memory, instruction, 1)?;
                    memory.set_instruction_pointer(&target)?;
                }
            }
            Opcode::JumpIfFalse => {
                if !is_truthy(&operand(memory, instruction, 0)?) {
                    let target = operand(memory, instruction, 1)?;
                    memory.set_instruction_pointer(&target)?;
                }
            }
            Opcode::LessThan => {
                let lhs = operand(memory, instruction, 0)?;
                let value = from_bool(lhs < operand(memory, instruction, 1)?);
                let address = destination(memory, instruction, 2)?;
                memory.write(value, &address)?;
            }
            Opcode::Equals => {
                let lhs = operand(memory, instruction, 0)?;
                let value = from_bool(lhs == operand(memory, instruction, 1)?);
                let address = destination(memory, instruction, 2)?;
                memory.write(value, &address)?;
            }
            Opcode::AdjustRelativeBase => {
                let delta = operand(memory, instruction, 0)?;
                memory.adjust_relative_base(&delta);
            }
            Opcode::Halt => return Ok(StepResult::Halted),
        }

        Ok(StepResult::Continue)
    }
}

/// Fetch parameter `index`, rejecting instructions built with too few
fn parameter(instruction: &Instruction, index: usize) -> VmResult<&Parameter> {
    instruction
        .parameters
        .get(index)
        .ok_or_else(|| VmError::TruncatedProgram {
            position: instruction.position,
            required: instruction.opcode.arity(),
            available: instruction.parameters.len(),
        })
}

/// Resolve a read parameter to its value
fn operand(memory: &Memory, instruction: &Instruction, index: usize) -> VmResult<Word> {
    let parameter = parameter(instruction, index)?;
    match parameter.mode {
        AddressingMode::Immediate => Ok(parameter.value.clone()),
        AddressingMode::Position => memory.read(&parameter.value),
        AddressingMode::Relative => memory.read(&(&parameter.value + memory.relative_base())),
    }
}

/// Resolve a write parameter to an address
fn destination(memory: &Memory, instruction: &Instruction, index: usize) -> VmResult<Word> {
    let parameter = parameter(instruction, index)?;
    match parameter.mode {
        AddressingMode::Position => Ok(parameter.value.clone()),
        AddressingMode::Relative => Ok(&parameter.value + memory.relative_base()),
        AddressingMode::Immediate => Err(VmError::InvalidParameterMode {
            position: instruction.position,
            parameter: index,
            reason: "write destination may not be immediate".to_string(),
        }),
    }
}
