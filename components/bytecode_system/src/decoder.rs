//! Word-level instruction decoder
//!
//! Decoding is pure: it reads a slice of words and never moves the
//! instruction pointer. Callers advance only after a successful decode,
//! so every failure still reports the position it started at.

use core_types::{VmError, VmResult, Word};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::ToPrimitive;

use crate::instruction::{AddressingMode, Instruction, Parameter};
use crate::opcode::Opcode;

/// Decode the instruction whose opcode word sits at `position`.
///
/// The opcode is `word mod 100`; parameter modes are the successive
/// decimal digits of `word / 100`, least significant first. Validation
/// happens in order: known opcode, enough words remaining, known mode
/// digits, then the opcode's own parameter rules.
///
/// # Errors
///
/// - `EndOfProgram` if `position` is outside `words`
/// - `InvalidOpcode` for an unknown or negative opcode word
/// - `TruncatedProgram` if fewer words remain than the arity requires
/// - `InvalidParameterMode` for an unknown mode digit or a forbidden mode
pub fn decode_instruction(words: &[Word], position: usize) -> VmResult<Instruction> {
    let length = words.len();
    let word = words
        .get(position)
        .ok_or(VmError::EndOfProgram { position, length })?;

    let hundred = BigInt::from(100);
    let (mut modes, code) = word.div_rem(&hundred);

    let opcode = code
        .to_u8()
        .and_then(Opcode::from_code)
        .ok_or_else(|| VmError::InvalidOpcode {
            position,
            word: word.clone(),
            opcode: code.clone(),
        })?;

    let arity = opcode.arity();
    let available = length - position - 1;
    if available < arity {
        return Err(VmError::TruncatedProgram {
            position,
            required: arity,
            available,
        });
    }

    let ten = BigInt::from(10);
    let mut parameters = Vec::with_capacity(arity);
    for index in 0..arity {
        let (rest, digit) = modes.div_rem(&ten);
        modes = rest;

        let mode = digit
            .to_u8()
            .and_then(AddressingMode::from_digit)
            .ok_or_else(|| VmError::InvalidParameterMode {
                position,
                parameter: index,
                reason: format!("unknown mode digit {}", digit),
            })?;

        parameters.push(Parameter::new(words[position + 1 + index].clone(), mode));
    }

    opcode.validate_parameters(position, &parameters)?;

    Ok(Instruction::new(opcode, parameters, position))
}
