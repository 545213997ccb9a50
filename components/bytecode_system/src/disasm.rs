//! Linear disassembler
//!
//! Walks memory from address 0, decoding an instruction wherever one
//! decodes and emitting a single data word wherever one does not.

use std::fmt;

use core_types::Word;

use crate::decoder::decode_instruction;
use crate::instruction::Instruction;

/// What a disassembly line represents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A decodable instruction
    Instruction(Instruction),
    /// A word that does not decode
    Data(Word),
}

/// One line of disassembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisassemblyLine {
    /// Address of the first word
    pub address: usize,
    /// Raw words covered by this line
    pub words: Vec<Word>,
    /// Decoded content
    pub kind: LineKind,
}

impl fmt::Display for DisassemblyLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self
            .words
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>()
            .join(",");
        match &self.kind {
            LineKind::Instruction(inst) => write!(f, "{:>6}: {:<24} {}", self.address, raw, inst),
            LineKind::Data(word) => write!(f, "{:>6}: {:<24} DATA {}", self.address, raw, word),
        }
    }
}

/// Disassemble a memory image
///
/// # Example
///
/// ```
/// use bytecode_system::{disassemble, LineKind};
/// use core_types::word;
///
/// let memory = vec![word(104), word(7), word(99), word(-3)];
/// let lines = disassemble(&memory);
///
/// assert_eq!(lines.len(), 3);
/// assert!(matches!(lines[2].kind, LineKind::Data(_)));
/// ```
pub fn disassemble(words: &[Word]) -> Vec<DisassemblyLine> {
    let mut lines = Vec::new();
    let mut address = 0;

    while address < words.len() {
        match decode_instruction(words, address) {
            Ok(inst) => {
                let next = inst.next_instruction_position();
                lines.push(DisassemblyLine {
                    address,
                    words: words[address..next].to_vec(),
                    kind: LineKind::Instruction(inst),
                });
                address = next;
            }
            Err(_) => {
                lines.push(DisassemblyLine {
                    address,
                    words: vec![words[address].clone()],
                    kind: LineKind::Data(words[address].clone()),
                });
                address += 1;
            }
        }
    }

    lines
}
