//! Tests for Program loading and disassembly

use bytecode_system::{disassemble, LineKind, Program, ProgramError};
use core_types::word;

#[test]
fn test_load_quine_program() {
    let text = "109,1,204,-1,1001,100,1,100,1008,100,16,101,1006,101,0,99\n";
    let program: Program = text.parse().unwrap();
    assert_eq!(program.len(), 16);
    assert_eq!(program.words()[3], word(-1));
}

#[test]
fn test_load_reports_first_bad_token() {
    let err = Program::parse("1,2,3.5,4").unwrap_err();
    assert_eq!(
        err,
        ProgramError::InvalidWord {
            index: 2,
            token: "3.5".to_string()
        }
    );
    assert_eq!(err.to_string(), "invalid word \"3.5\" at index 2");
}

#[test]
fn test_disassemble_covers_every_word() {
    let program = Program::parse("3,9,8,9,10,9,4,9,99,-1,8").unwrap();
    let lines = disassemble(program.words());

    let covered: usize = lines.iter().map(|l| l.words.len()).sum();
    assert_eq!(covered, program.len());

    let instructions = lines
        .iter()
        .filter(|l| matches!(l.kind, LineKind::Instruction(_)))
        .count();
    assert!(instructions >= 4);
}
