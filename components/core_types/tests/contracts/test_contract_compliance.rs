//! Contract compliance tests for core_types
//!
//! These tests verify that every fatal error kind is represented.

use core_types::{word, ErrorKind, VmError};

/// Contract: every fatal kind has a matching VmError variant
#[test]
fn test_every_error_kind_is_reachable() {
    let errors = [
        VmError::InvalidOpcode {
            position: 0,
            word: word(0),
            opcode: word(0),
        },
        VmError::InvalidParameterMode {
            position: 0,
            parameter: 0,
            reason: "unknown mode digit 3".to_string(),
        },
        VmError::TruncatedProgram {
            position: 0,
            required: 1,
            available: 0,
        },
        VmError::InvalidAddress { address: word(-1) },
        VmError::MemoryLimitExceeded {
            address: word(10),
            limit: 5,
        },
        VmError::EndOfProgram {
            position: 1,
            length: 1,
        },
        VmError::NotRunnable("halted".to_string()),
    ];

    let kinds: Vec<ErrorKind> = errors.iter().map(VmError::kind).collect();
    assert_eq!(
        kinds,
        vec![
            ErrorKind::InvalidOpcode,
            ErrorKind::InvalidParameterMode,
            ErrorKind::TruncatedProgram,
            ErrorKind::InvalidAddress,
            ErrorKind::MemoryLimitExceeded,
            ErrorKind::EndOfProgram,
            ErrorKind::NotRunnable,
        ]
    );
}
