//! Unit tests for VmError and ErrorKind

use core_types::{word, ErrorKind, VmError};

#[test]
fn test_invalid_opcode_reports_position_and_word() {
    let error = VmError::InvalidOpcode {
        position: 7,
        word: word(1042),
        opcode: word(42),
    };

    assert_eq!(error.kind(), ErrorKind::InvalidOpcode);
    let message = error.to_string();
    assert!(message.contains("42"));
    assert!(message.contains("1042"));
    assert!(message.contains("position 7"));
}

#[test]
fn test_invalid_parameter_mode_reports_reason() {
    let error = VmError::InvalidParameterMode {
        position: 0,
        parameter: 2,
        reason: "destination may not be immediate".to_string(),
    };

    assert_eq!(error.kind(), ErrorKind::InvalidParameterMode);
    assert!(error.to_string().contains("parameter 2"));
    assert!(error.to_string().contains("destination may not be immediate"));
}

#[test]
fn test_truncated_program_display() {
    let error = VmError::TruncatedProgram {
        position: 3,
        required: 3,
        available: 0,
    };

    assert_eq!(
        error.to_string(),
        "truncated program at position 3: 3 parameters required, 0 available"
    );
}

#[test]
fn test_errors_compare_by_value() {
    let a = VmError::InvalidAddress { address: word(-1) };
    let b = VmError::InvalidAddress { address: word(-1) };
    let c = VmError::InvalidAddress { address: word(-2) };

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_vm_error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}

    assert_error(&VmError::NotRunnable("halted".to_string()));
}
