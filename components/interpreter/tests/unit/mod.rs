//! Unit tests for interpreter components

use core_types::{word, ErrorKind, Word};
use interpreter::{ExecutionState, Machine, MachineConfig};

fn words(values: &[i64]) -> Vec<Word> {
    values.iter().copied().map(word).collect()
}

// ============================================================================
// Suspension Tests
// ============================================================================

#[test]
fn test_run_suspends_without_advancing() {
    let mut machine = Machine::new(vec![3, 0, 4, 0, 99], false, false);

    let outputs = machine.run().unwrap();
    assert!(outputs.is_empty());
    assert!(machine.needs_input());
    assert!(!machine.is_halted());
    assert_eq!(machine.instruction_pointer(), 0);
    assert_eq!(machine.state(), ExecutionState::Suspended);

    // Running again without input is a no-op suspension
    assert!(machine.run().unwrap().is_empty());
    assert_eq!(machine.instruction_pointer(), 0);

    machine.add_input_value(word(123));
    assert_eq!(machine.run().unwrap(), vec![word(123)]);
    assert_eq!(machine.pending_inputs(), 0);
}

#[test]
fn test_suspension_mid_program() {
    // out 1; in [12]; out [12]; halt
    let mut machine = Machine::new(vec![104, 1, 3, 12, 4, 12, 99, 0, 0, 0, 0, 0, 0], false, true);

    assert_eq!(machine.run().unwrap(), vec![word(1)]);
    assert!(machine.run().unwrap().is_empty());
    assert!(machine.needs_input());
    assert_eq!(machine.instruction_pointer(), 2);

    machine.add_input_value(word(-9));
    assert_eq!(machine.run().unwrap(), vec![word(-9)]);
    assert!(machine.run().unwrap().is_empty());
    assert!(machine.is_halted());
}

// ============================================================================
// Feedback Loop Tests
// ============================================================================

#[test]
fn test_feedback_loop_boundary() {
    let program = vec![104, 10, 104, 20, 99];

    let mut interactive = Machine::new(program.clone(), false, true);
    assert_eq!(interactive.run().unwrap(), vec![word(10)]);
    assert_eq!(interactive.run().unwrap(), vec![word(20)]);
    assert!(!interactive.is_halted());
    assert!(interactive.run().unwrap().is_empty());
    assert!(interactive.is_halted());

    let mut batch = Machine::new(program, false, false);
    assert_eq!(batch.run().unwrap(), vec![word(10), word(20)]);
    assert!(batch.is_halted());
}

// ============================================================================
// Addressing Tests
// ============================================================================

#[test]
fn test_relative_write_reads_back_directly() {
    // rb += 50; in [rb+7]; halt
    let mut machine = Machine::new(vec![109, 50, 203, 7, 99], true, false)
        .with_initial_input([word(777)]);
    machine.run().unwrap();

    let memory = machine.memory_snapshot();
    assert_eq!(memory[57], word(777));
    assert_eq!(machine.relative_base(), &word(50));
}

#[test]
fn test_negative_relative_base() {
    // rb -= 1; out [rb+1] -> mem[0]
    let mut machine = Machine::new(vec![109, -1, 204, 1, 99], false, false);
    assert_eq!(machine.run().unwrap(), vec![word(109)]);
}

// ============================================================================
// Memory Expansion Tests
// ============================================================================

#[test]
fn test_auto_expand_write_pads_with_zero() {
    // add 1 + 1 -> [1000]; halt
    let program = vec![1101, 1, 1, 1000, 99];

    let mut machine = Machine::new(program.clone(), true, false);
    machine.run().unwrap();
    let memory = machine.memory_snapshot();
    assert_eq!(memory.len(), 1001);
    assert!(memory[5..1000].iter().all(|w| *w == word(0)));
    assert_eq!(memory[1000], word(2));

    let mut fixed = Machine::new(program, false, false);
    let err = fixed.run().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidAddress);
    assert_eq!(err.position, 0);
}

#[test]
fn test_memory_limit_from_config() {
    let config = MachineConfig {
        auto_expand_memory: true,
        memory_limit: 64,
        ..MachineConfig::new(vec![1101, 1, 1, 1000, 99])
    };
    let mut machine = Machine::from_config(config);
    let err = machine.run().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MemoryLimitExceeded);
}

#[test]
fn test_read_past_end_with_auto_expand_is_zero() {
    let mut machine = Machine::new(vec![4, 500, 99], true, false);
    assert_eq!(machine.run().unwrap(), vec![word(0)]);
    assert_eq!(machine.memory_snapshot().len(), 3);
}

// ============================================================================
// Arithmetic Tests
// ============================================================================

#[test]
fn test_large_value_arithmetic() {
    let mut machine = Machine::new(vec![1102, 34915192, 34915192, 7, 4, 7, 99, 0], false, false);
    let outputs = machine.run().unwrap();
    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0].to_string().len(), 16);
    assert_eq!(outputs[0], word(1_219_070_632_396_864));
}

#[test]
fn test_products_beyond_64_bits() {
    // mul [9] * [9] -> [9]; jump to 11; out [9]; halt
    let program = vec![2, 9, 9, 9, 1105, 1, 11, 0, 0, 4294967296, 0, 4, 9, 99];
    let mut machine = Machine::new(program, false, false);
    let outputs = machine.run().unwrap();
    assert_eq!(outputs[0].to_string(), "18446744073709551616");
    assert_eq!(machine.memory_snapshot(), {
        let mut expected = words(&[2, 9, 9, 9, 1105, 1, 11, 0, 0, 0, 0, 4, 9, 99]);
        expected[9] = "18446744073709551616".parse().unwrap();
        expected
    });
}

#[test]
fn test_halted_machine_stays_halted() {
    let mut machine = Machine::new(vec![99], false, false);
    assert!(machine.run().unwrap().is_empty());
    assert!(machine.is_halted());
    assert!(machine.run().unwrap().is_empty());
    assert_eq!(machine.steps_executed(), 1);
}
