//! Integration tests for interpreter
//!
//! Runs complete programs exercising comparisons, jumps and multi-machine
//! chains driven through the feedback-loop contract.

use bytecode_system::Program;
use core_types::{word, Word};
use interpreter::Machine;

const EQUAL_TO_8_POSITION: &str = "3,9,8,9,10,9,4,9,99,-1,8";
const LESS_THAN_8_IMMEDIATE: &str = "3,3,1107,-1,8,3,4,3,99";
const JUMP_POSITION: &str = "3,12,6,12,15,1,13,14,13,4,13,99,-1,0,1,9";
const JUMP_IMMEDIATE: &str = "3,3,1105,-1,9,1101,0,0,12,4,12,99,1";
const COMPARE_TO_8: &str = "3,21,1008,21,8,20,1005,20,22,107,8,21,20,1006,20,31,\
1106,0,36,98,0,0,1002,21,125,20,4,20,1105,1,46,104,999,1105,1,46,1101,1000,1,20,4,20,\
1105,1,46,98,99";

fn run_with_input(source: &str, input: i64) -> Vec<Word> {
    let program: Program = source.parse().unwrap();
    let mut machine = Machine::new(program, false, false).with_initial_input([word(input)]);
    let outputs = machine.run().unwrap();
    assert!(machine.is_halted());
    outputs
}

#[test]
fn test_equality_comparisons() {
    assert_eq!(run_with_input(EQUAL_TO_8_POSITION, 8), vec![word(1)]);
    assert_eq!(run_with_input(EQUAL_TO_8_POSITION, 7), vec![word(0)]);
}

#[test]
fn test_less_than_comparisons() {
    assert_eq!(run_with_input(LESS_THAN_8_IMMEDIATE, 5), vec![word(1)]);
    assert_eq!(run_with_input(LESS_THAN_8_IMMEDIATE, 8), vec![word(0)]);
}

#[test]
fn test_jumps_in_both_modes() {
    for source in [JUMP_POSITION, JUMP_IMMEDIATE] {
        assert_eq!(run_with_input(source, 0), vec![word(0)]);
        assert_eq!(run_with_input(source, 42), vec![word(1)]);
    }
}

#[test]
fn test_compare_to_8() {
    assert_eq!(run_with_input(COMPARE_TO_8, 7), vec![word(999)]);
    assert_eq!(run_with_input(COMPARE_TO_8, 8), vec![word(1000)]);
    assert_eq!(run_with_input(COMPARE_TO_8, 9), vec![word(1001)]);
}

#[test]
fn test_amplifier_series() {
    let program: Program = "3,15,3,16,1002,16,10,16,1,16,15,15,4,15,99,0,0"
        .parse()
        .unwrap();

    let mut signal = word(0);
    for phase in [4, 3, 2, 1, 0] {
        let mut amp = Machine::new(program.clone(), false, false)
            .with_initial_input([word(phase), signal.clone()]);
        signal = amp.run().unwrap().remove(0);
    }

    assert_eq!(signal, word(43210));
}

#[test]
fn test_amplifier_feedback_loop() {
    let program: Program = "3,26,1001,26,-4,26,3,27,1002,27,2,27,1,27,26,27,4,27,\
1001,28,-1,28,1005,28,6,99,0,0,5"
        .parse()
        .unwrap();

    let mut amps: Vec<Machine> = [9, 8, 7, 6, 5]
        .into_iter()
        .map(|phase| Machine::new(program.clone(), false, true).with_initial_input([word(phase)]))
        .collect();

    let mut signal = word(0);
    let mut thruster = None;
    'chain: loop {
        for (index, amp) in amps.iter_mut().enumerate() {
            amp.add_input_value(signal.clone());
            let outputs = amp.run().unwrap();
            match outputs.as_slice() {
                [value] => signal = value.clone(),
                [] => break 'chain,
                other => panic!("Expected at most one output per run, got {:?}", other),
            }
            if index == 4 {
                thruster = Some(signal.clone());
            }
        }
    }

    assert_eq!(thruster, Some(word(139629729)));
    assert!(amps[0].is_halted());
}
