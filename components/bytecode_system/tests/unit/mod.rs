//! Unit test runner for bytecode_system

mod test_program;
