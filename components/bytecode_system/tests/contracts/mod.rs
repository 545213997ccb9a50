//! Contract tests for the bytecode_system public API
