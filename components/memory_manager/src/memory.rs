//! Machine memory and registers
//!
//! `Memory` owns all mutable program state: the word store, the
//! instruction pointer and the relative base. Nothing is shared between
//! machines.

use bytecode_system::{decode_instruction, Instruction};
use core_types::{to_index, VmError, VmResult, Word};
use num_traits::{Signed, Zero};
use tracing::debug;

/// Default ceiling on auto-expanded memory, in words
///
/// Each cell is a `BigInt` of roughly 32 bytes before any heap digits, so
/// growing to the ceiling costs about 32 MiB.
pub const DEFAULT_MEMORY_LIMIT: usize = 1024 * 1024;

/// Word store plus instruction pointer and relative base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    /// Backing store, indexed from 0
    cells: Vec<Word>,
    /// Address of the next instruction word to decode
    instruction_pointer: usize,
    /// Base added to relative-mode parameters
    relative_base: Word,
    /// Whether out-of-bounds writes grow the store
    auto_expand: bool,
    /// Hard ceiling for growth
    limit: usize,
}

impl Memory {
    /// Create memory from an initial program with the default ceiling
    pub fn new(program: Vec<Word>, auto_expand: bool) -> Self {
        Self::with_limit(program, auto_expand, DEFAULT_MEMORY_LIMIT)
    }

    /// Create memory from an initial program with an explicit ceiling
    ///
    /// The ceiling only restricts growth; an initial program longer than
    /// `limit` is kept as is.
    pub fn with_limit(program: Vec<Word>, auto_expand: bool, limit: usize) -> Self {
        Self {
            cells: program,
            instruction_pointer: 0,
            relative_base: Word::zero(),
            auto_expand,
            limit,
        }
    }

    /// Current number of words
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if memory holds no words
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether out-of-bounds writes grow the store
    pub fn auto_expand(&self) -> bool {
        self.auto_expand
    }

    /// The growth ceiling in words
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Read the word at `address`
    ///
    /// With auto-expand enabled, addresses past the end read as zero
    /// without growing the store, up to the ceiling.
    ///
    /// # Errors
    ///
    /// `InvalidAddress` for negative addresses or out-of-bounds reads on
    /// fixed memory; `MemoryLimitExceeded` past the ceiling.
    pub fn read(&self, address: &Word) -> VmResult<Word> {
        let index = self.index_of(address)?;
        if let Some(value) = self.cells.get(index) {
            return Ok(value.clone());
        }
        if !self.auto_expand {
            return Err(VmError::InvalidAddress {
                address: address.clone(),
            });
        }
        if index >= self.limit {
            return Err(VmError::MemoryLimitExceeded {
                address: address.clone(),
                limit: self.limit,
            });
        }
        Ok(Word::zero())
    }

    /// Write `value` to `address`
    ///
    /// With auto-expand enabled, the store grows to `address + 1` words,
    /// padding with zero.
    ///
    /// # Errors
    ///
    /// Same address validation as [`Memory::read`].
    pub fn write(&mut self, value: Word, address: &Word) -> VmResult<()> {
        let index = self.index_of(address)?;
        if index >= self.cells.len() {
            if !self.auto_expand {
                return Err(VmError::InvalidAddress {
                    address: address.clone(),
                });
            }
            self.grow(index, address)?;
        }
        self.cells[index] = value;
        Ok(())
    }

    /// Grow the store so that `index` is valid
    fn grow(&mut self, index: usize, address: &Word) -> VmResult<()> {
        if index >= self.limit {
            return Err(VmError::MemoryLimitExceeded {
                address: address.clone(),
                limit: self.limit,
            });
        }
        let new_len = index + 1;
        debug!(from = self.cells.len(), to = new_len, "memory expanded");
        self.cells.resize(new_len, Word::zero());
        Ok(())
    }

    /// Convert an address word to an index, rejecting negatives
    fn index_of(&self, address: &Word) -> VmResult<usize> {
        if address.is_negative() {
            return Err(VmError::InvalidAddress {
                address: address.clone(),
            });
        }
        match to_index(address) {
            Some(index) => Ok(index),
            None if self.auto_expand => Err(VmError::MemoryLimitExceeded {
                address: address.clone(),
                limit: self.limit,
            }),
            None => Err(VmError::InvalidAddress {
                address: address.clone(),
            }),
        }
    }

    /// Address of the next instruction word
    pub fn instruction_pointer(&self) -> usize {
        self.instruction_pointer
    }

    /// Current relative base
    pub fn relative_base(&self) -> &Word {
        &self.relative_base
    }

    /// Jump to `address`
    ///
    /// A target past the end is accepted; the following decode reports
    /// end of program.
    ///
    /// # Errors
    ///
    /// `InvalidAddress` if `address` is negative or not representable.
    pub fn set_instruction_pointer(&mut self, address: &Word) -> VmResult<()> {
        let index = to_index(address).ok_or_else(|| VmError::InvalidAddress {
            address: address.clone(),
        })?;
        self.instruction_pointer = index;
        Ok(())
    }

    /// Move the instruction pointer back to an already-decoded position
    pub fn restore_instruction_pointer(&mut self, position: usize) {
        self.instruction_pointer = position;
    }

    /// Add `delta` to the relative base
    pub fn adjust_relative_base(&mut self, delta: &Word) {
        self.relative_base += delta;
    }

    /// Decode the instruction at the instruction pointer and advance past it
    ///
    /// On failure the instruction pointer is left untouched.
    pub fn decode_next_instruction(&mut self) -> VmResult<Instruction> {
        let instruction = decode_instruction(&self.cells, self.instruction_pointer)?;
        self.instruction_pointer = instruction.next_instruction_position();
        Ok(instruction)
    }

    /// Read-only view of the word store
    pub fn cells(&self) -> &[Word] {
        &self.cells
    }

    /// Copy of the full word store
    pub fn snapshot(&self) -> Vec<Word> {
        self.cells.clone()
    }
}
