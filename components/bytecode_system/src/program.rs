//! IntCode program text loading
//!
//! A program is a single line of comma-separated base-10 signed
//! integers. Surrounding whitespace and a trailing comma are tolerated.

use std::fmt;
use std::str::FromStr;

use core_types::Word;
use thiserror::Error;

/// Errors produced while loading program text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgramError {
    /// The text contained no words
    #[error("program is empty")]
    Empty,

    /// A token was not a base-10 integer
    #[error("invalid word {token:?} at index {index}")]
    InvalidWord {
        /// Zero-based index of the token
        index: usize,
        /// The offending token, trimmed
        token: String,
    },
}

/// An initial memory image
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    words: Vec<Word>,
}

impl Program {
    /// Parse comma-separated program text
    ///
    /// # Example
    ///
    /// ```
    /// use bytecode_system::Program;
    ///
    /// let program = Program::parse("1,0,0,0,99\n").unwrap();
    /// assert_eq!(program.len(), 5);
    /// ```
    pub fn parse(text: &str) -> Result<Self, ProgramError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ProgramError::Empty);
        }

        let body = trimmed.strip_suffix(',').unwrap_or(trimmed);
        let words = body
            .split(',')
            .enumerate()
            .map(|(index, token)| {
                let token = token.trim();
                token.parse::<Word>().map_err(|_| ProgramError::InvalidWord {
                    index,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { words })
    }

    /// Wrap an existing word sequence
    pub fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// The words of this program
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Consume the program, returning its words
    pub fn into_words(self) -> Vec<Word> {
        self.words
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the program has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromStr for Program {
    type Err = ProgramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Program::parse(s)
    }
}

impl From<Vec<Word>> for Program {
    fn from(words: Vec<Word>) -> Self {
        Program::from_words(words)
    }
}

impl From<Vec<i64>> for Program {
    fn from(values: Vec<i64>) -> Self {
        Program::from_words(values.into_iter().map(Word::from).collect())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", word)?;
        }
        Ok(())
    }
}
