//! Core IntCode value types and error handling.
//!
//! This crate provides the foundational types shared by every IntCode
//! component: the machine word and the fatal error taxonomy.
//!
//! # Overview
//!
//! - [`Word`] - Arbitrary-precision signed integer stored in each memory cell
//! - [`VmError`] - Fatal machine errors with diagnostic context
//! - [`ErrorKind`] - Fieldless classification of a [`VmError`]
//!
//! # Examples
//!
//! ```
//! use core_types::{word, ErrorKind, VmError, Word};
//!
//! let value: Word = word(42);
//! assert!(core_types::is_truthy(&value));
//!
//! let error = VmError::InvalidAddress { address: word(-1) };
//! assert_eq!(error.kind(), ErrorKind::InvalidAddress);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod value;

pub use error::{ErrorKind, VmError, VmResult};
pub use value::{from_bool, is_truthy, to_index, word, Word};
