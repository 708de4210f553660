//! Handbase - Interactive shell over an in-memory poker hand-history database.
//!
//! Handbase reads commands from standard input, one per line, and applies
//! each to a versioned in-memory store of poker hand records. Mutations
//! produce a new store value; queries leave it untouched; errors are
//! reported and the session continues.
//!
//! # Modules
//!
//! - [`command`] - Command resolution: catalog, line parser, value
//!   conversion, parameter binding
//! - [`error`] - Error types and result aliases
//! - [`import`] - Hand-history file import behind the `HandParser` seam
//! - [`session`] - The session loop and command dispatcher
//! - [`store`] - The persistent-value store and domain records
//! - [`ui`] - Styled terminal output
//!
//! # Example
//!
//! ```
//! use handbase::command::{resolve, Catalog, Command};
//!
//! let catalog = Catalog::builtin();
//! let command = resolve("deletehand --h 42", &catalog).unwrap();
//! assert_eq!(command, Command::DeleteHand { hand_id: 42 });
//! ```

pub mod command;
pub mod error;
pub mod import;
pub mod session;
pub mod store;
pub mod ui;

pub use error::{HandbaseError, Result};
