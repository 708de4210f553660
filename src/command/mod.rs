//! Command resolution.
//!
//! Turns one raw input line into a typed [`Command`] instance through the
//! resolution pipeline: name lookup → tokenization → typed parameter
//! binding → variant construction.
//!
//! # Architecture
//!
//! - [`catalog`] - Compile-time registry of command variants and their slots
//! - [`parser`] - Raw line tokenization into name + (flag, value) pairs
//! - [`convert`] - Token-to-typed-value conversion
//! - [`binder`] - Slot resolution and variant construction

pub mod binder;
pub mod catalog;
pub mod convert;
pub mod parser;

use std::path::PathBuf;

pub use catalog::{Catalog, CommandSpec, SlotSpec};
pub use convert::{ParamType, ParamValue};
pub use parser::{FlagPair, ParsedLine};

use crate::error::{HandbaseError, Result};
use crate::store::HandId;

/// The closed set of recognized user commands. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print total hand count and distinct player count.
    ShowAllHandsInformation,
    /// Print a player's hand count and up to ten of their hands.
    ShowPlayerInformation { nickname: String },
    /// Remove every hand with the given id and log the id as deleted.
    DeleteHand { hand_id: HandId },
    /// Print the full deleted-id audit log.
    ShowDeletedHands,
    /// Load hands from a file and append them to the store.
    ImportFile { path: PathBuf },
}

/// Resolve one raw input line into a command instance.
///
/// Runs the full pipeline: tokenize the line, look the name up in the
/// catalog (case-sensitive), bind parameters, construct the variant.
pub fn resolve(line: &str, catalog: &Catalog) -> Result<Command> {
    let parsed = parser::parse_line(line)?;
    let spec = catalog
        .lookup(&parsed.name)
        .ok_or_else(|| HandbaseError::UnknownCommand {
            name: parsed.name.clone(),
        })?;
    binder::bind(spec, &parsed.pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_zero_parameter_command() {
        let catalog = Catalog::builtin();
        let command = resolve("showallinfo", &catalog).unwrap();
        assert_eq!(command, Command::ShowAllHandsInformation);
    }

    #[test]
    fn trailing_tokens_after_zero_parameter_command_are_ignored() {
        let catalog = Catalog::builtin();
        let command = resolve("showallinfo --verbose yes", &catalog).unwrap();
        assert_eq!(command, Command::ShowAllHandsInformation);
    }

    #[test]
    fn resolves_delete_hand_with_id() {
        let catalog = Catalog::builtin();
        let command = resolve("deletehand --h 42", &catalog).unwrap();
        assert_eq!(command, Command::DeleteHand { hand_id: 42 });
    }

    #[test]
    fn delete_hand_with_non_numeric_id_fails() {
        let catalog = Catalog::builtin();
        let err = resolve("deletehand --h abc", &catalog).unwrap_err();
        assert!(matches!(err, HandbaseError::TypeConversion { .. }));
    }

    #[test]
    fn blank_lines_fail_with_empty_input() {
        let catalog = Catalog::builtin();
        for line in ["", "   "] {
            assert!(matches!(
                resolve(line, &catalog),
                Err(HandbaseError::EmptyInput)
            ));
        }
    }

    #[test]
    fn unknown_name_fails_with_unknown_command() {
        let catalog = Catalog::builtin();
        let err = resolve("frobnicate --x 1", &catalog).unwrap_err();
        assert!(matches!(
            err,
            HandbaseError::UnknownCommand { ref name } if name == "frobnicate"
        ));
    }

    #[test]
    fn resolves_import_file_path() {
        let catalog = Catalog::builtin();
        let command = resolve("importfile --f hands.json", &catalog).unwrap();
        assert_eq!(
            command,
            Command::ImportFile {
                path: PathBuf::from("hands.json"),
            }
        );
    }
}
