//! The command catalog.
//!
//! An explicit compile-time registry of every command variant: its
//! invocation name, description, declared parameter slots, and a factory
//! that constructs the variant from bound values. Built once at session
//! start; lookup is a case-sensitive exact match.

use std::path::PathBuf;

use crate::command::convert::{ParamType, ParamValue};
use crate::command::Command;
use crate::error::{HandbaseError, Result};

/// A declared parameter slot: a named, typed input addressable by its long
/// name or short alias.
#[derive(Debug, Clone, Copy)]
pub struct SlotSpec {
    /// Long flag name (matched against normalized flag tokens).
    pub name: &'static str,
    /// Optional short alias.
    pub alias: Option<&'static str>,
    /// Target value type.
    pub value_type: ParamType,
    /// Whether binding fails when no parsed pair matches this slot.
    pub required: bool,
}

impl SlotSpec {
    /// Check whether a normalized flag token addresses this slot.
    pub fn matches(&self, flag: &str) -> bool {
        flag == self.name || Some(flag) == self.alias
    }
}

/// One catalog entry: a command variant's name, description, ordered
/// parameter slots, and construction factory.
///
/// The factory receives one [`ParamValue`] per declared slot, in
/// declaration order, as guaranteed by the binder.
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub slots: &'static [SlotSpec],
    build: fn(&[ParamValue]) -> Result<Command>,
}

impl CommandSpec {
    /// Construct the command variant from bound slot values.
    pub fn build(&self, values: &[ParamValue]) -> Result<Command> {
        (self.build)(values)
    }
}

/// Static registry of all command variants.
pub struct Catalog {
    specs: Vec<CommandSpec>,
}

impl Catalog {
    /// Build the catalog of built-in commands.
    pub fn builtin() -> Self {
        Self {
            specs: vec![
                CommandSpec {
                    name: "showallinfo",
                    description: "Show total hand and player counts",
                    slots: &[],
                    build: build_show_all,
                },
                CommandSpec {
                    name: "showplayer",
                    description: "Show a player's hand count and up to ten of their hands",
                    slots: &[SlotSpec {
                        name: "nickname",
                        alias: Some("n"),
                        value_type: ParamType::Str,
                        required: true,
                    }],
                    build: build_show_player,
                },
                CommandSpec {
                    name: "deletehand",
                    description: "Delete every hand with the given id",
                    slots: &[SlotSpec {
                        name: "hand",
                        alias: Some("h"),
                        value_type: ParamType::I64,
                        required: true,
                    }],
                    build: build_delete_hand,
                },
                CommandSpec {
                    name: "showdeletedhands",
                    description: "Show the deleted-hand audit log",
                    slots: &[],
                    build: build_show_deleted,
                },
                CommandSpec {
                    name: "importfile",
                    description: "Import hands from a file",
                    slots: &[SlotSpec {
                        name: "file",
                        alias: Some("f"),
                        value_type: ParamType::Str,
                        required: true,
                    }],
                    build: build_import_file,
                },
            ],
        }
    }

    /// Look up a command spec by exact, case-sensitive name.
    pub fn lookup(&self, name: &str) -> Option<&CommandSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    /// All registered specs, in registration order.
    pub fn specs(&self) -> &[CommandSpec] {
        &self.specs
    }
}

/// Error for a factory handed values that do not match its declared slots.
/// This indicates a catalog programming error, never bad user input.
fn slot_mismatch(spec: &str) -> HandbaseError {
    HandbaseError::UnsupportedParameterType {
        type_name: spec.to_string(),
    }
}

fn build_show_all(_values: &[ParamValue]) -> Result<Command> {
    Ok(Command::ShowAllHandsInformation)
}

fn build_show_player(values: &[ParamValue]) -> Result<Command> {
    match values {
        [ParamValue::Str(nickname)] => Ok(Command::ShowPlayerInformation {
            nickname: nickname.clone(),
        }),
        _ => Err(slot_mismatch("showplayer expects one string slot")),
    }
}

fn build_delete_hand(values: &[ParamValue]) -> Result<Command> {
    match values {
        [ParamValue::I64(hand_id)] => Ok(Command::DeleteHand { hand_id: *hand_id }),
        _ => Err(slot_mismatch("deletehand expects one 64-bit integer slot")),
    }
}

fn build_show_deleted(_values: &[ParamValue]) -> Result<Command> {
    Ok(Command::ShowDeletedHands)
}

fn build_import_file(values: &[ParamValue]) -> Result<Command> {
    match values {
        [ParamValue::Str(path)] => Ok(Command::ImportFile {
            path: PathBuf::from(path),
        }),
        _ => Err(slot_mismatch("importfile expects one string slot")),
    }
}
