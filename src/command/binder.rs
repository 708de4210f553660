//! Parameter binding.
//!
//! Resolves parsed (flag, value) pairs against a command spec's declared
//! slots and constructs the command variant. Slots are matched by name or
//! alias against the normalized flag token; parsed pairs that match no
//! declared slot are ignored, which is what lets trailing junk after a
//! zero-parameter command name succeed.

use crate::command::catalog::CommandSpec;
use crate::command::convert::convert;
use crate::command::parser::FlagPair;
use crate::command::Command;
use crate::error::{HandbaseError, Result};

/// Bind parsed pairs to a command spec's slots and build the variant.
///
/// For each declared slot, in declaration order: find the first parsed pair
/// whose flag matches the slot's name or alias, convert its value token to
/// the slot's type, and collect the result. A required slot with no
/// matching pair fails with [`HandbaseError::MissingParameter`]; an
/// optional slot falls back to the converter's absent-token value.
pub fn bind(spec: &CommandSpec, pairs: &[FlagPair]) -> Result<Command> {
    let mut values = Vec::with_capacity(spec.slots.len());
    for slot in spec.slots {
        let pair = pairs.iter().find(|pair| slot.matches(&pair.flag));
        match pair {
            Some(pair) => values.push(convert(pair.value.as_deref(), slot.value_type)?),
            None if slot.required => {
                return Err(HandbaseError::MissingParameter {
                    slot: slot.name.to_string(),
                })
            }
            None => values.push(convert(None, slot.value_type)?),
        }
    }
    spec.build(&values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::catalog::Catalog;

    fn pair(flag: &str, value: Option<&str>) -> FlagPair {
        FlagPair {
            flag: flag.into(),
            value: value.map(String::from),
        }
    }

    #[test]
    fn binds_by_short_alias() {
        let catalog = Catalog::builtin();
        let spec = catalog.lookup("showplayer").unwrap();
        let command = bind(spec, &[pair("n", Some("alice"))]).unwrap();
        assert_eq!(
            command,
            Command::ShowPlayerInformation {
                nickname: "alice".into(),
            }
        );
    }

    #[test]
    fn binds_by_long_name() {
        let catalog = Catalog::builtin();
        let spec = catalog.lookup("showplayer").unwrap();
        let command = bind(spec, &[pair("nickname", Some("bob"))]).unwrap();
        assert_eq!(
            command,
            Command::ShowPlayerInformation {
                nickname: "bob".into(),
            }
        );
    }

    #[test]
    fn missing_required_slot_fails() {
        let catalog = Catalog::builtin();
        let spec = catalog.lookup("deletehand").unwrap();
        let err = bind(spec, &[]).unwrap_err();
        assert!(matches!(
            err,
            HandbaseError::MissingParameter { ref slot } if slot == "hand"
        ));
    }

    #[test]
    fn wrong_flag_does_not_fill_required_slot() {
        let catalog = Catalog::builtin();
        let spec = catalog.lookup("deletehand").unwrap();
        let err = bind(spec, &[pair("n", Some("42"))]).unwrap_err();
        assert!(matches!(err, HandbaseError::MissingParameter { .. }));
    }

    #[test]
    fn conversion_failure_propagates() {
        let catalog = Catalog::builtin();
        let spec = catalog.lookup("deletehand").unwrap();
        let err = bind(spec, &[pair("h", Some("abc"))]).unwrap_err();
        assert!(matches!(err, HandbaseError::TypeConversion { .. }));
    }

    #[test]
    fn unmatched_pairs_are_ignored() {
        let catalog = Catalog::builtin();
        let spec = catalog.lookup("showallinfo").unwrap();
        let command = bind(spec, &[pair("junk", Some("value"))]).unwrap();
        assert_eq!(command, Command::ShowAllHandsInformation);
    }
}
