//! Command dispatching.
//!
//! A total mapping from each [`Command`] variant to the store
//! transformation or query it represents. Every dispatch is a pure state
//! transition: it takes the current [`Database`] by reference and returns
//! a fresh one together with the console lines to print. The caller's
//! value is never mutated, so a failed dispatch leaves the session's
//! current store untouched.

use crate::command::Command;
use crate::error::Result;
use crate::import::{import_hands, HandParser};
use crate::store::Database;

/// How many matching hands `showplayer` prints.
const PLAYER_HANDS_SHOWN: usize = 10;

/// Result of dispatching one command: the replacement store value and the
/// output lines, in print order.
#[derive(Debug)]
pub struct DispatchOutcome {
    pub database: Database,
    pub lines: Vec<String>,
}

impl DispatchOutcome {
    fn query(database: &Database, lines: Vec<String>) -> Self {
        Self {
            database: database.clone(),
            lines,
        }
    }
}

/// Apply a command to the current store.
///
/// Queries return a clone of the store unchanged; mutations return the
/// transformed value. `importfile` is the only fallible arm: read and
/// parse failures from the hand-file collaborator propagate unmodified.
pub fn dispatch(
    command: &Command,
    database: &Database,
    parser: &dyn HandParser,
) -> Result<DispatchOutcome> {
    match command {
        Command::ShowAllHandsInformation => {
            let lines = vec![format!(
                "Hands in database: {}. Players in database: {}",
                database.hand_count(),
                database.player_count()
            )];
            Ok(DispatchOutcome::query(database, lines))
        }
        Command::ShowPlayerInformation { nickname } => {
            let count = database.player_hand_count(nickname);
            let mut lines = vec![
                format!("Player {} has played {} hands.", nickname, count),
                "Last ten hands:".to_string(),
            ];
            for hand in database.last_player_hands(nickname, PLAYER_HANDS_SHOWN) {
                if let Some(line) = hand.describe_player(nickname) {
                    lines.push(line);
                }
            }
            Ok(DispatchOutcome::query(database, lines))
        }
        Command::DeleteHand { hand_id } => Ok(DispatchOutcome {
            database: database.delete_hand(*hand_id),
            lines: vec![format!("Hand {} deleted", hand_id)],
        }),
        Command::ShowDeletedHands => {
            let mut lines = vec!["Deleted hands:".to_string()];
            lines.extend(
                database
                    .deleted_hand_ids()
                    .iter()
                    .map(|id| id.to_string()),
            );
            Ok(DispatchOutcome::query(database, lines))
        }
        Command::ImportFile { path } => {
            let hands = import_hands(path, parser)?;
            let count = hands.len();
            let mut next = database.clone();
            for hand in hands {
                next = next.add_hand(hand);
            }
            Ok(DispatchOutcome {
                database: next,
                lines: vec![format!("Imported {} hands from {}", count, path.display())],
            })
        }
    }
}
