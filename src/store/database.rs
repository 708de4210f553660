//! The in-memory hand-history store.
//!
//! [`Database`] is a persistent value: every mutation returns a new
//! `Database` and leaves the receiver untouched. The session loop owns
//! exactly one "current" value and replaces it after each successful
//! command, so there is no shared mutable state anywhere in the store.
//!
//! Two sequences make up the store:
//! - the live hands, in insertion order (the canonical order for every
//!   query), and
//! - the deleted-id audit log, append-only and never deduplicated.

use crate::store::hand::{HandHistory, HandId};

/// The current in-memory session store: live hands plus the deleted-id
/// audit log.
#[derive(Debug, Clone, Default)]
pub struct Database {
    hands: Vec<HandHistory>,
    deleted_hand_ids: Vec<HandId>,
}

impl Database {
    /// Create an empty store.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Total number of live hands.
    pub fn hand_count(&self) -> usize {
        self.hands.len()
    }

    /// Live hands in insertion order.
    pub fn hands(&self) -> &[HandHistory] {
        &self.hands
    }

    /// Distinct player nicknames across all live hands, in first-seen order.
    pub fn player_nicknames(&self) -> Vec<&str> {
        let mut nicknames: Vec<&str> = Vec::new();
        for hand in &self.hands {
            for player in &hand.players {
                if !nicknames.contains(&player.nickname.as_str()) {
                    nicknames.push(&player.nickname);
                }
            }
        }
        nicknames
    }

    /// Number of distinct player nicknames across all live hands.
    pub fn player_count(&self) -> usize {
        self.player_nicknames().len()
    }

    /// Number of live hands in which the given nickname is seated.
    /// Matching is exact and case-sensitive.
    pub fn player_hand_count(&self, nickname: &str) -> usize {
        self.hands
            .iter()
            .filter(|hand| hand.contains_player(nickname))
            .count()
    }

    /// Up to `count` hands containing the given nickname.
    ///
    /// Despite the name, this takes the FIRST matches in insertion order,
    /// not the most recently inserted ones. The name is kept from the
    /// reference behavior so the mismatch stays visible at the API surface.
    pub fn last_player_hands(&self, nickname: &str, count: usize) -> Vec<&HandHistory> {
        self.hands
            .iter()
            .filter(|hand| hand.contains_player(nickname))
            .take(count)
            .collect()
    }

    /// The deleted-id audit log, in append order. Duplicates are retained.
    pub fn deleted_hand_ids(&self) -> &[HandId] {
        &self.deleted_hand_ids
    }

    /// Return a new store with `hand` appended to the live sequence.
    ///
    /// No id-collision check is performed; importing a duplicate id simply
    /// stores both hands.
    #[must_use]
    pub fn add_hand(&self, hand: HandHistory) -> Database {
        let mut hands = self.hands.clone();
        hands.push(hand);
        Database {
            hands,
            deleted_hand_ids: self.deleted_hand_ids.clone(),
        }
    }

    /// Return a new store with every hand matching `hand_id` removed and
    /// `hand_id` appended to the audit log.
    ///
    /// The append happens unconditionally, even when no live hand matched;
    /// deleting the same id twice records two log entries.
    #[must_use]
    pub fn delete_hand(&self, hand_id: HandId) -> Database {
        let hands = self
            .hands
            .iter()
            .filter(|hand| hand.hand_id != hand_id)
            .cloned()
            .collect();
        let mut deleted_hand_ids = self.deleted_hand_ids.clone();
        deleted_hand_ids.push(hand_id);
        Database {
            hands,
            deleted_hand_ids,
        }
    }
}
