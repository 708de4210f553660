//! Domain records for a single poker hand.
//!
//! A [`HandHistory`] is one recorded hand, identified by a numeric id, with
//! its seated [`Player`] entries. These are the records hand-history files
//! deserialize into; the store holds them untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric identifier of a recorded hand.
///
/// Assumed unique among currently-stored hands at insertion time; the store
/// does not enforce this.
pub type HandId = i64;

/// A dealt card. Opaque to the store; rendered as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card(pub String);

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Currency a player's stack is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    Dollar,
    Euro,
    #[default]
    Undefined,
}

impl Currency {
    /// Short symbol used when rendering stacks.
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Dollar => "$",
            Currency::Euro => "€",
            Currency::Undefined => "?",
        }
    }
}

/// One seated player within a hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Seat number at the table.
    pub seat_number: i32,

    /// Player nickname. Matching is exact and case-sensitive.
    pub nickname: String,

    /// Stack size at the start of the hand.
    pub stack_size: f64,

    /// Currency of the stack.
    #[serde(default)]
    pub currency: Currency,

    /// Cards dealt to this player, in deal order.
    #[serde(default)]
    pub dealt_cards: Vec<Card>,
}

/// One recorded poker hand with its seated players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandHistory {
    /// Numeric hand identifier.
    pub hand_id: HandId,

    /// Seated players, in seat order as recorded.
    pub players: Vec<Player>,
}

impl HandHistory {
    /// Check whether a player with the given nickname is seated in this hand.
    pub fn contains_player(&self, nickname: &str) -> bool {
        self.players.iter().any(|p| p.nickname == nickname)
    }

    /// Look up the seated player with the given nickname.
    pub fn player(&self, nickname: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.nickname == nickname)
    }

    /// Render this hand from the perspective of one seated player.
    ///
    /// Returns `None` if the nickname is not seated in this hand.
    pub fn describe_player(&self, nickname: &str) -> Option<String> {
        let player = self.player(nickname)?;
        let cards = if player.dealt_cards.is_empty() {
            "-".to_string()
        } else {
            player
                .dealt_cards
                .iter()
                .map(|c| c.0.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        };
        Some(format!(
            "Hand {}: seat {}, stack {:.2}{}, cards {}",
            self.hand_id,
            player.seat_number,
            player.stack_size,
            player.currency.symbol(),
            cards
        ))
    }
}
