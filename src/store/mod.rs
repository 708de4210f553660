//! The versioned in-memory hand-history store.
//!
//! - [`hand`] - Domain records: hands, players, cards
//! - [`database`] - The persistent-value store and its query operations

pub mod database;
pub mod hand;

pub use database::Database;
pub use hand::{Card, Currency, HandHistory, HandId, Player};
