//! Seed placement for elimination brackets.
//!
//! - [`seed_order`]: canonical left-to-right draw order for a power-of-two bracket
//! - [`pair`]: round-1 pairings with byes for the seeds beyond the entrant count
//! - [`Draw`]: the pairings as actually laid out in a bracket, with bye holders
//!   matched against round-1 winners

pub mod draw;
pub mod pairing;
pub mod seed_order;

pub use draw::Draw;
pub use pairing::{PairSlot, Pairing, PairingSet, pair};
pub use seed_order::{bracket_size, seed_order};
