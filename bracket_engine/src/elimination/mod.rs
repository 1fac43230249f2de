//! Elimination brackets: single and double elimination builders.
//!
//! Both builders lay out the first round with [`crate::seeding::Draw`],
//! grow a full power-of-two graph of matches, then remove the matches byes
//! make unplayable. The result is a flat [`Bracket`] whose matches reference
//! each other by [`MatchId`] only.

mod graph;
mod render;

pub mod double;
pub mod ladder;
pub mod models;
pub mod single;

pub use double::{build_double_elimination, reset_needed};
pub use ladder::{FeedOrder, LosersLadder, LosersRound};
pub use models::{
    Bracket, BracketKind, BracketSummary, Match, MatchId, Side, Slot, SlotRef, Source,
};
pub use single::build_single_elimination;
