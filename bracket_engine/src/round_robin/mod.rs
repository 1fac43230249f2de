//! Round-robin scheduling and standings.
//!
//! The scheduler takes an already ordered roster (callers shuffle first if
//! they want a random draw, see [`crate::Roster::shuffled`]). Standings are a
//! pure fold over results and are recomputed rather than stored.

pub mod schedule;
pub mod standings;

pub use schedule::{Fixture, RoundRobinSchedule, ScheduleRound, schedule};
pub use standings::{MatchResult, StandingsRow, StandingsTable, standings, standings_for_roster};
