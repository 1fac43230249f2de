//! Score reporting on top of a generated elimination bracket.
//!
//! Each match moves through `Pending -> Reportable -> Resolved`; the reset
//! match of a double elimination bracket becomes `NotNeeded` when the
//! winners champion takes grand finals 1.
//!
//! ## Example
//!
//! ```
//! use bracket_engine::Roster;
//! use bracket_engine::elimination::{MatchId, build_single_elimination};
//! use bracket_engine::progress::{BracketProgress, ReportMode, Score};
//!
//! let roster = Roster::from_names(&["A", "B"]).unwrap();
//! let bracket = build_single_elimination(&"final".to_string(), &roster).unwrap();
//! let mut progress = BracketProgress::new(bracket);
//!
//! progress
//!     .report(&MatchId::winners(1, 1), Score::new(3, 1), ReportMode::Normal)
//!     .unwrap();
//! assert_eq!(progress.champion().unwrap().name, "A");
//! ```

pub mod manager;
pub mod state;

pub use manager::BracketProgress;
pub use state::{MatchState, ReportMode, Score, losers_champion_won};
