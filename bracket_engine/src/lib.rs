//! # Bracket Engine
//!
//! Tournament structure generation: seeded single and double elimination
//! brackets, round-robin schedules and standings.
//!
//! Generation is deterministic. The same roster always produces the same
//! structure; randomness only enters through [`Roster::shuffled`], which
//! callers apply before generating if they want a random draw.
//!
//! ## Core Modules
//!
//! - [`seeding`]: seed order, round-1 pairings and byes
//! - [`elimination`]: single and double elimination builders and the
//!   [`Bracket`] model
//! - [`round_robin`]: circle-method schedules and standings
//! - [`progress`]: score reporting on a generated bracket
//! - [`generator`]: one entry point dispatching on [`Format`]
//!
//! ## Example
//!
//! ```
//! use bracket_engine::{EntrantInput, EventConfig, Format, generate};
//!
//! let inputs: Vec<EntrantInput> = ["A", "B", "C", "D", "E", "F"]
//!     .into_iter()
//!     .map(EntrantInput::named)
//!     .collect();
//! let config = EventConfig::new("spring-open", Format::SingleElimination);
//!
//! let event = generate(&config, &inputs).unwrap();
//! let bracket = event.as_bracket().unwrap();
//! assert_eq!(bracket.summary.bye_count, 2);
//! assert_eq!(bracket.matches.len(), 5);
//! ```

pub mod config;
pub mod elimination;
pub mod entrants;
pub mod errors;
pub mod generator;
pub mod progress;
pub mod round_robin;
pub mod seeding;

pub use config::{EventConfig, EventId, Format};
pub use elimination::{Bracket, BracketSummary, Match, MatchId};
pub use entrants::{Entrant, EntrantInput, MIN_ENTRANTS, Roster};
pub use errors::{BracketError, BracketResult, ReportError, ReportResult};
pub use generator::{FormatGenerator, GeneratedEvent, Generator, generate};
pub use round_robin::{MatchResult, RoundRobinSchedule, StandingsRow, standings};
