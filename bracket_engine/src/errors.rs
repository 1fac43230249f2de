//! Error types for bracket generation and score reporting.

use thiserror::Error;

use crate::elimination::MatchId;

/// Bracket generation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BracketError {
    /// Fewer than two entrants; no bracket exists
    #[error("Invalid entrant count: need at least 2, got {0}")]
    InvalidEntrantCount(usize),

    /// Seed order requested for a size that is not a power of two >= 2
    #[error("Invalid bracket size: {0} is not a power of two >= 2")]
    InvalidSize(usize),

    /// Entrant record without a usable name
    #[error("Entrant at position {index} has no name")]
    MissingName { index: usize },

    /// Explicit seed outside 1..=count
    #[error("Invalid seed {seed}: must be between 1 and {count}")]
    InvalidSeed { seed: u32, count: usize },

    /// Two entrants claim the same seed
    #[error("Duplicate seed: {0}")]
    DuplicateSeed(u32),

    /// Two entrants share a display name; standings are keyed by name
    #[error("Duplicate entrant name: {0}")]
    DuplicateName(String),

    /// Event configuration rejected by validation
    #[error("Invalid event configuration: {0}")]
    InvalidConfig(String),
}

impl BracketError {
    /// Short message suitable for showing to whoever submitted the roster
    pub fn client_message(&self) -> String {
        match self {
            BracketError::InvalidSize(_) => "Internal bracket sizing error".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for bracket generation
pub type BracketResult<T> = Result<T, BracketError>;

/// Score reporting errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// No match with this id in the bracket
    #[error("Match not found: {0}")]
    MatchNotFound(MatchId),

    /// Elimination matches need a winner
    #[error("Draw reported for elimination match {0}")]
    DrawNotAllowed(MatchId),

    /// Match cannot accept this report in its current state
    #[error("Inconsistent state for match {match_id}: {reason}")]
    InconsistentMatchState { match_id: MatchId, reason: String },
}

impl ReportError {
    pub(crate) fn inconsistent(match_id: &MatchId, reason: impl Into<String>) -> Self {
        ReportError::InconsistentMatchState {
            match_id: match_id.clone(),
            reason: reason.into(),
        }
    }
}

/// Result type for score reporting
pub type ReportResult<T> = Result<T, ReportError>;
