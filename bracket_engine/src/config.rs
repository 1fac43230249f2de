//! Event configuration models.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{BracketError, BracketResult};

/// Opaque event identifier, carried through to generated values untouched
pub type EventId = String;

/// Tournament format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    SingleElimination,
    DoubleElimination,
    RoundRobin,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::SingleElimination => write!(f, "single_elimination"),
            Format::DoubleElimination => write!(f, "double_elimination"),
            Format::RoundRobin => write!(f, "round_robin"),
        }
    }
}

impl FromStr for Format {
    type Err = BracketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "single" | "single_elimination" => Ok(Format::SingleElimination),
            "double" | "double_elimination" => Ok(Format::DoubleElimination),
            "round_robin" | "roundrobin" | "rr" => Ok(Format::RoundRobin),
            other => Err(BracketError::InvalidConfig(format!(
                "unknown format '{other}'"
            ))),
        }
    }
}

/// Event configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventConfig {
    /// Event identifier (tag only)
    pub event_id: EventId,

    /// Requested format
    pub format: Format,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            event_id: "event".to_string(),
            format: Format::SingleElimination,
        }
    }
}

impl EventConfig {
    /// Create a configuration for the given event and format
    pub fn new(event_id: impl Into<EventId>, format: Format) -> Self {
        Self {
            event_id: event_id.into(),
            format,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> BracketResult<()> {
        if self.event_id.trim().is_empty() {
            return Err(BracketError::InvalidConfig(
                "event id must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
