//! Format dispatch: one entry point for every supported format.

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{EventConfig, EventId, Format};
use crate::elimination::{Bracket, build_double_elimination, build_single_elimination};
use crate::entrants::{EntrantInput, Roster};
use crate::errors::BracketResult;
use crate::round_robin::{RoundRobinSchedule, schedule};

/// Output of a generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratedEvent {
    Elimination(Bracket),
    RoundRobin(RoundRobinSchedule),
}

impl GeneratedEvent {
    pub fn as_bracket(&self) -> Option<&Bracket> {
        match self {
            GeneratedEvent::Elimination(bracket) => Some(bracket),
            GeneratedEvent::RoundRobin(_) => None,
        }
    }

    pub fn as_schedule(&self) -> Option<&RoundRobinSchedule> {
        match self {
            GeneratedEvent::RoundRobin(plan) => Some(plan),
            GeneratedEvent::Elimination(_) => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for GeneratedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratedEvent::Elimination(bracket) => bracket.fmt(f),
            GeneratedEvent::RoundRobin(plan) => plan.fmt(f),
        }
    }
}

/// Builds the structure of one format
#[enum_dispatch]
pub trait Generator {
    fn generate(&self, event_id: &EventId, roster: &Roster) -> BracketResult<GeneratedEvent>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SingleElimination;

#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleElimination;

#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin;

impl Generator for SingleElimination {
    fn generate(&self, event_id: &EventId, roster: &Roster) -> BracketResult<GeneratedEvent> {
        build_single_elimination(event_id, roster).map(GeneratedEvent::Elimination)
    }
}

impl Generator for DoubleElimination {
    fn generate(&self, event_id: &EventId, roster: &Roster) -> BracketResult<GeneratedEvent> {
        build_double_elimination(event_id, roster).map(GeneratedEvent::Elimination)
    }
}

impl Generator for RoundRobin {
    fn generate(&self, event_id: &EventId, roster: &Roster) -> BracketResult<GeneratedEvent> {
        schedule(event_id, roster).map(GeneratedEvent::RoundRobin)
    }
}

/// Generator selected by [`Format`]
#[enum_dispatch(Generator)]
#[derive(Debug, Clone, Copy)]
pub enum FormatGenerator {
    SingleElimination,
    DoubleElimination,
    RoundRobin,
}

impl From<Format> for FormatGenerator {
    fn from(format: Format) -> Self {
        match format {
            Format::SingleElimination => SingleElimination.into(),
            Format::DoubleElimination => DoubleElimination.into(),
            Format::RoundRobin => RoundRobin.into(),
        }
    }
}

/// Validate the configuration and roster, then build the requested format.
///
/// # Errors
///
/// Any [`crate::BracketError`] from configuration or roster validation.
/// Generation itself never fails for a valid roster.
pub fn generate(config: &EventConfig, inputs: &[EntrantInput]) -> BracketResult<GeneratedEvent> {
    config.validate()?;
    let roster = Roster::from_inputs(inputs)?;
    FormatGenerator::from(config.format).generate(&config.event_id, &roster)
}
