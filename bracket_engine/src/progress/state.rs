//! Per-match progress states.

use serde::{Deserialize, Serialize};

use crate::elimination::{Side, reset_needed};
use crate::entrants::Entrant;

/// Final score of an elimination match, by slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub top: u32,
    pub bottom: u32,
}

impl Score {
    pub fn new(top: u32, bottom: u32) -> Self {
        Self { top, bottom }
    }

    /// Side with the strictly higher score
    pub fn winner(&self) -> Option<Side> {
        match self.top.cmp(&self.bottom) {
            std::cmp::Ordering::Greater => Some(Side::Top),
            std::cmp::Ordering::Less => Some(Side::Bottom),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// How a report treats an already decided match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportMode {
    /// Reject a result that differs from the recorded one
    #[default]
    Normal,
    /// Replace the recorded result while nothing downstream is decided
    Override,
}

/// Where a match stands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    /// Waiting on at least one earlier result
    Pending {
        top: Option<Entrant>,
        bottom: Option<Entrant>,
    },
    /// Both entrants known, no result yet
    Reportable { top: Entrant, bottom: Entrant },
    /// Decided
    Resolved {
        top: Entrant,
        bottom: Entrant,
        score: Score,
        winner: Side,
    },
    /// Bracket reset skipped because the winners champion won grand finals 1
    NotNeeded,
}

impl MatchState {
    pub(crate) fn from_entrants(top: Option<Entrant>, bottom: Option<Entrant>) -> Self {
        match (top, bottom) {
            (Some(top), Some(bottom)) => MatchState::Reportable { top, bottom },
            (top, bottom) => MatchState::Pending { top, bottom },
        }
    }

    /// Entrant currently known in `side`
    pub fn entrant(&self, side: Side) -> Option<&Entrant> {
        match self {
            MatchState::Pending { top, bottom } => match side {
                Side::Top => top.as_ref(),
                Side::Bottom => bottom.as_ref(),
            },
            MatchState::Reportable { top, bottom } | MatchState::Resolved { top, bottom, .. } => {
                match side {
                    Side::Top => Some(top),
                    Side::Bottom => Some(bottom),
                }
            }
            MatchState::NotNeeded => None,
        }
    }

    pub fn winner(&self) -> Option<&Entrant> {
        match self {
            MatchState::Resolved { winner, .. } => self.entrant(*winner),
            _ => None,
        }
    }

    pub fn loser(&self) -> Option<&Entrant> {
        match self {
            MatchState::Resolved { winner, .. } => self.entrant(winner.other()),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, MatchState::Resolved { .. })
    }

    pub fn is_reportable(&self) -> bool {
        matches!(self, MatchState::Reportable { .. })
    }
}

/// True when grand finals 1 went to the losers champion, so the reset is on
pub fn losers_champion_won(grand_finals_1: &MatchState) -> bool {
    match grand_finals_1 {
        MatchState::Resolved { winner, .. } => reset_needed(*winner),
        _ => false,
    }
}
