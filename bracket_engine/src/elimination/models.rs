//! Elimination bracket data models.
//!
//! A bracket is an arena of [`Match`] records. Edges are plain data: each
//! slot names the match whose winner or loser fills it, and each match names
//! the `(match, side)` its winner and loser move on to.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{EventId, Format};
use crate::entrants::Entrant;

/// Stable match identifier, resolvable before any result exists
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(String);

impl MatchId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Winners bracket (or single elimination) match, e.g. `W2-1`
    pub fn winners(round: u32, number: u32) -> Self {
        Self(format!("W{round}-{number}"))
    }

    /// Losers bracket match, e.g. `L3-2`
    pub fn losers(round: u32, number: u32) -> Self {
        Self(format!("L{round}-{number}"))
    }

    /// Grand finals match 1 or 2 (`GF1`, `GF2`)
    pub fn grand_finals(number: u32) -> Self {
        Self(format!("GF{number}"))
    }

    /// Round-robin fixture, e.g. `RR4-2`
    pub fn round_robin(round: u32, number: u32) -> Self {
        Self(format!("RR{round}-{number}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for MatchId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Which of a match's two slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Top, Side::Bottom];

    pub fn other(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Bottom => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Top => write!(f, "top"),
            Side::Bottom => write!(f, "bottom"),
        }
    }
}

/// Destination of an advancing entrant
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotRef {
    pub match_id: MatchId,
    pub side: Side,
}

impl SlotRef {
    pub fn new(match_id: MatchId, side: Side) -> Self {
        Self { match_id, side }
    }
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.match_id, self.side)
    }
}

/// Where a pending slot's entrant comes from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Winner(MatchId),
    Loser(MatchId),
}

impl Source {
    pub fn match_id(&self) -> &MatchId {
        match self {
            Source::Winner(id) | Source::Loser(id) => id,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Winner(id) => write!(f, "winner of {id}"),
            Source::Loser(id) => write!(f, "loser of {id}"),
        }
    }
}

/// Contents of a match slot at generation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Placed directly by the draw
    Entrant(Entrant),
    /// Reached this slot through a round-1 bye
    ByeAdvanced(Entrant),
    /// To be decided by an earlier match
    Pending(Source),
}

impl Slot {
    /// Concrete entrant, if already known
    pub fn entrant(&self) -> Option<&Entrant> {
        match self {
            Slot::Entrant(e) | Slot::ByeAdvanced(e) => Some(e),
            Slot::Pending(_) => None,
        }
    }

    pub fn source(&self) -> Option<&Source> {
        match self {
            Slot::Pending(source) => Some(source),
            _ => None,
        }
    }

    pub fn is_bye_advanced(&self) -> bool {
        matches!(self, Slot::ByeAdvanced(_))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Entrant(e) => write!(f, "{e}"),
            Slot::ByeAdvanced(e) => write!(f, "{e} [bye]"),
            Slot::Pending(source) => write!(f, "{source}"),
        }
    }
}

/// Part of the bracket a match belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketKind {
    Winners,
    Losers,
    GrandFinals,
    Reset,
}

impl fmt::Display for BracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketKind::Winners => write!(f, "winners"),
            BracketKind::Losers => write!(f, "losers"),
            BracketKind::GrandFinals => write!(f, "grand_finals"),
            BracketKind::Reset => write!(f, "reset"),
        }
    }
}

/// One match of an elimination bracket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    /// Overall round, increasing across winners, losers and finals
    pub round: u32,
    pub bracket: BracketKind,
    /// Round within its own bracket
    pub bracket_round: u32,
    /// 1-based position within its bracket round
    pub number: u32,
    pub top: Slot,
    pub bottom: Slot,
    pub winner_to: Option<SlotRef>,
    pub loser_to: Option<SlotRef>,
}

impl Match {
    pub fn slot(&self, side: Side) -> &Slot {
        match side {
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
        }
    }

    /// An entrant reached this match through a round-1 bye
    pub fn is_bye(&self) -> bool {
        self.top.is_bye_advanced() || self.bottom.is_bye_advanced()
    }

    pub fn is_grand_finals(&self) -> bool {
        matches!(self.bracket, BracketKind::GrandFinals | BracketKind::Reset)
    }

    pub fn is_bracket_reset(&self) -> bool {
        self.bracket == BracketKind::Reset
    }

    /// Match whose winner fills `side`
    pub fn previous_match(&self, side: Side) -> Option<&MatchId> {
        match self.slot(side) {
            Slot::Pending(Source::Winner(id)) => Some(id),
            _ => None,
        }
    }

    /// Match whose loser fills `side`
    pub fn previous_match_loser(&self, side: Side) -> Option<&MatchId> {
        match self.slot(side) {
            Slot::Pending(Source::Loser(id)) => Some(id),
            _ => None,
        }
    }

    /// Winners final feeding grand finals 1
    pub fn previous_winners_match(&self) -> Option<&MatchId> {
        if self.bracket != BracketKind::GrandFinals {
            return None;
        }
        self.previous_match(Side::Top)
    }

    /// Losers final feeding grand finals 1; with two entrants this is the
    /// winners final itself, whose loser drops straight in
    pub fn previous_losers_match(&self) -> Option<&MatchId> {
        if self.bracket != BracketKind::GrandFinals {
            return None;
        }
        self.slot(Side::Bottom).source().map(Source::match_id)
    }

    /// Both entrants known without any result being reported
    pub fn is_ready(&self) -> bool {
        self.top.entrant().is_some() && self.bottom.entrant().is_some()
    }
}

/// Shape summary of a generated bracket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketSummary {
    pub bracket_type: Format,
    pub entrant_count: usize,
    pub bracket_size: usize,
    pub bye_count: usize,
    pub winners_rounds: u32,
    pub losers_rounds: u32,
    /// Highest overall round number
    pub total_rounds: u32,
}

/// A generated elimination bracket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    pub event_id: EventId,
    pub summary: BracketSummary,
    pub entrants: Vec<Entrant>,
    pub matches: Vec<Match>,
}

impl Bracket {
    pub fn get(&self, id: &MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| &m.id == id)
    }

    pub fn matches_in(&self, kind: BracketKind) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(move |m| m.bracket == kind)
    }

    /// Matches of one bracket grouped by bracket round, in round order
    pub fn rounds(&self, kind: BracketKind) -> Vec<(u32, Vec<&Match>)> {
        let mut rounds: Vec<(u32, Vec<&Match>)> = Vec::new();
        for m in self.matches_in(kind) {
            match rounds.iter_mut().find(|(round, _)| *round == m.bracket_round) {
                Some((_, list)) => list.push(m),
                None => rounds.push((m.bracket_round, vec![m])),
            }
        }
        rounds.sort_by_key(|(round, _)| *round);
        rounds
    }

    /// Last match of the winners bracket
    pub fn winners_final(&self) -> Option<&Match> {
        self.matches_in(BracketKind::Winners)
            .find(|m| m.bracket_round == self.summary.winners_rounds)
    }

    /// Grand finals match 1 and the reset, for double elimination
    pub fn grand_finals(&self) -> Option<(&Match, &Match)> {
        let first = self.matches_in(BracketKind::GrandFinals).next()?;
        let reset = self.matches_in(BracketKind::Reset).next()?;
        Some((first, reset))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_id_formats() {
        assert_eq!(MatchId::winners(2, 1).as_str(), "W2-1");
        assert_eq!(MatchId::losers(3, 4).as_str(), "L3-4");
        assert_eq!(MatchId::grand_finals(2).as_str(), "GF2");
        assert_eq!(MatchId::round_robin(1, 3).as_str(), "RR1-3");
    }

    #[test]
    fn test_slot_accessors() {
        let a = Entrant::new("A", 1);
        assert_eq!(Slot::Entrant(a.clone()).entrant(), Some(&a));
        assert!(Slot::ByeAdvanced(a.clone()).is_bye_advanced());

        let pending = Slot::Pending(Source::Loser(MatchId::winners(1, 2)));
        assert!(pending.entrant().is_none());
        assert_eq!(pending.to_string(), "loser of W1-2");
    }

    #[test]
    fn test_side_other() {
        assert_eq!(Side::Top.other(), Side::Bottom);
        assert_eq!(Side::Bottom.other(), Side::Top);
        assert_eq!(Side::Bottom.index(), 1);
    }

    #[test]
    fn test_slot_serializes_with_tag() {
        let slot = Slot::Pending(Source::Winner(MatchId::winners(1, 1)));
        let json = serde_json::to_value(&slot).unwrap();
        assert_eq!(json, serde_json::json!({ "pending": { "winner": "W1-1" } }));
    }
}
