//! Score reporting and propagation along forward links.

use log::{debug, warn};
use std::collections::HashMap;

use super::state::{MatchState, ReportMode, Score, losers_champion_won};
use crate::elimination::{Bracket, BracketKind, MatchId, Side, SlotRef};
use crate::entrants::Entrant;
use crate::errors::{ReportError, ReportResult};

/// Result tracking for one generated elimination bracket.
///
/// The bracket itself is never modified; results live in a parallel list
/// of [`MatchState`]s. Each [`report`](BracketProgress::report) validates
/// everything it touches before changing any state.
#[derive(Debug, Clone)]
pub struct BracketProgress {
    bracket: Bracket,
    states: Vec<MatchState>,
    index: HashMap<MatchId, usize>,
}

impl BracketProgress {
    pub fn new(bracket: Bracket) -> Self {
        let states = bracket
            .matches
            .iter()
            .map(|m| MatchState::from_entrants(m.top.entrant().cloned(), m.bottom.entrant().cloned()))
            .collect();
        let index = bracket
            .matches
            .iter()
            .enumerate()
            .map(|(pos, m)| (m.id.clone(), pos))
            .collect();

        Self {
            bracket,
            states,
            index,
        }
    }

    pub fn bracket(&self) -> &Bracket {
        &self.bracket
    }

    pub fn state(&self, id: &MatchId) -> Option<&MatchState> {
        self.index.get(id).map(|&pos| &self.states[pos])
    }

    /// Matches waiting for a result, in bracket order
    pub fn reportable(&self) -> Vec<&MatchId> {
        self.bracket
            .matches
            .iter()
            .zip(&self.states)
            .filter(|(_, state)| state.is_reportable())
            .map(|(m, _)| &m.id)
            .collect()
    }

    /// Record a final score and move the winner and loser on.
    ///
    /// Returns the matches that became reportable because of this result.
    /// Reporting the same score twice is a no-op.
    ///
    /// # Errors
    ///
    /// * `MatchNotFound` - unknown id
    /// * `DrawNotAllowed` - equal scores
    /// * `InconsistentMatchState` - match not reportable, already decided
    ///   differently without `ReportMode::Override`, or an override whose
    ///   destination match is already decided
    pub fn report(
        &mut self,
        id: &MatchId,
        score: Score,
        mode: ReportMode,
    ) -> ReportResult<Vec<MatchId>> {
        let pos = *self
            .index
            .get(id)
            .ok_or_else(|| ReportError::MatchNotFound(id.clone()))?;
        let winner_side = score
            .winner()
            .ok_or_else(|| ReportError::DrawNotAllowed(id.clone()))?;

        let (top, bottom) = match &self.states[pos] {
            MatchState::Reportable { top, bottom } => (top.clone(), bottom.clone()),
            MatchState::Resolved {
                top,
                bottom,
                score: recorded,
                ..
            } => {
                if *recorded == score {
                    return Ok(Vec::new());
                }
                if mode != ReportMode::Override {
                    warn!("Rejected report for {id}: already decided {recorded:?}");
                    return Err(ReportError::inconsistent(
                        id,
                        format!(
                            "already decided {}-{}, override required",
                            recorded.top, recorded.bottom
                        ),
                    ));
                }
                (top.clone(), bottom.clone())
            }
            MatchState::Pending { .. } => {
                warn!("Rejected report for {id}: entrants not decided yet");
                return Err(ReportError::inconsistent(id, "both entrants are not known yet"));
            }
            MatchState::NotNeeded => {
                return Err(ReportError::inconsistent(id, "bracket reset is not needed"));
            }
        };

        let targets: Vec<SlotRef> = {
            let m = &self.bracket.matches[pos];
            m.winner_to.iter().chain(m.loser_to.iter()).cloned().collect()
        };
        for target in &targets {
            let dest = self.position(&target.match_id)?;
            if self.states[dest].is_resolved() {
                return Err(ReportError::inconsistent(
                    id,
                    format!("{} is already decided", target.match_id),
                ));
            }
        }

        // Validation done; commit.
        let (winner, loser) = match winner_side {
            Side::Top => (top.clone(), bottom.clone()),
            Side::Bottom => (bottom.clone(), top.clone()),
        };
        self.states[pos] = MatchState::Resolved {
            top,
            bottom,
            score,
            winner: winner_side,
        };
        debug!("Recorded {id}: {} beat {}", winner.name, loser.name);

        let (winner_to, loser_to, is_first_final) = {
            let m = &self.bracket.matches[pos];
            (
                m.winner_to.clone(),
                m.loser_to.clone(),
                m.bracket == BracketKind::GrandFinals,
            )
        };

        if is_first_final && !losers_champion_won(&self.states[pos]) {
            if let Some(target) = &winner_to {
                let dest = self.position(&target.match_id)?;
                self.states[dest] = MatchState::NotNeeded;
            }
            return Ok(Vec::new());
        }

        let mut ready = Vec::new();
        for (target, entrant) in [(winner_to, winner), (loser_to, loser)] {
            if let Some(target) = target {
                if self.place(&target, entrant)? {
                    ready.push(target.match_id);
                }
            }
        }
        ready.dedup();
        Ok(ready)
    }

    /// Tournament winner, once decided
    pub fn champion(&self) -> Option<&Entrant> {
        match self.bracket.grand_finals() {
            Some((first, reset)) => {
                let first_state = self.state(&first.id)?;
                let reset_state = self.state(&reset.id)?;
                match reset_state {
                    MatchState::Resolved { .. } => reset_state.winner(),
                    MatchState::NotNeeded => first_state.winner(),
                    _ => None,
                }
            }
            None => {
                let last = self.bracket.winners_final()?;
                self.state(&last.id)?.winner()
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.champion().is_some()
    }

    fn position(&self, id: &MatchId) -> ReportResult<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| ReportError::MatchNotFound(id.clone()))
    }

    /// Put `entrant` into a destination slot; true if the match became reportable
    fn place(&mut self, target: &SlotRef, entrant: Entrant) -> ReportResult<bool> {
        let dest = self.position(&target.match_id)?;
        let generated = &self.bracket.matches[dest];

        let mut sides = [
            self.states[dest]
                .entrant(Side::Top)
                .or_else(|| generated.top.entrant())
                .cloned(),
            self.states[dest]
                .entrant(Side::Bottom)
                .or_else(|| generated.bottom.entrant())
                .cloned(),
        ];
        sides[target.side.index()] = Some(entrant);

        let [top, bottom] = sides;
        let was_reportable = self.states[dest].is_reportable();
        self.states[dest] = MatchState::from_entrants(top, bottom);
        Ok(!was_reportable && self.states[dest].is_reportable())
    }
}
