//! Logical advancement graph shared by the elimination builders.
//!
//! Builders push nodes for every match of a full power-of-two bracket.
//! [`BracketGraph::finish`] then drops the matches byes make unplayable,
//! forwards their single entrant, numbers what is left and derives the
//! forward links from the slot sources.

use log::debug;
use std::collections::HashMap;

use super::models::{
    Bracket, BracketKind, BracketSummary, Match, MatchId, Side, Slot, SlotRef, Source,
};
use crate::config::{EventId, Format};
use crate::entrants::Roster;
use crate::errors::{BracketError, BracketResult};
use crate::seeding::{Draw, PairSlot};

pub(crate) type NodeIdx = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Feed {
    Seat(u32),
    Bye,
    /// Seat reached through a bye; only produced while pruning
    Advanced(u32),
    Winner(NodeIdx),
    Loser(NodeIdx),
}

impl From<PairSlot> for Feed {
    fn from(slot: PairSlot) -> Self {
        match slot {
            PairSlot::Seed(seed) => Feed::Seat(seed),
            PairSlot::Bye => Feed::Bye,
        }
    }
}

#[derive(Debug, Clone)]
struct Node {
    kind: BracketKind,
    round: u32,
    feeds: [Feed; 2],
}

#[derive(Debug, Clone, Copy)]
enum Outcome {
    Kept([Feed; 2]),
    /// Not played; carries whatever single entrant source reached it
    Collapsed(Option<Feed>),
}

#[derive(Debug, Default)]
pub(crate) struct BracketGraph {
    nodes: Vec<Node>,
}

impl BracketGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, kind: BracketKind, round: u32, feeds: [Feed; 2]) -> NodeIdx {
        self.nodes.push(Node { kind, round, feeds });
        self.nodes.len() - 1
    }

    /// Add the winners bracket for `draw`, returning node indices per round
    pub(crate) fn add_winners(&mut self, draw: &Draw) -> Vec<Vec<NodeIdx>> {
        let mut rounds: Vec<Vec<NodeIdx>> = Vec::with_capacity(draw.rounds() as usize);

        let first: Vec<NodeIdx> = draw
            .pairings
            .iter()
            .map(|p| self.push(BracketKind::Winners, 1, [p.top.into(), p.bottom.into()]))
            .collect();
        rounds.push(first);

        for round in 2..=draw.rounds() {
            let previous = &rounds[rounds.len() - 1];
            let feeds: Vec<[Feed; 2]> = previous
                .chunks(2)
                .map(|pair| [Feed::Winner(pair[0]), Feed::Winner(pair[1])])
                .collect();
            let current = feeds
                .into_iter()
                .map(|f| self.push(BracketKind::Winners, round, f))
                .collect();
            rounds.push(current);
        }

        rounds
    }

    /// Prune, number and link the graph into a bracket
    pub(crate) fn finish(
        self,
        event_id: &EventId,
        format: Format,
        roster: &Roster,
        draw: &Draw,
    ) -> BracketResult<Bracket> {
        let outcomes = self.prune();

        // Compact bracket rounds: pruning can empty whole losers rounds.
        let mut kept_rounds: HashMap<BracketKind, Vec<u32>> = HashMap::new();
        for (node, outcome) in self.nodes.iter().zip(&outcomes) {
            if let Outcome::Kept(_) = outcome {
                let rounds = kept_rounds.entry(node.kind).or_default();
                if !rounds.contains(&node.round) {
                    rounds.push(node.round);
                }
            }
        }
        for rounds in kept_rounds.values_mut() {
            rounds.sort_unstable();
        }
        let compact = |kind: BracketKind, round: u32| -> u32 {
            kept_rounds
                .get(&kind)
                .and_then(|rounds| rounds.iter().position(|&r| r == round))
                .map_or(round, |pos| pos as u32 + 1)
        };
        let count_rounds =
            |kind: BracketKind| kept_rounds.get(&kind).map_or(0, |rounds| rounds.len() as u32);

        let winners_rounds = count_rounds(BracketKind::Winners);
        let losers_rounds = count_rounds(BracketKind::Losers);

        // Number kept nodes in creation order and assign ids.
        let mut numbers: HashMap<(BracketKind, u32), u32> = HashMap::new();
        let mut ids: HashMap<NodeIdx, MatchId> = HashMap::new();
        let mut placed: Vec<(NodeIdx, BracketKind, u32, u32, u32)> = Vec::new();
        for (idx, (node, outcome)) in self.nodes.iter().zip(&outcomes).enumerate() {
            if let Outcome::Collapsed(_) = outcome {
                continue;
            }
            let bracket_round = compact(node.kind, node.round);
            let number = numbers.entry((node.kind, bracket_round)).or_insert(0);
            *number += 1;

            let (id, round) = match node.kind {
                BracketKind::Winners => (MatchId::winners(bracket_round, *number), bracket_round),
                BracketKind::Losers => (
                    MatchId::losers(bracket_round, *number),
                    winners_rounds + bracket_round,
                ),
                BracketKind::GrandFinals => {
                    (MatchId::grand_finals(1), winners_rounds + losers_rounds + 1)
                }
                BracketKind::Reset => (MatchId::grand_finals(2), winners_rounds + losers_rounds + 2),
            };
            ids.insert(idx, id);
            placed.push((idx, node.kind, bracket_round, *number, round));
        }

        let slot_for = |feed: Feed| -> BracketResult<Slot> {
            let entrant = |seed: u32| {
                roster.by_seed(seed).cloned().ok_or(BracketError::InvalidSeed {
                    seed,
                    count: roster.len(),
                })
            };
            let id = |node: NodeIdx| {
                ids.get(&node)
                    .cloned()
                    .ok_or(BracketError::InvalidSize(draw.bracket_size))
            };
            Ok(match feed {
                Feed::Seat(seed) => Slot::Entrant(entrant(seed)?),
                Feed::Advanced(seed) => Slot::ByeAdvanced(entrant(seed)?),
                Feed::Winner(node) => Slot::Pending(Source::Winner(id(node)?)),
                Feed::Loser(node) => Slot::Pending(Source::Loser(id(node)?)),
                // A kept node never has a bye side.
                Feed::Bye => return Err(BracketError::InvalidSize(draw.bracket_size)),
            })
        };

        let mut matches = Vec::with_capacity(placed.len());
        for (idx, kind, bracket_round, number, round) in placed {
            let Outcome::Kept([top, bottom]) = outcomes[idx] else {
                continue;
            };
            matches.push(Match {
                id: ids[&idx].clone(),
                round,
                bracket: kind,
                bracket_round,
                number,
                top: slot_for(top)?,
                bottom: slot_for(bottom)?,
                winner_to: None,
                loser_to: None,
            });
        }

        link_forward(&mut matches);

        let total_rounds = matches.iter().map(|m| m.round).max().unwrap_or(0);
        debug!(
            "Built {} bracket: {} matches, {} winners rounds, {} losers rounds",
            format,
            matches.len(),
            winners_rounds,
            losers_rounds
        );

        Ok(Bracket {
            event_id: event_id.clone(),
            summary: BracketSummary {
                bracket_type: format,
                entrant_count: draw.entrant_count,
                bracket_size: draw.bracket_size,
                bye_count: draw.bye_count,
                winners_rounds,
                losers_rounds,
                total_rounds,
            },
            entrants: roster.entrants().to_vec(),
            matches,
        })
    }

    /// Resolve every node in creation order (each node only references
    /// earlier ones)
    fn prune(&self) -> Vec<Outcome> {
        let mut outcomes: Vec<Outcome> = Vec::with_capacity(self.nodes.len());

        for node in &self.nodes {
            let resolve = |feed: Feed| -> Option<Feed> {
                match feed {
                    Feed::Seat(_) | Feed::Advanced(_) => Some(feed),
                    Feed::Bye => None,
                    Feed::Winner(src) => match outcomes[src] {
                        Outcome::Kept(_) => Some(feed),
                        Outcome::Collapsed(passed) => passed,
                    },
                    Feed::Loser(src) => match outcomes[src] {
                        Outcome::Kept(_) => Some(feed),
                        Outcome::Collapsed(_) => None,
                    },
                }
            };

            let outcome = match (resolve(node.feeds[0]), resolve(node.feeds[1])) {
                (Some(top), Some(bottom)) => Outcome::Kept([top, bottom]),
                (Some(single), None) | (None, Some(single)) => {
                    Outcome::Collapsed(Some(match single {
                        Feed::Seat(seed) => Feed::Advanced(seed),
                        other => other,
                    }))
                }
                (None, None) => Outcome::Collapsed(None),
            };
            outcomes.push(outcome);
        }

        outcomes
    }
}

/// Fill `winner_to` / `loser_to` from the slot sources
fn link_forward(matches: &mut [Match]) {
    let positions: HashMap<MatchId, usize> = matches
        .iter()
        .enumerate()
        .map(|(pos, m)| (m.id.clone(), pos))
        .collect();

    let mut links: Vec<(usize, Source, SlotRef)> = Vec::new();
    for m in matches.iter() {
        for side in Side::BOTH {
            if let Some(source) = m.slot(side).source() {
                if let Some(&pos) = positions.get(source.match_id()) {
                    links.push((pos, source.clone(), SlotRef::new(m.id.clone(), side)));
                }
            }
        }
    }

    for (pos, source, target) in links {
        match source {
            Source::Winner(_) => matches[pos].winner_to = Some(target),
            Source::Loser(_) => matches[pos].loser_to = Some(target),
        }
    }
}
