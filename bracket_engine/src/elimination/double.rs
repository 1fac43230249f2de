//! Double elimination bracket builder.
//!
//! Entrants drop to the losers bracket on their first loss and are out on
//! the second. The winners champion and the losers champion meet in grand
//! finals; the reset match is always generated and only played when the
//! losers champion wins the first one (see [`reset_needed`]).

use log::info;

use super::graph::{BracketGraph, Feed, NodeIdx};
use super::ladder::{LosersLadder, LosersRound};
use super::models::{Bracket, BracketKind, Side};
use crate::config::{EventId, Format};
use crate::entrants::Roster;
use crate::errors::BracketResult;
use crate::seeding::Draw;

/// Build a double elimination bracket for a seed-ordered roster.
///
/// Winners bracket matches link both their winner and loser forward;
/// losers bracket matches link their winner. Losers-bracket matches that
/// byes leave with a single entrant are not generated and that entrant
/// moves on directly.
pub fn build_double_elimination(event_id: &EventId, roster: &Roster) -> BracketResult<Bracket> {
    let draw = Draw::new(roster.len())?;

    let mut graph = BracketGraph::new();
    let winners = graph.add_winners(&draw);
    let winners_final = winners[winners.len() - 1][0];

    let ladder = LosersLadder::for_winners_rounds(draw.rounds());
    let losers_final = add_losers(&mut graph, &ladder, &winners);

    let first = graph.push(
        BracketKind::GrandFinals,
        1,
        [
            Feed::Winner(winners_final),
            match losers_final {
                Some(node) => Feed::Winner(node),
                // Two entrants: the winners final loser goes straight to grand finals.
                None => Feed::Loser(winners_final),
            },
        ],
    );
    graph.push(
        BracketKind::Reset,
        1,
        [Feed::Winner(first), Feed::Loser(first)],
    );

    let bracket = graph.finish(event_id, Format::DoubleElimination, roster, &draw)?;
    info!(
        "Generated double elimination for event {}: {} entrants, {} matches",
        event_id,
        roster.len(),
        bracket.matches.len()
    );
    Ok(bracket)
}

/// Push the losers ladder, returning the losers final node
fn add_losers(
    graph: &mut BracketGraph,
    ladder: &LosersLadder,
    winners: &[Vec<NodeIdx>],
) -> Option<NodeIdx> {
    let mut previous: Vec<NodeIdx> = Vec::new();

    for (idx, shape) in ladder.rounds.iter().enumerate() {
        let round = idx as u32 + 1;
        let feeds: Vec<[Feed; 2]> = match shape {
            LosersRound::Opening => winners[0]
                .chunks(2)
                .map(|pair| [Feed::Loser(pair[0]), Feed::Loser(pair[1])])
                .collect(),
            LosersRound::DropIn {
                from_winners_round,
                order,
            } => {
                let dropped = order.apply(&winners[*from_winners_round as usize - 1]);
                previous
                    .iter()
                    .zip(dropped)
                    .map(|(&survivor, loser)| [Feed::Winner(survivor), Feed::Loser(loser)])
                    .collect()
            }
            LosersRound::Survivor => previous
                .chunks(2)
                .map(|pair| [Feed::Winner(pair[0]), Feed::Winner(pair[1])])
                .collect(),
        };

        previous = feeds
            .into_iter()
            .map(|f| graph.push(BracketKind::Losers, round, f))
            .collect();
    }

    previous.first().copied()
}

/// Whether the bracket reset is played, given which side won grand finals 1.
///
/// The losers champion always occupies the bottom slot of grand finals 1.
pub fn reset_needed(grand_finals_winner: Side) -> bool {
    grand_finals_winner == Side::Bottom
}
