//! Single elimination bracket builder.

use log::info;

use super::graph::BracketGraph;
use super::models::Bracket;
use crate::config::{EventId, Format};
use crate::entrants::Roster;
use crate::errors::BracketResult;
use crate::seeding::Draw;

/// Build a single elimination bracket for a seed-ordered roster.
///
/// Round 1 holds the playable pairings of the draw; bye holders start in
/// round 2. Every match except the final links its winner forward.
///
/// ```
/// use bracket_engine::{Roster, elimination::build_single_elimination};
///
/// let roster = Roster::from_names(&["A", "B", "C", "D", "E", "F"]).unwrap();
/// let bracket = build_single_elimination(&"cup".to_string(), &roster).unwrap();
/// assert_eq!(bracket.summary.winners_rounds, 3);
/// assert_eq!(bracket.matches.len(), 5);
/// ```
pub fn build_single_elimination(event_id: &EventId, roster: &Roster) -> BracketResult<Bracket> {
    let draw = Draw::new(roster.len())?;

    let mut graph = BracketGraph::new();
    graph.add_winners(&draw);

    let bracket = graph.finish(event_id, Format::SingleElimination, roster, &draw)?;
    info!(
        "Generated single elimination for event {}: {} entrants, {} matches",
        event_id,
        roster.len(),
        bracket.matches.len()
    );
    Ok(bracket)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elimination::{BracketKind, MatchId, Side};

    fn build(count: usize) -> Bracket {
        let names: Vec<String> = (1..=count).map(|i| format!("P{i}")).collect();
        let roster = Roster::from_names(&names).unwrap();
        build_single_elimination(&"event".to_string(), &roster).unwrap()
    }

    #[test]
    fn test_match_count_is_entrants_minus_one() {
        for count in 2..=33 {
            let bracket = build(count);
            assert_eq!(bracket.matches.len(), count - 1, "count {count}");
            assert!(bracket.matches.iter().all(|m| m.bracket == BracketKind::Winners));
            assert!(bracket.matches.iter().all(|m| m.loser_to.is_none()));
        }
    }

    #[test]
    fn test_two_entrants_is_a_single_final() {
        let bracket = build(2);
        assert_eq!(bracket.matches.len(), 1);
        let only = &bracket.matches[0];
        assert_eq!(only.id, MatchId::winners(1, 1));
        assert!(only.is_ready());
        assert!(only.winner_to.is_none());
    }

    #[test]
    fn test_final_is_last_round() {
        let bracket = build(12);
        assert_eq!(bracket.summary.bracket_size, 16);
        assert_eq!(bracket.summary.bye_count, 4);
        assert_eq!(bracket.summary.winners_rounds, 4);
        assert_eq!(bracket.summary.losers_rounds, 0);

        let last = bracket.winners_final().unwrap();
        assert_eq!(last.round, 4);
        assert!(last.winner_to.is_none());
        assert_eq!(bracket.rounds(BracketKind::Winners).len(), 4);
    }

    #[test]
    fn test_round_sizes_halve() {
        let bracket = build(16);
        let sizes: Vec<usize> = bracket
            .rounds(BracketKind::Winners)
            .iter()
            .map(|(_, list)| list.len())
            .collect();
        assert_eq!(sizes, vec![8, 4, 2, 1]);
    }

    #[test]
    fn test_winner_links_point_at_pending_slots() {
        let bracket = build(9);
        for m in &bracket.matches {
            if let Some(target) = &m.winner_to {
                let next = bracket.get(&target.match_id).unwrap();
                assert_eq!(next.previous_match(target.side), Some(&m.id));
                assert!(next.round > m.round);
            }
        }
        // Seed 1 waits in round 2 against the lone play-in.
        let second = bracket.get(&MatchId::winners(2, 1)).unwrap();
        assert_eq!(second.top.entrant().unwrap().seed, 1);
        assert_eq!(second.previous_match(Side::Bottom), Some(&MatchId::winners(1, 1)));
    }
}
