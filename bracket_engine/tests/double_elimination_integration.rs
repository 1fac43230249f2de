//! Integration tests for double elimination brackets
//!
//! Covers the match totals per size tier, the forward-link invariants for
//! every entrant count from 3 to 32, golden layouts for the tiers where
//! byes reshape the losers bracket, and the drop-in feed orders.

#[cfg(test)]
mod double_elimination_tests {
    use bracket_engine::elimination::{
        BracketKind, LosersLadder, Side, Slot, SlotRef, Source, build_double_elimination,
    };
    use bracket_engine::{Bracket, MatchId, Roster};
    use std::collections::{HashMap, HashSet};

    fn build(count: usize) -> Bracket {
        let names: Vec<String> = (1..=count).map(|i| format!("P{i}")).collect();
        let roster = Roster::from_names(&names).unwrap();
        build_double_elimination(&"open".to_string(), &roster).unwrap()
    }

    fn count(bracket: &Bracket, kind: BracketKind) -> usize {
        bracket.matches_in(kind).count()
    }

    fn finals(bracket: &Bracket) -> usize {
        count(bracket, BracketKind::GrandFinals) + count(bracket, BracketKind::Reset)
    }

    /// Compact description of a slot for golden comparisons
    fn describe(slot: &Slot) -> String {
        match slot {
            Slot::Entrant(e) => format!("{}", e.seed),
            Slot::ByeAdvanced(e) => format!("{}*", e.seed),
            Slot::Pending(Source::Winner(id)) => format!("W:{id}"),
            Slot::Pending(Source::Loser(id)) => format!("L:{id}"),
        }
    }

    fn layout(bracket: &Bracket) -> Vec<String> {
        bracket
            .matches
            .iter()
            .map(|m| {
                format!(
                    "{} r{} {} v {}",
                    m.id,
                    m.round,
                    describe(&m.top),
                    describe(&m.bottom)
                )
            })
            .collect()
    }

    #[test]
    fn test_match_totals_table() {
        let table = [
            // (entrants, size, byes, winners, losers, finals, total)
            (3usize, 4usize, 1usize, 2usize, 1usize, 2usize, 5usize),
            (4, 4, 0, 3, 2, 2, 7),
            (8, 8, 0, 7, 6, 2, 15),
            (16, 16, 0, 15, 14, 2, 31),
        ];
        for (entrants, size, byes, winners, losers, fin, total) in table {
            let bracket = build(entrants);
            assert_eq!(bracket.summary.bracket_size, size, "N={entrants}");
            assert_eq!(bracket.summary.bye_count, byes, "N={entrants}");
            assert_eq!(count(&bracket, BracketKind::Winners), winners, "N={entrants}");
            assert_eq!(count(&bracket, BracketKind::Losers), losers, "N={entrants}");
            assert_eq!(finals(&bracket), fin, "N={entrants}");
            assert_eq!(bracket.matches.len(), total, "N={entrants}");
        }
    }

    #[test]
    fn test_totals_for_every_count() {
        for entrants in 2..=32usize {
            let bracket = build(entrants);
            assert_eq!(count(&bracket, BracketKind::Winners), entrants - 1);
            assert_eq!(count(&bracket, BracketKind::Losers), entrants - 2);
            assert_eq!(finals(&bracket), 2);
        }
    }

    #[test]
    fn test_power_of_two_losers_rounds() {
        for (entrants, winners_rounds) in [(4usize, 2u32), (8, 3), (16, 4), (32, 5)] {
            let bracket = build(entrants);
            assert_eq!(bracket.summary.winners_rounds, winners_rounds);
            assert_eq!(bracket.summary.losers_rounds, 2 * (winners_rounds - 1));

            let ladder = LosersLadder::for_winners_rounds(winners_rounds);
            let per_round: Vec<usize> = bracket
                .rounds(BracketKind::Losers)
                .iter()
                .map(|(_, matches)| matches.len())
                .collect();
            assert_eq!(per_round, ladder.match_counts(bracket.summary.bracket_size));
        }
    }

    #[test]
    fn test_link_invariants_three_to_thirty_two() {
        for entrants in 3..=32usize {
            let bracket = build(entrants);
            let summary = &bracket.summary;

            let ids: HashSet<&MatchId> = bracket.matches.iter().map(|m| &m.id).collect();
            assert_eq!(ids.len(), bracket.matches.len(), "N={entrants}: duplicate id");

            for m in &bracket.matches {
                match m.bracket {
                    BracketKind::Winners => {
                        assert!(m.winner_to.is_some(), "N={entrants}: {} winner_to", m.id);
                        assert!(m.loser_to.is_some(), "N={entrants}: {} loser_to", m.id);
                        assert!(m.round <= summary.winners_rounds);
                    }
                    BracketKind::Losers => {
                        assert!(m.winner_to.is_some(), "N={entrants}: {} winner_to", m.id);
                        assert!(m.loser_to.is_none());
                        assert!(m.round > summary.winners_rounds, "N={entrants}: {}", m.id);
                        assert!(m.bracket_round >= 1 && m.bracket_round <= summary.losers_rounds);
                    }
                    BracketKind::GrandFinals => {
                        assert!(m.is_grand_finals());
                        assert!(!m.is_bracket_reset());
                    }
                    BracketKind::Reset => {
                        assert!(m.is_grand_finals());
                        assert!(m.is_bracket_reset());
                        assert!(m.winner_to.is_none());
                    }
                }
            }
        }
    }

    #[test]
    fn test_links_and_sources_agree() {
        for entrants in 2..=32usize {
            let bracket = build(entrants);
            let by_id: HashMap<&MatchId, _> = bracket.matches.iter().map(|m| (&m.id, m)).collect();

            for m in &bracket.matches {
                for (target, want) in [
                    (&m.winner_to, Source::Winner(m.id.clone())),
                    (&m.loser_to, Source::Loser(m.id.clone())),
                ] {
                    let Some(SlotRef { match_id, side }) = target else {
                        continue;
                    };
                    let dest = by_id[match_id];
                    assert_eq!(dest.slot(*side).source(), Some(&want), "N={entrants}");
                    assert!(dest.round > m.round, "N={entrants}: {} -> {}", m.id, dest.id);
                }

                // Every pending slot is fed by exactly the link that names it.
                for side in Side::BOTH {
                    if let Some(source) = m.slot(side).source() {
                        let upstream = by_id[source.match_id()];
                        let link = match source {
                            Source::Winner(_) => &upstream.winner_to,
                            Source::Loser(_) => &upstream.loser_to,
                        };
                        assert_eq!(link, &Some(SlotRef::new(m.id.clone(), side)));
                    }
                }
            }
        }
    }

    #[test]
    fn test_every_entrant_can_lose_twice() {
        // Each entrant placed at generation has a path through a loser link.
        for entrants in 3..=24usize {
            let bracket = build(entrants);
            let losers_fed: usize = bracket
                .matches_in(BracketKind::Winners)
                .filter(|m| {
                    m.loser_to
                        .as_ref()
                        .is_some_and(|t| t.match_id.as_str().starts_with('L'))
                })
                .count();
            // Every winners match except the final drops into the losers bracket;
            // the final drops its loser into the losers final as well.
            assert_eq!(losers_fed, entrants - 1, "N={entrants}");
        }
    }

    #[test]
    fn test_eight_entrant_round_one() {
        let bracket = build(8);
        let seeds: Vec<(u32, u32)> = bracket
            .rounds(BracketKind::Winners)[0]
            .1
            .iter()
            .map(|m| (m.top.entrant().unwrap().seed, m.bottom.entrant().unwrap().seed))
            .collect();
        assert_eq!(seeds, vec![(1, 8), (5, 4), (3, 6), (7, 2)]);
    }

    #[test]
    fn test_golden_four() {
        assert_eq!(
            layout(&build(4)),
            vec![
                "W1-1 r1 1 v 4",
                "W1-2 r1 3 v 2",
                "W2-1 r2 W:W1-1 v W:W1-2",
                "L1-1 r3 L:W1-1 v L:W1-2",
                "L2-1 r4 W:L1-1 v L:W2-1",
                "GF1 r5 W:W2-1 v W:L2-1",
                "GF2 r6 W:GF1 v L:GF1",
            ]
        );
    }

    #[test]
    fn test_golden_five() {
        assert_eq!(
            layout(&build(5)),
            vec![
                "W1-1 r1 5 v 4",
                "W2-1 r2 1* v W:W1-1",
                "W2-2 r2 3* v 2*",
                "W3-1 r3 W:W2-1 v W:W2-2",
                "L1-1 r4 L:W1-1 v L:W2-2",
                "L2-1 r5 W:L1-1 v L:W2-1",
                "L3-1 r6 W:L2-1 v L:W3-1",
                "GF1 r7 W:W3-1 v W:L3-1",
                "GF2 r8 W:GF1 v L:GF1",
            ]
        );
    }

    #[test]
    fn test_golden_six() {
        assert_eq!(
            layout(&build(6)),
            vec![
                "W1-1 r1 3 v 6",
                "W1-2 r1 5 v 4",
                "W2-1 r2 1* v W:W1-1",
                "W2-2 r2 W:W1-2 v 2*",
                "W3-1 r3 W:W2-1 v W:W2-2",
                "L1-1 r4 L:W1-1 v L:W2-2",
                "L1-2 r4 L:W1-2 v L:W2-1",
                "L2-1 r5 W:L1-1 v W:L1-2",
                "L3-1 r6 W:L2-1 v L:W3-1",
                "GF1 r7 W:W3-1 v W:L3-1",
                "GF2 r8 W:GF1 v L:GF1",
            ]
        );
    }

    #[test]
    fn test_golden_three() {
        assert_eq!(
            layout(&build(3)),
            vec![
                "W1-1 r1 3 v 2",
                "W2-1 r2 1* v W:W1-1",
                "L1-1 r3 L:W1-1 v L:W2-1",
                "GF1 r4 W:W2-1 v W:L1-1",
                "GF2 r5 W:GF1 v L:GF1",
            ]
        );
    }

    #[test]
    fn test_golden_seven() {
        // One bye: the W1-1 loser skips the opening losers round.
        assert_eq!(
            layout(&build(7)),
            vec![
                "W1-1 r1 5 v 4",
                "W1-2 r1 3 v 6",
                "W1-3 r1 7 v 2",
                "W2-1 r2 1* v W:W1-1",
                "W2-2 r2 W:W1-2 v W:W1-3",
                "W3-1 r3 W:W2-1 v W:W2-2",
                "L1-1 r4 L:W1-2 v L:W1-3",
                "L2-1 r5 L:W1-1 v L:W2-2",
                "L2-2 r5 W:L1-1 v L:W2-1",
                "L3-1 r6 W:L2-1 v W:L2-2",
                "L4-1 r7 W:L3-1 v L:W3-1",
                "GF1 r8 W:W3-1 v W:L4-1",
                "GF2 r9 W:GF1 v L:GF1",
            ]
        );
    }

    #[test]
    fn test_golden_twelve() {
        assert_eq!(
            layout(&build(12)),
            vec![
                "W1-1 r1 5 v 12",
                "W1-2 r1 9 v 8",
                "W1-3 r1 7 v 10",
                "W1-4 r1 11 v 6",
                "W2-1 r2 1* v W:W1-1",
                "W2-2 r2 W:W1-2 v 4*",
                "W2-3 r2 3* v W:W1-3",
                "W2-4 r2 W:W1-4 v 2*",
                "W3-1 r3 W:W2-1 v W:W2-2",
                "W3-2 r3 W:W2-3 v W:W2-4",
                "W4-1 r4 W:W3-1 v W:W3-2",
                "L1-1 r5 L:W1-1 v L:W2-4",
                "L1-2 r5 L:W1-2 v L:W2-3",
                "L1-3 r5 L:W1-3 v L:W2-2",
                "L1-4 r5 L:W1-4 v L:W2-1",
                "L2-1 r6 W:L1-1 v W:L1-2",
                "L2-2 r6 W:L1-3 v W:L1-4",
                "L3-1 r7 W:L2-1 v L:W3-2",
                "L3-2 r7 W:L2-2 v L:W3-1",
                "L4-1 r8 W:L3-1 v W:L3-2",
                "L5-1 r9 W:L4-1 v L:W4-1",
                "GF1 r10 W:W4-1 v W:L5-1",
                "GF2 r11 W:GF1 v L:GF1",
            ]
        );
    }

    fn losers_layout(bracket: &Bracket) -> Vec<String> {
        layout(bracket)
            .into_iter()
            .filter(|line| line.starts_with('L'))
            .collect()
    }

    #[test]
    fn test_losers_golden_sixteen() {
        assert_eq!(
            losers_layout(&build(16)),
            vec![
                "L1-1 r5 L:W1-1 v L:W1-2",
                "L1-2 r5 L:W1-3 v L:W1-4",
                "L1-3 r5 L:W1-5 v L:W1-6",
                "L1-4 r5 L:W1-7 v L:W1-8",
                "L2-1 r6 W:L1-1 v L:W2-4",
                "L2-2 r6 W:L1-2 v L:W2-3",
                "L2-3 r6 W:L1-3 v L:W2-2",
                "L2-4 r6 W:L1-4 v L:W2-1",
                "L3-1 r7 W:L2-1 v W:L2-2",
                "L3-2 r7 W:L2-3 v W:L2-4",
                "L4-1 r8 W:L3-1 v L:W3-2",
                "L4-2 r8 W:L3-2 v L:W3-1",
                "L5-1 r9 W:L4-1 v W:L4-2",
                "L6-1 r10 W:L5-1 v L:W4-1",
            ]
        );
    }

    #[test]
    fn test_losers_golden_twenty_five() {
        // Seven byes collapse all but one opening match; its neighbours'
        // losers wait for the first drop-in round.
        assert_eq!(
            losers_layout(&build(25)),
            vec![
                "L1-1 r6 L:W1-2 v L:W1-3",
                "L2-1 r7 L:W1-1 v L:W2-8",
                "L2-2 r7 W:L1-1 v L:W2-7",
                "L2-3 r7 L:W1-4 v L:W2-6",
                "L2-4 r7 L:W1-5 v L:W2-5",
                "L2-5 r7 L:W1-6 v L:W2-4",
                "L2-6 r7 L:W1-7 v L:W2-3",
                "L2-7 r7 L:W1-8 v L:W2-2",
                "L2-8 r7 L:W1-9 v L:W2-1",
                "L3-1 r8 W:L2-1 v W:L2-2",
                "L3-2 r8 W:L2-3 v W:L2-4",
                "L3-3 r8 W:L2-5 v W:L2-6",
                "L3-4 r8 W:L2-7 v W:L2-8",
                "L4-1 r9 W:L3-1 v L:W3-3",
                "L4-2 r9 W:L3-2 v L:W3-4",
                "L4-3 r9 W:L3-3 v L:W3-1",
                "L4-4 r9 W:L3-4 v L:W3-2",
                "L5-1 r10 W:L4-1 v W:L4-2",
                "L5-2 r10 W:L4-3 v W:L4-4",
                "L6-1 r11 W:L5-1 v L:W4-2",
                "L6-2 r11 W:L5-2 v L:W4-1",
                "L7-1 r12 W:L6-1 v W:L6-2",
                "L8-1 r13 W:L7-1 v L:W5-1",
            ]
        );
    }

    #[test]
    fn test_losers_golden_twenty_six() {
        assert_eq!(
            losers_layout(&build(26)),
            vec![
                "L1-1 r6 L:W1-2 v L:W1-3",
                "L1-2 r6 L:W1-8 v L:W1-9",
                "L2-1 r7 L:W1-1 v L:W2-8",
                "L2-2 r7 W:L1-1 v L:W2-7",
                "L2-3 r7 L:W1-4 v L:W2-6",
                "L2-4 r7 L:W1-5 v L:W2-5",
                "L2-5 r7 L:W1-6 v L:W2-4",
                "L2-6 r7 L:W1-7 v L:W2-3",
                "L2-7 r7 W:L1-2 v L:W2-2",
                "L2-8 r7 L:W1-10 v L:W2-1",
                "L3-1 r8 W:L2-1 v W:L2-2",
                "L3-2 r8 W:L2-3 v W:L2-4",
                "L3-3 r8 W:L2-5 v W:L2-6",
                "L3-4 r8 W:L2-7 v W:L2-8",
                "L4-1 r9 W:L3-1 v L:W3-3",
                "L4-2 r9 W:L3-2 v L:W3-4",
                "L4-3 r9 W:L3-3 v L:W3-1",
                "L4-4 r9 W:L3-4 v L:W3-2",
                "L5-1 r10 W:L4-1 v W:L4-2",
                "L5-2 r10 W:L4-3 v W:L4-4",
                "L6-1 r11 W:L5-1 v L:W4-2",
                "L6-2 r11 W:L5-2 v L:W4-1",
                "L7-1 r12 W:L6-1 v W:L6-2",
                "L8-1 r13 W:L7-1 v L:W5-1",
            ]
        );
    }

    #[test]
    fn test_drop_in_feed_orders_alternate() {
        // Even winners rounds drop in reverse, odd ones swap halves.
        let bracket = build(32);
        let dropped = |round: u32| -> Vec<String> {
            bracket.rounds(BracketKind::Losers)[round as usize - 1]
                .1
                .iter()
                .map(|m| m.previous_match_loser(Side::Bottom).unwrap().to_string())
                .collect()
        };
        assert_eq!(
            dropped(2),
            vec!["W2-8", "W2-7", "W2-6", "W2-5", "W2-4", "W2-3", "W2-2", "W2-1"]
        );
        assert_eq!(dropped(4), vec!["W3-3", "W3-4", "W3-1", "W3-2"]);
        assert_eq!(dropped(6), vec!["W4-2", "W4-1"]);
    }

    #[test]
    fn test_adjacent_sizes_differ_by_two_matches() {
        // Each extra entrant adds one winners and one losers match.
        for entrants in 3..=32usize {
            let smaller = build(entrants - 1).matches.len();
            let larger = build(entrants).matches.len();
            assert_eq!(larger, smaller + 2, "{} vs {entrants}", entrants - 1);
        }
    }

    #[test]
    fn test_grand_finals_provenance() {
        let bracket = build(16);
        let (first, reset) = bracket.grand_finals().unwrap();
        let winners_final = bracket.winners_final().unwrap();

        assert_eq!(first.previous_winners_match(), Some(&winners_final.id));
        assert_eq!(first.previous_losers_match(), Some(&MatchId::losers(6, 1)));
        assert_eq!(reset.previous_match(Side::Top), Some(&first.id));
        assert_eq!(reset.previous_match_loser(Side::Bottom), Some(&first.id));
        assert_eq!(bracket.summary.total_rounds, reset.round);
        assert_eq!(reset.round, 4 + 6 + 2);
    }

    #[test]
    fn test_text_sections() {
        let text = build(6).to_string();
        let winners = text.find("WINNERS BRACKET").unwrap();
        let losers = text.find("LOSERS BRACKET").unwrap();
        let finals = text.find("GRAND FINALS").unwrap();
        assert!(winners < losers && losers < finals);
        assert!(text.contains("[reset if needed]"));
    }
}
