//! Bracket draw: round-1 pairings in the positions the bracket uses.

use log::debug;
use serde::{Deserialize, Serialize};

use super::pairing::{Pairing, pair};
use super::seed_order::{bracket_size, seed_order};
use crate::errors::BracketResult;

/// Round-1 layout of an elimination bracket.
///
/// Pairings are the ones produced by [`pair`]. When byes exist, the round-2
/// matches where a bye holder waits for a round-1 winner are re-matched so
/// the best holder meets the round-1 match containing the best seed, the
/// second holder the next one, and so on. For six entrants this gives
/// `1 v winner(3 v 6)` and `2 v winner(4 v 5)`. Without byes the layout is
/// the canonical seed order.
///
/// The best holder therefore faces the play-in with the strongest seed, not
/// the one the canonical order would give it. With twelve entrants seed 1
/// waits for `5 v 12` and seed 4 for `9 v 8`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    pub pairings: Vec<Pairing>,
    pub entrant_count: usize,
    pub bracket_size: usize,
    pub bye_count: usize,
}

impl Draw {
    /// Lay out a bracket for `entrant_count` seeds
    pub fn new(entrant_count: usize) -> BracketResult<Self> {
        let size = bracket_size(entrant_count);
        let set = pair(entrant_count, &seed_order(size)?)?;

        let mut pairings = set.pairings;
        place_bye_holders(&mut pairings);

        debug!(
            "Draw for {} entrants: size {}, {} byes",
            entrant_count, set.bracket_size, set.bye_count
        );

        Ok(Self {
            pairings,
            entrant_count,
            bracket_size: set.bracket_size,
            bye_count: set.bye_count,
        })
    }

    /// Number of winners-bracket rounds, `log2(bracket_size)`
    pub fn rounds(&self) -> u32 {
        self.bracket_size.trailing_zeros()
    }

    /// Pairings that are actually played in round 1
    pub fn playable(&self) -> impl Iterator<Item = &Pairing> {
        self.pairings.iter().filter(|p| !p.has_bye())
    }
}

/// Re-match bye holders against round-1 matches in seed order
fn place_bye_holders(pairings: &mut [Pairing]) {
    // (group start, holder seed, holder offset within the group)
    let mut mixed: Vec<(usize, u32, usize)> = Vec::new();
    let mut play_ins: Vec<Pairing> = Vec::new();

    for (group, pair) in pairings.chunks(2).enumerate() {
        if pair.len() < 2 {
            continue;
        }
        let start = group * 2;
        match (pair[0].bye_holder(), pair[1].bye_holder()) {
            (Some(holder), None) if !pair[1].has_bye() => {
                mixed.push((start, holder, 0));
                play_ins.push(pair[1]);
            }
            (None, Some(holder)) if !pair[0].has_bye() => {
                mixed.push((start, holder, 1));
                play_ins.push(pair[0]);
            }
            _ => {}
        }
    }

    mixed.sort_by_key(|&(_, holder, _)| holder);
    play_ins.sort_by_key(|p| p.best_seed());

    for ((start, _, holder_offset), play_in) in mixed.into_iter().zip(play_ins) {
        pairings[start + (1 - holder_offset)] = play_in;
    }
}
