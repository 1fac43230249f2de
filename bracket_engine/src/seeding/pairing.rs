//! Round-1 pairings and bye resolution.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entrants::MIN_ENTRANTS;
use crate::errors::{BracketError, BracketResult};

/// One side of a round-1 pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairSlot {
    Seed(u32),
    Bye,
}

impl PairSlot {
    pub fn seed(&self) -> Option<u32> {
        match self {
            PairSlot::Seed(seed) => Some(*seed),
            PairSlot::Bye => None,
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, PairSlot::Bye)
    }
}

impl fmt::Display for PairSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairSlot::Seed(seed) => write!(f, "{seed}"),
            PairSlot::Bye => write!(f, "BYE"),
        }
    }
}

/// Two draw slots meeting in round 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pairing {
    pub top: PairSlot,
    pub bottom: PairSlot,
}

impl Pairing {
    pub fn new(top: PairSlot, bottom: PairSlot) -> Self {
        Self { top, bottom }
    }

    /// True when one side is a bye (the pairing is never played)
    pub fn has_bye(&self) -> bool {
        self.top.is_bye() || self.bottom.is_bye()
    }

    /// Seed advancing without play, if this is a bye pairing
    pub fn bye_holder(&self) -> Option<u32> {
        match (self.top, self.bottom) {
            (PairSlot::Seed(seed), PairSlot::Bye) | (PairSlot::Bye, PairSlot::Seed(seed)) => {
                Some(seed)
            }
            _ => None,
        }
    }

    /// Best (numerically lowest) real seed in the pairing
    pub fn best_seed(&self) -> Option<u32> {
        match (self.top.seed(), self.bottom.seed()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.top, self.bottom)
    }
}

/// Output of the pairing step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingSet {
    /// `bracket_size / 2` pairings in seed-order position
    pub pairings: Vec<Pairing>,
    pub bracket_size: usize,
    pub bye_count: usize,
}

/// Pair up a seed order two slots at a time; seeds beyond
/// `entrant_count` become byes.
///
/// ```
/// use bracket_engine::seeding::{pair, seed_order};
///
/// let set = pair(3, &seed_order(4).unwrap()).unwrap();
/// assert_eq!(set.bye_count, 1);
/// assert_eq!(set.pairings[0].to_string(), "[1,BYE]");
/// ```
///
/// # Errors
///
/// * `InvalidEntrantCount` - fewer than two entrants
/// * `InvalidSize` - the order is not a power-of-two length covering the entrants
pub fn pair(entrant_count: usize, seed_order: &[u32]) -> BracketResult<PairingSet> {
    if entrant_count < MIN_ENTRANTS {
        return Err(BracketError::InvalidEntrantCount(entrant_count));
    }

    let bracket_size = seed_order.len();
    if bracket_size < 2 || !bracket_size.is_power_of_two() || bracket_size < entrant_count {
        return Err(BracketError::InvalidSize(bracket_size));
    }

    let slot = |seed: u32| {
        if seed as usize > entrant_count {
            PairSlot::Bye
        } else {
            PairSlot::Seed(seed)
        }
    };

    let pairings = seed_order
        .chunks(2)
        .map(|chunk| Pairing::new(slot(chunk[0]), slot(chunk[1])))
        .collect();

    Ok(PairingSet {
        pairings,
        bracket_size,
        bye_count: bracket_size - entrant_count,
    })
}
