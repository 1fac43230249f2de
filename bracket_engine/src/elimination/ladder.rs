//! Losers bracket shape per size tier.
//!
//! For `k` winners rounds the losers bracket has `2(k - 1)` rounds:
//!
//! | round          | shape                                     | matches      |
//! |----------------|-------------------------------------------|--------------|
//! | 1              | `Opening`: winners-round-1 losers, paired | size / 4     |
//! | 2              | `DropIn` from winners round 2             | size / 4     |
//! | 3              | `Survivor`: losers-bracket winners paired | size / 8     |
//! | 4              | `DropIn` from winners round 3             | size / 8     |
//! | ...            |                                           |              |
//! | 2(k-1)         | `DropIn` from winners round k (the final) | 1            |
//!
//! Drop-in rounds take the losers-bracket survivors in order and the
//! dropped winners-bracket losers in a [`FeedOrder`] that keeps entrants
//! from meeting someone they just played.

use serde::{Deserialize, Serialize};

/// Order in which a winners round's losers drop into the losers bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedOrder {
    Reverse,
    /// Second half first, each half in order
    HalfSwap,
}

impl FeedOrder {
    /// Feed order for losers dropping from `winners_round` (>= 2)
    pub fn for_winners_round(winners_round: u32) -> Self {
        if winners_round % 2 == 0 {
            FeedOrder::Reverse
        } else {
            FeedOrder::HalfSwap
        }
    }

    pub fn apply<T: Clone>(&self, items: &[T]) -> Vec<T> {
        match self {
            FeedOrder::Reverse => items.iter().rev().cloned().collect(),
            FeedOrder::HalfSwap => {
                let mid = items.len() / 2;
                items[mid..].iter().chain(&items[..mid]).cloned().collect()
            }
        }
    }
}

/// Shape of one losers round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LosersRound {
    /// Winners-round-1 losers paired with each other
    Opening,
    /// Losers-bracket survivors meet losers dropping from `from_winners_round`
    DropIn {
        from_winners_round: u32,
        order: FeedOrder,
    },
    /// Losers-bracket winners paired with each other
    Survivor,
}

/// Full losers bracket layout for a number of winners rounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LosersLadder {
    pub rounds: Vec<LosersRound>,
}

impl LosersLadder {
    pub fn for_winners_rounds(winners_rounds: u32) -> Self {
        let mut rounds = Vec::new();
        if winners_rounds >= 2 {
            rounds.push(LosersRound::Opening);
            for from_winners_round in 2..=winners_rounds {
                if from_winners_round > 2 {
                    rounds.push(LosersRound::Survivor);
                }
                rounds.push(LosersRound::DropIn {
                    from_winners_round,
                    order: FeedOrder::for_winners_round(from_winners_round),
                });
            }
        }
        Self { rounds }
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Match count of every round before any bye pruning
    pub fn match_counts(&self, bracket_size: usize) -> Vec<usize> {
        let mut counts = Vec::with_capacity(self.rounds.len());
        let mut current = bracket_size / 4;
        for round in &self.rounds {
            if let LosersRound::Survivor = round {
                current /= 2;
            }
            counts.push(current);
        }
        counts
    }
}
