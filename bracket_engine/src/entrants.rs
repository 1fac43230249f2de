//! Entrant records and roster validation.

use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::errors::{BracketError, BracketResult};

/// Fewest entrants any format accepts
pub const MIN_ENTRANTS: usize = 2;

/// Raw entrant record as submitted by a caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrantInput {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Explicit seed (1 = best); assigned from roster position when absent
    #[serde(default)]
    pub seed: Option<u32>,
}

impl EntrantInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            seed: None,
        }
    }

    pub fn seeded(name: impl Into<String>, seed: u32) -> Self {
        Self {
            name: Some(name.into()),
            seed: Some(seed),
        }
    }
}

/// A validated competitor with its placement seed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entrant {
    pub name: String,
    pub seed: u32,
}

impl Entrant {
    pub fn new(name: impl Into<String>, seed: u32) -> Self {
        Self {
            name: name.into(),
            seed,
        }
    }
}

impl fmt::Display for Entrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.seed, self.name)
    }
}

/// Seed-ordered list of entrants; index `i` holds seed `i + 1`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    entrants: Vec<Entrant>,
}

impl Roster {
    /// Validate raw records into a roster.
    ///
    /// Records without a seed take the lowest seed not claimed explicitly,
    /// in the order they were submitted. The resulting seeds must cover
    /// `1..=count` exactly once.
    ///
    /// # Errors
    ///
    /// * `InvalidEntrantCount` - fewer than two records
    /// * `MissingName` - a record has no name or only whitespace
    /// * `DuplicateName` - two records share a name once trimmed
    /// * `InvalidSeed` / `DuplicateSeed` - explicit seeds out of range or repeated
    pub fn from_inputs(inputs: &[EntrantInput]) -> BracketResult<Self> {
        let count = inputs.len();
        if count < MIN_ENTRANTS {
            return Err(BracketError::InvalidEntrantCount(count));
        }

        let mut names = Vec::with_capacity(count);
        let mut seen = HashSet::with_capacity(count);
        for (index, input) in inputs.iter().enumerate() {
            match input.name.as_deref().map(str::trim) {
                Some(name) if !name.is_empty() => {
                    if !seen.insert(name) {
                        return Err(BracketError::DuplicateName(name.to_string()));
                    }
                    names.push(name.to_string());
                }
                _ => return Err(BracketError::MissingName { index }),
            }
        }

        let mut claimed = vec![false; count];
        for input in inputs {
            if let Some(seed) = input.seed {
                if seed == 0 || seed as usize > count {
                    return Err(BracketError::InvalidSeed { seed, count });
                }
                let slot = &mut claimed[seed as usize - 1];
                if *slot {
                    return Err(BracketError::DuplicateSeed(seed));
                }
                *slot = true;
            }
        }

        let mut free = claimed
            .iter()
            .enumerate()
            .filter(|(_, taken)| !**taken)
            .map(|(idx, _)| idx as u32 + 1);

        let mut entrants = Vec::with_capacity(count);
        for (input, name) in inputs.iter().zip(names) {
            let seed = match input.seed {
                Some(seed) => seed,
                // Free seeds are exactly as many as unseeded records.
                None => free.next().ok_or(BracketError::InvalidSeed {
                    seed: 0,
                    count,
                })?,
            };
            entrants.push(Entrant::new(name, seed));
        }
        entrants.sort_by_key(|e| e.seed);

        Ok(Self { entrants })
    }

    /// Roster seeded by the order of `names`
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> BracketResult<Self> {
        let inputs: Vec<EntrantInput> = names
            .iter()
            .map(|n| EntrantInput::named(n.as_ref()))
            .collect();
        Self::from_inputs(&inputs)
    }

    /// Reseed the same names in a random order
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut names: Vec<String> = self.entrants.iter().map(|e| e.name.clone()).collect();
        names.shuffle(rng);

        let entrants = names
            .into_iter()
            .enumerate()
            .map(|(idx, name)| Entrant::new(name, idx as u32 + 1))
            .collect();

        Self { entrants }
    }

    pub fn len(&self) -> usize {
        self.entrants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrants.is_empty()
    }

    pub fn entrants(&self) -> &[Entrant] {
        &self.entrants
    }

    /// Entrant holding `seed`, if any
    pub fn by_seed(&self, seed: u32) -> Option<&Entrant> {
        if seed == 0 {
            return None;
        }
        self.entrants.get(seed as usize - 1)
    }
}
