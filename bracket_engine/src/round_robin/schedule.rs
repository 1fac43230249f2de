//! Circle-method round-robin scheduling.

use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::EventId;
use crate::elimination::MatchId;
use crate::entrants::{Entrant, MIN_ENTRANTS, Roster};
use crate::errors::{BracketError, BracketResult};

/// One scheduled meeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: MatchId,
    pub round: u32,
    /// 1-based position within the round
    pub number: u32,
    pub home: Entrant,
    pub away: Entrant,
}

impl Fixture {
    pub fn involves(&self, name: &str) -> bool {
        self.home.name == name || self.away.name == name
    }
}

/// All fixtures of one round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRound {
    pub round: u32,
    pub fixtures: Vec<Fixture>,
    /// Entrant sitting out this round (odd entrant counts only)
    pub resting: Option<Entrant>,
}

/// Complete round-robin schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRobinSchedule {
    pub event_id: EventId,
    pub entrants: Vec<Entrant>,
    pub rounds: Vec<ScheduleRound>,
}

impl RoundRobinSchedule {
    pub fn fixtures(&self) -> impl Iterator<Item = &Fixture> {
        self.rounds.iter().flat_map(|r| r.fixtures.iter())
    }

    pub fn fixture_count(&self) -> usize {
        self.rounds.iter().map(|r| r.fixtures.len()).sum()
    }

    pub fn get(&self, id: &MatchId) -> Option<&Fixture> {
        self.fixtures().find(|f| &f.id == id)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for RoundRobinSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} - round_robin ({} entrants, {} rounds)",
            self.event_id,
            self.entrants.len(),
            self.rounds.len()
        )?;
        for round in &self.rounds {
            writeln!(f, "ROUND {}", round.round)?;
            for fixture in &round.fixtures {
                writeln!(f, "    {:<7} {} vs {}", fixture.id.to_string(), fixture.home, fixture.away)?;
            }
            if let Some(resting) = &round.resting {
                writeln!(f, "    bye: {resting}")?;
            }
        }
        Ok(())
    }
}

/// Schedule every pair of entrants exactly once.
///
/// Odd rosters get a synthetic bye position. Position 0 stays fixed; each
/// round pairs position `i` with position `n - 1 - i`, then every other
/// position rotates one step (position 1 moves to the end).
///
/// ```
/// use bracket_engine::{Roster, round_robin::schedule};
///
/// let roster = Roster::from_names(&["A", "B", "C", "D"]).unwrap();
/// let plan = schedule(&"league".to_string(), &roster).unwrap();
/// assert_eq!(plan.rounds.len(), 3);
/// assert_eq!(plan.fixture_count(), 6);
/// ```
pub fn schedule(event_id: &EventId, roster: &Roster) -> BracketResult<RoundRobinSchedule> {
    let entrants = roster.entrants();
    if entrants.len() < MIN_ENTRANTS {
        return Err(BracketError::InvalidEntrantCount(entrants.len()));
    }

    let mut positions: Vec<Option<&Entrant>> = entrants.iter().map(Some).collect();
    if positions.len() % 2 == 1 {
        positions.push(None);
    }
    let n = positions.len();

    let mut rounds = Vec::with_capacity(n - 1);
    for round_idx in 0..n - 1 {
        let round = round_idx as u32 + 1;
        let mut fixtures = Vec::with_capacity(n / 2);
        let mut resting = None;

        for i in 0..n / 2 {
            match (positions[i], positions[n - 1 - i]) {
                (Some(home), Some(away)) => {
                    let number = fixtures.len() as u32 + 1;
                    fixtures.push(Fixture {
                        id: MatchId::round_robin(round, number),
                        round,
                        number,
                        home: home.clone(),
                        away: away.clone(),
                    });
                }
                (Some(idle), None) | (None, Some(idle)) => resting = Some(idle.clone()),
                (None, None) => {}
            }
        }

        rounds.push(ScheduleRound {
            round,
            fixtures,
            resting,
        });

        // Rotate everything but position 0.
        positions[1..].rotate_left(1);
    }

    info!(
        "Generated round robin for event {}: {} entrants, {} rounds",
        event_id,
        entrants.len(),
        rounds.len()
    );

    Ok(RoundRobinSchedule {
        event_id: event_id.clone(),
        entrants: entrants.to_vec(),
        rounds,
    })
}
