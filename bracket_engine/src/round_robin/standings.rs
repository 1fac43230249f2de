//! Standings derived from recorded round-robin results.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt;

use super::schedule::Fixture;
use crate::entrants::Entrant;

/// A recorded (or still unplayed) result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home: String,
    pub away: String,
    #[serde(default)]
    pub home_score: u32,
    #[serde(default)]
    pub away_score: u32,
    #[serde(default)]
    pub played: bool,
}

impl MatchResult {
    pub fn played(home: impl Into<String>, away: impl Into<String>, home_score: u32, away_score: u32) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
            home_score,
            away_score,
            played: true,
        }
    }

    pub fn unplayed(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
            home_score: 0,
            away_score: 0,
            played: false,
        }
    }

    /// Result for a scheduled fixture
    pub fn for_fixture(fixture: &Fixture, home_score: u32, away_score: u32) -> Self {
        Self::played(
            fixture.home.name.clone(),
            fixture.away.name.clone(),
            home_score,
            away_score,
        )
    }
}

/// One entrant's line in the table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    /// 1-based rank after sorting
    pub position: usize,
    pub name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub set_wins: u32,
    /// Sum of raw scores
    pub points: u64,
}

impl StandingsRow {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

/// Fold results into ranked standings.
///
/// Only played results count. Each side adds its raw score to `points`;
/// the strictly higher score earns a win and a set win, the other a loss;
/// equal scores are a draw. Rows are ordered by points, set wins and wins
/// (all descending), then name.
///
/// The fold is keyed by name, so the order of `results` never matters.
pub fn standings(results: &[MatchResult]) -> Vec<StandingsRow> {
    rank(fold(BTreeMap::new(), results))
}

/// Like [`standings`], but every roster entrant gets a row even before
/// playing
pub fn standings_for_roster(entrants: &[Entrant], results: &[MatchResult]) -> Vec<StandingsRow> {
    let table = entrants
        .iter()
        .map(|e| (e.name.clone(), StandingsRow::named(&e.name)))
        .collect();
    rank(fold(table, results))
}

fn fold(
    mut table: BTreeMap<String, StandingsRow>,
    results: &[MatchResult],
) -> BTreeMap<String, StandingsRow> {
    for result in results.iter().filter(|r| r.played) {
        let sides = [
            (&result.home, result.home_score, result.away_score),
            (&result.away, result.away_score, result.home_score),
        ];
        for (name, own, other) in sides {
            let row = table
                .entry(name.clone())
                .or_insert_with(|| StandingsRow::named(name));
            row.played += 1;
            row.points += u64::from(own);
            if own > other {
                row.won += 1;
                row.set_wins += 1;
            } else if own < other {
                row.lost += 1;
            } else {
                row.drawn += 1;
            }
        }
    }
    table
}

fn rank(table: BTreeMap<String, StandingsRow>) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = table.into_values().collect();
    rows.sort_by(|a, b| {
        (Reverse(a.points), Reverse(a.set_wins), Reverse(a.won), &a.name).cmp(&(
            Reverse(b.points),
            Reverse(b.set_wins),
            Reverse(b.won),
            &b.name,
        ))
    });
    for (idx, row) in rows.iter_mut().enumerate() {
        row.position = idx + 1;
    }
    rows
}

/// Render rows as a fixed-width table
pub struct StandingsTable<'a>(pub &'a [StandingsRow]);

impl fmt::Display for StandingsTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "STANDINGS")?;
        writeln!(
            f,
            "  {:>3}  {:<20} {:>3} {:>3} {:>3} {:>3} {:>4} {:>6}",
            "#", "Name", "P", "W", "D", "L", "Sets", "Pts"
        )?;
        for row in self.0 {
            writeln!(
                f,
                "  {:>3}  {:<20} {:>3} {:>3} {:>3} {:>3} {:>4} {:>6}",
                row.position,
                row.name,
                row.played,
                row.won,
                row.drawn,
                row.lost,
                row.set_wins,
                row.points
            )?;
        }
        Ok(())
    }
}
