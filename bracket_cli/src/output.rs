//! Text and JSON rendering of CLI results.

use bracket_engine::progress::{BracketProgress, MatchState};
use bracket_engine::round_robin::StandingsTable;
use bracket_engine::{Bracket, Entrant, GeneratedEvent, MatchId, RoundRobinSchedule, StandingsRow};
use serde::Serialize;
use std::fmt;

use crate::config::OutputMode;

#[derive(Serialize)]
struct LeagueReport<'a> {
    schedule: &'a RoundRobinSchedule,
    standings: &'a [StandingsRow],
}

#[derive(Serialize)]
struct MatchProgress<'a> {
    id: &'a MatchId,
    state: &'a MatchState,
}

#[derive(Serialize)]
struct ProgressReport<'a> {
    bracket: &'a Bracket,
    results: Vec<MatchProgress<'a>>,
    reportable: Vec<&'a MatchId>,
    champion: Option<&'a Entrant>,
}

/// Freshly generated bracket or schedule
pub fn render_event(event: &GeneratedEvent, mode: OutputMode) -> serde_json::Result<String> {
    match mode {
        OutputMode::Text => Ok(event.to_string()),
        OutputMode::Json => event.to_json(),
    }
}

/// Schedule followed by the standings table
pub fn render_league(
    plan: &RoundRobinSchedule,
    rows: &[StandingsRow],
    mode: OutputMode,
) -> serde_json::Result<String> {
    match mode {
        OutputMode::Text => Ok(format!("{plan}\n{}", StandingsTable(rows))),
        OutputMode::Json => serde_json::to_string_pretty(&LeagueReport {
            schedule: plan,
            standings: rows,
        }),
    }
}

/// Bracket with every recorded result applied
pub fn render_progress(progress: &BracketProgress, mode: OutputMode) -> serde_json::Result<String> {
    match mode {
        OutputMode::Text => Ok(format!("{}\n{}", progress.bracket(), ProgressText(progress))),
        OutputMode::Json => {
            let results = progress
                .bracket()
                .matches
                .iter()
                .filter_map(|m| {
                    progress
                        .state(&m.id)
                        .map(|state| MatchProgress { id: &m.id, state })
                })
                .collect();
            serde_json::to_string_pretty(&ProgressReport {
                bracket: progress.bracket(),
                results,
                reportable: progress.reportable(),
                champion: progress.champion(),
            })
        }
    }
}

struct ProgressText<'a>(&'a BracketProgress);

impl fmt::Display for ProgressText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = self.0;
        writeln!(f, "RESULTS")?;
        for m in &progress.bracket().matches {
            let Some(state) = progress.state(&m.id) else {
                continue;
            };
            let id = m.id.to_string();
            match state {
                MatchState::Resolved {
                    top, bottom, score, ..
                } => writeln!(f, "    {id:<6} {top} {}-{} {bottom}", score.top, score.bottom)?,
                MatchState::Reportable { top, bottom } => {
                    writeln!(f, "    {id:<6} {top} vs {bottom} (ready)")?
                }
                MatchState::NotNeeded => writeln!(f, "    {id:<6} not needed")?,
                MatchState::Pending { .. } => {}
            }
        }

        match progress.champion() {
            Some(champion) => writeln!(f, "CHAMPION: {champion}"),
            None => {
                let ready: Vec<String> = progress.reportable().iter().map(|id| id.to_string()).collect();
                writeln!(f, "READY: {}", ready.join(", "))
            }
        }
    }
}
