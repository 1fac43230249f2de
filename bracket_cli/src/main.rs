//! Command-line tournament bracket generator.
//!
//! Reads a roster file, generates a single elimination, double elimination
//! or round-robin event and prints it. An optional results file is applied
//! on top: elimination results are reported match by match, round-robin
//! results are folded into standings.

mod config;
mod input;
mod output;

use anyhow::{Context, Error};
use bracket_engine::progress::{BracketProgress, ReportMode, Score};
use bracket_engine::round_robin::standings_for_roster;
use bracket_engine::{Bracket, FormatGenerator, GeneratedEvent, Generator, Roster};
use config::{CliConfig, CliOverrides};
use log::{debug, info};
use pico_args::Arguments;
use rand::SeedableRng;
use rand::rngs::StdRng;

const HELP: &str = "\
Generate tournament brackets and round-robin schedules

USAGE:
  bracket_cli --entrants FILE [OPTIONS]

OPTIONS:
  --format     FORMAT      single, double or round-robin  [default: env BRACKET_FORMAT or single]
  --event      ID          Event identifier               [default: env BRACKET_EVENT_ID or event]
  --entrants   FILE        Roster: one name per line, or a JSON array of {name, seed}
  --results    FILE        Results to apply (JSON array)
  --shuffle    SEED        Reseed the roster randomly from SEED before generating

FLAGS:
  --json                   Print JSON instead of text
  -h, --help               Print help information

ENVIRONMENT:
  BRACKET_FORMAT           Default format
  BRACKET_EVENT_ID         Default event identifier
  BRACKET_ENTRANTS         Default roster file
  BRACKET_RESULTS          Default results file
  BRACKET_OUTPUT           text or json
  BRACKET_SHUFFLE_SEED     Default shuffle seed
  RUST_LOG                 Log level (e.g. info, debug)
";

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = CliOverrides {
        format: pargs.opt_value_from_str("--format")?,
        event_id: pargs.opt_value_from_str("--event")?,
        entrants: pargs.opt_value_from_str("--entrants")?,
        results: pargs.opt_value_from_str("--results")?,
        json: pargs.contains("--json"),
        shuffle_seed: pargs.opt_value_from_str("--shuffle")?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        anyhow::bail!("Unexpected arguments: {remaining:?}\n\n{HELP}");
    }

    env_logger::builder().format_target(false).init();

    let config = CliConfig::from_env(overrides)?;
    config.validate()?;

    println!("{}", run(&config)?);
    Ok(())
}

fn run(config: &CliConfig) -> Result<String, Error> {
    let inputs = input::load_entrants(&config.entrants_path)?;
    let mut roster = Roster::from_inputs(&inputs)
        .with_context(|| format!("Invalid roster in {}", config.entrants_path.display()))?;

    if let Some(seed) = config.shuffle_seed {
        debug!("Shuffling roster with seed {seed}");
        roster = roster.shuffled(&mut StdRng::seed_from_u64(seed));
    }

    info!(
        "Generating {} for event {} with {} entrants",
        config.event.format,
        config.event.event_id,
        roster.len()
    );
    let event = FormatGenerator::from(config.event.format).generate(&config.event.event_id, &roster)?;

    let Some(results_path) = &config.results_path else {
        return Ok(output::render_event(&event, config.output)?);
    };

    let rendered = match &event {
        GeneratedEvent::Elimination(bracket) => {
            let reports = input::load_reports(results_path)?;
            let progress = apply_reports(bracket.clone(), &reports)?;
            output::render_progress(&progress, config.output)?
        }
        GeneratedEvent::RoundRobin(plan) => {
            let results = input::load_results(results_path)?;
            let rows = standings_for_roster(&plan.entrants, &results);
            output::render_league(plan, &rows, config.output)?
        }
    };
    Ok(rendered)
}

/// Report every result line in order, stopping at the first rejection
fn apply_reports(bracket: Bracket, reports: &[input::ReportLine]) -> Result<BracketProgress, Error> {
    let mut progress = BracketProgress::new(bracket);
    for (line, report) in reports.iter().enumerate() {
        let mode = if report.override_result {
            ReportMode::Override
        } else {
            ReportMode::Normal
        };
        progress
            .report(&report.match_id, Score::new(report.top, report.bottom), mode)
            .with_context(|| format!("Result {} ({}) rejected", line + 1, report.match_id))?;
    }
    info!("Applied {} results", reports.len());
    Ok(progress)
}
