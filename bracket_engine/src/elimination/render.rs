//! Plain-text bracket dump for sanity checks.

use std::fmt;

use super::models::{Bracket, BracketKind, Match};
use crate::config::Format;

fn write_match(f: &mut fmt::Formatter<'_>, m: &Match) -> fmt::Result {
    write!(f, "    {:<6} {} vs {}", m.id.to_string(), m.top, m.bottom)?;
    if m.is_bracket_reset() {
        write!(f, " [reset if needed]")?;
    }
    if let Some(target) = &m.winner_to {
        write!(f, "  W-> {target}")?;
    }
    if let Some(target) = &m.loser_to {
        write!(f, "  L-> {target}")?;
    }
    writeln!(f)
}

fn write_section(
    f: &mut fmt::Formatter<'_>,
    bracket: &Bracket,
    title: &str,
    kind: BracketKind,
) -> fmt::Result {
    writeln!(f, "{title}")?;
    for (round, matches) in bracket.rounds(kind) {
        let overall = matches.first().map_or(round, |m| m.round);
        writeln!(f, "  Round {round} (overall {overall})")?;
        for m in matches {
            write_match(f, m)?;
        }
    }
    Ok(())
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = &self.summary;
        writeln!(
            f,
            "{} - {} ({} entrants, size {}, {} byes)",
            self.event_id,
            summary.bracket_type,
            summary.entrant_count,
            summary.bracket_size,
            summary.bye_count
        )?;

        match summary.bracket_type {
            Format::DoubleElimination => {
                write_section(f, self, "WINNERS BRACKET", BracketKind::Winners)?;
                write_section(f, self, "LOSERS BRACKET", BracketKind::Losers)?;
                writeln!(f, "GRAND FINALS")?;
                for m in self
                    .matches_in(BracketKind::GrandFinals)
                    .chain(self.matches_in(BracketKind::Reset))
                {
                    write_match(f, m)?;
                }
                Ok(())
            }
            _ => write_section(f, self, "BRACKET", BracketKind::Winners),
        }
    }
}
