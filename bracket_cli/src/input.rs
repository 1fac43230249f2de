//! Roster and result file loading.
//!
//! Roster files are either one name per line (blank lines and `#` comments
//! ignored; seeds follow line order) or a JSON array of `{ name, seed? }`
//! records. Result files are JSON arrays whose shape depends on the format.

use bracket_engine::{EntrantInput, MatchId, MatchResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One elimination result from a results file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportLine {
    #[serde(rename = "match")]
    pub match_id: MatchId,
    pub top: u32,
    pub bottom: u32,
    /// Replace an earlier, different result for the same match
    #[serde(default, rename = "override")]
    pub override_result: bool,
}

/// Input file errors
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

fn read(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_json<T>(path: &Path, text: &str) -> Result<T, InputError>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_str(text).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load raw entrant records from a roster file
pub fn load_entrants(path: &Path) -> Result<Vec<EntrantInput>, InputError> {
    let text = read(path)?;
    if text.trim_start().starts_with('[') {
        return parse_json(path, &text);
    }

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(EntrantInput::named)
        .collect())
}

/// Load round-robin results
pub fn load_results(path: &Path) -> Result<Vec<MatchResult>, InputError> {
    parse_json(path, &read(path)?)
}

/// Load elimination results, applied in file order
pub fn load_reports(path: &Path) -> Result<Vec<ReportLine>, InputError> {
    parse_json(path, &read(path)?)
}
