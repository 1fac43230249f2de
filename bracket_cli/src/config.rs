//! CLI configuration management.
//!
//! Consolidates environment variable reads and command-line overrides into
//! one validated configuration. Overrides win over environment variables,
//! which win over built-in defaults.

use bracket_engine::{EventConfig, Format};
use std::path::PathBuf;
use std::str::FromStr;

/// How generated values are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputMode::Text),
            "json" => Ok(OutputMode::Json),
            other => Err(format!("unknown output mode '{other}', expected text or json")),
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub format: Option<String>,
    pub event_id: Option<String>,
    pub entrants: Option<PathBuf>,
    pub results: Option<PathBuf>,
    pub json: bool,
    pub shuffle_seed: Option<u64>,
}

/// Complete CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Event id and format handed to the engine
    pub event: EventConfig,
    /// Roster file
    pub entrants_path: PathBuf,
    /// Optional results file applied after generation
    pub results_path: Option<PathBuf>,
    pub output: OutputMode,
    /// Reseed the roster randomly from this RNG seed before generating
    pub shuffle_seed: Option<u64>,
}

impl CliConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns error if the roster file is not given anywhere or a value
    /// fails to parse
    pub fn from_env(overrides: CliOverrides) -> Result<Self, ConfigError> {
        Self::load(overrides, |key| std::env::var(key).ok())
    }

    /// Load configuration with `lookup` standing in for the environment
    ///
    /// # Errors
    ///
    /// Same as [`CliConfig::from_env`]
    pub fn load<F>(overrides: CliOverrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match overrides.format {
            Some(raw) => parse_value("--format", &raw)?,
            None => match lookup("BRACKET_FORMAT") {
                Some(raw) => parse_value("BRACKET_FORMAT", &raw)?,
                None => Format::SingleElimination,
            },
        };

        let event_id = overrides
            .event_id
            .or_else(|| lookup("BRACKET_EVENT_ID"))
            .unwrap_or_else(|| EventConfig::default().event_id);

        let entrants_path = overrides
            .entrants
            .or_else(|| lookup("BRACKET_ENTRANTS").map(PathBuf::from))
            .ok_or_else(|| ConfigError::MissingRequired {
                var: "BRACKET_ENTRANTS".to_string(),
                hint: "Pass a roster file with --entrants".to_string(),
            })?;

        let results_path = overrides
            .results
            .or_else(|| lookup("BRACKET_RESULTS").map(PathBuf::from));

        let output = if overrides.json {
            OutputMode::Json
        } else {
            match lookup("BRACKET_OUTPUT") {
                Some(raw) => parse_value("BRACKET_OUTPUT", &raw)?,
                None => OutputMode::Text,
            }
        };

        let shuffle_seed = match overrides.shuffle_seed {
            Some(seed) => Some(seed),
            None => lookup("BRACKET_SHUFFLE_SEED")
                .map(|raw| parse_value("BRACKET_SHUFFLE_SEED", &raw))
                .transpose()?,
        };

        Ok(CliConfig {
            event: EventConfig::new(event_id, format),
            entrants_path,
            results_path,
            output,
            shuffle_seed,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.event.validate().map_err(|e| ConfigError::Invalid {
            var: "BRACKET_EVENT_ID".to_string(),
            reason: e.to_string(),
        })?;

        if self.results_path.as_ref() == Some(&self.entrants_path) {
            return Err(ConfigError::Invalid {
                var: "BRACKET_RESULTS".to_string(),
                reason: "Must differ from the roster file".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required setting: {var}\nHint: {hint}")]
    MissingRequired { var: String, hint: String },

    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse a setting, naming it in the error
fn parse_value<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        var: var.to_string(),
        reason: e.to_string(),
    })
}
