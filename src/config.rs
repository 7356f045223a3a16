//! Run configuration from environment variables, and roster file loading.
//!
//! WORLDCUP_TEAMS (generated field size), WORLDCUP_ROSTER (CSV path),
//! WORLDCUP_SEED, WORLDCUP_MAX_ATTEMPTS, WORLDCUP_OUTPUT (text|json),
//! WORLDCUP_STEPWISE (true|false).

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// An environment variable holds a value that doesn't parse.
    InvalidValue { key: &'static str, value: String },
    /// Roster file couldn't be opened or parsed.
    Roster(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {}: '{}'", key, value)
            }
            ConfigError::Roster(msg) => write!(f, "Could not read roster: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Size of the generated field ("Team 1".."Team N") when no roster file is set.
    pub teams: usize,
    pub roster_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub max_attempts: u32,
    pub output: OutputFormat,
    /// Print standings after every day and round (text output only).
    pub stepwise: bool,
}

fn default_teams() -> usize {
    32
}

fn default_max_attempts() -> u32 {
    10
}

fn default_stepwise() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            teams: default_teams(),
            roster_path: None,
            seed: None,
            max_attempts: default_max_attempts(),
            output: OutputFormat::default(),
            stepwise: default_stepwise(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_attempts =
            parse_var(&lookup, "WORLDCUP_MAX_ATTEMPTS")?.unwrap_or_else(default_max_attempts);
        if max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                key: "WORLDCUP_MAX_ATTEMPTS",
                value: "0".to_string(),
            });
        }
        Ok(Self {
            teams: parse_var(&lookup, "WORLDCUP_TEAMS")?.unwrap_or_else(default_teams),
            roster_path: lookup("WORLDCUP_ROSTER")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            seed: parse_var(&lookup, "WORLDCUP_SEED")?,
            max_attempts,
            output: parse_var(&lookup, "WORLDCUP_OUTPUT")?.unwrap_or_default(),
            stepwise: parse_var(&lookup, "WORLDCUP_STEPWISE")?.unwrap_or_else(default_stepwise),
        })
    }

    /// Entrant names: from the roster file if set, else a generated field.
    pub fn participants(&self) -> Result<Vec<String>, ConfigError> {
        match &self.roster_path {
            Some(path) => load_roster(path),
            None => Ok((1..=self.teams).map(|i| format!("Team {}", i)).collect()),
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

pub fn load_roster(path: &Path) -> Result<Vec<String>, ConfigError> {
    let file = File::open(path).map_err(|e| ConfigError::Roster(format!("{}: {}", path.display(), e)))?;
    parse_roster(file)
}

/// One participant per record, taken from the first column. A leading `name`
/// header and blank names are skipped.
pub fn parse_roster<R: Read>(reader: R) -> Result<Vec<String>, ConfigError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut names = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|e| ConfigError::Roster(e.to_string()))?;
        let Some(name) = record.get(0) else { continue };
        if name.is_empty() || (i == 0 && name.eq_ignore_ascii_case("name")) {
            continue;
        }
        names.push(name.to_string());
    }
    Ok(names)
}
