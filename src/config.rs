//! Engine configuration: JSON file, environment overrides, validation.

use std::collections::HashSet;
use std::hash::Hash;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algo::Algorithm;
use crate::clone::CloneMethod;
use crate::error::{Result, SortError};
use crate::natural::RunOrder;

pub const ENV_NATURAL_RUNS: &str = "SORTKIT_NATURAL_RUNS";
pub const ENV_ALGORITHMS: &str = "SORTKIT_ALGORITHMS";
pub const ENV_CLONE_METHODS: &str = "SORTKIT_CLONE_METHODS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// How the natural sort compares runs of the same kind.
    pub natural_runs: RunOrder,
    /// Algorithms the sort benchmark runs, in order.
    pub algorithms: Vec<Algorithm>,
    /// Methods the clone benchmark runs, in order.
    pub clone_methods: Vec<CloneMethod>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            natural_runs: RunOrder::default(),
            algorithms: Algorithm::ALL.to_vec(),
            clone_methods: CloneMethod::ALL.to_vec(),
        }
    }
}

impl SortConfig {
    /// Parses and validates a JSON configuration. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a JSON file with environment variable overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&content)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Default configuration with environment variable overrides.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides to configuration
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Applies overrides from `lookup`, which maps a variable name to its value.
    ///
    /// Values that fail to parse are logged and leave the setting unchanged.
    pub fn apply_overrides<L>(&mut self, lookup: L)
    where
        L: Fn(&str) -> Option<String>,
    {
        if let Some(runs) = lookup(ENV_NATURAL_RUNS) {
            match runs.parse::<RunOrder>() {
                Ok(value) => self.natural_runs = value,
                Err(e) => {
                    tracing::warn!(
                        "Invalid {} value '{}': {}. Using default.",
                        ENV_NATURAL_RUNS,
                        runs,
                        e
                    );
                }
            }
        }
        if let Some(algorithms) = lookup(ENV_ALGORITHMS) {
            match parse_list::<Algorithm>(&algorithms) {
                Ok(value) => self.algorithms = value,
                Err(e) => {
                    tracing::warn!(
                        "Invalid {} value '{}': {}. Using default.",
                        ENV_ALGORITHMS,
                        algorithms,
                        e
                    );
                }
            }
        }
        if let Some(methods) = lookup(ENV_CLONE_METHODS) {
            match parse_list::<CloneMethod>(&methods) {
                Ok(value) => self.clone_methods = value,
                Err(e) => {
                    tracing::warn!(
                        "Invalid {} value '{}': {}. Using default.",
                        ENV_CLONE_METHODS,
                        methods,
                        e
                    );
                }
            }
        }
    }

    /// Checks that both benchmark lists are non-empty and free of duplicates.
    pub fn validate(&self) -> Result<()> {
        validate_list("algorithms", &self.algorithms)?;
        validate_list("clone_methods", &self.clone_methods)?;
        Ok(())
    }
}

fn parse_list<T: FromStr<Err = SortError>>(raw: &str) -> Result<Vec<T>> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::parse)
        .collect()
}

fn validate_list<T: Eq + Hash + std::fmt::Display>(field: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(SortError::config(format!("{field} must not be empty")));
    }

    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item) {
            return Err(SortError::config(format!("{field} lists '{item}' twice")));
        }
    }
    Ok(())
}
