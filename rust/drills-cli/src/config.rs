//! Configuration file parsing for `drills.toml`.
//!
//! Searches current directory then ancestors, falling back to
//! `~/.config/drills/drills.toml` if no project-level file is found.

use drills_core::dataset::DEFAULT_MAX_VALUE;
use drills_core::josephus::DEFAULT_MAX_PEOPLE;
use drills_core::scenario::{RandomDatasetsConfig, ScalabilityConfig, ScenarioConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "drills.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid toml in '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct DrillsConfig {
    #[serde(default)]
    pub sort: SortSection,
    #[serde(default)]
    pub josephus: JosephusSection,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SortSection {
    /// Fixed RNG seed; unseeded runs draw from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Generated values fall in `0..max_value`.
    pub max_value: i32,
    pub scalability_sizes: Vec<usize>,
    pub random_sizes: Vec<usize>,
}

impl Default for SortSection {
    fn default() -> Self {
        Self {
            seed: None,
            max_value: DEFAULT_MAX_VALUE,
            scalability_sizes: ScalabilityConfig::default().sizes,
            random_sizes: RandomDatasetsConfig::default().sizes,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct JosephusSection {
    pub max_people: usize,
}

impl Default for JosephusSection {
    fn default() -> Self {
        Self {
            max_people: DEFAULT_MAX_PEOPLE,
        }
    }
}

impl DrillsConfig {
    /// Load config from `drills.toml`, searching current dir then parents.
    /// Returns `Default` when no file is found.
    pub fn load() -> Self {
        Self::load_with_path()
            .map(|(_path, cfg)| cfg)
            .unwrap_or_default()
    }

    /// Load config and return the path to the config file that was found.
    pub fn load_with_path() -> Option<(PathBuf, Self)> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.exists() {
                return Self::try_candidate(candidate);
            }
            if !dir.pop() {
                break;
            }
        }
        let global = home_dir()?.join(".config").join("drills").join(CONFIG_FILE);
        if global.exists() {
            return Self::try_candidate(global);
        }
        None
    }

    fn try_candidate(path: PathBuf) -> Option<(PathBuf, Self)> {
        match Self::load_from(&path) {
            Ok(cfg) => Some((path, cfg)),
            Err(e) => {
                tracing::warn!("ignoring config: {}", e);
                None
            }
        }
    }

    /// Load config from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a TOML string directly.
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Scenario settings with this file's overrides applied.
    pub fn scenario_config(&self) -> ScenarioConfig {
        let mut config = ScenarioConfig::default();
        config.scalability.sizes = self.sort.scalability_sizes.clone();
        config.scalability.max_value = self.sort.max_value;
        config.random_datasets.sizes = self.sort.random_sizes.clone();
        config.random_datasets.max_value = self.sort.max_value;
        config
    }

    /// Generate a default `drills.toml` template.
    pub fn default_template() -> &'static str {
        r#"# Drills configuration

[sort]
# seed = 42                          # fix the RNG for repeatable datasets
max_value = 10000                    # random values fall in 0..max_value
scalability_sizes = [1000, 100000]
random_sizes = [5, 20]

[josephus]
max_people = 1000
"#
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
