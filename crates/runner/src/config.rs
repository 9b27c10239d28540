//! Batch configuration
//!
//! Loaded from JSON (every field optional, defaults fill the gaps) and then
//! overridden by command-line flags in the binary.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::attributes::DEFAULT_ATTRIBUTE_COUNT;

/// Root configuration for one batch of auctions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Bidders taking part in every auction
    pub bidders: usize,
    /// Auctions run concurrently in the batch
    pub auctions: usize,
    /// Per-auction deadline (ms)
    pub timeout_ms: u64,
    /// Attributes generated per auction
    pub attributes: usize,
    /// Admission gate sizing; defaults to the CPU count
    pub capacity_hint: Option<usize>,
    /// Directory receiving the JSON results
    pub output_dir: PathBuf,
    /// Seed for attributes, population and bidder draws
    pub seed: Option<u64>,
    pub population: PopulationConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            bidders: 100,
            auctions: 40,
            timeout_ms: 800,
            attributes: DEFAULT_ATTRIBUTE_COUNT,
            capacity_hint: None,
            output_dir: PathBuf::from("sample-outputs"),
            seed: None,
            population: PopulationConfig::default(),
        }
    }
}

impl BatchConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bidders == 0 {
            return Err(ConfigError::Invalid("bidders must be positive".to_string()));
        }
        if self.auctions == 0 {
            return Err(ConfigError::Invalid("auctions must be positive".to_string()));
        }
        if self.attributes == 0 {
            return Err(ConfigError::Invalid(
                "attributes must be positive".to_string(),
            ));
        }
        if self.population.latency_base_ms == 0 {
            return Err(ConfigError::Invalid(
                "population.latency_base_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Capacity hint for the admission gate
    pub fn capacity_hint(&self) -> usize {
        self.capacity_hint.unwrap_or_else(num_cpus::get)
    }
}

/// How the bidder population is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    /// Smallest mean latency a bidder can get (ms)
    pub latency_base_ms: u64,
    /// Width of the uniform range added on top of the base (ms)
    pub latency_spread_ms: u64,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            latency_base_ms: 50,
            latency_spread_ms: 400,
        }
    }
}

/// Configuration error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
