//! Residency rule configuration

use serde::Deserialize;

use crate::error::PopulationError;

/// Configuration for residency bookkeeping
///
/// Loaded from `POPULATION_*` environment variables, e.g.
/// `POPULATION_STRICT_CHRONOLOGY=true`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResidencyConfig {
    /// Reject move-in dates on or before the current residency's move-in date
    pub strict_chronology: bool,
}

impl ResidencyConfig {
    /// Configuration that rejects non-monotonic move-in dates
    pub fn strict() -> Self {
        Self { strict_chronology: true }
    }

    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, PopulationError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("POPULATION"))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| PopulationError::Configuration(e.to_string()))
    }

    /// Loads configuration from environment, falling back to defaults
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Invalid residency configuration, using defaults");
            Self::default()
        })
    }
}
