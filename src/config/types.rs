//! Configuration type definitions.

use crate::scoring::{RiskTier, ScoringPolicy};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Main configuration structure for cookies-exposed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Risk weights and tier thresholds.
    pub scoring: ScoringPolicy,
    /// Report rendering options.
    pub report: ReportConfig,
}

impl Config {
    /// Reject configurations the scorer cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.scoring.thresholds;
        if !t.is_ordered() {
            return Err(ConfigError::InvalidThresholds {
                critical: t.critical,
                high: t.high,
                medium: t.medium,
            });
        }
        Ok(())
    }
}

/// Report rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Characters of each value left visible in terminal output.
    pub redact_length: usize,
    /// Characters of each value left visible in the text report.
    pub text_redact_length: usize,
    /// Lowest tier that makes a run fail.
    pub fail_on: RiskTier,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            redact_length: 4,
            text_redact_length: 8,
            fail_on: RiskTier::High,
        }
    }
}
