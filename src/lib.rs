pub mod analysis;
pub mod cli;
pub mod config;
pub mod context;
pub mod cookie;
pub mod display;
pub mod error;
pub mod handlers;
pub mod input;
pub mod reporter;
pub mod scoring;

#[cfg(test)]
pub mod test_utils;

pub use analysis::{AnalysisResult, Analyzer, CookieFinding, RecordOrigin, Summary};
pub use cli::{Cli, OutputFormat};
pub use config::{Config, ConfigError, ReportConfig};
pub use context::AppContext;
pub use cookie::{CookieRecord, CookieSource, Expiry, SameSite, parse_cookie_string};
pub use error::{ExposureError, Result};
pub use input::PageContext;
pub use reporter::{
    Notifier, NotifyLevel, Reporter, json::JsonReporter, terminal::TerminalReporter,
    text::TextReporter,
};
pub use scoring::{
    RiskAssessment, RiskScorer, RiskTier, RiskWeights, ScoringPolicy, TierThresholds,
};
