//! Application context.
//!
//! Everything a run needs is built once by [`AppContext::init`] and passed
//! around explicitly.

use crate::analysis::{AnalysisResult, Analyzer};
use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::input::{ResolvedInput, SourceResolver};
use crate::reporter::{
    Notifier, Reporter, StderrNotifier, json::JsonReporter, terminal::TerminalReporter,
    text::TextReporter,
};
use crate::scoring::RiskScorer;
use tracing::debug;

pub struct AppContext {
    pub config: Config,
    pub input: ResolvedInput,
    analyzer: Analyzer,
    reporter: Box<dyn Reporter>,
    notifier: Box<dyn Notifier>,
}

impl AppContext {
    /// Load configuration, resolve input and wire up the collaborators.
    pub fn init(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().ok();
        let config = Config::resolve(cli.config.as_deref(), cwd.as_deref())?;
        debug!(?config, "Configuration resolved");

        let input = SourceResolver::resolve(cli)?;
        let scorer = RiskScorer::new(config.scoring.clone());
        let reporter = build_reporter(cli.format, cli.verbose, &config, &scorer);
        let analyzer = Analyzer::new(scorer, config.report.fail_on);

        Ok(Self {
            config,
            input,
            analyzer,
            reporter,
            notifier: Box::new(StderrNotifier),
        })
    }

    /// Replace the default stderr notifier.
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Analyze the resolved input. Recomputed on every call.
    pub fn run(&self) -> AnalysisResult {
        match self.input.records {
            Some(ref records) => self
                .analyzer
                .analyze_records(&self.input.page, records.clone()),
            None => self.analyzer.analyze(&self.input.page),
        }
    }

    pub fn render(&self, result: &AnalysisResult) -> String {
        self.reporter.report(result)
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }
}

fn build_reporter(
    format: OutputFormat,
    verbose: bool,
    config: &Config,
    scorer: &RiskScorer,
) -> Box<dyn Reporter> {
    match format {
        OutputFormat::Terminal => Box::new(
            TerminalReporter::new(verbose, config.report.redact_length)
                .with_max_score(scorer.max_score()),
        ),
        OutputFormat::Json => Box::new(JsonReporter::new()),
        OutputFormat::Text => Box::new(TextReporter::new(config.report.text_redact_length)),
    }
}
