//! CLI command handlers
//!
//! Kept out of main.rs so they can be unit tested.

use crate::analysis::AnalysisResult;
use crate::error::{ExposureError, Result};
use crate::reporter::{Notifier, NotifyLevel, StderrNotifier};
use crate::{AppContext, Cli};
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info, warn};

/// Result type for handler functions that can be tested
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerResult {
    Success,
    Error(u8),
}

impl From<HandlerResult> for ExitCode {
    fn from(result: HandlerResult) -> Self {
        match result {
            HandlerResult::Success => ExitCode::SUCCESS,
            HandlerResult::Error(code) => ExitCode::from(code),
        }
    }
}

/// Analyze cookies, emit the report and map the outcome to an exit code.
///
/// - 0: analysis ran (and, in strict mode, passed)
/// - 1: strict mode and a cookie reached the `fail_on` tier
/// - 2: input, configuration or output error
pub fn run_analysis(cli: &Cli) -> HandlerResult {
    info!(url = %cli.url, "Starting cookie analysis");

    let ctx = match AppContext::init(cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            StderrNotifier.notify(&format!("Error: {}", e), NotifyLevel::Danger);
            return HandlerResult::Error(2);
        }
    };

    let result = ctx.run();
    debug!(
        total = result.summary.total,
        critical = result.summary.critical,
        high = result.summary.high,
        "Analysis completed"
    );

    let output = ctx.render(&result);
    match cli.output {
        Some(ref path) => {
            if let Err(e) = write_output(path, &output, ctx.notifier()) {
                warn!(error = %e, "Failed to write output");
                ctx.notifier()
                    .notify(&format!("Error: {}", e), NotifyLevel::Danger);
                return HandlerResult::Error(2);
            }
        }
        None => println!("{}", output),
    }

    exit_status(cli.strict, &result)
}

fn write_output(path: &Path, output: &str, notifier: &dyn Notifier) -> Result<()> {
    fs::write(path, output).map_err(|e| ExposureError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;
    notifier.notify(
        &format!("Output written to {}", path.display()),
        NotifyLevel::Success,
    );
    Ok(())
}

fn exit_status(strict: bool, result: &AnalysisResult) -> HandlerResult {
    if strict && !result.summary.passed {
        HandlerResult::Error(1)
    } else {
        HandlerResult::Success
    }
}
