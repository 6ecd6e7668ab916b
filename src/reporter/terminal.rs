use crate::analysis::{AnalysisResult, CookieFinding, RecordOrigin};
use crate::display::{format_expiry, redact_value, yes_no};
use crate::reporter::Reporter;
use crate::scoring::RiskTier;
use colored::Colorize;

const SCRIPT_VISIBLE_NOTE: &str = "Note: attributes are assumed defaults; \
     HttpOnly cookies are invisible to script and not listed.";

pub struct TerminalReporter {
    verbose: bool,
    redact_length: usize,
    /// Highest achievable score, used to scale the score bar.
    max_score: u32,
}

impl TerminalReporter {
    pub fn new(verbose: bool, redact_length: usize) -> Self {
        Self {
            verbose,
            redact_length,
            max_score: 11,
        }
    }

    pub fn with_max_score(mut self, max_score: u32) -> Self {
        self.max_score = max_score;
        self
    }

    fn tier_color(&self, tier: &RiskTier) -> colored::ColoredString {
        let label = format!("[{}]", tier);
        match tier {
            RiskTier::Critical => label.red().bold(),
            RiskTier::High => label.yellow().bold(),
            RiskTier::Medium => label.cyan(),
            RiskTier::Low => label.green(),
        }
    }

    fn format_cookie(&self, index: usize, finding: &CookieFinding) -> String {
        let mut output = String::new();
        let record = &finding.record;
        let assessment = &finding.assessment;

        output.push_str(&format!(
            "{:>3}. {} {} = {}\n",
            index + 1,
            self.tier_color(&assessment.tier),
            record.name.bold(),
            redact_value(&record.value, self.redact_length).dimmed()
        ));

        if self.verbose {
            output.push_str(&format!(
                "     score: {:>2} {}\n",
                assessment.score,
                assessment.score_bar(self.max_score).dimmed()
            ));
            output.push_str(&format!(
                "     domain: {}  path: {}  expires: {}\n",
                record.domain,
                record.path,
                format_expiry(&record.expires)
            ));
            output.push_str(&format!(
                "     secure: {}  httpOnly: {}  sameSite: {}\n",
                yes_no(record.secure),
                yes_no(record.http_only),
                record
                    .same_site
                    .map(|s| s.as_str())
                    .unwrap_or("Not set")
            ));
        }

        for reason in &assessment.reasons {
            output.push_str(&format!("     {} {}\n", "-".dimmed(), reason));
        }

        output
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, result: &AnalysisResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            format!("cookies-exposed v{} - Cookie Exposure Analyzer", result.version).bold()
        ));
        output.push_str(&format!(
            "Page: {} ({})\n",
            result.domain,
            if result.secure_context {
                "secure context".green()
            } else {
                "insecure context".yellow()
            }
        ));
        if result.origin == RecordOrigin::ScriptVisible {
            output.push_str(&format!("{}\n", SCRIPT_VISIBLE_NOTE.dimmed()));
        }
        output.push('\n');

        if result.cookies.is_empty() {
            output.push_str(&"No cookies found.\n".green().to_string());
        } else {
            for (index, finding) in result.cookies.iter().enumerate() {
                output.push_str(&self.format_cookie(index, finding));
                output.push('\n');
            }
        }

        output.push_str(&format!("{}\n", "━".repeat(50)));
        output.push_str(&format!(
            "Summary: {} cookie(s): {} critical, {} high, {} medium, {} low\n",
            result.summary.total,
            result.summary.critical.to_string().red().bold(),
            result.summary.high.to_string().yellow().bold(),
            result.summary.medium.to_string().cyan(),
            result.summary.low
        ));

        let result_text = if result.summary.passed {
            "PASS".green().bold()
        } else {
            "FAIL".red().bold()
        };
        output.push_str(&format!("Result: {}\n", result_text));

        output
    }
}
