//! Plain-text report suitable for saving or sharing.

use crate::analysis::AnalysisResult;
use crate::display::{format_expiry, redact_value, yes_no};
use crate::reporter::Reporter;
use chrono::DateTime;
use std::fmt::Write;

const TITLE: &str = "COOKIE SECURITY ANALYSIS REPORT";

pub struct TextReporter {
    redact_length: usize,
}

impl TextReporter {
    pub fn new(redact_length: usize) -> Self {
        Self { redact_length }
    }

    fn generated_at(result: &AnalysisResult) -> String {
        DateTime::parse_from_rfc3339(&result.analyzed_at)
            .map(|ts| ts.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|_| result.analyzed_at.clone())
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new(8)
    }
}

impl Reporter for TextReporter {
    fn report(&self, result: &AnalysisResult) -> String {
        let mut report = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(report, "{}", TITLE);
        let _ = writeln!(report, "{}\n", "=".repeat(TITLE.len() + 1));
        let _ = writeln!(report, "Generated: {}", Self::generated_at(result));
        let _ = writeln!(report, "Domain: {}", result.domain);
        let _ = writeln!(report, "Total Cookies: {}\n", result.cookies.len());

        for (index, finding) in result.cookies.iter().enumerate() {
            let record = &finding.record;
            let domain = if record.domain.is_empty() {
                "Current domain"
            } else {
                record.domain.as_str()
            };
            let path = if record.path.is_empty() {
                "/"
            } else {
                record.path.as_str()
            };

            let _ = writeln!(report, "{}. {}", index + 1, record.name);
            let _ = writeln!(
                report,
                "   Value: {}",
                redact_value(&record.value, self.redact_length)
            );
            let _ = writeln!(report, "   Domain: {}", domain);
            let _ = writeln!(report, "   Path: {}", path);
            let _ = writeln!(report, "   Expires: {}", format_expiry(&record.expires));
            let _ = writeln!(report, "   Secure: {}", yes_no(record.secure));
            let _ = writeln!(report, "   HttpOnly: {}", yes_no(record.http_only));
            let _ = writeln!(
                report,
                "   SameSite: {}",
                record.same_site.map(|s| s.as_str()).unwrap_or("Not set")
            );
            let _ = writeln!(report, "   Risk Level: {}", finding.assessment.tier);
            let _ = writeln!(report, "   Security Issues:");
            for reason in &finding.assessment.reasons {
                let _ = writeln!(report, "     - {}", reason);
            }
            report.push('\n');
        }

        report
    }
}
