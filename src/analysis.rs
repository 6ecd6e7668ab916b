use crate::cookie::{CookieRecord, CookieSource};
use crate::input::PageContext;
use crate::scoring::{RiskAssessment, RiskScorer, RiskTier};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where the analyzed records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordOrigin {
    /// Parsed from a cookie string; attributes are assumed defaults and
    /// HttpOnly cookies are missing entirely.
    ScriptVisible,
    /// Supplied with real attributes.
    Supplied,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookieFinding {
    #[serde(flatten)]
    pub record: CookieRecord,
    pub assessment: RiskAssessment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest: Option<RiskTier>,
    pub passed: bool,
}

impl Summary {
    /// `passed` is false once any cookie reaches `fail_on`.
    pub fn from_findings(findings: &[CookieFinding], fail_on: RiskTier) -> Self {
        let (critical, high, medium, low) =
            findings
                .iter()
                .fold((0, 0, 0, 0), |(c, h, m, l), f| match f.assessment.tier {
                    RiskTier::Critical => (c + 1, h, m, l),
                    RiskTier::High => (c, h + 1, m, l),
                    RiskTier::Medium => (c, h, m + 1, l),
                    RiskTier::Low => (c, h, m, l + 1),
                });
        let highest = findings.iter().map(|f| f.assessment.tier).max();

        Self {
            total: findings.len(),
            critical,
            high,
            medium,
            low,
            highest,
            passed: highest.is_none_or(|tier| tier < fail_on),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub version: String,
    pub analyzed_at: String,
    pub domain: String,
    pub secure_context: bool,
    pub origin: RecordOrigin,
    pub summary: Summary,
    pub cookies: Vec<CookieFinding>,
}

/// Runs cookie enumeration and scoring for one page.
#[derive(Debug, Clone)]
pub struct Analyzer {
    scorer: RiskScorer,
    fail_on: RiskTier,
}

impl Analyzer {
    pub fn new(scorer: RiskScorer, fail_on: RiskTier) -> Self {
        Self { scorer, fail_on }
    }

    /// Enumerate the page's cookie string and score every record.
    pub fn analyze(&self, page: &PageContext) -> AnalysisResult {
        let records = CookieSource::new(page).enumerate();
        debug!(count = records.len(), "Enumerated script-visible cookies");
        self.build(page, records, RecordOrigin::ScriptVisible)
    }

    /// Score records that were obtained elsewhere.
    pub fn analyze_records(
        &self,
        page: &PageContext,
        records: Vec<CookieRecord>,
    ) -> AnalysisResult {
        debug!(count = records.len(), "Scoring supplied cookie records");
        self.build(page, records, RecordOrigin::Supplied)
    }

    fn build(
        &self,
        page: &PageContext,
        records: Vec<CookieRecord>,
        origin: RecordOrigin,
    ) -> AnalysisResult {
        let assessments = self.scorer.assess_all(&records, page.secure_context);
        let cookies: Vec<CookieFinding> = records
            .into_iter()
            .zip(assessments)
            .map(|(record, assessment)| CookieFinding { record, assessment })
            .collect();

        AnalysisResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            analyzed_at: chrono::Utc::now().to_rfc3339(),
            domain: page.hostname.clone(),
            secure_context: page.secure_context,
            origin,
            summary: Summary::from_findings(&cookies, self.fail_on),
            cookies,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(RiskScorer::default(), RiskTier::High)
    }
}
