use crate::cookie::CookieRecord;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

const REASON_INSECURE_TRANSPORT: &str = "Cookie transmitted over unencrypted connections";
const REASON_SCRIPT_ACCESSIBLE: &str = "Accessible via JavaScript (XSS vulnerability)";
const REASON_CROSS_SITE: &str = "Can be sent with cross-site requests (CSRF risk)";
const REASON_BROAD_DOMAIN: &str = "Third-party cookie (tracking concerns)";
const REASON_SENSITIVE_NAME: &str = "Contains authentication/session data";
pub const REASON_NONE: &str = "Standard cookie with basic security";

const SENSITIVE_NAME_MARKERS: [&str; 3] = ["session", "auth", "token"];

/// Risk tier derived from a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskTier {
    /// Highest threshold wins; anything below `medium` is low.
    pub fn from_score(score: u32, thresholds: &TierThresholds) -> Self {
        if score >= thresholds.critical {
            RiskTier::Critical
        } else if score >= thresholds.high {
            RiskTier::High
        } else if score >= thresholds.medium {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
            RiskTier::Critical => "critical",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Points added per triggered predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskWeights {
    /// Cookie not marked Secure on an encrypted page.
    pub insecure_transport: u32,
    /// Cookie readable from page script.
    pub script_accessible: u32,
    /// SameSite is None or unset.
    pub cross_site: u32,
    /// Domain attribute starts with a dot.
    pub broad_domain: u32,
    pub session_name: u32,
    pub auth_name: u32,
    pub token_name: u32,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            insecure_transport: 3,
            script_accessible: 2,
            cross_site: 2,
            broad_domain: 1,
            session_name: 1,
            auth_name: 1,
            token_name: 1,
        }
    }
}

/// Minimum score for each tier above `low`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            critical: 6,
            high: 4,
            medium: 2,
        }
    }
}

impl TierThresholds {
    /// Thresholds must be strictly descending from critical to medium.
    pub fn is_ordered(&self) -> bool {
        self.critical > self.high && self.high > self.medium
    }
}

/// Scoring policy: weights plus tier thresholds.
///
/// The defaults are heuristic values picked for teaching purposes. They are
/// not derived from any formal risk model and should be tuned, not trusted,
/// when used for real assessments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    pub weights: RiskWeights,
    pub thresholds: TierThresholds,
}

/// Score, tier and the reasons behind them for one cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u32,
    pub tier: RiskTier,
    pub reasons: Vec<String>,
}

impl RiskAssessment {
    /// Generate a visual bar for the score (10 chars wide)
    pub fn score_bar(&self, max: u32) -> String {
        let max = max.max(1);
        let filled = ((self.score as f32 / max as f32) * 10.0).round() as usize;
        let filled = filled.min(10);
        let empty = 10 - filled;
        format!("{}{}", "█".repeat(filled), "░".repeat(empty))
    }
}

/// Maps a cookie record plus the page's transport security to a risk
/// assessment. Pure: no I/O, no state between calls.
#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    policy: ScoringPolicy,
}

impl RiskScorer {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    /// Sum of the weights of every triggered predicate. Name markers are
    /// weighted independently, so `auth_token` collects both. Saturates at
    /// `u32::MAX` for oversized configured weights.
    pub fn score(&self, record: &CookieRecord, secure_context: bool) -> u32 {
        let w = &self.policy.weights;
        let name = record.name.to_lowercase();

        [
            (exposed_in_transit(record, secure_context), w.insecure_transport),
            (!record.http_only, w.script_accessible),
            (record.allows_cross_site(), w.cross_site),
            (record.has_broad_domain(), w.broad_domain),
            (name.contains("session"), w.session_name),
            (name.contains("auth"), w.auth_name),
            (name.contains("token"), w.token_name),
        ]
        .into_iter()
        .filter(|(triggered, _)| *triggered)
        .fold(0u32, |risk, (_, weight)| risk.saturating_add(weight))
    }

    pub fn tier(&self, record: &CookieRecord, secure_context: bool) -> RiskTier {
        RiskTier::from_score(
            self.score(record, secure_context),
            &self.policy.thresholds,
        )
    }

    /// One reason per triggered predicate group, in evaluation order. The
    /// three name markers share a single reason.
    pub fn explain(&self, record: &CookieRecord, secure_context: bool) -> Vec<String> {
        let name = record.name.to_lowercase();
        let checks = [
            (
                exposed_in_transit(record, secure_context),
                REASON_INSECURE_TRANSPORT,
            ),
            (!record.http_only, REASON_SCRIPT_ACCESSIBLE),
            (record.allows_cross_site(), REASON_CROSS_SITE),
            (record.has_broad_domain(), REASON_BROAD_DOMAIN),
            (
                SENSITIVE_NAME_MARKERS.iter().any(|m| name.contains(m)),
                REASON_SENSITIVE_NAME,
            ),
        ];

        let reasons: Vec<String> = checks
            .into_iter()
            .filter(|(triggered, _)| *triggered)
            .map(|(_, reason)| reason.to_string())
            .collect();

        if reasons.is_empty() {
            vec![REASON_NONE.to_string()]
        } else {
            reasons
        }
    }

    pub fn assess(&self, record: &CookieRecord, secure_context: bool) -> RiskAssessment {
        let score = self.score(record, secure_context);
        RiskAssessment {
            score,
            tier: RiskTier::from_score(score, &self.policy.thresholds),
            reasons: self.explain(record, secure_context),
        }
    }

    /// Assess every record; output order matches input order.
    pub fn assess_all(
        &self,
        records: &[CookieRecord],
        secure_context: bool,
    ) -> Vec<RiskAssessment> {
        records
            .par_iter()
            .map(|record| self.assess(record, secure_context))
            .collect()
    }

    /// Largest score the current weights can produce.
    pub fn max_score(&self) -> u32 {
        let w = &self.policy.weights;
        [
            w.insecure_transport,
            w.script_accessible,
            w.cross_site,
            w.broad_domain,
            w.session_name,
            w.auth_name,
            w.token_name,
        ]
        .into_iter()
        .fold(0u32, u32::saturating_add)
    }
}

fn exposed_in_transit(record: &CookieRecord, secure_context: bool) -> bool {
    !record.secure && secure_context
}
