//! Hybrid urgency scoring and tier classification.
//!
//! The score blends three terms, weighted 50/30/20:
//!
//! ```text
//! priority = weight * (10 / (days + 1))
//! heat     = weight * 2 + 8 / (days + 1)
//! decay    = 5 * exp(-0.25 * days)
//! score    = 0.5*priority + 0.3*heat + 0.2*decay   (* 1.5 for exams)
//! ```
//!
//! `priority` and `heat` are hyperbolic in the remaining days, `decay` is
//! exponential, so the score climbs sharply as a deadline approaches. The
//! exam multiplier is applied after the blend, never per term.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Multiplier applied to the blended score for exams.
pub const EXAM_MULTIPLIER: f64 = 1.5;

/// Per-term breakdown of an urgency score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Hyperbolic deadline term, scaled by weight.
    pub priority: f64,
    /// Weight-dominated term with a small deadline component.
    pub heat: f64,
    /// Exponential falloff in remaining days.
    pub decay: f64,
    /// Weighted blend of the three terms before the exam multiplier.
    pub base: f64,
    /// Final score.
    pub total: f64,
}

/// Compute the urgency score with its per-term breakdown.
///
/// `days` below zero is clamped to zero: overdue items score as if due
/// today, which is the maximum finite score for their weight and keeps the
/// `days = -1` pole of the hyperbolic terms unreachable. Callers that
/// display remaining days keep the true (negative) count.
pub fn score_breakdown(days: f64, weight: f64, is_exam: bool) -> ScoreBreakdown {
    let days = days.max(0.0);
    let priority = weight * (10.0 / (days + 1.0));
    let heat = weight * 2.0 + 8.0 / (days + 1.0);
    let decay = 5.0 * (-0.25 * days).exp();
    let base = 0.5 * priority + 0.3 * heat + 0.2 * decay;
    let total = if is_exam { base * EXAM_MULTIPLIER } else { base };
    ScoreBreakdown {
        priority,
        heat,
        decay,
        base,
        total,
    }
}

/// Compute the urgency score alone.
pub fn urgency_score(days: f64, weight: f64, is_exam: bool) -> f64 {
    score_breakdown(days, weight, is_exam).total
}

/// Discrete urgency tier derived from a score, for presentation only.
///
/// Classification never influences ordering; items are ranked by the raw
/// score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Critical,
    High,
    Medium,
    Low,
}

impl Tier {
    /// Classify a score. Boundaries are inclusive on the lower edge:
    /// `>= 12` Critical, `>= 7` High, `>= 4` Medium, below that Low.
    ///
    /// Total for every `f64`: NaN fails each `>=` test and lands in Low.
    pub fn from_score(score: f64) -> Self {
        if score >= 12.0 {
            Tier::Critical
        } else if score >= 7.0 {
            Tier::High
        } else if score >= 4.0 {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Critical => "critical",
            Tier::High => "high",
            Tier::Medium => "medium",
            Tier::Low => "low",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
