//! Match scoring — pluggable, trait-based scorer that rates one job listing
//! against one preference record.
//!
//! Default: `PreferenceScorer` (weighted location/salary/role/company blend).
//! `AppState` holds an `Arc<dyn JobScorer>` so the ranking path never names a backend.

use serde::{Deserialize, Serialize};

use crate::matching::company::company_score;
use crate::matching::location::location_score;
use crate::matching::role::role_score;
use crate::matching::salary::salary_score;
use crate::models::job::JobListing;
use crate::models::preferences::UserPreferences;

pub const FALLBACK_REASON: &str = "General match based on your preferences";

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

/// Per-job result. Every score is rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job: JobListing,
    /// Weighted blend; stays within 0 – 100 only if the weights sum to ~1.0.
    pub overall_score: f64,
    pub location_score: f64,
    pub salary_score: f64,
    pub role_score: f64,
    pub company_score: f64,
    pub recommendation_reason: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching ranking or handlers.
pub trait JobScorer: Send + Sync {
    fn score(&self, job: &JobListing, prefs: &UserPreferences) -> MatchResult;

    /// Short label for logs.
    fn backend(&self) -> &'static str;
}

pub struct PreferenceScorer;

impl JobScorer for PreferenceScorer {
    fn score(&self, job: &JobListing, prefs: &UserPreferences) -> MatchResult {
        match_job(job, prefs)
    }

    fn backend(&self) -> &'static str {
        "preference"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregation
// ────────────────────────────────────────────────────────────────────────────

/// Scores every component and blends them with the user's weights. The weights
/// are used as given; no renormalization.
pub fn match_job(job: &JobListing, prefs: &UserPreferences) -> MatchResult {
    let location = location_score(job, prefs);
    let salary = salary_score(job, prefs);
    let role = role_score(job, prefs);
    let company = company_score(job, prefs);

    let overall = location * prefs.location_weight
        + salary * prefs.salary_weight
        + role * prefs.role_weight
        + company * prefs.company_weight;

    MatchResult {
        job: job.clone(),
        overall_score: round2(overall),
        location_score: round2(location),
        salary_score: round2(salary),
        role_score: round2(role),
        company_score: round2(company),
        recommendation_reason: build_reason(location, salary, role, company),
    }
}

pub(crate) fn build_reason(location: f64, salary: f64, role: f64, company: f64) -> String {
    let mut reasons = Vec::new();
    if location > 80.0 {
        reasons.push("great location match");
    }
    if salary > 80.0 {
        reasons.push("salary fits your range");
    }
    if role > 80.0 {
        reasons.push("matches your role preferences");
    }
    if company > 70.0 {
        reasons.push("good company fit");
    }

    if reasons.is_empty() {
        FALLBACK_REASON.to_string()
    } else {
        format!("Recommended because: {}", reasons.join(", "))
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
