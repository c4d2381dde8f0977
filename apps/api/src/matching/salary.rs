//! Salary scoring: parse the free-text pay string into a range and measure its
//! overlap with the user's requested range.

use std::sync::LazyLock;

use regex::Regex;
use crate::models::job::JobListing;
use crate::models::preferences::UserPreferences;

/// One or two amounts, each optionally `$`-prefixed and `k`-suffixed, with an
/// optional hyphen between them. The first match in the string wins.
static PAY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$?([0-9]+(?:,[0-9]+)?[kK]?)\s*-?\s*\$?([0-9]+(?:,[0-9]+)?[kK]?)?")
        .expect("pay pattern is a valid regex")
});

const NEUTRAL: f64 = 50.0;
const TOO_LOW: f64 = 10.0;
const TOO_HIGH_NEGOTIABLE: f64 = 40.0;
const TOO_HIGH: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

/// Extracts a salary range from text like "$80k - $120k", "100000" or
/// "$95,000". A single amount becomes a point range. Returns `None` when the
/// text carries no amount.
pub fn parse_pay(pay: &str) -> Option<SalaryRange> {
    let caps = PAY_PATTERN.captures(pay)?;
    let first = parse_amount(caps.get(1)?.as_str())?;
    let second = match caps.get(2) {
        Some(m) => parse_amount(m.as_str())?,
        None => first,
    };
    Some(SalaryRange {
        min: first.min(second),
        max: first.max(second),
    })
}

fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != '$').collect();
    let thousands = cleaned.ends_with(['k', 'K']);
    let value: f64 = cleaned.trim_end_matches(['k', 'K']).parse().ok()?;
    let value = if thousands { value * 1000.0 } else { value };
    value.is_finite().then_some(value)
}

pub fn salary_score(job: &JobListing, prefs: &UserPreferences) -> f64 {
    let Some(job_range) = parse_pay(&job.pay) else {
        return NEUTRAL;
    };

    // A zero bound means "not set".
    let user_min = prefs.min_salary.filter(|v| *v != 0.0);
    let user_max = prefs.max_salary.filter(|v| *v != 0.0);
    if user_min.is_none() && user_max.is_none() {
        return NEUTRAL;
    }
    let user_min = user_min.unwrap_or(0.0);
    let user_max = user_max.unwrap_or(f64::INFINITY);

    if job_range.max < user_min {
        return TOO_LOW;
    }
    if job_range.min > user_max {
        return if prefs.salary_negotiable {
            TOO_HIGH_NEGOTIABLE
        } else {
            TOO_HIGH
        };
    }

    let overlap = job_range.max.min(user_max) - job_range.min.max(user_min);
    let narrower = (user_max - user_min).min(job_range.max - job_range.min);
    let ratio = if narrower > 0.0 {
        overlap / narrower
    } else if overlap >= 0.0 {
        // Point range sitting inside the other range.
        1.0
    } else {
        0.0
    };
    if ratio.is_nan() {
        return NEUTRAL;
    }

    (60.0 + ratio * 40.0).clamp(0.0, 100.0)
}
