//! Swipe learning: nudges overall scores toward companies, locations, and tags
//! the user liked before and away from ones they dismissed.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use tracing::debug;

use crate::matching::scorer::{round2, MatchResult};
use crate::models::swipe::{SwipeDirection, SwipeRecord};

const LIKED_COMPANY: f64 = 10.0;
const LIKED_LOCATION: f64 = 8.0;
const LIKED_TAG: f64 = 5.0;
const DISLIKED_COMPANY: f64 = -15.0;
const DISLIKED_LOCATION: f64 = -10.0;

pub const ADJUSTED_SUFFIX: &str = " (adjusted based on your preferences)";

/// Lower-cased signals extracted from swipe history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LearningAdjustments {
    pub preferred_companies: BTreeSet<String>,
    pub preferred_locations: BTreeSet<String>,
    pub preferred_tags: BTreeSet<String>,
    pub disliked_companies: BTreeSet<String>,
    pub disliked_locations: BTreeSet<String>,
}

impl LearningAdjustments {
    pub fn from_history(history: &[SwipeRecord]) -> Self {
        let mut adjustments = Self::default();
        for swipe in history {
            let company = normalized(swipe.job_company.as_deref());
            let location = normalized(swipe.job_location.as_deref());
            match swipe.direction {
                SwipeDirection::Right => {
                    adjustments.preferred_companies.extend(company);
                    adjustments.preferred_locations.extend(location);
                    let tags = swipe.job_tags.iter().map(String::as_str);
                    adjustments
                        .preferred_tags
                        .extend(tags.filter_map(|t| normalized(Some(t))));
                }
                SwipeDirection::Left => {
                    adjustments.disliked_companies.extend(company);
                    adjustments.disliked_locations.extend(location);
                }
            }
        }
        adjustments
    }

    /// Net score change for one result.
    pub fn delta_for(&self, result: &MatchResult) -> f64 {
        let company = result.job.company.trim().to_lowercase();
        let location = result.job.location.trim().to_lowercase();
        let tags: Vec<String> = result.job.tags.iter().map(|t| t.to_lowercase()).collect();

        let mut delta = 0.0;
        if self.preferred_companies.contains(&company) {
            delta += LIKED_COMPANY;
        }
        if self.preferred_locations.iter().any(|l| location.contains(l.as_str())) {
            delta += LIKED_LOCATION;
        }
        if self
            .preferred_tags
            .iter()
            .any(|pt| tags.iter().any(|t| t.contains(pt.as_str())))
        {
            delta += LIKED_TAG;
        }
        if self.disliked_companies.contains(&company) {
            delta += DISLIKED_COMPANY;
        }
        if self.disliked_locations.iter().any(|l| location.contains(l.as_str())) {
            delta += DISLIKED_LOCATION;
        }
        delta
    }
}

fn normalized(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}

/// The `limit` most recent swipes, newest first. Undated swipes sort last and
/// keep their relative order.
pub fn recent_swipes(history: &[SwipeRecord], limit: usize) -> Vec<SwipeRecord> {
    let mut recent = history.to_vec();
    recent.sort_by_key(|s| Reverse(s.created_at));
    recent.truncate(limit);
    recent
}

/// Applies learned adjustments. Without any liked swipe there is nothing to
/// learn from and the results come back untouched.
pub fn apply_swipe_learning(results: Vec<MatchResult>, history: &[SwipeRecord]) -> Vec<MatchResult> {
    if !history.iter().any(|s| s.direction == SwipeDirection::Right) {
        return results;
    }

    let adjustments = LearningAdjustments::from_history(history);
    debug!(
        liked_companies = adjustments.preferred_companies.len(),
        liked_tags = adjustments.preferred_tags.len(),
        disliked_companies = adjustments.disliked_companies.len(),
        "Applying swipe learning"
    );

    results
        .into_iter()
        .map(|mut result| {
            let delta = adjustments.delta_for(&result);
            if delta != 0.0 {
                result.overall_score = round2((result.overall_score + delta).clamp(0.0, 100.0));
                result.recommendation_reason.push_str(ADJUSTED_SUFFIX);
            }
            result
        })
        .collect()
}
