//! Location scoring: remote detection, then fuzzy matching of the listing's
//! free-text location against each preferred location.

use crate::matching::text::{contains_either, split_words};
use crate::models::job::JobListing;
use crate::models::preferences::{RemoteWorkPreference, UserPreferences};

const REMOTE_MARKERS: &[&str] = &["remote", "work from home", "wfh", "anywhere"];

const TIER_SUBSTRING: f64 = 95.0;
const TIER_CITY: f64 = 85.0;
const TIER_WORD_OVERLAP: f64 = 70.0;
const TIER_REGION: f64 = 65.0;

const NO_MATCH_RELOCATE: f64 = 55.0;
const NO_MATCH_STAY: f64 = 25.0;

/// True when the location or any tag mentions remote work.
pub fn is_remote(job: &JobListing) -> bool {
    let has_marker = |text: &str| {
        let text = text.to_lowercase();
        REMOTE_MARKERS.iter().any(|m| text.contains(m))
    };
    has_marker(job.location.as_str()) || job.tags.iter().any(|t| has_marker(t.as_str()))
}

pub fn location_score(job: &JobListing, prefs: &UserPreferences) -> f64 {
    if is_remote(job) {
        return match prefs.remote_work_preference {
            RemoteWorkPreference::Required => 100.0,
            RemoteWorkPreference::Preferred => 95.0,
            RemoteWorkPreference::Acceptable => 75.0,
            RemoteWorkPreference::NotPreferred => 35.0,
        };
    }

    let job_location = job.location.to_lowercase();
    let best_tier = prefs
        .preferred_locations
        .iter()
        .filter_map(|pref| match_tier(&job_location, &pref.to_lowercase()))
        .fold(None, |best: Option<f64>, tier| {
            Some(best.map_or(tier, |b| b.max(tier)))
        });

    let mut score = match best_tier {
        Some(tier) => tier,
        None if prefs.willing_to_relocate => NO_MATCH_RELOCATE,
        None => NO_MATCH_STAY,
    };

    // On-site listing against a remote-leaning user.
    score = match prefs.remote_work_preference {
        RemoteWorkPreference::Required => (score - 50.0).max(0.0),
        RemoteWorkPreference::Preferred => (score - 20.0).max(0.0),
        _ => score,
    };

    score.clamp(0.0, 100.0)
}

/// Tier for a single preferred location, checked in order; the first rule
/// that applies decides. Both inputs are lower-cased.
fn match_tier(job_location: &str, preferred: &str) -> Option<f64> {
    let job_location = job_location.trim();
    let preferred = preferred.trim();
    if job_location.is_empty() || preferred.is_empty() {
        return None;
    }

    if contains_either(job_location, preferred) {
        return Some(TIER_SUBSTRING);
    }

    let job_city = first_segment(job_location);
    if !job_city.is_empty() && job_city == first_segment(preferred) {
        return Some(TIER_CITY);
    }

    let region = last_segment(preferred);
    if !region.is_empty() && job_location.contains(region) {
        return Some(TIER_REGION);
    }

    let is_sep = |c: char| c.is_whitespace() || c == ',';
    let job_words = split_words(job_location, is_sep);
    let pref_words = split_words(preferred, is_sep);
    if pref_words.is_empty() {
        return None;
    }
    let matching = job_words
        .iter()
        .filter(|word| {
            pref_words
                .iter()
                .any(|pref_word| word.contains(pref_word) || pref_word.contains(*word))
        })
        .count();
    if matching >= pref_words.len().min(2) {
        return Some(TIER_WORD_OVERLAP);
    }

    None
}

fn first_segment(location: &str) -> &str {
    location.split(',').next().unwrap_or("").trim()
}

fn last_segment(location: &str) -> &str {
    location.rsplit(',').next().unwrap_or("").trim()
}
