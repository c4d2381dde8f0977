//! Role scoring: fuzzy title matching against preferred roles, tag relevance,
//! and seniority keywords. Contributions add up and are capped at 100.

use crate::matching::text::{contains_either, lowered, split_words};
use crate::models::job::JobListing;
use crate::models::preferences::{ExperienceLevel, UserPreferences};

const TIER_FULL_TITLE: f64 = 90.0;
const TAG_POINTS: f64 = 8.0;
const TAG_CAP: f64 = 25.0;
const LEVEL_BONUS: f64 = 15.0;
const BASE: f64 = 5.0;

const ABBREVIATIONS: &[(&str, &str)] = &[
    ("dev", "developer"),
    ("eng", "engineer"),
    ("mgr", "manager"),
];

/// Title and tag keywords that signal each experience level.
pub fn level_keywords(level: ExperienceLevel) -> &'static [&'static str] {
    match level {
        ExperienceLevel::Entry => &[
            "entry", "junior", "associate", "trainee", "graduate", "intern",
        ],
        ExperienceLevel::Junior => &["junior", "associate", "entry", "1-2 years", "early career"],
        ExperienceLevel::Mid => &["mid", "intermediate", "experienced", "3-5 years", "regular"],
        ExperienceLevel::Senior => &[
            "senior", "lead", "principal", "expert", "5+ years", "advanced",
        ],
        ExperienceLevel::Lead => &["lead", "principal", "staff", "architect", "head", "chief"],
        ExperienceLevel::Executive => &["director", "vp", "cto", "ceo", "executive", "head of"],
    }
}

pub fn role_score(job: &JobListing, prefs: &UserPreferences) -> f64 {
    let title = job.title.to_lowercase();
    let tags = lowered(&job.tags);

    let mut score = best_title_match(&title, &prefs.preferred_roles);
    score += tag_relevance(&tags, prefs);
    if has_level_signal(&title, &tags, prefs.experience_level) {
        score += LEVEL_BONUS;
    }
    score += BASE;

    score.clamp(0.0, 100.0)
}

fn tokenize(s: &str) -> Vec<&str> {
    split_words(s, |c| c.is_whitespace() || c == '-' || c == '_')
}

fn tokens_match(title_word: &str, role_word: &str) -> bool {
    title_word.contains(role_word)
        || role_word.contains(title_word)
        || ABBREVIATIONS.iter().any(|(short, long)| {
            (title_word == *short && role_word == *long)
                || (title_word == *long && role_word == *short)
        })
}

/// Best tier over all preferred roles; 0 when none match.
fn best_title_match(title: &str, roles: &[String]) -> f64 {
    let title_words = tokenize(title);
    let mut best = 0.0_f64;

    for role in lowered(roles) {
        if contains_either(title, &role) {
            best = best.max(TIER_FULL_TITLE);
            continue;
        }

        let role_words = tokenize(&role);
        let matched = title_words
            .iter()
            .filter(|word| role_words.iter().any(|rw| tokens_match(word, rw)))
            .count();

        if matched > 0 {
            let ratio = matched as f64 / title_words.len().max(role_words.len()) as f64;
            best = best.max(40.0 + ratio * 40.0);
        }
    }

    best
}

fn tag_relevance(tags: &[String], prefs: &UserPreferences) -> f64 {
    let interests: Vec<String> = lowered(&prefs.preferred_roles)
        .into_iter()
        .chain(lowered(&prefs.preferred_industries))
        .collect();

    let relevant = tags
        .iter()
        .filter(|tag| interests.iter().any(|i| contains_either(tag, i)))
        .count();

    (relevant as f64 * TAG_POINTS).min(TAG_CAP)
}

fn has_level_signal(title: &str, tags: &[String], level: ExperienceLevel) -> bool {
    level_keywords(level)
        .iter()
        .any(|kw| title.contains(kw) || tags.iter().any(|t| t.contains(kw)))
}
