//! Personalized ranking: score a batch, learn from swipes, filter, sort.

use serde::Serialize;
use tracing::info;

use crate::matching::learning::{apply_swipe_learning, recent_swipes};
use crate::matching::scorer::{JobScorer, MatchResult};
use crate::models::job::JobListing;
use crate::models::preferences::UserPreferences;
use crate::models::swipe::SwipeRecord;

pub const VERSION_DEFAULT: &str = "v1.1-default";
pub const VERSION_ENHANCED: &str = "v1.1-enhanced";

pub const INCOMPLETE_PREFERENCES_REASON: &str =
    "Complete your job preferences for personalized recommendations";

const NEUTRAL: f64 = 50.0;

#[derive(Debug, Clone, Copy)]
pub struct RankingOptions {
    /// Results below this overall score are dropped.
    pub min_score: f64,
    pub swipe_history_limit: usize,
    pub limit: Option<usize>,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            min_score: 35.0,
            swipe_history_limit: 100,
            limit: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JobMatchingResult {
    pub recommendations: Vec<MatchResult>,
    pub total_jobs_analyzed: usize,
    pub filtered_jobs_count: usize,
    pub algorithm_version: String,
}

/// Ranks `jobs` for one user.
///
/// Without preferences every job comes back unfiltered with neutral scores.
/// Otherwise: score → swipe learning (if enabled) → min-score filter →
/// stable sort by overall score, highest first → optional truncation.
pub fn recommend(
    scorer: &dyn JobScorer,
    jobs: Vec<JobListing>,
    prefs: Option<&UserPreferences>,
    swipe_history: &[SwipeRecord],
    options: &RankingOptions,
) -> JobMatchingResult {
    let total_jobs_analyzed = jobs.len();

    let Some(prefs) = prefs else {
        info!(total_jobs_analyzed, "No preferences supplied; returning neutral scores");
        let recommendations: Vec<MatchResult> = jobs.into_iter().map(neutral_result).collect();
        return JobMatchingResult {
            filtered_jobs_count: recommendations.len(),
            recommendations,
            total_jobs_analyzed,
            algorithm_version: VERSION_DEFAULT.to_string(),
        };
    };

    let mut scored: Vec<MatchResult> = jobs.iter().map(|job| scorer.score(job, prefs)).collect();

    if prefs.auto_learn_from_swipes && !swipe_history.is_empty() {
        let recent = recent_swipes(swipe_history, options.swipe_history_limit);
        scored = apply_swipe_learning(scored, &recent);
    }

    let mut recommendations: Vec<MatchResult> = scored
        .into_iter()
        .filter(|r| r.overall_score >= options.min_score)
        .collect();
    recommendations.sort_by(|a, b| b.overall_score.total_cmp(&a.overall_score));
    if let Some(limit) = options.limit {
        recommendations.truncate(limit);
    }

    info!(
        backend = scorer.backend(),
        total_jobs_analyzed,
        kept = recommendations.len(),
        min_score = options.min_score,
        "Generated recommendations"
    );

    JobMatchingResult {
        filtered_jobs_count: recommendations.len(),
        recommendations,
        total_jobs_analyzed,
        algorithm_version: VERSION_ENHANCED.to_string(),
    }
}

fn neutral_result(job: JobListing) -> MatchResult {
    MatchResult {
        job,
        overall_score: NEUTRAL,
        location_score: NEUTRAL,
        salary_score: NEUTRAL,
        role_score: NEUTRAL,
        company_score: NEUTRAL,
        recommendation_reason: INCOMPLETE_PREFERENCES_REASON.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::learning::ADJUSTED_SUFFIX;
    use crate::matching::scorer::PreferenceScorer;
    use crate::models::preferences::RemoteWorkPreference;
    use crate::models::swipe::SwipeDirection;

    fn job(id: &str, title: &str, location: &str) -> JobListing {
        JobListing {
            id: id.to_string(),
            title: title.to_string(),
            company: format!("{id} co"),
            location: location.to_string(),
            ..Default::default()
        }
    }

    fn prefs() -> UserPreferences {
        UserPreferences {
            preferred_roles: vec!["Rust Engineer".to_string()],
            preferred_locations: vec!["Berlin".to_string()],
            remote_work_preference: RemoteWorkPreference::Acceptable,
            auto_learn_from_swipes: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_without_preferences_everything_is_neutral() {
        let jobs = vec![job("a", "Chef", "Paris"), job("b", "Pilot", "Oslo")];
        let result = recommend(&PreferenceScorer, jobs, None, &[], &RankingOptions::default());
        assert_eq!(result.algorithm_version, VERSION_DEFAULT);
        assert_eq!(result.total_jobs_analyzed, 2);
        assert_eq!(result.filtered_jobs_count, 2);
        for rec in &result.recommendations {
            assert_eq!(rec.overall_score, 50.0);
            assert_eq!(rec.role_score, 50.0);
            assert_eq!(rec.recommendation_reason, INCOMPLETE_PREFERENCES_REASON);
        }
    }

    #[test]
    fn test_sorted_descending_and_filtered() {
        let jobs = vec![
            job("low", "Chef", "Paris"),
            job("mid", "Backend Engineer", "Berlin"),
            job("top", "Rust Engineer", "Berlin, Germany"),
        ];
        let p = prefs();
        let options = RankingOptions {
            min_score: 40.0,
            ..Default::default()
        };
        let result = recommend(&PreferenceScorer, jobs, Some(&p), &[], &options);

        assert_eq!(result.algorithm_version, VERSION_ENHANCED);
        assert_eq!(result.total_jobs_analyzed, 3);
        let ids: Vec<&str> = result.recommendations.iter().map(|r| r.job.id.as_str()).collect();
        assert_eq!(ids, vec!["top", "mid"]);
        assert_eq!(result.filtered_jobs_count, 2);
        assert!(result
            .recommendations
            .windows(2)
            .all(|w| w[0].overall_score >= w[1].overall_score));
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let jobs = vec![
            job("first", "Chef", "Paris"),
            job("second", "Chef", "Paris"),
            job("third", "Chef", "Paris"),
        ];
        let options = RankingOptions {
            min_score: 0.0,
            ..Default::default()
        };
        let result = recommend(&PreferenceScorer, jobs, Some(&prefs()), &[], &options);
        let ids: Vec<&str> = result.recommendations.iter().map(|r| r.job.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_limit_truncates_after_sorting() {
        let jobs = vec![
            job("low", "Chef", "Paris"),
            job("top", "Rust Engineer", "Berlin"),
        ];
        let options = RankingOptions {
            min_score: 0.0,
            limit: Some(1),
            ..Default::default()
        };
        let result = recommend(&PreferenceScorer, jobs, Some(&prefs()), &[], &options);
        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.recommendations[0].job.id, "top");
        assert_eq!(result.filtered_jobs_count, 1);
    }

    #[test]
    fn test_swipe_learning_can_reorder() {
        let jobs = vec![job("a", "Chef", "Paris"), job("b", "Chef", "Paris")];
        let liked = SwipeRecord::from_job(
            &jobs[1],
            SwipeDirection::Right,
            None,
            chrono::Utc::now(),
        );
        let options = RankingOptions {
            min_score: 0.0,
            ..Default::default()
        };
        let result = recommend(&PreferenceScorer, jobs, Some(&prefs()), &[liked], &options);
        assert_eq!(result.recommendations[0].job.id, "b");
        assert!(result.recommendations[0]
            .recommendation_reason
            .ends_with(ADJUSTED_SUFFIX));
    }

    #[test]
    fn test_swipe_learning_respects_opt_out() {
        let jobs = vec![job("a", "Chef", "Paris"), job("b", "Chef", "Paris")];
        let liked = SwipeRecord::from_job(
            &jobs[1],
            SwipeDirection::Right,
            None,
            chrono::Utc::now(),
        );
        let p = UserPreferences {
            auto_learn_from_swipes: false,
            ..prefs()
        };
        let options = RankingOptions {
            min_score: 0.0,
            ..Default::default()
        };
        let result = recommend(&PreferenceScorer, jobs, Some(&p), &[liked], &options);
        assert_eq!(result.recommendations[0].job.id, "a");
        assert_eq!(
            result.recommendations[0].overall_score,
            result.recommendations[1].overall_score
        );
    }
}
