//! Axum route handlers for the recommendation API.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::classify::{classify_job, ClassifyInput, JobClassification};
use crate::matching::ranking::{recommend, JobMatchingResult, RankingOptions};
use crate::matching::scorer::MatchResult;
use crate::models::job::JobListing;
use crate::models::preferences::UserPreferences;
use crate::models::swipe::{SwipeDirection, SwipeRecord};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub job: JobListing,
    pub preferences: UserPreferences,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub user_id: Option<Uuid>,
    pub preferences: Option<UserPreferences>,
    pub jobs: Vec<JobListing>,
    #[serde(default)]
    pub swipe_history: Vec<SwipeRecord>,
    pub min_score: Option<f64>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SwipeRequest {
    pub job: JobListing,
    pub direction: SwipeDirection,
    pub match_score: Option<f64>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/preferences/default
///
/// Preferences a new user starts with.
pub async fn handle_default_preferences() -> Json<UserPreferences> {
    Json(UserPreferences::default())
}

/// POST /api/v1/recommendations/score
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<MatchResult>, AppError> {
    request.preferences.validate()?;
    Ok(Json(state.scorer.score(&request.job, &request.preferences)))
}

/// POST /api/v1/recommendations
///
/// Scores, learns from the supplied swipe history, filters and ranks a batch
/// of listings for one user.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<JobMatchingResult>, AppError> {
    let max_jobs = state.config.max_jobs_per_request;
    if request.jobs.len() > max_jobs {
        return Err(AppError::Validation(format!(
            "at most {max_jobs} jobs per request, got {}",
            request.jobs.len()
        )));
    }
    if let Some(prefs) = &request.preferences {
        prefs.validate()?;
    }

    let user_id = request
        .user_id
        .or_else(|| request.preferences.as_ref().and_then(|p| p.user_id));
    info!(?user_id, jobs = request.jobs.len(), "Recommendation request");

    let options = RankingOptions {
        min_score: request.min_score.unwrap_or(state.config.min_recommendation_score),
        swipe_history_limit: state.config.swipe_history_limit,
        limit: request.limit,
    };

    let result = recommend(
        state.scorer.as_ref(),
        request.jobs,
        request.preferences.as_ref(),
        &request.swipe_history,
        &options,
    );
    Ok(Json(result))
}

/// POST /api/v1/swipes
///
/// Returns the enriched swipe record for the caller to store.
pub async fn handle_swipe(Json(request): Json<SwipeRequest>) -> Json<SwipeRecord> {
    Json(SwipeRecord::from_job(
        &request.job,
        request.direction,
        request.match_score,
        Utc::now(),
    ))
}

/// POST /api/v1/jobs/classify
pub async fn handle_classify(Json(request): Json<ClassifyInput>) -> Json<JobClassification> {
    Json(classify_job(&request))
}
