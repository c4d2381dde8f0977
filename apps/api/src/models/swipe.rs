use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::salary::parse_pay;
use crate::models::job::JobListing;
use crate::models::null_as_default;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    /// Dismissed.
    Left,
    /// Liked.
    Right,
}

const EMPLOYMENT_TYPE_TAGS: &[&str] = &["full-time", "part-time", "contract", "freelance"];

/// A swipe enriched with the job details needed to learn from it later.
/// Doubles as the swipe-history input of the recommendation endpoint, where
/// everything except `direction` may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwipeRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_id: String,
    pub direction: SwipeDirection,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub job_company: Option<String>,
    #[serde(default)]
    pub job_location: Option<String>,
    #[serde(default)]
    pub job_salary_min: Option<f64>,
    #[serde(default)]
    pub job_salary_max: Option<f64>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_remote: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_tags: Vec<String>,
    #[serde(default)]
    pub match_score: Option<f64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl SwipeRecord {
    pub fn from_job(
        job: &JobListing,
        direction: SwipeDirection,
        match_score: Option<f64>,
        at: DateTime<Utc>,
    ) -> Self {
        let salary = parse_pay(&job.pay);

        let job_type = job
            .tags
            .iter()
            .find(|tag| {
                let tag = tag.to_lowercase();
                EMPLOYMENT_TYPE_TAGS.contains(&tag.as_str())
            })
            .cloned();

        let job_remote = job.location.to_lowercase().contains("remote")
            || job.tags.iter().any(|t| t.to_lowercase().contains("remote"));

        Self {
            job_id: job.id.clone(),
            direction,
            job_title: Some(job.title.clone()),
            job_company: Some(job.company.clone()),
            job_location: Some(job.location.clone()),
            job_salary_min: salary.map(|s| s.min),
            job_salary_max: salary.map(|s| s.max),
            job_type,
            job_remote,
            job_tags: job.tags.clone(),
            match_score,
            created_at: Some(at),
        }
    }
}
