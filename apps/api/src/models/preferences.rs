use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::null_as_default;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteWorkPreference {
    Required,
    #[default]
    Preferred,
    Acceptable,
    NotPreferred,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    Junior,
    #[default]
    Mid,
    Senior,
    Lead,
    Executive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkSchedule {
    #[default]
    Flexible,
    Standard,
    ShiftWork,
    WeekendsOk,
}

/// A user's job-search preferences. Fields missing from a request take the
/// new-user defaults from `Default`; a null list reads as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub user_id: Option<Uuid>,

    #[serde(deserialize_with = "null_as_default")]
    pub preferred_locations: Vec<String>,
    /// Informational only; the location scorer does not use it.
    pub max_commute_distance: f64,
    pub remote_work_preference: RemoteWorkPreference,
    pub willing_to_relocate: bool,

    #[serde(deserialize_with = "null_as_default")]
    pub preferred_job_types: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub preferred_industries: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub preferred_company_sizes: Vec<String>,

    pub experience_level: ExperienceLevel,
    #[serde(deserialize_with = "null_as_default")]
    pub preferred_roles: Vec<String>,

    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub salary_currency: String,
    pub salary_negotiable: bool,

    pub preferred_schedule: WorkSchedule,

    /// Component weights. Expected to sum to ~1.0; never renormalized.
    pub location_weight: f64,
    pub salary_weight: f64,
    pub role_weight: f64,
    pub company_weight: f64,

    pub auto_learn_from_swipes: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            user_id: None,
            preferred_locations: vec![],
            max_commute_distance: 50.0,
            remote_work_preference: RemoteWorkPreference::Preferred,
            willing_to_relocate: false,
            preferred_job_types: vec!["Full-time".to_string()],
            preferred_industries: vec![],
            preferred_company_sizes: vec![],
            experience_level: ExperienceLevel::Mid,
            preferred_roles: vec![],
            min_salary: None,
            max_salary: None,
            salary_currency: "USD".to_string(),
            salary_negotiable: true,
            preferred_schedule: WorkSchedule::Flexible,
            location_weight: 0.25,
            salary_weight: 0.30,
            role_weight: 0.25,
            company_weight: 0.20,
            auto_learn_from_swipes: true,
        }
    }
}

const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

impl UserPreferences {
    pub fn weight_sum(&self) -> f64 {
        self.location_weight + self.salary_weight + self.role_weight + self.company_weight
    }

    /// Checks the record at the API boundary. The scorer itself accepts anything.
    pub fn validate(&self) -> Result<(), AppError> {
        let weights = [
            ("location_weight", self.location_weight),
            ("salary_weight", self.salary_weight),
            ("role_weight", self.role_weight),
            ("company_weight", self.company_weight),
        ];
        for (name, value) in weights {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(AppError::Validation(format!(
                    "{name} must be between 0 and 1, got {value}"
                )));
            }
        }

        for (name, bound) in [("min_salary", self.min_salary), ("max_salary", self.max_salary)] {
            if let Some(v) = bound {
                if !v.is_finite() || v < 0.0 {
                    return Err(AppError::Validation(format!(
                        "{name} must be a non-negative number"
                    )));
                }
            }
        }

        if let (Some(min), Some(max)) = (self.min_salary, self.max_salary) {
            if min > max {
                return Err(AppError::Validation(format!(
                    "min_salary ({min}) exceeds max_salary ({max})"
                )));
            }
        }

        let sum = self.weight_sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            tracing::warn!(
                weight_sum = sum,
                "Preference weights do not sum to 1.0; overall scores may leave the 0-100 range"
            );
        }

        Ok(())
    }
}
