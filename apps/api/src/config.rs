use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Default `min_score` when a recommendation request does not set one.
    pub min_recommendation_score: f64,
    pub swipe_history_limit: usize,
    pub max_jobs_per_request: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            min_recommendation_score: 35.0,
            swipe_history_limit: 100,
            max_jobs_per_request: 500,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        Ok(Config {
            port: parse_or(&lookup, "PORT", defaults.port)?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            min_recommendation_score: parse_or(
                &lookup,
                "MIN_RECOMMENDATION_SCORE",
                defaults.min_recommendation_score,
            )?,
            swipe_history_limit: parse_or(
                &lookup,
                "SWIPE_HISTORY_LIMIT",
                defaults.swipe_history_limit,
            )?,
            max_jobs_per_request: parse_or(
                &lookup,
                "MAX_JOBS_PER_REQUEST",
                defaults.max_jobs_per_request,
            )?,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.min_recommendation_score, 35.0);
        assert_eq!(config.swipe_history_limit, 100);
        assert_eq!(config.max_jobs_per_request, 500);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "9000"),
            ("MIN_RECOMMENDATION_SCORE", "50.5"),
            ("SWIPE_HISTORY_LIMIT", " 20 "),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.min_recommendation_score, 50.5);
        assert_eq!(config.swipe_history_limit, 20);
    }

    #[test]
    fn test_invalid_value_names_the_variable() {
        let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
