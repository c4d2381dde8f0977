use crate::models::job::JobListing;
use crate::models::preferences::UserPreferences;

const STARTUP_MARKERS: &[&str] = &["startup", "labs"];
const LARGE_MARKERS: &[&str] = &["corp", "inc", "ltd", "llc"];

/// Company-size fit inferred from the employer name alone. Starts at 50.
pub fn company_score(job: &JobListing, prefs: &UserPreferences) -> f64 {
    let name = job.company.to_lowercase();
    let wants = |size: &str| {
        prefs
            .preferred_company_sizes
            .iter()
            .any(|s| s.trim().eq_ignore_ascii_case(size))
    };

    let mut score = 50.0;
    if wants("startup") && STARTUP_MARKERS.iter().any(|m| name.contains(m)) {
        score += 30.0;
    }
    if wants("large") && LARGE_MARKERS.iter().any(|m| name.contains(m)) {
        score += 20.0;
    }
    f64::min(score, 100.0)
}
