//! Heuristic classification of raw feed listings into the normalized fields
//! the job store filters on. First matching rule wins in every table.

use serde::{Deserialize, Serialize};

use crate::matching::salary::parse_pay;
use crate::models::null_as_default;
use crate::models::preferences::ExperienceLevel;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClassifyInput {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    pub description: Option<String>,
    /// Raw employment type from the feed, e.g. "FULLTIME" or "Contractor".
    pub job_type: Option<String>,
    pub remote: Option<bool>,
    pub pay: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobClassification {
    pub job_type: String,
    pub experience_level: ExperienceLevel,
    pub industry: String,
    pub company_size: String,
    pub remote: bool,
    pub hybrid: bool,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
}

const LEVEL_RULES: &[(&[&str], ExperienceLevel)] = &[
    (&["senior", "sr.", "lead"], ExperienceLevel::Senior),
    (&["junior", "jr."], ExperienceLevel::Junior),
    (&["entry", "graduate", "intern"], ExperienceLevel::Entry),
    (&["principal", "staff", "architect"], ExperienceLevel::Lead),
    (&["director", "vp", "chief"], ExperienceLevel::Executive),
];

const INDUSTRY_RULES: &[(&[&str], &str)] = &[
    (&["tech", "software", "engineer"], "Technology"),
    (&["health", "medical", "pharma"], "Healthcare"),
    (&["bank", "finance", "investment"], "Finance"),
    (&["education", "university", "school"], "Education"),
    (&["marketing", "advertising"], "Marketing"),
    (&["sales"], "Sales"),
    (&["design", "creative"], "Design"),
    (&["data", "analytics"], "Data Science"),
    (&["product", "pm"], "Product Management"),
    (&["hr", "human resources"], "Human Resources"),
    (&["operations", "ops"], "Operations"),
    (&["customer", "support"], "Customer Service"),
    (&["consulting"], "Consulting"),
    (&["media", "journalism"], "Media"),
    (&["non-profit", "nonprofit"], "Non-profit"),
    (&["government", "public"], "Government"),
];

const LARGE_EMPLOYERS: &[&str] = &[
    "google", "microsoft", "amazon", "apple", "facebook", "meta", "netflix", "uber", "airbnb",
];

pub fn classify_job(input: &ClassifyInput) -> JobClassification {
    let description = input.description.as_deref().unwrap_or("");
    let role_text = format!("{} {}", input.title, description).to_lowercase();
    let company_text = format!("{} {}", input.company, description).to_lowercase();
    let location = input.location.to_lowercase();
    let salary = input.pay.as_deref().and_then(parse_pay);

    JobClassification {
        job_type: employment_type(input.job_type.as_deref()).to_string(),
        experience_level: experience_level(&role_text),
        industry: industry(&company_text).to_string(),
        company_size: company_size(&input.company).to_string(),
        remote: input.remote.unwrap_or(false) || location.contains("remote"),
        hybrid: location.contains("hybrid"),
        salary_min: salary.map(|s| s.min),
        salary_max: salary.map(|s| s.max),
    }
}

fn employment_type(raw: Option<&str>) -> &'static str {
    let Some(raw) = raw else {
        return "Full-time";
    };
    let raw = raw.to_lowercase();
    if raw.contains("part") {
        "Part-time"
    } else if raw.contains("contract") || raw.contains("freelance") {
        "Contract"
    } else if raw.contains("intern") {
        "Internship"
    } else if raw.contains("temp") {
        "Temporary"
    } else {
        "Full-time"
    }
}

fn experience_level(text: &str) -> ExperienceLevel {
    LEVEL_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
        .map(|(_, level)| *level)
        .unwrap_or(ExperienceLevel::Mid)
}

fn industry(text: &str) -> &'static str {
    INDUSTRY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
        .map(|(_, name)| *name)
        .unwrap_or("Other")
}

fn company_size(company: &str) -> &'static str {
    let company = company.to_lowercase();
    if LARGE_EMPLOYERS.iter().any(|c| company.contains(c)) {
        "enterprise"
    } else {
        "medium"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, company: &str, location: &str) -> ClassifyInput {
        ClassifyInput {
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_employment_type_mapping() {
        assert_eq!(employment_type(None), "Full-time");
        assert_eq!(employment_type(Some("PARTTIME")), "Part-time");
        assert_eq!(employment_type(Some("Contractor")), "Contract");
        assert_eq!(employment_type(Some("Freelance")), "Contract");
        assert_eq!(employment_type(Some("INTERN")), "Internship");
        assert_eq!(employment_type(Some("Temporary")), "Temporary");
        assert_eq!(employment_type(Some("FULLTIME")), "Full-time");
    }

    #[test]
    fn test_experience_level_first_rule_wins() {
        assert_eq!(experience_level("sr. backend developer"), ExperienceLevel::Senior);
        assert_eq!(experience_level("junior analyst"), ExperienceLevel::Junior);
        assert_eq!(experience_level("graduate scheme"), ExperienceLevel::Entry);
        assert_eq!(experience_level("staff engineer"), ExperienceLevel::Lead);
        assert_eq!(experience_level("director of sales"), ExperienceLevel::Executive);
        assert_eq!(experience_level("accountant"), ExperienceLevel::Mid);
        // "lead" is checked before "principal"
        assert_eq!(experience_level("principal lead"), ExperienceLevel::Senior);
    }

    #[test]
    fn test_industry_mapping() {
        assert_eq!(industry("acme software"), "Technology");
        assert_eq!(industry("st. mary medical center"), "Healthcare");
        assert_eq!(industry("first national bank"), "Finance");
        assert_eq!(industry("zzz"), "Other");
    }

    #[test]
    fn test_company_size() {
        assert_eq!(company_size("Google LLC"), "enterprise");
        assert_eq!(company_size("Tiny Shop"), "medium");
    }

    #[test]
    fn test_classify_job_end_to_end() {
        let mut listing = input("Senior Platform Engineer", "Netflix", "Hybrid - Los Gatos, CA");
        listing.job_type = Some("FULLTIME".to_string());
        listing.pay = Some("$180k - $240k".to_string());

        let c = classify_job(&listing);
        assert_eq!(c.job_type, "Full-time");
        assert_eq!(c.experience_level, ExperienceLevel::Senior);
        assert_eq!(c.company_size, "enterprise");
        assert!(c.hybrid);
        assert!(!c.remote);
        assert_eq!(c.salary_min, Some(180_000.0));
        assert_eq!(c.salary_max, Some(240_000.0));
    }

    #[test]
    fn test_remote_flag_or_location() {
        let mut listing = input("Writer", "Globex", "Anywhere");
        assert!(!classify_job(&listing).remote);
        listing.remote = Some(true);
        assert!(classify_job(&listing).remote);
        assert!(classify_job(&input("Writer", "Globex", "Remote (EU)")).remote);
    }
}
