use serde::{Deserialize, Serialize};

use crate::models::null_as_default;

/// A job listing as delivered by the feeds. Every field is free text and may be
/// missing or null; either way it deserializes to an empty value so scoring
/// never has to special-case it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobListing {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pay: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let job: JobListing = serde_json::from_str(r#"{"title": "Backend Engineer"}"#).unwrap();
        assert_eq!(job.title, "Backend Engineer");
        assert!(job.company.is_empty());
        assert!(job.location.is_empty());
        assert!(job.pay.is_empty());
        assert!(job.tags.is_empty());
    }

    #[test]
    fn test_null_fields_default_to_empty() {
        let job: JobListing = serde_json::from_str(
            r#"{"id": null, "title": "Backend Engineer", "company": null,
                "location": null, "pay": null, "tags": null}"#,
        )
        .unwrap();
        assert_eq!(job.title, "Backend Engineer");
        assert!(job.id.is_empty());
        assert!(job.company.is_empty());
        assert!(job.location.is_empty());
        assert!(job.pay.is_empty());
        assert!(job.tags.is_empty());
    }
}
