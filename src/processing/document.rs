//! Resume and job posting structures

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// A resume for the duration of one matching request
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeDocument {
    pub content: String,
    pub skills: Vec<String>,
}

impl ResumeDocument {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            skills: Vec::new(),
        }
    }

    /// Attach extracted skills, dropping duplicates and blanks
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: BTreeSet<String> = skills
            .into_iter()
            .map(Into::into)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        self.skills = unique.into_iter().collect();
        self
    }

    /// Raw content followed by the skill terms
    pub fn comparison_text(&self) -> String {
        format!("{} {}", self.content, self.skills.join(" "))
    }
}

/// A job posting as handed over by the job store.
///
/// Every text field is optional. Fields the matcher does not know about,
/// including the store's identifier under `_id` or `id`, are kept in `extra`
/// and written back out under their original keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills_required: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobRecord {
    pub fn new(title: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            company: Some(company.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_skills_required(mut self, skills: impl Into<String>) -> Self {
        self.skills_required = Some(skills.into());
        self
    }

    /// Title, company, location, description and required skills, space-joined
    pub fn comparison_text(&self) -> String {
        [
            &self.title,
            &self.company,
            &self.location,
            &self.description,
            &self.skills_required,
        ]
        .iter()
        .map(|field| field.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Store identifier, `_id` first, then `id`
    pub fn id(&self) -> Option<&Value> {
        self.extra.get("_id").or_else(|| self.extra.get("id"))
    }

    /// Title and company are the identity of a posting
    pub fn has_identity(&self) -> bool {
        let present = |f: &Option<String>| f.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.title) && present(&self.company)
    }
}

/// A job record annotated with its similarity to the resume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: JobRecord,
    pub similarity: f64,
}

impl ScoredJob {
    /// Copy of `job` carrying `similarity`; a score left over from an earlier
    /// ranking is dropped so the key appears once.
    pub fn new(job: &JobRecord, similarity: f64) -> Self {
        let mut job = job.clone();
        job.extra.remove("similarity");
        Self { job, similarity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_skills_deduplicated() {
        let resume = ResumeDocument::new("Data engineer")
            .with_skills(vec!["SQL", "Python", "SQL", "  "]);
        assert_eq!(resume.skills, vec!["Python".to_string(), "SQL".to_string()]);
        assert_eq!(resume.comparison_text(), "Data engineer Python SQL");
    }

    #[test]
    fn test_job_comparison_text_with_missing_fields() {
        let job = JobRecord {
            title: Some("Backend Engineer".to_string()),
            description: Some("python sql kubernetes".to_string()),
            ..JobRecord::default()
        };
        assert_eq!(job.comparison_text(), "Backend Engineer   python sql kubernetes ");
        assert!(!job.has_identity());
    }

    #[test]
    fn test_job_record_keeps_unknown_fields() {
        let raw = r#"{"_id":{"$oid":"abc"},"title":"Dev","company":"Acme","link":"https://x.test"}"#;
        let job: JobRecord = serde_json::from_str(raw).unwrap();
        assert!(job.has_identity());
        assert_eq!(job.extra.get("link"), Some(&Value::String("https://x.test".to_string())));

        let scored = ScoredJob { job, similarity: 0.5 };
        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["similarity"], 0.5);
        assert_eq!(value["link"], "https://x.test");
        assert_eq!(value["title"], "Dev");
    }

    #[test]
    fn test_identifier_keeps_its_key() {
        let job: JobRecord = serde_json::from_str(r#"{"_id":"mongo-1","title":"Dev","company":"Acme"}"#).unwrap();
        assert_eq!(job.id(), Some(&Value::from("mongo-1")));

        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["_id"], "mongo-1");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_both_identifier_keys_load() {
        let raw = r#"{"_id":"mongo-1","id":"ext-9","title":"Dev","company":"Acme"}"#;
        let job: JobRecord = serde_json::from_str(raw).unwrap();

        assert_eq!(job.id(), Some(&Value::from("mongo-1")));
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["_id"], "mongo-1");
        assert_eq!(value["id"], "ext-9");
    }

    #[test]
    fn test_stale_similarity_replaced() {
        let raw = r#"{"_id":"a","title":"Rust Dev","company":"X","similarity":0.99}"#;
        let job: JobRecord = serde_json::from_str(raw).unwrap();

        let scored = ScoredJob::new(&job, 0.25);
        let text = serde_json::to_string(&scored).unwrap();
        assert_eq!(text.matches("\"similarity\"").count(), 1);

        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["similarity"], 0.25);
        assert_eq!(job.extra.get("similarity"), Some(&Value::from(0.99)));
    }
}
