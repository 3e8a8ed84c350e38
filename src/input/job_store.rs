//! Job store collaborator: supplies the finite pool that gets ranked

use crate::error::{JobMatcherError, Result};
use crate::processing::document::JobRecord;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Filter and bound for a pool fetch
#[derive(Debug, Clone, PartialEq)]
pub struct JobQuery {
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub limit: usize,
}

impl Default for JobQuery {
    fn default() -> Self {
        Self {
            keyword: None,
            location: None,
            limit: 100,
        }
    }
}

impl JobQuery {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Case-insensitive substring checks; the keyword looks at title,
    /// description and required skills, the location at the location field
    pub fn matches(&self, job: &JobRecord) -> bool {
        let contains = |field: &Option<String>, needle: &str| {
            field
                .as_deref()
                .is_some_and(|value| value.to_lowercase().contains(needle))
        };

        let keyword_ok = match &self.keyword {
            Some(k) => {
                let k = k.to_lowercase();
                contains(&job.title, &k) || contains(&job.description, &k) || contains(&job.skills_required, &k)
            }
            None => true,
        };
        let location_ok = match &self.location {
            Some(l) => contains(&job.location, &l.to_lowercase()),
            None => true,
        };

        keyword_ok && location_ok
    }

    fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(JobMatcherError::InvalidArgument(
                "job query limit must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }
}

pub trait JobStore {
    fn fetch_jobs(&self, query: &JobQuery) -> Result<Vec<JobRecord>>;
}

/// Apply the query to a pool in store order
fn select(jobs: &[JobRecord], query: &JobQuery) -> Result<Vec<JobRecord>> {
    query.validate()?;
    Ok(jobs
        .iter()
        .filter(|job| query.matches(job))
        .take(query.limit)
        .cloned()
        .collect())
}

/// Drop records without a title and company, as the import side does
fn keep_identified(jobs: Vec<JobRecord>, source: &str) -> Vec<JobRecord> {
    let total = jobs.len();
    let kept: Vec<JobRecord> = jobs.into_iter().filter(JobRecord::has_identity).collect();
    if kept.len() < total {
        warn!(
            "Skipped {} job records without title/company from {}",
            total - kept.len(),
            source
        );
    }
    kept
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryJobStore {
    jobs: Vec<JobRecord>,
}

impl InMemoryJobStore {
    pub fn new(jobs: Vec<JobRecord>) -> Self {
        Self {
            jobs: keep_identified(jobs, "memory"),
        }
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl JobStore for InMemoryJobStore {
    fn fetch_jobs(&self, query: &JobQuery) -> Result<Vec<JobRecord>> {
        select(&self.jobs, query)
    }
}

/// Reads a JSON array of job records on every fetch
#[derive(Debug, Clone)]
pub struct JsonFileJobStore {
    path: PathBuf,
}

impl JsonFileJobStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl JobStore for JsonFileJobStore {
    fn fetch_jobs(&self, query: &JobQuery) -> Result<Vec<JobRecord>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            JobMatcherError::JobStore(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        let jobs: Vec<JobRecord> = serde_json::from_str(&content)?;
        let jobs = keep_identified(jobs, &self.path.display().to_string());

        let selected = select(&jobs, query)?;
        info!(
            "Fetched {} of {} jobs from {}",
            selected.len(),
            jobs.len(),
            self.path.display()
        );
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn pool() -> Vec<JobRecord> {
        vec![
            JobRecord::new("Data Scientist", "Acme").with_location("Pune, India"),
            JobRecord::new("Backend Engineer", "Initech")
                .with_location("Berlin")
                .with_skills_required("Rust, Postgres"),
            JobRecord {
                title: Some("Orphan".to_string()),
                ..JobRecord::default()
            },
            JobRecord::new("Rust Developer", "Globex").with_location("India"),
        ]
    }

    #[test]
    fn test_unidentified_records_dropped() {
        let store = InMemoryJobStore::new(pool());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_keyword_and_location_filters() {
        let store = InMemoryJobStore::new(pool());

        let rust = store.fetch_jobs(&JobQuery::default().keyword("RUST")).unwrap();
        assert_eq!(rust.len(), 2);
        assert_eq!(rust[0].title.as_deref(), Some("Backend Engineer"));

        let india = store.fetch_jobs(&JobQuery::default().keyword("rust").location("india")).unwrap();
        assert_eq!(india.len(), 1);
        assert_eq!(india[0].company.as_deref(), Some("Globex"));
    }

    #[test]
    fn test_limit_bounds_pool() {
        let store = InMemoryJobStore::new(pool());
        assert_eq!(store.fetch_jobs(&JobQuery::with_limit(2)).unwrap().len(), 2);
        assert!(matches!(
            store.fetch_jobs(&JobQuery::with_limit(0)),
            Err(JobMatcherError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_json_file_store() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title":"Dev","company":"Acme","description":"python"}},{{"company":"NoTitle"}}]"#
        )
        .unwrap();

        let store = JsonFileJobStore::new(file.path());
        let jobs = store.fetch_jobs(&JobQuery::default()).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].description.as_deref(), Some("python"));
    }

    #[test]
    fn test_json_file_with_both_identifier_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"_id":"m-1","id":7,"title":"Dev","company":"Acme"}},{{"id":8,"title":"Ops","company":"Acme"}}]"#
        )
        .unwrap();

        let store = JsonFileJobStore::new(file.path());
        let jobs = store.fetch_jobs(&JobQuery::default()).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].id(), Some(&serde_json::json!("m-1")));
        assert_eq!(jobs[0].extra.get("id"), Some(&serde_json::json!(7)));
        assert_eq!(jobs[1].id(), Some(&serde_json::json!(8)));
    }

    #[test]
    fn test_missing_file_is_store_error() {
        let store = JsonFileJobStore::new("/nonexistent/jobs.json");
        assert!(matches!(
            store.fetch_jobs(&JobQuery::default()),
            Err(JobMatcherError::JobStore(_))
        ));
    }
}
