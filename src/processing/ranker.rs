//! Ranks a job pool by lexical similarity to a resume

use crate::config::StopWordList;
use crate::error::{JobMatcherError, Result};
use crate::processing::document::{JobRecord, ResumeDocument, ScoredJob};
use crate::processing::text_processor::TextProcessor;
use crate::processing::vectorizer::TfIdfVectorizer;
use log::debug;

/// Stateless between calls: holds only the stop-word configuration, so a
/// single ranker can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct RelevanceRanker {
    processor: TextProcessor,
}

impl RelevanceRanker {
    pub fn new(stop_words: &StopWordList) -> Self {
        Self {
            processor: TextProcessor::new(stop_words),
        }
    }

    /// Rank `jobs` against the resume and return at most `top_n` scored copies,
    /// best first. Equal scores keep their pool order.
    pub fn rank(&self, resume: &ResumeDocument, jobs: &[JobRecord], top_n: usize) -> Result<Vec<ScoredJob>> {
        if top_n == 0 {
            return Err(JobMatcherError::InvalidArgument(
                "top_n must be a positive integer".to_string(),
            ));
        }
        if jobs.is_empty() {
            return Ok(Vec::new());
        }

        let mut documents = Vec::with_capacity(jobs.len() + 1);
        documents.push(self.processor.normalize(Some(&resume.comparison_text())));
        documents.extend(
            jobs.iter()
                .map(|job| self.processor.normalize(Some(&job.comparison_text()))),
        );

        let matrix = TfIdfVectorizer::new(&self.processor).fit_transform(&documents);
        debug!(
            "Vectorized {} documents over {} terms",
            matrix.document_count(),
            matrix.vocabulary_size()
        );

        let mut scored: Vec<ScoredJob> = jobs
            .iter()
            .enumerate()
            .map(|(i, job)| ScoredJob::new(job, matrix.dot(0, i + 1).clamp(0.0, 1.0)))
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        scored.truncate(top_n);

        Ok(scored)
    }

    /// Convenience form taking raw resume text and an optional skill list
    pub fn rank_text(
        &self,
        resume_text: &str,
        skills: Option<&[String]>,
        jobs: &[JobRecord],
        top_n: usize,
    ) -> Result<Vec<ScoredJob>> {
        let resume = ResumeDocument::new(resume_text)
            .with_skills(skills.unwrap_or_default().iter().cloned());
        self.rank(&resume, jobs, top_n)
    }
}
