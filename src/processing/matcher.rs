//! End-to-end matching: skills, pool fetch, ranking

use crate::config::MatchingConfig;
use crate::error::Result;
use crate::input::job_store::{JobQuery, JobStore};
use crate::processing::document::{ResumeDocument, ScoredJob};
use crate::processing::ranker::RelevanceRanker;
use crate::processing::resume_parser::ResumeParser;
use log::info;
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub matches: Vec<ScoredJob>,
    pub pool_size: usize,
    pub skills: Vec<String>,
    pub top_n: usize,
    pub processing_time_ms: u64,
}

pub struct JobMatcher {
    ranker: RelevanceRanker,
    parser: ResumeParser,
    top_n: usize,
    extract_skills: bool,
    extra_skills: Vec<String>,
}

impl JobMatcher {
    pub fn new(config: &MatchingConfig) -> Result<Self> {
        Ok(Self {
            ranker: RelevanceRanker::new(&config.stop_words),
            parser: ResumeParser::new()?,
            top_n: config.top_n,
            extract_skills: config.extract_skills,
            extra_skills: Vec::new(),
        })
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_skill_extraction(mut self, enable: bool) -> Self {
        self.extract_skills = enable;
        self
    }

    /// Skills supplied by the caller, merged with any extracted ones
    pub fn with_extra_skills(mut self, skills: Vec<String>) -> Self {
        self.extra_skills = skills;
        self
    }

    /// Rank the pool `store` returns for `query` against the resume text
    pub fn match_resume(&self, resume_text: &str, store: &dyn JobStore, query: &JobQuery) -> Result<MatchReport> {
        let start_time = Instant::now();

        let mut skills = if self.extract_skills {
            self.parser.extract_skills(resume_text)
        } else {
            Vec::new()
        };
        skills.extend(self.extra_skills.iter().cloned());
        let resume = ResumeDocument::new(resume_text).with_skills(skills);

        let pool = store.fetch_jobs(query)?;
        let matches = self.ranker.rank(&resume, &pool, self.top_n)?;

        info!(
            "Ranked {} jobs, kept {} (skills: {})",
            pool.len(),
            matches.len(),
            resume.skills.join(", ")
        );

        Ok(MatchReport {
            matches,
            pool_size: pool.len(),
            skills: resume.skills,
            top_n: self.top_n,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }
}
