//! Job matcher library: ranks job postings by lexical similarity to a resume

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{JobMatcherError, Result};
pub use processing::document::{JobRecord, ResumeDocument, ScoredJob};
pub use processing::ranker::RelevanceRanker;
pub use processing::text_processor::normalize;
