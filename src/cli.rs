//! CLI interface for the job matcher

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "job-matcher")]
#[command(about = "Rank job postings by relevance to a resume")]
#[command(long_about = "Match a resume against a pool of job postings using TF-IDF cosine similarity")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank jobs against a resume
    Match {
        /// Path to resume file (TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to a JSON array of job records
        #[arg(short, long)]
        jobs: Option<PathBuf>,

        /// Number of jobs to return
        #[arg(short = 'n', long)]
        top_n: Option<usize>,

        /// Extra comma-separated skills to add to the resume
        #[arg(short, long, value_delimiter = ',')]
        skills: Vec<String>,

        /// Do not extract skills from the resume text
        #[arg(long)]
        no_skills: bool,

        /// Only rank jobs mentioning this keyword
        #[arg(short, long)]
        keyword: Option<String>,

        /// Only rank jobs in this location
        #[arg(long)]
        location: Option<String>,

        /// Maximum number of jobs fetched from the store
        #[arg(long)]
        limit: Option<usize>,

        /// Show job details
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Show the fields parsed from a resume
    Skills {
        /// Path to resume file (TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
