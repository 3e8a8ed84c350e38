//! Job matcher: rank job postings by relevance to a resume

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use job_matcher::cli::{self, Cli, Commands, ConfigAction};
use job_matcher::config::Config;
use job_matcher::error::{JobMatcherError, Result};
use job_matcher::input::job_store::{JobQuery, JsonFileJobStore};
use job_matcher::input::manager::InputManager;
use job_matcher::output::formatter::ReportGenerator;
use job_matcher::processing::matcher::JobMatcher;
use job_matcher::processing::resume_parser::ResumeParser;
use log::{error, info};
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    // A reset must work even when the file no longer parses
    let resetting = matches!(cli.command, Commands::Config { action: Some(ConfigAction::Reset) });
    let loaded = if resetting {
        Ok(Config::default())
    } else {
        load_config(cli.config.as_deref())
    };

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Match {
            resume,
            jobs,
            top_n,
            skills,
            no_skills,
            keyword,
            location,
            limit,
            detailed,
            output,
            save,
        } => {
            cli::validate_file_extension(&resume, &["txt", "md", "markdown"])
                .map_err(|e| JobMatcherError::InvalidInput(format!("Resume file: {}", e)))?;

            let jobs_path = jobs.or_else(|| config.store.jobs_path.clone()).ok_or_else(|| {
                JobMatcherError::InvalidInput(
                    "No job file given; pass --jobs or set store.jobs_path".to_string(),
                )
            })?;

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(JobMatcherError::InvalidInput)?,
                None => config.output.format,
            };

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            info!("Read {} characters from {}", resume_text.len(), resume.display());

            let matcher = JobMatcher::new(&config.matching)?
                .with_top_n(top_n.unwrap_or(config.matching.top_n))
                .with_skill_extraction(config.matching.extract_skills && !no_skills)
                .with_extra_skills(skills);

            let mut query = JobQuery::with_limit(limit.unwrap_or(config.store.pool_limit));
            query.keyword = keyword;
            query.location = location;

            let store = JsonFileJobStore::new(jobs_path);
            let report = matcher.match_resume(&resume_text, &store, &query)?;

            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(use_colors, detailed || config.output.detailed, true);
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    std::fs::write(&path, &rendered)
                        .with_context(|| format!("Failed to save output to {}", path.display()))?;
                    println!("Saved {} matches to {}", report.matches.len(), path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Skills { resume } => {
            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            let parsed = ResumeParser::new()?.parse(&resume_text);

            println!("{}", "Parsed Resume".bold());
            println!("Name:  {}", parsed.name.as_deref().unwrap_or("-"));
            println!("Email: {}", parsed.email.as_deref().unwrap_or("-"));
            println!("Phone: {}", parsed.phone.as_deref().unwrap_or("-"));
            if parsed.skills.is_empty() {
                println!("Skills: -");
            } else {
                println!("Skills: {}", parsed.skills.join(", "));
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Config file: {}", config_path.display());
                println!("\nMatching:");
                println!("  Top N: {}", config.matching.top_n);
                println!("  Stop words: {:?}", config.matching.stop_words);
                println!("  Extract skills: {}", config.matching.extract_skills);
                println!("\nStore:");
                match &config.store.jobs_path {
                    Some(path) => println!("  Jobs file: {}", path.display()),
                    None => println!("  Jobs file: -"),
                }
                println!("  Pool limit: {}", config.store.pool_limit);
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                Config::reset_at(config_path)?;
                println!("Configuration at {} reset to defaults", config_path.display());
            }
        },
    }

    Ok(())
}
