//! Output formatters for ranked matches

use crate::config::OutputFormat;
use crate::error::{JobMatcherError, Result};
use crate::processing::matcher::MatchReport;
use colored::{Color, Colorize};

/// Trait for formatting match reports
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter; each match carries its `similarity` key
pub struct JsonFormatter {
    pretty: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "█".color(Color::Blue).bold(), title.color(Color::Blue).bold())
        } else {
            format!("\n█ {}\n", title)
        }
    }

    fn score_color(similarity: f64) -> Color {
        match similarity {
            s if s >= 0.5 => Color::Green,
            s if s >= 0.2 => Color::Yellow,
            s if s > 0.0 => Color::BrightRed,
            _ => Color::White,
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("Job Matches"));
        output.push_str(&format!(
            "Showing {} of {} jobs (top {})\n",
            report.matches.len(),
            report.pool_size,
            report.top_n
        ));

        if !report.skills.is_empty() {
            output.push_str(&format!("Resume skills: {}\n", report.skills.join(", ")));
        }

        if report.matches.is_empty() {
            output.push_str(&self.colorize("\nNo jobs to rank.\n", Color::Yellow));
            return Ok(output);
        }

        output.push('\n');
        for (i, scored) in report.matches.iter().enumerate() {
            let job = &scored.job;
            let score = format!("{:5.1}%", scored.similarity * 100.0);
            output.push_str(&format!(
                "{:>2}. {} {} @ {}\n",
                i + 1,
                self.colorize(&score, Self::score_color(scored.similarity)),
                job.title.as_deref().unwrap_or("(untitled)"),
                job.company.as_deref().unwrap_or("(unknown company)"),
            ));

            if self.detailed {
                if let Some(location) = job.location.as_deref().filter(|l| !l.is_empty()) {
                    output.push_str(&format!("      Location: {}\n", location));
                }
                if let Some(skills) = job.skills_required.as_deref().filter(|s| !s.is_empty()) {
                    output.push_str(&format!("      Skills: {}\n", skills));
                }
                if let Some(description) = job.description.as_deref() {
                    output.push_str(&format!("      {}\n", truncate_text(description, 120)));
                }
            }
        }

        if self.detailed {
            output.push_str(&format!("\nProcessing time: {}ms\n", report.processing_time_ms));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(&report.matches)?)
        } else {
            Ok(serde_json::to_string(&report.matches)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
        }
    }

    pub fn generate_report(&self, report: &MatchReport, format: &OutputFormat) -> Result<String> {
        let formatters: [&dyn OutputFormatter; 2] = [&self.console_formatter, &self.json_formatter];
        formatters
            .into_iter()
            .find(|formatter| formatter.supports_format() == *format)
            .ok_or_else(|| JobMatcherError::OutputFormatting(format!("No formatter for {:?}", format)))?
            .format_report(report)
    }
}

/// Truncate text at a word boundary, appending an ellipsis
fn truncate_text(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    let cut = truncated.rfind(' ').unwrap_or(truncated.len());
    format!("{}...", &truncated[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::document::{JobRecord, ScoredJob};

    fn report() -> MatchReport {
        MatchReport {
            matches: vec![
                ScoredJob {
                    job: JobRecord::new("Data Analyst", "Initech").with_description("Python SQL role"),
                    similarity: 0.62,
                },
                ScoredJob {
                    job: JobRecord::new("Sales Lead", "Acme"),
                    similarity: 0.0,
                },
            ],
            pool_size: 4,
            skills: vec!["Python".to_string()],
            top_n: 2,
            processing_time_ms: 3,
        }
    }

    #[test]
    fn test_console_output_plain() {
        let formatter = ConsoleFormatter::new(false, true);
        let text = formatter.format_report(&report()).unwrap();

        assert!(text.contains("Showing 2 of 4 jobs (top 2)"));
        assert!(text.contains(" 1.  62.0% Data Analyst @ Initech"));
        assert!(text.contains(" 2.   0.0% Sales Lead @ Acme"));
        assert!(text.contains("Python SQL role"));
        assert!(text.contains("Resume skills: Python"));
    }

    #[test]
    fn test_console_empty_matches() {
        let mut empty = report();
        empty.matches.clear();
        let text = ConsoleFormatter::new(false, false).format_report(&empty).unwrap();
        assert!(text.contains("No jobs to rank."));
    }

    #[test]
    fn test_json_output_carries_similarity() {
        let generator = ReportGenerator::with_options(false, false, false);
        let json = generator.generate_report(&report(), &OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["title"], "Data Analyst");
        assert_eq!(value[0]["similarity"], 0.62);
        assert_eq!(value[1]["similarity"], 0.0);
    }

    #[test]
    fn test_generator_dispatches_by_format() {
        let generator = ReportGenerator::with_options(false, false, true);

        let console = generator.generate_report(&report(), &OutputFormat::Console).unwrap();
        assert!(console.contains("Job Matches"));
        assert!(serde_json::from_str::<serde_json::Value>(&console).is_err());

        let json = generator.generate_report(&report(), &OutputFormat::Json).unwrap();
        assert!(!json.contains("Job Matches"));
        assert!(serde_json::from_str::<serde_json::Value>(&json).unwrap().is_array());
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("one two three four", 9), "one two...");
    }
}
