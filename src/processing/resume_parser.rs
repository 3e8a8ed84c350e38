//! Rule-based resume field extraction

use crate::error::{JobMatcherError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const DEFAULT_SKILLS: &[&str] = &[
    "Python",
    "Java",
    "C++",
    "SQL",
    "Machine Learning",
    "Deep Learning",
    "AI",
    "Data Science",
];

/// Best-effort fields pulled out of plain resume text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
}

pub struct ResumeParser {
    email_regex: Regex,
    phone_regex: Regex,
    header_regex: Regex,
    skill_regex: Regex,
}

impl ResumeParser {
    pub fn new() -> Result<Self> {
        Self::with_custom_skills(Vec::new())
    }

    /// Parser matching the default skill list plus `additional_skills`
    pub fn with_custom_skills(additional_skills: Vec<String>) -> Result<Self> {
        let mut skills: Vec<String> = DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect();
        skills.extend(additional_skills.into_iter().filter(|s| !s.trim().is_empty()));

        // Longest first so "Machine Learning" wins over shorter overlaps
        skills.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        skills.dedup();

        let alternation = skills
            .iter()
            .map(|s| regex::escape(s.trim()))
            .collect::<Vec<_>>()
            .join("|");

        // A trailing `\b` never matches after the `+` in C++, so the end of a
        // skill is a non-word character or the end of the text instead
        let skill_pattern = format!(r"(?i)\b({})(?:\W|$)", alternation);

        let build = |pattern: &str| {
            Regex::new(pattern)
                .map_err(|e| JobMatcherError::Processing(format!("Failed to build resume parser: {}", e)))
        };

        Ok(Self {
            email_regex: build(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")?,
            phone_regex: build(r"\+?\d[\d\s-]{8,}\d")?,
            header_regex: build(r"(?i)(resume|curriculum vitae)")?,
            skill_regex: build(&skill_pattern)?,
        })
    }

    pub fn parse(&self, text: &str) -> ParsedResume {
        let name = text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .filter(|line| !self.header_regex.is_match(line))
            .map(str::to_string);

        let email = self.email_regex.find(text).map(|m| m.as_str().to_string());
        let phone = self.phone_regex.find(text).map(|m| m.as_str().to_string());

        ParsedResume {
            name,
            email,
            phone,
            skills: self.extract_skills(text),
        }
    }

    /// Skill list matches, title-cased and deduplicated
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        let found: BTreeSet<String> = self
            .skill_regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1))
            .map(|m| title_case(m.as_str()))
            .collect();
        found.into_iter().collect()
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new().expect("Failed to create default resume parser")
    }
}

/// Uppercase the first letter of each alphabetic run, lowercase the rest
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut previous_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if previous_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_alpha = true;
        } else {
            out.push(c);
            previous_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "
John Doe
Email: john.doe@example.com
Phone: +1 987-654-3210

Experience:
3 years as Software Engineer at ABC Corp

Skills:
python, Java, machine learning, SQL, Deep Learning, C++
";

    #[test]
    fn test_parse_fields() {
        let parser = ResumeParser::new().unwrap();
        let parsed = parser.parse(SAMPLE);

        assert_eq!(parsed.name.as_deref(), Some("John Doe"));
        assert_eq!(parsed.email.as_deref(), Some("john.doe@example.com"));
        assert_eq!(parsed.phone.as_deref(), Some("+1 987-654-3210"));
    }

    #[test]
    fn test_skills_title_cased_and_unique() {
        let parser = ResumeParser::new().unwrap();
        let skills = parser.extract_skills("SQL, sql, Python and MACHINE LEARNING; c++");

        assert_eq!(skills, vec!["C++", "Machine Learning", "Python", "Sql"]);
    }

    #[test]
    fn test_header_line_is_not_a_name() {
        let parser = ResumeParser::new().unwrap();
        let parsed = parser.parse("Curriculum Vitae\nJane Roe");
        assert!(parsed.name.is_none());
    }

    #[test]
    fn test_skill_words_need_boundaries() {
        let parser = ResumeParser::new().unwrap();
        assert!(parser.extract_skills("Javascript and Pythonic tooling, plain email").is_empty());
    }

    #[test]
    fn test_custom_skills() {
        let parser = ResumeParser::with_custom_skills(vec!["Rust".to_string()]).unwrap();
        assert_eq!(parser.extract_skills("Rust and Python"), vec!["Python", "Rust"]);
    }

    #[test]
    fn test_empty_text() {
        let parsed = ResumeParser::default().parse("");
        assert_eq!(parsed, ParsedResume::default());
    }
}
