//! Commit message linting
//!
//! This module validates an assembled commit message against the configured
//! rule set: the type token must belong to the allowed enumeration, and the
//! subject must not use any of the forbidden casing styles.
//!
//! Validation never fails past its boundary. When an external linter command
//! is configured it receives the message on stdin (never interpolated into a
//! shell string), and any invocation failure is converted into an invalid
//! [`ValidationResult`] carrying the best-available diagnostic text.

use serde::Deserialize;
use std::fmt;
use std::io::Write;
use std::process::{Command, Stdio};

use crate::config::Config;

/// Subject casing styles that lint rules can forbid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubjectCase {
    /// `Sentence case` - first letter capitalized, rest lowercase
    SentenceCase,
    /// `Start Case` - every word capitalized
    StartCase,
    /// `PascalCase` - capitalized with no word separators
    PascalCase,
    /// `UPPER CASE` - all letters uppercase
    UpperCase,
}

impl SubjectCase {
    /// Whether the subject is written in this casing style
    pub fn matches(&self, subject: &str) -> bool {
        let trimmed = subject.trim();
        if trimmed.is_empty() || !trimmed.chars().any(|c| c.is_alphabetic()) {
            return false;
        }

        match self {
            SubjectCase::UpperCase => trimmed == trimmed.to_uppercase(),
            SubjectCase::SentenceCase => {
                starts_with_uppercase(trimmed) && trimmed == capitalize(trimmed)
            }
            SubjectCase::StartCase => {
                trimmed.contains(char::is_whitespace)
                    && trimmed.split_whitespace().all(|w| w == capitalize(w))
            }
            SubjectCase::PascalCase => {
                !trimmed.contains(char::is_whitespace)
                    && starts_with_uppercase(trimmed)
                    && trimmed.chars().any(|c| c.is_lowercase())
            }
        }
    }
}

impl fmt::Display for SubjectCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubjectCase::SentenceCase => "sentence-case",
            SubjectCase::StartCase => "start-case",
            SubjectCase::PascalCase => "pascal-case",
            SubjectCase::UpperCase => "upper-case",
        };
        write!(f, "{}", name)
    }
}

fn starts_with_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_uppercase())
}

/// First character uppercased, everything after it lowercased
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Outcome of validating one candidate message
///
/// `diagnostics` is empty when the message is valid; otherwise it holds
/// human-readable lines in the order they were produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub diagnostics: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            diagnostics: Vec::new(),
        }
    }

    pub fn invalid(diagnostics: Vec<String>) -> Self {
        Self {
            is_valid: false,
            diagnostics,
        }
    }
}

/// Boundary for commit-message validation, mockable in workflow tests
pub trait Linter {
    fn validate(&self, message: &str) -> ValidationResult;
}

/// Rule-driven validator, optionally delegating to an external process
///
/// # Example
///
/// ```
/// use commit_wizard::config::Config;
/// use commit_wizard::lint::{LintValidator, Linter};
///
/// let validator = LintValidator::from_config(&Config::default());
/// let result = validator.validate("feat: add login form");
/// assert!(result.is_valid);
/// ```
pub struct LintValidator {
    allowed_types: Vec<String>,
    forbidden_cases: Vec<SubjectCase>,
    command: Option<Vec<String>>,
}

impl LintValidator {
    /// Build a validator from the wizard configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            allowed_types: config.allowed_type_tokens(),
            forbidden_cases: config.lint.forbidden_subject_cases.clone(),
            command: config.lint.command.clone(),
        }
    }

    /// Evaluate the built-in rule set against a serialized message
    fn check_rules(&self, message: &str) -> Vec<String> {
        let mut diagnostics = Vec::new();

        let Some((commit_type, subject)) = message.split_once(':') else {
            diagnostics.push(
                "✖   message does not match the <type>: <subject> format [header-format]"
                    .to_string(),
            );
            return diagnostics;
        };

        let commit_type = commit_type.trim();
        let subject = subject.trim();

        if !self.allowed_types.iter().any(|t| t == commit_type) {
            diagnostics.push(format!(
                "✖   type must be one of [{}] [type-enum]",
                self.allowed_types.join(", ")
            ));
        }

        let violated: Vec<String> = self
            .forbidden_cases
            .iter()
            .filter(|case| case.matches(subject))
            .map(|case| case.to_string())
            .collect();
        if !violated.is_empty() {
            diagnostics.push(format!(
                "✖   subject must not be {} [subject-case]",
                violated.join(", ")
            ));
        }

        diagnostics
    }

    /// Run the configured external linter, feeding the message on stdin
    fn run_external(&self, command: &[String], message: &str) -> ValidationResult {
        let invoke = || -> std::io::Result<std::process::Output> {
            let mut child = Command::new(&command[0])
                .args(&command[1..])
                .stdin(Stdio::piped())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .spawn()?;

            if let Some(mut stdin) = child.stdin.take() {
                stdin.write_all(message.as_bytes())?;
            }

            child.wait_with_output()
        };

        let output = match invoke() {
            Ok(output) => output,
            Err(e) => {
                return ValidationResult::invalid(vec![format!(
                    "Failed to invoke linter command '{}': {}",
                    command.join(" "),
                    e
                )]);
            }
        };

        if output.status.success() {
            return ValidationResult::valid();
        }

        let raw = format!(
            "{}{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        let mut diagnostics = filter_diagnostics(&raw);
        if diagnostics.is_empty() {
            diagnostics.push(format!(
                "Linter exited with status {:?} and produced no diagnostics",
                output.status.code()
            ));
        }

        ValidationResult::invalid(diagnostics)
    }
}

impl Linter for LintValidator {
    fn validate(&self, message: &str) -> ValidationResult {
        if let Some(command) = self.command.as_ref().filter(|c| !c.is_empty()) {
            return self.run_external(command, message);
        }

        let diagnostics = self.check_rules(message);
        if diagnostics.is_empty() {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(diagnostics)
        }
    }
}

/// Keep only the lines of linter output that carry signal
///
/// Retained lines are error markers (`✖`), pending markers (`⧗`), and
/// bullet-point detail lines starting with `-`. Order is preserved;
/// everything else is discarded as noise.
pub fn filter_diagnostics(raw: &str) -> Vec<String> {
    raw.lines()
        .filter(|line| {
            line.contains('✖') || line.contains('⧗') || line.trim_start().starts_with('-')
        })
        .map(|line| line.to_string())
        .collect()
}
