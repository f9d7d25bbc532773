//! Configuration management for the commit wizard
//!
//! This module handles loading and parsing configuration files in TOML format.
//! The configuration supplies the commit-type enumeration offered at the
//! prompt and the lint rules applied to the assembled message, so both can
//! be swapped without touching the workflow logic.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

use crate::lint::SubjectCase;

/// One selectable commit type
///
/// The `name` is the token that ends up in the message (`feat`, `fix`, ...);
/// the `description` is shown next to it in the selection prompt.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitTypeSpec {
    pub name: String,
    pub description: String,
}

impl CommitTypeSpec {
    fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    /// Label shown in the selection prompt, e.g. `feat: A new feature`
    pub fn label(&self) -> String {
        format!("{}: {}", self.name, self.description)
    }
}

/// Lint rule configuration
///
/// The allowed-type rule is derived from the configured commit types plus
/// `extra_allowed_types`, which covers tokens that are valid in a message
/// but not offered at the prompt (`revert` in the default rule set).
#[derive(Debug, Clone, Deserialize)]
pub struct LintConfig {
    /// Subject casings the lint rules reject
    #[serde(default = "default_forbidden_cases")]
    pub forbidden_subject_cases: Vec<SubjectCase>,
    /// Type tokens accepted by lint in addition to the prompted types
    #[serde(default = "default_extra_allowed_types")]
    pub extra_allowed_types: Vec<String>,
    /// Optional external linter invocation, e.g. `["npx", "commitlint"]`
    ///
    /// When set, the candidate message is written to the child's stdin.
    /// When unset, the built-in rule evaluation is used.
    #[serde(default)]
    pub command: Option<Vec<String>>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            forbidden_subject_cases: default_forbidden_cases(),
            extra_allowed_types: default_extra_allowed_types(),
            command: None,
        }
    }
}

fn default_forbidden_cases() -> Vec<SubjectCase> {
    vec![
        SubjectCase::SentenceCase,
        SubjectCase::StartCase,
        SubjectCase::PascalCase,
        SubjectCase::UpperCase,
    ]
}

fn default_extra_allowed_types() -> Vec<String> {
    vec!["revert".to_string()]
}

/// Wizard configuration file structure
///
/// # Example TOML
///
/// ```toml
/// [[types]]
/// name = "feat"
/// description = "A new feature"
///
/// [[types]]
/// name = "fix"
/// description = "A bug fix"
///
/// [lint]
/// forbidden_subject_cases = ["sentence-case", "upper-case"]
/// extra_allowed_types = []
/// # command = ["npx", "commitlint"]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Commit types offered at the selection prompt
    pub types: Vec<CommitTypeSpec>,
    /// Lint rules applied to the assembled message
    #[serde(default)]
    pub lint: LintConfig,
}

impl Config {
    /// All type tokens lint accepts: prompted types plus the extras
    pub fn allowed_type_tokens(&self) -> Vec<String> {
        let mut tokens: Vec<String> = self.types.iter().map(|t| t.name.clone()).collect();
        for extra in &self.lint.extra_allowed_types {
            if !tokens.contains(extra) {
                tokens.push(extra.clone());
            }
        }
        tokens
    }
}

impl Default for Config {
    /// The extended seven-type variant, used when no `--config` is given
    fn default() -> Self {
        Self {
            types: vec![
                CommitTypeSpec::new("feat", "A new feature"),
                CommitTypeSpec::new("fix", "A bug fix"),
                CommitTypeSpec::new("docs", "Documentation changes"),
                CommitTypeSpec::new("chore", "Maintenance tasks"),
                CommitTypeSpec::new("style", "Code style changes"),
                CommitTypeSpec::new("refactor", "Code refactoring"),
                CommitTypeSpec::new("test", "Adding tests"),
            ],
            lint: LintConfig::default(),
        }
    }
}

/// Load configuration from a TOML file
///
/// # Arguments
///
/// * `config_path` - Path to the configuration file
///
/// # Returns
///
/// * `Result<Config>` - Parsed configuration
///
/// # Errors
///
/// * File does not exist
/// * Invalid TOML format
/// * No commit types configured
///
/// # Example
///
/// ```no_run
/// use commit_wizard::config::load_config;
///
/// # fn main() -> anyhow::Result<()> {
/// let config = load_config("wizard.toml")?;
/// println!("{} commit types configured", config.types.len());
/// # Ok(())
/// # }
/// ```
pub fn load_config(config_path: &str) -> Result<Config> {
    let content = fs::read_to_string(config_path)
        .context(format!("Failed to read config file: {}", config_path))?;
    let config: Config = toml::from_str(&content).context("Failed to parse config file as TOML")?;

    if config.types.is_empty() {
        anyhow::bail!(
            "Configuration error: at least one [[types]] entry is required in {}",
            config_path
        );
    }

    Ok(config)
}
