//! Commit Wizard - Guided Conventional Commit CLI
//!
//! This library walks a user through composing a conventional commit
//! message, validates it against configurable lint rules, and performs
//! the commit.
//!
//! # Modules
//!
//! - [`config`] - Configuration file loading and parsing
//! - [`git`] - Version-control boundary and the git backend
//! - [`prompt`] - Interactive prompt boundary
//! - [`message`] - Commit message assembly and subject validation
//! - [`lint`] - Commit message linting
//! - [`staging`] - Staging-area preparation
//! - [`workflow`] - The guided commit workflow
//! - [`output`] - Terminal output helpers and the commit summary
//!
//! # Example
//!
//! ```no_run
//! use commit_wizard::config::Config;
//! use commit_wizard::git::GitCli;
//! use commit_wizard::lint::LintValidator;
//! use commit_wizard::prompt::TerminalPrompter;
//! use commit_wizard::workflow::CommitWorkflow;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! let vcs = GitCli;
//! let prompter = TerminalPrompter;
//! let linter = LintValidator::from_config(&config);
//! let workflow = CommitWorkflow::new(&config, &vcs, &prompter, &linter);
//! if let Some(outcome) = workflow.run()? {
//!     println!("created {}", outcome.commit_id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod git;
pub mod lint;
pub mod message;
pub mod output;
pub mod prompt;
pub mod staging;
pub mod workflow;

#[cfg(test)]
pub mod test_support;
