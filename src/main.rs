//! Interactive CLI that guides a user to a lint-clean conventional commit
//!
//! The wizard inspects the staging area (offering to stage changes when
//! nothing is staged), prompts for a commit type and subject, validates
//! the assembled message against the configured lint rules, and performs
//! the commit after a final confirmation.

use anyhow::Result;
use clap::Parser;

use commit_wizard::{
    config::{Config, load_config},
    git::GitCli,
    lint::LintValidator,
    output,
    prompt::TerminalPrompter,
    workflow::CommitWorkflow,
};

/// Command-line arguments
#[derive(Parser)]
#[command(name = "commit_wizard")]
#[command(about = "Guided conventional-commit wizard with message linting", long_about = None)]
struct Args {
    /// Path to a commit-type and lint-rule configuration file (TOML format)
    #[arg(long)]
    config: Option<String>,

    /// Print the commit outcome as JSON after a successful commit
    #[arg(long)]
    json: bool,
}

/// Main entry point
///
/// # Process flow
///
/// 1. Parse command-line arguments
/// 2. Load the configuration file, or fall back to the built-in rules
/// 3. Run the commit workflow against the real git, prompt, and lint backends
/// 4. Exit 0 on success or user cancellation; a failed commit exits 1
///
/// # Errors
///
/// * Configuration file not found or invalid
/// * Git commit fails after the user confirmed
fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    output::info("🚀 Git Commit Wizard\n");

    let vcs = GitCli;
    let prompter = TerminalPrompter;
    let linter = LintValidator::from_config(&config);
    let workflow = CommitWorkflow::new(&config, &vcs, &prompter, &linter);

    if let Some(outcome) = workflow.run()?
        && args.json
    {
        println!("{}", serde_json::to_string(&outcome)?);
    }

    Ok(())
}
