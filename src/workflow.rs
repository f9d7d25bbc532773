//! The guided commit workflow
//!
//! [`CommitWorkflow`] drives the whole run: staging-area preparation,
//! message composition, lint validation with an explicit override path,
//! final confirmation, and the commit itself.
//!
//! States progress strictly in sequence; a cancellation in any state ends
//! the run cleanly with `Ok(None)`. The only hard failure is a rejected
//! commit after the user has confirmed, which propagates as an error.

use anyhow::{Context, Result};

use crate::config::Config;
use crate::git::VersionControl;
use crate::lint::Linter;
use crate::message::{CommitMessage, validate_subject};
use crate::output::{self, CommitOutcome};
use crate::prompt::PromptSession;
use crate::staging::StagingCoordinator;

/// Orchestrates one commit run over the three collaborator boundaries
pub struct CommitWorkflow<'a, V, P, L> {
    config: &'a Config,
    vcs: &'a V,
    prompt: &'a P,
    linter: &'a L,
}

impl<'a, V, P, L> CommitWorkflow<'a, V, P, L>
where
    V: VersionControl,
    P: PromptSession,
    L: Linter,
{
    pub fn new(config: &'a Config, vcs: &'a V, prompt: &'a P, linter: &'a L) -> Self {
        Self {
            config,
            vcs,
            prompt,
            linter,
        }
    }

    /// Run the workflow to completion
    ///
    /// # Returns
    ///
    /// * `Ok(Some(outcome))` - a commit was created
    /// * `Ok(None)` - the run was cancelled at some step; no commit exists
    /// * `Err(_)` - the commit itself failed after the user confirmed
    pub fn run(&self) -> Result<Option<CommitOutcome>> {
        // Staging
        let Some(_status) = StagingCoordinator::new(self.vcs, self.prompt).prepare() else {
            return Ok(None);
        };

        // Composing
        let Some(message) = self.compose()? else {
            output::info("Commit cancelled.");
            return Ok(None);
        };
        let rendered = message.to_string();

        // Validating
        output::info("Validating commit message...");
        let validation = self.linter.validate(&rendered);
        if validation.is_valid {
            output::success("Commit message validated!");
        } else {
            // AwaitingOverride
            output::error("Commit message failed validation:");
            for line in &validation.diagnostics {
                output::diagnostic(line);
            }

            let proceed = self.prompt.confirm(
                "Commit message does not follow conventions. Commit anyway?",
                false,
            )?;
            if !proceed {
                output::info("Commit cancelled.");
                return Ok(None);
            }
        }

        // Confirming
        output::success(&format!("Generated: \"{}\"", rendered));
        if !self.prompt.confirm("Proceed with commit?", true)? {
            output::info("Commit cancelled.");
            return Ok(None);
        }

        // Committing
        let commit_id = self
            .vcs
            .commit(&rendered)
            .with_context(|| format!("Failed to commit \"{}\"", rendered))?;

        // Done
        output::success("Committed successfully!");
        let prefix: String = commit_id.chars().take(8).collect();
        output::detail(&format!("Commit hash: {}", prefix));

        Ok(Some(CommitOutcome {
            commit_id,
            message: rendered,
        }))
    }

    /// Prompt for the commit type and subject, assembling the message
    ///
    /// The subject prompt re-asks until [`validate_subject`] accepts the
    /// input; cancelling the type selection cancels composition.
    fn compose(&self) -> Result<Option<CommitMessage>> {
        let labels: Vec<String> = self.config.types.iter().map(|t| t.label()).collect();
        let Some(index) = self.prompt.select("Select commit type:", &labels)? else {
            return Ok(None);
        };
        let commit_type = &self.config.types[index].name;

        let Some(subject) = self.prompt.text("Enter commit message:", &validate_subject)? else {
            return Ok(None);
        };

        Ok(Some(CommitMessage::new(commit_type, &subject)))
    }
}
