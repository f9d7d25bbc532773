//! Staging-area preparation
//!
//! Before any message is composed the wizard makes sure something is
//! staged. [`StagingCoordinator`] inspects the repository status and, when
//! nothing is staged yet, offers to stage everything or a user-selected
//! subset of the changed files. It is the only place that mutates the
//! staging area, and it runs strictly before message composition.

use anyhow::Result;

use crate::git::{RepoStatus, VersionControl};
use crate::output;
use crate::prompt::PromptSession;

/// Prepares the staging area ahead of message composition
///
/// `prepare` returns `None` for every non-fatal abort: status unavailable,
/// nothing to commit, or the user selecting zero files. Callers treat
/// `None` as a clean cancellation, not an error.
pub struct StagingCoordinator<'a, V, P> {
    vcs: &'a V,
    prompt: &'a P,
}

impl<'a, V: VersionControl, P: PromptSession> StagingCoordinator<'a, V, P> {
    pub fn new(vcs: &'a V, prompt: &'a P) -> Self {
        Self { vcs, prompt }
    }

    /// Inspect the repository and ensure something is staged
    ///
    /// Returns a fresh [`RepoStatus`] snapshot taken after any staging
    /// action, or `None` when the run should be cancelled. Backend and
    /// prompt failures are reported as warnings and also cancel the run;
    /// nothing destructive has happened at this point.
    pub fn prepare(&self) -> Option<RepoStatus> {
        match self.prepare_inner() {
            Ok(outcome) => outcome,
            Err(e) => {
                output::warning(&format!("Could not prepare the staging area: {:#}", e));
                None
            }
        }
    }

    fn prepare_inner(&self) -> Result<Option<RepoStatus>> {
        let status = match self.vcs.status() {
            Ok(status) => status,
            Err(e) => {
                output::warning(&format!("Unable to read repository status: {:#}", e));
                return Ok(None);
            }
        };

        if status.is_empty() {
            output::warning("No changes to commit.");
            return Ok(None);
        }

        if !status.staged.is_empty() {
            return Ok(Some(status));
        }

        output::warning("No files staged. Current changes:");
        if !status.unstaged.is_empty() {
            for file in &status.unstaged {
                output::detail(&format!("  {}", file));
            }
        } else {
            for (path, marker) in &status.other {
                output::detail(&format!("  {} ({})", path, marker));
            }
        }

        if self.prompt.confirm("Stage all changes for commit?", true)? {
            self.vcs.stage_all()?;
            output::success("All changes staged.");
        } else {
            let candidates = selection_candidates(&status);
            let picked = self.prompt.multi_select("Select files to stage:", &candidates)?;
            if picked.is_empty() {
                output::warning("No files staged. Commit cancelled.");
                return Ok(None);
            }

            let files: Vec<String> = picked
                .iter()
                .filter_map(|&i| candidates.get(i).cloned())
                .collect();
            self.vcs.stage(&files)?;
            output::success(&format!("Staged {} files.", files.len()));
        }

        // Staging changed the repository; hand back a fresh snapshot
        Ok(Some(self.vcs.status()?))
    }
}

/// Candidate files offered in the staging multi-select
///
/// Merges the unstaged list with the untracked list (unstaged first,
/// duplicates removed) so untracked files remain selectable even when
/// tracked modifications exist.
fn selection_candidates(status: &RepoStatus) -> Vec<String> {
    let mut candidates = status.unstaged.clone();
    for (path, _) in &status.other {
        if !candidates.contains(path) {
            candidates.push(path.clone());
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockPrompt, MockVcs};

    fn unstaged_status(files: &[&str]) -> RepoStatus {
        RepoStatus {
            staged: vec![],
            unstaged: files.iter().map(|f| f.to_string()).collect(),
            other: vec![],
        }
    }

    fn staged_status(files: &[&str]) -> RepoStatus {
        RepoStatus {
            staged: files.iter().map(|f| f.to_string()).collect(),
            unstaged: vec![],
            other: vec![],
        }
    }

    #[test]
    fn test_empty_repository_cancels_without_mutation() {
        // Arrange - nothing staged, unstaged, or untracked
        let vcs = MockVcs::new();
        vcs.push_status(Ok(RepoStatus::default()));
        let prompt = MockPrompt::new();

        // Act
        let result = StagingCoordinator::new(&vcs, &prompt).prepare();

        // Assert - cancelled, staging area untouched
        assert!(result.is_none());
        assert_eq!(vcs.staging_mutations(), 0);
    }

    #[test]
    fn test_status_failure_cancels_without_mutation() {
        // Arrange - backend cannot produce a status
        let vcs = MockVcs::new();
        vcs.push_status(Err(anyhow::anyhow!("not a git repository")));
        let prompt = MockPrompt::new();

        // Act
        let result = StagingCoordinator::new(&vcs, &prompt).prepare();

        // Assert
        assert!(result.is_none());
        assert_eq!(vcs.staging_mutations(), 0);
    }

    #[test]
    fn test_already_staged_returns_status_without_prompting() {
        // Arrange - staged files exist; no prompts are scripted, so any
        // prompt call would panic
        let vcs = MockVcs::new();
        vcs.push_status(Ok(staged_status(&["src/main.rs"])));
        let prompt = MockPrompt::new();

        // Act
        let result = StagingCoordinator::new(&vcs, &prompt).prepare();

        // Assert - same snapshot, no staging mutation
        let status = result.unwrap();
        assert_eq!(status.staged, vec!["src/main.rs"]);
        assert_eq!(vcs.staging_mutations(), 0);
    }

    #[test]
    fn test_stage_all_stages_everything_and_refetches() {
        // Arrange - unstaged changes, user confirms stage-all
        let vcs = MockVcs::new();
        vcs.push_status(Ok(unstaged_status(&["a.txt", "b.txt"])));
        vcs.push_status(Ok(staged_status(&["a.txt", "b.txt"])));
        let prompt = MockPrompt::new();
        prompt.push_confirm(true);

        // Act
        let result = StagingCoordinator::new(&vcs, &prompt).prepare();

        // Assert - one stage-all call, refreshed snapshot returned
        let status = result.unwrap();
        assert_eq!(status.staged, vec!["a.txt", "b.txt"]);
        assert_eq!(vcs.stage_all_calls.get(), 1);
        assert!(vcs.stage_calls.borrow().is_empty());
    }

    #[test]
    fn test_subset_selection_stages_exactly_the_chosen_files() {
        // Arrange - user declines stage-all, picks the first and third file
        let vcs = MockVcs::new();
        vcs.push_status(Ok(unstaged_status(&["a.txt", "b.txt", "c.txt"])));
        vcs.push_status(Ok(staged_status(&["a.txt", "c.txt"])));
        let prompt = MockPrompt::new();
        prompt.push_confirm(false);
        prompt.push_multi_select(vec![0, 2]);

        // Act
        let result = StagingCoordinator::new(&vcs, &prompt).prepare();

        // Assert - exactly the selection was staged, nothing extra
        assert!(result.is_some());
        assert_eq!(vcs.stage_all_calls.get(), 0);
        assert_eq!(
            *vcs.stage_calls.borrow(),
            vec![vec!["a.txt".to_string(), "c.txt".to_string()]]
        );
    }

    #[test]
    fn test_zero_selection_cancels_without_mutation() {
        // Arrange - user declines stage-all and then selects nothing
        let vcs = MockVcs::new();
        vcs.push_status(Ok(unstaged_status(&["a.txt"])));
        let prompt = MockPrompt::new();
        prompt.push_confirm(false);
        prompt.push_multi_select(vec![]);

        // Act
        let result = StagingCoordinator::new(&vcs, &prompt).prepare();

        // Assert
        assert!(result.is_none());
        assert_eq!(vcs.staging_mutations(), 0);
    }

    #[test]
    fn test_untracked_only_changes_are_selectable() {
        // Arrange - no unstaged list, only untracked files
        let vcs = MockVcs::new();
        vcs.push_status(Ok(RepoStatus {
            staged: vec![],
            unstaged: vec![],
            other: vec![("notes.md".to_string(), '?')],
        }));
        vcs.push_status(Ok(staged_status(&["notes.md"])));
        let prompt = MockPrompt::new();
        prompt.push_confirm(false);
        prompt.push_multi_select(vec![0]);

        // Act
        let result = StagingCoordinator::new(&vcs, &prompt).prepare();

        // Assert - the untracked file was offered and staged
        assert!(result.is_some());
        assert_eq!(*vcs.stage_calls.borrow(), vec![vec!["notes.md".to_string()]]);
    }

    #[test]
    fn test_selection_candidates_merge_unstaged_and_untracked() {
        // Arrange - disjoint unstaged and untracked lists with one overlap
        let status = RepoStatus {
            staged: vec![],
            unstaged: vec!["a.txt".to_string(), "b.txt".to_string()],
            other: vec![
                ("b.txt".to_string(), '?'),
                ("c.txt".to_string(), '?'),
            ],
        };

        // Act
        let candidates = selection_candidates(&status);

        // Assert - unstaged first, untracked appended, duplicates dropped
        assert_eq!(candidates, vec!["a.txt", "b.txt", "c.txt"]);
    }
}
