//! Git operations behind the version-control boundary
//!
//! This module defines the [`VersionControl`] trait the workflow talks to,
//! plus [`GitCli`], the production implementation that shells out to `git`:
//! - Query repository status (`git status --porcelain`)
//! - Stage everything or an explicit file list
//! - Create a commit and resolve its identifier

use anyhow::{Context, Result};
use std::process::Command;

/// Snapshot of the repository's staging state
///
/// Produced fresh on each status query and re-fetched after staging
/// actions, never mutated in place. `staged` and `unstaged` are disjoint
/// within a single snapshot; `other` holds untracked files paired with
/// their working-directory marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoStatus {
    pub staged: Vec<String>,
    pub unstaged: Vec<String>,
    pub other: Vec<(String, char)>,
}

impl RepoStatus {
    /// True when there is nothing staged, unstaged, or untracked
    pub fn is_empty(&self) -> bool {
        self.staged.is_empty() && self.unstaged.is_empty() && self.other.is_empty()
    }
}

/// Boundary over the version-control backend, mockable in workflow tests
pub trait VersionControl {
    /// Fetch a fresh status snapshot
    fn status(&self) -> Result<RepoStatus>;

    /// Stage every change in the working tree
    fn stage_all(&self) -> Result<()>;

    /// Stage exactly the given files, nothing else
    fn stage(&self, files: &[String]) -> Result<()>;

    /// Create a commit with the given message, returning its identifier
    fn commit(&self, message: &str) -> Result<String>;
}

/// Production backend invoking the `git` binary
///
/// The commit message is always passed as a discrete argument, never
/// interpolated into a shell string.
pub struct GitCli;

impl GitCli {
    /// Run a git subcommand and return its stdout
    fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .output()
            .context("Failed to execute git command. Make sure git is installed and in PATH")?;

        if !output.status.success() {
            anyhow::bail!(
                "git {} failed: {}",
                args.first().unwrap_or(&""),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl VersionControl for GitCli {
    fn status(&self) -> Result<RepoStatus> {
        let raw = self.run(&["status", "--porcelain"])?;
        Ok(parse_porcelain(&raw))
    }

    fn stage_all(&self) -> Result<()> {
        self.run(&["add", "--all"])?;
        Ok(())
    }

    fn stage(&self, files: &[String]) -> Result<()> {
        let mut args = vec!["add", "--"];
        args.extend(files.iter().map(|f| f.as_str()));
        self.run(&args)?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<String> {
        self.run(&["commit", "-m", message])?;
        let head = self.run(&["rev-parse", "HEAD"])?;
        Ok(head.trim().to_string())
    }
}

/// Parse `git status --porcelain` output into a [`RepoStatus`]
///
/// Each line is `XY path` where `X` is the index status and `Y` the
/// working-directory status. Renames (`R  old -> new`) contribute the new
/// path. Untracked entries (`??`) land in `other` with their marker.
///
/// # Example
///
/// ```
/// use commit_wizard::git::parse_porcelain;
///
/// let status = parse_porcelain("M  staged.rs\n M dirty.rs\n?? new.rs\n");
/// assert_eq!(status.staged, vec!["staged.rs"]);
/// assert_eq!(status.unstaged, vec!["dirty.rs"]);
/// assert_eq!(status.other, vec![("new.rs".to_string(), '?')]);
/// ```
pub fn parse_porcelain(raw: &str) -> RepoStatus {
    let mut status = RepoStatus::default();

    for line in raw.lines() {
        if line.len() < 4 {
            continue;
        }

        let mut chars = line.chars();
        let index = chars.next().unwrap_or(' ');
        let worktree = chars.next().unwrap_or(' ');
        let path = line[2..].trim_start();
        // Only renames and copies list both sides; the new path is what
        // we can stage. Other entries keep the path verbatim, even one
        // that happens to contain an arrow.
        let path = if matches!(index, 'R' | 'C') {
            path.rsplit(" -> ").next().unwrap_or(path).to_string()
        } else {
            path.to_string()
        };

        if index == '?' {
            status.other.push((path, '?'));
            continue;
        }

        if matches!(index, 'M' | 'A' | 'D' | 'R' | 'C' | 'T') {
            status.staged.push(path.clone());
        }

        if matches!(worktree, 'M' | 'D' | 'T' | 'U') {
            status.unstaged.push(path);
        }
    }

    status
}

// Note: the VersionControl impl for GitCli is not unit-tested here as it
// depends on an external git binary and repository state. The pure
// porcelain parser carries the tests.
