//! Terminal output helpers and the machine-readable commit summary
//!
//! All advisory messages go through the functions here so the wizard keeps
//! a consistent color scheme: green for success, yellow for warnings,
//! red for errors, dimmed for file listings and other detail lines.

use colored::Colorize;
use serde::Serialize;

/// Result of a completed commit, for `--json` output
///
/// # Example
///
/// ```
/// use commit_wizard::output::CommitOutcome;
/// use serde_json;
///
/// let outcome = CommitOutcome {
///     commit_id: "f3a91c2d8b7e".to_string(),
///     message: "feat: add login form".to_string(),
/// };
///
/// let json = serde_json::to_string(&outcome).unwrap();
/// assert_eq!(
///     json,
///     r#"{"commit_id":"f3a91c2d8b7e","message":"feat: add login form"}"#
/// );
/// ```
#[derive(Debug, Serialize)]
pub struct CommitOutcome {
    /// Identifier of the created commit
    pub commit_id: String,
    /// The full commit message that was committed
    pub message: String,
}

/// Print an informational message (plain white)
pub fn info(message: &str) {
    println!("{}", message.white());
}

/// Print a success message with a green checkmark
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message.white());
}

/// Print a warning with a yellow marker
///
/// Warnings are advisory only; they never change control flow by themselves.
pub fn warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message.yellow());
}

/// Print an error header with a red cross
pub fn error(message: &str) {
    println!("{} {}", "✖".red(), message.white());
}

/// Print a lint diagnostic line in yellow, without any marker prefix
///
/// Diagnostic lines from the linter already carry their own markers.
pub fn diagnostic(message: &str) {
    println!("{}", message.yellow());
}

/// Print a dimmed detail line, e.g. a file path or a commit hash prefix
pub fn detail(message: &str) {
    println!("{}", message.bright_black());
}
