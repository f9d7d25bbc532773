//! Commit message assembly and local subject validation
//!
//! The wizard builds exactly one [`CommitMessage`] per run, from the
//! commit type the user selected and the free-text subject they entered.
//! Subject validation here is local and synchronous; the full lint rules
//! live in the [`crate::lint`] module.

use std::fmt;

/// Minimum subject length in characters, checked after trimming
pub const MIN_SUBJECT_LENGTH: usize = 3;

/// A conventional commit message: `<type>: <subject>`
///
/// Immutable once constructed. The subject is trimmed at construction
/// time so serialization never carries leading or trailing whitespace.
///
/// # Example
///
/// ```
/// use commit_wizard::message::CommitMessage;
///
/// let message = CommitMessage::new("feat", "  add login  ");
/// assert_eq!(message.to_string(), "feat: add login");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    commit_type: String,
    subject: String,
}

impl CommitMessage {
    /// Build a message from a commit type token and a raw subject
    ///
    /// The subject is trimmed here; callers are expected to have run
    /// [`validate_subject`] on the raw input first.
    pub fn new(commit_type: &str, subject: &str) -> Self {
        Self {
            commit_type: commit_type.to_string(),
            subject: subject.trim().to_string(),
        }
    }

    /// The commit type token, e.g. `feat`
    pub fn commit_type(&self) -> &str {
        &self.commit_type
    }

    /// The trimmed subject text
    pub fn subject(&self) -> &str {
        &self.subject
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.commit_type, self.subject)
    }
}

/// Validate a raw subject entered at the prompt
///
/// Rejects input that is empty after trimming or shorter than
/// [`MIN_SUBJECT_LENGTH`] characters. The returned error text is shown
/// verbatim by the prompt backend, which then re-prompts.
///
/// # Example
///
/// ```
/// use commit_wizard::message::validate_subject;
///
/// assert!(validate_subject("add login form").is_ok());
/// assert!(validate_subject("   ").is_err());
/// ```
pub fn validate_subject(input: &str) -> Result<(), String> {
    let subject = input.trim();

    if subject.is_empty() {
        return Err("Message cannot be empty!".to_string());
    }

    if subject.chars().count() < MIN_SUBJECT_LENGTH {
        return Err("Message too short!".to_string());
    }

    Ok(())
}
