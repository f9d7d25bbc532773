//! Interactive prompt boundary
//!
//! Three prompt kinds drive the wizard: single-select lists, free-text
//! input with a validator callback, and yes/no confirmations with a stated
//! default, plus a multi-select used for picking files to stage. The
//! [`PromptSession`] trait keeps the workflow testable with scripted
//! answers; [`TerminalPrompter`] is the production implementation on top
//! of `dialoguer`.

use anyhow::Result;
use dialoguer::{Confirm, Input, MultiSelect, Select};

/// Validator callback for free-text input
///
/// Returning `Err` makes the prompt display the message and re-ask.
pub type TextValidator<'a> = &'a dyn Fn(&str) -> Result<(), String>;

/// Boundary over the interactive prompt backend
///
/// `select` and `multi_select` answer with indices into the given items.
/// A `select` answer of `None` and an empty `multi_select` answer both
/// represent user cancellation.
pub trait PromptSession {
    fn select(&self, message: &str, items: &[String]) -> Result<Option<usize>>;

    fn multi_select(&self, message: &str, items: &[String]) -> Result<Vec<usize>>;

    fn text(&self, message: &str, validate: TextValidator) -> Result<Option<String>>;

    fn confirm(&self, message: &str, default: bool) -> Result<bool>;
}

/// Production prompt backend rendering to the terminal
pub struct TerminalPrompter;

impl PromptSession for TerminalPrompter {
    fn select(&self, message: &str, items: &[String]) -> Result<Option<usize>> {
        let choice = Select::new()
            .with_prompt(message)
            .items(items)
            .default(0)
            .interact_opt()?;
        Ok(choice)
    }

    fn multi_select(&self, message: &str, items: &[String]) -> Result<Vec<usize>> {
        let picked = MultiSelect::new()
            .with_prompt(message)
            .items(items)
            .interact_opt()?;
        // Escape is equivalent to selecting nothing
        Ok(picked.unwrap_or_default())
    }

    fn text(&self, message: &str, validate: TextValidator) -> Result<Option<String>> {
        let entered: String = Input::new()
            .with_prompt(message)
            .validate_with(|input: &String| validate(input))
            .interact_text()?;
        Ok(Some(entered))
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        let answer = Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()?;
        Ok(answer)
    }
}

// Note: TerminalPrompter is not unit-tested as it requires an interactive
// terminal. The workflow tests exercise the trait through scripted mocks.
