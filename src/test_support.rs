//! Scripted mock collaborators for staging and workflow tests
//!
//! Each mock answers from a queue filled by the test and records the
//! calls it received, so every state transition of the workflow can be
//! asserted without a terminal, a git repository, or a linter binary.

use anyhow::Result;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use crate::git::{RepoStatus, VersionControl};
use crate::lint::{Linter, ValidationResult};
use crate::prompt::{PromptSession, TextValidator};

/// Version-control mock with scripted status snapshots
#[derive(Default)]
pub struct MockVcs {
    pub statuses: RefCell<VecDeque<Result<RepoStatus>>>,
    pub stage_all_calls: Cell<usize>,
    pub stage_calls: RefCell<Vec<Vec<String>>>,
    pub committed: RefCell<Vec<String>>,
    pub fail_commit: Cell<bool>,
}

impl MockVcs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_status(&self, status: Result<RepoStatus>) {
        self.statuses.borrow_mut().push_back(status);
    }

    /// Total staging mutations performed, of either kind
    pub fn staging_mutations(&self) -> usize {
        self.stage_all_calls.get() + self.stage_calls.borrow().len()
    }
}

impl VersionControl for MockVcs {
    fn status(&self) -> Result<RepoStatus> {
        self.statuses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(RepoStatus::default()))
    }

    fn stage_all(&self) -> Result<()> {
        self.stage_all_calls.set(self.stage_all_calls.get() + 1);
        Ok(())
    }

    fn stage(&self, files: &[String]) -> Result<()> {
        self.stage_calls.borrow_mut().push(files.to_vec());
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<String> {
        if self.fail_commit.get() {
            anyhow::bail!("pre-commit hook rejected the commit");
        }
        self.committed.borrow_mut().push(message.to_string());
        Ok("0123456789abcdef0123456789abcdef01234567".to_string())
    }
}

/// Prompt mock answering from per-kind queues
///
/// `text` pops scripted answers until the validator accepts one, which
/// mirrors the re-prompting behavior of the real backend.
#[derive(Default)]
pub struct MockPrompt {
    pub selects: RefCell<VecDeque<Option<usize>>>,
    pub multi_selects: RefCell<VecDeque<Vec<usize>>>,
    pub texts: RefCell<VecDeque<String>>,
    pub confirms: RefCell<VecDeque<bool>>,
}

impl MockPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_select(&self, answer: Option<usize>) {
        self.selects.borrow_mut().push_back(answer);
    }

    pub fn push_multi_select(&self, answer: Vec<usize>) {
        self.multi_selects.borrow_mut().push_back(answer);
    }

    pub fn push_text(&self, answer: &str) {
        self.texts.borrow_mut().push_back(answer.to_string());
    }

    pub fn push_confirm(&self, answer: bool) {
        self.confirms.borrow_mut().push_back(answer);
    }
}

impl PromptSession for MockPrompt {
    fn select(&self, _message: &str, _items: &[String]) -> Result<Option<usize>> {
        Ok(self
            .selects
            .borrow_mut()
            .pop_front()
            .expect("select prompt not scripted"))
    }

    fn multi_select(&self, _message: &str, _items: &[String]) -> Result<Vec<usize>> {
        Ok(self
            .multi_selects
            .borrow_mut()
            .pop_front()
            .expect("multi-select prompt not scripted"))
    }

    fn text(&self, _message: &str, validate: TextValidator) -> Result<Option<String>> {
        let mut queue = self.texts.borrow_mut();
        while let Some(candidate) = queue.pop_front() {
            if validate(&candidate).is_ok() {
                return Ok(Some(candidate));
            }
        }
        panic!("text prompt ran out of scripted answers before one validated");
    }

    fn confirm(&self, _message: &str, _default: bool) -> Result<bool> {
        Ok(self
            .confirms
            .borrow_mut()
            .pop_front()
            .expect("confirm prompt not scripted"))
    }
}

/// Linter mock returning a fixed result and recording messages seen
pub struct MockLinter {
    pub result: ValidationResult,
    pub seen: RefCell<Vec<String>>,
}

impl MockLinter {
    pub fn passing() -> Self {
        Self {
            result: ValidationResult::valid(),
            seen: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(diagnostics: Vec<String>) -> Self {
        Self {
            result: ValidationResult::invalid(diagnostics),
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl Linter for MockLinter {
    fn validate(&self, message: &str) -> ValidationResult {
        self.seen.borrow_mut().push(message.to_string());
        self.result.clone()
    }
}
