use crate::error::{McVersionError, Result};
use crate::git::Repository;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    describe: Option<String>,
    branch: Option<String>,
    describe_calls: AtomicUsize,
}

impl MockRepository {
    /// Repository at `describe` on `branch`
    pub fn new(describe: impl Into<String>, branch: impl Into<String>) -> Self {
        MockRepository {
            describe: Some(describe.into()),
            branch: Some(branch.into()),
            describe_calls: AtomicUsize::new(0),
        }
    }

    /// Repository with no reachable tag
    pub fn untagged(branch: impl Into<String>) -> Self {
        MockRepository {
            describe: None,
            branch: Some(branch.into()),
            describe_calls: AtomicUsize::new(0),
        }
    }

    /// How many times `describe` has been called
    pub fn describe_calls(&self) -> usize {
        self.describe_calls.load(Ordering::SeqCst)
    }
}

impl Repository for MockRepository {
    fn describe(&self) -> Result<String> {
        self.describe_calls.fetch_add(1, Ordering::SeqCst);
        self.describe
            .clone()
            .ok_or_else(|| McVersionError::describe("No annotated tag reachable"))
    }

    fn current_branch(&self) -> Result<String> {
        self.branch
            .clone()
            .ok_or_else(|| McVersionError::describe("HEAD is unborn"))
    }
}
