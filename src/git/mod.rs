//! Git access abstraction layer
//!
//! Version resolution needs exactly two facts from version control: the
//! `git describe` output for the current commit and the current branch name.
//! The [Repository] trait exposes those, so the resolver can run against a
//! real repository or a mock.
//!
//! - [repository::Git2Repository]: backed by the `git2` crate
//! - [mock::MockRepository]: in-memory implementation for testing
//!
//! ```rust
//! # use mc_git_version::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let describe = repo.describe()?;
//! let branch = repo.current_branch()?;
//! println!("{} on {}", describe, branch);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Read-only view of the repository used during version resolution
///
/// ## Error Handling
///
/// Any error returned here makes the resolver fall back to the
/// "no version" string; implementations should not try to recover themselves.
pub trait Repository: Send + Sync {
    /// Describe HEAD relative to the nearest annotated tag
    ///
    /// # Returns
    /// * `Ok("v1.2")` - HEAD is the tagged commit
    /// * `Ok("v1.2-5-gabc1234")` - HEAD is 5 commits past the tag
    /// * `Err` - No tag is reachable or there's a Git error
    fn describe(&self) -> Result<String>;

    /// Short name of the checked out branch, `"HEAD"` when detached
    fn current_branch(&self) -> Result<String>;
}
