use crate::error::{McVersionError, Result};
use git2::{DescribeFormatOptions, DescribeOptions, Repository as Git2Repo};
use std::path::Path;

/// Abbreviated commit hash length in describe output, matching `git describe`
const ABBREV_LENGTH: u32 = 7;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the repository containing `start`, walking up to the filesystem root
    pub fn discover<P: AsRef<Path>>(start: P) -> Result<Self> {
        let start = std::fs::canonicalize(start.as_ref())?;

        for dir in start.ancestors() {
            match Git2Repo::open(dir) {
                Ok(repo) => {
                    log::debug!("opened git repository at {}", dir.display());
                    return Ok(Git2Repository { repo });
                }
                Err(e) => log::trace!("no repository at {}: {}", dir.display(), e),
            }
        }

        Err(McVersionError::RepositoryNotFound { path: start })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn describe(&self) -> Result<String> {
        let describe = self
            .repo
            .describe(&DescribeOptions::new())
            .map_err(|e| McVersionError::describe(format!("No annotated tag reachable: {}", e)))?;

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(ABBREV_LENGTH);

        Ok(describe.format(Some(&format))?)
    }

    fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;
        let name = head
            .shorthand()
            .ok_or_else(|| McVersionError::describe("HEAD name is not valid UTF-8"))?;
        Ok(name.to_string())
    }
}

// SAFETY: Git2Repository only performs read operations, and libgit2 allows a
// repository handle to be read from multiple threads.
unsafe impl Sync for Git2Repository {}
