use crate::error::{McVersionError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Branch name reported by git when HEAD is detached
pub const DETACHED_HEAD: &str = "HEAD";

/// Prefix of branches that track a specific platform version (e.g. `MC_1.12`)
pub const PLATFORM_BRANCH_PREFIX: &str = "MC_";

const REMOTE_PREFIX: &str = "origin/";
const RELEASE_BRANCH: &str = "master";

/// CI variables consulted, in order, when the checkout is a detached HEAD.
///
/// Travis, Jenkins, Jenkins multibranch, GitHub pull requests, GitHub pushes, GitLab.
pub const CI_BRANCH_SIGNALS: &[&str] = &[
    "TRAVIS_BRANCH",
    "GIT_BRANCH",
    "BRANCH_NAME",
    "GITHUB_HEAD_REF",
    "GITHUB_REF_NAME",
    "CI_COMMIT_REF_NAME",
];

static UNSAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9.\-]").expect("branch pattern is valid"));

/// Source of named branch hints, normally the process environment
pub trait BranchSignals {
    fn lookup(&self, name: &str) -> Option<String>;
}

/// Reads signals from `std::env`
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl BranchSignals for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl BranchSignals for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Normalized current branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub name: String,
}

impl BranchContext {
    /// Wrap an already resolved branch name, stripping an `origin/` prefix
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let name = match name.strip_prefix(REMOTE_PREFIX) {
            Some(stripped) => stripped.to_string(),
            None => name,
        };
        BranchContext { name }
    }

    /// Resolve the raw branch reported by the repository.
    ///
    /// A detached HEAD is replaced by the first non-empty value among
    /// [`CI_BRANCH_SIGNALS`]; if none is set the build has no usable branch
    /// and [`McVersionError::DetachedHead`] is returned.
    pub fn resolve(raw: &str, signals: &dyn BranchSignals) -> Result<Self> {
        if raw != DETACHED_HEAD {
            return Ok(Self::new(raw));
        }

        let substitute = CI_BRANCH_SIGNALS.iter().find_map(|signal| {
            signals
                .lookup(signal)
                .filter(|value| !value.is_empty())
                .map(|value| {
                    log::debug!("detached HEAD, using branch '{}' from {}", value, signal);
                    value
                })
        });

        match substitute {
            Some(branch) => Ok(Self::new(branch)),
            None => Err(McVersionError::DetachedHead {
                signals: CI_BRANCH_SIGNALS.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }

    /// Release builds carry no branch qualifier
    pub fn is_release_branch(&self) -> bool {
        self.name == RELEASE_BRANCH || self.name.starts_with(PLATFORM_BRANCH_PREFIX)
    }

    /// `""` for release branches, otherwise `-<branch>` with unsafe characters replaced by `_`
    pub fn suffix(&self) -> String {
        if self.is_release_branch() {
            return String::new();
        }
        format!("-{}", UNSAFE_CHARS.replace_all(&self.name, "_"))
    }

    /// Platform version named by an `MC_` branch, e.g. `"1.12"` for `MC_1.12`
    pub fn platform_hint(&self) -> Option<&str> {
        self.name.strip_prefix(PLATFORM_BRANCH_PREFIX)
    }
}
