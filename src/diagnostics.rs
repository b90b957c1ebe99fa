//! Non-fatal conditions raised while deriving a version, and the sinks they are reported to.

use std::cell::RefCell;
use std::fmt;

/// How loudly a diagnostic should be reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// Conditions that degrade the resolved version without aborting resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Repository could not be opened or queried
    RepositoryUnavailable { reason: String },
    /// Describe output did not match `vX.Y` or `vX.Y-N-...`
    MalformedDescribe { describe: String, reason: String },
    /// An `MC_` branch names a platform version the build is not targeting
    BranchVersionMismatch {
        branch_version: String,
        platform_version: String,
    },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::BranchVersionMismatch { .. } => Severity::Warning,
            Diagnostic::RepositoryUnavailable { .. } | Diagnostic::MalformedDescribe { .. } => {
                Severity::Error
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::RepositoryUnavailable { reason } => {
                write!(f, "Git repository unavailable, using fallback version: {}", reason)
            }
            Diagnostic::MalformedDescribe { describe, reason } => {
                write!(
                    f,
                    "Describe output '{}' is not a valid version tag: {}",
                    describe, reason
                )
            }
            Diagnostic::BranchVersionMismatch {
                branch_version,
                platform_version,
            } => write!(
                f,
                "Branch targets version '{}' but building for '{}'",
                branch_version, platform_version
            ),
        }
    }
}

/// Receiver for diagnostics raised during resolution.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic.severity() {
            Severity::Warning => log::warn!(target: "mc_git_version", "{}", diagnostic),
            Severity::Error => log::error!(target: "mc_git_version", "{}", diagnostic),
        }
    }
}

/// Keeps every reported diagnostic in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    recorded: RefCell<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far, oldest first
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.recorded.borrow().clone()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.recorded
            .borrow()
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.recorded.borrow().is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.recorded.borrow_mut().push(diagnostic.clone());
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic)
    }
}
