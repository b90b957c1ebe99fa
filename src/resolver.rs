//! Version string derivation.
//!
//! A resolution runs in two stages. [`derive`] gathers everything that needs
//! the repository or reports diagnostics, producing a [`Derivation`]. Then
//! [`Derivation::render`] formats either the build or the publish string from
//! it without side effects. [`VersionResolver`] caches both stages so one
//! build queries git at most once.

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::domain::{BranchContext, BranchSignals, DescribeInfo, PlatformVersion, VersionOptions};
use crate::error::{McVersionError, Result};
use crate::git::Repository;
use once_cell::unsync::OnceCell;

/// Placeholder used when describe output cannot be parsed
pub const UNKNOWN_VERSION: &str = "UNKNOWN_VERSION";

/// Version used when the repository cannot be read at all
pub const NO_VERSION: &str = "9999.9999.9999NOVERSION";

pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Outcome of inspecting the repository, before rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Derivation {
    /// `force_version_string` was set; git was never consulted
    Forced(String),
    /// Repository missing or unreadable
    Unavailable,
    /// Describe output rejected
    Malformed { branch: BranchContext },
    Valid {
        describe: DescribeInfo,
        branch: BranchContext,
    },
}

impl Derivation {
    /// Format the final version string.
    ///
    /// `publish` selects the registry form, which drops the build count and
    /// branch qualifier.
    pub fn render(&self, platform: &PlatformVersion, options: &VersionOptions, publish: bool) -> String {
        let suffix = &options.version_suffix;
        let mut version = match self {
            Derivation::Forced(forced) => forced.clone(),
            Derivation::Unavailable => return format!("{}-{}", platform, NO_VERSION),
            Derivation::Malformed { branch } => {
                format!("{}-{}{}{}", platform, UNKNOWN_VERSION, suffix, branch.suffix())
            }
            Derivation::Valid { describe, .. } if publish => {
                format!("{}-{}{}", platform, describe.mod_version, suffix)
            }
            Derivation::Valid { describe, branch } => format!(
                "{}-{}.{}.{}{}{}",
                platform,
                describe.mod_version,
                describe.minor(),
                describe.patch(),
                suffix,
                branch.suffix()
            ),
        };

        if options.snapshot {
            version.push_str(SNAPSHOT_SUFFIX);
        }
        version
    }
}

/// Inspect the repository and apply the override, branch and describe rules.
///
/// `repo` is `None` when no repository could be opened. Only an unresolvable
/// detached HEAD is returned as an error; every other failure is reported to
/// `sink` and folded into the result.
pub fn derive(
    repo: Option<&dyn Repository>,
    signals: &dyn BranchSignals,
    platform: &PlatformVersion,
    options: &VersionOptions,
    sink: &dyn DiagnosticSink,
) -> Result<Derivation> {
    if let Some(forced) = &options.force_version_string {
        log::debug!("using forced version '{}'", forced);
        return Ok(Derivation::Forced(forced.clone()));
    }

    let Some(repo) = repo else {
        sink.report(&Diagnostic::RepositoryUnavailable {
            reason: "no git repository found".to_string(),
        });
        return Ok(Derivation::Unavailable);
    };

    let raw_branch = match repo.current_branch() {
        Ok(branch) => branch,
        Err(e) => {
            sink.report(&Diagnostic::RepositoryUnavailable {
                reason: e.to_string(),
            });
            return Ok(Derivation::Unavailable);
        }
    };
    let branch = BranchContext::resolve(&raw_branch, signals)?;

    let describe = match repo.describe() {
        Ok(describe) => describe,
        Err(e) => {
            sink.report(&Diagnostic::RepositoryUnavailable {
                reason: e.to_string(),
            });
            return Ok(Derivation::Unavailable);
        }
    };

    Ok(derive_from(&describe, branch, platform, sink))
}

/// Validate `describe` for an already resolved branch
pub fn derive_from(
    describe: &str,
    branch: BranchContext,
    platform: &PlatformVersion,
    sink: &dyn DiagnosticSink,
) -> Derivation {
    log::debug!("describe '{}' on branch '{}'", describe, branch.name);

    if let Some(branch_version) = branch.platform_hint() {
        if !platform.starts_with_version(branch_version) {
            sink.report(&Diagnostic::BranchVersionMismatch {
                branch_version: branch_version.to_string(),
                platform_version: platform.to_string(),
            });
        }
    }

    match DescribeInfo::parse(describe) {
        Ok(describe) => Derivation::Valid { describe, branch },
        Err(e) => {
            sink.report(&Diagnostic::MalformedDescribe {
                describe: describe.to_string(),
                reason: e.to_string(),
            });
            Derivation::Malformed { branch }
        }
    }
}

/// One-shot resolution without caching
pub fn resolve_version(
    repo: Option<&dyn Repository>,
    signals: &dyn BranchSignals,
    platform: &PlatformVersion,
    options: &VersionOptions,
    publish: bool,
    sink: &dyn DiagnosticSink,
) -> Result<String> {
    let derivation = derive(repo, signals, platform, options, sink)?;
    Ok(derivation.render(platform, options, publish))
}

/// Resolution context for a single build.
///
/// The repository is queried on first access and both renderings are
/// computed at most once; later calls return the cached strings.
pub struct VersionResolver<'a> {
    repo: Option<&'a dyn Repository>,
    signals: &'a dyn BranchSignals,
    platform: PlatformVersion,
    options: VersionOptions,
    sink: &'a dyn DiagnosticSink,
    derivation: OnceCell<Derivation>,
    build_version: OnceCell<String>,
    publish_version: OnceCell<String>,
}

impl<'a> VersionResolver<'a> {
    pub fn new(
        repo: Option<&'a dyn Repository>,
        signals: &'a dyn BranchSignals,
        platform: PlatformVersion,
        options: VersionOptions,
        sink: &'a dyn DiagnosticSink,
    ) -> Self {
        VersionResolver {
            repo,
            signals,
            platform,
            options,
            sink,
            derivation: OnceCell::new(),
            build_version: OnceCell::new(),
            publish_version: OnceCell::new(),
        }
    }

    pub fn platform(&self) -> &PlatformVersion {
        &self.platform
    }

    pub fn options(&self) -> &VersionOptions {
        &self.options
    }

    /// Cached repository inspection
    pub fn derivation(&self) -> Result<&Derivation> {
        self.derivation.get_or_try_init(|| {
            derive(
                self.repo,
                self.signals,
                &self.platform,
                &self.options,
                self.sink,
            )
        })
    }

    /// Build rendering, branch-qualified
    pub fn version(&self) -> Result<&str> {
        self.build_version
            .get_or_try_init(|| {
                let version = self
                    .derivation()?
                    .render(&self.platform, &self.options, false);
                log::info!("Auto-detected version {}", version);
                Ok::<_, McVersionError>(version)
            })
            .map(String::as_str)
    }

    /// Publish rendering, for package registry coordinates
    pub fn publish_version(&self) -> Result<&str> {
        self.publish_version
            .get_or_try_init(|| {
                let version = self
                    .derivation()?
                    .render(&self.platform, &self.options, true);
                log::info!("Auto-detected publish version {}", version);
                Ok::<_, McVersionError>(version)
            })
            .map(String::as_str)
    }

    /// Either rendering, selected by `publish`
    pub fn resolve(&self, publish: bool) -> Result<&str> {
        if publish {
            self.publish_version()
        } else {
            self.version()
        }
    }
}
