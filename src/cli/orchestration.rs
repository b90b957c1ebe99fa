//! Main workflow orchestration logic
//!
//! Separates CLI argument parsing from the resolution workflow so it can be
//! called programmatically without depending on clap.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::{self, Config};
use crate::diagnostics::DiagnosticSink;
use crate::domain::{BranchSignals, OptionOverrides, PlatformVersion};
use crate::git::{Git2Repository, Repository};
use crate::resolver::VersionResolver;

/// Which renderings to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rendering {
    #[default]
    Build,
    Publish,
    Both,
}

/// Arguments for the resolve workflow
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolveArgs {
    /// Path to custom config file
    pub config_path: Option<String>,

    /// Directory to start repository discovery from
    pub start_dir: PathBuf,

    /// Platform identifier; overrides the config file
    pub platform_version: Option<String>,

    pub overrides: OptionOverrides,

    pub rendering: Rendering,
}

/// Result of a successful resolve workflow
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveOutcome {
    /// Build rendering, when requested
    pub version: Option<String>,

    /// Publish rendering, when requested
    pub publish_version: Option<String>,

    /// Whether a git repository was found
    pub repository_found: bool,
}

/// Load configuration and resolve the requested renderings.
///
/// Configuration errors and an unresolvable detached HEAD are returned as
/// errors; a missing repository still yields the fallback version.
pub fn run_resolve(
    args: &ResolveArgs,
    signals: &dyn BranchSignals,
    sink: &dyn DiagnosticSink,
) -> Result<ResolveOutcome> {
    let config = config::load_config(args.config_path.as_deref())
        .context("Failed to load configuration")?;
    resolve_with_config(args, config, signals, sink)
}

/// Same as [`run_resolve`] with an already loaded configuration
pub fn resolve_with_config(
    args: &ResolveArgs,
    config: Config,
    signals: &dyn BranchSignals,
    sink: &dyn DiagnosticSink,
) -> Result<ResolveOutcome> {
    let platform_identifier = args
        .platform_version
        .clone()
        .or(config.platform_version)
        .context("No platform version given on the command line or in the config file")?;
    let platform = PlatformVersion::new(platform_identifier);
    let options = config.version.merge(args.overrides.clone());

    let repo = match Git2Repository::discover(&args.start_dir) {
        Ok(repo) => Some(repo),
        Err(e) => {
            log::debug!("repository discovery failed: {}", e);
            None
        }
    };
    let repository_found = repo.is_some();

    let resolver = VersionResolver::new(
        repo.as_ref().map(|r| r as &dyn Repository),
        signals,
        platform,
        options,
        sink,
    );

    let version = match args.rendering {
        Rendering::Build | Rendering::Both => Some(resolver.version()?.to_string()),
        Rendering::Publish => None,
    };
    let publish_version = match args.rendering {
        Rendering::Publish | Rendering::Both => Some(resolver.publish_version()?.to_string()),
        Rendering::Build => None,
    };

    Ok(ResolveOutcome {
        version,
        publish_version,
        repository_found,
    })
}
