use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use mc_git_version::cli::{run_resolve, Rendering, ResolveArgs};
use mc_git_version::diagnostics::{DiagnosticSink, LogSink};
use mc_git_version::domain::{OptionOverrides, ProcessEnv};
use mc_git_version::ui::{self, TerminalSink};
use mc_git_version::McVersionError;

#[derive(clap::Parser)]
#[command(
    name = "mc-git-version",
    version,
    about = "Derive a build version from git describe output and the current branch"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, default_value = ".", help = "Directory to search for a git repository")]
    dir: PathBuf,

    #[arg(short, long, help = "Platform version, e.g. 1.12.2-14.23.5.2847")]
    platform_version: Option<String>,

    #[arg(short, long, help = "Suffix inserted before the branch qualifier")]
    suffix: Option<String>,

    #[arg(long, help = "Append -SNAPSHOT to the version")]
    snapshot: bool,

    #[arg(long, help = "Use this version verbatim instead of deriving one")]
    force_version: Option<String>,

    #[arg(long, conflicts_with = "both", help = "Print the publish version instead of the build version")]
    publish: bool,

    #[arg(long, help = "Print both the build and publish versions")]
    both: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

impl Args {
    fn into_resolve_args(self) -> ResolveArgs {
        let rendering = if self.both {
            Rendering::Both
        } else if self.publish {
            Rendering::Publish
        } else {
            Rendering::Build
        };

        ResolveArgs {
            config_path: self.config,
            start_dir: self.dir,
            platform_version: self.platform_version,
            overrides: OptionOverrides {
                version_suffix: self.suffix,
                snapshot: self.snapshot.then_some(true),
                force_version_string: self.force_version,
            },
            rendering,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Styled output for interactive use, plain log lines when piped or in CI.
    let sink: &dyn DiagnosticSink = if console::Term::stderr().is_term() {
        &TerminalSink
    } else {
        &LogSink
    };

    let resolve_args = args.into_resolve_args();
    let outcome = match run_resolve(&resolve_args, &ProcessEnv, sink) {
        Ok(outcome) => outcome,
        Err(e) => {
            if let Some(McVersionError::DetachedHead { .. }) = e.downcast_ref::<McVersionError>() {
                ui::display_error("Refusing to build from an unknown branch");
            }
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    if !outcome.repository_found {
        ui::display_status("No git repository found, using fallback version");
    }

    match (outcome.version, outcome.publish_version) {
        (Some(version), Some(publish)) => {
            ui::display_version(Some("version"), &version);
            ui::display_version(Some("publish"), &publish);
        }
        (Some(version), None) | (None, Some(version)) => ui::display_version(None, &version),
        (None, None) => {}
    }

    Ok(())
}
