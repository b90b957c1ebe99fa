pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod git;
pub mod resolver;
pub mod ui;

pub use error::{McVersionError, Result};
pub use resolver::{resolve_version, Derivation, VersionResolver};
