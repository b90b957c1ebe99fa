//! Domain logic - pure version rules independent of git operations

pub mod branch;
pub mod describe;
pub mod options;
pub mod platform;

pub use branch::{BranchContext, BranchSignals, ProcessEnv, CI_BRANCH_SIGNALS, DETACHED_HEAD};
pub use describe::{DescribeError, DescribeInfo};
pub use options::{OptionOverrides, VersionOptions, VersionOptionsBuilder};
pub use platform::PlatformVersion;
