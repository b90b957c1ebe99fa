use serde::{Deserialize, Serialize};

/// User overrides applied to every resolved version.
///
/// Built once, before resolution, through [`VersionOptions::builder`].
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct VersionOptions {
    /// Inserted after the version and before the branch suffix
    #[serde(default)]
    pub version_suffix: String,

    /// Append `-SNAPSHOT` to the final string
    #[serde(default)]
    pub snapshot: bool,

    /// Returned verbatim instead of deriving anything from git
    #[serde(default)]
    pub force_version_string: Option<String>,
}

impl VersionOptions {
    pub fn builder() -> VersionOptionsBuilder {
        VersionOptionsBuilder::default()
    }

    /// Layer `overrides` on top of `self`; set fields in `overrides` win
    pub fn merge(self, overrides: OptionOverrides) -> Self {
        VersionOptions {
            version_suffix: overrides.version_suffix.unwrap_or(self.version_suffix),
            snapshot: overrides.snapshot.unwrap_or(self.snapshot),
            force_version_string: overrides
                .force_version_string
                .or(self.force_version_string),
        }
    }
}

/// Builder for [`VersionOptions`]
#[derive(Debug, Default, Clone)]
pub struct VersionOptionsBuilder {
    options: VersionOptions,
}

impl VersionOptionsBuilder {
    pub fn version_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.options.version_suffix = suffix.into();
        self
    }

    pub fn snapshot(mut self, snapshot: bool) -> Self {
        self.options.snapshot = snapshot;
        self
    }

    pub fn force_version_string(mut self, version: impl Into<String>) -> Self {
        self.options.force_version_string = Some(version.into());
        self
    }

    pub fn build(self) -> VersionOptions {
        self.options
    }
}

/// Partially specified options, e.g. from command-line flags
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OptionOverrides {
    pub version_suffix: Option<String>,
    pub snapshot: Option<bool>,
    pub force_version_string: Option<String>,
}
