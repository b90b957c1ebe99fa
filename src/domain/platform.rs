use std::fmt;

/// Base version of the target platform, leading every rendered version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformVersion(String);

impl PlatformVersion {
    /// Keep only the part before the first `-`, e.g. `"1.12.2-14.23.5"` -> `"1.12.2"`
    pub fn new(identifier: impl AsRef<str>) -> Self {
        let identifier = identifier.as_ref();
        let base = identifier.split('-').next().unwrap_or(identifier);
        PlatformVersion(base.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// String-prefix check used to compare against `MC_` branch names
    pub fn starts_with_version(&self, version: &str) -> bool {
        self.0.starts_with(version)
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
