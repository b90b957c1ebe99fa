use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for version resolution
#[derive(Error, Debug)]
pub enum McVersionError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("No git repository found in '{}' or any parent directory", .path.display())]
    RepositoryNotFound { path: PathBuf },

    #[error(
        "Current branch is detached HEAD and none of {} provided a branch name",
        .signals.join(", ")
    )]
    DetachedHead { signals: Vec<String> },

    #[error("Describe failed: {0}")]
    Describe(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in mc-git-version
pub type Result<T> = std::result::Result<T, McVersionError>;

impl McVersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        McVersionError::Config(msg.into())
    }

    /// Create a describe error with context
    pub fn describe(msg: impl Into<String>) -> Self {
        McVersionError::Describe(msg.into())
    }

    /// Whether this error must abort the caller instead of degrading to a fallback version
    pub fn is_fatal(&self) -> bool {
        matches!(self, McVersionError::DetachedHead { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = McVersionError::config("missing platform version");
        assert_eq!(
            err.to_string(),
            "Configuration error: missing platform version"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: McVersionError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_detached_head_lists_signals() {
        let err = McVersionError::DetachedHead {
            signals: vec!["TRAVIS_BRANCH".to_string(), "GIT_BRANCH".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("detached HEAD"));
        assert!(msg.contains("TRAVIS_BRANCH, GIT_BRANCH"));
    }

    #[test]
    fn test_repository_not_found_display() {
        let err = McVersionError::RepositoryNotFound {
            path: PathBuf::from("/tmp/nowhere"),
        };
        assert!(err.to_string().contains("/tmp/nowhere"));
    }

    #[test]
    fn test_only_detached_head_is_fatal() {
        assert!(McVersionError::DetachedHead { signals: vec![] }.is_fatal());
        assert!(!McVersionError::describe("no tags").is_fatal());
        assert!(!McVersionError::config("bad").is_fatal());
        assert!(!McVersionError::RepositoryNotFound {
            path: PathBuf::from(".")
        }
        .is_fatal());
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (McVersionError::config("x"), "Configuration error"),
            (McVersionError::describe("x"), "Describe failed"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
