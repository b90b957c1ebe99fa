use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^v[0-9]+\.[0-9]+$").expect("tag pattern is valid"));
static COUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("count pattern is valid"));

/// Reasons a describe string is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescribeError {
    #[error("describe output is empty")]
    Empty,

    #[error("tag '{0}' does not match vMAJOR.MINOR")]
    BadTag(String),

    #[error("commit count '{0}' is not a non-negative integer")]
    BadCommitCount(String),
}

/// Validated `git describe` output.
///
/// Accepts `vX.Y` (the tag itself is checked out) and `vX.Y-N-g<hash>`
/// (N commits on top of the tag). Anything after the count is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeInfo {
    /// Tag without the leading `v`, e.g. `"1.2"`
    pub mod_version: String,
    pub commits_since_tag: u64,
}

impl DescribeInfo {
    pub fn parse(raw: &str) -> Result<Self, DescribeError> {
        if raw.is_empty() {
            return Err(DescribeError::Empty);
        }

        if !raw.contains('-') {
            return Ok(DescribeInfo {
                mod_version: Self::parse_tag(raw)?,
                commits_since_tag: 0,
            });
        }

        let mut segments = raw.split('-');
        let tag = segments.next().unwrap_or_default();
        let count = segments.next().unwrap_or_default();

        let mod_version = Self::parse_tag(tag)?;
        if !COUNT_PATTERN.is_match(count) {
            return Err(DescribeError::BadCommitCount(count.to_string()));
        }
        let commits_since_tag = count
            .parse::<u64>()
            .map_err(|_| DescribeError::BadCommitCount(count.to_string()))?;

        Ok(DescribeInfo {
            mod_version,
            commits_since_tag,
        })
    }

    fn parse_tag(tag: &str) -> Result<String, DescribeError> {
        if !TAG_PATTERN.is_match(tag) {
            return Err(DescribeError::BadTag(tag.to_string()));
        }
        Ok(tag[1..].to_string())
    }

    /// Build count since the tag; rendered as the third version component
    pub fn minor(&self) -> u64 {
        self.commits_since_tag
    }

    /// Never derived from describe output
    pub fn patch(&self) -> u64 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_tag() {
        let info = DescribeInfo::parse("v1.2").unwrap();
        assert_eq!(info.mod_version, "1.2");
        assert_eq!(info.minor(), 0);
        assert_eq!(info.patch(), 0);
    }

    #[test]
    fn test_commits_since_tag() {
        let info = DescribeInfo::parse("v0.10-15-gabc1234").unwrap();
        assert_eq!(info.mod_version, "0.10");
        assert_eq!(info.minor(), 15);
        assert_eq!(info.patch(), 0);
    }

    #[test]
    fn test_trailing_segments_ignored() {
        let info = DescribeInfo::parse("v3.4-2-gdeadbee-dirty").unwrap();
        assert_eq!(info.mod_version, "3.4");
        assert_eq!(info.minor(), 2);

        let info = DescribeInfo::parse("v3.4-7").unwrap();
        assert_eq!(info.minor(), 7);
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(
            DescribeInfo::parse("garbage"),
            Err(DescribeError::BadTag("garbage".to_string()))
        );
        assert_eq!(DescribeInfo::parse(""), Err(DescribeError::Empty));
    }

    #[test]
    fn test_rejects_bad_tag_shapes() {
        for raw in ["1.2", "v1", "v1.2.3", "V1.2", "v1.x", "v.2", " v1.2", "v1.2 "] {
            assert!(
                matches!(DescribeInfo::parse(raw), Err(DescribeError::BadTag(_))),
                "expected '{}' to be rejected",
                raw
            );
        }
        for raw in ["v\u{0661}.\u{0662}", "v\u{FF11}.\u{FF12}-3-gabc"] {
            assert!(
                matches!(DescribeInfo::parse(raw), Err(DescribeError::BadTag(_))),
                "expected non-ASCII digits in '{}' to be rejected",
                raw
            );
        }
        assert!(matches!(
            DescribeInfo::parse("release-3-gabc"),
            Err(DescribeError::BadTag(_))
        ));
    }

    #[test]
    fn test_rejects_bad_count() {
        assert_eq!(
            DescribeInfo::parse("v1.2-abc-gdef"),
            Err(DescribeError::BadCommitCount("abc".to_string()))
        );
        assert_eq!(
            DescribeInfo::parse("v1.2-"),
            Err(DescribeError::BadCommitCount(String::new()))
        );
        assert_eq!(
            DescribeInfo::parse("v1.2-\u{0663}-gabc"),
            Err(DescribeError::BadCommitCount("\u{0663}".to_string()))
        );
        assert!(matches!(
            DescribeInfo::parse("v1.2-99999999999999999999999-gabc"),
            Err(DescribeError::BadCommitCount(_))
        ));
    }
}
