use crate::error::{DetermineVersionError, Result};

/// Branch name as passed by the caller, trimmed and guaranteed non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchName {
    name: String,
}

impl BranchName {
    /// Trim surrounding whitespace; an empty result is an invalid argument
    pub fn new(raw: &str) -> Result<Self> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(DetermineVersionError::InvalidArgument);
        }

        Ok(BranchName {
            name: name.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Strip the first matching prefix from `prefixes`.
    ///
    /// Returns `None` when no prefix matches. Only one prefix is ever removed,
    /// so `vv1.0` strips to `v1.0`.
    pub fn strip_prefix<'a, S: AsRef<str>>(&'a self, prefixes: &[S]) -> Option<&'a str> {
        prefixes
            .iter()
            .find_map(|prefix| self.name.strip_prefix(prefix.as_ref()))
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIXES: &[&str] = &["v", "release/"];

    #[test]
    fn test_trims_whitespace() {
        let branch = BranchName::new("  v1.2.3\n").unwrap();
        assert_eq!(branch.as_str(), "v1.2.3");
    }

    #[test]
    fn test_empty_is_invalid_argument() {
        for raw in ["", "   ", "\t\n"] {
            let err = BranchName::new(raw).unwrap_err();
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn test_strip_v_prefix() {
        let branch = BranchName::new("v1.2.3").unwrap();
        assert_eq!(branch.strip_prefix(PREFIXES), Some("1.2.3"));
    }

    #[test]
    fn test_strip_release_prefix() {
        let branch = BranchName::new("release/2.0").unwrap();
        assert_eq!(branch.strip_prefix(PREFIXES), Some("2.0"));
    }

    #[test]
    fn test_only_one_prefix_stripped() {
        let branch = BranchName::new("vv1.0").unwrap();
        assert_eq!(branch.strip_prefix(PREFIXES), Some("v1.0"));

        let branch = BranchName::new("release/v1.0").unwrap();
        assert_eq!(branch.strip_prefix(PREFIXES), Some("v1.0"));
    }

    #[test]
    fn test_any_word_starting_with_v_is_stripped() {
        let branch = BranchName::new("very-long-branch").unwrap();
        assert_eq!(branch.strip_prefix(PREFIXES), Some("ery-long-branch"));
    }

    #[test]
    fn test_no_prefix() {
        for raw in ["feature/foo", "main", "V1.2.3", "releases/1.0", "1.2.3"] {
            let branch = BranchName::new(raw).unwrap();
            assert_eq!(branch.strip_prefix(PREFIXES), None, "{}", raw);
        }
    }

    #[test]
    fn test_prefix_only_leaves_empty_remainder() {
        let branch = BranchName::new("release/").unwrap();
        assert_eq!(branch.strip_prefix(PREFIXES), Some(""));
    }
}
