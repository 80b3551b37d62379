//! Branch name -> release version resolution
//!
//! Three steps, each of which may end the process early:
//! 1. strip a recognized prefix (`v` or `release/`), or pass the branch through
//! 2. match the short-form grammar, or pass the stripped remainder through
//! 3. reassemble the match into `MAJOR.MINOR.MICRO[-KIND.VALUE]`
//!
//! Passthrough is never an error. The only failure is an empty branch name.

use crate::config::ResolverConfig;
use crate::domain::{BranchName, ParsedVersion};
use crate::error::Result;

/// Outcome of resolving one branch name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No recognized prefix; the trimmed branch name
    Unprefixed(String),
    /// Prefix stripped but the remainder is not a short-form version
    Unmatched(String),
    /// Short-form version, reassembled into canonical form
    Normalized {
        parsed: ParsedVersion,
        version: String,
    },
}

impl Resolution {
    /// The final version string
    pub fn version(&self) -> &str {
        match self {
            Resolution::Unprefixed(v) | Resolution::Unmatched(v) => v,
            Resolution::Normalized { version, .. } => version,
        }
    }

    pub fn into_version(self) -> String {
        match self {
            Resolution::Unprefixed(v) | Resolution::Unmatched(v) => v,
            Resolution::Normalized { version, .. } => version,
        }
    }

    pub fn is_normalized(&self) -> bool {
        matches!(self, Resolution::Normalized { .. })
    }

    /// SemVer view of a normalized result; `None` for passthrough results
    pub fn semver(&self) -> Option<semver::Version> {
        match self {
            Resolution::Normalized { version, .. } => semver::Version::parse(version).ok(),
            _ => None,
        }
    }
}

/// Resolves branch names using a fixed set of rules
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Resolver { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `branch` into a version.
    ///
    /// # Errors
    /// `InvalidArgument` if `branch` is empty or whitespace-only.
    pub fn resolve(&self, branch: &str) -> Result<Resolution> {
        let branch = BranchName::new(branch)?;

        let Some(stripped) = branch.strip_prefix(self.config.prefixes.as_slice()) else {
            tracing::debug!(%branch, "no recognized prefix, passing through");
            return Ok(Resolution::Unprefixed(branch.as_str().to_string()));
        };

        let Some(parsed) = ParsedVersion::parse(stripped) else {
            tracing::debug!(%branch, stripped, "not a short-form version, passing through");
            return Ok(Resolution::Unmatched(stripped.to_string()));
        };

        let version = parsed.render(&self.config.prerelease_names);
        tracing::debug!(%branch, %version, "normalized short-form version");
        Ok(Resolution::Normalized { parsed, version })
    }
}

/// Resolve `branch` with the built-in rules and return the version string
///
/// # Example
/// ```
/// assert_eq!(determine_version::resolve("v1.2a3").unwrap(), "1.2.0-alpha.3");
/// assert_eq!(determine_version::resolve("feature/foo").unwrap(), "feature/foo");
/// ```
pub fn resolve(branch: &str) -> Result<String> {
    Resolver::default()
        .resolve(branch)
        .map(Resolution::into_version)
}
