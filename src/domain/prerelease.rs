//! Pre-release markers recognized in short-form branch names
//!
//! The grammar accepts exactly three markers (`a`, `b`, `rc`), written directly
//! after the version numbers with no separator, e.g. `1.2a3` or `1.0.0rc1`.

use crate::domain::version::VersionNumber;
use crate::error::{DetermineVersionError, Result};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Long name used when a marker has no entry in the lookup table
pub const FALLBACK_LONG_NAME: &str = "dev";

/// Pre-release kind as written in a branch name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreReleaseKind {
    /// `a`
    Alpha,
    /// `b`
    Beta,
    /// `rc`
    ReleaseCandidate,
}

impl PreReleaseKind {
    /// All kinds, in grammar order
    pub const ALL: [PreReleaseKind; 3] = [
        PreReleaseKind::Alpha,
        PreReleaseKind::Beta,
        PreReleaseKind::ReleaseCandidate,
    ];

    /// Short marker as it appears in a branch name
    pub fn marker(&self) -> &'static str {
        match self {
            PreReleaseKind::Alpha => "a",
            PreReleaseKind::Beta => "b",
            PreReleaseKind::ReleaseCandidate => "rc",
        }
    }

    /// Built-in long form used in normalized output
    pub fn long_name(&self) -> &'static str {
        match self {
            PreReleaseKind::Alpha => "alpha",
            PreReleaseKind::Beta => "beta",
            PreReleaseKind::ReleaseCandidate => "rc",
        }
    }

    /// Look up the long form in `names`, keyed by short marker.
    ///
    /// Markers missing from the table render as [`FALLBACK_LONG_NAME`].
    pub fn long_name_in<'a>(&self, names: &'a HashMap<String, String>) -> &'a str {
        names
            .get(self.marker())
            .map(String::as_str)
            .unwrap_or(FALLBACK_LONG_NAME)
    }

    /// Default marker → long name table
    pub fn default_names() -> HashMap<String, String> {
        Self::ALL
            .iter()
            .map(|kind| (kind.marker().to_string(), kind.long_name().to_string()))
            .collect()
    }
}

impl FromStr for PreReleaseKind {
    type Err = DetermineVersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "a" => Ok(PreReleaseKind::Alpha),
            "b" => Ok(PreReleaseKind::Beta),
            "rc" => Ok(PreReleaseKind::ReleaseCandidate),
            other => Err(DetermineVersionError::version(format!(
                "Unknown pre-release marker: '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for PreReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// Pre-release suffix: kind plus its numeric value (`rc1` -> ReleaseCandidate, 1)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreRelease {
    pub kind: PreReleaseKind,
    pub value: VersionNumber,
}

impl PreRelease {
    pub fn new(kind: PreReleaseKind, value: VersionNumber) -> Self {
        PreRelease { kind, value }
    }
}
