use crate::domain::prerelease::{PreRelease, PreReleaseKind};
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// `MAJOR.MINOR[.MICRO][PREKIND PREVAL]`, each integer `0` or without a leading zero
static SHORT_FORM: LazyLock<Regex> = LazyLock::new(|| {
    let int = r"(?:0|[1-9][0-9]*)";
    Regex::new(&format!(
        r"^(?P<major>{int})\.(?P<minor>{int})(?:\.(?P<micro>{int}))?(?:(?P<prekind>a|b|rc)(?P<preval>{int}))?$"
    ))
    .expect("short-form version pattern is valid")
});

/// Non-negative integer in canonical decimal form (`0`, or no leading zero).
///
/// Holds the matched digits rather than a machine integer, so components of
/// any length are reassembled exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionNumber(String);

impl VersionNumber {
    /// Wrap `digits` if they are in canonical form
    pub fn parse(digits: &str) -> Option<Self> {
        let canonical = match digits.as_bytes() {
            [b'0'] => true,
            [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
            _ => false,
        };
        canonical.then(|| VersionNumber(digits.to_string()))
    }

    pub fn zero() -> Self {
        VersionNumber("0".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, `None` if it does not fit in `u64`
    pub fn to_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<u64> for VersionNumber {
    fn from(n: u64) -> Self {
        VersionNumber(n.to_string())
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A version parsed from the short form used in branch names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVersion {
    pub major: VersionNumber,
    pub minor: VersionNumber,
    /// Defaults to 0 when the branch name omits it
    pub micro: VersionNumber,
    pub prerelease: Option<PreRelease>,
}

impl ParsedVersion {
    /// Create a version without a pre-release suffix
    pub fn new(major: u64, minor: u64, micro: u64) -> Self {
        ParsedVersion {
            major: major.into(),
            minor: minor.into(),
            micro: micro.into(),
            prerelease: None,
        }
    }

    /// Attach a pre-release suffix
    pub fn with_prerelease(mut self, kind: PreReleaseKind, value: u64) -> Self {
        self.prerelease = Some(PreRelease::new(kind, value.into()));
        self
    }

    /// Match `s` against the short-form grammar.
    ///
    /// The whole string must match; `None` means the caller should pass `s`
    /// through untouched.
    ///
    /// # Examples
    /// ```
    /// use determine_version::domain::ParsedVersion;
    ///
    /// assert_eq!(ParsedVersion::parse("2.0"), Some(ParsedVersion::new(2, 0, 0)));
    /// assert_eq!(ParsedVersion::parse("01.2.3"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let caps = SHORT_FORM.captures(s)?;

        let major = component(&caps, "major")?;
        let minor = component(&caps, "minor")?;
        let micro = component(&caps, "micro").unwrap_or_else(VersionNumber::zero);

        let prerelease = match caps.name("prekind") {
            Some(kind) => {
                let kind = kind.as_str().parse::<PreReleaseKind>().ok()?;
                Some(PreRelease::new(kind, component(&caps, "preval")?))
            }
            None => None,
        };

        Some(ParsedVersion {
            major,
            minor,
            micro,
            prerelease,
        })
    }

    /// Canonical form using `names` for pre-release long names
    pub fn render(&self, names: &HashMap<String, String>) -> String {
        let mut out = format!("{}.{}.{}", self.major, self.minor, self.micro);
        if let Some(pre) = &self.prerelease {
            out.push_str(&format!("-{}.{}", pre.kind.long_name_in(names), pre.value));
        }
        out
    }

    /// Convert to a `semver::Version` using the built-in long names.
    ///
    /// `None` when a component does not fit in `u64`.
    pub fn to_semver(&self) -> Option<semver::Version> {
        let mut version = semver::Version::new(
            self.major.to_u64()?,
            self.minor.to_u64()?,
            self.micro.to_u64()?,
        );
        if let Some(pre) = &self.prerelease {
            let ident = format!("{}.{}", pre.kind.long_name(), pre.value);
            version.pre = semver::Prerelease::new(&ident).ok()?;
        }
        Some(version)
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}.{}", pre.kind.long_name(), pre.value)?;
        }
        Ok(())
    }
}

fn component(caps: &Captures<'_>, name: &str) -> Option<VersionNumber> {
    caps.name(name)
        .and_then(|m| VersionNumber::parse(m.as_str()))
}
