use crate::domain::PreReleaseKind;
use crate::error::{DetermineVersionError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Rules used to turn a branch name into a version.
///
/// The defaults reproduce the fixed pipeline behavior: strip `v` or
/// `release/`, expand `a`/`b`/`rc` to `alpha`/`beta`/`rc`, and emit the
/// result under the `version` output key.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Prefixes tried in order; the first match is stripped
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,

    /// Short pre-release marker -> long name
    #[serde(default = "PreReleaseKind::default_names")]
    pub prerelease_names: HashMap<String, String>,

    /// `name=` field of the output line
    #[serde(default = "default_output_key")]
    pub output_key: String,
}

/// Returns the default branch prefixes.
fn default_prefixes() -> Vec<String> {
    vec!["v".to_string(), "release/".to_string()]
}

/// Returns the default output key.
fn default_output_key() -> String {
    "version".to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            prefixes: default_prefixes(),
            prerelease_names: PreReleaseKind::default_names(),
            output_key: default_output_key(),
        }
    }
}

impl ResolverConfig {
    /// Reject configurations that could never produce a sensible result
    pub fn validate(&self) -> Result<()> {
        if self.prefixes.iter().any(|p| p.is_empty()) {
            return Err(DetermineVersionError::config(
                "prefixes must not contain an empty string",
            ));
        }
        if self.output_key.trim().is_empty() {
            return Err(DetermineVersionError::config("output_key must not be empty"));
        }
        if let Some(marker) = self
            .prerelease_names
            .keys()
            .find(|marker| marker.parse::<PreReleaseKind>().is_err())
        {
            return Err(DetermineVersionError::config(format!(
                "unknown pre-release marker '{}' in prerelease_names (expected a, b or rc)",
                marker
            )));
        }
        Ok(())
    }
}

/// Loads resolver configuration from an explicit path or returns defaults.
///
/// No file is discovered implicitly: without a path the built-in rules apply,
/// so the output depends on nothing but the branch name.
///
/// # Arguments
/// * `config_path` - Optional path to a TOML configuration file
///
/// # Returns
/// * `Ok(ResolverConfig)` - Loaded or default configuration
/// * `Err` - If the file cannot be read, parsed or fails validation
pub fn load_config(config_path: Option<&Path>) -> Result<ResolverConfig> {
    let Some(path) = config_path else {
        return Ok(ResolverConfig::default());
    };

    let config_str = fs::read_to_string(path)?;
    let config: ResolverConfig = toml::from_str(&config_str)?;
    config.validate()?;

    tracing::debug!(path = %path.display(), "loaded resolver configuration");
    Ok(config)
}
