//! Invocation workflow
//!
//! Validates the argument count, resolves the branch name and formats the
//! output line. Kept apart from main.rs so it can be driven without clap.

use std::path::PathBuf;

use crate::config;
use crate::error::{DetermineVersionError, Result};
use crate::resolver::{Resolution, Resolver};
use crate::ui;

/// Arguments for one invocation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunArgs {
    /// Optional resolver configuration file
    pub config_path: Option<PathBuf>,

    /// Positional arguments; exactly one branch name is accepted
    pub branches: Vec<String>,
}

impl RunArgs {
    /// Arguments for a single branch name with the built-in rules
    pub fn for_branch(branch: impl Into<String>) -> Self {
        RunArgs {
            config_path: None,
            branches: vec![branch.into()],
        }
    }
}

/// Result of a successful invocation
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutput {
    pub resolution: Resolution,

    /// The line to write to stdout
    pub line: String,
}

/// Resolve the sole branch name in `args` into an output line.
///
/// # Errors
/// * `InvalidArgument` - zero or several branch names, or an empty one
/// * `Io` / `Config` - the configuration file cannot be loaded
pub fn run(args: &RunArgs) -> Result<RunOutput> {
    let [branch] = args.branches.as_slice() else {
        tracing::debug!(count = args.branches.len(), "expected exactly one branch name");
        return Err(DetermineVersionError::InvalidArgument);
    };

    let config = config::load_config(args.config_path.as_deref())?;
    let resolver = Resolver::new(config);
    let resolution = resolver.resolve(branch)?;
    let line = ui::format_output_line(&resolver.config().output_key, resolution.version());

    Ok(RunOutput { resolution, line })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_single_branch() {
        let out = run(&RunArgs::for_branch("v1.2.3")).unwrap();
        assert_eq!(out.line, "::set-output name=version::1.2.3");
        assert!(out.resolution.is_normalized());
    }

    #[test]
    fn test_run_without_branch() {
        let err = run(&RunArgs::default()).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_run_with_two_branches() {
        let args = RunArgs {
            config_path: None,
            branches: vec!["v1.0".to_string(), "v2.0".to_string()],
        };
        assert!(run(&args).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_run_blank_branch() {
        let err = run(&RunArgs::for_branch("   ")).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_argument_count_checked_before_config() {
        let args = RunArgs {
            config_path: Some(PathBuf::from("/nonexistent/determine-version.toml")),
            branches: vec![],
        };
        assert!(run(&args).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let args = RunArgs {
            config_path: Some(PathBuf::from("/nonexistent/determine-version.toml")),
            branches: vec!["v1.0".to_string()],
        };
        let err = run(&args).unwrap_err();
        assert!(matches!(err, DetermineVersionError::Io(_)));
    }
}
