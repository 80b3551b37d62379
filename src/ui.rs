//! Output emission.
//!
//! stdout carries exactly one workflow-command line for the calling pipeline;
//! everything else goes to stderr.

use console::Term;
use std::io;

/// Format the GitHub Actions output line for `key` = `value`.
///
/// # Example
/// ```
/// use determine_version::ui::format_output_line;
///
/// assert_eq!(format_output_line("version", "1.2.3"), "::set-output name=version::1.2.3");
/// ```
pub fn format_output_line(key: &str, value: &str) -> String {
    format!("::set-output name={}::{}", key, value)
}

/// Write the output line to stdout.
pub fn emit_output(line: &str) -> io::Result<()> {
    Term::stdout().write_line(line)
}

/// Write an error message to stderr, verbatim.
pub fn display_error(message: &str) -> io::Result<()> {
    Term::stderr().write_line(message)
}
