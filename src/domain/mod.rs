//! Domain logic - pure value types for branch names and versions

pub mod branch;
pub mod prerelease;
pub mod version;

pub use branch::BranchName;
pub use prerelease::{PreRelease, PreReleaseKind};
pub use version::{ParsedVersion, VersionNumber};
