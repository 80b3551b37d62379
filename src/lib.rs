pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod resolver;
pub mod ui;

pub use error::{DetermineVersionError, Result};
pub use resolver::{resolve, Resolution, Resolver};
