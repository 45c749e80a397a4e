//! Core configuration and logging for patchfan
//!
//! This crate holds everything the pipeline consumes but does not own: the
//! validated run configuration handed over by the CLI layer, commit-range
//! parsing, and the opt-in tracing setup.

mod config;
mod logging;

pub use config::{CommitRange, ConfigError, PatchOptions, RunConfig};
pub use logging::{init_logging, LogTarget};
