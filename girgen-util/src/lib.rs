//! Pieces shared by the girgen crates: the run configuration, log setup, lookup traces and test helpers.

mod config;
mod logging;
mod testing;
mod trace;

pub use crate::config::{ConfigError, GenConfig, CONFIG_ENV};
pub use crate::logging::{init_log, LOG_ENV};
pub use crate::testing::{compare, run_test, Error, Result};
pub use crate::trace::Trace;
