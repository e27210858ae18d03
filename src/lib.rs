//! Quick utilities for writing command-line programs.
//!
//! ```no_run
//! belt::init(true);
//! belt::debug!("starting with", 2, "workers");
//! belt::check(std::fs::read("input.txt").err());
//! ```

pub mod check;
pub mod cli;
pub mod config;
pub mod contains;
pub mod error;
pub mod handlers;
pub mod sink;
pub mod strings;
pub mod verbose;

pub use check::{check, check_result, fatal, EXIT_FAILURE};
pub use config::{init, Config};
pub use contains::{contains, contains_value};
pub use error::{BeltError, Result};
pub use strings::{has_prefix, has_suffix};
pub use verbose::{is_verbose, set_verbose};
