use std::fmt::Display;
use std::process;

use crate::verbose::debug_line;

/// Exit status used when `check` terminates the process.
pub const EXIT_FAILURE: i32 = 1;

/// Terminate the program if `err` is present.
///
/// The error is logged first when verbose mode is on. Passing `None` does
/// nothing, so the usual call site is `check(result.err())`.
pub fn check<E: Display>(err: Option<E>) {
    if let Some(err) = err {
        fatal(err);
    }
}

/// Like `check`, but hands back the success value.
pub fn check_result<T, E: Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => fatal(err),
    }
}

/// Log `err` when verbose, then exit with `EXIT_FAILURE`.
pub fn fatal<E: Display>(err: E) -> ! {
    tracing::debug!("fatal error, exiting with status {}", EXIT_FAILURE);
    // `{:#}` keeps the whole anyhow context chain on one line.
    debug_line(format_args!("{:#}", err));
    process::exit(EXIT_FAILURE)
}
