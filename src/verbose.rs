use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::sink;

static VERBOSE_MODE: AtomicBool = AtomicBool::new(false);

/// Turn debug output on or off for the whole process.
///
/// Meant to be called once at startup. Later calls are allowed, but a thread
/// racing a `debug!` against this gets whichever value it happens to read.
pub fn set_verbose(enabled: bool) {
    VERBOSE_MODE.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE_MODE.load(Ordering::Relaxed)
}

/// Write `message` as one log line, but only in verbose mode.
pub fn debug_line(message: impl Display) {
    if !is_verbose() {
        return;
    }
    sink::write_line(&message.to_string());
}

/// Join already-evaluated values with single spaces. Used by `debug!`.
#[doc(hidden)]
pub fn join_display(values: &[&dyn Display]) -> String {
    let mut line = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(&value.to_string());
    }
    line
}

/// Log the arguments, space separated, when verbose mode is on.
/// With no arguments an empty line is logged.
///
/// Arguments are not evaluated at all when verbose mode is off.
///
/// ```
/// belt::set_verbose(false);
/// belt::debug!("loaded", 3, "files");
/// ```
#[macro_export]
macro_rules! debug {
    ($($value:expr),* $(,)?) => {
        if $crate::verbose::is_verbose() {
            $crate::verbose::debug_line($crate::verbose::join_display(&[
                $(&$value as &dyn ::std::fmt::Display),*
            ]));
        }
    };
}

/// `format!`-style version of `debug!`. Nothing is formatted unless verbose.
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)*) => {
        if $crate::verbose::is_verbose() {
            $crate::verbose::debug_line(format!($($arg)*));
        }
    };
}
