//! Destination for debug lines.
//!
//! Every line is written as `YYYY/MM/DD HH:MM:SS <prefix><message>` to
//! standard error unless another writer has been installed.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, OnceLock};

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

enum Output {
    Stderr,
    Writer(Box<dyn Write + Send>),
}

struct Sink {
    output: Output,
    prefix: String,
    timestamps: bool,
}

impl Default for Sink {
    fn default() -> Self {
        Self {
            output: Output::Stderr,
            prefix: String::new(),
            timestamps: true,
        }
    }
}

impl Sink {
    fn render(&self, message: &str) -> String {
        let mut line = String::with_capacity(message.len() + self.prefix.len() + 21);
        if self.timestamps {
            line.push_str(&chrono::Local::now().format(TIMESTAMP_FORMAT).to_string());
            line.push(' ');
        }
        line.push_str(&self.prefix);
        line.push_str(message);
        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }

    fn write(&mut self, line: &str) -> io::Result<()> {
        match &mut self.output {
            Output::Stderr => {
                let mut stderr = io::stderr().lock();
                stderr.write_all(line.as_bytes())?;
                stderr.flush()
            }
            Output::Writer(writer) => {
                writer.write_all(line.as_bytes())?;
                writer.flush()
            }
        }
    }
}

static SINK: OnceLock<Mutex<Sink>> = OnceLock::new();

fn sink() -> MutexGuard<'static, Sink> {
    let lock = SINK.get_or_init(|| Mutex::new(Sink::default()));
    lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Send debug lines to `writer` instead of standard error.
pub fn set_output<W>(writer: W)
where
    W: Write + Send + 'static,
{
    sink().output = Output::Writer(Box::new(writer));
}

/// Send debug lines back to standard error.
pub fn reset_output() {
    sink().output = Output::Stderr;
}

pub fn set_prefix(prefix: impl Into<String>) {
    sink().prefix = prefix.into();
}

pub fn set_timestamps(enabled: bool) {
    sink().timestamps = enabled;
}

/// Write one line unconditionally. Write failures are dropped.
pub(crate) fn write_line(message: &str) {
    let mut sink = sink();
    let line = sink.render(message);
    if let Err(e) = sink.write(&line) {
        tracing::trace!("dropped debug line: {}", e);
    }
}
