//! Output line assembly and best-effort sink writes
//!
//! The emitter owns the output sink and the timestamp settings. Each event
//! becomes one line: the timestamp field (left empty, not removed, when
//! timestamps are disabled), then the event's fields, joined by the
//! separator and closed by the terminator.
//!
//! Writes are fire-and-forget. A logging facility must never abort its host,
//! so a failed sink write is dropped without error and an invalid timestamp
//! pattern degrades to partial output instead of panicking.

use chrono::Local;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Per-call output knobs, mirroring the separator/terminator/flush parameters
/// of the public operations.
#[derive(Debug, Clone)]
pub struct EmitOptions<'a> {
    /// Placed between fields
    pub separator: &'a str,
    /// Appended after the last field
    pub terminator: &'a str,
    /// Flush the sink after writing
    pub flush: bool,
}

impl Default for EmitOptions<'_> {
    fn default() -> Self {
        Self {
            separator: " ",
            terminator: "\n",
            flush: false,
        }
    }
}

/// Assembles event lines and writes them to the configured sink.
pub struct Emitter {
    sink: Box<dyn Write>,
    print_timestamp: bool,
    timestamp_format: String,
}

impl std::fmt::Debug for Emitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("print_timestamp", &self.print_timestamp)
            .field("timestamp_format", &self.timestamp_format)
            .finish_non_exhaustive()
    }
}

/// Default strftime pattern for the timestamp field.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl Emitter {
    /// Create an emitter writing to stdout with timestamps enabled.
    pub fn new() -> Self {
        Self::with_sink(Box::new(io::stdout()))
    }

    /// Create an emitter writing to the given sink.
    pub fn with_sink(sink: Box<dyn Write>) -> Self {
        Self {
            sink,
            print_timestamp: true,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    /// Replace the sink at any time.
    pub fn set_sink(&mut self, sink: Box<dyn Write>) {
        self.sink = sink;
    }

    /// Toggle the timestamp field.
    ///
    /// When disabled the field is emitted empty so the line layout stays
    /// stable, matching the position-preserving behavior of the original
    /// facility.
    pub fn set_print_timestamp(&mut self, print_timestamp: bool) {
        self.print_timestamp = print_timestamp;
    }

    /// Whether the timestamp field is populated.
    pub fn print_timestamp(&self) -> bool {
        self.print_timestamp
    }

    /// Set the strftime pattern used for the timestamp field.
    pub fn set_timestamp_format(&mut self, format: impl Into<String>) {
        self.timestamp_format = format.into();
    }

    /// The strftime pattern used for the timestamp field.
    pub fn timestamp_format(&self) -> &str {
        &self.timestamp_format
    }

    /// Write one event line: timestamp field, then `fields`, joined by the
    /// separator and closed by the terminator.
    ///
    /// Sink failures are swallowed; there is no retry.
    pub fn emit(&mut self, fields: &[&str], options: &EmitOptions<'_>) {
        let mut line = self.timestamp_field();
        for field in fields {
            line.push_str(options.separator);
            line.push_str(field);
        }
        line.push_str(options.terminator);

        if self.sink.write_all(line.as_bytes()).is_err() {
            return;
        }
        if options.flush {
            let _ = self.sink.flush();
        }
    }

    fn timestamp_field(&self) -> String {
        let mut field = String::new();
        if self.print_timestamp {
            // chrono reports unknown specifiers through fmt::Error; ignoring
            // it keeps a bad pattern from panicking the host.
            let _ = write!(field, "{}", Local::now().format(&self.timestamp_format));
        }
        field
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}
