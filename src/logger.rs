//! The logger context: category gate, timer stacks, and emitter wired together
//!
//! [`Logger`] is the single explicit context object holding what the original
//! facility kept as process-wide state. A host creates one at startup, mutates
//! its configuration whenever it likes, and threads `&mut` references to the
//! instrumentation points.
//!
//! Every operation is a no-op for inactive categories: no output, no stack
//! mutation, only the first-sight category registration. Instrumentation left
//! in the code therefore costs one set lookup until its category is enabled.
//!
//! Not safe for concurrent use: all methods take `&mut self` and the timer
//! stacks carry no synchronization. Callers on multiple threads need external
//! locking.

use std::fmt;
use std::io::Write;
use std::time::Instant;

use crate::category::CategoryGate;
use crate::config::LoggerConfig;
use crate::duration::format_duration;
use crate::emitter::{EmitOptions, Emitter};
use crate::timer::{StartOutcome, StopOutcome, TimerKey, TimerStack};

/// Category-gated logger with nested and recursive timer scopes.
///
/// # Example
///
/// ```
/// use lapstack::{start_timer, stop_timer, Logger};
///
/// let mut logger = Logger::new();
/// logger.enable_category("Main Events");
///
/// logger.log("Main Events", "loading input");
///
/// // Implicit key: resolves to the enclosing function, so nested or
/// // recursive re-entry collapses into the outermost pair.
/// start_timer!(logger, "Main Events");
/// // ... work ...
/// stop_timer!(logger, "Main Events");
/// ```
#[derive(Debug)]
pub struct Logger {
    gate: CategoryGate,
    stack: TimerStack,
    emitter: Emitter,
    full_timer_format: bool,
}

impl Logger {
    /// Create a logger writing to stdout with nothing enabled.
    pub fn new() -> Self {
        Self::with_sink_and_config(Box::new(std::io::stdout()), LoggerConfig::default())
    }

    /// Create a logger writing to the given sink.
    pub fn with_sink(sink: Box<dyn Write>) -> Self {
        Self::with_sink_and_config(sink, LoggerConfig::default())
    }

    /// Create a stdout logger from a configuration.
    pub fn from_config(config: LoggerConfig) -> Self {
        Self::with_sink_and_config(Box::new(std::io::stdout()), config)
    }

    /// Create a logger from a configuration and an explicit sink.
    pub fn with_sink_and_config(sink: Box<dyn Write>, config: LoggerConfig) -> Self {
        let mut logger = Self {
            gate: CategoryGate::new(),
            stack: TimerStack::new(),
            emitter: Emitter::with_sink(sink),
            full_timer_format: false,
        };
        logger.apply_config(config);
        logger
    }

    /// Apply a configuration, replacing the enabled set and output settings.
    ///
    /// Open timer frames and the seen-category list are untouched.
    pub fn apply_config(&mut self, config: LoggerConfig) {
        self.gate.set_enabled(config.enabled_categories);
        self.emitter.set_print_timestamp(config.print_timestamp);
        self.emitter.set_timestamp_format(config.timestamp_format);
        self.full_timer_format = config.full_timer_format;
    }

    /// Add a category to the enabled set.
    pub fn enable_category(&mut self, category: impl Into<String>) {
        self.gate.enable(category);
    }

    /// Remove a category from the enabled set.
    pub fn disable_category(&mut self, category: &str) {
        self.gate.disable(category);
    }

    /// Replace the enabled set wholesale.
    pub fn set_enabled_categories<I, S>(&mut self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gate.set_enabled(categories);
    }

    /// Whether a category currently produces output.
    pub fn is_category_active(&self, category: &str) -> bool {
        self.gate.is_active(category)
    }

    /// Every non-empty category any operation was called with, first-seen
    /// order, enabled or not. Read-only audit trail.
    pub fn all_categories(&self) -> &[String] {
        self.gate.all()
    }

    /// Replace the output sink at any time.
    pub fn set_sink(&mut self, sink: Box<dyn Write>) {
        self.emitter.set_sink(sink);
    }

    /// Toggle the timestamp field on every line.
    pub fn set_print_timestamp(&mut self, print_timestamp: bool) {
        self.emitter.set_print_timestamp(print_timestamp);
    }

    /// Set the strftime pattern for the timestamp field.
    pub fn set_timestamp_format(&mut self, format: impl Into<String>) {
        self.emitter.set_timestamp_format(format);
    }

    /// Render all six duration components even when the leading ones are zero.
    pub fn set_full_timer_format(&mut self, full_timer_format: bool) {
        self.full_timer_format = full_timer_format;
    }

    /// Whether stopped-timer lines use the full six-component format.
    pub fn full_timer_format(&self) -> bool {
        self.full_timer_format
    }

    /// Number of started timers whose stop has not arrived.
    ///
    /// A frame whose stop never arrives stays open for the logger's
    /// lifetime; this makes such leaks observable.
    pub fn open_timers(&self) -> usize {
        self.stack.open_frames()
    }

    /// Log a message under a category using the default separator and
    /// terminator.
    pub fn log(&mut self, category: &str, message: impl fmt::Display) {
        self.log_with(category, message, &EmitOptions::default());
    }

    /// Log a message with explicit separator, terminator, and flush settings.
    pub fn log_with(&mut self, category: &str, message: impl fmt::Display, options: &EmitOptions<'_>) {
        self.gate.register(category);
        if !self.gate.is_active(category) {
            return;
        }
        self.emitter.emit(&[&message.to_string()], options);
    }

    /// Start a timer scope.
    ///
    /// Pass [`scope_key!`](crate::scope_key) as the key (or use the
    /// [`start_timer!`](crate::start_timer) macro) to identify the scope by
    /// the enclosing function. With `recursive_counted` false, re-entering an
    /// already open key records no new frame and emits nothing; the matching
    /// stop is suppressed symmetrically. With `recursive_counted` true every
    /// call gets its own frame.
    pub fn start_timer(
        &mut self,
        category: &str,
        key: impl Into<TimerKey>,
        message: impl fmt::Display,
        recursive_counted: bool,
    ) {
        self.start_timer_with(category, key, message, recursive_counted, &EmitOptions::default());
    }

    /// [`start_timer`](Self::start_timer) with explicit output options.
    pub fn start_timer_with(
        &mut self,
        category: &str,
        key: impl Into<TimerKey>,
        message: impl fmt::Display,
        recursive_counted: bool,
        options: &EmitOptions<'_>,
    ) {
        self.gate.register(category);
        if !self.gate.is_active(category) {
            return;
        }
        let key = key.into();
        let label = key.label().to_string();
        match self.stack.begin(key, Instant::now(), recursive_counted) {
            StartOutcome::Started => {
                self.emitter.emit(&[&message.to_string(), &label], options);
            }
            StartOutcome::Collapsed => {}
        }
    }

    /// Stop the most recently started timer scope matching `key`.
    ///
    /// Resolves the key exactly like [`start_timer`](Self::start_timer), so
    /// implicit-key pairs must sit in the same function body. A stop without
    /// a matching start is silently ignored.
    pub fn stop_timer(&mut self, category: &str, key: impl Into<TimerKey>, message: impl fmt::Display) {
        self.stop_timer_with(category, key, message, &EmitOptions::default());
    }

    /// [`stop_timer`](Self::stop_timer) with explicit output options.
    pub fn stop_timer_with(
        &mut self,
        category: &str,
        key: impl Into<TimerKey>,
        message: impl fmt::Display,
        options: &EmitOptions<'_>,
    ) {
        self.gate.register(category);
        if !self.gate.is_active(category) {
            return;
        }
        let key = key.into();
        match self.stack.end(&key, Instant::now()) {
            StopOutcome::Stopped(elapsed) => {
                let duration = format_duration(elapsed, self.full_timer_format);
                self.emitter
                    .emit(&[&message.to_string(), &duration, key.label()], options);
            }
            StopOutcome::Collapsed | StopOutcome::Unmatched => {}
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Start a timer scope keyed by the enclosing function.
///
/// Forms: `start_timer!(logger)` (unconditional category),
/// `start_timer!(logger, category)`, and
/// `start_timer!(logger, category, recursive)` for independently counted
/// recursive frames.
#[macro_export]
macro_rules! start_timer {
    ($logger:expr) => {
        $logger.start_timer("", $crate::scope_key!(), "Starting Timer", false)
    };
    ($logger:expr, $category:expr) => {
        $logger.start_timer($category, $crate::scope_key!(), "Starting Timer", false)
    };
    ($logger:expr, $category:expr, recursive) => {
        $logger.start_timer($category, $crate::scope_key!(), "Starting Timer", true)
    };
}

/// Stop the timer scope keyed by the enclosing function.
///
/// Must expand in the same function body as the matching
/// [`start_timer!`](crate::start_timer) for the implicit keys to be equal.
#[macro_export]
macro_rules! stop_timer {
    ($logger:expr) => {
        $logger.stop_timer("", $crate::scope_key!(), "Stop Timer")
    };
    ($logger:expr, $category:expr) => {
        $logger.stop_timer($category, $crate::scope_key!(), "Stop Timer")
    };
}

/// Log a formatted message under a category.
///
/// `log!(logger, "Parsing", "read {} rows", n)` forwards the format arguments
/// to [`Logger::log`]; they are only rendered to a string after the category
/// gate check passes.
#[macro_export]
macro_rules! log {
    ($logger:expr, $category:expr, $($arg:tt)*) => {
        $logger.log($category, ::std::format_args!($($arg)*))
    };
}
