//! Nested and recursive timer scopes over a key-addressed frame stack
//!
//! A timer scope is identified by a [`TimerKey`]: either an explicit string
//! chosen by the caller, or an implicit per-call-site identity produced by
//! [`scope_key!`](crate::scope_key) at compile time. The [`TimerStack`] holds
//! the open frames and decides, for each start and stop, whether the event is
//! a real frame transition or a suppressed inner occurrence of an already
//! open non-recursive scope.
//!
//! All lookups resolve the most-recently-pushed matching entry, which is what
//! lets recursive-counted mode pair each recursive call's own start with its
//! own stop even though every frame shares one key.

use std::time::{Duration, Instant};

/// Identity of one logical timer scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimerKey {
    /// Caller-chosen key, printed verbatim in output lines
    Explicit(String),
    /// Compile-time identity of the enclosing function, produced by
    /// [`scope_key!`](crate::scope_key); printed as the function path
    Scope(&'static str),
}

impl TimerKey {
    /// The label printed in started/stopped lines.
    pub fn label(&self) -> &str {
        match self {
            TimerKey::Explicit(key) => key,
            TimerKey::Scope(name) => name,
        }
    }
}

impl From<&str> for TimerKey {
    fn from(key: &str) -> Self {
        TimerKey::Explicit(key.to_string())
    }
}

impl From<String> for TimerKey {
    fn from(key: String) -> Self {
        TimerKey::Explicit(key)
    }
}

/// Derive the implicit [`TimerKey`] for the enclosing function.
///
/// The key is stable across every expansion within one function body and
/// distinct across functions, so a `start_timer`/`stop_timer` pair relying on
/// implicit keys must both sit in the same function. Expansions inside a
/// closure resolve to the closure's scope, not the outer function.
#[macro_export]
macro_rules! scope_key {
    () => {{
        fn __scope() {}
        let name = ::std::any::type_name_of_val(&__scope);
        $crate::timer::TimerKey::Scope(name.trim_end_matches("::__scope"))
    }};
}

/// One open timer scope: its key paired with the instant it started.
///
/// Holding the pair in a single entry keeps the key sequence and timestamp
/// sequence the same length by construction.
#[derive(Debug)]
struct TimerFrame {
    key: TimerKey,
    started: Instant,
}

/// What a start call decided.
#[derive(Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new frame was pushed; a "timer started" line should be emitted
    Started,
    /// The key was already open and not recursive-counted; a pass marker was
    /// recorded and nothing should be emitted
    Collapsed,
}

/// What a stop call decided.
#[derive(Debug, PartialEq, Eq)]
pub enum StopOutcome {
    /// The most recent frame for the key was closed after this long
    Stopped(Duration),
    /// A pending pass marker absorbed this stop; nothing should be emitted
    Collapsed,
    /// No open frame or pass marker matched; the stop is ignored
    Unmatched,
}

/// The open-frame and pending-pass stacks shared by all timer scopes.
///
/// Not synchronized: callers on multiple threads need external locking. A
/// frame whose stop never arrives stays on the stack for the lifetime of the
/// owning context; [`open_frames`](Self::open_frames) makes such leaks
/// observable.
#[derive(Debug, Default)]
pub struct TimerStack {
    frames: Vec<TimerFrame>,
    passes: Vec<TimerKey>,
}

impl TimerStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a timer scope at `now`.
    ///
    /// Pushes a frame when the key is not already open or when
    /// `recursive_counted` asks for an independently counted frame. A
    /// non-recursive start on an open key records a pass marker instead, so
    /// nested occurrences collapse into the outermost pair.
    pub fn begin(&mut self, key: TimerKey, now: Instant, recursive_counted: bool) -> StartOutcome {
        if recursive_counted || !self.frames.iter().any(|frame| frame.key == key) {
            self.frames.push(TimerFrame { key, started: now });
            StartOutcome::Started
        } else {
            self.passes.push(key);
            StartOutcome::Collapsed
        }
    }

    /// Close the most recent scope matching `key` at `now`.
    ///
    /// A pending pass marker for the key is consumed first, mirroring the
    /// suppressed inner start. A stop with no matching start anywhere is
    /// absorbed as [`StopOutcome::Unmatched`], never an error.
    pub fn end(&mut self, key: &TimerKey, now: Instant) -> StopOutcome {
        if let Some(index) = self.passes.iter().rposition(|k| k == key) {
            self.passes.remove(index);
            return StopOutcome::Collapsed;
        }
        if let Some(index) = self.frames.iter().rposition(|frame| &frame.key == key) {
            let frame = self.frames.remove(index);
            return StopOutcome::Stopped(now.saturating_duration_since(frame.started));
        }
        StopOutcome::Unmatched
    }

    /// Number of currently open frames.
    pub fn open_frames(&self) -> usize {
        self.frames.len()
    }

    /// Number of pending pass markers.
    pub fn pending_passes(&self) -> usize {
        self.passes.len()
    }

    /// True when no frames are open and no passes are pending.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty() && self.passes.is_empty()
    }
}
