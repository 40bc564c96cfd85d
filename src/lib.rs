//! Lapstack - category-gated logging and nested timer instrumentation
//!
//! Instrumentation that stays in the code permanently: log statements and
//! timer scopes are inert until their category is enabled at runtime, so
//! enabling and disabling diagnostics never means editing call sites.
//!
//! Timer scopes are key-addressed and nest. With no explicit key, the
//! [`start_timer!`] and [`stop_timer!`] macros derive a compile-time key from
//! the enclosing function, which makes a recursive function time only its
//! outermost call unless independently counted frames are requested.
//!
//! Single-threaded by design: [`Logger`] methods take `&mut self` and the
//! timer stacks carry no synchronization, so concurrent use needs external
//! locking. A started timer whose stop never arrives keeps its frame open
//! for the logger's lifetime ([`Logger::open_timers`] exposes the count).

pub mod category;
pub mod config;
pub mod duration;
pub mod emitter;
pub mod logger;
pub mod timer;

pub use category::CategoryGate;
pub use config::LoggerConfig;
pub use duration::format_duration;
pub use emitter::EmitOptions;
pub use logger::Logger;
pub use timer::TimerKey;
