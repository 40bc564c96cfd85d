//! Human-readable duration formatting
//!
//! Renders an elapsed [`Duration`] as `HHh:MMm:SSs:mmmms:μμμμs:nnnns`, with
//! hours unbounded (not capped at 24). By default, zero-valued components are
//! elided, but only as a contiguous prefix: scanning from hours toward
//! nanoseconds, stripping stops at the first non-zero component, so trailing
//! zero components after it are kept and the nanosecond field always survives.

use std::time::Duration;

/// Format an elapsed duration as `HHh:MMm:SSs:mmmms:μμμμs:nnnns`.
///
/// Hours/minutes/seconds are zero-padded to 2 digits, sub-second components
/// to 3. When `full_format` is false, leading zero components are stripped as
/// a contiguous prefix; an all-zero duration renders as `"000ns"`.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use lapstack::duration::format_duration;
///
/// let d = Duration::new(5 * 60 + 3, 0);
/// assert_eq!(format_duration(d, false), "05m:03s:000ms:000μs:000ns");
/// assert_eq!(format_duration(d, true), "00h:05m:03s:000ms:000μs:000ns");
/// ```
pub fn format_duration(duration: Duration, full_format: bool) -> String {
    let total_secs = duration.as_secs();
    let nanos = duration.subsec_nanos();

    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    let millis = nanos / 1_000_000;
    let micros = (nanos / 1_000) % 1_000;
    let nanoseconds = nanos % 1_000;

    let formatted = format!(
        "{hours:02}h:{minutes:02}m:{seconds:02}s:{millis:03}ms:{micros:03}μs:{nanoseconds:03}ns"
    );

    if full_format {
        return formatted;
    }

    // Strip zero components only while they form the leading prefix. A zero
    // component behind a non-zero one no longer sits at the front, so its
    // strip attempt fails and everything after it is kept.
    let mut rest = formatted.as_str();
    for (value, prefix) in [
        (hours, "00h:"),
        (minutes, "00m:"),
        (seconds, "00s:"),
        (u64::from(millis), "000ms:"),
        (u64::from(micros), "000μs:"),
    ] {
        if value == 0 {
            if let Some(stripped) = rest.strip_prefix(prefix) {
                rest = stripped;
            }
        }
    }
    rest.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_format_all_fields() {
        let d = Duration::from_millis(250);
        assert_eq!(format_duration(d, true), "00h:00m:00s:250ms:000μs:000ns");
    }

    #[test]
    fn test_prefix_elision_stops_at_first_nonzero() {
        // Zero hours are dropped, but the zero-minute field behind the hour
        // boundary stays once minutes are non-zero.
        let d = Duration::new(5 * 60 + 3, 0);
        assert_eq!(format_duration(d, false), "05m:03s:000ms:000μs:000ns");
    }

    #[test]
    fn test_nonzero_hours_keep_zero_minutes() {
        let d = Duration::new(3600 + 30, 0);
        assert_eq!(format_duration(d, false), "01h:00m:30s:000ms:000μs:000ns");
    }

    #[test]
    fn test_subsecond_only() {
        let d = Duration::from_millis(250);
        assert_eq!(format_duration(d, false), "250ms:000μs:000ns");
    }

    #[test]
    fn test_micros_only() {
        let d = Duration::from_micros(42);
        assert_eq!(format_duration(d, false), "042μs:000ns");
    }

    #[test]
    fn test_nanos_only() {
        let d = Duration::from_nanos(7);
        assert_eq!(format_duration(d, false), "007ns");
    }

    #[test]
    fn test_zero_duration() {
        assert_eq!(format_duration(Duration::ZERO, false), "000ns");
        assert_eq!(
            format_duration(Duration::ZERO, true),
            "00h:00m:00s:000ms:000μs:000ns"
        );
    }

    #[test]
    fn test_hours_not_capped_at_24() {
        let d = Duration::new(30 * 3600, 0);
        assert_eq!(format_duration(d, false), "30h:00m:00s:000ms:000μs:000ns");
    }

    #[test]
    fn test_hours_exceed_two_digits() {
        let d = Duration::new(120 * 3600 + 61, 0);
        assert_eq!(format_duration(d, true), "120h:01m:01s:000ms:000μs:000ns");
    }

    #[test]
    fn test_component_decomposition() {
        let d = Duration::new(3661, 2_003_004);
        // 1h 1m 1s 2ms 3μs 4ns
        assert_eq!(format_duration(d, true), "01h:01m:01s:002ms:003μs:004ns");
    }
}
