//! Project-wide constants.

use std::time::Duration;

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The line the base `run` behavior writes, without the trailing newline.
pub const BASE_RUN_LINE: &str = "Base run";

/// Pause between two consecutive runs when none is specified.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Format an interval for display (e.g. `100ms`, `1.5s`).
pub fn format_interval(interval: Duration) -> String {
    let millis = interval.as_millis();
    if millis < 1_000 {
        format!("{}ms", millis)
    } else if millis.is_multiple_of(1_000) {
        format!("{}s", millis / 1_000)
    } else {
        format!("{:.1}s", interval.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consts_are_non_empty() {
        assert!(!AUTHOR.is_empty());
        assert!(!VERSION.is_empty());
        assert!(!BASE_RUN_LINE.is_empty());
    }

    #[test]
    fn base_run_line_is_single_line() {
        assert!(!BASE_RUN_LINE.contains('\n'));
    }

    #[test]
    fn default_interval_is_a_tenth_of_a_second() {
        assert_eq!(DEFAULT_INTERVAL, Duration::from_millis(100));
    }

    #[test]
    fn format_interval_millis() {
        assert_eq!(format_interval(Duration::from_millis(100)), "100ms");
        assert_eq!(format_interval(Duration::from_millis(1)), "1ms");
    }

    #[test]
    fn format_interval_whole_seconds() {
        assert_eq!(format_interval(Duration::from_secs(2)), "2s");
    }

    #[test]
    fn format_interval_fractional_seconds() {
        assert_eq!(format_interval(Duration::from_millis(1_500)), "1.5s");
    }
}
