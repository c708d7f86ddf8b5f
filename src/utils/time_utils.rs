use chrono::{DateTime, Local};

use crate::config::CHART;

/// Monotonic instant that also works in the browser.
pub type AppInstant = web_time::Instant;

/// Milliseconds elapsed since the app started. Drives every session timer.
#[derive(Debug, Clone, Copy)]
pub struct AppClock {
    start: AppInstant,
}

impl Default for AppClock {
    fn default() -> Self {
        Self::new()
    }
}

impl AppClock {
    pub fn new() -> Self {
        Self {
            start: AppInstant::now(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Chart x-axis label for a sample taken at `at` (local wall-clock time).
pub fn tick_label(at: DateTime<Local>) -> String {
    at.format(CHART.label_format).to_string()
}

pub fn tick_label_now() -> String {
    tick_label(Local::now())
}

/// "1m 05s" style age, for the session status line.
pub fn format_elapsed(ms: u64) -> String {
    let secs = ms / 1000;
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{}m {:02}s", mins, secs % 60);
    }
    format!("{}h {:02}m", mins / 60, mins % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn labels_are_wall_clock_time() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 3).unwrap();
        assert_eq!(tick_label(at), "07:05:03");
    }

    #[test]
    fn elapsed_formatting() {
        assert_eq!(format_elapsed(0), "0s");
        assert_eq!(format_elapsed(59_999), "59s");
        assert_eq!(format_elapsed(65_000), "1m 05s");
        assert_eq!(format_elapsed(3_720_000), "1h 02m");
    }
}
