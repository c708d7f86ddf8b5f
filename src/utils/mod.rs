mod perf;
mod time_utils;

pub use perf::report_if_slow;
pub use time_utils::{AppClock, AppInstant, format_elapsed, tick_label, tick_label_now};
