use std::time::Duration;

/// Run `$body` and warn when it takes longer than `$budget_us` microseconds.
/// Only measures anything while `DF.log_performance` is on.
#[macro_export]
macro_rules! trace_time {
    ($label:expr, $budget_us:expr, $body:block) => {{
        let started = $crate::config::DF
            .log_performance
            .then($crate::utils::AppInstant::now);
        let out = $body;
        if let Some(started) = started {
            $crate::utils::report_if_slow($label, started.elapsed(), $budget_us);
        }
        out
    }};
}

#[doc(hidden)]
pub fn report_if_slow(label: &str, elapsed: Duration, budget_us: u128) -> bool {
    let slow = elapsed.as_micros() > budget_us;
    if slow {
        let build = if cfg!(debug_assertions) { "debug" } else { "release" };
        log::warn!(
            "SLOW [{}] {} took {:.3}ms (budget {:.3}ms)",
            build,
            label,
            elapsed.as_secs_f64() * 1000.0,
            budget_us as f64 / 1000.0
        );
    }
    slow
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_over_budget_is_slow() {
        assert!(!report_if_slow("x", Duration::from_micros(4_000), 4_000));
        assert!(report_if_slow("x", Duration::from_micros(4_001), 4_000));
    }
}
