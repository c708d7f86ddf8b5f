//! Live chart polling policy.

/// Timing and window sizes for a live reports session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollingConfig {
    /// Period of the repeating price tick.
    pub tick_interval_ms: u64,
    /// Period of the full chart reset (one-shot, re-armed after each firing).
    pub reset_interval_ms: u64,
    /// Maximum number of ticks held by the rolling window.
    pub window_capacity: usize,
}

pub const POLLING: PollingConfig = PollingConfig {
    tick_interval_ms: 2_000,
    reset_interval_ms: 1_200_000, // 20 minutes
    window_capacity: 20,
};

impl Default for PollingConfig {
    fn default() -> Self {
        POLLING
    }
}
