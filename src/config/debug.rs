//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every price tick issued and applied.
    pub log_price_ticks: bool,

    /// Session lifecycle: enter/leave reports, resets, stale responses.
    pub log_session: bool,

    /// Anything about the coin selection (add/remove/replace/persist).
    pub log_selection: bool,

    /// Market list and coin detail fetches.
    pub log_markets: bool,

    /// Slow frame sections (see `trace_time!`).
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_session: true,
    log_selection: true,

    log_price_ticks: false,
    log_markets: false,
    log_performance: false,
};
