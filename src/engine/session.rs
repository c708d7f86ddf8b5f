use crate::{
    config::PollingConfig,
    domain::Symbol,
    engine::SessionId,
    models::SeriesBuffer,
};

/// One live reports activation: the symbol snapshot, its rolling buffer and
/// its two timer deadlines.
#[derive(Debug, Clone)]
pub struct ChartSession {
    id: SessionId,
    symbols: Vec<Symbol>,
    buffer: SeriesBuffer,
    next_tick_ms: u64,
    next_reset_ms: u64,
    resets: u32,
}

impl ChartSession {
    /// Starts with the first tick already due at `now_ms`.
    pub(crate) fn start(id: SessionId, symbols: Vec<Symbol>, policy: &PollingConfig, now_ms: u64) -> Self {
        Self {
            id,
            buffer: SeriesBuffer::new(symbols.len(), policy.window_capacity, now_ms),
            symbols,
            next_tick_ms: now_ms,
            next_reset_ms: now_ms + policy.reset_interval_ms,
            resets: 0,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Selection as it was when the view opened.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn buffer(&self) -> &SeriesBuffer {
        &self.buffer
    }

    pub fn origin_ms(&self) -> u64 {
        self.buffer.origin_ms()
    }

    pub fn resets(&self) -> u32 {
        self.resets
    }

    pub fn next_deadline_ms(&self) -> u64 {
        self.next_tick_ms.min(self.next_reset_ms)
    }

    /// Fire the reset timer if due. The tick schedule is left alone.
    pub(crate) fn reset_if_due(&mut self, policy: &PollingConfig, now_ms: u64) -> bool {
        if now_ms < self.next_reset_ms {
            return false;
        }
        self.buffer.reset(now_ms);
        self.next_reset_ms = now_ms + policy.reset_interval_ms;
        self.resets += 1;
        true
    }

    /// Fire the tick timer if due. A tick that fell behind fires once and the
    /// schedule re-anchors on `now_ms`.
    pub(crate) fn tick_if_due(&mut self, policy: &PollingConfig, now_ms: u64) -> bool {
        if now_ms < self.next_tick_ms {
            return false;
        }
        self.next_tick_ms += policy.tick_interval_ms;
        if self.next_tick_ms <= now_ms {
            self.next_tick_ms = now_ms + policy.tick_interval_ms;
        }
        true
    }

    pub(crate) fn append(&mut self, label: String, prices: &[f64]) {
        self.buffer.append(label, prices);
    }
}
