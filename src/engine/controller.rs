#[cfg(debug_assertions)]
use crate::config::DF;
use crate::{
    config::{POLLING, PollingConfig},
    domain::Symbol,
    engine::{ApplyOutcome, ChartSession, PriceRequest, SessionId, TickOutcome},
};

/// Lifecycle of the live reports view.
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    #[default]
    Inactive,
    /// View open with nothing selected: placeholder only, no polling.
    ActiveEmpty,
    ActivePolling(ChartSession),
}

/// Owns the live chart session and its timers.
///
/// All time is passed in explicitly (milliseconds on a monotonic clock), so the
/// frame loop drives it with the real clock and tests drive it by hand.
#[derive(Debug)]
pub struct SessionController {
    policy: PollingConfig,
    state: SessionState,
    next_id: u64,
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new(POLLING)
    }
}

impl SessionController {
    pub fn new(policy: PollingConfig) -> Self {
        Self {
            policy,
            state: SessionState::Inactive,
            next_id: 1,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn session(&self) -> Option<&ChartSession> {
        match &self.state {
            SessionState::ActivePolling(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.state, SessionState::Inactive)
    }

    /// The reports view became visible. Snapshots `selection`; with at least one
    /// symbol a new session starts and its immediate first tick is returned.
    /// Already active is a no-op.
    pub fn enter(&mut self, selection: &[Symbol], now_ms: u64) -> Option<PriceRequest> {
        if self.is_active() {
            return None;
        }
        if selection.is_empty() {
            #[cfg(debug_assertions)]
            if DF.log_session {
                log::info!("Reports opened with no coins selected");
            }
            self.state = SessionState::ActiveEmpty;
            return None;
        }

        let id = SessionId(self.next_id);
        self.next_id += 1;

        #[cfg(debug_assertions)]
        if DF.log_session {
            log::info!("Starting live session {:?} for {:?}", id, selection);
        }

        self.state = SessionState::ActivePolling(ChartSession::start(
            id,
            selection.to_vec(),
            &self.policy,
            now_ms,
        ));
        self.advance(now_ms)
    }

    /// The reports view was navigated away from. Both timers die with the session.
    pub fn leave(&mut self) {
        #[cfg(debug_assertions)]
        if DF.log_session {
            if let Some(s) = self.session() {
                log::info!("Stopping live session {:?}", s.id());
            }
        }
        self.state = SessionState::Inactive;
    }

    /// Fire whichever timers are due at `now_ms`. Returns the tick's request, if any.
    pub fn advance(&mut self, now_ms: u64) -> Option<PriceRequest> {
        let SessionState::ActivePolling(session) = &mut self.state else {
            return None;
        };

        if session.reset_if_due(&self.policy, now_ms) {
            #[cfg(debug_assertions)]
            if DF.log_session {
                log::info!("Session {:?}: rolling window reset", session.id());
            }
        }

        if session.tick_if_due(&self.policy, now_ms) {
            return Some(PriceRequest {
                session: session.id(),
                symbols: session.symbols().to_vec(),
            });
        }
        None
    }

    /// Fold a finished fetch into the buffer if its session is still current.
    pub fn apply(&mut self, outcome: TickOutcome) -> ApplyOutcome {
        let session = match &mut self.state {
            SessionState::ActivePolling(s) if s.id() == outcome.session => s,
            _ => {
                log::debug!("Discarding stale price response for {:?}", outcome.session);
                return ApplyOutcome::Stale;
            }
        };

        match outcome.prices {
            Ok(prices) => {
                #[cfg(debug_assertions)]
                if DF.log_price_ticks {
                    log::info!("[tick {}] {:?} -> {:?}", outcome.label, session.symbols(), prices);
                }
                session.append(outcome.label, &prices);
                ApplyOutcome::Appended
            }
            Err(e) => {
                log::warn!("Price tick dropped: {}", e);
                ApplyOutcome::Dropped
            }
        }
    }

    /// When the frame loop must next call [`Self::advance`].
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.session().map(ChartSession::next_deadline_ms)
    }
}
