use crate::{
    data::FetchError,
    domain::Symbol,
};

/// Identity of one reports-view activation. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub(crate) u64);

/// A price fetch the controller wants issued for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRequest {
    pub session: SessionId,
    pub symbols: Vec<Symbol>,
}

/// The result of a tick's fetch, tagged with the session it was issued for.
#[derive(Debug)]
pub struct TickOutcome {
    pub session: SessionId,
    /// Display label for the moment the response arrived.
    pub label: String,
    /// One price per requested symbol, in request order.
    pub prices: Result<Vec<f64>, FetchError>,
}

/// What the controller did with a [`TickOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// One sample per symbol was appended.
    Appended,
    /// The fetch failed. Buffer untouched.
    Dropped,
    /// The owning session is gone. Discarded.
    Stale,
}
