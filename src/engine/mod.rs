mod controller;
mod messages;
mod poller;
mod session;

pub use controller::{SessionController, SessionState};
pub use messages::{ApplyOutcome, PriceRequest, SessionId, TickOutcome};
pub use poller::{PricePoller, fetch_tick};
pub use session::ChartSession;
