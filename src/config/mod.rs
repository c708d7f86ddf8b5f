//! Configuration module for the coin watch application.

// Can all be private now because we have a public re-export.
mod api;
mod chart;
mod debug;
mod persistence;
mod polling;
mod selection;

// Re-export commonly used items
pub use api::{API, Endpoints};
pub use chart::{CHART, series_color};
pub use debug::DF;
pub use persistence::PERSISTENCE;
pub use polling::{POLLING, PollingConfig};
pub use selection::SELECTION;
