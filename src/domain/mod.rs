// Domain types and value objects
mod coin;
mod symbol;

pub(crate) use coin::CoinDetailsWire;

// Re-export commonly used types to the world
pub use coin::{CoinDetails, MarketCoin, filter_coins};
pub use symbol::{Symbol, join_symbols};
