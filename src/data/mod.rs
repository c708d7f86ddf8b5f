mod detail_cache;
mod error;
mod http;
mod market_client;
mod quote_client;
mod storage;
mod tasks;

pub use {
    detail_cache::DetailCache,
    error::FetchError,
    market_client::{CoinGeckoClient, MarketService},
    quote_client::{HttpQuoteService, MISSING_PRICE, QuoteService, QuoteSnapshot},
    storage::{KeyValueStorage, default_storage},
    tasks::{MaybeSend, TaskRunner},
};

pub(crate) use http::build_client;

#[cfg(test)]
pub(crate) use storage::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use storage::JsonFileStorage;

#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStorage;
