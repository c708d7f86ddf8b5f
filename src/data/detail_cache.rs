use std::collections::HashMap;

use crate::domain::CoinDetails;

struct CachedDetail {
    details: CoinDetails,
    fetched_at_ms: u64,
}

/// Per-coin detail cache with a fixed time-to-live.
pub struct DetailCache {
    ttl_ms: u64,
    entries: HashMap<String, CachedDetail>,
}

impl DetailCache {
    pub fn new(ttl_ms: u64) -> Self {
        Self {
            ttl_ms,
            entries: HashMap::new(),
        }
    }

    /// Cached details younger than the TTL.
    pub fn get_fresh(&self, coin_id: &str, now_ms: u64) -> Option<CoinDetails> {
        self.entries
            .get(coin_id)
            .filter(|c| now_ms.saturating_sub(c.fetched_at_ms) < self.ttl_ms)
            .map(|c| c.details)
    }

    pub fn insert(&mut self, coin_id: &str, details: CoinDetails, now_ms: u64) {
        self.entries.insert(
            coin_id.to_string(),
            CachedDetail {
                details,
                fetched_at_ms: now_ms,
            },
        );
    }
}
