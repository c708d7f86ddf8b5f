/// Remote quote (price) service.
pub struct QuoteApiConfig {
    pub base_url: &'static str,
    /// Currency every tick is priced in.
    pub currency: &'static str,
}

/// Remote market list / coin detail service.
pub struct MarketApiConfig {
    pub base_url: &'static str,
    pub vs_currency: &'static str,
    pub per_page: u32,
    /// How long a fetched coin detail stays fresh.
    pub detail_ttl_ms: u64,
}

pub struct ClientDefaults {
    pub timeout_ms: u64,
}

pub struct ApiConfig {
    pub quotes: QuoteApiConfig,
    pub markets: MarketApiConfig,
    pub client: ClientDefaults,
}

pub const API: ApiConfig = ApiConfig {
    quotes: QuoteApiConfig {
        base_url: "https://min-api.cryptocompare.com",
        currency: "USD",
    },
    markets: MarketApiConfig {
        base_url: "https://api.coingecko.com/api/v3",
        vs_currency: "usd",
        per_page: 100,
        detail_ttl_ms: 120_000,
    },
    client: ClientDefaults { timeout_ms: 10_000 },
};

/// Service base URLs resolved at startup (defaults overridable from the CLI).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub quote_base_url: String,
    pub market_base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            quote_base_url: API.quotes.base_url.to_string(),
            market_base_url: API.markets.base_url.to_string(),
        }
    }
}

impl Endpoints {
    pub fn with_overrides(quote: Option<&str>, market: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            quote_base_url: quote
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.quote_base_url),
            market_base_url: market
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.market_base_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_defaults_and_drop_trailing_slash() {
        let e = Endpoints::with_overrides(Some("http://localhost:8080/"), None);
        assert_eq!(e.quote_base_url, "http://localhost:8080");
        assert_eq!(e.market_base_url, API.markets.base_url);
    }
}
