use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config::API,
    data::{FetchError, MaybeSend, http::get_json},
    domain::{CoinDetails, CoinDetailsWire, MarketCoin},
};

/// Abstract interface for the market list and per-coin details.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MarketService: MaybeSend {
    async fn fetch_markets(&self) -> Result<Vec<MarketCoin>, FetchError>;

    async fn fetch_details(&self, coin_id: &str) -> Result<CoinDetails, FetchError>;
}

pub struct CoinGeckoClient {
    client: Client,
    base_url: String,
}

impl CoinGeckoClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn markets_url(&self) -> String {
        format!(
            "{}/coins/markets?vs_currency={}&per_page={}",
            self.base_url, API.markets.vs_currency, API.markets.per_page
        )
    }

    fn details_url(&self, coin_id: &str) -> String {
        format!("{}/coins/{}", self.base_url, coin_id)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MarketService for CoinGeckoClient {
    async fn fetch_markets(&self) -> Result<Vec<MarketCoin>, FetchError> {
        get_json(&self.client, &self.markets_url()).await
    }

    async fn fetch_details(&self, coin_id: &str) -> Result<CoinDetails, FetchError> {
        let wire: CoinDetailsWire = get_json(&self.client, &self.details_url(coin_id)).await?;
        Ok(wire.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls() {
        let c = CoinGeckoClient::new(Client::new(), "https://api.example/v3");
        assert_eq!(
            c.markets_url(),
            "https://api.example/v3/coins/markets?vs_currency=usd&per_page=100"
        );
        assert_eq!(c.details_url("bitcoin"), "https://api.example/v3/coins/bitcoin");
    }
}
