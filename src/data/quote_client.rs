use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::{
    config::API,
    data::{FetchError, MaybeSend, http::get_json},
    domain::{Symbol, join_symbols},
};

/// Price used for a symbol the quote service did not return.
pub const MISSING_PRICE: f64 = 0.0;

/// Abstract interface for the batched price service.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait QuoteService: MaybeSend {
    /// Current price of every symbol in one request.
    async fn fetch_prices(&self, symbols: &[Symbol]) -> Result<QuoteSnapshot, FetchError>;
}

/// Prices returned by one batched quote request, keyed by symbol.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteSnapshot {
    prices: HashMap<String, f64>,
}

impl QuoteSnapshot {
    /// Parse `{"BTC":{"USD":50000}, ...}`. Entries without a numeric `currency`
    /// field are skipped; a body that is not a JSON object is an error.
    pub fn from_json(body: Value, currency: &str) -> Result<Self, FetchError> {
        let entries: HashMap<String, Value> = serde_json::from_value(body)?;
        let prices = entries
            .into_iter()
            .filter_map(|(sym, quote)| {
                let price = quote.get(currency).and_then(Value::as_f64)?;
                Some((sym.to_uppercase(), price))
            })
            .collect();
        Ok(Self { prices })
    }

    pub fn from_prices<I: IntoIterator<Item = (Symbol, f64)>>(prices: I) -> Self {
        Self {
            prices: prices
                .into_iter()
                .map(|(s, p)| (String::from(s), p))
                .collect(),
        }
    }

    pub fn price(&self, symbol: &Symbol) -> f64 {
        self.prices
            .get(symbol.as_str())
            .copied()
            .unwrap_or(MISSING_PRICE)
    }

    /// One value per requested symbol, in request order.
    pub fn prices_for(&self, symbols: &[Symbol]) -> Vec<f64> {
        symbols.iter().map(|s| self.price(s)).collect()
    }
}

/// `pricemulti` endpoint client.
pub struct HttpQuoteService {
    client: Client,
    base_url: String,
}

impl HttpQuoteService {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, symbols: &[Symbol]) -> String {
        format!(
            "{}/data/pricemulti?fsyms={}&tsyms={}",
            self.base_url,
            join_symbols(symbols),
            API.quotes.currency
        )
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl QuoteService for HttpQuoteService {
    async fn fetch_prices(&self, symbols: &[Symbol]) -> Result<QuoteSnapshot, FetchError> {
        let body: Value = get_json(&self.client, &self.url(symbols)).await?;
        QuoteSnapshot::from_json(body, API.quotes.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn syms(list: &[&str]) -> Vec<Symbol> {
        list.iter().filter_map(|s| Symbol::new(s)).collect()
    }

    #[test]
    fn extracts_usd_and_zero_fills_missing() {
        let body = json!({"BTC": {"USD": 50000}, "ETH": {"USD": 3000.5}});
        let q = QuoteSnapshot::from_json(body, "USD").unwrap();
        assert_eq!(q.prices_for(&syms(&["BTC", "ETH", "SOL"])), vec![50000.0, 3000.5, 0.0]);
    }

    #[test]
    fn non_numeric_or_error_payload_counts_as_missing() {
        let body = json!({"BTC": {"USD": "n/a"}, "Response": "Error", "Message": "fsyms param is invalid"});
        let q = QuoteSnapshot::from_json(body, "USD").unwrap();
        assert_eq!(q.prices_for(&syms(&["BTC"])), vec![0.0]);
    }

    #[test]
    fn non_object_body_is_a_decode_error() {
        let err = QuoteSnapshot::from_json(json!([1, 2, 3]), "USD").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn builds_batched_url() {
        let svc = HttpQuoteService::new(Client::new(), "https://quotes.example/");
        assert_eq!(
            svc.url(&syms(&["btc", "eth"])),
            "https://quotes.example/data/pricemulti?fsyms=BTC,ETH&tsyms=USD"
        );
    }
}
