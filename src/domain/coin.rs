use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::Symbol;

/// One row of the market snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarketCoin {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
}

impl MarketCoin {
    pub fn ticker(&self) -> Option<Symbol> {
        Symbol::new(&self.symbol)
    }

    /// Case-insensitive substring match on symbol or name.
    /// `term_lower` must already be lowercase.
    pub fn matches(&self, term_lower: &str) -> bool {
        self.symbol.to_lowercase().contains(term_lower)
            || self.name.to_lowercase().contains(term_lower)
    }
}

/// Coins whose symbol or name contains `term`. A blank term returns everything.
pub fn filter_coins<'a>(coins: &'a [MarketCoin], term: &str) -> Vec<&'a MarketCoin> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return coins.iter().collect();
    }
    coins.iter().filter(|c| c.matches(&term)).collect()
}

/// Current price of a single coin in the three display currencies.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoinDetails {
    pub usd: f64,
    pub eur: f64,
    pub ils: f64,
}

#[derive(Deserialize)]
pub(crate) struct CoinDetailsWire {
    #[serde(default)]
    market_data: Option<MarketDataWire>,
}

#[derive(Deserialize)]
struct MarketDataWire {
    #[serde(default)]
    current_price: HashMap<String, Option<f64>>,
}

impl From<CoinDetailsWire> for CoinDetails {
    fn from(wire: CoinDetailsWire) -> Self {
        let prices = wire.market_data.map(|m| m.current_price).unwrap_or_default();
        let price = |code: &str| prices.get(code).copied().flatten().unwrap_or(0.0);
        CoinDetails {
            usd: price("usd"),
            eur: price("eur"),
            ils: price("ils"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(id: &str, symbol: &str, name: &str) -> MarketCoin {
        MarketCoin {
            id: id.into(),
            symbol: symbol.into(),
            name: name.into(),
            image: None,
            current_price: None,
        }
    }

    #[test]
    fn filter_matches_symbol_or_name_ignoring_case() {
        let coins = vec![
            coin("bitcoin", "btc", "Bitcoin"),
            coin("ethereum", "eth", "Ethereum"),
            coin("wrapped-bitcoin", "wbtc", "Wrapped Bitcoin"),
        ];
        let ids = |term: &str| -> Vec<String> {
            filter_coins(&coins, term).iter().map(|c| c.id.clone()).collect()
        };
        assert_eq!(ids("BTC"), vec!["bitcoin", "wrapped-bitcoin"]);
        assert_eq!(ids("ether"), vec!["ethereum"]);
        assert_eq!(ids(""), vec!["bitcoin", "ethereum", "wrapped-bitcoin"]);
        assert!(ids("doge").is_empty());
    }

    #[test]
    fn market_row_tolerates_missing_optional_fields() {
        let json = r#"[{"id":"bitcoin","symbol":"btc","name":"Bitcoin","current_price":null}]"#;
        let coins: Vec<MarketCoin> = serde_json::from_str(json).unwrap();
        assert_eq!(coins[0].ticker().unwrap().as_str(), "BTC");
        assert_eq!(coins[0].image, None);
    }

    #[test]
    fn details_default_missing_currencies_to_zero() {
        let json = r#"{"market_data":{"current_price":{"usd":50000.5,"eur":46000.0}}}"#;
        let wire: CoinDetailsWire = serde_json::from_str(json).unwrap();
        let d = CoinDetails::from(wire);
        assert_eq!(d.usd, 50000.5);
        assert_eq!(d.eur, 46000.0);
        assert_eq!(d.ils, 0.0);

        let empty: CoinDetailsWire = serde_json::from_str("{}").unwrap();
        assert_eq!(CoinDetails::from(empty), CoinDetails::default());
    }
}
