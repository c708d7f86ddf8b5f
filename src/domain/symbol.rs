use std::fmt;

use serde::{Deserialize, Serialize};

/// An uppercase ticker symbol such as `BTC`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Trims and uppercases `raw`. Returns `None` for blank input.
    pub fn new(raw: &str) -> Option<Self> {
        let s = raw.trim();
        if s.is_empty() {
            return None;
        }
        Some(Self(s.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Symbol {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Symbol::new(&value).ok_or_else(|| format!("invalid symbol '{}'", value))
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}

/// Comma-joined list as used by batched quote queries (`BTC,ETH`).
pub fn join_symbols(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(Symbol::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalises_case_and_whitespace() {
        assert_eq!(Symbol::new(" btc ").map(String::from), Some("BTC".to_string()));
        assert_eq!(Symbol::new("Eth").unwrap().as_str(), "ETH");
    }

    #[test]
    fn rejects_blank() {
        assert!(Symbol::new("").is_none());
        assert!(Symbol::new("   ").is_none());
        assert!(serde_json::from_str::<Symbol>("\"\"").is_err());
    }

    #[test]
    fn joins_in_order() {
        let syms: Vec<Symbol> = ["btc", "eth", "sol"].iter().filter_map(|s| Symbol::new(s)).collect();
        assert_eq!(join_symbols(&syms), "BTC,ETH,SOL");
        assert_eq!(join_symbols(&[]), "");
    }
}
