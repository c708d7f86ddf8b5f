#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for main.rs)
pub use app::App;
pub use config::PERSISTENCE;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Open straight on the Live Reports page
    #[arg(long, default_value_t = false)]
    pub reports: bool,

    /// Base URL of the price quote service
    #[arg(long)]
    pub quote_url: Option<String>,

    /// Base URL of the market list / coin detail service
    #[arg(long)]
    pub market_url: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<App> {
    App::new(cc, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_home_page_and_stock_endpoints() {
        let args = Cli::parse_from(["coin-watch"]);
        assert!(!args.reports);
        assert!(args.quote_url.is_none());
        assert!(args.market_url.is_none());
    }

    #[test]
    fn cli_accepts_overrides() {
        let args = Cli::parse_from([
            "coin-watch",
            "--reports",
            "--quote-url",
            "http://localhost:9000",
        ]);
        assert!(args.reports);
        assert_eq!(args.quote_url.as_deref(), Some("http://localhost:9000"));
    }
}
