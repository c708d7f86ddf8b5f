// src/app/state.rs

use poll_promise::Promise;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::{
    data::FetchError,
    domain::{CoinDetails, MarketCoin},
    ui::DetailView,
};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter, Display,
)]
pub enum Page {
    #[default]
    #[strum(to_string = "Home")]
    Home,
    #[strum(to_string = "Live Reports")]
    Reports,
    #[strum(to_string = "About")]
    About,
}

/// UI state that survives restarts (saved through eframe persistence).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct UiMemory {
    pub(crate) page: Page,
    pub(crate) search: String,
}

pub(crate) type MarketsPromise = Promise<Result<Vec<MarketCoin>, FetchError>>;
pub(crate) type DetailsPromise = Promise<Result<CoinDetails, FetchError>>;

/// Market list lifecycle on the Home page.
pub(crate) enum CatalogState {
    Loading(MarketsPromise),
    Ready(Vec<MarketCoin>),
    Failed(String),
}

/// An expanded "more info" area on a coin card.
pub(crate) enum DetailPanel {
    Loading(DetailsPromise),
    Open(CoinDetails),
    Failed,
}

impl DetailPanel {
    pub(crate) fn view(&self) -> DetailView {
        match self {
            DetailPanel::Loading(_) => DetailView::Loading,
            DetailPanel::Open(d) => DetailView::Open(*d),
            DetailPanel::Failed => DetailView::Failed,
        }
    }
}
