use eframe::egui::{Button, Image, Label, RichText, Ui, Vec2};

use crate::{
    domain::{CoinDetails, MarketCoin, Symbol},
    ui::{UI_CONFIG, UI_TEXT, format_price},
};

/// What a coin card's "more info" area currently shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailView {
    Closed,
    Loading,
    Open(CoinDetails),
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardAction {
    /// The selection switch was flipped to `selected`.
    Toggle { symbol: Symbol, selected: bool },
    /// "More info" / "close info" pressed.
    ToggleDetails { coin_id: String },
}

/// Grid of coin cards. At most one action per frame.
pub fn render_coin_grid(
    ui: &mut Ui,
    coins: &[&MarketCoin],
    is_selected: impl Fn(&Symbol) -> bool,
    detail_view: impl Fn(&str) -> DetailView,
) -> Option<CardAction> {
    let mut action = None;
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = Vec2::splat(10.0);
        for coin in coins {
            let Some(symbol) = coin.ticker() else {
                continue;
            };
            let selected = is_selected(&symbol);
            if let Some(a) = render_card(ui, coin, symbol, selected, detail_view(&coin.id)) {
                action = Some(a);
            }
        }
    });
    action
}

fn render_card(
    ui: &mut Ui,
    coin: &MarketCoin,
    symbol: Symbol,
    selected: bool,
    details: DetailView,
) -> Option<CardAction> {
    let mut action = None;
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(UI_CONFIG.card_width);
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                if let Some(url) = &coin.image {
                    ui.add(
                        Image::new(url.as_str())
                            .fit_to_exact_size(Vec2::splat(UI_CONFIG.coin_icon_size)),
                    );
                }
                let mut checked = selected;
                if ui.checkbox(&mut checked, "").changed() {
                    action = Some(CardAction::Toggle {
                        symbol: symbol.clone(),
                        selected: checked,
                    });
                }
            });
            ui.label(
                RichText::new(symbol.as_str())
                    .strong()
                    .size(18.0)
                    .color(UI_CONFIG.colors.heading),
            );
            ui.add(Label::new(RichText::new(&coin.name).color(UI_CONFIG.colors.muted)).truncate());

            let (text, enabled) = match details {
                DetailView::Loading => (UI_TEXT.loading, false),
                DetailView::Open(_) => (UI_TEXT.close_info, true),
                DetailView::Closed | DetailView::Failed => (UI_TEXT.more_info, true),
            };
            if ui.add_enabled(enabled, Button::new(text)).clicked() {
                action = Some(CardAction::ToggleDetails {
                    coin_id: coin.id.clone(),
                });
            }

            match details {
                DetailView::Open(d) => {
                    ui.label(format!("$ {}", format_price(d.usd)));
                    ui.label(format!("€ {}", format_price(d.eur)));
                    ui.label(format!("₪ {}", format_price(d.ils)));
                }
                DetailView::Failed => {
                    ui.label(RichText::new(UI_TEXT.details_error).color(UI_CONFIG.colors.error));
                }
                DetailView::Closed | DetailView::Loading => {}
            }
        });
    });
    action
}
