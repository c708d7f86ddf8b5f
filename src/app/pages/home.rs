use eframe::egui::{Label, RichText, ScrollArea, Spinner, TextEdit, Ui};

use crate::{
    app::{App, CatalogState, DetailPanel},
    domain::filter_coins,
    ui::{CardAction, DetailView, UI_CONFIG, UI_TEXT, render_coin_grid},
};

impl App {
    pub(crate) fn render_home_page(&mut self, ui: &mut Ui) {
        ui.add(
            TextEdit::singleline(&mut self.memory.search)
                .hint_text(UI_TEXT.search_hint)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        let action = match &self.catalog {
            CatalogState::Loading(_) => {
                ui.horizontal(|ui| {
                    ui.add(Spinner::new());
                    ui.label(UI_TEXT.markets_loading);
                });
                None
            }
            CatalogState::Failed(reason) => {
                ui.label(RichText::new(UI_TEXT.markets_error).color(UI_CONFIG.colors.error));
                ui.add(Label::new(RichText::new(reason).small().color(UI_CONFIG.colors.muted)));
                if ui.button(UI_TEXT.markets_retry).clicked() {
                    self.retry_market_fetch();
                }
                return;
            }
            CatalogState::Ready(coins) => {
                let visible = filter_coins(coins, &self.memory.search);
                if visible.is_empty() {
                    ui.label(RichText::new(UI_TEXT.markets_no_match).color(UI_CONFIG.colors.muted));
                    return;
                }
                let selection = &self.selection;
                let panels = &self.detail_panels;
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        render_coin_grid(
                            ui,
                            &visible,
                            |symbol| selection.contains(symbol),
                            |id| panels.get(id).map_or(DetailView::Closed, DetailPanel::view),
                        )
                    })
                    .inner
            }
        };

        match action {
            Some(CardAction::Toggle { symbol, selected }) => self.toggle_coin(symbol, selected),
            Some(CardAction::ToggleDetails { coin_id }) => self.toggle_details(coin_id),
            None => {}
        }
    }
}
