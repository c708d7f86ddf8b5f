use eframe::egui::{RichText, Ui};

use crate::{
    app::App,
    config::POLLING,
    ui::{UI_CONFIG, UI_TEXT},
    utils::format_elapsed,
};

impl App {
    pub(crate) fn render_about_page(&mut self, ui: &mut Ui) {
        ui.heading(RichText::new(UI_TEXT.app_title).color(UI_CONFIG.colors.heading));
        ui.add_space(6.0);
        ui.label(UI_TEXT.about_body);
        ui.add_space(12.0);
        ui.label(
            RichText::new(format!(
                "Chart window {} samples. Refreshed every {}. Cleared every {}.",
                POLLING.window_capacity,
                format_elapsed(POLLING.tick_interval_ms),
                format_elapsed(POLLING.reset_interval_ms),
            ))
            .color(UI_CONFIG.colors.muted),
        );
        ui.label(
            RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                .small()
                .color(UI_CONFIG.colors.muted),
        );
    }
}
