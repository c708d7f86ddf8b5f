use eframe::egui::{Context, RichText, TopBottomPanel};
use strum::IntoEnumIterator;

use crate::{
    app::Page,
    ui::{UI_CONFIG, UI_TEXT},
};

/// Top navigation bar. Returns the page the user clicked, if any.
pub fn render_nav_bar(ctx: &Context, current: Page) -> Option<Page> {
    let mut clicked = None;
    TopBottomPanel::top("nav_bar")
        .frame(UI_CONFIG.top_panel_frame())
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(UI_TEXT.app_title)
                        .strong()
                        .size(18.0)
                        .color(UI_CONFIG.colors.heading),
                );
                ui.separator();
                for page in Page::iter() {
                    if ui.selectable_label(page == current, page.to_string()).clicked() {
                        clicked = Some(page);
                    }
                }
            });
        });
    clicked
}
