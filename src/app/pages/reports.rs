use eframe::egui::{RichText, Ui};

use crate::{
    app::App,
    domain::join_symbols,
    engine::SessionState,
    config::series_color,
    ui::{UI_CONFIG, UI_TEXT, format_price, render_chart},
    utils::format_elapsed,
};

impl App {
    pub(crate) fn render_reports_page(&mut self, ui: &mut Ui) {
        ui.heading(RichText::new(UI_TEXT.reports_title).color(UI_CONFIG.colors.heading));
        ui.add_space(6.0);

        match self.controller.state() {
            SessionState::Inactive => {}
            SessionState::ActiveEmpty => {
                ui.label(RichText::new(UI_TEXT.reports_empty).color(UI_CONFIG.colors.muted));
            }
            SessionState::ActivePolling(session) => {
                let buffer = session.buffer();
                let age = self.clock.now_ms().saturating_sub(session.origin_ms());
                ui.horizontal(|ui| {
                    ui.label(format!(
                        "{}: {}",
                        UI_TEXT.reports_tracking,
                        join_symbols(session.symbols())
                    ));
                    ui.separator();
                    ui.label(format!(
                        "{}: {}/{}",
                        UI_TEXT.reports_window,
                        buffer.len(),
                        buffer.capacity()
                    ));
                    ui.separator();
                    ui.label(
                        RichText::new(format!("{} {}", format_elapsed(age), UI_TEXT.reports_since_reset))
                            .color(UI_CONFIG.colors.muted),
                    );
                });
                if buffer.is_empty() {
                    ui.label(RichText::new(UI_TEXT.reports_waiting).color(UI_CONFIG.colors.muted));
                } else {
                    ui.horizontal_wrapped(|ui| {
                        for (i, symbol) in session.symbols().iter().enumerate() {
                            if let Some(price) = buffer.latest(i) {
                                ui.label(
                                    RichText::new(format!("{} ${}", symbol, format_price(price)))
                                        .strong()
                                        .color(series_color(i)),
                                );
                            }
                        }
                    });
                }
                crate::trace_time!("render_chart", 4_000, {
                    render_chart(ui, buffer, session.symbols())
                });
            }
        }
    }
}
