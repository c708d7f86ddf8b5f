use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

/// Palette shared by every page.
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub nav_bar: Color32,
    pub card: Color32,
    pub card_border: Color32,
    pub error: Color32,
    pub muted: Color32,
}

#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub card_width: f32,
    pub coin_icon_size: f32,
}

pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::LIGHT_GRAY,
        heading: Color32::from_rgb(0xf1, 0xc4, 0x0f),
        central_panel: Color32::from_rgb(24, 26, 32),
        nav_bar: Color32::from_rgb(17, 18, 22),
        card: Color32::from_rgb(36, 39, 48),
        card_border: Color32::from_gray(60),
        error: Color32::from_rgb(0xe7, 0x4c, 0x3c),
        muted: Color32::from_gray(140),
    },
    card_width: 170.0,
    coin_icon_size: 40.0,
};

impl UiConfig {
    fn filled(fill: Color32, margin: i8) -> Frame {
        Frame::new().fill(fill).inner_margin(Margin::same(margin))
    }

    pub fn top_panel_frame(&self) -> Frame {
        Self::filled(self.colors.nav_bar, 8)
    }

    pub fn central_panel_frame(&self) -> Frame {
        Self::filled(self.colors.central_panel, 12)
    }

    /// Rounded, outlined box around one coin card.
    pub fn card_frame(&self) -> Frame {
        Self::filled(self.colors.card, 10)
            .stroke(Stroke::new(1.0, self.colors.card_border))
            .corner_radius(CornerRadius::same(6))
    }
}
