use eframe::egui::Color32;

pub struct ChartConfig {
    /// Series colours, assigned by position in the session's symbol snapshot.
    pub palette: [Color32; 5],
    pub line_width: f32,
    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
    /// Format for tick labels (local wall-clock time).
    pub label_format: &'static str,
    /// Target number of labelled marks on the time axis.
    pub x_label_count: f64,
}

pub const CHART: ChartConfig = ChartConfig {
    palette: [
        Color32::from_rgb(0x34, 0x98, 0xdb), // Blue
        Color32::from_rgb(0xe7, 0x4c, 0x3c), // Red
        Color32::from_rgb(0x2e, 0xcc, 0x71), // Green
        Color32::from_rgb(0xf3, 0x9c, 0x12), // Orange
        Color32::from_rgb(0x9b, 0x59, 0xb6), // Purple
    ],
    line_width: 2.0,
    x_axis_title: "Time",
    y_axis_title: "Price (USD)",
    label_format: "%H:%M:%S",
    x_label_count: 6.0,
};

/// Colour of the series at `index` in the snapshot, cycling through the palette.
pub fn series_color(index: usize) -> Color32 {
    CHART.palette[index % CHART.palette.len()]
}
