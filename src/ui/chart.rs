use eframe::egui::{Color32, Ui, Vec2b};
use egui_plot::{Axis, AxisHints, Corner, GridMark, Legend, Line, Plot, PlotPoints};

use crate::{
    config::{CHART, series_color},
    domain::Symbol,
    models::SeriesBuffer,
};

/// Plain data for one plotted series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLine {
    pub name: String,
    pub color: Color32,
    /// `[tick index, price]`
    pub points: Vec<[f64; 2]>,
}

/// One line per snapshot symbol, coloured by position. Never fails: an empty
/// buffer gives empty lines.
pub fn chart_lines(buffer: &SeriesBuffer, symbols: &[Symbol]) -> Vec<ChartLine> {
    symbols
        .iter()
        .enumerate()
        .map(|(i, symbol)| ChartLine {
            name: symbol.to_string(),
            color: series_color(i),
            points: buffer
                .series(i)
                .map(|s| s.iter().enumerate().map(|(x, &y)| [x as f64, y]).collect())
                .unwrap_or_default(),
        })
        .collect()
}

/// Spacing (in ticks) between labelled marks so roughly `target` labels fit.
pub fn label_step(tick_count: usize, target: f64) -> f64 {
    ((tick_count as f64) / target.max(1.0)).ceil().max(1.0)
}

fn create_time_axis(labels: Vec<String>) -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .label(CHART.x_axis_title)
        .formatter(move |mark, _range| {
            let x = mark.value;
            if x < 0.0 || x.fract() != 0.0 {
                return String::new();
            }
            labels.get(x as usize).cloned().unwrap_or_default()
        })
}

fn create_price_axis() -> AxisHints<'static> {
    AxisHints::new(Axis::Y).label(CHART.y_axis_title)
}

/// Draw exactly what is in `buffer`. Read-only.
pub fn render_chart(ui: &mut Ui, buffer: &SeriesBuffer, symbols: &[Symbol]) {
    let lines = chart_lines(buffer, symbols);
    let labels: Vec<String> = buffer.labels().iter().cloned().collect();
    let step = label_step(labels.len(), CHART.x_label_count);

    Plot::new("live_chart")
        .legend(Legend::default().position(Corner::LeftTop))
        .custom_x_axes(vec![create_time_axis(labels)])
        .custom_y_axes(vec![create_price_axis()])
        .x_grid_spacer(move |input| {
            let (min, max) = input.bounds;
            let start = (min / step).ceil().max(0.0) as i64;
            let end = (max / step).floor() as i64;
            (start..=end)
                .map(|i| GridMark {
                    value: i as f64 * step,
                    step_size: step,
                })
                .collect()
        })
        // y follows the data, it is never pinned to zero.
        .auto_bounds(Vec2b::new(true, true))
        .allow_double_click_reset(false)
        .allow_scroll(false)
        .allow_drag(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            for line in lines {
                plot_ui.line(
                    Line::new(line.name, PlotPoints::new(line.points))
                        .color(line.color)
                        .width(CHART.line_width),
                );
            }
        });
}
