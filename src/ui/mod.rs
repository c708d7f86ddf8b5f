mod chart;
mod coin_cards;
mod nav;
mod replace_dialog;
mod ui_config;
mod ui_text;
mod utils;

pub use chart::{ChartLine, chart_lines, label_step, render_chart};

pub(crate) use coin_cards::{CardAction, DetailView, render_coin_grid};
pub(crate) use nav::render_nav_bar;
pub(crate) use replace_dialog::{DialogAction, ReplaceDialog, render_replace_dialog};
pub(crate) use ui_config::UI_CONFIG;
pub(crate) use ui_text::UI_TEXT;
pub(crate) use utils::format_price;
