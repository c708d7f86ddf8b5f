#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // Windows release: hide console window
use coin_watch::{Cli, run_app};

#[cfg(not(target_arch = "wasm32"))]
use {
    clap::Parser,
    eframe::{NativeOptions, egui::ViewportBuilder},
    std::{panic, path::PathBuf},
    coin_watch::PERSISTENCE,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, prelude::*};

const APP_NAME: &str = "Coin Watch";

/// (everything else, this crate) log levels.
fn log_levels() -> (log::LevelFilter, log::LevelFilter) {
    if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
fn init_web_log() {
    let (global_level, crate_level) = log_levels();

    // Already initialised on hot reload; nothing to do.
    let _ = fern::Dispatch::new()
        .level(global_level)
        .level_for(env!("CARGO_CRATE_NAME"), crate_level)
        .chain(fern::Output::call(|record| {
            let msg = format!("[{}] {}", record.target(), record.args());
            match record.level() {
                log::Level::Error => web_sys::console::error_1(&msg.into()),
                log::Level::Warn => web_sys::console::warn_1(&msg.into()),
                log::Level::Info => web_sys::console::info_1(&msg.into()),
                log::Level::Debug | log::Level::Trace => web_sys::console::log_1(&msg.into()),
            }
        }))
        .apply();
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    init_web_log();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("page has no document");
    let canvas = document
        .get_element_by_id("coin_watch_canvas")
        .expect("missing <canvas id=\"coin_watch_canvas\">")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "coin_watch_canvas is not a canvas element")?;

    // No command line in the browser.
    let args = Cli::default();

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| Ok(Box::new(run_app(cc, args)?))),
        )
        .await
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("PANIC: {}\n{}", info, backtrace);
    }));

    let (global_level, crate_level) = log_levels();
    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), crate_level)
        .init();

    let args = Cli::parse();
    log::info!("Starting {} with {:?}", APP_NAME, args);

    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(PERSISTENCE.app.state_path)),
        viewport: ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title(format!("{} - Live Crypto Prices", APP_NAME)),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, args)?))),
    )
}
