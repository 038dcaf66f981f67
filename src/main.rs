#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use enrolment_dashboard::{DashboardEngine, run_app};

// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// Keeps the WASM memory allocator from being stripped
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn _keep_alive() {}

// The 'start' function is the real entry point; the binary target still needs a main()
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    // A. Init Logging
    console_error_panic_hook::set_once();
    let _ = fern::Dispatch::new()
        .level(log::LevelFilter::Info)
        .chain(fern::Output::call(|record| {
            let line = format!("[{}] {}", record.level(), record.args());
            web_sys::console::log_1(&line.into());
        }))
        .apply();

    log::info!("Enrolment dashboard starting in WASM mode...");

    // B. Browser builds have no command line or file system: built-in data only
    let web_options = eframe::WebOptions::default();
    let engine = DashboardEngine::with_builtin_data();

    let window = web_sys::window().ok_or("no global `window` exists")?;
    let document = window.document().ok_or("window has no document")?;
    let canvas = document
        .get_element_by_id("the_canvas_id")
        .ok_or("failed to find canvas with id 'the_canvas_id'")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    eframe::WebRunner::new()
        .start(canvas, web_options, Box::new(move |cc| Ok(run_app(cc, engine))))
        .await
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;
    use eframe::NativeOptions;
    use enrolment_dashboard::Cli;
    use eframe::egui::ViewportBuilder;

    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Build the engine (dataset + translations + starting language)
    let engine: DashboardEngine =
        enrolment_dashboard::build_engine(&args).context("Failed to set up the dashboard")?;
    let title = engine.translations().dashboard_title.to_string();

    // D. Run Native App (no persistence: every session starts from defaults)
    let options = NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([1200.0, 760.0]),
        ..Default::default()
    };

    eframe::run_native(&title, options, Box::new(move |cc| Ok(run_app(cc, engine))))
        .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
