use eframe::egui;

mod app;
mod config;
mod content;
mod input;
mod layout;
mod state;
mod style;
mod view;

use app::Zillio;
use config::Config;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = Config::load();
    if let Err(e) = Config::create_default() {
        log::warn!("could not write default config: {e}");
    }

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([config.window.width, config.window.height])
        .with_min_inner_size([480.0, 480.0])
        .with_title("Zillio · Enterprise Intelligence");
    if let Some(icon) = load_icon() {
        viewport = viewport.with_icon(icon);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Zillio",
        options,
        Box::new(move |_cc| Ok(Box::new(Zillio::new(config)))),
    )
}

/// Decode the bundled window icon; run without one if that fails.
fn load_icon() -> Option<egui::IconData> {
    let bytes = include_bytes!("../assets/icon.png");
    let image = image::load_from_memory(bytes).ok()?.into_rgba8();
    let (width, height) = image.dimensions();
    Some(egui::IconData {
        rgba: image.into_raw(),
        width,
        height,
    })
}
