use std::env;

use acid_window::config::PanelConfig;
use acid_window::ui::app::App;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional path to a JSON config file; defaults otherwise.
    let config = match env::args().nth(1) {
        Some(path) => match PanelConfig::load(&path) {
            Ok(config) => {
                log::info!("loaded config from {path}");
                config
            }
            Err(e) => {
                log::warn!("ignoring config {path}: {e}");
                PanelConfig::default()
            }
        },
        None => PanelConfig::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_title("Acid Trip"),
        ..Default::default()
    };
    eframe::run_native(
        "Acid Trip",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, config)))),
    )
}
