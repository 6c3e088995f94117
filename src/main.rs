use rusty_sketchpad::{LaunchOptions, SketchApp, parse_config_args};

/// Launch the native egui application.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = parse_config_args(std::env::args().skip(1)).unwrap_or_else(|err| {
        log::error!("{err}, starting with default settings");
        LaunchOptions::default()
    });

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Rusty Sketchpad",
        native_options,
        Box::new(move |cc| Ok(Box::new(SketchApp::new(cc, options)?))),
    )
}
