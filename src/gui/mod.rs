pub mod app;
pub mod colors;
pub mod search;

use crate::{logging, AppConfig};

/// Entry point: build the catalog and open the native window
pub fn run(config: AppConfig) -> crate::Result<()> {
    let catalog = config.build_catalog();
    logging::info("GUI", &format!("Catalog ready: {} emoji", catalog.len()));

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("emoji+")
            .with_inner_size(config.window_size)
            .with_min_inner_size([240.0, 200.0]),
        ..Default::default()
    };

    eframe::run_native(
        "emojiplus",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::EmojiApp::new(cc, config, catalog)))),
    )?;
    Ok(())
}
