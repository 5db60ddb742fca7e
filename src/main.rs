mod app;
mod config;
mod error;
mod image_check;
mod launcher;

use arboard::Clipboard;
use eframe::egui;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::config::Config;
use crate::launcher::LauncherWriter;

const WINDOW_SIZE: [f32; 2] = [500.0, 600.0];

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> eframe::Result<()> {
    init_logging();

    let config = Config::load();
    let writer = config.applications_dir().map(LauncherWriter::new);
    match &writer {
        Ok(writer) => info!("launchers go to {:?}", writer.dir()),
        Err(e) => warn!("{}", e),
    }
    let clipboard = match Clipboard::new() {
        Ok(clipboard) => Some(clipboard),
        Err(e) => {
            warn!("clipboard unavailable: {}", e);
            None
        }
    };

    eframe::run_native(
        "Create Desktop Launcher",
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(WINDOW_SIZE)
                .with_resizable(false)
                .with_drag_and_drop(true),
            ..Default::default()
        },
        Box::new(move |_| Ok(Box::new(App::new(writer, clipboard)))),
    )
}
