use std::path::PathBuf;

mod controller;
mod platform;
mod ui;

use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::ui::{StartupConfig, WindroseGuiApp};

#[derive(Parser, Debug)]
#[command(about = "Windrose graph generator")]
struct Args {
    /// Windrose JSON file to open directly, skipping the tool selection page.
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Windrose Graph Generator")
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([480.0, 420.0]),
        ..Default::default()
    };
    let startup = StartupConfig {
        input_file: args.file,
    };
    eframe::run_native(
        "Windrose Graph Generator",
        options,
        Box::new(|_cc| Ok(Box::new(WindroseGuiApp::new(startup)))),
    )
    .map_err(|err| anyhow::anyhow!("window event loop failed: {err}"))
}
