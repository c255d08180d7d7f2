mod app;
mod camera;
mod color;
mod data;
mod grid;
mod state;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};
use app::StrataApp;
use camera::{ISOMETRIC, TOP_DOWN};
use eframe::egui;
use state::Scene;

/// Input table location, relative to the working directory.
const DATA_PATH: &str = "test.csv";

fn main() -> Result<()> {
    env_logger::init();

    // Fail-fast: any load or parse problem aborts before a window opens.
    let dataset = data::loader::load_file(Path::new(DATA_PATH))
        .with_context(|| format!("loading {DATA_PATH}"))?;
    log::info!(
        "loaded {} records across {} blocks (max layer {})",
        dataset.len(),
        dataset.block_count(),
        dataset.max_layer
    );

    let scene = Scene::from_dataset(dataset);

    // Two passes over the same scene; each window blocks until dismissed.
    for view in [ISOMETRIC, TOP_DOWN] {
        let pass_scene = scene.clone();
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1200.0, 1000.0])
                .with_min_inner_size([600.0, 400.0]),
            ..Default::default()
        };

        eframe::run_native(
            &format!("Strata – {}", view.window_label),
            options,
            Box::new(move |_cc| Ok(Box::new(StrataApp::new(pass_scene, view)))),
        )
        .map_err(|e| anyhow::anyhow!("running {} window: {e}", view.window_label))?;
    }

    Ok(())
}
