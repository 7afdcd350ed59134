//! Point cloud viewer entry point
use std::env;
use std::path::Path;

use point_cloud_viewer::engine::data_source;
use point_cloud_viewer::export::export_point_store;
use point_cloud_viewer::{ViewerConfig, ViewerError, run_viewer};

fn main() -> Result<(), ViewerError> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [config.json]", args[0]);
        std::process::exit(1);
    }

    let config = match args.get(1) {
        Some(path) => ViewerConfig::load(Path::new(path))?,
        None => ViewerConfig::default(),
    };

    println!("=== POINT CLOUD VIEWER ===");
    println!(
        "Generating {} {:?} points (spread {})",
        config.dataset.count(),
        config.dataset.kind,
        config.dataset.spread()
    );

    let store = data_source::generate(
        config.dataset.kind,
        config.dataset.count(),
        config.dataset.spread(),
        config.dataset.seed,
    )?;

    // The app keeps its own handle to the same points; exports run after it closes
    run_viewer(&config, store.clone())?;
    export_point_store(&config.export, config.dataset.kind, &store)?;

    Ok(())
}
