//! Error types surfaced by the viewer and its exporters
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PointStoreError {
    #[error("Colour count {colours} does not match point count {points}")]
    ColourCountMismatch { points: usize, colours: usize },

    #[error("Row {row} has {width} values, expected 3 (xyz) or 6 (xyz + rgb)")]
    UnsupportedRowWidth { row: usize, width: usize },

    #[error("Row {row} has {width} values but earlier rows have {expected}")]
    MixedRowWidth {
        row: usize,
        width: usize,
        expected: usize,
    },

    #[error("Spread must be a finite non-negative number, got {0}")]
    InvalidSpread(f32),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Viewer initialisation failed: {0}")]
    Initialization(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    PointStore(#[from] PointStoreError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
