//! Viewer configuration, loaded from an optional JSON file with defaults for every field
use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use constants::{dataset, export, render_settings, window};
use serde::{Deserialize, Serialize};

use crate::engine::data_source::DatasetKind;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowSettings,
    pub dataset: DatasetSettings,
    pub render: RenderSettings,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: window::WINDOW_WIDTH,
            height: window::WINDOW_HEIGHT,
            title: window::WINDOW_TITLE.to_string(),
        }
    }
}

/// Point source. `count` and `spread` fall back to per-kind defaults when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetSettings {
    pub kind: DatasetKind,
    pub count: Option<usize>,
    pub spread: Option<f32>,
    pub seed: Option<u64>,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            kind: DatasetKind::UniformCube,
            count: None,
            spread: None,
            seed: None,
        }
    }
}

impl DatasetSettings {
    pub fn count(&self) -> usize {
        self.count.unwrap_or(match self.kind {
            DatasetKind::UniformCube => dataset::UNIFORM_CUBE_COUNT,
            DatasetKind::StarMap => dataset::STAR_MAP_COUNT,
        })
    }

    pub fn spread(&self) -> f32 {
        self.spread.unwrap_or(match self.kind {
            DatasetKind::UniformCube => dataset::UNIFORM_CUBE_SPREAD,
            DatasetKind::StarMap => dataset::STAR_MAP_SPREAD,
        })
    }
}

/// Point drawing and projection parameters, shared with the render systems.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Screen-space point diameter in pixels
    pub point_size: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            point_size: render_settings::POINT_SIZE,
            fov_degrees: render_settings::FOV_DEGREES,
            near: render_settings::NEAR_PLANE,
            far: render_settings::FAR_PLANE,
        }
    }
}

/// Files written once the window closes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    #[serde(skip_serializing_if = "ExportPath::is_dataset_default")]
    pub ply: ExportPath,
    #[serde(skip_serializing_if = "ExportPath::is_dataset_default")]
    pub csv: ExportPath,
    /// Add rgb properties to the PLY output when the points carry colour
    pub include_colour: bool,
}

impl ExportSettings {
    pub fn ply_path(&self, kind: DatasetKind) -> Option<PathBuf> {
        self.ply.resolve(kind, export::PLY_EXTENSION)
    }

    pub fn csv_path(&self, kind: DatasetKind) -> Option<PathBuf> {
        self.csv.resolve(kind, export::CSV_EXTENSION)
    }
}

/// One export destination. A missing key picks the data set's default file,
/// `null` disables the export and a string names the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<PathBuf>", into = "Option<PathBuf>")]
pub enum ExportPath {
    #[default]
    DatasetDefault,
    Disabled,
    Path(PathBuf),
}

impl ExportPath {
    pub fn is_dataset_default(&self) -> bool {
        matches!(self, Self::DatasetDefault)
    }

    fn resolve(&self, kind: DatasetKind, extension: &str) -> Option<PathBuf> {
        match self {
            Self::DatasetDefault => {
                let stem = match kind {
                    DatasetKind::UniformCube => export::UNIFORM_CUBE_FILE_STEM,
                    DatasetKind::StarMap => export::STAR_MAP_FILE_STEM,
                };
                Some(PathBuf::from(stem).with_extension(extension))
            }
            Self::Disabled => None,
            Self::Path(path) => Some(path.clone()),
        }
    }
}

impl From<Option<PathBuf>> for ExportPath {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Disabled, Self::Path)
    }
}

impl From<ExportPath> for Option<PathBuf> {
    fn from(path: ExportPath) -> Self {
        match path {
            ExportPath::Path(path) => Some(path),
            ExportPath::DatasetDefault | ExportPath::Disabled => None,
        }
    }
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::InvalidValue(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }

        if self.dataset.count() == 0 {
            return Err(ConfigError::InvalidValue(
                "dataset count must be at least 1".to_string(),
            ));
        }

        let spread = self.dataset.spread();
        if !spread.is_finite() || spread < 0.0 {
            return Err(ConfigError::InvalidValue(format!(
                "dataset spread must be a finite non-negative number, got {spread}"
            )));
        }

        let render = &self.render;
        if !(render.point_size.is_finite() && render.point_size > 0.0) {
            return Err(ConfigError::InvalidValue(format!(
                "point size must be positive, got {}",
                render.point_size
            )));
        }

        if !(render.fov_degrees > 0.0 && render.fov_degrees < 180.0) {
            return Err(ConfigError::InvalidValue(format!(
                "field of view must be between 0 and 180 degrees, got {}",
                render.fov_degrees
            )));
        }

        if !(render.near > 0.0 && render.near < render.far && render.far.is_finite()) {
            return Err(ConfigError::InvalidValue(format!(
                "clip planes must satisfy 0 < near < far, got near {} far {}",
                render.near, render.far
            )));
        }

        Ok(())
    }
}
