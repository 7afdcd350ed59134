//! Shared defaults for the point cloud viewer.

pub mod camera;
pub mod dataset;
pub mod export;
pub mod render_settings;
pub mod window;
