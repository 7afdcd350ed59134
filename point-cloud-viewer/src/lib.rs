//! Interactive point cloud viewer with an orbit camera and PLY/CSV export.

pub mod config;
pub mod engine;
pub mod error;
pub mod export;

pub use config::ViewerConfig;
pub use engine::core::app_setup::run_viewer;
pub use engine::point_store::PointStore;
pub use error::ViewerError;
