pub mod camera;
pub mod core;
pub mod data_source;
pub mod input;
pub mod point_store;
pub mod render;
