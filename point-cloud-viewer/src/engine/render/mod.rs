//! Point cloud rendering.
//!
//! Every point becomes a screen-aligned quad of fixed pixel size, drawn by a
//! custom material. Also hosts the scene setup and the on-screen stats overlay.

/// On-screen FPS, point count and camera distance overlay.
pub mod hud;

/// Material that expands point vertices into screen-space quads.
pub mod point_material;

/// Mesh builder turning the point store into quad vertices.
pub mod point_mesh;

/// Startup system spawning the scene camera and the point cloud entity.
pub mod scene;
