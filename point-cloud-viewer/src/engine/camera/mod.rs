//! Orbit camera for point cloud inspection.
//!
//! Holds the distance and the two orbit angles driven by pointer input and
//! turns them into a view transform once per frame.

/// Orbit camera resource and the system that applies it to the scene camera.
pub mod orbit_camera;
