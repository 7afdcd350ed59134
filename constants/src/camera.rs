/// Distance from the orbit origin when the viewer opens
pub const INITIAL_DISTANCE: f32 = 50.0;

/// Degrees of rotation per pixel of pointer travel while dragging
pub const ROTATE_SENSITIVITY: f32 = 0.1;

/// Distance change per scroll line
pub const ZOOM_STEP: f32 = 2.0;

/// Closest the camera may get to the orbit origin
pub const MIN_DISTANCE: f32 = 0.1;

/// Scale applied to pixel-unit scroll deltas to bring them in line with line-unit deltas
pub const PIXEL_SCROLL_SCALE: f32 = 0.05;
