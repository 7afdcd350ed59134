/// Screen-space point diameter in pixels
pub const POINT_SIZE: f32 = 5.0;

/// Vertical field of view in degrees
pub const FOV_DEGREES: f32 = 45.0;

pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;

/// Point colour used when the point store carries no colour channels
pub const DEFAULT_POINT_COLOUR: [f32; 3] = [1.0, 1.0, 1.0];

/// Background clear colour (RGB)
pub const CLEAR_COLOUR: [f32; 3] = [0.0, 0.0, 0.0];

/// Shader asset used to expand each point into a screen-aligned quad
pub const POINT_SHADER_PATH: &str = "shaders/point_cloud.wgsl";

pub const HUD_FONT_SIZE: f32 = 16.0;
