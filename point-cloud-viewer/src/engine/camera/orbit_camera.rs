use bevy::prelude::*;
use constants::camera::{INITIAL_DISTANCE, MIN_DISTANCE, ROTATE_SENSITIVITY, ZOOM_STEP};

/// Marker for the scene camera driven by [`OrbitCamera`].
#[derive(Component)]
pub struct OrbitView;

/// Orbit camera state. Angles are in degrees and unbounded; distance never drops
/// below [`MIN_DISTANCE`].
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    distance: f32,
    angle_x: f32,
    angle_y: f32,
}

impl OrbitCamera {
    pub fn new(distance: f32) -> Self {
        let distance = if distance.is_finite() {
            distance.max(MIN_DISTANCE)
        } else {
            INITIAL_DISTANCE
        };

        Self {
            distance,
            angle_x: 0.0,
            angle_y: 0.0,
        }
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Rotation around the Y axis, driven by horizontal pointer travel
    pub fn angle_x(&self) -> f32 {
        self.angle_x
    }

    /// Rotation around the X axis, driven by vertical pointer travel
    pub fn angle_y(&self) -> f32 {
        self.angle_y
    }

    /// Rotate by a pointer displacement in pixels.
    pub fn apply(&mut self, delta_x: f32, delta_y: f32) {
        let angle_x = self.angle_x + delta_x * ROTATE_SENSITIVITY;
        let angle_y = self.angle_y + delta_y * ROTATE_SENSITIVITY;

        if angle_x.is_finite() && angle_y.is_finite() {
            self.angle_x = angle_x;
            self.angle_y = angle_y;
        }
    }

    /// Move along the view axis. Positive deltas (scrolling forward) move closer.
    pub fn zoom(&mut self, delta: f32) {
        let distance = self.distance - delta * ZOOM_STEP;
        if distance.is_finite() {
            self.distance = distance.max(MIN_DISTANCE);
        }
    }

    /// World-to-view matrix: translate by `-distance` on Z, then rotate by `angle_y`
    /// around X, then by `angle_x` around Y.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -self.distance))
            * Mat4::from_rotation_x(self.angle_y.to_radians())
            * Mat4::from_rotation_y(self.angle_x.to_radians())
    }

    /// Camera entity transform, the inverse of [`Self::view_matrix`].
    pub fn transform(&self) -> Transform {
        let rotation = Quat::from_rotation_y(-self.angle_x.to_radians())
            * Quat::from_rotation_x(-self.angle_y.to_radians());

        Transform {
            translation: rotation * Vec3::new(0.0, 0.0, self.distance),
            rotation,
            scale: Vec3::ONE,
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(INITIAL_DISTANCE)
    }
}

/// Copy the orbit state onto the scene camera once per frame.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut camera_query: Query<&mut Transform, With<OrbitView>>,
) {
    for mut transform in &mut camera_query {
        *transform = orbit.transform();
    }
}
