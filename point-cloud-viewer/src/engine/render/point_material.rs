//! Point cloud shader material
use bevy::pbr::{MaterialPipeline, MaterialPipelineKey};
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, ShaderRef, SpecializedMeshPipelineError,
};
use bevy::{prelude::*, reflect::TypePath};
use constants::render_settings::POINT_SHADER_PATH;

use super::point_mesh::ATTRIBUTE_CORNER;

#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct PointCloudMaterial {
    /// x: point diameter in pixels, y: far clip distance in view space
    #[uniform(0)]
    pub params: Vec4,
}

impl PointCloudMaterial {
    pub fn new(point_size: f32, far: f32) -> Self {
        Self {
            params: Vec4::new(point_size, far, 0.0, 0.0),
        }
    }

    pub fn point_size(&self) -> f32 {
        self.params.x
    }

    pub fn far(&self) -> f32 {
        self.params.y
    }
}

/// Matches the vertex shader: a point is dropped once its view-space depth
/// exceeds `far`. Bevy's projection has no far plane of its own.
pub fn beyond_far_plane(view_from_world: &Mat4, position: Vec3, far: f32) -> bool {
    -view_from_world.transform_point3(position).z > far
}

impl Material for PointCloudMaterial {
    fn vertex_shader() -> ShaderRef {
        POINT_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        POINT_SHADER_PATH.into()
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            ATTRIBUTE_CORNER.at_shader_location(1),
            Mesh::ATTRIBUTE_COLOR.at_shader_location(2),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];
        // Quads are built in clip space, winding depends on the corner order only
        descriptor.primitive.cull_mode = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_pack_size_and_far() {
        let material = PointCloudMaterial::new(5.0, 1000.0);
        assert_eq!(material.point_size(), 5.0);
        assert_eq!(material.far(), 1000.0);
        assert_eq!(material.params, Vec4::new(5.0, 1000.0, 0.0, 0.0));
    }

    #[test]
    fn points_past_far_are_dropped() {
        // Camera 50 units back on +Z looking at the origin
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -50.0));

        assert!(!beyond_far_plane(&view, Vec3::ZERO, 1000.0));
        assert!(!beyond_far_plane(&view, Vec3::new(0.0, 0.0, -950.0), 1000.0));
        assert!(beyond_far_plane(&view, Vec3::new(0.0, 0.0, -951.0), 1000.0));
        assert!(beyond_far_plane(&view, Vec3::new(0.0, 0.0, -2000.0), 1000.0));
        assert!(beyond_far_plane(&view, Vec3::new(0.0, 0.0, -9000.0), 1000.0));
    }

    #[test]
    fn points_behind_the_camera_are_not_far() {
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -50.0));
        assert!(!beyond_far_plane(&view, Vec3::new(0.0, 0.0, 5000.0), 1000.0));
    }
}
