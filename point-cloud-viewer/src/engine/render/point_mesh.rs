use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{MeshVertexAttribute, PrimitiveTopology};
use bevy::render::render_resource::VertexFormat;
use constants::render_settings::DEFAULT_POINT_COLOUR;

use crate::engine::point_store::PointStore;

/// Quad corner in [-1, 1], scaled to the point size in the vertex shader.
pub const ATTRIBUTE_CORNER: MeshVertexAttribute =
    MeshVertexAttribute::new("PointCorner", 988_540_917, VertexFormat::Float32x2);

/// Two triangles per point.
pub const VERTICES_PER_POINT: usize = 6;

const QUAD_CORNERS: [[f32; 2]; VERTICES_PER_POINT] = [
    [-1.0, -1.0],
    [1.0, -1.0],
    [1.0, 1.0],
    [-1.0, -1.0],
    [1.0, 1.0],
    [-1.0, 1.0],
];

/// Build the point cloud mesh. Every vertex of a point's quad carries the point
/// centre, so the quad is only expanded on the GPU. Points keep store order.
pub fn create_point_mesh(store: &PointStore) -> Mesh {
    let vertex_count = store.len() * VERTICES_PER_POINT;
    let mut positions = Vec::with_capacity(vertex_count);
    let mut corners = Vec::with_capacity(vertex_count);
    let mut colours = Vec::with_capacity(vertex_count);

    let [r, g, b] = DEFAULT_POINT_COLOUR;
    let point_colours = store.colours();
    for (index, position) in store.positions().iter().enumerate() {
        let colour = match point_colours {
            Some(point_colours) => {
                let [r, g, b] = point_colours[index];
                [r, g, b, 1.0]
            }
            None => [r, g, b, 1.0],
        };

        for corner in QUAD_CORNERS {
            positions.push(position.to_array());
            corners.push(corner);
            colours.push(colour);
        }
    }

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(ATTRIBUTE_CORNER, corners)
    .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colours)
}
