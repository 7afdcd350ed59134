use std::sync::Arc;

use bevy::prelude::*;

use crate::error::PointStoreError;

/// Immutable, ordered point cloud shared between the render world and the exporters.
/// Positions and optional per-point colours are fixed at construction; clones share
/// the same backing slices.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct PointStore {
    positions: Arc<[Vec3]>,
    colours: Option<Arc<[[f32; 3]]>>,
}

impl PointStore {
    pub fn new(positions: Vec<Vec3>) -> Self {
        Self {
            positions: positions.into(),
            colours: None,
        }
    }

    /// Create a coloured store. Colour channels are expected in [0, 1].
    pub fn with_colours(
        positions: Vec<Vec3>,
        colours: Vec<[f32; 3]>,
    ) -> Result<Self, PointStoreError> {
        if positions.len() != colours.len() {
            return Err(PointStoreError::ColourCountMismatch {
                points: positions.len(),
                colours: colours.len(),
            });
        }

        Ok(Self {
            positions: positions.into(),
            colours: Some(colours.into()),
        })
    }

    /// Build a store from rows of either `[x, y, z]` or `[x, y, z, r, g, b]`.
    /// All rows must share the same width.
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Self, PointStoreError> {
        let Some(first) = rows.first() else {
            return Ok(Self::new(Vec::new()));
        };

        let expected = first.as_ref().len();
        if expected != 3 && expected != 6 {
            return Err(PointStoreError::UnsupportedRowWidth {
                row: 0,
                width: expected,
            });
        }

        let mut positions = Vec::with_capacity(rows.len());
        let mut colours = Vec::with_capacity(if expected == 6 { rows.len() } else { 0 });

        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != expected {
                return Err(PointStoreError::MixedRowWidth {
                    row,
                    width: values.len(),
                    expected,
                });
            }

            positions.push(Vec3::new(values[0], values[1], values[2]));
            if expected == 6 {
                colours.push([values[3], values[4], values[5]]);
            }
        }

        if expected == 6 {
            Self::with_colours(positions, colours)
        } else {
            Ok(Self::new(positions))
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colours(&self) -> Option<&[[f32; 3]]> {
        self.colours.as_deref()
    }

    pub fn is_coloured(&self) -> bool {
        self.colours.is_some()
    }
}
