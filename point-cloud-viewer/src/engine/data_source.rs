//! Procedural point cloud generators used to populate the point store at startup
use bevy::prelude::*;
use constants::dataset::STAR_MIN_BRIGHTNESS;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::point_store::PointStore;
use crate::error::PointStoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    /// Plain xyz points scattered uniformly in a cube
    UniformCube,
    /// Coloured stars scattered uniformly in a cube
    StarMap,
}

/// Generate the configured data set. A seed makes the output reproducible.
pub fn generate(
    kind: DatasetKind,
    count: usize,
    spread: f32,
    seed: Option<u64>,
) -> Result<PointStore, PointStoreError> {
    if !spread.is_finite() || spread < 0.0 {
        return Err(PointStoreError::InvalidSpread(spread));
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match kind {
        DatasetKind::UniformCube => Ok(uniform_cube(&mut rng, count, spread)),
        DatasetKind::StarMap => star_map(&mut rng, count, spread),
    }
}

/// Uniformly distributed points in `[-half_extent, half_extent]` on every axis.
pub fn uniform_cube(rng: &mut impl Rng, count: usize, half_extent: f32) -> PointStore {
    let positions = (0..count)
        .map(|_| random_position(rng, half_extent))
        .collect();
    PointStore::new(positions)
}

/// Star positions in `[-spread, spread]` with slightly bright random colours.
pub fn star_map(
    rng: &mut impl Rng,
    count: usize,
    spread: f32,
) -> Result<PointStore, PointStoreError> {
    let mut positions = Vec::with_capacity(count);
    let mut colours = Vec::with_capacity(count);

    for _ in 0..count {
        positions.push(random_position(rng, spread));
        colours.push([
            rng.random_range(STAR_MIN_BRIGHTNESS..=1.0),
            rng.random_range(STAR_MIN_BRIGHTNESS..=1.0),
            rng.random_range(STAR_MIN_BRIGHTNESS..=1.0),
        ]);
    }

    PointStore::with_colours(positions, colours)
}

/// Non-finite or non-positive extents collapse to the origin.
fn random_position(rng: &mut impl Rng, half_extent: f32) -> Vec3 {
    if !half_extent.is_finite() || half_extent <= 0.0 {
        return Vec3::ZERO;
    }
    Vec3::new(
        rng.random_range(-half_extent..=half_extent),
        rng.random_range(-half_extent..=half_extent),
        rng.random_range(-half_extent..=half_extent),
    )
}
