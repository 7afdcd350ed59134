use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;

use super::point_material::{PointCloudMaterial, beyond_far_plane};
use super::point_mesh::create_point_mesh;
use crate::config::RenderSettings;
use crate::engine::camera::orbit_camera::{OrbitCamera, OrbitView};
use crate::engine::point_store::PointStore;

#[derive(Component)]
pub struct PointCloud;

/// Perspective projection from the configured field of view and clip planes.
pub fn create_projection(settings: &RenderSettings) -> Projection {
    Projection::from(PerspectiveProjection {
        fov: settings.fov_degrees.to_radians(),
        near: settings.near,
        far: settings.far,
        ..default()
    })
}

fn spawn_orbit_camera(commands: &mut Commands, orbit: &OrbitCamera, settings: &RenderSettings) {
    commands.spawn((
        Camera3d::default(),
        create_projection(settings),
        orbit.transform(),
        OrbitView,
    ));
}

/// Spawn the scene camera and the point cloud. Runs once at startup.
pub fn setup_scene(
    mut commands: Commands,
    store: Res<PointStore>,
    orbit: Res<OrbitCamera>,
    settings: Res<RenderSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<PointCloudMaterial>>,
) {
    spawn_orbit_camera(&mut commands, &orbit, &settings);

    if store.is_empty() {
        warn!("Point store is empty, nothing to draw");
        return;
    }

    commands.spawn((
        Mesh3d(meshes.add(create_point_mesh(&store))),
        MeshMaterial3d(materials.add(PointCloudMaterial::new(
            settings.point_size,
            settings.far,
        ))),
        Transform::IDENTITY,
        NoFrustumCulling,
        NotShadowCaster,
        PointCloud,
    ));

    info!(
        "Point cloud ready: {} points{}, {}px",
        store.len(),
        if store.is_coloured() { " (coloured)" } else { "" },
        settings.point_size
    );

    let view_from_world = orbit.view_matrix();
    let clipped = store
        .positions()
        .iter()
        .filter(|p| beyond_far_plane(&view_from_world, **p, settings.far))
        .count();
    if clipped > 0 {
        info!(
            "{clipped} points lie beyond the far plane ({}) from the initial view",
            settings.far
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_uses_radians() {
        let settings = RenderSettings::default();
        let Projection::Perspective(perspective) = create_projection(&settings) else {
            panic!("expected a perspective projection");
        };
        assert!((perspective.fov - 45f32.to_radians()).abs() < 1e-6);
        assert_eq!(perspective.near, 0.1);
        assert_eq!(perspective.far, 1000.0);
    }

    #[test]
    fn startup_spawns_camera_and_cloud() {
        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<PointCloudMaterial>>()
            .insert_resource(PointStore::new(vec![Vec3::ZERO, Vec3::ONE]))
            .insert_resource(OrbitCamera::new(50.0))
            .insert_resource(RenderSettings::default())
            .add_systems(Startup, setup_scene);
        app.update();

        let world = app.world_mut();
        let cameras = world
            .query_filtered::<&Transform, With<OrbitView>>()
            .iter(world)
            .map(|t| t.translation)
            .collect::<Vec<_>>();
        assert_eq!(cameras.len(), 1);
        assert!(cameras[0].abs_diff_eq(Vec3::new(0.0, 0.0, 50.0), 1e-5));

        let clouds = world
            .query_filtered::<Entity, With<PointCloud>>()
            .iter(world)
            .count();
        assert_eq!(clouds, 1);
        assert_eq!(world.resource::<Assets<Mesh>>().len(), 1);
    }

    #[test]
    fn cloud_material_carries_configured_far_plane() {
        let settings = RenderSettings {
            far: 250.0,
            point_size: 3.0,
            ..default()
        };
        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<PointCloudMaterial>>()
            .insert_resource(PointStore::new(vec![Vec3::ZERO]))
            .insert_resource(OrbitCamera::default())
            .insert_resource(settings)
            .add_systems(Startup, setup_scene);
        app.update();

        let materials = app.world().resource::<Assets<PointCloudMaterial>>();
        let (_, material) = materials.iter().next().expect("one cloud material");
        assert_eq!(material.point_size(), 3.0);
        assert_eq!(material.far(), 250.0);
    }

    #[test]
    fn empty_store_spawns_only_the_camera() {
        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<PointCloudMaterial>>()
            .insert_resource(PointStore::new(Vec::new()))
            .insert_resource(OrbitCamera::default())
            .insert_resource(RenderSettings::default())
            .add_systems(Startup, setup_scene);
        app.update();

        let world = app.world_mut();
        assert_eq!(
            world
                .query_filtered::<Entity, With<PointCloud>>()
                .iter(world)
                .count(),
            0
        );
        assert_eq!(
            world
                .query_filtered::<Entity, With<OrbitView>>()
                .iter(world)
                .count(),
            1
        );
    }
}
