use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::window::ExitCondition;
use constants::render_settings::CLEAR_COLOUR;

use super::window_config::create_window_config;
use crate::config::{ViewerConfig, WindowSettings};
use crate::engine::camera::orbit_camera::{OrbitCamera, apply_orbit_camera};
use crate::engine::input::{DragState, dispatch_pointer_events};
use crate::engine::point_store::PointStore;
use crate::engine::render::{
    hud::{hud_text_update_system, spawn_hud},
    point_material::PointCloudMaterial,
    scene::setup_scene,
};
use crate::error::ViewerError;

/// Build the viewer app. The point store is moved into the app as a shared,
/// read-only resource.
pub fn create_app(config: &ViewerConfig, store: PointStore) -> App {
    let mut app = App::new();

    let [r, g, b] = CLEAR_COLOUR;
    app.add_plugins(create_default_plugins(&config.window))
        .add_plugins(MaterialPlugin::<PointCloudMaterial>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .insert_resource(ClearColor(Color::srgb(r, g, b)))
        .insert_resource(store)
        .insert_resource(config.render)
        .insert_resource(OrbitCamera::default())
        .insert_resource(DragState::new(window_centre(&config.window)));

    app.add_systems(Startup, (setup_scene, spawn_hud)).add_systems(
        Update,
        (
            // Input first so the frame is drawn with the latest camera state
            dispatch_pointer_events,
            apply_orbit_camera,
            hud_text_update_system,
        )
            .chain(),
    );

    app
}

/// Open the window and block until it is closed. Bevy releases the window and
/// GPU resources on every exit path before this returns.
///
/// Invalid settings are returned as [`ViewerError::Config`] before anything is
/// created, and an event loop that exits with an error code maps to
/// [`ViewerError::Initialization`]. A window or GPU adapter that cannot be
/// created panics inside `bevy_winit` and never returns here.
pub fn run_viewer(config: &ViewerConfig, store: PointStore) -> Result<(), ViewerError> {
    config.validate()?;

    info!("Opening viewer with {} points", store.len());
    let mut app = create_app(config, store);

    match app.run() {
        AppExit::Success => {
            info!("Viewer closed");
            Ok(())
        }
        AppExit::Error(code) => Err(ViewerError::Initialization(format!(
            "event loop exited with code {code}"
        ))),
    }
}

/// Drag baseline before the first pointer event arrives.
fn window_centre(settings: &WindowSettings) -> Vec2 {
    Vec2::new((settings.width / 2) as f32, (settings.height / 2) as f32)
}

fn create_default_plugins(settings: &WindowSettings) -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config(settings)),
        exit_condition: ExitCondition::OnPrimaryClosed,
        close_when_requested: true,
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
