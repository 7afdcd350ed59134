use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use constants::render_settings::HUD_FONT_SIZE;

use crate::engine::camera::orbit_camera::OrbitCamera;
use crate::engine::point_store::PointStore;

#[derive(Component)]
pub struct HudText;

pub fn spawn_hud(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: HUD_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                HudText,
            ));
        });
}

pub fn hud_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    store: Res<PointStore>,
    orbit: Res<OrbitCamera>,
    mut query: Query<&mut Text, With<HudText>>,
) {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed());

    for mut text in &mut query {
        text.0 = format_hud(fps, store.len(), orbit.distance());
    }
}

fn format_hud(fps: Option<f64>, point_count: usize, distance: f32) -> String {
    match fps {
        Some(fps) => format!("FPS: {fps:.1} | points: {point_count} | distance: {distance:.1}"),
        None => format!("FPS: -- | points: {point_count} | distance: {distance:.1}"),
    }
}
