use bevy::input::ButtonState;
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::WindowEvent;
use constants::camera::PIXEL_SCROLL_SCALE;

use crate::engine::camera::orbit_camera::OrbitCamera;

/// Receiver for pointer events delivered by the windowing layer.
pub trait PointerHandler {
    fn on_pointer_move(&mut self, position: Vec2);
    fn on_button(&mut self, button: MouseButton, state: ButtonState);
    /// `offset` is in scroll lines; positive `y` scrolls forward.
    fn on_scroll(&mut self, offset: Vec2);
}

/// Drag tracking between pointer events. `is_dragging` is true while the left
/// button is held; `last_position` follows every pointer move.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub is_dragging: bool,
    pub last_position: Vec2,
}

impl DragState {
    pub fn new(initial_position: Vec2) -> Self {
        Self {
            is_dragging: false,
            last_position: initial_position,
        }
    }
}

/// Pointer handler that orbits and zooms an [`OrbitCamera`].
pub struct OrbitInput<'a> {
    drag: &'a mut DragState,
    camera: &'a mut OrbitCamera,
}

impl<'a> OrbitInput<'a> {
    pub fn new(drag: &'a mut DragState, camera: &'a mut OrbitCamera) -> Self {
        Self { drag, camera }
    }
}

impl PointerHandler for OrbitInput<'_> {
    fn on_pointer_move(&mut self, position: Vec2) {
        if self.drag.is_dragging {
            let delta = position - self.drag.last_position;
            self.camera.apply(delta.x, delta.y);
        }
        self.drag.last_position = position;
    }

    fn on_button(&mut self, button: MouseButton, state: ButtonState) {
        if button == MouseButton::Left {
            self.drag.is_dragging = state.is_pressed();
        }
    }

    fn on_scroll(&mut self, offset: Vec2) {
        self.camera.zoom(offset.y);
    }
}

/// Route one window event to the handler. Events other than cursor, button and
/// wheel are ignored.
pub fn dispatch_window_event(handler: &mut impl PointerHandler, event: &WindowEvent) {
    match event {
        WindowEvent::CursorMoved(cursor) => handler.on_pointer_move(cursor.position),
        WindowEvent::MouseButtonInput(input) => handler.on_button(input.button, input.state),
        WindowEvent::MouseWheel(wheel) => handler.on_scroll(scroll_offset(wheel)),
        _ => {}
    }
}

fn scroll_offset(wheel: &MouseWheel) -> Vec2 {
    let offset = Vec2::new(wheel.x, wheel.y);
    match wheel.unit {
        MouseScrollUnit::Line => offset,
        MouseScrollUnit::Pixel => offset * PIXEL_SCROLL_SCALE,
    }
}

/// Feed this frame's window events, in arrival order, into the orbit camera.
pub fn dispatch_pointer_events(
    mut window_events: EventReader<WindowEvent>,
    mut drag: ResMut<DragState>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let mut handler = OrbitInput::new(&mut drag, &mut orbit);
    for event in window_events.read() {
        dispatch_window_event(&mut handler, event);
    }
}
