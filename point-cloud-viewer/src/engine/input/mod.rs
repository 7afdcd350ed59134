//! Pointer input for the orbit camera.
//!
//! Window events are read in arrival order and dispatched to a [`PointerHandler`],
//! which turns drags into rotation and scrolling into zoom.

pub mod pointer;

pub use pointer::{DragState, OrbitInput, PointerHandler, dispatch_pointer_events};
