//! Core application setup.
//!
//! Builds the Bevy app around the point store, owns the window for the length of
//! the session and returns once the window is closed.

/// Application setup, plugin configuration and the blocking run entry point.
pub mod app_setup;

/// Primary window configuration.
pub mod window_config;
