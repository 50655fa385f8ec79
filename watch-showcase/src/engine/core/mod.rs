//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, runtime configuration
//! and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app, spawns the scene and schedules the camera,
/// interaction and debug systems.
pub mod app_setup;

/// Application state machine and loading progress transitions.
pub mod app_state;

/// Startup configuration: debug mode, retarget policy and timings.
pub mod config;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
