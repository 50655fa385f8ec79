//! Showcase camera behaviour.
//!
//! Places the camera per viewport breakpoint, glides it between rest positions
//! and provides damped drag-to-orbit input that reports gesture boundaries.

use bevy::prelude::*;

/// Eased translation animation toward a rest position.
pub mod camera_tween;

/// Drag-to-rotate controls emitting start/end interaction events.
pub mod orbit_controls;

/// Breakpoint table and resize handling for camera aspect and placement.
pub mod responsive_camera;

/// Marks the single perspective camera the showcase renders through.
#[derive(Component)]
pub struct ShowcaseCamera;
