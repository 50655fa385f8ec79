//! Runtime systems around the camera: heading visibility, debug tuning and
//! frame rate reporting.

/// Debug bridge parameters and their application to the scene.
///
/// Values arrive as validated `DebugParamEvent`s from the RPC layer.
pub mod debug_params;

/// FPS notification to the host page via RPC.
pub mod fps_tracking;

/// Hides the product heading during drags and restores it after a delay.
pub mod heading_visibility;
