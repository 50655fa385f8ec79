//! Scene content: studio environment, key light and the watch model.
//!
//! Everything here configures Bevy's renderer and loaders; no rendering work
//! is done by the showcase itself.

/// Studio cubemap used as skybox and image-based lighting.
pub mod environment;

/// Key light, exposure and the debug light helper.
pub mod lighting;

/// Watch model spawning and per-material shadow setup.
pub mod watch_model;
