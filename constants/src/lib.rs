//! Shared tuning constants for the watch showcase and its offline tools.

/// Camera projection and responsive placement.
pub mod camera;

/// Debug bridge parameter ranges.
pub mod debug_params;

/// Environment cubemap layout and asset paths.
pub mod environment;

/// Heading visibility timings.
pub mod interaction;

/// Viewport breakpoint thresholds.
pub mod layout;

/// Lighting, exposure and model defaults.
pub mod render_settings;
