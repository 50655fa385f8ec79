/// Viewports at least this wide (logical pixels) use the medium layout.
pub const MEDIUM_BREAKPOINT_MIN_WIDTH: u32 = 768;

/// Viewports at least this wide (logical pixels) use the wide layout.
pub const WIDE_BREAKPOINT_MIN_WIDTH: u32 = 900;
