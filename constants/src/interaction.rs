/// Seconds after a drag ends before the heading fades back in.
pub const HEADING_RESTORE_SECONDS: f32 = 5.0;

/// DOM id of the product heading on the web build.
pub const HEADING_ELEMENT_ID: &str = "heading";

pub const HEADING_VISIBLE_OPACITY: f32 = 1.0;
pub const HEADING_HIDDEN_OPACITY: f32 = 0.0;

/// URL fragment that switches the debug bridge on (`index.html#debug`).
pub const DEBUG_URL_FRAGMENT: &str = "debug";

/// Native command line flag that switches the debug bridge on.
pub const DEBUG_CLI_FLAG: &str = "--debug";

/// Text of the native heading node standing in for the page heading.
pub const NATIVE_HEADING_TEXT: &str = "Watch 01";
pub const NATIVE_HEADING_FONT_SIZE: f32 = 42.0;
