use bevy::prelude::*;
use constants::camera::CAMERA_RETARGET_SECONDS;
use constants::interaction::{
    DEBUG_CLI_FLAG, DEBUG_URL_FRAGMENT, HEADING_ELEMENT_ID, HEADING_RESTORE_SECONDS,
};
use std::time::Duration;

use crate::engine::camera::responsive_camera::RetargetPolicy;

/// Runtime configuration resolved once at startup.
#[derive(Resource, Debug, Clone)]
pub struct ShowcaseConfig {
    /// Enables the debug bridge parameters and helper gizmos.
    pub debug_enabled: bool,
    pub retarget_policy: RetargetPolicy,
    pub retarget_seconds: f32,
    pub heading_restore_delay: Duration,
    pub heading_element_id: &'static str,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            debug_enabled: false,
            retarget_policy: RetargetPolicy::default(),
            retarget_seconds: CAMERA_RETARGET_SECONDS,
            heading_restore_delay: Duration::from_secs_f32(HEADING_RESTORE_SECONDS),
            heading_element_id: HEADING_ELEMENT_ID,
        }
    }
}

impl ShowcaseConfig {
    /// Resolve debug mode from the page URL (web) or command line (native).
    pub fn from_environment() -> Self {
        let debug_enabled = detect_debug_mode();
        info!(
            "Debug mode {}",
            if debug_enabled { "enabled" } else { "disabled" }
        );
        Self {
            debug_enabled,
            ..default()
        }
    }
}

/// True for a URL fragment of exactly `debug`, with or without the leading `#`.
pub fn is_debug_fragment(fragment: &str) -> bool {
    fragment.strip_prefix('#').unwrap_or(fragment) == DEBUG_URL_FRAGMENT
}

pub fn has_debug_flag<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter().any(|arg| arg.as_ref() == DEBUG_CLI_FLAG)
}

#[cfg(target_arch = "wasm32")]
fn detect_debug_mode() -> bool {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .is_some_and(|hash| is_debug_fragment(&hash))
}

#[cfg(not(target_arch = "wasm32"))]
fn detect_debug_mode() -> bool {
    has_debug_flag(std::env::args().skip(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_fragment_must_match_exactly() {
        assert!(is_debug_fragment("#debug"));
        assert!(is_debug_fragment("debug"));
        assert!(!is_debug_fragment(""));
        assert!(!is_debug_fragment("#"));
        assert!(!is_debug_fragment("#debugger"));
        assert!(!is_debug_fragment("#DEBUG"));
    }

    #[test]
    fn debug_flag_is_found_among_args() {
        assert!(has_debug_flag(["--fullscreen", "--debug"]));
        assert!(!has_debug_flag(["--debugging"]));
        assert!(!has_debug_flag(Vec::<String>::new()));
    }

    #[test]
    fn defaults_match_showcase_timings() {
        let config = ShowcaseConfig::default();
        assert!(!config.debug_enabled);
        assert_eq!(config.retarget_policy, RetargetPolicy::OnBreakpointChange);
        assert_eq!(config.retarget_seconds, 0.5);
        assert_eq!(config.heading_restore_delay, Duration::from_secs(5));
        assert_eq!(config.heading_element_id, "heading");
    }
}
