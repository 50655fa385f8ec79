use bevy::prelude::*;
use constants::interaction::{HEADING_HIDDEN_OPACITY, HEADING_VISIBLE_OPACITY};
use std::time::Duration;

use crate::engine::camera::orbit_controls::OrbitInteraction;
use crate::engine::core::config::ShowcaseConfig;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingState {
    #[default]
    Visible,
    Hidden,
}

/// Hides the product heading while the view is dragged and restores it a
/// fixed delay after the drag ends.
///
/// At most one restore timer is pending at any time: every start or end
/// cancels the previous timer before anything new is scheduled. When the
/// heading element was not found all operations are no-ops.
#[derive(Resource, Debug)]
pub struct HeadingVisibility {
    heading_found: bool,
    state: HeadingState,
    restore_timer: Option<Timer>,
    restore_delay: Duration,
}

impl HeadingVisibility {
    pub fn new(restore_delay: Duration) -> Self {
        Self {
            heading_found: false,
            state: HeadingState::Visible,
            restore_timer: None,
            restore_delay,
        }
    }

    pub fn initialize(&mut self, heading_found: bool) {
        self.heading_found = heading_found;
        self.restore_timer = None;
        self.state = HeadingState::Visible;
    }

    pub fn on_interaction_start(&mut self) {
        if !self.heading_found {
            return;
        }
        self.cancel_restore();
        self.state = HeadingState::Hidden;
    }

    pub fn on_interaction_end(&mut self) {
        if !self.heading_found {
            return;
        }
        self.cancel_restore();
        self.restore_timer = Some(Timer::new(self.restore_delay, TimerMode::Once));
    }

    /// Advance the pending restore timer. Returns true when the heading was
    /// restored by this tick.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let Some(timer) = self.restore_timer.as_mut() else {
            return false;
        };
        if !timer.tick(delta).finished() {
            return false;
        }
        self.restore_timer = None;
        self.state = HeadingState::Visible;
        true
    }

    pub fn heading_found(&self) -> bool {
        self.heading_found
    }

    pub fn state(&self) -> HeadingState {
        self.state
    }

    pub fn has_pending_restore(&self) -> bool {
        self.restore_timer.is_some()
    }

    pub fn opacity(&self) -> f32 {
        match self.state {
            HeadingState::Visible => HEADING_VISIBLE_OPACITY,
            HeadingState::Hidden => HEADING_HIDDEN_OPACITY,
        }
    }

    fn cancel_restore(&mut self) {
        if self.restore_timer.take().is_some() {
            debug!("Pending heading restore cancelled");
        }
    }
}

/// Native stand-in for the page heading.
#[derive(Component)]
pub struct Heading;

/// Startup system: look the heading up once and record whether it exists.
pub fn init_heading_visibility(
    mut commands: Commands,
    config: Res<ShowcaseConfig>,
    #[cfg(not(target_arch = "wasm32"))] headings: Query<(), With<Heading>>,
) {
    #[cfg(target_arch = "wasm32")]
    let heading_found = find_dom_heading(config.heading_element_id).is_some();

    #[cfg(not(target_arch = "wasm32"))]
    let heading_found = !headings.is_empty();

    if !heading_found {
        warn!(
            "Heading '{}' not found, interaction visibility disabled",
            config.heading_element_id
        );
    }

    let mut visibility = HeadingVisibility::new(config.heading_restore_delay);
    visibility.initialize(heading_found);
    commands.insert_resource(visibility);
}

/// Restore timer first, then this frame's gestures in delivery order, so a
/// start arriving on the expiry frame still leaves the heading hidden.
pub fn heading_visibility_system(
    time: Res<Time>,
    mut interactions: EventReader<OrbitInteraction>,
    mut visibility: ResMut<HeadingVisibility>,
) {
    if visibility.tick(time.delta()) {
        debug!("Heading restored");
    }

    for interaction in interactions.read() {
        match interaction {
            OrbitInteraction::Start => visibility.on_interaction_start(),
            OrbitInteraction::End => visibility.on_interaction_end(),
        }
    }
}

/// Write the heading opacity to the native UI text whenever it changes.
#[cfg(not(target_arch = "wasm32"))]
pub fn apply_heading_opacity(
    visibility: Res<HeadingVisibility>,
    mut applied: Local<Option<f32>>,
    mut headings: Query<&mut TextColor, With<Heading>>,
) {
    use bevy::color::Alpha;

    let opacity = visibility.opacity();
    if *applied == Some(opacity) {
        return;
    }
    for mut colour in &mut headings {
        colour.0.set_alpha(opacity);
    }
    *applied = Some(opacity);
}

/// Write the heading opacity to the DOM element's inline style whenever it
/// changes.
#[cfg(target_arch = "wasm32")]
pub fn apply_heading_opacity(
    visibility: Res<HeadingVisibility>,
    config: Res<ShowcaseConfig>,
    mut applied: Local<Option<f32>>,
) {
    let opacity = visibility.opacity();
    if *applied == Some(opacity) || !visibility.heading_found() {
        return;
    }
    *applied = Some(opacity);

    let Some(heading) = find_dom_heading(config.heading_element_id) else {
        return;
    };
    if let Err(e) = heading
        .style()
        .set_property("opacity", &opacity.to_string())
    {
        warn!("Failed to set heading opacity: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn find_dom_heading(id: &str) -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}
