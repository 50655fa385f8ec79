use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use constants::camera::{
    CAMERA_TARGET_MEDIUM, CAMERA_TARGET_NARROW, CAMERA_TARGET_WIDE, ORBIT_FOCUS,
};
use constants::layout::{MEDIUM_BREAKPOINT_MIN_WIDTH, WIDE_BREAKPOINT_MIN_WIDTH};

use crate::engine::camera::ShowcaseCamera;
use crate::engine::camera::camera_tween::CameraTween;
use crate::engine::core::config::ShowcaseConfig;

/// Viewport width class selecting the camera rest position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Narrow,
    Medium,
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u32) -> Self {
        if width >= WIDE_BREAKPOINT_MIN_WIDTH {
            Self::Wide
        } else if width >= MEDIUM_BREAKPOINT_MIN_WIDTH {
            Self::Medium
        } else {
            Self::Narrow
        }
    }

    pub fn camera_target(self) -> Vec3 {
        match self {
            Self::Narrow => CAMERA_TARGET_NARROW,
            Self::Medium => CAMERA_TARGET_MEDIUM,
            Self::Wide => CAMERA_TARGET_WIDE,
        }
    }

    /// Identifier used in frontend notifications.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Narrow => "narrow",
            Self::Medium => "medium",
            Self::Wide => "wide",
        }
    }
}

/// Camera rest position for a viewport of the given logical width.
pub fn compute_target_position(width: u32) -> Vec3 {
    Breakpoint::from_width(width).camera_target()
}

/// Logical viewport size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, or `None` for a zero-height viewport.
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.height > 0).then(|| self.width as f32 / self.height as f32)
    }

    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::from_width(self.width)
    }
}

/// When an accepted resize animates the camera toward its rest position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetargetPolicy {
    /// Only when the rest position changes, i.e. a breakpoint was crossed.
    #[default]
    OnBreakpointChange,
    /// On every resize that changes the viewport dimensions.
    EveryResize,
}

/// Camera updates requested by a single resize.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResizeOutcome {
    /// New aspect ratio to apply immediately.
    pub aspect_ratio: Option<f32>,
    /// Rest position to animate toward.
    pub retarget: Option<Vec3>,
}

impl ResizeOutcome {
    pub fn is_noop(&self) -> bool {
        self.aspect_ratio.is_none() && self.retarget.is_none()
    }
}

/// Viewport tracking and breakpoint-driven camera placement.
#[derive(Resource, Debug)]
pub struct ResponsiveCamera {
    viewport: Option<Viewport>,
    target: Vec3,
    policy: RetargetPolicy,
}

impl Default for ResponsiveCamera {
    fn default() -> Self {
        Self::new(RetargetPolicy::default())
    }
}

impl ResponsiveCamera {
    pub fn new(policy: RetargetPolicy) -> Self {
        Self {
            viewport: None,
            target: CAMERA_TARGET_NARROW,
            policy,
        }
    }

    /// Record the startup viewport and return the rest position to place the
    /// camera at without animation.
    pub fn initialize(&mut self, viewport: Viewport) -> Vec3 {
        self.viewport = Some(viewport);
        self.target = compute_target_position(viewport.width);
        self.target
    }

    /// Handle a viewport resize signal.
    ///
    /// Unchanged dimensions are ignored entirely. A zero height skips the
    /// aspect update but still records the viewport, so the next valid resize
    /// corrects the projection.
    pub fn on_resize(&mut self, width: u32, height: u32) -> ResizeOutcome {
        let viewport = Viewport::new(width, height);
        if self.viewport == Some(viewport) {
            return ResizeOutcome::default();
        }
        self.viewport = Some(viewport);

        let target = compute_target_position(width);
        let retarget = match self.policy {
            RetargetPolicy::OnBreakpointChange => target != self.target,
            RetargetPolicy::EveryResize => true,
        };
        self.target = target;

        ResizeOutcome {
            aspect_ratio: viewport.aspect_ratio(),
            retarget: retarget.then_some(target),
        }
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }
}

/// Fired whenever the camera starts gliding toward a rest position.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CameraRetargeted {
    pub breakpoint: Breakpoint,
    pub target: Vec3,
}

/// Startup system: read the window size and place the camera at its rest
/// position before the first frame.
pub fn init_responsive_camera(
    config: Res<ShowcaseConfig>,
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut camera_query: Query<(&mut Transform, &mut Projection), With<ShowcaseCamera>>,
) {
    let mut responsive = ResponsiveCamera::new(config.retarget_policy);

    let Ok(window) = windows.single() else {
        warn!("No primary window at startup, camera keeps its spawn position");
        commands.insert_resource(responsive);
        return;
    };

    // The canvas only reports its fitted size after the first resize, so the
    // browser's inner size is the better startup reading.
    let viewport = resolve_startup_viewport(
        logical_viewport(window.width(), window.height()),
        browser_viewport(),
    );
    let target = responsive.initialize(viewport);
    info!(
        "Viewport {}x{} starts on {} breakpoint",
        viewport.width,
        viewport.height,
        viewport.breakpoint().as_str()
    );

    if let Ok((mut transform, mut projection)) = camera_query.single_mut() {
        *transform = Transform::from_translation(target).looking_at(ORBIT_FOCUS, Vec3::Y);
        if let Some(aspect_ratio) = viewport.aspect_ratio() {
            set_aspect_ratio(&mut projection, aspect_ratio);
        }
    }

    commands.insert_resource(responsive);
}

/// Apply resize signals to the camera: aspect immediately, position eased.
pub fn responsive_camera_system(
    mut commands: Commands,
    config: Res<ShowcaseConfig>,
    mut resize_events: EventReader<WindowResized>,
    mut responsive: ResMut<ResponsiveCamera>,
    mut retargeted: EventWriter<CameraRetargeted>,
    mut camera_query: Query<(Entity, &Transform, &mut Projection), With<ShowcaseCamera>>,
) {
    for event in resize_events.read() {
        let viewport = logical_viewport(event.width, event.height);
        let outcome = responsive.on_resize(viewport.width, viewport.height);
        if outcome.is_noop() {
            continue;
        }

        let Ok((entity, transform, mut projection)) = camera_query.single_mut() else {
            continue;
        };

        match outcome.aspect_ratio {
            Some(aspect_ratio) => set_aspect_ratio(&mut projection, aspect_ratio),
            None => debug!("Zero-height viewport, aspect update skipped"),
        }

        if let Some(target) = outcome.retarget {
            let breakpoint = viewport.breakpoint();
            info!(
                "Camera retargeting to {} breakpoint at {:?}",
                breakpoint.as_str(),
                target
            );
            // Inserting replaces any tween in flight, starting from where the
            // camera is now.
            commands.entity(entity).insert(CameraTween::new(
                transform.translation,
                target,
                config.retarget_seconds,
            ));
            retargeted.write(CameraRetargeted { breakpoint, target });
        }
    }
}

/// Whole logical pixels; a fractional width never reaches the next breakpoint.
fn logical_viewport(width: f32, height: f32) -> Viewport {
    Viewport::new(width.floor().max(0.0) as u32, height.floor().max(0.0) as u32)
}

fn resolve_startup_viewport(window: Viewport, browser: Option<Viewport>) -> Viewport {
    browser.filter(|viewport| viewport.width > 0).unwrap_or(window)
}

#[cfg(target_arch = "wasm32")]
fn browser_viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(logical_viewport(width as f32, height as f32))
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_viewport() -> Option<Viewport> {
    None
}

fn set_aspect_ratio(projection: &mut Projection, aspect_ratio: f32) {
    if let Projection::Perspective(perspective) = projection {
        perspective.aspect_ratio = aspect_ratio;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::window::WindowResolution;

    #[test]
    fn wide_widths_use_wide_target() {
        for width in [900, 901, 1280, 1920, 3840] {
            assert_eq!(compute_target_position(width), Vec3::new(3.3, -2.0, 8.0));
        }
    }

    #[test]
    fn medium_widths_use_medium_target() {
        for width in [768, 769, 800, 899] {
            assert_eq!(compute_target_position(width), Vec3::new(4.73, -2.0, 9.0));
        }
    }

    #[test]
    fn narrow_widths_use_narrow_target() {
        for width in [0, 1, 320, 500, 767] {
            assert_eq!(compute_target_position(width), Vec3::new(0.0, -1.28, 9.0));
        }
    }

    #[test]
    fn breakpoints_are_ordered() {
        assert!(Breakpoint::Narrow < Breakpoint::Medium);
        assert!(Breakpoint::Medium < Breakpoint::Wide);
    }

    #[test]
    fn identical_resize_is_ignored() {
        let mut responsive = ResponsiveCamera::default();
        let first = responsive.on_resize(1024, 768);
        assert_eq!(first.aspect_ratio, Some(1024.0 / 768.0));

        let second = responsive.on_resize(1024, 768);
        assert!(second.is_noop());
    }

    #[test]
    fn crossing_two_breakpoints_retargets_twice() {
        let mut responsive = ResponsiveCamera::default();
        responsive.initialize(Viewport::new(1000, 700));

        let retargets = [(800, 700), (500, 700)]
            .into_iter()
            .filter(|&(w, h)| responsive.on_resize(w, h).retarget.is_some())
            .count();
        assert_eq!(retargets, 2);
    }

    #[test]
    fn resize_sequence_only_retargets_on_breakpoint_change() {
        let mut responsive = ResponsiveCamera::default();
        let retargets: Vec<Option<Vec3>> = [1000, 950, 800, 780, 500]
            .into_iter()
            .map(|w| responsive.on_resize(w, 700).retarget)
            .collect();

        // First resize moves off the narrow default.
        assert_eq!(retargets[0], Some(CAMERA_TARGET_WIDE));
        assert_eq!(retargets[1], None);
        assert_eq!(retargets[2], Some(CAMERA_TARGET_MEDIUM));
        assert_eq!(retargets[3], None);
        assert_eq!(retargets[4], Some(CAMERA_TARGET_NARROW));
    }

    #[test]
    fn every_resize_policy_retargets_each_accepted_resize() {
        let mut responsive = ResponsiveCamera::new(RetargetPolicy::EveryResize);
        responsive.initialize(Viewport::new(1000, 700));

        let retargets = [(1000, 700), (800, 700), (810, 700), (500, 700)]
            .into_iter()
            .filter(|&(w, h)| responsive.on_resize(w, h).retarget.is_some())
            .count();
        // The first event repeats the startup viewport and is dropped.
        assert_eq!(retargets, 3);
    }

    #[test]
    fn height_only_resize_updates_aspect_without_retarget() {
        let mut responsive = ResponsiveCamera::default();
        responsive.initialize(Viewport::new(1200, 800));

        let outcome = responsive.on_resize(1200, 600);
        assert_eq!(outcome.aspect_ratio, Some(2.0));
        assert_eq!(outcome.retarget, None);
    }

    #[test]
    fn zero_height_skips_aspect() {
        let mut responsive = ResponsiveCamera::default();
        responsive.initialize(Viewport::new(1200, 800));

        let outcome = responsive.on_resize(600, 0);
        assert_eq!(outcome.aspect_ratio, None);
        assert_eq!(outcome.retarget, Some(CAMERA_TARGET_NARROW));

        let recovered = responsive.on_resize(600, 300);
        assert_eq!(recovered.aspect_ratio, Some(2.0));
        assert_eq!(recovered.retarget, None);
    }

    #[test]
    fn fractional_widths_round_down() {
        assert_eq!(logical_viewport(767.6, 500.0).breakpoint(), Breakpoint::Narrow);
        assert_eq!(logical_viewport(899.9, 500.0).breakpoint(), Breakpoint::Medium);
        assert_eq!(logical_viewport(900.0, 500.0).breakpoint(), Breakpoint::Wide);
        assert_eq!(logical_viewport(-3.0, 0.4), Viewport::new(0, 0));
    }

    #[test]
    fn browser_size_wins_over_default_window_size() {
        let window = Viewport::new(1280, 720);
        let phone = Viewport::new(375, 667);
        let startup = resolve_startup_viewport(window, Some(phone));
        assert_eq!(startup, phone);

        let mut responsive = ResponsiveCamera::default();
        assert_eq!(responsive.initialize(startup), CAMERA_TARGET_NARROW);
        // The canvas catching up to the page must not glide the camera.
        assert!(responsive.on_resize(375, 667).is_noop());
    }

    #[test]
    fn window_size_used_without_browser_reading() {
        let window = Viewport::new(1280, 720);
        assert_eq!(resolve_startup_viewport(window, None), window);
        assert_eq!(
            resolve_startup_viewport(window, Some(Viewport::new(0, 0))),
            window
        );
    }

    fn startup_app() -> App {
        let mut app = App::new();
        app.insert_resource(ShowcaseConfig::default())
            .add_systems(Startup, init_responsive_camera);
        app
    }

    fn spawn_test_camera(app: &mut App) -> Entity {
        app.world_mut()
            .spawn((
                ShowcaseCamera,
                Transform::default(),
                Projection::Perspective(PerspectiveProjection::default()),
            ))
            .id()
    }

    #[test]
    fn startup_places_camera_from_primary_window() {
        let mut app = startup_app();
        app.world_mut().spawn((
            Window {
                resolution: WindowResolution::new(500.0, 1000.0),
                ..default()
            },
            PrimaryWindow,
        ));
        let camera = spawn_test_camera(&mut app);
        app.update();

        let transform = app.world().get::<Transform>(camera).unwrap();
        assert_eq!(transform.translation, CAMERA_TARGET_NARROW);
        let to_focus = (ORBIT_FOCUS - CAMERA_TARGET_NARROW).normalize();
        assert!(transform.forward().as_vec3().abs_diff_eq(to_focus, 1e-4));

        match app.world().get::<Projection>(camera).unwrap() {
            Projection::Perspective(perspective) => assert_eq!(perspective.aspect_ratio, 0.5),
            _ => panic!("showcase camera must be perspective"),
        }

        let responsive = app.world().resource::<ResponsiveCamera>();
        assert_eq!(responsive.viewport(), Some(Viewport::new(500, 1000)));
        assert_eq!(responsive.target(), CAMERA_TARGET_NARROW);
    }

    #[test]
    fn startup_without_window_keeps_spawn_position() {
        let mut app = startup_app();
        let camera = spawn_test_camera(&mut app);
        app.update();

        assert_eq!(
            *app.world().get::<Transform>(camera).unwrap(),
            Transform::default()
        );
        let responsive = app.world().resource::<ResponsiveCamera>();
        assert_eq!(responsive.viewport(), None);
    }

    fn resize_app(policy: RetargetPolicy) -> App {
        let mut app = App::new();
        app.add_event::<WindowResized>()
            .add_event::<CameraRetargeted>()
            .insert_resource(ShowcaseConfig {
                retarget_policy: policy,
                ..default()
            })
            .insert_resource(ResponsiveCamera::new(policy))
            .add_systems(Update, responsive_camera_system);
        app.world_mut().spawn((
            ShowcaseCamera,
            Transform::from_translation(CAMERA_TARGET_NARROW),
            Projection::Perspective(PerspectiveProjection::default()),
        ));
        app
    }

    fn resize(app: &mut App, width: f32, height: f32) {
        app.world_mut().send_event(WindowResized {
            window: Entity::PLACEHOLDER,
            width,
            height,
        });
        app.update();
    }

    fn camera_state(app: &mut App) -> (Option<CameraTween>, f32) {
        let mut query = app
            .world_mut()
            .query_filtered::<(Option<&CameraTween>, &Projection), With<ShowcaseCamera>>();
        let (tween, projection) = query.single(app.world()).unwrap();
        let aspect = match projection {
            Projection::Perspective(perspective) => perspective.aspect_ratio,
            _ => panic!("showcase camera must be perspective"),
        };
        (tween.cloned(), aspect)
    }

    fn retarget_count(app: &App) -> usize {
        let events = app.world().resource::<Events<CameraRetargeted>>();
        events.get_cursor().read(events).count()
    }

    #[test]
    fn resize_system_applies_aspect_and_starts_tween() {
        let mut app = resize_app(RetargetPolicy::OnBreakpointChange);
        resize(&mut app, 1000.0, 500.0);

        let (tween, aspect) = camera_state(&mut app);
        assert_eq!(aspect, 2.0);
        assert_eq!(tween.map(|t| t.end()), Some(CAMERA_TARGET_WIDE));
        assert_eq!(retarget_count(&app), 1);
    }

    #[test]
    fn resize_system_skips_tween_within_breakpoint() {
        let mut app = resize_app(RetargetPolicy::OnBreakpointChange);
        resize(&mut app, 500.0, 500.0);

        let (tween, aspect) = camera_state(&mut app);
        assert_eq!(aspect, 1.0);
        assert!(tween.is_none());
        assert_eq!(retarget_count(&app), 0);
    }

    #[test]
    fn resize_system_ignores_repeated_dimensions() {
        let mut app = resize_app(RetargetPolicy::EveryResize);
        resize(&mut app, 640.0, 480.0);
        resize(&mut app, 640.0, 480.0);

        // Events persist across two updates, so both frames are counted here.
        assert_eq!(retarget_count(&app), 1);
    }
}
