use bevy::input::mouse::MouseMotion;
use bevy::input::touch::Touches;
use bevy::prelude::*;
use constants::camera::{
    ORBIT_DAMPING_FACTOR, ORBIT_FOCUS, ORBIT_POLAR_EPSILON, ORBIT_ROTATE_SPEED,
};
use std::f32::consts::PI;

use crate::engine::camera::ShowcaseCamera;

/// Boundaries of a user drag gesture on the view.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitInteraction {
    Start,
    End,
}

/// Rotate-only orbit controls with damping. Zoom and pan are not offered.
#[derive(Resource, Debug)]
pub struct OrbitControls {
    pub focus: Vec3,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    dragging: bool,
    // x: azimuth, y: polar; radians still to be applied.
    pending_rotation: Vec2,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            focus: ORBIT_FOCUS,
            damping_factor: ORBIT_DAMPING_FACTOR,
            rotate_speed: ORBIT_ROTATE_SPEED,
            dragging: false,
            pending_rotation: Vec2::ZERO,
        }
    }
}

impl OrbitControls {
    /// Returns true when this call starts a new drag.
    pub fn begin_drag(&mut self) -> bool {
        !std::mem::replace(&mut self.dragging, true)
    }

    /// Returns true when this call ends an active drag.
    pub fn end_drag(&mut self) -> bool {
        std::mem::replace(&mut self.dragging, false)
    }

    /// Queue rotation from a pointer delta in logical pixels.
    pub fn push_drag(&mut self, delta: Vec2) {
        self.pending_rotation += delta * self.rotate_speed;
    }

    pub fn is_settled(&self) -> bool {
        self.pending_rotation == Vec2::ZERO
    }

    /// Apply a damped share of the pending rotation to `translation` and return
    /// the orbited position. `frame_scale` is the frame time in 60 Hz frames.
    pub fn step(&mut self, translation: Vec3, frame_scale: f32) -> Vec3 {
        if self.is_settled() {
            return translation;
        }

        let offset = translation - self.focus;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            self.pending_rotation = Vec2::ZERO;
            return translation;
        }

        let share = (self.damping_factor * frame_scale).clamp(0.0, 1.0);
        let applied = self.pending_rotation * share;
        self.pending_rotation -= applied;
        if self.pending_rotation.length_squared() < 1e-10 {
            self.pending_rotation = Vec2::ZERO;
        }

        let azimuth = offset.x.atan2(offset.z) - applied.x;
        let polar = ((offset.y / radius).clamp(-1.0, 1.0).acos() - applied.y)
            .clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);

        self.focus
            + Vec3::new(
                radius * polar.sin() * azimuth.sin(),
                radius * polar.cos(),
                radius * polar.sin() * azimuth.cos(),
            )
    }
}

/// Translate mouse and single-touch drags into camera orbit and emit gesture
/// start/end events.
pub fn orbit_controls_system(
    mut controls: ResMut<OrbitControls>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    touches: Res<Touches>,
    time: Res<Time>,
    mut interactions: EventWriter<OrbitInteraction>,
    mut camera_query: Query<&mut Transform, With<ShowcaseCamera>>,
) {
    let mouse_dragging = mouse_button.pressed(MouseButton::Left);
    let mut active_touches = touches.iter();
    let touch = active_touches.next();
    let single_touch = touch.is_some() && active_touches.next().is_none();
    let pressing = mouse_dragging || touch.is_some();

    if pressing && controls.begin_drag() {
        interactions.write(OrbitInteraction::Start);
    } else if !pressing && controls.end_drag() {
        interactions.write(OrbitInteraction::End);
    }

    let mouse_delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    if mouse_dragging && mouse_delta != Vec2::ZERO {
        controls.push_drag(mouse_delta);
    } else if single_touch {
        if let Some(touch) = touch {
            controls.push_drag(touch.delta());
        }
    }

    if controls.is_settled() {
        return;
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    let frame_scale = time.delta_secs() * 60.0;
    transform.translation = controls.step(transform.translation, frame_scale);
    transform.look_at(controls.focus, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn drag_boundaries_report_once() {
        let mut controls = OrbitControls::default();
        assert!(controls.begin_drag());
        assert!(!controls.begin_drag());
        assert!(controls.end_drag());
        assert!(!controls.end_drag());
    }

    #[test]
    fn orbit_preserves_distance_to_focus() {
        let mut controls = OrbitControls::default();
        let start = Vec3::new(3.3, -2.0, 8.0);
        controls.push_drag(Vec2::new(120.0, -40.0));

        let mut position = start;
        for _ in 0..30 {
            position = controls.step(position, 1.0);
        }
        assert!((position.length() - start.length()).abs() < 1e-3);
        assert!(position.distance(start) > 0.1);
    }

    #[test]
    fn damping_decays_to_rest() {
        let mut controls = OrbitControls::default();
        controls.push_drag(Vec2::new(50.0, 0.0));

        let mut position = Vec3::new(0.0, 0.0, 9.0);
        for _ in 0..2_000 {
            position = controls.step(position, 1.0);
        }
        assert!(controls.is_settled());
        assert_eq!(controls.step(position, 1.0), position);
    }

    #[test]
    fn polar_angle_stays_off_the_poles() {
        let mut controls = OrbitControls::default();
        controls.push_drag(Vec2::new(0.0, 10_000.0));

        let mut position = Vec3::new(0.0, 0.0, 9.0);
        for _ in 0..200 {
            position = controls.step(position, 1.0);
        }
        assert!(position.y < 9.0);
        assert!(Vec2::new(position.x, position.z).length() > 0.0);
    }

    fn orbit_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>()
            .init_resource::<OrbitControls>()
            .init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<Touches>()
            .add_event::<MouseMotion>()
            .add_event::<OrbitInteraction>()
            .add_systems(Update, orbit_controls_system);
        app.world_mut()
            .spawn((ShowcaseCamera, Transform::from_xyz(0.0, -1.28, 9.0)));
        app
    }

    fn step(app: &mut App) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(16));
        app.update();
    }

    fn interactions(app: &App) -> Vec<OrbitInteraction> {
        let events = app.world().resource::<Events<OrbitInteraction>>();
        events.get_cursor().read(events).copied().collect()
    }

    #[test]
    fn mouse_drag_emits_start_then_end() {
        let mut app = orbit_app();

        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        step(&mut app);
        step(&mut app);
        assert_eq!(interactions(&app), vec![OrbitInteraction::Start]);

        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .release(MouseButton::Left);
        step(&mut app);
        assert_eq!(interactions(&app), vec![OrbitInteraction::End]);
    }

    #[test]
    fn mouse_motion_while_pressed_moves_camera() {
        let mut app = orbit_app();
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.world_mut().send_event(MouseMotion {
            delta: Vec2::new(80.0, 0.0),
        });
        step(&mut app);

        let mut query = app
            .world_mut()
            .query_filtered::<&Transform, With<ShowcaseCamera>>();
        let transform = query.single(app.world()).unwrap();
        assert!(transform.translation.x.abs() > 0.0);
    }

    #[test]
    fn mouse_motion_without_press_is_ignored() {
        let mut app = orbit_app();
        app.world_mut().send_event(MouseMotion {
            delta: Vec2::new(80.0, 0.0),
        });
        step(&mut app);

        assert!(app.world().resource::<OrbitControls>().is_settled());
        assert!(interactions(&app).is_empty());
    }
}
