use bevy::math::curve::{Curve, EaseFunction};
use bevy::prelude::*;
use constants::camera::ORBIT_FOCUS;

/// Glides a camera's translation from `start` to `end` with an eased curve.
///
/// Removed from the entity once finished. Inserting a new tween on the same
/// entity replaces the old one.
#[derive(Component, Debug, Clone)]
pub struct CameraTween {
    start: Vec3,
    end: Vec3,
    elapsed: f32,
    duration: f32,
    ease: EaseFunction,
}

impl CameraTween {
    pub fn new(start: Vec3, end: Vec3, duration: f32) -> Self {
        Self {
            start,
            end,
            elapsed: 0.0,
            duration: duration.max(0.0),
            ease: EaseFunction::CubicOut,
        }
    }

    pub fn end(&self) -> Vec3 {
        self.end
    }

    /// Linear time progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration <= f32::EPSILON {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Eased position at the current progress.
    pub fn sample(&self) -> Vec3 {
        let eased = self.ease.sample_clamped(self.progress());
        self.start.lerp(self.end, eased)
    }

    /// Advance by `delta_secs` and return the new position.
    pub fn advance(&mut self, delta_secs: f32) -> Vec3 {
        self.elapsed += delta_secs.max(0.0);
        self.sample()
    }
}

pub fn camera_tween_system(
    mut commands: Commands,
    time: Res<Time>,
    mut tweens: Query<(Entity, &mut Transform, &mut CameraTween)>,
) {
    for (entity, mut transform, mut tween) in &mut tweens {
        transform.translation = tween.advance(time.delta_secs());
        transform.look_at(ORBIT_FOCUS, Vec3::Y);

        if tween.is_finished() {
            debug!("Camera tween reached {:?}", tween.end());
            commands.entity(entity).remove::<CameraTween>();
        }
    }
}
