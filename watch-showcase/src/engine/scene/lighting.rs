use bevy::pbr::CascadeShadowConfigBuilder;
use bevy::prelude::*;
use bevy::render::view::{ColorGrading, ColorGradingGlobal};
use constants::camera::ORBIT_FOCUS;
use constants::render_settings::{
    KEY_LIGHT_INTENSITY, KEY_LIGHT_LUX_PER_UNIT, KEY_LIGHT_POSITION, KEY_LIGHT_SHADOW_DISTANCE,
};

/// Main directional light of the studio setup.
#[derive(Component)]
pub struct KeyLight;

/// Smallest exposure multiplier; keeps `log2` finite when exposure is zero.
const MIN_EXPOSURE: f32 = 1e-4;

pub fn key_light_illuminance(intensity: f32) -> f32 {
    intensity.max(0.0) * KEY_LIGHT_LUX_PER_UNIT
}

/// Directional lights shine along their forward axis, so the key light is
/// re-aimed at the watch whenever its position changes.
pub fn key_light_transform(position: Vec3) -> Transform {
    Transform::from_translation(position).looking_at(ORBIT_FOCUS, Vec3::Y)
}

pub fn spawn_key_light(commands: &mut Commands) {
    commands.spawn((
        Name::new("Key light"),
        KeyLight,
        DirectionalLight {
            color: Color::WHITE,
            illuminance: key_light_illuminance(KEY_LIGHT_INTENSITY),
            shadows_enabled: true,
            ..default()
        },
        key_light_transform(KEY_LIGHT_POSITION),
        CascadeShadowConfigBuilder {
            maximum_distance: KEY_LIGHT_SHADOW_DISTANCE,
            ..default()
        }
        .build(),
    ));
}

/// Tone mapping exposure multiplier expressed as EV.
pub fn exposure_ev(multiplier: f32) -> f32 {
    multiplier.max(MIN_EXPOSURE).log2()
}

pub fn exposure_color_grading(multiplier: f32) -> ColorGrading {
    ColorGrading {
        global: ColorGradingGlobal {
            exposure: exposure_ev(multiplier),
            ..default()
        },
        ..default()
    }
}

/// Debug helper: show where the key light sits and where it points.
pub fn draw_key_light_gizmo(mut gizmos: Gizmos, lights: Query<&Transform, With<KeyLight>>) {
    for transform in &lights {
        gizmos.sphere(
            Isometry3d::from_translation(transform.translation),
            0.15,
            Color::srgb(1.0, 0.85, 0.3),
        );
        gizmos.arrow(
            transform.translation,
            ORBIT_FOCUS,
            Color::srgb(1.0, 0.85, 0.3),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposure_multiplier_maps_to_ev() {
        assert_eq!(exposure_ev(1.0), 0.0);
        assert_eq!(exposure_ev(2.0), 1.0);
        assert_eq!(exposure_ev(0.5), -1.0);
        assert!(exposure_ev(0.0).is_finite());
    }

    #[test]
    fn key_light_points_at_watch() {
        let transform = key_light_transform(KEY_LIGHT_POSITION);
        let towards_focus = (ORBIT_FOCUS - KEY_LIGHT_POSITION).normalize();
        assert!(transform.forward().as_vec3().abs_diff_eq(towards_focus, 1e-5));
    }

    #[test]
    fn illuminance_never_negative() {
        assert_eq!(key_light_illuminance(-3.0), 0.0);
        assert_eq!(key_light_illuminance(2.1), 2.1 * KEY_LIGHT_LUX_PER_UNIT);
    }
}
