use bevy::prelude::*;
use bevy::render::view::ColorGrading;
use constants::camera::{CAMERA_TARGET_NARROW, ORBIT_FOCUS};
use constants::debug_params::{
    CAMERA_XY_RANGE, CAMERA_Z_RANGE, ENV_MAP_INTENSITY_RANGE, KEY_LIGHT_INTENSITY_RANGE,
    KEY_LIGHT_POSITION_RANGE, ParamRange, TONE_MAPPING_EXPOSURE_RANGE, WATCH_ROTATION_RANGE,
};
use constants::render_settings::{
    ENV_MAP_INTENSITY, KEY_LIGHT_INTENSITY, KEY_LIGHT_POSITION, TONE_MAPPING_EXPOSURE,
};

use crate::engine::camera::ShowcaseCamera;
use crate::engine::scene::environment::environment_luminance;
use crate::engine::scene::lighting::{
    KeyLight, exposure_color_grading, key_light_illuminance, key_light_transform,
};
use crate::engine::scene::watch_model::WatchGroup;

/// Scene parameters tunable from the debug bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugParamKey {
    CameraX,
    CameraY,
    CameraZ,
    EnvMapIntensity,
    WatchRotationX,
    KeyLightX,
    KeyLightY,
    KeyLightZ,
    KeyLightIntensity,
    ToneMappingExposure,
}

impl DebugParamKey {
    pub const ALL: [Self; 10] = [
        Self::CameraX,
        Self::CameraY,
        Self::CameraZ,
        Self::EnvMapIntensity,
        Self::WatchRotationX,
        Self::KeyLightX,
        Self::KeyLightY,
        Self::KeyLightZ,
        Self::KeyLightIntensity,
        Self::ToneMappingExposure,
    ];

    /// Convert string identifier to parameter key for RPC compatibility.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::CameraX => "camera.x",
            Self::CameraY => "camera.y",
            Self::CameraZ => "camera.z",
            Self::EnvMapIntensity => "env_map_intensity",
            Self::WatchRotationX => "watch.rotation_x",
            Self::KeyLightX => "key_light.x",
            Self::KeyLightY => "key_light.y",
            Self::KeyLightZ => "key_light.z",
            Self::KeyLightIntensity => "key_light.intensity",
            Self::ToneMappingExposure => "tone_mapping_exposure",
        }
    }

    pub fn range(&self) -> ParamRange {
        match self {
            Self::CameraX | Self::CameraY => CAMERA_XY_RANGE,
            Self::CameraZ => CAMERA_Z_RANGE,
            Self::EnvMapIntensity => ENV_MAP_INTENSITY_RANGE,
            Self::WatchRotationX => WATCH_ROTATION_RANGE,
            Self::KeyLightX | Self::KeyLightY | Self::KeyLightZ => KEY_LIGHT_POSITION_RANGE,
            Self::KeyLightIntensity => KEY_LIGHT_INTENSITY_RANGE,
            Self::ToneMappingExposure => TONE_MAPPING_EXPOSURE_RANGE,
        }
    }

    /// Finite and inside the parameter's range.
    pub fn accepts(&self, value: f32) -> bool {
        value.is_finite() && self.range().contains(value)
    }
}

/// Current values of every debug parameter.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct DebugParams {
    pub camera_position: Vec3,
    pub env_map_intensity: f32,
    pub watch_rotation_x: f32,
    pub key_light_position: Vec3,
    pub key_light_intensity: f32,
    pub tone_mapping_exposure: f32,
}

impl Default for DebugParams {
    fn default() -> Self {
        Self {
            camera_position: CAMERA_TARGET_NARROW,
            env_map_intensity: ENV_MAP_INTENSITY,
            watch_rotation_x: 0.0,
            key_light_position: KEY_LIGHT_POSITION,
            key_light_intensity: KEY_LIGHT_INTENSITY,
            tone_mapping_exposure: TONE_MAPPING_EXPOSURE,
        }
    }
}

impl DebugParams {
    pub fn get(&self, key: DebugParamKey) -> f32 {
        match key {
            DebugParamKey::CameraX => self.camera_position.x,
            DebugParamKey::CameraY => self.camera_position.y,
            DebugParamKey::CameraZ => self.camera_position.z,
            DebugParamKey::EnvMapIntensity => self.env_map_intensity,
            DebugParamKey::WatchRotationX => self.watch_rotation_x,
            DebugParamKey::KeyLightX => self.key_light_position.x,
            DebugParamKey::KeyLightY => self.key_light_position.y,
            DebugParamKey::KeyLightZ => self.key_light_position.z,
            DebugParamKey::KeyLightIntensity => self.key_light_intensity,
            DebugParamKey::ToneMappingExposure => self.tone_mapping_exposure,
        }
    }

    /// Store a value without range checks; callers validate with
    /// [`DebugParamKey::accepts`].
    pub fn set(&mut self, key: DebugParamKey, value: f32) {
        match key {
            DebugParamKey::CameraX => self.camera_position.x = value,
            DebugParamKey::CameraY => self.camera_position.y = value,
            DebugParamKey::CameraZ => self.camera_position.z = value,
            DebugParamKey::EnvMapIntensity => self.env_map_intensity = value,
            DebugParamKey::WatchRotationX => self.watch_rotation_x = value,
            DebugParamKey::KeyLightX => self.key_light_position.x = value,
            DebugParamKey::KeyLightY => self.key_light_position.y = value,
            DebugParamKey::KeyLightZ => self.key_light_position.z = value,
            DebugParamKey::KeyLightIntensity => self.key_light_intensity = value,
            DebugParamKey::ToneMappingExposure => self.tone_mapping_exposure = value,
        }
    }

    /// Parameters with their ranges, in panel order.
    pub fn to_json(&self) -> serde_json::Value {
        let params: Vec<serde_json::Value> = DebugParamKey::ALL
            .iter()
            .map(|key| {
                let range = key.range();
                serde_json::json!({
                    "key": key.name(),
                    "value": self.get(*key),
                    "min": range.min,
                    "max": range.max,
                    "step": range.step,
                })
            })
            .collect();
        serde_json::Value::Array(params)
    }
}

/// Validated parameter change requested by the debug bridge.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct DebugParamEvent {
    pub key: DebugParamKey,
    pub value: f32,
}

/// Apply parameter changes to the camera, environment, light and watch.
pub fn apply_debug_param_events(
    mut events: EventReader<DebugParamEvent>,
    mut params: ResMut<DebugParams>,
    mut camera_query: Query<
        (
            &mut Transform,
            Option<&mut EnvironmentMapLight>,
            Option<&mut ColorGrading>,
        ),
        (With<ShowcaseCamera>, Without<KeyLight>, Without<WatchGroup>),
    >,
    mut light_query: Query<
        (&mut Transform, &mut DirectionalLight),
        (With<KeyLight>, Without<ShowcaseCamera>, Without<WatchGroup>),
    >,
    mut watch_query: Query<
        &mut Transform,
        (With<WatchGroup>, Without<ShowcaseCamera>, Without<KeyLight>),
    >,
) {
    for event in events.read() {
        params.set(event.key, event.value);
        debug!("Debug param {} = {}", event.key.name(), event.value);

        match event.key {
            DebugParamKey::CameraX | DebugParamKey::CameraY | DebugParamKey::CameraZ => {
                if let Ok((mut transform, _, _)) = camera_query.single_mut() {
                    transform.translation = params.camera_position;
                    transform.look_at(ORBIT_FOCUS, Vec3::Y);
                }
            }
            DebugParamKey::EnvMapIntensity => {
                if let Ok((_, Some(mut environment), _)) = camera_query.single_mut() {
                    environment.intensity = environment_luminance(params.env_map_intensity);
                }
            }
            DebugParamKey::ToneMappingExposure => {
                if let Ok((_, _, Some(mut grading))) = camera_query.single_mut() {
                    *grading = exposure_color_grading(params.tone_mapping_exposure);
                }
            }
            DebugParamKey::WatchRotationX => {
                for mut transform in &mut watch_query {
                    transform.rotation = Quat::from_rotation_x(params.watch_rotation_x);
                }
            }
            DebugParamKey::KeyLightX | DebugParamKey::KeyLightY | DebugParamKey::KeyLightZ => {
                for (mut transform, _) in &mut light_query {
                    *transform = key_light_transform(params.key_light_position);
                }
            }
            DebugParamKey::KeyLightIntensity => {
                for (_, mut light) in &mut light_query {
                    light.illuminance = key_light_illuminance(params.key_light_intensity);
                }
            }
        }
    }
}

/// Keep the reported camera position live while orbiting and tweening.
pub fn sync_debug_camera_position(
    mut params: ResMut<DebugParams>,
    camera_query: Query<&Transform, (With<ShowcaseCamera>, Changed<Transform>)>,
) {
    if let Ok(transform) = camera_query.single() {
        params.camera_position = transform.translation;
    }
}

/// Native shortcut: F1 logs every debug parameter.
#[cfg(not(target_arch = "wasm32"))]
pub fn log_debug_params(params: Res<DebugParams>, keyboard: Res<ButtonInput<KeyCode>>) {
    if keyboard.just_pressed(KeyCode::F1) {
        info!("=== DEBUG PARAMS ===");
        for key in DebugParamKey::ALL {
            info!("{}: {:.3}", key.name(), params.get(key));
        }
    }
}
