use bevy::math::Vec3;

pub const ENV_MAP_INTENSITY: f32 = 2.75;

/// Environment light luminance (cd/m²) per unit of env map intensity.
pub const ENV_MAP_LUMINANCE_PER_UNIT: f32 = 400.0;

/// Skybox background luminance (cd/m²).
pub const SKYBOX_BRIGHTNESS: f32 = 1_000.0;

/// Tone mapping exposure as a linear multiplier.
pub const TONE_MAPPING_EXPOSURE: f32 = 2.0;

pub const KEY_LIGHT_INTENSITY: f32 = 2.1;
pub const KEY_LIGHT_POSITION: Vec3 = Vec3::new(2.624, 0.903, 10.0);

/// Converts the unitless key light intensity to directional illuminance (lux).
pub const KEY_LIGHT_LUX_PER_UNIT: f32 = 1_000.0;

/// Distance covered by the key light's shadow cascades.
pub const KEY_LIGHT_SHADOW_DISTANCE: f32 = 15.0;

pub const WATCH_MODEL_PATH: &str = "model/watch01.gltf";
pub const WATCH_SCALE: f32 = 10.0;

/// Material that receives shadows but never casts them.
pub const NON_SHADOW_CASTING_MATERIAL: &str = "glass1";
