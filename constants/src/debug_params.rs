/// Inclusive range and slider step of one tunable parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ParamRange {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const CAMERA_XY_RANGE: ParamRange = ParamRange::new(-10.0, 10.0, 0.001);
pub const CAMERA_Z_RANGE: ParamRange = ParamRange::new(0.0, 10.0, 0.001);
pub const ENV_MAP_INTENSITY_RANGE: ParamRange = ParamRange::new(0.0, 10.0, 0.001);
pub const WATCH_ROTATION_RANGE: ParamRange = ParamRange::new(-1.0, 1.0, 0.001);
pub const KEY_LIGHT_POSITION_RANGE: ParamRange = ParamRange::new(-10.0, 10.0, 0.001);
pub const KEY_LIGHT_INTENSITY_RANGE: ParamRange = ParamRange::new(0.0, 15.0, 0.1);
pub const TONE_MAPPING_EXPOSURE_RANGE: ParamRange = ParamRange::new(0.0, 5.0, 0.001);
