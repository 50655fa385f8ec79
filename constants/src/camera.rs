use bevy::math::Vec3;

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 15.0;

/// Camera rest position for viewports narrower than the medium breakpoint.
pub const CAMERA_TARGET_NARROW: Vec3 = Vec3::new(0.0, -1.28, 9.0);

/// Camera rest position between the medium and wide breakpoints.
pub const CAMERA_TARGET_MEDIUM: Vec3 = Vec3::new(4.73, -2.0, 9.0);

/// Camera rest position at or above the wide breakpoint.
pub const CAMERA_TARGET_WIDE: Vec3 = Vec3::new(3.3, -2.0, 8.0);

/// Seconds taken to glide the camera to a new rest position.
pub const CAMERA_RETARGET_SECONDS: f32 = 0.5;

/// Orbit point; the watch sits at the origin.
pub const ORBIT_FOCUS: Vec3 = Vec3::ZERO;

/// Fraction of angular velocity removed per 60 Hz frame.
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;

/// Radians of rotation per logical pixel of drag.
pub const ORBIT_ROTATE_SPEED: f32 = 0.005;

/// Keeps the orbit away from the poles so `looking_at` stays stable.
pub const ORBIT_POLAR_EPSILON: f32 = 0.01;
