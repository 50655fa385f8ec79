/// Cubemap face file stems in GPU layer order.
pub const CUBEMAP_FACES: [&str; 6] = ["px", "nx", "py", "ny", "pz", "nz"];

/// Bytes per texel of the baked cubemap (RGBA8).
pub const CUBEMAP_BYTES_PER_TEXEL: usize = 4;

/// Baked studio environment loaded by the showcase.
pub const ENVIRONMENT_CUBEMAP_PATH: &str = "textures/london_studio.dds";
