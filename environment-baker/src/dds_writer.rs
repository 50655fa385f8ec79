use ddsfile::{AlphaMode, Caps2, D3D10ResourceDimension, Dds, DxgiFormat, NewDxgiParams};
use std::path::Path;

use crate::error::BakeError;

/// Build an sRGB RGBA8 cubemap with one mip. `data` holds the six faces
/// back to back in `px, nx, py, ny, pz, nz` order.
pub fn build_cubemap_dds(size: u32, data: Vec<u8>) -> Result<Dds, BakeError> {
    let params = NewDxgiParams {
        height: size,
        width: size,
        depth: None,
        format: DxgiFormat::R8G8B8A8_UNorm_sRGB,
        mipmap_levels: Some(1),
        // Counts whole cubes; the six faces are implied by the cubemap flag.
        array_layers: Some(1),
        caps2: Some(
            Caps2::CUBEMAP
                | Caps2::CUBEMAP_POSITIVEX
                | Caps2::CUBEMAP_NEGATIVEX
                | Caps2::CUBEMAP_POSITIVEY
                | Caps2::CUBEMAP_NEGATIVEY
                | Caps2::CUBEMAP_POSITIVEZ
                | Caps2::CUBEMAP_NEGATIVEZ,
        ),
        is_cubemap: true,
        resource_dimension: D3D10ResourceDimension::Texture2D,
        alpha_mode: AlphaMode::Straight,
    };

    let mut dds = Dds::new_dxgi(params)?;
    dds.data = data;
    Ok(dds)
}

pub fn write_cubemap_dds(path: &Path, size: u32, data: Vec<u8>) -> Result<(), BakeError> {
    let dds = build_cubemap_dds(size, data)?;
    let io_error = |source| BakeError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    let mut file = std::fs::File::create(path).map_err(io_error)?;
    dds.write(&mut file)?;
    Ok(())
}
