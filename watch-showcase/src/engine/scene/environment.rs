use bevy::asset::LoadState;
use bevy::core_pipeline::Skybox;
use bevy::prelude::*;
use bevy::render::render_resource::{TextureViewDescriptor, TextureViewDimension};
use constants::environment::ENVIRONMENT_CUBEMAP_PATH;
use constants::render_settings::{ENV_MAP_LUMINANCE_PER_UNIT, SKYBOX_BRIGHTNESS};

use crate::engine::core::app_state::LoadingProgress;

/// Handle to the baked studio cubemap.
#[derive(Resource, Clone)]
pub struct EnvironmentCubemap {
    pub image: Handle<Image>,
}

pub fn load_environment_cubemap(asset_server: &AssetServer) -> EnvironmentCubemap {
    info!("Loading environment cubemap: {}", ENVIRONMENT_CUBEMAP_PATH);
    EnvironmentCubemap {
        image: asset_server.load(ENVIRONMENT_CUBEMAP_PATH),
    }
}

/// Environment light luminance for the unitless env map intensity.
pub fn environment_luminance(intensity: f32) -> f32 {
    intensity.max(0.0) * ENV_MAP_LUMINANCE_PER_UNIT
}

/// Background and reflection components for the showcase camera.
pub fn environment_components(
    cubemap: &EnvironmentCubemap,
    intensity: f32,
) -> (Skybox, EnvironmentMapLight) {
    (
        Skybox {
            image: cubemap.image.clone(),
            brightness: SKYBOX_BRIGHTNESS,
            rotation: Quat::IDENTITY,
        },
        EnvironmentMapLight {
            diffuse_map: cubemap.image.clone(),
            specular_map: cubemap.image.clone(),
            intensity: environment_luminance(intensity),
            rotation: Quat::IDENTITY,
            affects_lightmapped_mesh_diffuse: true,
        },
    )
}

/// Wait for the cubemap and make sure it is sampled as a cube.
///
/// A failed load is logged and treated as done so the showcase still runs
/// without image-based lighting.
pub fn configure_environment_cubemap(
    cubemap: Res<EnvironmentCubemap>,
    asset_server: Res<AssetServer>,
    mut images: ResMut<Assets<Image>>,
    mut loading_progress: ResMut<LoadingProgress>,
) {
    if loading_progress.environment_loaded {
        return;
    }

    match asset_server.get_load_state(&cubemap.image) {
        Some(LoadState::Loaded) => {}
        Some(LoadState::Failed(error)) => {
            error!("Environment cubemap failed to load: {}", error);
            loading_progress.environment_loaded = true;
            return;
        }
        _ => return,
    }

    if let Some(image) = images.get_mut(&cubemap.image) {
        let layers = image.texture_descriptor.array_layer_count();
        if layers == 6 && image.texture_view_descriptor.is_none() {
            image.texture_view_descriptor = Some(TextureViewDescriptor {
                dimension: Some(TextureViewDimension::Cube),
                ..default()
            });
        } else if layers != 6 {
            warn!("Environment texture has {} layers, expected 6", layers);
        }
    }

    info!("✓ Environment cubemap loaded");
    loading_progress.environment_loaded = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminance_scales_with_intensity() {
        assert_eq!(environment_luminance(0.0), 0.0);
        assert_eq!(environment_luminance(2.75), 2.75 * ENV_MAP_LUMINANCE_PER_UNIT);
        assert_eq!(environment_luminance(-1.0), 0.0);
    }

    #[test]
    fn skybox_and_light_share_the_cubemap() {
        let cubemap = EnvironmentCubemap {
            image: Handle::default(),
        };
        let (skybox, light) = environment_components(&cubemap, 2.75);
        assert_eq!(skybox.image, cubemap.image);
        assert_eq!(skybox.brightness, SKYBOX_BRIGHTNESS);
        assert_eq!(light.diffuse_map, cubemap.image);
        assert_eq!(light.specular_map, cubemap.image);
        assert_eq!(light.intensity, environment_luminance(2.75));
    }
}
