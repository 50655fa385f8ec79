use bevy::gltf::GltfMaterialName;
use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;
use constants::render_settings::{NON_SHADOW_CASTING_MATERIAL, WATCH_MODEL_PATH, WATCH_SCALE};

use crate::engine::core::app_state::LoadingProgress;

/// Parent of the watch model; its X rotation is debug-tunable.
#[derive(Component)]
pub struct WatchGroup;

pub fn spawn_watch(commands: &mut Commands, asset_server: &AssetServer) {
    let scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(WATCH_MODEL_PATH));
    info!("Loading watch model: {}", WATCH_MODEL_PATH);

    commands
        .spawn((
            Name::new("Watch group"),
            WatchGroup,
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|group| {
            group
                .spawn((
                    Name::new("Watch"),
                    SceneRoot(scene),
                    Transform::from_scale(Vec3::splat(WATCH_SCALE)),
                ))
                .observe(configure_watch_shadows);
        });
}

/// Every watch mesh receives shadows; all but the glass also cast them.
pub fn casts_shadow(material_name: &str) -> bool {
    material_name != NON_SHADOW_CASTING_MATERIAL
}

fn configure_watch_shadows(
    trigger: Trigger<SceneInstanceReady>,
    mut commands: Commands,
    children: Query<&Children>,
    materials: Query<&GltfMaterialName>,
    mut loading_progress: ResMut<LoadingProgress>,
) {
    let mut non_casting = 0;
    for entity in children.iter_descendants(trigger.target()) {
        let Ok(material) = materials.get(entity) else {
            continue;
        };
        if !casts_shadow(&material.0) {
            commands.entity(entity).insert(NotShadowCaster);
            non_casting += 1;
        }
    }

    info!(
        "✓ Watch model ready ({} mesh(es) excluded from shadow casting)",
        non_casting
    );
    loading_progress.watch_ready = true;
}
