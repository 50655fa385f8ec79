use bevy::asset::AssetMetaCheck;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use constants::camera::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_TARGET_NARROW, ORBIT_FOCUS,
};
use constants::render_settings::{ENV_MAP_INTENSITY, TONE_MAPPING_EXPOSURE};

// Camera
use crate::engine::camera::ShowcaseCamera;
use crate::engine::camera::camera_tween::camera_tween_system;
use crate::engine::camera::orbit_controls::{
    OrbitControls, OrbitInteraction, orbit_controls_system,
};
use crate::engine::camera::responsive_camera::{
    CameraRetargeted, init_responsive_camera, responsive_camera_system,
};
// Core
use crate::engine::core::app_state::{AppState, LoadingProgress, transition_to_running};
use crate::engine::core::config::ShowcaseConfig;
use crate::engine::core::window_config::create_window_config;
// Scene
use crate::engine::scene::environment::{
    configure_environment_cubemap, environment_components, load_environment_cubemap,
};
use crate::engine::scene::lighting::{draw_key_light_gizmo, exposure_color_grading, spawn_key_light};
use crate::engine::scene::watch_model::spawn_watch;
// Systems
use crate::engine::systems::debug_params::{
    DebugParamEvent, DebugParams, apply_debug_param_events, sync_debug_camera_position,
};
use crate::engine::systems::fps_tracking::fps_notification_system;
use crate::engine::systems::heading_visibility::{
    apply_heading_opacity, heading_visibility_system, init_heading_visibility,
};
// Web RPC
use crate::rpc::web_rpc::WebRpcPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::debug_params::log_debug_params;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(WebRpcPlugin);

    app.init_resource::<LoadingProgress>()
        .init_resource::<OrbitControls>()
        .init_resource::<DebugParams>()
        .add_event::<OrbitInteraction>()
        .add_event::<CameraRetargeted>()
        .add_event::<DebugParamEvent>();

    // Each step sees the previous step's commands applied.
    app.add_systems(
        Startup,
        (
            insert_showcase_config,
            setup,
            init_responsive_camera,
            init_heading_visibility,
        )
            .chain(),
    );

    app.add_systems(
        Update,
        (configure_environment_cubemap, transition_to_running)
            .chain()
            .run_if(in_state(AppState::Loading)),
    );

    // Camera and heading run in every state so resizes during loading are kept.
    app.add_systems(
        Update,
        (
            orbit_controls_system,
            responsive_camera_system,
            camera_tween_system,
            heading_visibility_system,
            apply_heading_opacity,
        )
            .chain(),
    );

    app.add_systems(
        Update,
        (
            fps_notification_system,
            draw_key_light_gizmo.run_if(debug_enabled),
        )
            .run_if(in_state(AppState::Running)),
    );

    add_debug_param_systems(&mut app);

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, log_debug_params.run_if(debug_enabled));
    }

    app
}

/// `get_debug_params` is readable without debug mode, so the camera position
/// is synced every frame; only edits are gated.
fn add_debug_param_systems(app: &mut App) {
    app.add_systems(
        Update,
        (
            apply_debug_param_events.run_if(debug_enabled),
            sync_debug_camera_position,
        )
            .chain()
            .after(camera_tween_system),
    );
}

fn debug_enabled(config: Option<Res<ShowcaseConfig>>) -> bool {
    config.is_some_and(|config| config.debug_enabled)
}

fn insert_showcase_config(mut commands: Commands) {
    commands.insert_resource(ShowcaseConfig::from_environment());
}

fn setup(mut commands: Commands, asset_server: Res<AssetServer>) {
    info!("=== WATCH SHOWCASE ===");

    spawn_camera(&mut commands, &asset_server);
    spawn_key_light(&mut commands);
    spawn_watch(&mut commands, &asset_server);

    #[cfg(not(target_arch = "wasm32"))]
    {
        spawn_native_heading(&mut commands);
    }
}

fn spawn_camera(commands: &mut Commands, asset_server: &AssetServer) {
    let cubemap = load_environment_cubemap(asset_server);
    let (skybox, environment_light) = environment_components(&cubemap, ENV_MAP_INTENSITY);

    commands.spawn((
        Name::new("Showcase camera"),
        ShowcaseCamera,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Tonemapping::AcesFitted,
        exposure_color_grading(TONE_MAPPING_EXPOSURE),
        skybox,
        environment_light,
        Transform::from_translation(CAMERA_TARGET_NARROW).looking_at(ORBIT_FOCUS, Vec3::Y),
    ));
    commands.insert_resource(cubemap);
}

/// Native stand-in for the page heading: a UI text node in the top left.
#[cfg(not(target_arch = "wasm32"))]
fn spawn_native_heading(commands: &mut Commands) {
    use crate::engine::systems::heading_visibility::Heading;
    use constants::interaction::{NATIVE_HEADING_FONT_SIZE, NATIVE_HEADING_TEXT};

    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(NATIVE_HEADING_TEXT),
                TextFont {
                    font_size: NATIVE_HEADING_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(32.0),
                    left: Val::Px(32.0),
                    ..default()
                },
                Heading,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::systems::debug_params::DebugParamKey;

    fn debug_param_app(config: Option<ShowcaseConfig>) -> App {
        let mut app = App::new();
        app.init_resource::<DebugParams>()
            .add_event::<DebugParamEvent>();
        if let Some(config) = config {
            app.insert_resource(config);
        }
        add_debug_param_systems(&mut app);
        app
    }

    #[test]
    fn camera_position_reported_with_debug_off() {
        let mut app = debug_param_app(None);
        let camera = app
            .world_mut()
            .spawn((ShowcaseCamera, Transform::from_xyz(1.0, 2.0, 3.0)))
            .id();
        app.world_mut().send_event(DebugParamEvent {
            key: DebugParamKey::CameraX,
            value: 5.0,
        });
        app.update();

        let params = app.world().resource::<DebugParams>();
        assert_eq!(params.camera_position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(
            app.world().get::<Transform>(camera).unwrap().translation,
            Vec3::new(1.0, 2.0, 3.0)
        );

        app.world_mut().get_mut::<Transform>(camera).unwrap().translation = Vec3::new(4.0, 0.0, 6.0);
        app.update();
        assert_eq!(
            app.world().resource::<DebugParams>().camera_position,
            Vec3::new(4.0, 0.0, 6.0)
        );
    }

    #[test]
    fn param_edits_applied_with_debug_on() {
        let mut app = debug_param_app(Some(ShowcaseConfig {
            debug_enabled: true,
            ..default()
        }));
        let camera = app
            .world_mut()
            .spawn((ShowcaseCamera, Transform::from_xyz(0.0, -1.28, 9.0)))
            .id();
        app.world_mut().send_event(DebugParamEvent {
            key: DebugParamKey::CameraZ,
            value: 6.0,
        });
        app.update();

        let translation = app.world().get::<Transform>(camera).unwrap().translation;
        assert_eq!(translation, Vec3::new(0.0, -1.28, 6.0));
        assert_eq!(app.world().resource::<DebugParams>().camera_position, translation);
    }
}
