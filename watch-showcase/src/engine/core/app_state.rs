use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

/// Asset readiness gathered while in `AppState::Loading`.
#[derive(Resource, Debug, Default)]
pub struct LoadingProgress {
    pub environment_loaded: bool,
    pub watch_ready: bool,
}

impl LoadingProgress {
    pub fn is_complete(&self) -> bool {
        self.environment_loaded && self.watch_ready
    }
}

pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.is_complete() {
        info!("→ Environment and watch ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
