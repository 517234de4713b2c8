//! Window input: pointer capture, pause and stop keys, close handling.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowCloseRequested};
use slapshot_control::PointerInput;
use slapshot_core::config::SimConfig;
use slapshot_core::state::RunState;

/// Publish the cursor position in table units.
///
/// The window reports the cursor from the top-left corner with y running
/// down, which is table space once the pixel scale is removed. An
/// off-window cursor publishes `None`. Skipped entirely while no primary
/// window exists, leaving the published sample to other frontends.
#[allow(clippy::needless_pass_by_value)]
pub fn pointer_capture_system(
    window: Single<&Window, With<PrimaryWindow>>,
    sim: Res<SimConfig>,
    mut pointer: ResMut<PointerInput>,
) {
    pointer.position = window
        .cursor_position()
        .map(|position| position / sim.pixels_per_unit);
}

/// Space toggles pause, Escape stops the run.
#[allow(clippy::needless_pass_by_value)]
pub fn keyboard_system(keys: Res<ButtonInput<KeyCode>>, mut state: ResMut<RunState>) {
    if keys.just_pressed(KeyCode::Space) {
        *state = state.toggled();
    }
    if keys.just_pressed(KeyCode::Escape) {
        *state = RunState::Stopped;
    }
}

/// A window close request stops the run.
pub fn close_requested_system(
    mut requests: MessageReader<WindowCloseRequested>,
    mut state: ResMut<RunState>,
) {
    if requests.read().last().is_some() {
        *state = RunState::Stopped;
    }
}

/// Ask the app to exit once the run has stopped.
#[allow(clippy::needless_pass_by_value)]
pub fn exit_on_stop_system(state: Res<RunState>, mut exit: MessageWriter<AppExit>) {
    if state.is_stopped() {
        exit.write(AppExit::Success);
    }
}

// ---------------------------------------------------------------------------
