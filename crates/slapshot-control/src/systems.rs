//! Frame system bridging pointer input to the table world.

use bevy::prelude::*;
use slapshot_core::config::ControlConfig;
use slapshot_core::state::RunState;
use slapshot_physics::{SceneHandles, TableWorld};

use crate::law::{ControlDecision, MalletLaw};
use crate::pointer::{PointerInput, PointerTracker};

/// Run the mallet law once per frame and apply its decision.
///
/// Runs in [`SlapshotSet::Control`](slapshot_core::SlapshotSet::Control),
/// after input capture and before the physics step, so repel forces are
/// spent by the same frame's steps.
#[allow(clippy::needless_pass_by_value)]
pub fn mallet_control_system(
    state: Res<RunState>,
    time: Res<Time>,
    control: Res<ControlConfig>,
    pointer: Res<PointerInput>,
    mut tracker: ResMut<PointerTracker>,
    handles: Option<Res<SceneHandles>>,
    table: Option<ResMut<TableWorld>>,
) {
    let (Some(handles), Some(mut table)) = (handles, table) else {
        return;
    };
    if !state.is_simulating() {
        return;
    }
    let (Some(mallet), Some(puck)) = (
        table.translation(handles.mallet),
        table.translation(handles.puck),
    ) else {
        return;
    };

    let law = MalletLaw::from_config(&control);
    let decision = law.decide(
        &mut tracker,
        mallet,
        puck,
        pointer.position,
        time.elapsed_secs_f64(),
    );
    apply_decision(&mut table, &handles, &decision);
}

/// Write one decision into the world.
pub fn apply_decision(table: &mut TableWorld, handles: &SceneHandles, decision: &ControlDecision) {
    match *decision {
        ControlDecision::Repel { force, repeats } => {
            for _ in 0..repeats {
                table.apply_force(handles.puck, force);
            }
        }
        ControlDecision::Teleport { position, velocity } => {
            table.set_translation(handles.mallet, position);
            if let Some(velocity) = velocity {
                table.set_linvel(handles.mallet, velocity);
            }
        }
        ControlDecision::Coast => {}
    }
}

// ---------------------------------------------------------------------------
