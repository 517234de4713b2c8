//! Startup and per-frame systems driving the table world.

use bevy::prelude::*;
use slapshot_core::config::{SceneConfig, SimConfig};
use slapshot_core::state::RunState;
use slapshot_core::time::StepClock;

use crate::scene;
use crate::world::TableWorld;

/// Build the physics world from configuration and populate the scene.
///
/// On failure the error is logged and the world resources are withheld;
/// every frame system that needs them then no-ops.
pub fn setup_table_system(
    mut commands: Commands,
    sim: Res<SimConfig>,
    scene_config: Res<SceneConfig>,
) {
    let mut world = TableWorld::from_config(&sim);
    match scene::populate(&mut world, &scene_config) {
        Ok(handles) => {
            log::info!(
                "table ready: {} bodies at {:.0} Hz",
                world.body_count(),
                sim.physics_hz()
            );
            let clock = StepClock::new(sim.physics_dt).with_max_steps(sim.max_steps_per_frame);
            commands.insert_resource(clock);
            commands.insert_resource(handles);
            commands.insert_resource(world);
        }
        Err(err) => {
            log::error!("table setup failed: {err}");
        }
    }
}

/// Drain whole fixed steps out of the frame delta and advance the world.
///
/// Runs in [`SlapshotSet::Simulate`](slapshot_core::SlapshotSet::Simulate).
/// While the run state is not simulating, the clock does not accumulate, so
/// resuming never replays the paused wall time. User forces applied earlier
/// in the frame are spent by the steps and cleared; on frames too short for
/// a single step they stay pending.
#[allow(clippy::needless_pass_by_value)]
pub fn step_table_system(
    state: Res<RunState>,
    time: Res<Time>,
    clock: Option<ResMut<StepClock>>,
    table: Option<ResMut<TableWorld>>,
) {
    let (Some(mut clock), Some(mut table)) = (clock, table) else {
        return;
    };
    if !state.is_simulating() {
        return;
    }

    clock.tick(time.delta());
    let mut stepped = false;
    while clock.should_step() {
        table.step();
        clock.advance();
        stepped = true;
    }
    if stepped {
        table.reset_forces();
    }

    let dropped = clock.finish_frame();
    if !dropped.is_zero() {
        log::warn!("simulation fell behind, dropped {}s", dropped.as_secs_f64());
    }
}

// ---------------------------------------------------------------------------
