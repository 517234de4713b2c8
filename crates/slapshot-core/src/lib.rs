// slapshot-core: Config, errors, lifecycle state, and the fixed-step clock for the slapshot table simulation.

pub mod config;
pub mod error;
pub mod state;
pub mod time;

use bevy::prelude::*;

// ---------------------------------------------------------------------------
// SlapshotSet
// ---------------------------------------------------------------------------

/// System sets executed in order each frame on the `Update` schedule.
///
/// Input sampling always runs; control and stepping observe
/// [`RunState`](state::RunState) and skip themselves while not running;
/// sync mirrors the physics state into whatever consumes it (renderer
/// meshes, frame stats).
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlapshotSet {
    /// Sample pointer and keyboard state.
    Input,
    /// Decide and apply the mallet control law.
    Control,
    /// Drain the fixed-step accumulator into physics steps.
    Simulate,
    /// Mirror body transforms out of the physics world.
    Sync,
}

// ---------------------------------------------------------------------------
// SlapshotCorePlugin
// ---------------------------------------------------------------------------

/// Foundation plugin every other slapshot plugin assumes.
///
/// Configures the [`SlapshotSet`] ordering and installs default resources:
/// the run state, the four config sections, and a `Time` clock. Resources
/// already inserted (or managed by bevy's own plugins) are left untouched.
pub struct SlapshotCorePlugin;

impl Plugin for SlapshotCorePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                SlapshotSet::Input,
                SlapshotSet::Control,
                SlapshotSet::Simulate,
                SlapshotSet::Sync,
            )
                .chain(),
        );
        app.init_resource::<Time>();
        app.init_resource::<state::RunState>();
        app.init_resource::<config::SimConfig>();
        app.init_resource::<config::WindowConfig>();
        app.init_resource::<config::ControlConfig>();
        app.init_resource::<config::SceneConfig>();
    }
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        SlapshotCorePlugin, SlapshotSet,
        config::{
            BodyConfig, ControlConfig, Fixture, MassKind, SceneConfig, SimConfig, SlapshotConfig,
            WindowConfig,
        },
        error::{ConfigError, SceneError, SlapshotError},
        state::RunState,
        time::{SimTime, StepClock},
    };
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
