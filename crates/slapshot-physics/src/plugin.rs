//! Bevy plugin wiring the table world into the frame loop.
//!
//! # Example
//!
//! ```no_run
//! use bevy::prelude::*;
//! use slapshot_core::SlapshotCorePlugin;
//! use slapshot_physics::SlapshotPhysicsPlugin;
//!
//! App::new()
//!     .add_plugins((SlapshotCorePlugin, SlapshotPhysicsPlugin))
//!     .run();
//! ```

use bevy::prelude::*;
use slapshot_core::SlapshotSet;

use crate::systems;

/// Builds the table world at startup and drains fixed steps every frame.
///
/// Requires [`SlapshotCorePlugin`](slapshot_core::SlapshotCorePlugin) for
/// the system sets and configuration resources.
pub struct SlapshotPhysicsPlugin;

impl Plugin for SlapshotPhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, systems::setup_table_system);
        app.add_systems(
            Update,
            systems::step_table_system.in_set(SlapshotSet::Simulate),
        );
    }
}

// ---------------------------------------------------------------------------
