//! Pointer-driven mallet control.
//!
//! Turns the shared [`PointerInput`] resource into per-frame
//! [`ControlDecision`]s and applies them to the table world: teleporting
//! the mallet after the pointer, throwing it with the pointer's velocity,
//! and shoving the puck away when either the mallet or the pointer crowds
//! it.
//!
//! # Example
//!
//! ```no_run
//! use bevy::prelude::*;
//! use slapshot_control::SlapshotControlPlugin;
//! use slapshot_core::SlapshotCorePlugin;
//! use slapshot_physics::SlapshotPhysicsPlugin;
//!
//! App::new()
//!     .add_plugins((
//!         SlapshotCorePlugin,
//!         SlapshotPhysicsPlugin,
//!         SlapshotControlPlugin,
//!     ))
//!     .run();
//! ```

use bevy::prelude::*;
use slapshot_core::SlapshotSet;

pub mod law;
pub mod pointer;
pub mod systems;

pub use law::{ControlDecision, MalletLaw, Region};
pub use pointer::{PointerInput, PointerTracker};

/// Runs the mallet law every frame in
/// [`SlapshotSet::Control`](slapshot_core::SlapshotSet::Control).
///
/// Requires [`SlapshotCorePlugin`](slapshot_core::SlapshotCorePlugin) and
/// [`SlapshotPhysicsPlugin`](slapshot_physics::SlapshotPhysicsPlugin).
pub struct SlapshotControlPlugin;

impl Plugin for SlapshotControlPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerInput>();
        app.init_resource::<PointerTracker>();
        app.add_systems(
            Update,
            systems::mallet_control_system.in_set(SlapshotSet::Control),
        );
    }
}

pub mod prelude {
    pub use crate::SlapshotControlPlugin;
    pub use crate::law::{ControlDecision, MalletLaw, Region};
    pub use crate::pointer::{PointerInput, PointerTracker};
    pub use crate::systems::{apply_decision, mallet_control_system};
}
