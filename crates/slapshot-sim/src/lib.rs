//! The assembled table simulation, minus any window.
//!
//! [`SlapshotSimPlugin`] bundles the core scheduling, the physics world,
//! and the mallet control law into one plugin, and adds per-run frame
//! counters on top. Windowed frontends add their own rendering plugin next
//! to it; tests and the CLI drive the same stack through [`HeadlessLoop`].
//!
//! # Example
//!
//! ```no_run
//! use bevy::prelude::*;
//! use slapshot_sim::SlapshotSimPlugin;
//!
//! App::new().add_plugins(SlapshotSimPlugin).run();
//! ```

use bevy::prelude::*;
use slapshot_control::SlapshotControlPlugin;
use slapshot_core::{SlapshotCorePlugin, SlapshotSet};
use slapshot_physics::SlapshotPhysicsPlugin;

pub mod headless;
pub mod stats;

pub use headless::HeadlessLoop;
pub use stats::FrameStats;

/// One-stop plugin for the complete simulation stack.
///
/// Adds [`SlapshotCorePlugin`], [`SlapshotPhysicsPlugin`], and
/// [`SlapshotControlPlugin`], so none of them may be added separately.
pub struct SlapshotSimPlugin;

impl Plugin for SlapshotSimPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            SlapshotCorePlugin,
            SlapshotPhysicsPlugin,
            SlapshotControlPlugin,
        ));
        app.init_resource::<FrameStats>();
        app.add_systems(Update, stats::frame_stats_system.in_set(SlapshotSet::Sync));
    }
}

pub mod prelude {
    pub use crate::SlapshotSimPlugin;
    pub use crate::headless::HeadlessLoop;
    pub use crate::stats::{FrameStats, frame_stats_system};
    pub use slapshot_control::prelude::*;
    pub use slapshot_core::prelude::*;
    pub use slapshot_physics::prelude::*;
}
