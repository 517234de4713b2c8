//! Windowed visualization for the table simulation.
//!
//! Draws the felt, markings, and bodies with 2D meshes, feeds the cursor to
//! the control law, and maps Space/Escape/window-close onto the run state.
//!
//! # Example
//!
//! ```no_run
//! use bevy::prelude::*;
//! use slapshot_sim::SlapshotSimPlugin;
//! use slapshot_viz::SlapshotVizPlugin;
//!
//! App::new()
//!     .add_plugins(DefaultPlugins)
//!     .add_plugins(SlapshotSimPlugin)
//!     .add_plugins(SlapshotVizPlugin)
//!     .run();
//! ```

pub mod input;
pub mod plugin;
pub mod scene2d;

pub use plugin::SlapshotVizPlugin;
pub use scene2d::{TableBody, table_to_world, world_to_table};

pub mod prelude {
    pub use crate::input::{
        close_requested_system, exit_on_stop_system, keyboard_system, pointer_capture_system,
    };
    pub use crate::plugin::SlapshotVizPlugin;
    pub use crate::scene2d::{
        TableBody, spawn_artwork_system, spawn_bodies_system, spawn_camera_system,
        sync_bodies_system, table_to_world, world_to_table,
    };
}
