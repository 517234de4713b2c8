//! The windowed table frontend.

use bevy::prelude::*;
use bevy::window::WindowCloseRequested;
use slapshot_control::PointerInput;
use slapshot_core::SlapshotSet;

use crate::input;
use crate::scene2d;

/// Draws the table and bridges window input to the simulation.
///
/// Adds:
/// - a 2D camera over a white canvas with the painted felt and markings
/// - one mesh per scene body, synced from the physics world every frame
/// - cursor capture into [`PointerInput`]
/// - Space to pause, Escape or a window close to stop, and app exit once
///   stopped
///
/// Expects `SlapshotSimPlugin` (or the core, physics, and control plugins
/// individually) to be present.
pub struct SlapshotVizPlugin;

impl Plugin for SlapshotVizPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::WHITE));
        app.init_resource::<PointerInput>();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.add_message::<WindowCloseRequested>();
        app.add_systems(
            Startup,
            (
                scene2d::spawn_camera_system,
                scene2d::spawn_artwork_system,
                scene2d::spawn_bodies_system,
            ),
        );
        app.add_systems(
            Update,
            (
                input::pointer_capture_system,
                input::keyboard_system,
                input::close_requested_system,
            )
                .in_set(SlapshotSet::Input),
        );
        app.add_systems(
            Update,
            (scene2d::sync_bodies_system, input::exit_on_stop_system)
                .in_set(SlapshotSet::Sync),
        );
    }
}

// ---------------------------------------------------------------------------
