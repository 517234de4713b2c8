//! Windowless frame loop for tests, benchmarks, and the CLI.
//!
//! [`HeadlessLoop`] owns a bevy [`App`] carrying the full simulation stack
//! but no window, renderer, or OS input. Each [`run_frame`] call plays the
//! role of one windowed frame: feed a pointer sample, advance wall time,
//! update. Because the caller controls wall time, runs are reproducible.
//!
//! [`run_frame`]: HeadlessLoop::run_frame

use std::time::Duration;

use bevy::math::Vec2;
use bevy::prelude::*;
use slapshot_control::PointerInput;
use slapshot_core::config::{SimConfig, SlapshotConfig};
use slapshot_core::state::RunState;

use crate::SlapshotSimPlugin;
use crate::stats::FrameStats;

/// A complete table session without a window.
pub struct HeadlessLoop {
    app: App,
}

impl HeadlessLoop {
    /// Session with the stock table.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(SlapshotConfig::default())
    }

    /// Session with a custom table. The scene is built lazily by the first
    /// frame's startup pass.
    #[must_use]
    pub fn from_config(config: SlapshotConfig) -> Self {
        let mut app = App::new();
        app.insert_resource(config.sim);
        app.insert_resource(config.window);
        app.insert_resource(config.control);
        app.insert_resource(config.scene);
        app.add_plugins(SlapshotSimPlugin);
        app.finish();
        app.cleanup();
        Self { app }
    }

    /// Play one frame: publish the pointer sample, advance wall time by
    /// `wall_dt`, and update the app once.
    pub fn run_frame(&mut self, pointer: Option<Vec2>, wall_dt: Duration) {
        self.app
            .world_mut()
            .resource_mut::<PointerInput>()
            .position = pointer;
        self.app
            .world_mut()
            .resource_mut::<Time>()
            .advance_by(wall_dt);
        self.app.update();
    }

    /// Play up to `frames` pointer-less frames, each advancing wall time by
    /// exactly one physics timestep. Stops early once the run state is
    /// [`RunState::Stopped`].
    pub fn run(&mut self, frames: u64) -> FrameStats {
        let wall_dt = Duration::from_secs_f64(self.timestep());
        for _ in 0..frames {
            if self.state().is_stopped() {
                break;
            }
            self.run_frame(None, wall_dt);
        }
        self.stats()
    }

    /// The configured physics timestep in seconds.
    #[must_use]
    pub fn timestep(&self) -> f64 {
        self.app.world().resource::<SimConfig>().physics_dt
    }

    /// Current run state.
    #[must_use]
    pub fn state(&self) -> RunState {
        *self.app.world().resource::<RunState>()
    }

    /// Overwrite the run state.
    pub fn set_state(&mut self, state: RunState) {
        self.app.insert_resource(state);
    }

    /// Counters for the frames played so far.
    #[must_use]
    pub fn stats(&self) -> FrameStats {
        *self.app.world().resource::<FrameStats>()
    }

    /// The underlying app, for inspecting resources.
    #[must_use]
    pub fn app(&self) -> &App {
        &self.app
    }

    /// The underlying app, for injecting resources.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

impl Default for HeadlessLoop {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
