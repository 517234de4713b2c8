//! Per-run frame and step counters.

use std::fmt;
use std::time::Duration;

use bevy::prelude::*;
use slapshot_core::time::{SimTime, StepClock};

/// Counters describing one simulation run.
///
/// `frames` counts loop iterations, including paused ones; the remaining
/// fields mirror the step clock at the end of the latest frame.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub frames: u64,
    pub steps: u64,
    pub sim_time: SimTime,
    pub dropped: Duration,
}

impl fmt::Display for FrameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} frames, {} steps, {} simulated, {:.3}s dropped",
            self.frames,
            self.steps,
            self.sim_time,
            self.dropped.as_secs_f64()
        )
    }
}

/// Mirror the step clock into [`FrameStats`] at the end of each frame.
///
/// Runs in [`SlapshotSet::Sync`](slapshot_core::SlapshotSet::Sync). Without
/// a step clock there is no table to report on, so the counters stay at
/// zero.
#[allow(clippy::needless_pass_by_value)]
pub fn frame_stats_system(clock: Option<Res<StepClock>>, stats: Option<ResMut<FrameStats>>) {
    let (Some(clock), Some(mut stats)) = (clock, stats) else {
        return;
    };
    stats.frames += 1;
    stats.steps = clock.total_steps();
    stats.sim_time = clock.time();
    stats.dropped = clock.dropped();
}

// ---------------------------------------------------------------------------
