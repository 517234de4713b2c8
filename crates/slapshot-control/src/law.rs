//! The mallet steering law.
//!
//! Each frame the law looks at the mallet, the puck, and the pointer, and
//! produces one [`ControlDecision`]. The cascade mirrors the table rules:
//!
//! 1. While the mallet crowds the puck, shove the puck away instead of
//!    chasing the pointer.
//! 2. Otherwise, a pointer inside the steering region either teleports the
//!    mallet to it (pointer clear of the puck) or shoves the puck (pointer
//!    on top of it).
//! 3. Anything else leaves the simulation alone.

use bevy::math::Vec2;
use slapshot_core::config::ControlConfig;

use crate::pointer::PointerTracker;

/// Axis-aligned region of the table the pointer may steer from, bounds
/// inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    min: Vec2,
    max: Vec2,
}

impl Region {
    #[must_use]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// What the mallet should do this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlDecision {
    /// Accumulate `force` onto the puck `repeats` times. The mallet itself
    /// is left to the solver.
    Repel { force: Vec2, repeats: u32 },
    /// Teleport the mallet to `position`; overwrite its velocity when the
    /// pointer history yields one.
    Teleport {
        position: Vec2,
        velocity: Option<Vec2>,
    },
    /// Leave everything to the solver.
    Coast,
}

/// Pure decision logic built from [`ControlConfig`] each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MalletLaw {
    region: Region,
    proximity: f32,
    pointer_bias: Vec2,
    velocity_gain: f32,
    force_gain: f32,
    force_repeats: u32,
}

impl MalletLaw {
    #[must_use]
    pub fn from_config(config: &ControlConfig) -> Self {
        Self {
            region: Region::new(config.region_min(), config.region_max()),
            proximity: config.proximity,
            pointer_bias: config.pointer_bias(),
            velocity_gain: config.velocity_gain,
            force_gain: config.force_gain,
            force_repeats: config.force_repeats,
        }
    }

    /// Run the cascade for one frame.
    ///
    /// `tracker` is only fed pointer samples on frames that reach the
    /// steering branch, so contact frames and off-region frames leave the
    /// velocity history untouched.
    pub fn decide(
        &self,
        tracker: &mut PointerTracker,
        mallet_centre: Vec2,
        puck_centre: Vec2,
        pointer: Option<Vec2>,
        now_secs: f64,
    ) -> ControlDecision {
        if mallet_centre.distance(puck_centre) <= self.proximity {
            return self.repel(mallet_centre, puck_centre);
        }

        let Some(pointer) = pointer else {
            return ControlDecision::Coast;
        };
        if !self.region.contains(pointer) {
            return ControlDecision::Coast;
        }

        let velocity = tracker
            .record(pointer, now_secs)
            .map(|raw| raw * self.velocity_gain);
        if pointer.distance(puck_centre) <= self.proximity {
            return self.repel(mallet_centre, puck_centre);
        }

        ControlDecision::Teleport {
            position: pointer - self.pointer_bias,
            velocity,
        }
    }

    fn repel(&self, mallet_centre: Vec2, puck_centre: Vec2) -> ControlDecision {
        ControlDecision::Repel {
            force: (puck_centre - mallet_centre) * self.force_gain,
            repeats: self.force_repeats,
        }
    }
}

impl Default for MalletLaw {
    fn default() -> Self {
        Self::from_config(&ControlConfig::default())
    }
}

// ---------------------------------------------------------------------------
