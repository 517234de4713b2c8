//! Pointer state shared between the window layer and the control law.

use bevy::math::Vec2;
use bevy::prelude::Resource;

/// Latest pointer position in table coordinates, or `None` while the
/// pointer is off the window. Written by whichever input frontend is
/// active, windowed or headless.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub position: Option<Vec2>,
}

impl PointerInput {
    #[must_use]
    pub const fn new(position: Option<Vec2>) -> Self {
        Self { position }
    }
}

/// Cross-frame pointer history used to derive the mallet throw velocity.
///
/// Samples are recorded only while the pointer steers the mallet. A sample
/// recorded after a gap measures displacement over the whole gap.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerTracker {
    last: Option<(Vec2, f64)>,
}

impl PointerTracker {
    /// Record a sample taken at `at_secs`, returning the raw pointer
    /// velocity (displacement over elapsed seconds) since the previous
    /// recorded sample.
    ///
    /// Returns `None` for the first sample and whenever no time has passed
    /// between samples, so callers never divide by zero.
    pub fn record(&mut self, position: Vec2, at_secs: f64) -> Option<Vec2> {
        let velocity = match self.last {
            #[allow(clippy::cast_possible_truncation)]
            Some((previous, then)) if at_secs > then => {
                Some((position - previous) / (at_secs - then) as f32)
            }
            _ => None,
        };
        self.last = Some((position, at_secs));
        velocity
    }

    /// Forget the previous sample.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Position of the most recently recorded sample.
    #[must_use]
    pub fn last_position(&self) -> Option<Vec2> {
        self.last.map(|(position, _)| position)
    }
}

// ---------------------------------------------------------------------------
