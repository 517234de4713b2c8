//! Frame-loop lifecycle state.
//!
//! One [`RunState`] resource gates every per-frame system: control and
//! physics stepping only run while `Running`, and `Stopped` is terminal.

use bevy::prelude::Resource;

/// Lifecycle of the simulation loop.
///
/// `Running` and `Paused` toggle freely; `Stopped` is entered once (window
/// close or an explicit stop request) and never left.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RunState {
    #[default]
    Running,
    Paused,
    Stopped,
}

impl RunState {
    /// Human-readable label for window titles and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Stopped => "stopped",
        }
    }

    /// True while the control law and physics stepping should run.
    #[must_use]
    pub const fn is_simulating(self) -> bool {
        matches!(self, Self::Running)
    }

    /// True once the loop has been told to exit.
    #[must_use]
    pub const fn is_stopped(self) -> bool {
        matches!(self, Self::Stopped)
    }

    /// Pause-key semantics: flips Running and Paused, leaves Stopped alone.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Running => Self::Paused,
            Self::Paused => Self::Running,
            Self::Stopped => Self::Stopped,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_running() {
        assert_eq!(RunState::default(), RunState::Running);
    }

    #[test]
    fn labels() {
        assert_eq!(RunState::Running.label(), "running");
        assert_eq!(RunState::Paused.label(), "paused");
        assert_eq!(RunState::Stopped.label(), "stopped");
    }

    #[test]
    fn only_running_simulates() {
        assert!(RunState::Running.is_simulating());
        assert!(!RunState::Paused.is_simulating());
        assert!(!RunState::Stopped.is_simulating());
    }

    #[test]
    fn toggle_flips_running_and_paused() {
        assert_eq!(RunState::Running.toggled(), RunState::Paused);
        assert_eq!(RunState::Paused.toggled(), RunState::Running);
    }

    #[test]
    fn stopped_is_terminal_under_toggle() {
        assert_eq!(RunState::Stopped.toggled(), RunState::Stopped);
        assert!(RunState::Stopped.is_stopped());
        assert!(!RunState::Running.is_stopped());
    }
}
