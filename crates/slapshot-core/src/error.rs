//! Error taxonomy for the slapshot crates.
//!
//! Library code returns these through `Result`; binaries print them and exit
//! nonzero. Scene misuse (double population, missing named bodies) gets a
//! typed error instead of the out-of-range access a raw index lookup would
//! produce.

use thiserror::Error;

// ---------------------------------------------------------------------------
// SlapshotError
// ---------------------------------------------------------------------------

/// Top-level error aggregating every failure mode in the workspace.
#[derive(Debug, Error)]
pub enum SlapshotError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("scene error: {0}")]
    Scene(#[from] SceneError),
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Configuration loading, parsing, and validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("physics timestep must be positive and finite, got {0}")]
    InvalidTimestep(f64),

    #[error("max steps per frame must be at least 1")]
    InvalidMaxSteps,

    #[error("window size must be nonzero, got {width}x{height}")]
    InvalidWindowSize { width: u32, height: u32 },

    #[error("pixels per unit must be positive and finite, got {0}")]
    InvalidScale(f32),

    #[error("control region min exceeds max on at least one axis")]
    InvalidRegion,

    #[error("force repeats must be at least 1")]
    InvalidForceRepeats,

    #[error("body '{0}' has a fixture with a non-positive dimension")]
    InvalidFixture(String),

    #[error("dynamic body '{0}' must have positive density")]
    InvalidDensity(String),

    #[error("scene declares body name '{0}' more than once")]
    DuplicateBodyName(String),

    #[error("scene is missing required body '{0}'")]
    MissingSceneBody(&'static str),
}

// ---------------------------------------------------------------------------
// SceneError
// ---------------------------------------------------------------------------

/// Scene population failures against a live physics world.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// Setup ran against a world that already contains bodies.
    #[error("scene setup invoked on a world that already contains bodies")]
    AlreadyPopulated,

    /// A body the scene is contracted to provide was not found by name.
    #[error("scene has no body named '{0}'")]
    MissingBody(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
