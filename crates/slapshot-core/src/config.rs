//! Configuration for the table simulation.
//!
//! Every tunable loads from TOML with serde defaults equal to the authored
//! air-hockey scene, so an empty config file reproduces the stock table
//! exactly. `validate()` rejects values the simulation cannot run with.

use std::path::Path;

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

const fn default_physics_dt() -> f64 {
    1.0 / 120.0
}

const fn default_max_steps_per_frame() -> u32 {
    8
}

const fn default_gravity() -> [f32; 2] {
    [0.0, 0.0]
}

const fn default_pixels_per_unit() -> f32 {
    1.0
}

const fn default_window_width() -> u32 {
    1300
}

const fn default_window_height() -> u32 {
    700
}

fn default_window_title() -> String {
    "Air Hockey 2K16".to_string()
}

const fn default_resizable() -> bool {
    false
}

const fn default_region_min() -> [f32; 2] {
    [180.0, 150.0]
}

const fn default_region_max() -> [f32; 2] {
    [1230.0, 630.0]
}

const fn default_proximity() -> f32 {
    60.0
}

const fn default_pointer_bias() -> [f32; 2] {
    [55.0, 40.0]
}

const fn default_velocity_gain() -> f32 {
    1000.0
}

const fn default_force_gain() -> f32 {
    1_000_000.0
}

const fn default_force_repeats() -> u32 {
    10
}

const fn default_velocity() -> [f32; 2] {
    [0.0, 0.0]
}

const fn default_density() -> f32 {
    1.0
}

const fn default_friction() -> f32 {
    0.2
}

const fn default_restitution() -> f32 {
    0.0
}

const fn default_damping() -> f32 {
    0.0
}

const fn default_can_sleep() -> bool {
    false
}

const fn default_ccd() -> bool {
    true
}

const fn default_color() -> [f32; 3] {
    [0.5, 0.5, 0.5]
}

// ---------------------------------------------------------------------------
// SimConfig
// ---------------------------------------------------------------------------

/// Physics stepping parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bevy::prelude::Resource)]
pub struct SimConfig {
    /// Fixed physics timestep in seconds.
    #[serde(default = "default_physics_dt")]
    pub physics_dt: f64,

    /// Cap on fixed steps drained per rendered frame; excess time is dropped.
    #[serde(default = "default_max_steps_per_frame")]
    pub max_steps_per_frame: u32,

    /// World gravity. The table plays in the screen plane, so zero.
    #[serde(default = "default_gravity")]
    pub gravity: [f32; 2],

    /// Simulation-unit to screen-pixel scale factor.
    #[serde(default = "default_pixels_per_unit")]
    pub pixels_per_unit: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            physics_dt: default_physics_dt(),
            max_steps_per_frame: default_max_steps_per_frame(),
            gravity: default_gravity(),
            pixels_per_unit: default_pixels_per_unit(),
        }
    }
}

impl SimConfig {
    /// Physics update rate in Hz.
    #[must_use]
    pub fn physics_hz(&self) -> f64 {
        1.0 / self.physics_dt
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.physics_dt.is_finite() || self.physics_dt <= 0.0 {
            return Err(ConfigError::InvalidTimestep(self.physics_dt));
        }
        if self.max_steps_per_frame == 0 {
            return Err(ConfigError::InvalidMaxSteps);
        }
        if !self.pixels_per_unit.is_finite() || self.pixels_per_unit <= 0.0 {
            return Err(ConfigError::InvalidScale(self.pixels_per_unit));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// WindowConfig
// ---------------------------------------------------------------------------

/// Window chrome for the windowed demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bevy::prelude::Resource)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: u32,

    #[serde(default = "default_window_height")]
    pub height: u32,

    #[serde(default = "default_window_title")]
    pub title: String,

    #[serde(default = "default_resizable")]
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
            title: default_window_title(),
            resizable: default_resizable(),
        }
    }
}

impl WindowConfig {
    /// Canvas size as a float vector, for coordinate conversion.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidWindowSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ControlConfig
// ---------------------------------------------------------------------------

/// Constants of the pointer-driven mallet control law.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bevy::prelude::Resource)]
pub struct ControlConfig {
    /// Play-field region (screen coordinates) inside which the pointer
    /// drives the mallet.
    #[serde(default = "default_region_min")]
    pub region_min: [f32; 2],

    #[serde(default = "default_region_max")]
    pub region_max: [f32; 2],

    /// Distance below which the repulsion branch takes over.
    #[serde(default = "default_proximity")]
    pub proximity: f32,

    /// Hand-authored offset subtracted from the pointer when teleporting.
    #[serde(default = "default_pointer_bias")]
    pub pointer_bias: [f32; 2],

    /// Multiplier on pointer displacement over elapsed time.
    #[serde(default = "default_velocity_gain")]
    pub velocity_gain: f32,

    /// Multiplier on the mallet-to-puck vector in the repulsion branch.
    #[serde(default = "default_force_gain")]
    pub force_gain: f32,

    /// How many times the repulsive force is applied within one frame.
    #[serde(default = "default_force_repeats")]
    pub force_repeats: u32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            region_min: default_region_min(),
            region_max: default_region_max(),
            proximity: default_proximity(),
            pointer_bias: default_pointer_bias(),
            velocity_gain: default_velocity_gain(),
            force_gain: default_force_gain(),
            force_repeats: default_force_repeats(),
        }
    }
}

impl ControlConfig {
    #[must_use]
    pub const fn region_min(&self) -> Vec2 {
        Vec2::new(self.region_min[0], self.region_min[1])
    }

    #[must_use]
    pub const fn region_max(&self) -> Vec2 {
        Vec2::new(self.region_max[0], self.region_max[1])
    }

    #[must_use]
    pub const fn pointer_bias(&self) -> Vec2 {
        Vec2::new(self.pointer_bias[0], self.pointer_bias[1])
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.region_min[0] > self.region_max[0] || self.region_min[1] > self.region_max[1] {
            return Err(ConfigError::InvalidRegion);
        }
        if self.force_repeats == 0 {
            return Err(ConfigError::InvalidForceRepeats);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Scene description
// ---------------------------------------------------------------------------

/// Collider shape attached to a body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fixture {
    Circle { radius: f32 },
    Rect { width: f32, height: f32 },
}

impl Fixture {
    /// True when every dimension is positive and finite.
    #[must_use]
    pub fn is_wellformed(&self) -> bool {
        match *self {
            Self::Circle { radius } => radius.is_finite() && radius > 0.0,
            Self::Rect { width, height } => {
                width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0
            }
        }
    }
}

/// Dynamic bodies respond to forces; infinite-mass bodies never move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassKind {
    #[default]
    Infinite,
    Dynamic,
}

impl MassKind {
    #[must_use]
    pub const fn is_dynamic(self) -> bool {
        matches!(self, Self::Dynamic)
    }
}

/// One body of the scene: shape, material, and initial conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub name: String,

    pub fixture: Fixture,

    /// Initial position of the body center, screen coordinates.
    pub position: [f32; 2],

    #[serde(default = "default_velocity")]
    pub velocity: [f32; 2],

    #[serde(default)]
    pub mass: MassKind,

    #[serde(default = "default_density")]
    pub density: f32,

    #[serde(default = "default_friction")]
    pub friction: f32,

    #[serde(default = "default_restitution")]
    pub restitution: f32,

    #[serde(default = "default_damping")]
    pub linear_damping: f32,

    #[serde(default = "default_damping")]
    pub angular_damping: f32,

    /// Whether the engine may stop integrating this body at rest.
    #[serde(default = "default_can_sleep")]
    pub can_sleep: bool,

    /// Continuous collision detection. The authored launch speeds cross a
    /// wall's thickness in well under one timestep.
    #[serde(default = "default_ccd")]
    pub ccd: bool,

    /// Linear sRGB draw color.
    #[serde(default = "default_color")]
    pub color: [f32; 3],
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            fixture: Fixture::Circle { radius: 1.0 },
            position: [0.0, 0.0],
            velocity: default_velocity(),
            mass: MassKind::default(),
            density: default_density(),
            friction: default_friction(),
            restitution: default_restitution(),
            linear_damping: default_damping(),
            angular_damping: default_damping(),
            can_sleep: default_can_sleep(),
            ccd: default_ccd(),
            color: default_color(),
        }
    }
}

impl BodyConfig {
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        Vec2::new(self.position[0], self.position[1])
    }

    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        Vec2::new(self.velocity[0], self.velocity[1])
    }
}

fn wall(name: &str, width: f32, height: f32, x: f32, y: f32) -> BodyConfig {
    BodyConfig {
        name: name.to_string(),
        fixture: Fixture::Rect { width, height },
        position: [x, y],
        color: [0.25, 0.25, 0.25],
        ..BodyConfig::default()
    }
}

fn default_bodies() -> Vec<BodyConfig> {
    vec![
        wall("wall_top", 1125.0, 22.5, 652.5, 80.0),
        wall("wall_bottom", 1125.0, 22.5, 652.5, 620.0),
        wall("wall_left", 22.5, 517.5, 101.25, 350.0),
        wall("wall_right", 22.5, 517.5, 1203.75, 350.0),
        BodyConfig {
            name: SceneConfig::MALLET.to_string(),
            fixture: Fixture::Circle { radius: 38.25 },
            position: [180.25, 350.0],
            velocity: [30_000.0, 40_000.0],
            mass: MassKind::Dynamic,
            density: 200.0,
            friction: 1.0,
            restitution: 1.0,
            color: [0.5, 0.5, 0.5],
            ..BodyConfig::default()
        },
        BodyConfig {
            name: SceneConfig::PUCK.to_string(),
            fixture: Fixture::Circle { radius: 20.0 },
            position: [1005.0, 350.0],
            velocity: [-450.0, 1450.0],
            mass: MassKind::Dynamic,
            density: 1.0,
            friction: 1.0,
            restitution: 1.0,
            color: [1.0, 0.0, 0.0],
            ..BodyConfig::default()
        },
    ]
}

/// The hand-authored body list, applied to the physics world in order.
///
/// Insertion order is a contract: the walls come first, then the mallet,
/// then the puck, so index-based access stays stable across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bevy::prelude::Resource)]
pub struct SceneConfig {
    #[serde(default = "default_bodies")]
    pub bodies: Vec<BodyConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            bodies: default_bodies(),
        }
    }
}

impl SceneConfig {
    /// Name of the pointer-controlled body.
    pub const MALLET: &'static str = "mallet";
    /// Name of the body the mallet plays against.
    pub const PUCK: &'static str = "puck";

    /// Look up a body by name.
    #[must_use]
    pub fn body(&self, name: &str) -> Option<&BodyConfig> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Index of a body in insertion order.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.name == name)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, body) in self.bodies.iter().enumerate() {
            if !body.fixture.is_wellformed() {
                return Err(ConfigError::InvalidFixture(body.name.clone()));
            }
            if body.mass.is_dynamic() && !(body.density.is_finite() && body.density > 0.0) {
                return Err(ConfigError::InvalidDensity(body.name.clone()));
            }
            if self.bodies[..i].iter().any(|b| b.name == body.name) {
                return Err(ConfigError::DuplicateBodyName(body.name.clone()));
            }
        }
        if self.body(Self::MALLET).is_none() {
            return Err(ConfigError::MissingSceneBody(Self::MALLET));
        }
        if self.body(Self::PUCK).is_none() {
            return Err(ConfigError::MissingSceneBody(Self::PUCK));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SlapshotConfig
// ---------------------------------------------------------------------------

/// Root config: all sections, each falling back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlapshotConfig {
    #[serde(default)]
    pub sim: SimConfig,

    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub control: ControlConfig,

    #[serde(default)]
    pub scene: SceneConfig,
}

impl SlapshotConfig {
    /// Load from a TOML file and validate.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sim.validate()?;
        self.window.validate()?;
        self.control.validate()?;
        self.scene.validate()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Defaults ----

    #[test]
    fn default_config_is_valid() {
        let config = SlapshotConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_sim_values() {
        let sim = SimConfig::default();
        assert!((sim.physics_dt - 1.0 / 120.0).abs() < f64::EPSILON);
        assert_eq!(sim.max_steps_per_frame, 8);
        assert_eq!(sim.gravity, [0.0, 0.0]);
        assert!((sim.pixels_per_unit - 1.0).abs() < f32::EPSILON);
        assert!((sim.physics_hz() - 120.0).abs() < 1e-9);
    }

    #[test]
    fn default_window_values() {
        let window = WindowConfig::default();
        assert_eq!(window.width, 1300);
        assert_eq!(window.height, 700);
        assert_eq!(window.title, "Air Hockey 2K16");
        assert!(!window.resizable);
        assert_eq!(window.size(), Vec2::new(1300.0, 700.0));
    }

    #[test]
    fn default_control_values() {
        let control = ControlConfig::default();
        assert_eq!(control.region_min(), Vec2::new(180.0, 150.0));
        assert_eq!(control.region_max(), Vec2::new(1230.0, 630.0));
        assert!((control.proximity - 60.0).abs() < f32::EPSILON);
        assert_eq!(control.pointer_bias(), Vec2::new(55.0, 40.0));
        assert!((control.velocity_gain - 1000.0).abs() < f32::EPSILON);
        assert!((control.force_gain - 1.0e6).abs() < f32::EPSILON);
        assert_eq!(control.force_repeats, 10);
    }

    #[test]
    fn default_scene_matches_authored_table() {
        let scene = SceneConfig::default();
        assert_eq!(scene.bodies.len(), 6);

        let names: Vec<&str> = scene.bodies.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "wall_top",
                "wall_bottom",
                "wall_left",
                "wall_right",
                "mallet",
                "puck"
            ]
        );

        for body in &scene.bodies[..4] {
            assert_eq!(body.mass, MassKind::Infinite);
            assert!(matches!(body.fixture, Fixture::Rect { .. }));
        }

        let mallet = scene.body(SceneConfig::MALLET).unwrap();
        assert_eq!(mallet.position(), Vec2::new(180.25, 350.0));
        assert_eq!(mallet.velocity(), Vec2::new(30_000.0, 40_000.0));
        assert_eq!(mallet.fixture, Fixture::Circle { radius: 38.25 });
        assert!((mallet.density - 200.0).abs() < f32::EPSILON);
        assert!(!mallet.can_sleep);

        let puck = scene.body(SceneConfig::PUCK).unwrap();
        assert_eq!(puck.position(), Vec2::new(1005.0, 350.0));
        assert_eq!(puck.velocity(), Vec2::new(-450.0, 1450.0));
        assert_eq!(puck.fixture, Fixture::Circle { radius: 20.0 });

        assert_eq!(scene.index_of(SceneConfig::MALLET), Some(4));
        assert_eq!(scene.index_of(SceneConfig::PUCK), Some(5));
    }

    // ---- TOML parsing ----

    #[test]
    fn empty_toml_yields_defaults() {
        let config: SlapshotConfig = toml::from_str("").unwrap();
        assert_eq!(config, SlapshotConfig::default());
    }

    #[test]
    fn partial_toml_overrides_one_section() {
        let config: SlapshotConfig = toml::from_str(
            r#"
            [sim]
            physics_dt = 0.005
            "#,
        )
        .unwrap();
        assert!((config.sim.physics_dt - 0.005).abs() < f64::EPSILON);
        // Untouched fields and sections keep their defaults.
        assert_eq!(config.sim.max_steps_per_frame, 8);
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(config.scene.bodies.len(), 6);
    }

    #[test]
    fn scene_toml_parses_fixtures() {
        let scene: SceneConfig = toml::from_str(
            r#"
            [[bodies]]
            name = "mallet"
            fixture = { circle = { radius = 38.25 } }
            position = [180.25, 350.0]
            mass = "dynamic"
            density = 200.0

            [[bodies]]
            name = "puck"
            fixture = { circle = { radius = 20.0 } }
            position = [1005.0, 350.0]

            [[bodies]]
            name = "wall_top"
            fixture = { rect = { width = 1125.0, height = 22.5 } }
            position = [652.5, 80.0]
            "#,
        )
        .unwrap();
        assert_eq!(scene.bodies.len(), 3);
        assert_eq!(scene.bodies[0].fixture, Fixture::Circle { radius: 38.25 });
        assert_eq!(scene.bodies[0].mass, MassKind::Dynamic);
        // Unspecified fields fall back per body.
        assert_eq!(scene.bodies[1].mass, MassKind::Infinite);
        assert_eq!(scene.bodies[1].velocity(), Vec2::ZERO);
        assert!(scene.bodies[1].ccd);
        assert_eq!(
            scene.bodies[2].fixture,
            Fixture::Rect {
                width: 1125.0,
                height: 22.5
            }
        );
    }

    #[test]
    fn window_toml_overrides() {
        let window: WindowConfig = toml::from_str(
            r#"
            width = 800
            height = 600
            title = "test rink"
            resizable = true
            "#,
        )
        .unwrap();
        assert_eq!(window.width, 800);
        assert_eq!(window.height, 600);
        assert_eq!(window.title, "test rink");
        assert!(window.resizable);
    }

    // ---- Validation ----

    #[test]
    fn validate_rejects_bad_timestep() {
        let sim = SimConfig {
            physics_dt: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            sim.validate(),
            Err(ConfigError::InvalidTimestep(_))
        ));

        let sim = SimConfig {
            physics_dt: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            sim.validate(),
            Err(ConfigError::InvalidTimestep(_))
        ));
    }

    #[test]
    fn validate_rejects_zero_max_steps() {
        let sim = SimConfig {
            max_steps_per_frame: 0,
            ..Default::default()
        };
        assert!(matches!(sim.validate(), Err(ConfigError::InvalidMaxSteps)));
    }

    #[test]
    fn validate_rejects_zero_window() {
        let window = WindowConfig {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(
            window.validate(),
            Err(ConfigError::InvalidWindowSize { width: 0, .. })
        ));
    }

    #[test]
    fn validate_rejects_inverted_region() {
        let control = ControlConfig {
            region_min: [1300.0, 150.0],
            ..Default::default()
        };
        assert!(matches!(
            control.validate(),
            Err(ConfigError::InvalidRegion)
        ));
    }

    #[test]
    fn validate_rejects_zero_force_repeats() {
        let control = ControlConfig {
            force_repeats: 0,
            ..Default::default()
        };
        assert!(matches!(
            control.validate(),
            Err(ConfigError::InvalidForceRepeats)
        ));
    }

    #[test]
    fn validate_rejects_degenerate_fixture() {
        let mut scene = SceneConfig::default();
        scene.bodies[5].fixture = Fixture::Circle { radius: 0.0 };
        assert!(matches!(
            scene.validate(),
            Err(ConfigError::InvalidFixture(name)) if name == "puck"
        ));
    }

    #[test]
    fn validate_rejects_nonpositive_density_on_dynamic() {
        let mut scene = SceneConfig::default();
        scene.bodies[4].density = 0.0;
        assert!(matches!(
            scene.validate(),
            Err(ConfigError::InvalidDensity(name)) if name == "mallet"
        ));
    }

    #[test]
    fn validate_rejects_duplicate_names() {
        let mut scene = SceneConfig::default();
        scene.bodies[1].name = "wall_top".to_string();
        assert!(matches!(
            scene.validate(),
            Err(ConfigError::DuplicateBodyName(name)) if name == "wall_top"
        ));
    }

    #[test]
    fn validate_requires_mallet_and_puck() {
        let mut scene = SceneConfig::default();
        scene.bodies.retain(|b| b.name != "puck");
        assert!(matches!(
            scene.validate(),
            Err(ConfigError::MissingSceneBody("puck"))
        ));

        let mut scene = SceneConfig::default();
        scene.bodies.retain(|b| b.name != "mallet");
        assert!(matches!(
            scene.validate(),
            Err(ConfigError::MissingSceneBody("mallet"))
        ));
    }

    // ---- File loading ----

    #[test]
    fn from_file_reads_and_validates() {
        let path = std::env::temp_dir().join("slapshot_config_from_file_test.toml");
        std::fs::write(
            &path,
            r#"
            [window]
            title = "loaded from disk"

            [control]
            force_repeats = 4
            "#,
        )
        .unwrap();

        let config = SlapshotConfig::from_file(&path).unwrap();
        assert_eq!(config.window.title, "loaded from disk");
        assert_eq!(config.control.force_repeats, 4);
        assert_eq!(config.scene.bodies.len(), 6);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn from_file_rejects_invalid_values() {
        let path = std::env::temp_dir().join("slapshot_config_invalid_test.toml");
        std::fs::write(
            &path,
            r#"
            [sim]
            physics_dt = -1.0
            "#,
        )
        .unwrap();

        assert!(matches!(
            SlapshotConfig::from_file(&path),
            Err(ConfigError::InvalidTimestep(_))
        ));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn from_file_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("slapshot_config_does_not_exist.toml");
        assert!(matches!(
            SlapshotConfig::from_file(&path),
            Err(ConfigError::Io(_))
        ));
    }
}
