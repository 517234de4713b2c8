//! Ownership wrapper around the rapier2d simulation state.
//!
//! [`TableWorld`] owns every rapier set and pipeline stage for one table
//! session and exposes the handful of accessors the rest of the workspace
//! needs. Callers never touch rapier types directly except for
//! [`RigidBodyHandle`], which is the stable identity of a body.

use bevy::math::Vec2;
use bevy::prelude::Resource;
use nalgebra::vector;
use rapier2d::prelude::{
    BroadPhaseBvh, CCDSolver, CoefficientCombineRule, ColliderBuilder, ColliderSet,
    ImpulseJointSet, IntegrationParameters, IslandManager, Isometry, MultibodyJointSet,
    NarrowPhase, PhysicsPipeline, RigidBody, RigidBodyBuilder, RigidBodyHandle, RigidBodySet,
    Vector,
};
use slapshot_core::config::{BodyConfig, Fixture, MassKind, SimConfig};

/// The physics world of one table session.
///
/// Bodies keep the order they were added in; that order is the body index
/// used by the scene contract and the renderer.
#[derive(Resource)]
pub struct TableWorld {
    gravity: Vector<f32>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    order: Vec<RigidBodyHandle>,
}

impl TableWorld {
    /// Create an empty world with the given gravity and fixed timestep.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(gravity: Vec2, timestep: f64) -> Self {
        let integration_parameters = IntegrationParameters {
            dt: timestep as f32,
            ..IntegrationParameters::default()
        };
        Self {
            gravity: vector![gravity.x, gravity.y],
            integration_parameters,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            order: Vec::new(),
        }
    }

    /// Create an empty world from the simulation configuration.
    #[must_use]
    pub fn from_config(sim: &SimConfig) -> Self {
        Self::new(
            Vec2::new(sim.gravity[0], sim.gravity[1]),
            sim.physics_dt,
        )
    }

    // ---- Population ----

    /// Add one configured body and its fixture, returning its handle.
    ///
    /// The handle is appended to the insertion order, so the body index of
    /// the new body is `body_count() - 1`.
    pub fn add_body(&mut self, config: &BodyConfig) -> RigidBodyHandle {
        let builder = match config.mass {
            MassKind::Infinite => RigidBodyBuilder::fixed(),
            MassKind::Dynamic => RigidBodyBuilder::dynamic(),
        };
        let body = builder
            .pose(Isometry::translation(
                config.position[0],
                config.position[1],
            ))
            .linvel(vector![config.velocity[0], config.velocity[1]])
            .linear_damping(config.linear_damping)
            .angular_damping(config.angular_damping)
            .can_sleep(config.can_sleep)
            .ccd_enabled(config.ccd)
            .build();
        let handle = self.bodies.insert(body);

        let collider = match config.fixture {
            Fixture::Circle { radius } => ColliderBuilder::ball(radius),
            Fixture::Rect { width, height } => {
                ColliderBuilder::cuboid(width / 2.0, height / 2.0)
            }
        }
        .density(config.density)
        .friction(config.friction)
        .restitution(config.restitution)
        // Pair restitution resolves to the bouncier of the two surfaces.
        .restitution_combine_rule(CoefficientCombineRule::Max)
        .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);

        self.order.push(handle);
        handle
    }

    // ---- Stepping ----

    /// Advance the simulation by exactly one fixed timestep.
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &(),
            &(),
        );
    }

    /// Clear the accumulated user force on every body.
    ///
    /// Rapier keeps forces until they are reset, so the step driver calls
    /// this once per frame after stepping to give forces per-frame scope.
    pub fn reset_forces(&mut self) {
        for (_, body) in self.bodies.iter_mut() {
            body.reset_forces(true);
        }
    }

    // ---- World accessors ----

    /// The fixed timestep the pipeline integrates with, in seconds.
    #[must_use]
    pub fn timestep(&self) -> f32 {
        self.integration_parameters.dt
    }

    /// Current gravity vector.
    #[must_use]
    pub fn gravity(&self) -> Vec2 {
        Vec2::new(self.gravity.x, self.gravity.y)
    }

    /// Replace the gravity vector.
    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = vector![gravity.x, gravity.y];
    }

    /// Number of bodies added so far.
    #[must_use]
    pub fn body_count(&self) -> usize {
        self.order.len()
    }

    /// True when no body has been added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Handle of the body at the given insertion index.
    #[must_use]
    pub fn handle(&self, index: usize) -> Option<RigidBodyHandle> {
        self.order.get(index).copied()
    }

    /// All body handles in insertion order.
    #[must_use]
    pub fn handles(&self) -> &[RigidBodyHandle] {
        &self.order
    }

    /// Body at the given insertion index.
    #[must_use]
    pub fn body(&self, index: usize) -> Option<&RigidBody> {
        self.order.get(index).and_then(|h| self.bodies.get(*h))
    }

    // ---- Body accessors ----

    /// World-space centre of a body.
    #[must_use]
    pub fn translation(&self, handle: RigidBodyHandle) -> Option<Vec2> {
        self.bodies
            .get(handle)
            .map(|b| Vec2::new(b.translation().x, b.translation().y))
    }

    /// Rotation of a body, in radians.
    #[must_use]
    pub fn rotation(&self, handle: RigidBodyHandle) -> Option<f32> {
        self.bodies.get(handle).map(|b| b.rotation().angle())
    }

    /// Linear velocity of a body.
    #[must_use]
    pub fn linvel(&self, handle: RigidBodyHandle) -> Option<Vec2> {
        self.bodies
            .get(handle)
            .map(|b| Vec2::new(b.linvel().x, b.linvel().y))
    }

    /// Accumulated user force on a body.
    #[must_use]
    pub fn force(&self, handle: RigidBodyHandle) -> Option<Vec2> {
        self.bodies
            .get(handle)
            .map(|b| Vec2::new(b.user_force().x, b.user_force().y))
    }

    /// Mass of a body. Fixed bodies report zero.
    #[must_use]
    pub fn mass(&self, handle: RigidBodyHandle) -> Option<f32> {
        self.bodies.get(handle).map(RigidBody::mass)
    }

    /// True when the body has an immovable (infinite-mass) body type.
    #[must_use]
    pub fn is_fixed(&self, handle: RigidBodyHandle) -> Option<bool> {
        self.bodies.get(handle).map(RigidBody::is_fixed)
    }

    /// Teleport a body to a new centre, waking it.
    pub fn set_translation(&mut self, handle: RigidBodyHandle, position: Vec2) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.set_translation(vector![position.x, position.y], true);
        }
    }

    /// Overwrite the linear velocity of a body, waking it.
    pub fn set_linvel(&mut self, handle: RigidBodyHandle, velocity: Vec2) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.set_linvel(vector![velocity.x, velocity.y], true);
        }
    }

    /// Add to the accumulated user force on a body, waking it.
    pub fn apply_force(&mut self, handle: RigidBodyHandle, force: Vec2) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.add_force(vector![force.x, force.y], true);
        }
    }
}

// ---------------------------------------------------------------------------
