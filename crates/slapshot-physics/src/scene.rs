//! One-time population of the table world from the scene description.

use bevy::prelude::Resource;
use rapier2d::prelude::RigidBodyHandle;
use slapshot_core::config::SceneConfig;
use slapshot_core::error::SceneError;

use crate::world::TableWorld;

/// Handles to the two player-facing bodies, resolved by name during setup.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneHandles {
    pub mallet: RigidBodyHandle,
    pub puck: RigidBodyHandle,
}

/// Add every configured body to an empty world, in declaration order.
///
/// A world that already contains bodies is rejected. The scene must name
/// both a mallet and a puck; everything else is free-form.
pub fn populate(
    world: &mut TableWorld,
    scene: &SceneConfig,
) -> Result<SceneHandles, SceneError> {
    if !world.is_empty() {
        return Err(SceneError::AlreadyPopulated);
    }

    let mut mallet = None;
    let mut puck = None;
    for body in &scene.bodies {
        let handle = world.add_body(body);
        if body.name == SceneConfig::MALLET {
            mallet = Some(handle);
        } else if body.name == SceneConfig::PUCK {
            puck = Some(handle);
        }
    }

    let mallet = mallet.ok_or_else(|| SceneError::MissingBody(SceneConfig::MALLET.to_string()))?;
    let puck = puck.ok_or_else(|| SceneError::MissingBody(SceneConfig::PUCK.to_string()))?;
    Ok(SceneHandles { mallet, puck })
}

// ---------------------------------------------------------------------------
