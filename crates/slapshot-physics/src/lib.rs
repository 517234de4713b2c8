// slapshot-physics: ownership of the rapier2d world, scene population, and
// the fixed-step frame driver.

pub mod plugin;
pub mod scene;
pub mod systems;
pub mod world;

pub use plugin::SlapshotPhysicsPlugin;
pub use scene::{SceneHandles, populate};
pub use world::TableWorld;

pub mod prelude {
    pub use crate::plugin::SlapshotPhysicsPlugin;
    pub use crate::scene::{SceneHandles, populate};
    pub use crate::systems::{setup_table_system, step_table_system};
    pub use crate::world::TableWorld;
}
