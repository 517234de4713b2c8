//! Free-running table with gravity and no mallet control.
//!
//! Same six-body scene, but the control law is left out entirely and the
//! solver gets a downward pull: both movers lob around the table and carom
//! off the walls until stopped. Space and Escape still work.
//!
//! Run with: `cargo run -p slapshot-demos --bin bounce`

use bevy::prelude::*;
use slapshot_core::SlapshotCorePlugin;
use slapshot_core::config::SlapshotConfig;
use slapshot_physics::SlapshotPhysicsPlugin;
use slapshot_viz::SlapshotVizPlugin;

fn main() {
    // 1. Stock table, reworked into a gravity toy: slow the break bodies to
    //    lob speed and pull everything toward the bottom rail.
    let mut config = SlapshotConfig::default();
    config.sim.gravity = [0.0, 900.0];
    config.scene.bodies[4].velocity = [1200.0, -600.0];
    config.scene.bodies[5].velocity = [-800.0, -1200.0];

    let SlapshotConfig {
        sim,
        window,
        control: _,
        scene,
    } = config;

    // 2. Window plus the scheduling core, the solver, and the painter. No
    //    control plugin, so the pointer is ignored and the bodies run free.
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Slapshot Bounce".to_string(),
            resolution: (window.width, window.height).into(),
            resizable: window.resizable,
            ..default()
        }),
        ..default()
    }));
    app.insert_resource(sim);
    app.insert_resource(window);
    app.insert_resource(scene);
    app.add_plugins((SlapshotCorePlugin, SlapshotPhysicsPlugin, SlapshotVizPlugin));

    // 3. Run until Escape or the window closes.
    println!("Bounce");
    println!("  Space  - pause / resume");
    println!("  Escape - quit");
    app.run();
}
