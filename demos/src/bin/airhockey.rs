//! Interactive air-hockey table with a pointer-driven mallet.
//!
//! Runs the full stack: the stock six-body scene, rapier2d dynamics with
//! continuous collision detection, the pointer control law, and the painted
//! 2D table.
//!
//! Run with: `cargo run -p slapshot-demos --bin airhockey`

use bevy::prelude::*;
use slapshot_core::config::SlapshotConfig;
use slapshot_sim::SlapshotSimPlugin;
use slapshot_viz::SlapshotVizPlugin;

fn main() {
    // 1. Stock table: four walls plus the mallet and puck at break poses.
    let SlapshotConfig {
        sim,
        window,
        control,
        scene,
    } = SlapshotConfig::default();

    // 2. Window sized to the canvas; the table fills it edge to edge.
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: window.title.clone(),
            resolution: (window.width, window.height).into(),
            resizable: window.resizable,
            ..default()
        }),
        ..default()
    }));

    // 3. Configuration first, then the simulation and drawing frontends.
    app.insert_resource(sim);
    app.insert_resource(window);
    app.insert_resource(control);
    app.insert_resource(scene);
    app.add_plugins((SlapshotSimPlugin, SlapshotVizPlugin));

    // 4. Hand the loop to the windowing backend.
    println!("Air hockey");
    println!("  Mouse  - steer the mallet inside the table region");
    println!("  Space  - pause / resume");
    println!("  Escape - quit");
    app.run();
}
