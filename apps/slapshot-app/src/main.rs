//! Air-hockey table CLI.
//!
//! Provides three modes of operation:
//! - `play`: Open the interactive table window (default)
//! - `headless`: Run N frames without a window and print statistics
//! - `info`: Print workspace crate versions and configuration

use std::path::PathBuf;

use bevy::prelude::*;
use clap::{Parser, Subcommand};

use slapshot_core::config::SlapshotConfig;
use slapshot_physics::{SceneHandles, TableWorld};
use slapshot_sim::{HeadlessLoop, SlapshotSimPlugin};
use slapshot_viz::SlapshotVizPlugin;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Air-hockey table simulation.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive table window.
    Play {
        /// Path to a TOML configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Run frames without a window and print statistics.
    Headless {
        /// Number of frames to run.
        #[arg(short = 'n', long, default_value_t = 600)]
        frames: u64,

        /// Path to a TOML configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print crate information.
    Info,
}

fn load_config(path: Option<PathBuf>) -> SlapshotConfig {
    match path {
        Some(path) => match SlapshotConfig::from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("failed to load {}: {err}", path.display());
                std::process::exit(2);
            }
        },
        None => SlapshotConfig::default(),
    }
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

fn run_play(config: SlapshotConfig) {
    let SlapshotConfig {
        sim,
        window,
        control,
        scene,
    } = config;

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
    app.insert_resource(sim);
    app.insert_resource(window);
    app.insert_resource(control);
    app.insert_resource(scene);
    app.add_plugins((SlapshotSimPlugin, SlapshotVizPlugin));
    app.run();
}

fn run_headless(frames: u64, config: SlapshotConfig) {
    let mut session = HeadlessLoop::from_config(config);
    let stats = session.run(frames);

    let world = session.app().world();
    if let (Some(handles), Some(table)) = (
        world.get_resource::<SceneHandles>(),
        world.get_resource::<TableWorld>(),
    ) && let (Some(position), Some(velocity)) = (
        table.translation(handles.puck),
        table.linvel(handles.puck),
    ) {
        println!(
            "puck: position=({:.1}, {:.1}), velocity=({:.1}, {:.1})",
            position.x, position.y, velocity.x, velocity.y
        );
    }
    println!("{stats}");
}

fn run_info() {
    println!("slapshot v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("crates:");
    println!("  slapshot-core    {}", env!("CARGO_PKG_VERSION"));
    println!("  slapshot-physics {}", env!("CARGO_PKG_VERSION"));
    println!("  slapshot-control {}", env!("CARGO_PKG_VERSION"));
    println!("  slapshot-sim     {}", env!("CARGO_PKG_VERSION"));
    println!("  slapshot-viz     {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("edition: 2024");
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play { config }) => run_play(load_config(config)),
        Some(Commands::Headless { frames, config }) => {
            run_headless(frames, load_config(config));
        }
        Some(Commands::Info) => run_info(),
        None => {
            // Default: open the window with the stock table.
            run_play(SlapshotConfig::default());
        }
    }
}
