//! 2D presentation of the table: coordinate mapping, the painted felt and
//! markings, and the body meshes that mirror the physics world.

use bevy::prelude::*;
use slapshot_core::config::{Fixture, SceneConfig, SimConfig, WindowConfig};
use slapshot_physics::TableWorld;

// ---------------------------------------------------------------------------
// Coordinate mapping
// ---------------------------------------------------------------------------

/// Convert a point in table space (origin at the top-left corner, y running
/// down) to bevy world space (origin at the canvas centre, y running up),
/// scaled to pixels.
///
/// `canvas` is the canvas size in table units.
#[must_use]
pub fn table_to_world(point: Vec2, canvas: Vec2, pixels_per_unit: f32) -> Vec2 {
    Vec2::new(point.x - canvas.x / 2.0, canvas.y / 2.0 - point.y) * pixels_per_unit
}

/// Inverse of [`table_to_world`].
#[must_use]
pub fn world_to_table(point: Vec2, canvas: Vec2, pixels_per_unit: f32) -> Vec2 {
    let unscaled = point / pixels_per_unit;
    Vec2::new(unscaled.x + canvas.x / 2.0, canvas.y / 2.0 - unscaled.y)
}

// ---------------------------------------------------------------------------
// Static artwork
// ---------------------------------------------------------------------------

// Painter layers, back to front: felt, markings, bodies in scene order.
const FELT_LAYER: f32 = 1.0;
const MARKING_LAYER: f32 = 2.0;
const BODY_LAYER: f32 = 3.0;
const BODY_LAYER_STEP: f32 = 0.1;

// Table artwork in table units.
const FELT_CENTRE: Vec2 = Vec2::new(647.5, 350.0);
const FELT_SIZE: Vec2 = Vec2::new(1115.0, 540.0);
const FELT_COLOR: Color = Color::srgb(0.0, 0.0, 1.0);
const CENTRE_LINE_CENTRE: Vec2 = Vec2::new(632.0, 345.0);
const CENTRE_LINE_SIZE: Vec2 = Vec2::new(1.0, 530.0);
const CENTRE_RING_CENTRE: Vec2 = Vec2::new(632.0, 360.0);
const CENTRE_RING_INNER: f32 = 49.0;
const CENTRE_RING_OUTER: f32 = 50.0;
const LEFT_GOAL_CENTRE: Vec2 = Vec2::new(132.5, 355.0);
const LEFT_GOAL_SIZE: Vec2 = Vec2::new(95.0, 260.0);
const RIGHT_GOAL_CENTRE: Vec2 = Vec2::new(1210.0, 355.0);
const RIGHT_GOAL_SIZE: Vec2 = Vec2::new(180.0, 260.0);

/// Spawn the 2D camera.
pub fn spawn_camera_system(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn spawn_panel(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    position: Vec2,
    size: Vec2,
    color: Color,
    layer: f32,
) {
    commands.spawn((
        Mesh2d(meshes.add(Rectangle::new(size.x, size.y))),
        MeshMaterial2d(materials.add(color)),
        Transform::from_translation(position.extend(layer)),
    ));
}

/// Paint the felt, the centre line and ring, and the two goal mouths.
#[allow(clippy::needless_pass_by_value)]
pub fn spawn_artwork_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    sim: Res<SimConfig>,
    window: Res<WindowConfig>,
) {
    let ppu = sim.pixels_per_unit;
    let canvas = window.size() / ppu;

    spawn_panel(
        &mut commands,
        &mut meshes,
        &mut materials,
        table_to_world(FELT_CENTRE, canvas, ppu),
        FELT_SIZE * ppu,
        FELT_COLOR,
        FELT_LAYER,
    );
    spawn_panel(
        &mut commands,
        &mut meshes,
        &mut materials,
        table_to_world(CENTRE_LINE_CENTRE, canvas, ppu),
        CENTRE_LINE_SIZE * ppu,
        Color::WHITE,
        MARKING_LAYER,
    );
    commands.spawn((
        Mesh2d(meshes.add(Annulus::new(
            CENTRE_RING_INNER * ppu,
            CENTRE_RING_OUTER * ppu,
        ))),
        MeshMaterial2d(materials.add(Color::WHITE)),
        Transform::from_translation(
            table_to_world(CENTRE_RING_CENTRE, canvas, ppu).extend(MARKING_LAYER),
        ),
    ));
    spawn_panel(
        &mut commands,
        &mut meshes,
        &mut materials,
        table_to_world(LEFT_GOAL_CENTRE, canvas, ppu),
        LEFT_GOAL_SIZE * ppu,
        Color::WHITE,
        MARKING_LAYER,
    );
    spawn_panel(
        &mut commands,
        &mut meshes,
        &mut materials,
        table_to_world(RIGHT_GOAL_CENTRE, canvas, ppu),
        RIGHT_GOAL_SIZE * ppu,
        Color::WHITE,
        MARKING_LAYER,
    );
}

// ---------------------------------------------------------------------------
// Body meshes
// ---------------------------------------------------------------------------

/// Mesh entity mirroring the body at `index` in the physics world.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableBody {
    pub index: usize,
}

/// Spawn one mesh per configured body, in scene order.
#[allow(clippy::needless_pass_by_value, clippy::cast_precision_loss)]
pub fn spawn_bodies_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    sim: Res<SimConfig>,
    window: Res<WindowConfig>,
    scene: Res<SceneConfig>,
) {
    let ppu = sim.pixels_per_unit;
    let canvas = window.size() / ppu;

    for (index, body) in scene.bodies.iter().enumerate() {
        let mesh = match body.fixture {
            Fixture::Circle { radius } => meshes.add(Circle::new(radius * ppu)),
            Fixture::Rect { width, height } => {
                meshes.add(Rectangle::new(width * ppu, height * ppu))
            }
        };
        let color = Color::srgb(body.color[0], body.color[1], body.color[2]);
        let layer = BODY_LAYER + index as f32 * BODY_LAYER_STEP;
        commands.spawn((
            TableBody { index },
            Mesh2d(mesh),
            MeshMaterial2d(materials.add(color)),
            Transform::from_translation(table_to_world(body.position(), canvas, ppu).extend(layer)),
        ));
    }
}

/// Copy body poses out of the physics world into mesh transforms.
///
/// Rotation flips sign because table space runs y-down while world space
/// runs y-up. Layers assigned at spawn are preserved.
#[allow(clippy::needless_pass_by_value)]
pub fn sync_bodies_system(
    table: Option<Res<TableWorld>>,
    sim: Res<SimConfig>,
    window: Res<WindowConfig>,
    mut bodies: Query<(&TableBody, &mut Transform)>,
) {
    let Some(table) = table else {
        return;
    };
    let ppu = sim.pixels_per_unit;
    let canvas = window.size() / ppu;

    for (body, mut transform) in &mut bodies {
        let Some(handle) = table.handle(body.index) else {
            continue;
        };
        if let Some(position) = table.translation(handle) {
            let world = table_to_world(position, canvas, ppu);
            transform.translation.x = world.x;
            transform.translation.y = world.y;
        }
        if let Some(angle) = table.rotation(handle) {
            transform.rotation = Quat::from_rotation_z(-angle);
        }
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Vec2 = Vec2::new(1300.0, 700.0);

    // ---- Mapping ----

    #[test]
    fn canvas_centre_maps_to_world_origin() {
        assert_eq!(
            table_to_world(Vec2::new(650.0, 350.0), CANVAS, 1.0),
            Vec2::ZERO
        );
    }

    #[test]
    fn top_left_maps_up_and_left() {
        assert_eq!(
            table_to_world(Vec2::ZERO, CANVAS, 1.0),
            Vec2::new(-650.0, 350.0)
        );
        assert_eq!(
            table_to_world(Vec2::new(1300.0, 700.0), CANVAS, 1.0),
            Vec2::new(650.0, -350.0)
        );
    }

    #[test]
    fn mapping_round_trips() {
        for point in [
            Vec2::new(0.0, 0.0),
            Vec2::new(180.25, 350.0),
            Vec2::new(1005.0, 350.0),
            Vec2::new(1300.0, 700.0),
        ] {
            let there = table_to_world(point, CANVAS, 1.0);
            assert_eq!(world_to_table(there, CANVAS, 1.0), point);
        }
    }

    #[test]
    fn scale_preserves_pixel_output_for_scaled_canvas() {
        // Doubling the scale while halving the canvas keeps the same pixels.
        let half_canvas = CANVAS / 2.0;
        assert_eq!(
            table_to_world(Vec2::new(325.0, 175.0), half_canvas, 2.0),
            Vec2::ZERO
        );
        assert_eq!(
            table_to_world(Vec2::ZERO, half_canvas, 2.0),
            Vec2::new(-650.0, 350.0)
        );
    }

    // ---- Artwork geometry ----

    #[test]
    fn artwork_stays_inside_the_canvas() {
        for (centre, size) in [
            (FELT_CENTRE, FELT_SIZE),
            (CENTRE_LINE_CENTRE, CENTRE_LINE_SIZE),
            (LEFT_GOAL_CENTRE, LEFT_GOAL_SIZE),
            (RIGHT_GOAL_CENTRE, RIGHT_GOAL_SIZE),
        ] {
            let min = centre - size / 2.0;
            let max = centre + size / 2.0;
            assert!(min.x >= 0.0 && min.y >= 0.0, "panel at {centre:?} underflows");
            assert!(
                max.x <= CANVAS.x && max.y <= CANVAS.y,
                "panel at {centre:?} overflows"
            );
        }
    }

    #[test]
    fn centre_ring_sits_on_the_centre_line() {
        assert!((CENTRE_RING_CENTRE.x - CENTRE_LINE_CENTRE.x).abs() < f32::EPSILON);
        assert!(CENTRE_RING_OUTER > CENTRE_RING_INNER);
    }
}
