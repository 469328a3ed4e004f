//! Demo scene: a few blocks that snap to the grid while editing.
//!
//! F5 lets the blocks drift off the grid, F7 returns to editing and they
//! settle back onto grid lines.

use bevy::prelude::*;
use bevy_snap_to_grid::{
    HorizontalPivot, SimulationState, SnapToGrid, SnapToGridPlugin, VerticalPivot,
};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Bevy Snap To Grid".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(SnapToGridPlugin::default())
        .add_systems(Startup, setup_scene)
        .add_systems(Update, drift_while_playing)
        .run();
}

/// Marker for blocks that drift when the simulation runs
#[derive(Component)]
struct Drifting {
    velocity: Vec2,
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 0.0, 14.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let blocks = [
        (
            "Single",
            Vec2::new(1.0, 1.0),
            Vec3::new(-3.3, 1.2, 0.0),
            SnapToGrid::new(Vec2::ONE, 1, 1),
            Color::srgb(0.8, 0.3, 0.3),
        ),
        (
            "Wide",
            Vec2::new(3.0, 1.0),
            Vec3::new(1.4, 2.7, 0.0),
            SnapToGrid::new(Vec2::ONE, 3, 1).with_pivot(HorizontalPivot::Left, VerticalPivot::Bottom),
            Color::srgb(0.3, 0.7, 0.3),
        ),
        (
            "Odd",
            Vec2::new(1.0, 1.0),
            Vec3::new(0.2, -1.6, 0.0),
            SnapToGrid::default(),
            Color::srgb(0.3, 0.4, 0.9),
        ),
        (
            "Tall",
            Vec2::new(2.0, 4.0),
            Vec3::new(-1.1, -2.9, 0.0),
            SnapToGrid::new(Vec2::splat(2.0), 1, 2).with_pivot(HorizontalPivot::Right, VerticalPivot::Top),
            Color::srgb(0.9, 0.8, 0.2),
        ),
    ];

    for (i, (name, size, position, snap, color)) in blocks.into_iter().enumerate() {
        let angle = i as f32 * std::f32::consts::FRAC_PI_2;
        commands.spawn((
            Name::new(name),
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, 1.0))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: color,
                ..default()
            })),
            Transform::from_translation(position),
            snap,
            Drifting {
                velocity: Vec2::from_angle(angle) * 0.5,
            },
        ));
    }
}

/// Move blocks off the grid while playing so snapping is visible on return
fn drift_while_playing(
    time: Res<Time>,
    sim_state: Res<State<SimulationState>>,
    mut blocks: Query<(&Drifting, &mut Transform)>,
) {
    if *sim_state.get() != SimulationState::Playing {
        return;
    }

    for (drifting, mut transform) in blocks.iter_mut() {
        transform.translation += (drifting.velocity * time.delta_secs()).extend(0.0);
    }
}
