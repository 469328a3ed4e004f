//! # bevy_snap_to_grid
//!
//! Keeps entities aligned to a 2D grid while a scene is being edited, and
//! draws gizmo guides for the grid cells and pivot.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bevy::prelude::*;
//! use bevy_snap_to_grid::{SnapToGrid, SnapToGridPlugin};
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(SnapToGridPlugin::default())
//!         .add_systems(Startup, setup)
//!         .run();
//! }
//!
//! fn setup(
//!     mut commands: Commands,
//!     mut meshes: ResMut<Assets<Mesh>>,
//!     mut materials: ResMut<Assets<StandardMaterial>>,
//! ) {
//!     commands.spawn((
//!         Mesh3d(meshes.add(Cuboid::new(2.0, 1.0, 1.0))),
//!         MeshMaterial3d(materials.add(StandardMaterial::default())),
//!         Transform::from_xyz(0.3, 0.4, 0.0),
//!         SnapToGrid::new(Vec2::ONE, 2, 1),
//!     ));
//! }
//! ```
//!
//! ## Simulation State
//!
//! Snapping only runs in [`SimulationState::Editing`]:
//!
//! - **F5**: play (or resume)
//! - **F6**: pause
//! - **F7**: stop, back to editing
//! - **F8**: toggle snapping
//! - **F9**: toggle grid gizmos

pub mod bounds;
pub mod config;
pub mod gizmos;
pub mod plugin;
pub mod settings;
pub mod snap;
pub mod state;

pub use plugin::{SnapToGridPlugin, SnapToGridSystems};

pub use bounds::WorldBounds;
pub use config::{HorizontalPivot, SnapToGrid, VerticalPivot};
pub use gizmos::SnapGridGizmos;
pub use settings::SnapSettings;
pub use snap::{
    cell_outlines, grid_line, pivot_center, reference_corner, snap_delta, snap_target,
    EntitySnapTarget, SnapTarget,
};
pub use state::SimulationState;
