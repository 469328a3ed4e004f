use bevy::camera::primitives::Aabb;
use bevy::gizmos::config::GizmoConfigStore;
use bevy::prelude::*;

use crate::bounds::WorldBounds;
use crate::config::SnapToGrid;
use crate::settings::SnapSettings;
use crate::snap::{cell_outlines, pivot_center};

/// Gizmo group for grid guides, configured separately from other gizmos
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct SnapGridGizmos;

pub struct SnapGizmosPlugin;

impl Plugin for SnapGizmosPlugin {
    fn build(&self, app: &mut App) {
        app.init_gizmo_group::<SnapGridGizmos>()
            .add_systems(Update, (sync_gizmo_config, draw_snap_grids).chain());
    }
}

/// Keep the gizmo group in line with the settings
fn sync_gizmo_config(settings: Res<SnapSettings>, mut config_store: ResMut<GizmoConfigStore>) {
    if !settings.is_changed() {
        return;
    }

    let (config, _) = config_store.config_mut::<SnapGridGizmos>();
    config.enabled = settings.show_gizmos;
    config.line.width = settings.line_width;
}

/// The four edges of `rect` in the plane at depth `z`, counter-clockwise
pub fn outline_segments(rect: Rect, z: f32) -> [(Vec3, Vec3); 4] {
    let bottom_left = rect.min.extend(z);
    let bottom_right = Vec3::new(rect.max.x, rect.min.y, z);
    let top_right = rect.max.extend(z);
    let top_left = Vec3::new(rect.min.x, rect.max.y, z);
    [
        (bottom_left, bottom_right),
        (bottom_right, top_right),
        (top_right, top_left),
        (top_left, bottom_left),
    ]
}

/// Draw cell outlines and a pivot marker for every snapped entity
fn draw_snap_grids(
    mut gizmos: Gizmos<SnapGridGizmos>,
    settings: Res<SnapSettings>,
    snappers: Query<(&SnapToGrid, &GlobalTransform, &Aabb)>,
) {
    if !settings.show_gizmos {
        return;
    }

    for (config, global_transform, aabb) in snappers.iter() {
        let bounds = WorldBounds::from_aabb(aabb, global_transform);

        for cell in cell_outlines(&bounds, config) {
            for (start, end) in outline_segments(cell, settings.gizmo_z) {
                gizmos.line(start, end, settings.cell_color);
            }
        }

        // Circle with a cross stands in for an icon
        let pivot = pivot_center(&bounds, config).extend(settings.gizmo_z);
        let r = settings.pivot_radius;
        gizmos.circle(Isometry3d::from_translation(pivot), r, settings.pivot_color);
        gizmos.line(pivot - Vec3::X * r, pivot + Vec3::X * r, settings.pivot_color);
        gizmos.line(pivot - Vec3::Y * r, pivot + Vec3::Y * r, settings.pivot_color);
    }
}
