//! Grid snapping.
//!
//! The arithmetic is kept in plain functions over [`WorldBounds`] and
//! [`SnapToGrid`] so it can run without an ECS world. [`SnapTarget`] is the
//! seam to whatever owns the position and bounds; [`EntitySnapTarget`] is the
//! Bevy implementation used by [`snap_entities_to_grid`].

use bevy::camera::primitives::Aabb;
use bevy::prelude::*;

use crate::bounds::WorldBounds;
use crate::config::{HorizontalPivot, SnapToGrid, VerticalPivot};
use crate::settings::SnapSettings;
use crate::state::SimulationState;

/// Distance past a grid line (in world units) above which the far corner
/// rounds up to the next line. Not scaled by the cell size.
pub const SNAP_THRESHOLD: f32 = 0.5;

/// Deltas no larger than this on either axis count as already aligned
pub const SNAP_EPSILON: f32 = 1e-5;

/// Bottom-left corner of the grid footprint, anchored on the bounds by pivot
pub fn reference_corner(bounds: &WorldBounds, config: &SnapToGrid) -> Vec2 {
    let extent = config.extent();
    let center = bounds.center();

    let min_x = match config.horizontal_pivot {
        HorizontalPivot::Left => bounds.min.x,
        HorizontalPivot::Middle => center.x - extent.x / 2.0,
        HorizontalPivot::Right => bounds.max.x - extent.x,
    };
    let min_y = match config.vertical_pivot {
        VerticalPivot::Top => bounds.max.y - extent.y,
        VerticalPivot::Middle => center.y - extent.y / 2.0,
        VerticalPivot::Bottom => bounds.min.y,
    };

    Vec2::new(min_x, min_y) + config.offset
}

/// Candidate grid line at or below `coord` on one axis
pub fn grid_line(coord: f32, cell: f32, center: f32, is_odd: bool) -> f32 {
    let line = (center + cell * (coord / cell).floor()).floor();
    if is_odd { line - cell / 2.0 } else { line }
}

/// Round `coord` to `line` or the next line up, using [`SNAP_THRESHOLD`]
fn snap_axis(coord: f32, line: f32, cell: f32) -> f32 {
    if coord - line > SNAP_THRESHOLD {
        line + cell
    } else {
        line
    }
}

/// Translation that moves the far corner of the grid footprint onto a grid line
pub fn snap_delta(bounds: &WorldBounds, config: &SnapToGrid) -> Vec2 {
    let far = reference_corner(bounds, config) + config.extent();
    let cell = config.cell_size;

    let x0 = grid_line(far.x, cell.x, config.center.x, config.is_odd);
    let y0 = grid_line(far.y, cell.y, config.center.y, config.is_odd);

    Vec2::new(snap_axis(far.x, x0, cell.x), snap_axis(far.y, y0, cell.y)) - far
}

/// Where the pivot marker sits: the reference corner plus the cell counts
/// weighted by the normalized pivot position.
pub fn pivot_center(bounds: &WorldBounds, config: &SnapToGrid) -> Vec2 {
    let counts = Vec2::new(config.width as f32, config.height as f32);
    reference_corner(bounds, config) + counts * config.pivot_weights()
}

/// One rectangle per grid cell, column by column from the reference corner
pub fn cell_outlines(bounds: &WorldBounds, config: &SnapToGrid) -> Vec<Rect> {
    let corner = reference_corner(bounds, config);
    let cell = config.cell_size;

    let mut cells = Vec::with_capacity(config.cell_count());
    for i in 0..config.width {
        for j in 0..config.height {
            let min = corner + Vec2::new(i as f32 * cell.x, j as f32 * cell.y);
            cells.push(Rect::from_corners(min, min + cell));
        }
    }
    cells
}

/// Something with a position that can be snapped.
pub trait SnapTarget {
    /// Current world-space bounds, `None` if they are not available yet
    fn world_bounds(&self) -> Option<WorldBounds>;

    /// Move by `delta` in world space
    fn translate_world(&mut self, delta: Vec3);
}

/// Snap `target` once. Only moves it while `mode` is editing.
///
/// Returns the applied delta (zero when already aligned, in which case the
/// target is not touched), or `None` when nothing was done.
pub fn snap_target<T: SnapTarget + ?Sized>(
    target: &mut T,
    config: &SnapToGrid,
    mode: SimulationState,
) -> Option<Vec2> {
    if !mode.is_editing() {
        return None;
    }

    let bounds = target.world_bounds()?;
    let delta = snap_delta(&bounds, config);
    if delta.abs().max_element() <= SNAP_EPSILON {
        return Some(Vec2::ZERO);
    }

    target.translate_world(delta.extend(0.0));
    Some(delta)
}

/// A mesh entity seen through its transform components
pub struct EntitySnapTarget<'a> {
    pub transform: Mut<'a, Transform>,
    pub global_transform: &'a GlobalTransform,
    pub aabb: &'a Aabb,
    /// Parent's world transform, used to express the delta in local space
    pub parent: Option<&'a GlobalTransform>,
}

impl SnapTarget for EntitySnapTarget<'_> {
    fn world_bounds(&self) -> Option<WorldBounds> {
        Some(WorldBounds::from_aabb(self.aabb, self.global_transform))
    }

    fn translate_world(&mut self, delta: Vec3) {
        let local = match self.parent {
            Some(parent) => parent.affine().inverse().transform_vector3(delta),
            None => delta,
        };
        self.transform.translation += local;
    }
}

/// Snap every [`SnapToGrid`] entity that has bounds.
///
/// Bounds come from last frame's `GlobalTransform`, so a move made here shows
/// up in the bounds once transforms have propagated.
pub fn snap_entities_to_grid(
    sim_state: Res<State<SimulationState>>,
    settings: Res<SnapSettings>,
    mut snappers: Query<(
        Entity,
        &SnapToGrid,
        &mut Transform,
        &GlobalTransform,
        &Aabb,
        Option<&ChildOf>,
    )>,
    parents: Query<&GlobalTransform>,
) {
    if !settings.snapping_enabled {
        return;
    }

    let mode = *sim_state.get();
    for (entity, config, transform, global_transform, aabb, child_of) in snappers.iter_mut() {
        let mut target = EntitySnapTarget {
            transform,
            global_transform,
            aabb,
            parent: child_of.and_then(|c| parents.get(c.parent()).ok()),
        };

        if let Some(delta) = snap_target(&mut target, config, mode) {
            if delta != Vec2::ZERO {
                trace!("Snapped {:?} by {:?}", entity, delta);
            }
        }
    }
}

/// Mention entities whose bounds never showed up (no mesh, or not loaded yet)
pub fn report_missing_bounds(
    added: Query<(Entity, Option<&Name>), (Added<SnapToGrid>, Without<Aabb>)>,
) {
    for (entity, name) in added.iter() {
        match name {
            Some(name) => debug!("SnapToGrid on '{}' has no bounds yet; it will not snap", name),
            None => debug!("SnapToGrid on {:?} has no bounds yet; it will not snap", entity),
        }
    }
}
