//! Per-entity grid configuration.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Which horizontal edge of the bounds anchors the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum HorizontalPivot {
    Left,
    #[default]
    Middle,
    Right,
}

impl HorizontalPivot {
    pub const ALL: [Self; 3] = [Self::Left, Self::Middle, Self::Right];

    /// Signed weight: Left = -1, Middle = 0, Right = 1
    pub fn weight(&self) -> i32 {
        match self {
            HorizontalPivot::Left => -1,
            HorizontalPivot::Middle => 0,
            HorizontalPivot::Right => 1,
        }
    }

    /// Position of the pivot across the grid, in `[0, 1]`
    pub fn normalized(&self) -> f32 {
        (self.weight() + 1) as f32 / 2.0
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HorizontalPivot::Left => "Left",
            HorizontalPivot::Middle => "Middle",
            HorizontalPivot::Right => "Right",
        }
    }
}

/// Which vertical edge of the bounds anchors the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum VerticalPivot {
    Top,
    #[default]
    Middle,
    Bottom,
}

impl VerticalPivot {
    pub const ALL: [Self; 3] = [Self::Top, Self::Middle, Self::Bottom];

    /// Signed weight: Top = 1, Middle = 0, Bottom = -1
    pub fn weight(&self) -> i32 {
        match self {
            VerticalPivot::Top => 1,
            VerticalPivot::Middle => 0,
            VerticalPivot::Bottom => -1,
        }
    }

    /// Position of the pivot up the grid, in `[0, 1]`
    pub fn normalized(&self) -> f32 {
        (self.weight() + 1) as f32 / 2.0
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VerticalPivot::Top => "Top",
            VerticalPivot::Middle => "Middle",
            VerticalPivot::Bottom => "Bottom",
        }
    }
}

/// Keeps an entity's render bounds aligned to a grid while editing.
///
/// The entity also needs an `Aabb` (added automatically for meshes) so its
/// bounds can be queried. Only `x` and `y` are snapped; `z` is left alone.
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[require(Transform)]
pub struct SnapToGrid {
    /// Size of one grid cell
    pub cell_size: Vec2,
    /// Number of cells the entity spans horizontally
    pub width: u32,
    /// Number of cells the entity spans vertically
    pub height: u32,
    /// Origin of the grid lines
    #[serde(default)]
    pub center: Vec2,
    /// Offset applied to the reference corner before snapping
    #[serde(default)]
    pub offset: Vec2,
    /// Shift grid lines by half a cell
    pub is_odd: bool,
    #[serde(default)]
    pub horizontal_pivot: HorizontalPivot,
    #[serde(default)]
    pub vertical_pivot: VerticalPivot,
}

impl Default for SnapToGrid {
    fn default() -> Self {
        Self {
            cell_size: Vec2::ONE,
            width: 1,
            height: 1,
            center: Vec2::ZERO,
            offset: Vec2::ZERO,
            is_odd: true,
            horizontal_pivot: HorizontalPivot::Middle,
            vertical_pivot: VerticalPivot::Middle,
        }
    }
}

impl SnapToGrid {
    /// Grid of `width` x `height` cells of size `cell_size`, even alignment
    pub fn new(cell_size: Vec2, width: u32, height: u32) -> Self {
        Self {
            cell_size,
            width,
            height,
            is_odd: false,
            ..default()
        }
    }

    pub fn with_pivot(mut self, horizontal: HorizontalPivot, vertical: VerticalPivot) -> Self {
        self.horizontal_pivot = horizontal;
        self.vertical_pivot = vertical;
        self
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_center(mut self, center: Vec2) -> Self {
        self.center = center;
        self
    }

    pub fn with_odd(mut self, is_odd: bool) -> Self {
        self.is_odd = is_odd;
        self
    }

    /// Size of the whole grid: cell size times cell counts
    pub fn extent(&self) -> Vec2 {
        self.cell_size * Vec2::new(self.width as f32, self.height as f32)
    }

    /// Total number of cells, computed in `usize` so large grids cannot overflow
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Normalized pivot position, each axis in `[0, 1]`
    pub fn pivot_weights(&self) -> Vec2 {
        Vec2::new(
            self.horizontal_pivot.normalized(),
            self.vertical_pivot.normalized(),
        )
    }
}
