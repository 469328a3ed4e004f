use bevy::prelude::*;

use crate::config::{HorizontalPivot, SnapToGrid, VerticalPivot};
use crate::gizmos::SnapGizmosPlugin;
use crate::settings::{handle_settings_input, save_settings_on_change, SnapSettings};
use crate::snap::{report_missing_bounds, snap_entities_to_grid};
use crate::state::SimulationStatePlugin;

/// System set for grid snapping, for ordering against other `Update` systems
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnapToGridSystems;

/// Snaps [`SnapToGrid`] entities while editing and draws their grid guides
pub struct SnapToGridPlugin {
    /// Load settings from the user config directory and save them on change
    pub persist_settings: bool,
}

impl Default for SnapToGridPlugin {
    fn default() -> Self {
        Self {
            persist_settings: true,
        }
    }
}

impl Plugin for SnapToGridPlugin {
    fn build(&self, app: &mut App) {
        if self.persist_settings {
            app.insert_resource(SnapSettings::load())
                .add_systems(PostUpdate, save_settings_on_change);
        } else {
            app.init_resource::<SnapSettings>();
        }

        app.register_type::<SnapToGrid>()
            .register_type::<HorizontalPivot>()
            .register_type::<VerticalPivot>()
            .add_plugins(SimulationStatePlugin)
            .add_plugins(SnapGizmosPlugin)
            .add_systems(
                Update,
                (handle_settings_input, snap_entities_to_grid)
                    .chain()
                    .in_set(SnapToGridSystems),
            )
            .add_systems(Last, report_missing_bounds);
    }
}
