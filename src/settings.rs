use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Plugin-wide snapping settings that persist to disk
#[derive(Resource, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SnapSettings {
    /// Move snapped entities while editing
    #[serde(default = "default_true")]
    pub snapping_enabled: bool,
    /// Draw cell outlines and pivot markers
    #[serde(default = "default_true")]
    pub show_gizmos: bool,
    /// Color of the cell outlines
    #[serde(default = "default_cell_color")]
    pub cell_color: Color,
    /// Color of the pivot marker
    #[serde(default = "default_pivot_color")]
    pub pivot_color: Color,
    /// Radius of the pivot marker
    #[serde(default = "default_pivot_radius")]
    pub pivot_radius: f32,
    /// Line width for grid gizmos, in pixels
    #[serde(default = "default_line_width")]
    pub line_width: f32,
    /// Depth of the plane the gizmos are drawn in
    #[serde(default)]
    pub gizmo_z: f32,
}

fn default_true() -> bool {
    true
}

fn default_cell_color() -> Color {
    Color::srgb(0.0, 0.0, 1.0)
}

fn default_pivot_color() -> Color {
    Color::srgb(1.0, 0.55, 0.1)
}

fn default_pivot_radius() -> f32 {
    0.1
}

fn default_line_width() -> f32 {
    2.0
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            snapping_enabled: true,
            show_gizmos: true,
            cell_color: default_cell_color(),
            pivot_color: default_pivot_color(),
            pivot_radius: default_pivot_radius(),
            line_width: default_line_width(),
            gizmo_z: 0.0,
        }
    }
}

impl SnapSettings {
    /// Get the settings file path
    fn file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("bevy_snap_to_grid");
            p.push("settings.ron");
            p
        })
    }

    /// Parse settings, falling back to defaults on malformed input
    pub fn from_ron(content: &str) -> Self {
        match ron::from_str(content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Ignoring malformed snap settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(content) => Self::from_ron(&content),
            Err(_) => Self::default(),
        }
    }

    /// Save settings to disk
    pub fn save(&self) {
        let Some(path) = Self::file_path() else {
            error!("Could not determine config directory");
            return;
        };

        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("Failed to create config directory: {}", e);
                return;
            }
        }

        match ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            Ok(content) => {
                if let Err(e) = fs::write(&path, content) {
                    error!("Failed to save snap settings: {}", e);
                } else {
                    info!("Snap settings saved to: {:?}", path);
                }
            }
            Err(e) => {
                error!("Failed to serialize snap settings: {}", e);
            }
        }
    }
}

/// Write settings back to disk whenever they change after startup
pub(crate) fn save_settings_on_change(settings: Res<SnapSettings>) {
    if settings.is_changed() && !settings.is_added() {
        settings.save();
    }
}

/// F8 toggles snapping, F9 toggles grid gizmos
pub(crate) fn handle_settings_input(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut settings: ResMut<SnapSettings>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };

    if keyboard.just_pressed(KeyCode::F8) {
        settings.snapping_enabled = !settings.snapping_enabled;
        info!(
            "Grid snapping: {}",
            if settings.snapping_enabled { "ON" } else { "OFF" }
        );
    }

    if keyboard.just_pressed(KeyCode::F9) {
        settings.show_gizmos = !settings.show_gizmos;
        info!(
            "Grid gizmos: {}",
            if settings.show_gizmos { "VISIBLE" } else { "HIDDEN" }
        );
    }
}
