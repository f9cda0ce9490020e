//! Application settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use shared::Dimensions;

/// Grid display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    /// Show grid
    pub visible: bool,
    /// Grid cell size in world units
    pub size: f32,
    /// Number of grid lines in each direction from origin
    pub range: i32,
    /// Grid line opacity (0.0 - 1.0)
    pub opacity: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            visible: true,
            size: 1.0,
            range: 10,
            opacity: 0.6,
        }
    }
}

/// Viewport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportSettings {
    /// Background color RGB
    pub background_color: [u8; 3],
    /// Wireframe color of unselected meshes RGB
    pub mesh_color: [u8; 3],
    /// Show X/Y/Z axis labels at the origin
    pub show_axes: bool,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            background_color: [30, 30, 35],
            mesh_color: [170, 175, 185],
            show_axes: true,
        }
    }
}

/// Object-to-object and ground snapping while translating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapSettings {
    /// Enable snapping
    pub enabled: bool,
    /// Maximum face distance (world units) that still snaps
    pub threshold: f32,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: 0.2,
        }
    }
}

/// Highlight box colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightSettings {
    /// Selected object RGB
    pub active_color: [u8; 3],
    /// Other objects during a translate drag RGB
    pub inactive_color: [u8; 3],
    pub thickness: f32,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            active_color: [255, 200, 40],
            inactive_color: [110, 140, 170],
            thickness: 1.5,
        }
    }
}

/// Gizmo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GizmoSettings {
    /// Handle length in screen pixels
    pub length: f32,
    /// Smallest per-axis scale a scale drag may reach
    pub min_scale: f32,
}

impl Default for GizmoSettings {
    fn default() -> Self {
        Self {
            length: 90.0,
            min_scale: 0.01,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { font_size: 14.0 }
    }
}

/// Dimension display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionSettings {
    /// Number of decimal places for dimension values
    pub precision: usize,
    /// Show W x H x D labels next to the selected object
    pub show_labels: bool,
    /// Values pre-filled in the import dialog
    pub import_defaults: Dimensions,
}

impl Default for DimensionSettings {
    fn default() -> Self {
        Self {
            precision: 2,
            show_labels: true,
            import_defaults: Dimensions::new(1.0, 1.0, 1.0),
        }
    }
}

/// All application settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppSettings {
    /// Grid settings
    #[serde(default)]
    pub grid: GridSettings,
    /// Viewport settings
    #[serde(default)]
    pub viewport: ViewportSettings,
    /// Snap settings
    #[serde(default)]
    pub snap: SnapSettings,
    /// Highlight settings
    #[serde(default)]
    pub highlight: HighlightSettings,
    /// Gizmo settings
    #[serde(default)]
    pub gizmo: GizmoSettings,
    /// UI settings
    #[serde(default)]
    pub ui: UiSettings,
    /// Dimension display settings
    #[serde(default)]
    pub dimensions: DimensionSettings,
}

impl AppSettings {
    fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "meshstage", "meshstage")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        let Some(config_path) = Self::config_path() else {
            tracing::warn!("No config directory available, using default settings");
            return Self::default();
        };
        match std::fs::read_to_string(&config_path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Ignoring malformed {}: {}", config_path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save settings to file
    pub fn save(&self) {
        let Some(config_path) = Self::config_path() else {
            return;
        };
        let result = config_path
            .parent()
            .map(std::fs::create_dir_all)
            .transpose()
            .and_then(|_| {
                let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
                std::fs::write(&config_path, json)
            });
        match result {
            Ok(()) => tracing::debug!("Settings saved to {}", config_path.display()),
            Err(e) => tracing::error!("Failed to save settings: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = AppSettings::default();
        assert!(s.snap.enabled);
        assert_eq!(s.snap.threshold, 0.2);
        assert_eq!(s.dimensions.precision, 2);
        assert_eq!(s.dimensions.import_defaults, Dimensions::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let s: AppSettings = serde_json::from_str(r#"{"snap":{"enabled":false,"threshold":0.5}}"#).unwrap();
        assert!(!s.snap.enabled);
        assert_eq!(s.snap.threshold, 0.5);
        assert_eq!(s.grid, GridSettings::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut s = AppSettings::default();
        s.highlight.active_color = [1, 2, 3];
        let json = serde_json::to_string(&s).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
