//! Gizmo configuration
//!
//! Settings that can be serialized and loaded from RON configuration files.
//! Every field has a default, so partial files are accepted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_RADIUS, DEFAULT_SCALE, ROTATION_FALLBACK_OFFSET, X_AXIS_COLOR, Y_AXIS_COLOR,
    Z_AXIS_COLOR,
};

/// Gizmo configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GizmoConfig {
    /// Whether the gizmo is shown (and accepts pointer input)
    pub visible: bool,
    /// Handle radius in world units before scaling
    pub radius: f32,
    /// Uniform gizmo scale multiplier
    pub scale: f32,
    /// Distance the rotation fallback plane is moved toward the camera
    pub rotation_fallback_offset: f32,
    /// X-axis color (RGBA)
    pub x_axis_color: [f32; 4],
    /// Y-axis color (RGBA)
    pub y_axis_color: [f32; 4],
    /// Z-axis color (RGBA)
    pub z_axis_color: [f32; 4],
}

impl Default for GizmoConfig {
    fn default() -> Self {
        Self {
            visible: true,
            radius: DEFAULT_RADIUS,
            scale: DEFAULT_SCALE,
            rotation_fallback_offset: ROTATION_FALLBACK_OFFSET,
            x_axis_color: X_AXIS_COLOR,
            y_axis_color: Y_AXIS_COLOR,
            z_axis_color: Z_AXIS_COLOR,
        }
    }
}

impl GizmoConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that every numeric field is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("radius", self.radius)?;
        check_positive("scale", self.scale)?;
        check_finite("rotation_fallback_offset", self.rotation_fallback_offset)?;
        Ok(())
    }

    /// Save configuration to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path.as_ref(), content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }

    /// Load and validate configuration from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_ron(&content)
    }

    /// Parse and validate configuration from a RON string
    pub fn from_ron(content: &str) -> Result<Self, ConfigError> {
        let config: GizmoConfig =
            ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Reject non-finite or non-positive values
pub fn check_positive(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue { field, value })
    }
}

/// Reject NaN and infinities
pub fn check_finite(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue { field, value })
    }
}

/// Configuration-related errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GizmoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.radius, 5.0);
        assert_eq!(config.scale, 1.0);
        assert!(config.visible);
    }

    #[test]
    fn test_rejects_bad_values() {
        let config = GizmoConfig {
            radius: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "radius", .. })
        ));

        let config = GizmoConfig {
            scale: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "scale", .. })
        ));

        let config = GizmoConfig {
            rotation_fallback_offset: f32::INFINITY,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let config = GizmoConfig::from_ron("(radius: 2.5, visible: false)").unwrap();
        assert_eq!(config.radius, 2.5);
        assert!(!config.visible);
        assert_eq!(config.scale, DEFAULT_SCALE);
    }

    #[test]
    fn test_invalid_ron_value_is_rejected() {
        let result = GizmoConfig::from_ron("(scale: 0.0)");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_save_and_load() {
        use tempfile::tempdir;

        let temp = tempdir().unwrap();
        let path = temp.path().join("gizmo.ron");
        let config = GizmoConfig {
            radius: 3.0,
            rotation_fallback_offset: 0.5,
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = GizmoConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let result = GizmoConfig::load("/nonexistent/gizmo.ron");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
