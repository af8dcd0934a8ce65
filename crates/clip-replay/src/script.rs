//! Replay scripts
//!
//! A script describes a canvas, a camera, the gizmo configuration, the
//! plane to attach and a sequence of pointer events, all in RON.

use std::path::Path;

use clip_core::{ClipPlane, ConfigError, GizmoConfig};
use clip_gizmo::{Camera, PointerButton, Viewport};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Camera placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSetup {
    pub eye: Vec3,
    pub target: Vec3,
    #[serde(default = "default_up")]
    pub up: Vec3,
}

fn default_up() -> Vec3 {
    Vec3::Y
}

impl Default for CameraSetup {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: default_up(),
        }
    }
}

impl CameraSetup {
    /// Build an orbit camera for a viewport
    pub fn build(&self, viewport: &Viewport) -> Camera {
        Camera::looking_at(self.eye, self.target, self.up, viewport.aspect())
    }
}

/// Plane attached before the first event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneSetup {
    #[serde(default = "default_plane_name")]
    pub name: String,
    pub position: Vec3,
    pub normal: Vec3,
}

fn default_plane_name() -> String {
    "Clip Plane".to_string()
}

impl Default for PlaneSetup {
    fn default() -> Self {
        Self {
            name: default_plane_name(),
            position: Vec3::ZERO,
            normal: Vec3::Z,
        }
    }
}

impl PlaneSetup {
    pub fn build(&self) -> ClipPlane {
        ClipPlane::new(self.name.clone(), self.position, self.normal)
    }
}

/// One scripted input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScriptEvent {
    /// Pointer moved to a canvas position
    Move(Vec2),
    /// Pointer moved onto the screen position of a world point
    MoveToWorld(Vec3),
    /// Button pressed at a canvas position
    Down(Vec2, PointerButton),
    /// Button pressed wherever the pointer last was
    Press(PointerButton),
    /// Button released
    Up(PointerButton),
    /// Pointer left the canvas
    Leave,
    /// Camera navigation drag by a pixel delta; ignored while suspended
    Orbit(Vec2),
    /// Show or hide the gizmo
    SetVisible(bool),
    /// Change the gizmo scale
    SetScale(f32),
    /// Release the attached plane
    Detach,
}

/// A complete replay script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub camera: CameraSetup,
    #[serde(default)]
    pub gizmo: GizmoConfig,
    #[serde(default)]
    pub plane: PlaneSetup,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

fn default_viewport() -> Viewport {
    Viewport::new(800.0, 600.0)
}

impl Script {
    /// Load a script from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScriptError::Io(e.to_string()))?;
        Self::from_ron(&content)
    }

    /// Parse a script from a RON string
    pub fn from_ron(content: &str) -> Result<Self, ScriptError> {
        let script: Script =
            ron::from_str(content).map_err(|e| ScriptError::Parse(e.to_string()))?;
        script.gizmo.validate()?;
        if !(script.viewport.width > 0.0 && script.viewport.height > 0.0) {
            return Err(ScriptError::InvalidViewport {
                width: script.viewport.width,
                height: script.viewport.height,
            });
        }
        Ok(script)
    }

    /// Save the script as pretty RON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ScriptError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ScriptError::Serialize(e.to_string()))?;
        std::fs::write(path.as_ref(), content).map_err(|e| ScriptError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Replay errors
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Script parse error: {0}")]
    Parse(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    #[error("Invalid gizmo configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Usage: {0}")]
    Usage(String),
}
