//! Global constants for clip-core

use glam::Vec3;

/// Direction the identity orientation points at; the attached plane normal
/// is this vector rotated by the gizmo orientation
pub const REFERENCE_DIRECTION: Vec3 = Vec3::Z;

/// Default handle radius (arrow length and ring radius)
pub const DEFAULT_RADIUS: f32 = 5.0;

/// Default uniform gizmo scale
pub const DEFAULT_SCALE: f32 = 1.0;

/// Rays whose direction makes `|dot(normal, dir)|` at most this value are
/// treated as parallel to the plane
pub const INTERSECT_EPSILON: f32 = 0.005;

/// Default distance the rotation fallback plane is moved toward the camera
pub const ROTATION_FALLBACK_OFFSET: f32 = 1.0;

/// A translation plane whose normal is this close to perpendicular to the
/// eye direction is considered edge-on to the camera
pub const EDGE_ON_TOLERANCE: f32 = 0.05;

/// Allowed drift of the orientation quaternion length
pub const QUAT_LENGTH_TOLERANCE: f32 = 1e-5;

/// Default axis colors (RGBA)
pub const X_AXIS_COLOR: [f32; 4] = [1.0, 0.2, 0.2, 1.0];
/// Y axis color
pub const Y_AXIS_COLOR: [f32; 4] = [0.2, 1.0, 0.2, 1.0];
/// Z axis color
pub const Z_AXIS_COLOR: [f32; 4] = [0.2, 0.2, 1.0, 1.0];
