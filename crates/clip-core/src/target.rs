//! Clipping plane manipulated by the gizmo

use std::sync::Arc;

use glam::Vec3;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::REFERENCE_DIRECTION;

/// Clipping plane shared between the host scene and the gizmo
pub type SharedClipPlane = Arc<Mutex<ClipPlane>>;

/// A clipping plane given by a point on the plane and its normal.
///
/// Geometry on the positive side of the normal is clipped away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipPlane {
    pub id: Uuid,
    pub name: String,
    /// Point on the plane
    pub position: Vec3,
    /// Plane normal (unit length)
    pub normal: Vec3,
    /// Whether the plane currently clips the scene
    pub active: bool,
}

impl Default for ClipPlane {
    fn default() -> Self {
        Self::new("Clip Plane", Vec3::ZERO, REFERENCE_DIRECTION)
    }
}

impl ClipPlane {
    /// Create a new active plane. A zero normal falls back to the reference direction.
    pub fn new(name: impl Into<String>, position: Vec3, normal: Vec3) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            position,
            normal: normal.try_normalize().unwrap_or(REFERENCE_DIRECTION),
            active: true,
        }
    }

    /// Wrap the plane for sharing with a gizmo
    pub fn into_shared(self) -> SharedClipPlane {
        Arc::new(Mutex::new(self))
    }

    /// Signed distance of a point from the plane, positive on the normal side
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        (point - self.position).dot(self.normal)
    }

    /// Whether a point is removed by this plane
    pub fn clips(&self, point: Vec3) -> bool {
        self.active && self.signed_distance(point) > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_normal() {
        let plane = ClipPlane::new("p", Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(plane.normal, Vec3::Y);
    }

    #[test]
    fn test_zero_normal_uses_reference() {
        let plane = ClipPlane::new("p", Vec3::ZERO, Vec3::ZERO);
        assert_eq!(plane.normal, REFERENCE_DIRECTION);
    }

    #[test]
    fn test_signed_distance_and_clipping() {
        let mut plane = ClipPlane::new("p", Vec3::new(0.0, 0.0, 1.0), Vec3::Z);
        assert_eq!(plane.signed_distance(Vec3::new(5.0, 5.0, 3.0)), 2.0);
        assert!(plane.clips(Vec3::new(0.0, 0.0, 2.0)));
        assert!(!plane.clips(Vec3::ZERO));

        plane.active = false;
        assert!(!plane.clips(Vec3::new(0.0, 0.0, 2.0)));
    }

    #[test]
    fn test_shared_plane_is_mutable() {
        let shared = ClipPlane::default().into_shared();
        shared.lock().position = Vec3::ONE;
        assert_eq!(shared.lock().position, Vec3::ONE);
    }
}
