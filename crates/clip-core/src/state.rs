//! Gizmo transform state

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::constants::{DEFAULT_SCALE, REFERENCE_DIRECTION};

/// Position, orientation and scale of the gizmo.
///
/// This is the single source of truth for the manipulated transform. The
/// attached target and the visual handles are derived from it after every
/// change. The orientation is relative to [`REFERENCE_DIRECTION`] and is
/// renormalized whenever it is composed with another rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GizmoState {
    position: Vec3,
    orientation: Quat,
    scale: f32,
}

impl Default for GizmoState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            scale: DEFAULT_SCALE,
        }
    }
}

impl GizmoState {
    /// Create a state at the origin with identity orientation
    pub fn new(scale: f32) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    /// Create a state matching a plane given by a point and a normal.
    ///
    /// The orientation is the shortest arc taking the reference direction to
    /// `normal`. A zero normal falls back to the reference direction.
    pub fn from_plane(position: Vec3, normal: Vec3, scale: f32) -> Self {
        let normal = normal.try_normalize().unwrap_or(REFERENCE_DIRECTION);
        Self {
            position,
            orientation: Quat::from_rotation_arc(REFERENCE_DIRECTION, normal),
            scale,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    /// Direction of a local axis in world space (unit length)
    pub fn world_axis(&self, axis: Axis) -> Vec3 {
        (self.orientation * axis.direction()).normalize()
    }

    /// Reference direction rotated by the current orientation
    pub fn normal(&self) -> Vec3 {
        (self.orientation * REFERENCE_DIRECTION).normalize()
    }

    /// World transform of the gizmo root (scale, rotation, translation)
    pub fn transform(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.orientation,
            self.position,
        )
    }

    /// Move the pivot by `distance` along a world-space direction
    pub fn translate_along(&mut self, world_axis: Vec3, distance: f32) {
        self.position += world_axis * distance;
    }

    /// Compose a rotation of `degrees` about a local axis onto the orientation
    pub fn rotate_local(&mut self, axis: Axis, degrees: f32) {
        let rotation = Quat::from_axis_angle(axis.direction(), degrees.to_radians());
        self.orientation = (self.orientation * rotation).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_state_points_at_reference() {
        let state = GizmoState::default();
        assert_eq!(state.normal(), REFERENCE_DIRECTION);
        assert_eq!(state.world_axis(Axis::X), Vec3::X);
    }

    #[test]
    fn test_from_plane_matches_normal() {
        let normal = Vec3::new(1.0, 1.0, 0.0);
        let state = GizmoState::from_plane(Vec3::new(1.0, 2.0, 3.0), normal, 2.0);
        assert!(state.normal().abs_diff_eq(normal.normalize(), 1e-5));
        assert_eq!(state.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(state.scale(), 2.0);
    }

    #[test]
    fn test_from_plane_zero_normal_falls_back() {
        let state = GizmoState::from_plane(Vec3::ZERO, Vec3::ZERO, 1.0);
        assert_eq!(state.orientation(), Quat::IDENTITY);
    }

    #[test]
    fn test_rotate_local_about_world_axis() {
        let mut state = GizmoState::from_plane(Vec3::ZERO, Vec3::X, 1.0);
        let world_y_before = state.world_axis(Axis::Y);
        state.rotate_local(Axis::Y, 90.0);
        // Rotating about a local axis leaves that axis fixed in world space
        assert!(state.world_axis(Axis::Y).abs_diff_eq(world_y_before, 1e-5));
        assert_relative_eq!(state.orientation().length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_translate_along() {
        let mut state = GizmoState::default();
        state.translate_along(Vec3::Y, 2.5);
        assert_eq!(state.position(), Vec3::new(0.0, 2.5, 0.0));
    }

    #[test]
    fn test_transform_places_origin_at_position() {
        let state = GizmoState::from_plane(Vec3::new(4.0, 0.0, 0.0), Vec3::Y, 3.0);
        let origin = state.transform().transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::new(4.0, 0.0, 0.0), 1e-6));
        let tip = state.transform().transform_point3(Vec3::Z);
        assert!(tip.abs_diff_eq(Vec3::new(4.0, 3.0, 0.0), 1e-5));
    }
}
