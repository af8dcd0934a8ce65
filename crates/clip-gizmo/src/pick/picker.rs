//! Geometric hit-test oracle

use clip_core::{Axis, GizmoState};
use glam::Vec2;

use super::{Hit, HitTest};
use crate::camera::{CameraView, Viewport};
use crate::constants::pick::{ARROW_HIT_RADIUS, ARROW_LENGTH, BALL_RADIUS, RING_HIT_THICKNESS};
use crate::geometry::{
    pointer_ray, ray_cylinder_intersection, ray_ring_intersection, ray_sphere_intersection,
};
use crate::handles::HandleId;

/// Picks handles by casting the pointer ray against simple proxy shapes:
/// a cylinder per arrow, a flat ring per rotation curve and a sphere for
/// the center ball. The nearest hit wins.
pub struct HandlePicker<'a> {
    camera: &'a dyn CameraView,
    viewport: Viewport,
    state: GizmoState,
    radius: f32,
}

impl<'a> HandlePicker<'a> {
    /// Create a picker for the gizmo in `state` with handles of `radius`
    pub fn new(
        camera: &'a dyn CameraView,
        viewport: Viewport,
        state: GizmoState,
        radius: f32,
    ) -> Self {
        Self {
            camera,
            viewport,
            state,
            radius,
        }
    }
}

impl HitTest for HandlePicker<'_> {
    fn pick(&self, pointer: Vec2) -> Option<Hit> {
        let ray = pointer_ray(pointer, &self.viewport, self.camera).normalized();
        let pivot = self.state.position();
        let size = self.radius * self.state.scale();

        let mut best: Option<(HandleId, f32)> = None;
        let mut consider = |handle: HandleId, t: Option<f32>| {
            if let Some(t) = t {
                if best.is_none_or(|(_, best_t)| t < best_t) {
                    best = Some((handle, t));
                }
            }
        };

        for axis in Axis::ALL {
            let direction = self.state.world_axis(axis);
            consider(
                HandleId::Arrow(axis),
                ray_cylinder_intersection(
                    &ray,
                    pivot,
                    pivot + direction * size * ARROW_LENGTH,
                    size * ARROW_HIT_RADIUS,
                ),
            );
            consider(
                HandleId::CurvePicker(axis),
                ray_ring_intersection(&ray, pivot, direction, size, size * RING_HIT_THICKNESS),
            );
        }
        consider(
            HandleId::Ball,
            ray_sphere_intersection(&ray, pivot, size * BALL_RADIUS),
        );

        best.map(|(handle, t)| Hit {
            handle,
            world_pos: Some(ray.at(t)),
        })
    }
}
