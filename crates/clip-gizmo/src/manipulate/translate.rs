//! Translation along a single gizmo axis

use clip_core::{Axis, GizmoState};

use super::DragRays;
use crate::geometry::{Plane, drag_plane_normal, intersect_plane};

/// Move the gizmo along one of its local axes by the pointer motion of one step.
///
/// Both rays are intersected with a plane that contains the world-space axis
/// and passes through the pivot; the difference of the hits projected onto
/// the axis is the displacement. Returns the signed displacement, or `None`
/// if either ray misses the plane.
pub fn translate_along_axis(state: &mut GizmoState, axis: Axis, rays: &DragRays) -> Option<f32> {
    let pivot = state.position();
    let world_axis = state.world_axis(axis);
    let plane = Plane::new(pivot, drag_plane_normal(world_axis, rays.eye - pivot));

    let from = intersect_plane(&rays.previous, &plane)?;
    let to = intersect_plane(&rays.current, &plane)?;

    let distance = (to - from).dot(world_axis);
    if !distance.is_finite() {
        return None;
    }

    state.translate_along(world_axis, distance);
    Some(distance)
}
