//! Rotation about a single gizmo axis

use clip_core::{Axis, GizmoState};
use glam::Vec3;

use super::DragRays;
use crate::geometry::{Plane, drag_plane_normal, intersect_plane};

/// Angle in degrees between two unit vectors given their dot product.
///
/// The dot product is clamped to `[-1, 1]` first; rounding can push it
/// slightly outside the domain of `acos`.
pub fn angle_from_dot(dot: f32) -> f32 {
    dot.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Signed angle in degrees taking `from` to `to` about `axis`.
///
/// Positive when `cross(from, to)` points along `axis`. Returns `None` if
/// either vector has no length.
pub fn signed_angle(from: Vec3, to: Vec3, axis: Vec3) -> Option<f32> {
    let from = from.try_normalize()?;
    let to = to.try_normalize()?;

    let angle = angle_from_dot(from.dot(to));
    if from.cross(to).dot(axis) < 0.0 {
        Some(-angle)
    } else {
        Some(angle)
    }
}

/// Rotate the gizmo about one of its local axes by the pointer motion of one step.
///
/// The rays are intersected with the rotation plane (normal along the world
/// axis, through the pivot). When either ray misses it, a plane containing
/// the axis, facing the camera and moved `fallback_offset` toward it is
/// used, and the hits are flattened onto the rotation plane. Returns the
/// applied angle in degrees, or `None` if no usable pair of points exists.
pub fn rotate_about_axis(
    state: &mut GizmoState,
    axis: Axis,
    rays: &DragRays,
    fallback_offset: f32,
) -> Option<f32> {
    let pivot = state.position();
    let world_axis = state.world_axis(axis);

    let (from, to) = match rotation_plane_hits(pivot, world_axis, rays) {
        Some(hits) => hits,
        None => fallback_hits(pivot, world_axis, rays, fallback_offset)?,
    };

    let angle = signed_angle(from, to, world_axis)?;
    if !angle.is_finite() {
        return None;
    }

    state.rotate_local(axis, angle);
    Some(angle)
}

fn rotation_plane_hits(pivot: Vec3, world_axis: Vec3, rays: &DragRays) -> Option<(Vec3, Vec3)> {
    let plane = Plane::new(pivot, world_axis);
    let from = intersect_plane(&rays.previous, &plane)?;
    let to = intersect_plane(&rays.current, &plane)?;
    Some((from, to))
}

fn fallback_hits(
    pivot: Vec3,
    world_axis: Vec3,
    rays: &DragRays,
    offset: f32,
) -> Option<(Vec3, Vec3)> {
    let plane = Plane::new(pivot, drag_plane_normal(world_axis, rays.eye - pivot))
        .facing(rays.eye)
        .with_offset(offset);

    let flatten = |p: Vec3| p - world_axis * p.dot(world_axis);
    let from = intersect_plane(&rays.previous, &plane)?;
    let to = intersect_plane(&rays.current, &plane)?;
    Some((flatten(from), flatten(to)))
}
