//! Axis-constrained translation and rotation
//!
//! Each drag step is a free function taking the gizmo state by mutable
//! reference together with the pair of pointer rays for the step. A step
//! that hits a degenerate configuration returns `None` and leaves the state
//! untouched.

mod rotate;
mod translate;

pub use rotate::{angle_from_dot, rotate_about_axis, signed_angle};
pub use translate::translate_along_axis;

use glam::{Vec2, Vec3};

use crate::camera::{CameraView, Viewport};
use crate::geometry::{Ray, pointer_ray};

/// Pointer rays for one drag step
#[derive(Debug, Clone, Copy)]
pub struct DragRays {
    /// Ray through the previously processed pointer position
    pub previous: Ray,
    /// Ray through the current pointer position
    pub current: Ray,
    /// Camera eye position
    pub eye: Vec3,
}

impl DragRays {
    /// Project both pointer positions through the camera. Directions are normalized.
    pub fn from_pointers(
        previous: Vec2,
        current: Vec2,
        viewport: &Viewport,
        camera: &dyn CameraView,
    ) -> Self {
        Self {
            previous: pointer_ray(previous, viewport, camera).normalized(),
            current: pointer_ray(current, viewport, camera).normalized(),
            eye: camera.eye(),
        }
    }
}
