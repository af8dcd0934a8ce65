//! Pointer-to-world ray projection

use glam::{Vec2, Vec3};

use crate::camera::{CameraView, Viewport};

/// A world-space ray. The direction is not necessarily unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point
    pub origin: Vec3,
    /// Direction (not necessarily normalized)
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Same ray with a unit-length direction. A zero direction is kept as is.
    pub fn normalized(self) -> Self {
        Self {
            origin: self.origin,
            direction: self.direction.normalize_or_zero(),
        }
    }

    /// Point at parameter `t`
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Project a pointer position (canvas pixels) into a world-space ray from the eye.
///
/// The NDC point at depth 0 is unprojected through the inverse
/// view-projection matrix; the direction is that point minus the eye, left
/// unnormalized.
pub fn pointer_ray(pointer: Vec2, viewport: &Viewport, camera: &dyn CameraView) -> Ray {
    let ndc = viewport.to_ndc(pointer);
    let inv_view_proj = (camera.projection_matrix() * camera.view_matrix()).inverse();

    let world = inv_view_proj * glam::Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
    let world = world.truncate() / world.w;

    let eye = camera.eye();
    Ray::new(eye, world - eye)
}

/// Project a world point to canvas pixels, the inverse of [`pointer_ray`].
///
/// Returns `None` for points behind the camera.
pub fn world_to_pointer(point: Vec3, viewport: &Viewport, camera: &dyn CameraView) -> Option<Vec2> {
    let clip = camera.projection_matrix() * camera.view_matrix() * point.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(Vec2::new(
        (ndc.x + 1.0) * 0.5 * viewport.width,
        (1.0 - ndc.y) * 0.5 * viewport.height,
    ))
}
