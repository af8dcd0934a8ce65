//! Drag planes and ray-plane intersection

use clip_core::{EDGE_ON_TOLERANCE, INTERSECT_EPSILON};
use glam::Vec3;

use super::ray::Ray;

/// A plane through `origin` with unit `normal`, shifted by `offset` along the normal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Pivot the plane is anchored to; intersection points are relative to it
    pub origin: Vec3,
    /// Unit normal
    pub normal: Vec3,
    /// Signed shift along the normal
    pub offset: f32,
}

impl Plane {
    /// Plane through `origin`
    pub fn new(origin: Vec3, normal: Vec3) -> Self {
        Self {
            origin,
            normal,
            offset: 0.0,
        }
    }

    /// Same plane moved `offset` along its normal
    pub fn with_offset(self, offset: f32) -> Self {
        Self { offset, ..self }
    }

    /// Flip the normal so it points toward `eye`
    pub fn facing(self, eye: Vec3) -> Self {
        if self.normal.dot(eye - self.origin) < 0.0 {
            Self {
                normal: -self.normal,
                ..self
            }
        } else {
            self
        }
    }
}

/// Intersect a ray with a plane.
///
/// Returns the hit point relative to `plane.origin`, or `None` when
/// `|dot(normal, direction)|` is within [`INTERSECT_EPSILON`].
pub fn intersect_plane(ray: &Ray, plane: &Plane) -> Option<Vec3> {
    let denom = plane.normal.dot(ray.direction);
    if denom.abs() <= INTERSECT_EPSILON {
        return None;
    }

    let d = -plane.origin.dot(plane.normal) - plane.offset;
    let t = -(plane.normal.dot(ray.origin) + d) / denom;

    Some(ray.at(t) - plane.origin)
}

/// Normal of a plane containing `axis`, chosen from the world basis.
///
/// When the X component dominates, the plane is built against world Y,
/// otherwise against world X, so the reference is never parallel to the axis.
pub fn translation_plane_normal(axis: Vec3) -> Vec3 {
    let abs_x = axis.x.abs();
    let reference = if abs_x > axis.y.abs() && abs_x > axis.z.abs() {
        Vec3::Y
    } else {
        Vec3::X
    };

    axis.cross(reference).cross(axis).normalize()
}

/// Normal of the plane used to drag along `axis` as seen from `to_eye`
/// (eye position minus pivot).
///
/// Uses [`translation_plane_normal`] unless the camera sees that plane
/// edge-on, in which case every pointer ray meets it at the eye. Then the
/// plane containing the axis and facing the camera is used instead.
///
/// Only the part of `to_eye` perpendicular to `axis` is considered, so the
/// result does not change while the pivot slides along the axis.
pub fn drag_plane_normal(axis: Vec3, to_eye: Vec3) -> Vec3 {
    let normal = translation_plane_normal(axis);
    let Some(across) = (to_eye - axis * to_eye.dot(axis)).try_normalize() else {
        return normal;
    };

    if normal.dot(across).abs() >= EDGE_ON_TOLERANCE {
        normal
    } else {
        across
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_axes() -> Vec<Vec3> {
        let mut axes = vec![
            Vec3::X,
            Vec3::Y,
            Vec3::Z,
            Vec3::NEG_X,
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-0.2, 0.9, 0.1),
        ];
        for i in 0..24 {
            let a = i as f32 * 0.37;
            let b = i as f32 * 0.91;
            axes.push(Vec3::new(a.cos() * b.sin(), a.sin() * b.sin(), b.cos()));
        }
        axes.into_iter().map(|a| a.normalize()).collect()
    }

    #[test]
    fn test_intersection_lies_on_plane() {
        let planes = [
            Plane::new(Vec3::ZERO, Vec3::Z),
            Plane::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 1.0, 0.0).normalize()),
            Plane::new(Vec3::new(-4.0, 0.5, 1.0), Vec3::Y).with_offset(1.5),
        ];
        let rays = [
            Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.1, 0.2, -1.0)),
            Ray::new(Vec3::new(5.0, -3.0, 2.0), Vec3::new(-1.0, 0.7, 0.3)),
            Ray::new(Vec3::new(0.0, 8.0, 0.0), Vec3::new(0.3, -1.0, 0.2)),
        ];

        for plane in &planes {
            for ray in &rays {
                if let Some(point) = intersect_plane(ray, plane) {
                    let height = plane.normal.dot(point) - plane.offset;
                    assert!(height.abs() < 1e-4, "height = {height}");
                }
            }
        }
    }

    #[test]
    fn test_parallel_ray_misses() {
        let plane = Plane::new(Vec3::ZERO, Vec3::Z);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 0.0, 0.004));
        assert!(intersect_plane(&ray, &plane).is_none());

        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 0.0, -0.01));
        assert!(intersect_plane(&ray, &plane).is_some());
    }

    #[test]
    fn test_intersection_is_relative_to_origin() {
        let plane = Plane::new(Vec3::new(2.0, 0.0, 0.0), Vec3::Z);
        let ray = Ray::new(Vec3::new(3.0, 1.0, 5.0), Vec3::NEG_Z);
        let point = intersect_plane(&ray, &plane).unwrap();
        assert!(point.abs_diff_eq(Vec3::new(1.0, 1.0, 0.0), 1e-6));
    }

    #[test]
    fn test_offset_moves_plane_along_normal() {
        let plane = Plane::new(Vec3::ZERO, Vec3::Z).with_offset(2.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        let point = intersect_plane(&ray, &plane).unwrap();
        assert!(point.abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), 1e-6));
    }

    #[test]
    fn test_facing_flips_toward_eye() {
        let plane = Plane::new(Vec3::ZERO, Vec3::Z).facing(Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(plane.normal, Vec3::NEG_Z);
        let plane = Plane::new(Vec3::ZERO, Vec3::Z).facing(Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(plane.normal, Vec3::Z);
    }

    #[test]
    fn test_translation_plane_contains_axis() {
        for axis in sample_axes() {
            let normal = translation_plane_normal(axis);
            assert!((normal.length() - 1.0).abs() < 1e-4, "axis {axis:?}");
            // Never parallel to the axis: the normal is perpendicular to it
            assert!(normal.dot(axis).abs() < 1e-3, "axis {axis:?}");
            assert!(normal.cross(axis).length() > 1.0 - 1e-3, "axis {axis:?}");
        }
    }

    #[test]
    fn test_translation_plane_reference_choice() {
        // X-dominant axis is paired with world Y
        assert!(translation_plane_normal(Vec3::X).abs_diff_eq(Vec3::Y, 1e-6));
        // Otherwise world X
        assert!(translation_plane_normal(Vec3::Y).abs_diff_eq(Vec3::X, 1e-6));
        assert!(translation_plane_normal(Vec3::Z).abs_diff_eq(Vec3::X, 1e-6));
    }

    #[test]
    fn test_drag_plane_avoids_edge_on_view() {
        // Camera on +Z: the Y-normal plane for the X axis is edge-on
        let normal = drag_plane_normal(Vec3::X, Vec3::new(0.0, 0.0, 10.0));
        assert!(normal.abs_diff_eq(Vec3::Z, 1e-6));

        // Camera above: the default plane is kept
        let normal = drag_plane_normal(Vec3::X, Vec3::new(0.0, 10.0, 3.0));
        assert!(normal.abs_diff_eq(Vec3::Y, 1e-6));
    }

    #[test]
    fn test_drag_plane_stable_along_axis() {
        let axis = Vec3::X;
        let to_eye = Vec3::new(0.0, 0.02, 10.0);
        let before = drag_plane_normal(axis, to_eye);
        let after = drag_plane_normal(axis, to_eye - axis * 7.5);
        assert!(before.abs_diff_eq(after, 1e-6));
    }

    #[test]
    fn test_drag_plane_contains_axis() {
        let to_eye = Vec3::new(3.0, -7.0, 2.0);
        for axis in sample_axes() {
            let normal = drag_plane_normal(axis, to_eye);
            assert!(normal.dot(axis).abs() < 1e-3, "axis {axis:?}");
        }
    }
}
