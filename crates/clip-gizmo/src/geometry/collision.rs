//! Ray casts against handle proxy shapes
//!
//! These back the geometric hit-test oracle. All functions expect a ray with
//! a unit direction and return the ray parameter of the nearest hit in front
//! of the origin.

use glam::Vec3;

use super::ray::Ray;

/// Ray against a finite cylinder between `start` and `end`.
///
/// The ray and the cylinder axis are projected onto the plane perpendicular
/// to the axis, which turns the surface test into a 2D quadratic:
/// ```text
/// |o + t * d|² = radius²
/// ```
/// where `d` and `o` are the projected direction and origin offset. The
/// nearer root is then rejected if it falls outside the cylinder's length.
pub fn ray_cylinder_intersection(ray: &Ray, start: Vec3, end: Vec3, radius: f32) -> Option<f32> {
    let span = end - start;
    let length = span.length();
    let axis = span.try_normalize()?;

    let rel = ray.origin - start;
    let d = ray.direction - axis * ray.direction.dot(axis);
    let o = rel - axis * rel.dot(axis);

    let a = d.dot(d);
    if a <= f32::EPSILON {
        // Ray runs along the axis; only the end caps could be hit
        return None;
    }
    let b = 2.0 * d.dot(o);
    let c = o.dot(o) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    if t < 0.0 {
        return None;
    }

    let along = (ray.at(t) - start).dot(axis);
    if !(0.0..=length).contains(&along) {
        return None;
    }

    Some(t)
}

/// Ray against a flat ring (annulus) of the given radius and half-width
/// lying in the plane through `center` perpendicular to `normal`.
pub fn ray_ring_intersection(
    ray: &Ray,
    center: Vec3,
    normal: Vec3,
    radius: f32,
    thickness: f32,
) -> Option<f32> {
    let denom = ray.direction.dot(normal);
    if denom.abs() < 1e-6 {
        return None;
    }

    let t = (center - ray.origin).dot(normal) / denom;
    if t < 0.0 {
        return None;
    }

    let from_center = (ray.at(t) - center).length();
    if (from_center - radius).abs() <= thickness {
        Some(t)
    } else {
        None
    }
}

/// Ray against a sphere
pub fn ray_sphere_intersection(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let a = ray.direction.dot(ray.direction);
    let b = 2.0 * oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 || a <= f32::EPSILON {
        return None;
    }

    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    if t > 0.0 { Some(t) } else { None }
}
