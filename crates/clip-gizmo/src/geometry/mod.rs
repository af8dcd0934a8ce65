//! Ray and plane geometry used by picking and dragging

mod collision;
mod plane;
mod ray;

pub use collision::{ray_cylinder_intersection, ray_ring_intersection, ray_sphere_intersection};
pub use plane::{Plane, drag_plane_normal, intersect_plane, translation_plane_normal};
pub use ray::{Ray, pointer_ray, world_to_pointer};
