//! Camera interfaces and a reference orbit camera
//!
//! The gizmo only reads a camera through [`CameraView`] and only toggles the
//! host's camera navigation through [`OrbitControl`]. [`Camera`] and
//! [`OrbitControls`] are ready-made implementations for hosts without their
//! own.

use glam::{Mat4, Vec2, Vec3};

/// Read-only view of a camera
pub trait CameraView {
    /// World-to-view matrix
    fn view_matrix(&self) -> Mat4;
    /// View-to-clip matrix
    fn projection_matrix(&self) -> Mat4;
    /// Eye position in world space
    fn eye(&self) -> Vec3;
}

/// Host camera navigation that must be suspended while the gizmo is dragged
pub trait OrbitControl {
    /// Enable or disable camera navigation
    fn set_active(&mut self, active: bool);
    /// Whether camera navigation is currently enabled
    fn is_active(&self) -> bool;
}

/// Canvas size in pixels
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Viewport {
    /// Create a viewport of the given pixel size
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    /// Map a pixel coordinate to normalized device coordinates.
    ///
    /// Y is flipped: pixel rows grow downward, NDC Y grows upward.
    pub fn to_ndc(&self, pixel: Vec2) -> Vec2 {
        Vec2::new(
            (2.0 * pixel.x / self.width) - 1.0,
            1.0 - (2.0 * pixel.y / self.height),
        )
    }
}

/// Orbit camera
pub struct Camera {
    /// Eye position
    pub position: Vec3,
    /// Orbit center
    pub target: Vec3,
    /// Up vector for the view matrix
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Width over height
    pub aspect: f32,
    /// Near clip distance
    pub near: f32,
    /// Far clip distance
    pub far: f32,
    // Orbit state (Z-up)
    /// Angle around Z in radians
    pub yaw: f32,
    /// Elevation in radians
    pub pitch: f32,
    /// Distance from the target
    pub distance: f32,
}

impl Camera {
    /// Create a new camera with default parameters
    pub fn new(aspect: f32) -> Self {
        let yaw = 45.0_f32.to_radians();
        let pitch = 30.0_f32.to_radians();
        let distance = 20.0;
        let target = Vec3::ZERO;

        let mut camera = Self {
            position: Vec3::ZERO,
            target,
            up: Vec3::Z,
            fov: 40.0_f32.to_radians(),
            aspect,
            near: 0.1,
            far: 1000.0,
            yaw,
            pitch,
            distance,
        };
        camera.update_position_from_orbit();
        camera
    }

    /// Create a camera at `position` looking at `target`.
    ///
    /// Orbit parameters are derived assuming a Z-up world; `up` is only used
    /// for the view matrix.
    pub fn looking_at(position: Vec3, target: Vec3, up: Vec3, aspect: f32) -> Self {
        let offset = position - target;
        let distance = offset.length().max(1e-3);
        Self {
            position,
            target,
            up,
            fov: 40.0_f32.to_radians(),
            aspect,
            near: 0.1,
            far: 1000.0,
            yaw: offset.y.atan2(offset.x),
            pitch: (offset.z / distance).clamp(-1.0, 1.0).asin(),
            distance,
        }
    }

    /// Orbit the camera around the target
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch =
            (self.pitch + delta_pitch).clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
        self.update_position_from_orbit();
    }

    fn update_position_from_orbit(&mut self) {
        let x = self.distance * self.pitch.cos() * self.yaw.cos();
        let y = self.distance * self.pitch.cos() * self.yaw.sin();
        let z = self.distance * self.pitch.sin();
        self.position = self.target + Vec3::new(x, y, z);
    }
}

impl CameraView for Camera {
    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    fn eye(&self) -> Vec3 {
        self.position
    }
}

/// Mouse-driven camera navigation that the gizmo can suspend
#[derive(Debug, Clone)]
pub struct OrbitControls {
    active: bool,
    /// Radians per pixel of drag
    pub orbit_sensitivity: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            active: true,
            orbit_sensitivity: 0.005,
        }
    }
}

impl OrbitControls {
    /// Orbit the camera by a pixel drag delta. Returns false when suspended.
    pub fn drag(&self, camera: &mut Camera, delta: Vec2) -> bool {
        if !self.active {
            return false;
        }
        camera.orbit(
            -delta.x * self.orbit_sensitivity,
            delta.y * self.orbit_sensitivity,
        );
        true
    }
}

impl OrbitControl for OrbitControls {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
