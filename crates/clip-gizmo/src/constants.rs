//! Constants for clip-gizmo

/// Pick proxy proportions, as fractions of the scaled handle radius
pub mod pick {
    /// Arrow length
    pub const ARROW_LENGTH: f32 = 1.25;
    /// Radius of the cylinder around each arrow
    pub const ARROW_HIT_RADIUS: f32 = 0.06;
    /// Half-width of the band around each rotation curve
    pub const RING_HIT_THICKNESS: f32 = 0.06;
    /// Radius of the center ball
    pub const BALL_RADIUS: f32 = 0.08;
}
