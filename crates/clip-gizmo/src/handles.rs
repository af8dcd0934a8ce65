//! Visual handles of the gizmo
//!
//! The gizmo does not build meshes. It tracks which handles are visible and
//! highlighted and computes each handle's world transform, which a renderer
//! consumes as [`HandleInstance`] records.

use bytemuck::{Pod, Zeroable};
use clip_core::{Axis, GizmoConfig, GizmoState};
use glam::{Mat4, Quat};
use serde::{Deserialize, Serialize};

/// Identifier of one visual handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleId {
    /// Translation arrow along an axis
    Arrow(Axis),
    /// Visible rotation curve around an axis
    Curve(Axis),
    /// Wider invisible pick proxy for a rotation curve
    CurvePicker(Axis),
    /// Full ring shown while rotating about an axis
    Hoop(Axis),
    /// Center ball at the pivot
    Ball,
    /// Plane indicator facing along the normal
    PlaneFront,
    /// Plane indicator facing against the normal
    PlaneBack,
}

impl HandleId {
    /// Number of handles
    pub const COUNT: usize = 15;

    /// Every handle, in index order
    pub const ALL: [HandleId; Self::COUNT] = [
        HandleId::Arrow(Axis::X),
        HandleId::Arrow(Axis::Y),
        HandleId::Arrow(Axis::Z),
        HandleId::Curve(Axis::X),
        HandleId::Curve(Axis::Y),
        HandleId::Curve(Axis::Z),
        HandleId::CurvePicker(Axis::X),
        HandleId::CurvePicker(Axis::Y),
        HandleId::CurvePicker(Axis::Z),
        HandleId::Hoop(Axis::X),
        HandleId::Hoop(Axis::Y),
        HandleId::Hoop(Axis::Z),
        HandleId::Ball,
        HandleId::PlaneFront,
        HandleId::PlaneBack,
    ];

    /// Position of the handle in [`HandleId::ALL`]
    pub fn index(self) -> usize {
        match self {
            HandleId::Arrow(axis) => axis.to_index(),
            HandleId::Curve(axis) => 3 + axis.to_index(),
            HandleId::CurvePicker(axis) => 6 + axis.to_index(),
            HandleId::Hoop(axis) => 9 + axis.to_index(),
            HandleId::Ball => 12,
            HandleId::PlaneFront => 13,
            HandleId::PlaneBack => 14,
        }
    }

    /// Axis the handle belongs to, if any
    pub fn axis(self) -> Option<Axis> {
        match self {
            HandleId::Arrow(axis)
            | HandleId::Curve(axis)
            | HandleId::CurvePicker(axis)
            | HandleId::Hoop(axis) => Some(axis),
            HandleId::Ball | HandleId::PlaneFront | HandleId::PlaneBack => None,
        }
    }

    /// Hoops are only shown while their rotation is pending or active
    pub fn is_hoop(self) -> bool {
        matches!(self, HandleId::Hoop(_))
    }

    /// Orientation of the handle relative to the gizmo root.
    ///
    /// Axis handles are modelled along (arrows) or around (rings) local +Z
    /// and turned onto their axis; the back plane indicator is flipped.
    pub fn local_rotation(self) -> Quat {
        match self {
            HandleId::Arrow(axis)
            | HandleId::Curve(axis)
            | HandleId::CurvePicker(axis)
            | HandleId::Hoop(axis) => axis_frame(axis),
            HandleId::Ball | HandleId::PlaneFront => Quat::IDENTITY,
            HandleId::PlaneBack => Quat::from_rotation_x(std::f32::consts::PI),
        }
    }
}

/// Rotation taking local +Z onto `axis`
fn axis_frame(axis: Axis) -> Quat {
    match axis {
        Axis::X => Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        Axis::Y => Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2),
        Axis::Z => Quat::IDENTITY,
    }
}

/// Display flags of one handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandleFlags {
    /// Drawn at all
    pub visible: bool,
    /// Drawn in the highlight style
    pub highlighted: bool,
}

/// Display flags for every handle
#[derive(Debug, Clone, PartialEq)]
pub struct HandleSet {
    flags: [HandleFlags; HandleId::COUNT],
}

impl HandleSet {
    /// All non-hoop handles visible (or all hidden), none highlighted
    pub fn new(visible: bool) -> Self {
        let mut set = Self {
            flags: [HandleFlags::default(); HandleId::COUNT],
        };
        set.set_visible(visible);
        set
    }

    /// Flags of a handle
    pub fn get(&self, id: HandleId) -> HandleFlags {
        self.flags[id.index()]
    }

    /// Set the highlight flag of a handle
    pub fn set_highlighted(&mut self, id: HandleId, highlighted: bool) {
        self.flags[id.index()].highlighted = highlighted;
    }

    /// Set the visible flag of a single handle
    pub fn set_handle_visible(&mut self, id: HandleId, visible: bool) {
        self.flags[id.index()].visible = visible;
    }

    /// Show or hide the whole gizmo. Hoops are always hidden here; they are
    /// shown one at a time by hover picking.
    pub fn set_visible(&mut self, visible: bool) {
        for id in HandleId::ALL {
            let flags = &mut self.flags[id.index()];
            flags.visible = visible && !id.is_hoop();
            if !visible {
                flags.highlighted = false;
            }
        }
    }

    /// Handles currently highlighted
    pub fn highlighted(&self) -> impl Iterator<Item = HandleId> + '_ {
        HandleId::ALL
            .into_iter()
            .filter(|id| self.flags[id.index()].highlighted)
    }

    /// Hoops currently shown
    pub fn shown_hoops(&self) -> impl Iterator<Item = HandleId> + '_ {
        HandleId::ALL
            .into_iter()
            .filter(|id| id.is_hoop() && self.flags[id.index()].visible)
    }
}

/// Per-handle render data
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct HandleInstance {
    /// World transform (column-major)
    pub transform: [[f32; 4]; 4],
    /// Base color (RGBA)
    pub color: [f32; 4],
    /// 1.0 when visible
    pub visible: f32,
    /// 1.0 when highlighted
    pub highlighted: f32,
    /// Handle radius in world units (before the transform's scale)
    pub radius: f32,
    /// Padding to 16-byte alignment
    pub _pad: f32,
}

/// Color of a handle from the configured axis colors
fn handle_color(id: HandleId, config: &GizmoConfig) -> [f32; 4] {
    match id.axis() {
        Some(Axis::X) => config.x_axis_color,
        Some(Axis::Y) => config.y_axis_color,
        Some(Axis::Z) => config.z_axis_color,
        None => [0.9, 0.9, 0.9, 1.0],
    }
}

/// Build render records for every handle from the gizmo state
pub fn handle_instances(
    state: &GizmoState,
    handles: &HandleSet,
    config: &GizmoConfig,
) -> Vec<HandleInstance> {
    let root = state.transform();
    HandleId::ALL
        .into_iter()
        .map(|id| {
            let flags = handles.get(id);
            let transform = root * Mat4::from_quat(id.local_rotation());
            HandleInstance {
                transform: transform.to_cols_array_2d(),
                color: handle_color(id, config),
                visible: if flags.visible { 1.0 } else { 0.0 },
                highlighted: if flags.highlighted { 1.0 } else { 0.0 },
                radius: config.radius,
                _pad: 0.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_indices_are_unique_and_ordered() {
        for (i, id) in HandleId::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), i, "{id:?}");
        }
    }

    #[test]
    fn test_axis_frames_point_along_axis() {
        for axis in Axis::ALL {
            let tip = HandleId::Arrow(axis).local_rotation() * Vec3::Z;
            assert!(tip.abs_diff_eq(axis.direction(), 1e-6), "{axis}");
        }
        let back = HandleId::PlaneBack.local_rotation() * Vec3::Z;
        assert!(back.abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    #[test]
    fn test_new_set_hides_hoops() {
        let set = HandleSet::new(true);
        assert!(set.get(HandleId::Arrow(Axis::X)).visible);
        assert!(set.get(HandleId::Ball).visible);
        assert_eq!(set.shown_hoops().count(), 0);
        assert_eq!(set.highlighted().count(), 0);
    }

    #[test]
    fn test_hiding_clears_highlights() {
        let mut set = HandleSet::new(true);
        set.set_highlighted(HandleId::Curve(Axis::Y), true);
        set.set_handle_visible(HandleId::Hoop(Axis::Y), true);

        set.set_visible(false);
        assert_eq!(set.highlighted().count(), 0);
        assert_eq!(set.shown_hoops().count(), 0);
        assert!(!set.get(HandleId::PlaneFront).visible);
    }

    #[test]
    fn test_instances_follow_state() {
        let state = GizmoState::from_plane(Vec3::new(1.0, 2.0, 3.0), Vec3::X, 2.0);
        let mut set = HandleSet::new(true);
        set.set_highlighted(HandleId::Arrow(Axis::Z), true);
        let config = GizmoConfig::default();

        let instances = handle_instances(&state, &set, &config);
        assert_eq!(instances.len(), HandleId::COUNT);

        let arrow = instances[HandleId::Arrow(Axis::Z).index()];
        assert_eq!(arrow.highlighted, 1.0);
        assert_eq!(arrow.color, config.z_axis_color);

        // The Z arrow follows the plane normal, scaled by the gizmo scale
        let transform = Mat4::from_cols_array_2d(&arrow.transform);
        assert!(transform.transform_point3(Vec3::ZERO).abs_diff_eq(Vec3::new(1.0, 2.0, 3.0), 1e-5));
        let tip = transform.transform_point3(Vec3::Z);
        assert!(tip.abs_diff_eq(Vec3::new(3.0, 2.0, 3.0), 1e-5));

        let hoop = instances[HandleId::Hoop(Axis::X).index()];
        assert_eq!(hoop.visible, 0.0);

        let bytes: &[u8] = bytemuck::cast_slice(&instances);
        assert_eq!(bytes.len(), HandleId::COUNT * std::mem::size_of::<HandleInstance>());
    }
}
