//! Notifications emitted by the gizmo

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::pick::DragAction;

/// Something the host may want to react to. Queued by
/// [`ClipGizmo`](crate::ClipGizmo) and drained with `drain_events`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GizmoEvent {
    /// The gizmo moved; carries the new position
    PositionChanged(Vec3),
    /// The gizmo turned; carries the new plane normal
    NormalChanged(Vec3),
    /// A drag began
    DragStarted(DragAction),
    /// A drag ended, was cancelled, or the pointer left the canvas
    DragEnded(DragAction),
}
