//! Hover picking
//!
//! A [`HitTest`] oracle turns a pointer position into the handle under it.
//! [`PickResolver`] maps that handle to the [`DragAction`] a button press
//! would start and keeps the hover highlight in sync.

mod picker;

pub use picker::HandlePicker;

use clip_core::Axis;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::handles::{HandleId, HandleSet};

/// Result of a hit test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Handle under the pointer
    pub handle: HandleId,
    /// World position of the hit, when the oracle knows it
    pub world_pos: Option<Vec3>,
}

/// Hit-test oracle: which handle is under a canvas position
pub trait HitTest {
    /// Pick at a pointer position in canvas pixels
    fn pick(&self, pointer: Vec2) -> Option<Hit>;
}

/// What a drag started now would do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DragAction {
    /// Nothing
    #[default]
    None,
    /// Translate along an axis
    Pan(Axis),
    /// Rotate about an axis
    Rotate(Axis),
}

impl DragAction {
    /// Map a picked handle to its action
    pub fn for_handle(handle: HandleId) -> Self {
        match handle {
            HandleId::Arrow(axis) => DragAction::Pan(axis),
            HandleId::Curve(axis) | HandleId::CurvePicker(axis) => DragAction::Rotate(axis),
            HandleId::Hoop(_) | HandleId::Ball | HandleId::PlaneFront | HandleId::PlaneBack => {
                DragAction::None
            }
        }
    }

    /// Visual handle to highlight while this action is pending
    pub fn highlight_handle(self) -> Option<HandleId> {
        match self {
            DragAction::None => None,
            DragAction::Pan(axis) => Some(HandleId::Arrow(axis)),
            DragAction::Rotate(axis) => Some(HandleId::Curve(axis)),
        }
    }

    /// Hoop to show while this action is pending
    pub fn hoop(self) -> Option<HandleId> {
        match self {
            DragAction::Rotate(axis) => Some(HandleId::Hoop(axis)),
            DragAction::None | DragAction::Pan(_) => None,
        }
    }

    /// Whether this is an actual action
    pub fn is_some(self) -> bool {
        self != DragAction::None
    }
}

/// Tracks the pending action and the single highlighted handle and hoop
#[derive(Debug, Clone, Default)]
pub struct PickResolver {
    pending: DragAction,
    highlighted: Option<HandleId>,
    shown_hoop: Option<HandleId>,
}

impl PickResolver {
    /// Create a resolver with nothing pending
    pub fn new() -> Self {
        Self::default()
    }

    /// Action a press would start now
    pub fn pending(&self) -> DragAction {
        self.pending
    }

    /// Resolve a hit into the pending action and update highlights
    pub fn resolve(&mut self, hit: Option<Hit>, handles: &mut HandleSet) -> DragAction {
        let action = hit.map_or(DragAction::None, |hit| DragAction::for_handle(hit.handle));
        if action != self.pending {
            tracing::debug!("Pending gizmo action: {:?} -> {:?}", self.pending, action);
        }
        self.apply(action, handles);
        action
    }

    /// Make `action` pending, moving the highlight and hoop to match
    pub fn apply(&mut self, action: DragAction, handles: &mut HandleSet) {
        self.clear(handles);

        self.pending = action;
        if let Some(id) = action.highlight_handle() {
            handles.set_highlighted(id, true);
            self.highlighted = Some(id);
        }
        if let Some(id) = action.hoop() {
            handles.set_handle_visible(id, true);
            self.shown_hoop = Some(id);
        }
    }

    /// Drop the pending action and remove highlight and hoop
    pub fn clear(&mut self, handles: &mut HandleSet) {
        if let Some(id) = self.highlighted.take() {
            handles.set_highlighted(id, false);
        }
        if let Some(id) = self.shown_hoop.take() {
            handles.set_handle_visible(id, false);
        }
        self.pending = DragAction::None;
    }
}
