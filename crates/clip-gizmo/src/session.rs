//! Pointer interaction state machine

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::pick::DragAction;

/// Pointer button that triggered an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    /// Left button, touch or pen contact
    Primary,
    /// Right button
    Secondary,
    /// Middle button
    Middle,
}

/// Where the session is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionState {
    /// Nothing under the pointer
    #[default]
    Idle,
    /// A press would start this action
    Hovering(DragAction),
    /// Button held, this action runs on every move
    Dragging(DragAction),
}

/// Tracks hover, press and release across pointer events.
///
/// The session only decides transitions. The widget performs the side
/// effects (orbit toggling, geometry, notifications).
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    state: SessionState,
    previous_pointer: Option<Vec2>,
}

impl DragSession {
    /// Create an idle session
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Action being dragged, if any
    pub fn active(&self) -> Option<DragAction> {
        match self.state {
            SessionState::Dragging(action) => Some(action),
            SessionState::Idle | SessionState::Hovering(_) => None,
        }
    }

    /// Whether a drag is active
    pub fn is_dragging(&self) -> bool {
        self.active().is_some()
    }

    /// Record the result of a re-pick. Ignored while dragging.
    pub fn hover(&mut self, action: DragAction) {
        if self.is_dragging() {
            return;
        }
        self.state = if action.is_some() {
            SessionState::Hovering(action)
        } else {
            SessionState::Idle
        };
    }

    /// Handle a button press. Starts a drag only for the primary button
    /// while hovering an action; returns the started action.
    pub fn press(&mut self, button: PointerButton, pointer: Vec2) -> Option<DragAction> {
        let SessionState::Hovering(action) = self.state else {
            return None;
        };
        if button != PointerButton::Primary || !action.is_some() {
            return None;
        }

        self.state = SessionState::Dragging(action);
        self.previous_pointer = Some(pointer);
        Some(action)
    }

    /// Advance a drag to `pointer`. Returns the active action and the
    /// previously processed pointer position, which is replaced either way.
    pub fn drag_to(&mut self, pointer: Vec2) -> Option<(DragAction, Vec2)> {
        let action = self.active()?;
        let previous = self.previous_pointer.replace(pointer)?;
        Some((action, previous))
    }

    /// End a drag. Returns the action that was active.
    pub fn release(&mut self) -> Option<DragAction> {
        let action = self.active()?;
        self.reset();
        Some(action)
    }

    /// Back to idle from any state
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
        self.previous_pointer = None;
    }
}
