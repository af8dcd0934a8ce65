//! The clip-plane gizmo widget
//!
//! [`ClipGizmo`] ties picking, the drag session and the manipulation math
//! together. The host forwards pointer events with a [`PointerContext`]
//! holding its camera, hit-test oracle and orbit control; the gizmo updates
//! its [`GizmoState`], writes the attached [`ClipPlane`] and queues
//! [`GizmoEvent`]s.

use std::sync::{Arc, Weak};

use clip_core::{
    ClipPlane, ConfigError, GizmoConfig, GizmoState, SharedClipPlane, check_finite,
    check_positive,
};
use glam::Vec2;
use parking_lot::Mutex;

use crate::camera::{CameraView, OrbitControl, Viewport};
use crate::events::GizmoEvent;
use crate::handles::{HandleInstance, HandleSet, handle_instances};
use crate::manipulate::{DragRays, rotate_about_axis, translate_along_axis};
use crate::pick::{DragAction, HandlePicker, HitTest, PickResolver};
use crate::session::{DragSession, PointerButton, SessionState};

/// Host services needed to process one pointer event
pub struct PointerContext<'a> {
    /// Camera the canvas is rendered with
    pub camera: &'a dyn CameraView,
    /// Canvas size
    pub viewport: Viewport,
    /// Oracle answering which handle is under the pointer
    pub hit_test: &'a dyn HitTest,
    /// Camera navigation, suspended while dragging
    pub orbit: &'a mut dyn OrbitControl,
}

/// Interactive gizmo that moves and turns a clipping plane
pub struct ClipGizmo {
    config: GizmoConfig,
    state: GizmoState,
    handles: HandleSet,
    resolver: PickResolver,
    session: DragSession,
    target: Option<Weak<Mutex<ClipPlane>>>,
    events: Vec<GizmoEvent>,
    /// Orbit was left suspended by a cancelled drag
    restore_orbit: bool,
}

impl Default for ClipGizmo {
    fn default() -> Self {
        Self::from_valid_config(GizmoConfig::default())
    }
}

impl ClipGizmo {
    /// Create a gizmo with a validated configuration
    pub fn new(config: GizmoConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: GizmoConfig) -> Self {
        Self {
            state: GizmoState::new(config.scale),
            handles: HandleSet::new(config.visible),
            resolver: PickResolver::new(),
            session: DragSession::new(),
            target: None,
            events: Vec::new(),
            restore_orbit: false,
            config,
        }
    }

    /// Attach a clipping plane, resetting the gizmo to its position and normal
    pub fn attach(&mut self, plane: &SharedClipPlane) {
        self.cancel_drag();

        let (id, position, normal) = {
            let plane = plane.lock();
            (plane.id, plane.position, plane.normal)
        };
        self.state = GizmoState::from_plane(position, normal, self.config.scale);
        self.target = Some(Arc::downgrade(plane));

        tracing::info!("Attached clip plane {} at {:?}", id, position);
    }

    /// Stop manipulating the attached plane
    pub fn detach(&mut self) {
        self.cancel_drag();
        if self.target.take().is_some() {
            tracing::info!("Detached clip plane");
        }
    }

    /// The attached plane, if it is still alive
    pub fn target(&self) -> Option<SharedClipPlane> {
        self.target.as_ref().and_then(Weak::upgrade)
    }

    /// Build the geometric hit-test oracle for the current state
    pub fn picker<'a>(&self, camera: &'a dyn CameraView, viewport: Viewport) -> HandlePicker<'a> {
        HandlePicker::new(camera, viewport, self.state, self.config.radius)
    }

    /// Pointer moved over the canvas
    pub fn on_pointer_move(&mut self, pointer: Vec2, ctx: PointerContext<'_>) {
        self.restore_orbit_control(ctx.orbit);
        if !self.is_visible() {
            return;
        }

        match self.session.drag_to(pointer) {
            Some((action, previous)) => {
                let rays = DragRays::from_pointers(previous, pointer, &ctx.viewport, ctx.camera);
                self.drag_step(action, &rays);
            }
            None => {
                let hit = ctx.hit_test.pick(pointer);
                let action = self.resolver.resolve(hit, &mut self.handles);
                self.session.hover(action);
            }
        }
    }

    /// Pointer button pressed
    pub fn on_pointer_down(&mut self, pointer: Vec2, button: PointerButton, ctx: PointerContext<'_>) {
        self.restore_orbit_control(ctx.orbit);
        if !self.is_visible() {
            return;
        }

        if let Some(action) = self.session.press(button, pointer) {
            ctx.orbit.set_active(false);
            self.events.push(GizmoEvent::DragStarted(action));
            tracing::debug!("Gizmo drag started: {:?}", action);
        }
    }

    /// Pointer button released (any button ends the drag)
    pub fn on_pointer_up(&mut self, _button: PointerButton, ctx: PointerContext<'_>) {
        self.restore_orbit_control(ctx.orbit);
        if !self.is_visible() {
            return;
        }
        self.end_drag(ctx.orbit);
    }

    /// Pointer left the canvas
    pub fn on_pointer_leave(&mut self, ctx: PointerContext<'_>) {
        self.restore_orbit_control(ctx.orbit);
        if !self.is_visible() {
            return;
        }
        self.end_drag(ctx.orbit);
        self.resolver.clear(&mut self.handles);
        self.session.reset();
    }

    fn drag_step(&mut self, action: DragAction, rays: &DragRays) {
        let Some(target) = self.target() else {
            tracing::trace!("No clip plane attached, ignoring drag");
            return;
        };

        match action {
            DragAction::Pan(axis) => {
                if translate_along_axis(&mut self.state, axis, rays).is_none() {
                    tracing::trace!("Skipped degenerate translation frame on {}", axis);
                    return;
                }
                let position = self.state.position();
                target.lock().position = position;
                self.events.push(GizmoEvent::PositionChanged(position));
            }
            DragAction::Rotate(axis) => {
                let offset = self.config.rotation_fallback_offset;
                if rotate_about_axis(&mut self.state, axis, rays, offset).is_none() {
                    tracing::trace!("Skipped degenerate rotation frame on {}", axis);
                    return;
                }
                let normal = self.state.normal();
                target.lock().normal = normal;
                self.events.push(GizmoEvent::NormalChanged(normal));
            }
            DragAction::None => {}
        }
    }

    /// Release the drag and drop its highlight; a new drag needs a fresh hover.
    fn end_drag(&mut self, orbit: &mut dyn OrbitControl) {
        if let Some(action) = self.session.release() {
            orbit.set_active(true);
            self.resolver.clear(&mut self.handles);
            self.events.push(GizmoEvent::DragEnded(action));
            tracing::debug!("Gizmo drag ended: {:?}", action);
        }
    }

    /// End a drag without access to the orbit control; it is restored on
    /// the next pointer event.
    fn cancel_drag(&mut self) {
        if let Some(action) = self.session.release() {
            self.restore_orbit = true;
            self.events.push(GizmoEvent::DragEnded(action));
            tracing::debug!("Gizmo drag cancelled: {:?}", action);
        }
        self.resolver.clear(&mut self.handles);
        self.session.reset();
    }

    fn restore_orbit_control(&mut self, orbit: &mut dyn OrbitControl) {
        if std::mem::take(&mut self.restore_orbit) {
            orbit.set_active(true);
        }
    }

    /// Show or hide the gizmo. Hiding cancels any drag.
    pub fn set_visible(&mut self, visible: bool) {
        if !visible {
            self.cancel_drag();
        }
        self.config.visible = visible;
        self.handles.set_visible(visible);
    }

    /// Whether the gizmo is shown and accepts input
    pub fn is_visible(&self) -> bool {
        self.config.visible
    }

    /// Set the uniform gizmo scale. Rejected values keep the previous scale.
    pub fn set_scale(&mut self, scale: f32) -> Result<(), ConfigError> {
        let scale = check_positive("scale", scale).inspect_err(|e| tracing::warn!("{}", e))?;
        self.config.scale = scale;
        self.state.set_scale(scale);
        Ok(())
    }

    /// Set the handle radius. Rejected values keep the previous radius.
    pub fn set_radius(&mut self, radius: f32) -> Result<(), ConfigError> {
        self.config.radius =
            check_positive("radius", radius).inspect_err(|e| tracing::warn!("{}", e))?;
        Ok(())
    }

    /// Set how far the rotation fallback plane is moved toward the camera
    pub fn set_rotation_fallback_offset(&mut self, offset: f32) -> Result<(), ConfigError> {
        self.config.rotation_fallback_offset = check_finite("rotation_fallback_offset", offset)
            .inspect_err(|e| tracing::warn!("{}", e))?;
        Ok(())
    }

    /// Current settings
    pub fn config(&self) -> &GizmoConfig {
        &self.config
    }

    /// Gizmo transform
    pub fn state(&self) -> &GizmoState {
        &self.state
    }

    /// Visual handles with their visibility and highlight flags
    pub fn handles(&self) -> &HandleSet {
        &self.handles
    }

    /// Interaction state
    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    /// Action a press would start now
    pub fn pending_action(&self) -> DragAction {
        self.resolver.pending()
    }

    /// Render records for every handle
    pub fn handle_instances(&self) -> Vec<HandleInstance> {
        handle_instances(&self.state, &self.handles, &self.config)
    }

    /// Take the queued notifications
    pub fn drain_events(&mut self) -> Vec<GizmoEvent> {
        std::mem::take(&mut self.events)
    }
}
