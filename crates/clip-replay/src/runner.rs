//! Drive a gizmo through a script

use clip_core::{ClipPlane, GizmoState};
use clip_gizmo::{
    Camera, ClipGizmo, GizmoEvent, OrbitControl, OrbitControls, PointerButton, PointerContext,
    SessionState, Viewport, world_to_pointer,
};
use glam::Vec2;
use serde::Serialize;

use crate::script::{Script, ScriptError, ScriptEvent};

/// Outcome of a replay
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Plane after the last event
    pub plane: ClipPlane,
    /// Gizmo transform after the last event
    pub state: GizmoState,
    /// Interaction state after the last event
    pub session: SessionState,
    /// Whether camera navigation ended up enabled
    pub orbit_active: bool,
    /// Every notification, in order
    pub events: Vec<GizmoEvent>,
}

impl ReplayReport {
    pub fn to_json(&self) -> Result<String, ScriptError> {
        serde_json::to_string_pretty(self).map_err(|e| ScriptError::Serialize(e.to_string()))
    }
}

/// Host side of a replay: camera, navigation and the gizmo
struct Replay {
    viewport: Viewport,
    camera: Camera,
    orbit: OrbitControls,
    gizmo: ClipGizmo,
    /// Last pointer position delivered to the gizmo
    pointer: Vec2,
    events: Vec<GizmoEvent>,
}

impl Replay {
    fn apply(&mut self, event: ScriptEvent) -> Result<(), ScriptError> {
        match event {
            ScriptEvent::Move(pointer) => self.pointer_move(pointer),
            ScriptEvent::MoveToWorld(point) => {
                match world_to_pointer(point, &self.viewport, &self.camera) {
                    Some(pointer) => self.pointer_move(pointer),
                    None => tracing::warn!("{:?} is behind the camera, skipping", point),
                }
            }
            ScriptEvent::Down(pointer, button) => self.pointer_down(pointer, button),
            ScriptEvent::Press(button) => self.pointer_down(self.pointer, button),
            ScriptEvent::Up(button) => {
                let picker = self.gizmo.picker(&self.camera, self.viewport);
                self.gizmo.on_pointer_up(
                    button,
                    PointerContext {
                        camera: &self.camera,
                        viewport: self.viewport,
                        hit_test: &picker,
                        orbit: &mut self.orbit,
                    },
                );
            }
            ScriptEvent::Leave => {
                let picker = self.gizmo.picker(&self.camera, self.viewport);
                self.gizmo.on_pointer_leave(PointerContext {
                    camera: &self.camera,
                    viewport: self.viewport,
                    hit_test: &picker,
                    orbit: &mut self.orbit,
                });
            }
            ScriptEvent::Orbit(delta) => {
                if !self.orbit.drag(&mut self.camera, delta) {
                    tracing::debug!("Camera navigation suspended, orbit ignored");
                }
            }
            ScriptEvent::SetVisible(visible) => self.gizmo.set_visible(visible),
            ScriptEvent::SetScale(scale) => self.gizmo.set_scale(scale)?,
            ScriptEvent::Detach => self.gizmo.detach(),
        }

        self.events.extend(self.gizmo.drain_events());
        Ok(())
    }

    fn pointer_move(&mut self, pointer: Vec2) {
        self.pointer = pointer;
        let picker = self.gizmo.picker(&self.camera, self.viewport);
        self.gizmo.on_pointer_move(
            pointer,
            PointerContext {
                camera: &self.camera,
                viewport: self.viewport,
                hit_test: &picker,
                orbit: &mut self.orbit,
            },
        );
    }

    fn pointer_down(&mut self, pointer: Vec2, button: PointerButton) {
        self.pointer = pointer;
        let picker = self.gizmo.picker(&self.camera, self.viewport);
        self.gizmo.on_pointer_down(
            pointer,
            button,
            PointerContext {
                camera: &self.camera,
                viewport: self.viewport,
                hit_test: &picker,
                orbit: &mut self.orbit,
            },
        );
    }
}

/// Run every event of a script against a fresh gizmo
pub fn run_script(script: &Script) -> Result<ReplayReport, ScriptError> {
    let plane = script.plane.build().into_shared();
    let mut gizmo = ClipGizmo::new(script.gizmo.clone())?;
    gizmo.attach(&plane);

    let mut replay = Replay {
        viewport: script.viewport,
        camera: script.camera.build(&script.viewport),
        orbit: OrbitControls::default(),
        gizmo,
        pointer: Vec2::ZERO,
        events: Vec::new(),
    };

    for (index, event) in script.events.iter().enumerate() {
        tracing::trace!("Event {}: {:?}", index, event);
        replay.apply(*event)?;
    }

    let plane = plane.lock().clone();
    tracing::info!(
        "Replayed {} events, plane at {:?} facing {:?}",
        script.events.len(),
        plane.position,
        plane.normal
    );

    Ok(ReplayReport {
        plane,
        state: *replay.gizmo.state(),
        session: replay.gizmo.session_state(),
        orbit_active: replay.orbit.is_active(),
        events: replay.events,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use clip_core::Axis;
    use clip_gizmo::DragAction;
    use glam::Vec3;

    #[test]
    fn test_pan_script_moves_plane() {
        let script = Script::from_ron(
            r#"(
                events: [
                    MoveToWorld((2.5, 0.0, 0.0)),
                    Down((606.0, 300.0), Primary),
                    Move((646.0, 300.0)),
                    Up(Primary),
                ],
            )"#,
        )
        .unwrap();

        let report = run_script(&script).unwrap();
        assert!(report.plane.position.x > 0.0);
        assert_relative_eq!(report.plane.position.y, 0.0, epsilon = 1e-5);
        assert_eq!(report.plane.position, report.state.position());
        assert_eq!(report.session, SessionState::Idle);
        assert!(report.orbit_active);
        assert_eq!(
            report.events.first(),
            Some(&GizmoEvent::DragStarted(DragAction::Pan(Axis::X)))
        );
    }

    #[test]
    fn test_orbit_is_suspended_during_drag() {
        let script = Script::from_ron(
            r#"(
                events: [
                    MoveToWorld((2.5, 0.0, 0.0)),
                    Down((606.0, 300.0), Primary),
                    Orbit((30.0, 0.0)),
                ],
            )"#,
        )
        .unwrap();

        let report = run_script(&script).unwrap();
        assert!(!report.orbit_active);
        assert_eq!(report.session, SessionState::Dragging(DragAction::Pan(Axis::X)));
        assert_eq!(report.plane.position, Vec3::ZERO);
    }

    #[test]
    fn test_bundled_script() {
        let script = Script::from_ron(include_str!("../scripts/pan_and_rotate.ron")).unwrap();
        let report = run_script(&script).unwrap();

        assert!(report.plane.position.abs_diff_eq(Vec3::X, 1e-3));
        assert!(report.plane.normal.abs_diff_eq(Vec3::X, 1e-3));
        assert_eq!(report.session, SessionState::Idle);
        assert!(report.orbit_active);

        let started: Vec<_> = report
            .events
            .iter()
            .filter_map(|e| match e {
                GizmoEvent::DragStarted(action) => Some(*action),
                _ => None,
            })
            .collect();
        assert_eq!(started, vec![DragAction::Pan(Axis::X), DragAction::Rotate(Axis::Y)]);
    }

    #[test]
    fn test_invalid_scale_aborts() {
        let script = Script::from_ron("(events: [SetScale(0.0)])").unwrap();
        assert!(matches!(run_script(&script), Err(ScriptError::Config(_))));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let script = Script::from_ron("(events: [Leave])").unwrap();
        let json = run_script(&script).unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["plane"]["name"], "Clip Plane");
        assert_eq!(value["session"], "Idle");
        assert_eq!(value["orbit_active"], true);
    }
}
