//! Clip Gizmo Replay
//!
//! Loads a RON script of pointer events, drives a [`clip_gizmo::ClipGizmo`]
//! with the geometric picker and an orbit camera, and reports the result.

pub mod runner;
pub mod script;

pub use runner::{ReplayReport, run_script};
pub use script::{CameraSetup, PlaneSetup, Script, ScriptError, ScriptEvent};
