//! Clip Gizmo Core Data Structures
//!
//! This crate contains the data model shared by the gizmo and its hosts:
//! - Axis: local gizmo axes
//! - GizmoState: position, orientation and scale of the gizmo
//! - ClipPlane: the clipping plane the gizmo manipulates
//! - GizmoConfig: serializable gizmo settings

pub mod axis;
pub mod config;
pub mod constants;
pub mod state;
pub mod target;

pub use axis::*;
pub use config::*;
pub use constants::*;
pub use state::*;
pub use target::*;
