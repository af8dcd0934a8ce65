//! Clip-plane Gizmo
//!
//! Interactive 3D widget for positioning and orienting a clipping plane.
//!
//! # Architecture
//!
//! The widget is independent of any windowing or GPU stack. The host
//! forwards pointer events and supplies its camera, a hit-test oracle and
//! its camera navigation through small traits:
//!
//! - [`camera::CameraView`] - View/projection matrices and eye position
//! - [`pick::HitTest`] - Which handle is under the pointer
//! - [`camera::OrbitControl`] - Navigation suspended while dragging
//!
//! # Module Structure
//!
//! ```text
//! clip-gizmo/
//! ├── camera.rs        # Camera traits, orbit camera, viewport
//! ├── geometry/        # Pointer rays, drag planes, proxy ray casts
//! ├── manipulate/      # Axis translation and rotation
//! ├── handles.rs       # Handle identifiers, flags, render instances
//! ├── pick/            # Hover resolution and geometric picker
//! ├── session.rs       # Pointer state machine
//! ├── events.rs        # Notifications
//! └── widget.rs        # ClipGizmo
//! ```

pub mod camera;
pub mod constants;
pub mod events;
pub mod geometry;
pub mod handles;
pub mod manipulate;
pub mod pick;
pub mod session;
pub mod widget;

pub use camera::{Camera, CameraView, OrbitControl, OrbitControls, Viewport};
pub use events::GizmoEvent;
pub use geometry::{Ray, pointer_ray, world_to_pointer};
pub use handles::{HandleFlags, HandleId, HandleInstance, HandleSet};
pub use pick::{DragAction, HandlePicker, Hit, HitTest, PickResolver};
pub use session::{DragSession, PointerButton, SessionState};
pub use widget::{ClipGizmo, PointerContext};
