use crate::picking::Ray;

/// Platform-agnostic pointer events.
///
/// Hosts translate window events into these and feed them to
/// [`SimSession::handle_pointer`](crate::session::SimSession::handle_pointer).
/// Coordinates arrive as scene-space rays; use
/// [`TurntableCamera::screen_ray`](crate::camera::TurntableCamera::screen_ray)
/// to build one from pixel coordinates.
///
/// # Example
///
/// ```ignore
/// let ray = session.camera().screen_ray(x, y, viewport);
/// session.handle_pointer(PointerEvent::Moved { ray }, Instant::now());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed.
    Pressed {
        /// Pointer ray at press time.
        ray: Ray,
    },
    /// Pointer moved.
    Moved {
        /// Pointer ray at the new position.
        ray: Ray,
    },
    /// Primary button released.
    Released {
        /// Pointer ray at release time.
        ray: Ray,
    },
}
