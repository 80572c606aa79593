//! Platform-agnostic pointer events.

use glam::Vec2;

/// Opaque identifier of a pointer (a finger or a mouse button), assigned
/// by the host input layer.
///
/// Signed so hosts that use negative ids for mouse pointers and
/// non-negative ids for touches can pass them through unchanged.
pub type PointerId = i64;

/// Platform-agnostic pointer events.
///
/// These are fed into a [`GestureEngine`](super::GestureEngine) which
/// converts them into [`Output`](crate::output::Output) values.
///
/// # Example
///
/// ```ignore
/// let outputs = engine.handle_event(PointerEvent::Down {
///     id: 0,
///     position: Vec2::new(100.0, 200.0),
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A pointer made contact at a screen-space position.
    Down {
        /// Host-assigned pointer identifier.
        id: PointerId,
        /// Contact position in screen space.
        position: Vec2,
    },
    /// A contacting pointer moved to a new screen-space position.
    Move {
        /// Host-assigned pointer identifier.
        id: PointerId,
        /// New position in screen space.
        position: Vec2,
    },
    /// A pointer left the surface.
    Up {
        /// Host-assigned pointer identifier.
        id: PointerId,
    },
}
