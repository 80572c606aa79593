//! Screen-to-local projection service supplied by the host.
//!
//! Pointer events arrive in screen space; all session state (origin,
//! current position, swipe distances) lives in the joystick container's
//! local space. The projection between the two is host geometry the engine
//! has no business knowing about, so it is injected once at construction
//! as a [`ScreenToLocal`] implementation and treated as a pure function.

use glam::Vec2;

/// Projects screen-space pointer positions into the joystick container's
/// local coordinate space.
///
/// Implementations must be pure: the same screen position always maps to
/// the same local position for the lifetime of the engine.
pub trait ScreenToLocal {
    /// Project a screen-space position into local space.
    fn screen_to_local(&self, screen: Vec2) -> Vec2;
}

/// No-op projection for hosts that already deliver local coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl ScreenToLocal for Identity {
    fn screen_to_local(&self, screen: Vec2) -> Vec2 {
        screen
    }
}

/// Affine projection into a parent rectangle's local space.
///
/// Subtracts the rectangle's screen-space origin and scales per axis,
/// which covers the common case of an axis-aligned UI container with a
/// uniform (or per-axis) display scale factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectProjection {
    /// Screen-space position that maps to the local-space origin.
    pub origin: Vec2,
    /// Screen-to-local scale factor per axis.
    pub scale: Vec2,
}

impl RectProjection {
    /// Projection that subtracts `origin` and scales by `scale`.
    #[must_use]
    pub const fn new(origin: Vec2, scale: Vec2) -> Self {
        Self { origin, scale }
    }
}

impl ScreenToLocal for RectProjection {
    fn screen_to_local(&self, screen: Vec2) -> Vec2 {
        (screen - self.origin) * self.scale
    }
}
