//! Value-level collaborator implementations.
//!
//! Hosts with their own rendering and movement code implement
//! [`JoystickVisual`] and [`MovementConsumer`] directly. The types here
//! cover the polling style instead: they store what the engine emitted so
//! a renderer or a character controller can read it back each frame.
//! Nothing in this module draws anything.

use glam::Vec2;

use crate::input::Gesture;
use crate::output::{JoystickVisual, MovementConsumer};

/// Pure-state mirror of the on-screen joystick graphic.
///
/// Tracks the origin marker, the handle offset, and visibility. A renderer
/// reads [`line_segment`](Self::line_segment) for the origin-to-handle
/// line and [`handle_direction`](Self::handle_direction) to orient the
/// handle sprite.
#[derive(Debug, Clone, Copy, Default)]
pub struct JoystickMirror {
    origin: Vec2,
    handle: Vec2,
    active: bool,
}

impl JoystickMirror {
    /// An inactive mirror with origin and handle at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Local position of the origin marker.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Handle offset from the origin (the clamped displacement).
    #[must_use]
    pub fn handle(&self) -> Vec2 {
        self.handle
    }

    /// Whether the joystick is currently shown.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Unit vector from the origin toward the handle; zero when centered.
    #[must_use]
    pub fn handle_direction(&self) -> Vec2 {
        self.handle.normalize_or_zero()
    }

    /// Endpoints for a line renderer: the origin and the absolute handle
    /// position.
    #[must_use]
    pub fn line_segment(&self) -> (Vec2, Vec2) {
        (self.origin, self.origin + self.handle)
    }
}

impl JoystickVisual for JoystickMirror {
    fn set_origin(&mut self, position: Vec2) {
        self.origin = position;
    }

    fn set_handle(&mut self, position: Vec2) {
        self.handle = position;
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Records the latest normalized direction and the gestures emitted since
/// the last drain.
#[derive(Debug, Clone, Default)]
pub struct MovementRecorder {
    direction: Vec2,
    gestures: Vec<Gesture>,
}

impl MovementRecorder {
    /// A recorder with a neutral direction and no pending gestures.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest normalized displacement; zero when the joystick is neutral.
    #[must_use]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Drain the gestures emitted since the last call.
    pub fn take_gestures(&mut self) -> Vec<Gesture> {
        std::mem::take(&mut self.gestures)
    }
}

impl MovementConsumer for MovementRecorder {
    fn on_direction_changed(&mut self, direction: Vec2) {
        self.direction = direction;
    }

    fn on_gesture(&mut self, gesture: Gesture) {
        self.gestures.push(gesture);
    }
}
