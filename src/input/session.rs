//! Single-pointer session ownership and tracking.

use glam::Vec2;

use super::event::PointerId;
use super::gesture::{SwipeFlick, TapHold};

/// State of the single pointer currently owning the joystick.
///
/// Created on the first pointer-down while no session is active, destroyed
/// on that pointer's matching release. Events from any other concurrent
/// pointer never touch it — first down wins ownership until its up.
#[derive(Debug)]
pub(crate) struct PointerSession {
    owner: PointerId,
    /// Local coordinate of the pointer-down; fixed for the session.
    pub origin: Vec2,
    /// Latest local coordinate of the owning pointer.
    pub current: Vec2,
    /// Tap/hold classification machine.
    pub tap_hold: TapHold,
    /// Swipe/flick classification machine.
    pub swipe_flick: SwipeFlick,
}

impl PointerSession {
    /// Start a session owned by `owner` at its pointer-down position.
    pub fn start(owner: PointerId, origin: Vec2) -> Self {
        Self {
            owner,
            origin,
            current: origin,
            tap_hold: TapHold::new(),
            swipe_flick: SwipeFlick::new(),
        }
    }

    /// Whether an event from `id` belongs to this session.
    pub fn owns(&self, id: PointerId) -> bool {
        self.owner == id
    }

    /// Record a move of the owning pointer and feed both classifiers.
    pub fn record_move(&mut self, local: Vec2) {
        self.current = local;
        self.tap_hold.on_move();
        self.swipe_flick.on_move((local - self.origin).length());
    }
}
