//! Engine outputs and the collaborator traits they route to.
//!
//! The engine never holds references to its consumers. Each entry point
//! returns the batch of [`Output`] values it produced, in emission order;
//! hosts either match on them directly or hand them to [`route_all`] to
//! dispatch onto a [`JoystickVisual`] and a [`MovementConsumer`].

use glam::Vec2;

use crate::input::Gesture;

/// A single engine output produced by an event handler or the frame tick.
///
/// Positions are in the joystick container's local space. Handle positions
/// are offsets from the origin (the clamped displacement), not absolute
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Output {
    /// Fix the visual's origin marker at a local position (session start).
    SetOrigin(Vec2),
    /// Move the visual's handle to an offset from the origin.
    SetHandle(Vec2),
    /// Show (session start) or hide (session end) the visual.
    SetActive(bool),
    /// The normalized displacement changed; each axis lies in `[-1, 1]`.
    DirectionChanged(Vec2),
    /// A discrete gesture was classified.
    Gesture(Gesture),
}

/// Mirror of the on-screen joystick graphic.
///
/// Receives the origin when a session starts, the clamped handle offset on
/// every owned move (and a reset to zero at session end), and a visibility
/// toggle at session boundaries.
pub trait JoystickVisual {
    /// Fix the origin marker at a local position.
    fn set_origin(&mut self, position: Vec2);
    /// Move the handle to an offset from the origin.
    fn set_handle(&mut self, position: Vec2);
    /// Show or hide the joystick.
    fn set_active(&mut self, active: bool);
}

/// Consumer of normalized movement vectors and discrete gestures.
pub trait MovementConsumer {
    /// The normalized displacement changed (every owned move, and once at
    /// session end when it resets to zero).
    fn on_direction_changed(&mut self, direction: Vec2);
    /// A discrete gesture was classified.
    fn on_gesture(&mut self, gesture: Gesture);
}

impl Output {
    /// Route this output to the collaborator it addresses.
    pub fn route<V, M>(self, visual: &mut V, consumer: &mut M)
    where
        V: JoystickVisual + ?Sized,
        M: MovementConsumer + ?Sized,
    {
        match self {
            Self::SetOrigin(position) => visual.set_origin(position),
            Self::SetHandle(position) => visual.set_handle(position),
            Self::SetActive(active) => visual.set_active(active),
            Self::DirectionChanged(direction) => {
                consumer.on_direction_changed(direction);
            }
            Self::Gesture(gesture) => consumer.on_gesture(gesture),
        }
    }
}

/// Route a batch of outputs to the two collaborators, in order.
pub fn route_all<V, M>(outputs: &[Output], visual: &mut V, consumer: &mut M)
where
    V: JoystickVisual + ?Sized,
    M: MovementConsumer + ?Sized,
{
    for output in outputs {
        output.route(visual, consumer);
    }
}
