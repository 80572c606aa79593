//! Bounded joystick displacement math.
//!
//! Pure functions shared by the engine's move handler and by polling
//! accessors: clamp the origin→pointer delta to the configured movement
//! range, then normalize it so each axis lands in `[-1, 1]`.

use glam::Vec2;

/// Clamp the origin→current delta to `movement_range`, preserving
/// direction.
///
/// A zero-length delta stays zero; there is no direction to preserve and
/// no division happens.
#[must_use]
pub fn clamp_displacement(
    origin: Vec2,
    current: Vec2,
    movement_range: f32,
) -> Vec2 {
    (current - origin).clamp_length_max(movement_range)
}

/// Normalize a clamped displacement against `movement_range`.
///
/// With `displacement` produced by [`clamp_displacement`] and a positive
/// `movement_range`, each axis of the result lies in `[-1, 1]`.
#[must_use]
pub fn normalize_displacement(displacement: Vec2, movement_range: f32) -> Vec2 {
    displacement / movement_range
}
