//! Tap/hold and swipe/flick classification state machines.
//!
//! Two independent machines observe the same pointer session. They are
//! deliberately separate types updated from the same event stream rather
//! than one combined state enum: movement cancels a tap/hold without
//! touching flick eligibility, and the hold timer can fire while a swipe
//! is still in progress.

use crate::options::GestureOptions;

/// Discrete gestures classified from a pointer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Brief, motionless contact released before the hold threshold.
    Tap,
    /// Sustained, motionless contact exceeding the hold threshold.
    Hold,
    /// Fast movement of at least the minimum swipe distance, ending in
    /// release within the flick time window.
    Flick,
}

/// Tap/hold sub-machine states.
///
/// `Idle` is the absence of the machine — one is constructed at session
/// start, already pressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TapHoldState {
    /// Contact is down and has not moved; tap and hold both still possible.
    Pressing,
    /// The hold threshold fired; nothing further can be emitted.
    Held,
    /// Movement disqualified tap and hold for the rest of the session.
    Cancelled,
}

/// Tap/hold machine for one pointer session.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TapHold {
    state: TapHoldState,
    hold_elapsed: f32,
}

impl TapHold {
    pub fn new() -> Self {
        Self {
            state: TapHoldState::Pressing,
            hold_elapsed: 0.0,
        }
    }

    /// Movement disqualifies tap and hold; the flag never re-qualifies.
    pub fn on_move(&mut self) {
        if self.state == TapHoldState::Pressing {
            self.state = TapHoldState::Cancelled;
        }
    }

    /// Advance the hold timer by one frame. Emits [`Gesture::Hold`] exactly
    /// once, at the tick that crosses the threshold.
    pub fn tick(&mut self, dt: f32, options: &GestureOptions) -> Option<Gesture> {
        if self.state != TapHoldState::Pressing {
            return None;
        }
        self.hold_elapsed += dt;
        if self.hold_elapsed > options.hold_time {
            self.state = TapHoldState::Held;
            return Some(Gesture::Hold);
        }
        None
    }

    /// Classify the release. Emits [`Gesture::Tap`] only if no move
    /// occurred and the hold threshold was never exceeded.
    pub fn on_up(&self, options: &GestureOptions) -> Option<Gesture> {
        (self.state == TapHoldState::Pressing
            && self.hold_elapsed <= options.hold_time)
            .then_some(Gesture::Tap)
    }
}

/// Swipe/flick sub-machine states.
///
/// Nothing disqualifies a swipe before release; the only gating is the
/// numeric thresholds evaluated at pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SwipeState {
    /// No movement seen yet; the flick timer is not accruing.
    Waiting,
    /// At least one move has been seen; the flick timer runs every tick.
    Moving,
}

/// Swipe/flick machine for one pointer session.
///
/// The flick timer starts at the first observed move, while the swipe
/// distance is always measured from the pointer-down origin. The asymmetry
/// is intentional.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SwipeFlick {
    state: SwipeState,
    flick_elapsed: f32,
    swipe_magnitude: f32,
}

impl SwipeFlick {
    pub fn new() -> Self {
        Self {
            state: SwipeState::Waiting,
            flick_elapsed: 0.0,
            swipe_magnitude: 0.0,
        }
    }

    /// Record the latest origin-to-pointer distance.
    pub fn on_move(&mut self, magnitude: f32) {
        self.state = SwipeState::Moving;
        self.swipe_magnitude = magnitude;
    }

    /// Advance the flick timer by one frame once movement has begun.
    pub fn tick(&mut self, dt: f32) {
        if self.state == SwipeState::Moving {
            self.flick_elapsed += dt;
        }
    }

    /// Classify the release against the flick thresholds.
    pub fn on_up(&self, options: &GestureOptions) -> Option<Gesture> {
        (self.flick_elapsed <= options.flick_time
            && self.swipe_magnitude >= options.min_swipe_distance)
            .then_some(Gesture::Flick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> GestureOptions {
        GestureOptions {
            hold_time: 0.2,
            flick_time: 0.2,
            min_swipe_distance: 30.0,
        }
    }

    #[test]
    fn hold_fires_exactly_once() {
        let options = opts();
        let mut machine = TapHold::new();
        assert_eq!(machine.tick(0.15, &options), None);
        assert_eq!(machine.tick(0.1, &options), Some(Gesture::Hold));
        assert_eq!(machine.tick(0.1, &options), None);
        // Hold consumed the session; release emits nothing.
        assert_eq!(machine.on_up(&options), None);
    }

    #[test]
    fn quick_release_is_a_tap() {
        let options = opts();
        let mut machine = TapHold::new();
        assert_eq!(machine.tick(0.1, &options), None);
        assert_eq!(machine.on_up(&options), Some(Gesture::Tap));
    }

    #[test]
    fn movement_cancels_tap_and_hold() {
        let options = opts();
        let mut machine = TapHold::new();
        machine.on_move();
        assert_eq!(machine.tick(0.5, &options), None);
        assert_eq!(machine.on_up(&options), None);
    }

    #[test]
    fn tap_threshold_is_inclusive() {
        let options = opts();
        let mut machine = TapHold::new();
        assert_eq!(machine.tick(0.2, &options), None);
        assert_eq!(machine.on_up(&options), Some(Gesture::Tap));
    }

    #[test]
    fn fast_long_swipe_is_a_flick() {
        let options = opts();
        let mut machine = SwipeFlick::new();
        machine.on_move(50.0);
        machine.tick(0.05);
        assert_eq!(machine.on_up(&options), Some(Gesture::Flick));
    }

    #[test]
    fn short_swipe_is_not_a_flick() {
        let options = opts();
        let mut machine = SwipeFlick::new();
        machine.on_move(10.0);
        machine.tick(0.05);
        assert_eq!(machine.on_up(&options), None);
    }

    #[test]
    fn slow_swipe_is_not_a_flick() {
        let options = opts();
        let mut machine = SwipeFlick::new();
        machine.on_move(50.0);
        for _ in 0..10 {
            machine.tick(0.05);
        }
        assert_eq!(machine.on_up(&options), None);
    }

    #[test]
    fn flick_timer_waits_for_first_move() {
        let options = opts();
        let mut machine = SwipeFlick::new();
        // A full second of stillness before the swipe begins.
        for _ in 0..20 {
            machine.tick(0.05);
        }
        machine.on_move(50.0);
        machine.tick(0.05);
        assert_eq!(machine.on_up(&options), Some(Gesture::Flick));
    }

    #[test]
    fn release_without_movement_is_not_a_flick() {
        let options = opts();
        let machine = SwipeFlick::new();
        assert_eq!(machine.on_up(&options), None);
    }
}
