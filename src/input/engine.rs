//! Converts raw pointer events into joystick and gesture outputs.
//!
//! The `GestureEngine` owns all transient pointer state (session
//! ownership, origin/current positions, hold and flick timers) and the
//! engine configuration. It is the only thing that sits between the host's
//! raw pointer events and the joystick/movement collaborators.

use glam::Vec2;

use super::event::{PointerEvent, PointerId};
use super::session::PointerSession;
use crate::error::FlickstickError;
use crate::geometry::ScreenToLocal;
use crate::joystick;
use crate::options::Options;
use crate::output::Output;

/// Converts raw pointer events into [`Output`] batches.
///
/// Owns the single pointer session: the first pointer down wins ownership
/// of the joystick and keeps it until its matching release; moves and
/// releases from any other pointer are discarded. Hold and flick timers
/// advance only through [`tick`](Self::tick), which the host calls once
/// per simulation frame with that frame's delta time.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// let outputs = engine.handle_event(event);
/// output::route_all(outputs, &mut visual, &mut consumer);
///
/// // Once per frame, after the frame's events:
/// let outputs = engine.tick(dt);
/// output::route_all(outputs, &mut visual, &mut consumer);
/// ```
pub struct GestureEngine<P> {
    /// Joystick range and gesture thresholds.
    options: Options,
    /// Host geometry service, resolved once at construction.
    projector: P,
    /// The owning pointer's session, if any.
    session: Option<PointerSession>,
    /// Reusable output buffer; cleared at the start of every entry point.
    outputs: Vec<Output>,
}

impl<P: ScreenToLocal> GestureEngine<P> {
    /// Create an engine with the given options and geometry service.
    ///
    /// # Errors
    ///
    /// Returns [`FlickstickError::InvalidOptions`] if any range or
    /// threshold is zero, negative, or non-finite. Classification with
    /// such values is undefined, so construction refuses rather than
    /// starting sessions that misbehave.
    pub fn new(options: Options, projector: P) -> Result<Self, FlickstickError> {
        options.validate()?;
        Ok(Self {
            options,
            projector,
            session: None,
            outputs: Vec::with_capacity(8),
        })
    }

    /// Process a raw pointer event and return the outputs it produced.
    ///
    /// The slice is valid until the next call into the engine. Events from
    /// pointers other than the current owner produce an empty batch.
    pub fn handle_event(&mut self, event: PointerEvent) -> &[Output] {
        self.outputs.clear();
        match event {
            PointerEvent::Down { id, position } => {
                self.handle_down(id, position);
            }
            PointerEvent::Move { id, position } => {
                self.handle_move(id, position);
            }
            PointerEvent::Up { id } => self.handle_up(id),
        }
        &self.outputs
    }

    /// Advance the hold and flick timers by one frame.
    ///
    /// Call once per simulation frame, after that frame's pointer events.
    /// May emit [`Output::Gesture`] with [`Gesture::Hold`] at the tick
    /// that crosses the hold threshold.
    ///
    /// [`Gesture::Hold`]: crate::input::Gesture::Hold
    pub fn tick(&mut self, delta_seconds: f32) -> &[Output] {
        self.outputs.clear();
        if let Some(session) = &mut self.session {
            if let Some(gesture) =
                session.tap_hold.tick(delta_seconds, &self.options.gestures)
            {
                log::debug!("hold registered");
                self.outputs.push(Output::Gesture(gesture));
            }
            session.swipe_flick.tick(delta_seconds);
        }
        &self.outputs
    }

    /// Whether a pointer currently owns the joystick.
    #[must_use]
    pub fn session_active(&self) -> bool {
        self.session.is_some()
    }

    /// Current normalized displacement, for hosts that poll instead of
    /// consuming [`Output::DirectionChanged`]. Zero with no active session.
    #[must_use]
    pub fn direction(&self) -> Vec2 {
        let range = self.options.joystick.movement_range;
        self.session.as_ref().map_or(Vec2::ZERO, |session| {
            joystick::normalize_displacement(
                joystick::clamp_displacement(
                    session.origin,
                    session.current,
                    range,
                ),
                range,
            )
        })
    }

    /// Read-only access to the engine options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// First pointer down wins; anything else while a session is active is
    /// a no-op.
    fn handle_down(&mut self, id: PointerId, position: Vec2) {
        if self.session.is_some() {
            return;
        }
        let origin = self.projector.screen_to_local(position);
        log::debug!("session start: pointer {id} at {origin}");
        self.session = Some(PointerSession::start(id, origin));
        self.outputs.extend([
            Output::SetActive(true),
            Output::SetOrigin(origin),
            Output::SetHandle(Vec2::ZERO),
        ]);
    }

    fn handle_move(&mut self, id: PointerId, position: Vec2) {
        let local = self.projector.screen_to_local(position);
        let range = self.options.joystick.movement_range;
        let Some(session) = &mut self.session else {
            return;
        };
        if !session.owns(id) {
            return;
        }
        session.record_move(local);

        let delta =
            joystick::clamp_displacement(session.origin, session.current, range);
        self.outputs.push(Output::SetHandle(delta));
        self.outputs.push(Output::DirectionChanged(
            joystick::normalize_displacement(delta, range),
        ));
    }

    /// Destroy the session and classify the release. Destruction is
    /// unconditional on a matching owner, whether or not a gesture fires.
    fn handle_up(&mut self, id: PointerId) {
        let Some(session) = self.session.take() else {
            // No active session: silent no-op, not an error.
            return;
        };
        if !session.owns(id) {
            self.session = Some(session);
            return;
        }

        log::debug!("session end: pointer {id}");
        self.outputs.push(Output::SetActive(false));
        if let Some(tap) = session.tap_hold.on_up(&self.options.gestures) {
            log::debug!("tap registered");
            self.outputs.push(Output::Gesture(tap));
        }
        self.outputs.push(Output::SetHandle(Vec2::ZERO));
        self.outputs.push(Output::DirectionChanged(Vec2::ZERO));
        if let Some(flick) = session.swipe_flick.on_up(&self.options.gestures)
        {
            log::debug!("flick registered");
            self.outputs.push(Output::Gesture(flick));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Identity;
    use crate::input::Gesture;
    use crate::options::{GestureOptions, JoystickOptions};

    fn engine() -> GestureEngine<Identity> {
        let options = Options {
            joystick: JoystickOptions {
                movement_range: 100.0,
            },
            gestures: GestureOptions {
                hold_time: 0.2,
                flick_time: 0.2,
                min_swipe_distance: 30.0,
            },
        };
        GestureEngine::new(options, Identity).unwrap()
    }

    fn down(engine: &mut GestureEngine<Identity>, id: PointerId, x: f32, y: f32) -> Vec<Output> {
        engine
            .handle_event(PointerEvent::Down {
                id,
                position: Vec2::new(x, y),
            })
            .to_vec()
    }

    fn mv(engine: &mut GestureEngine<Identity>, id: PointerId, x: f32, y: f32) -> Vec<Output> {
        engine
            .handle_event(PointerEvent::Move {
                id,
                position: Vec2::new(x, y),
            })
            .to_vec()
    }

    fn up(engine: &mut GestureEngine<Identity>, id: PointerId) -> Vec<Output> {
        engine.handle_event(PointerEvent::Up { id }).to_vec()
    }

    fn gestures(outputs: &[Output]) -> Vec<Gesture> {
        outputs
            .iter()
            .filter_map(|o| match o {
                Output::Gesture(g) => Some(*g),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn rejects_non_positive_options() {
        let mut options = Options::default();
        options.joystick.movement_range = 0.0;
        assert!(GestureEngine::new(options, Identity).is_err());

        let mut options = Options::default();
        options.gestures.hold_time = -1.0;
        assert!(GestureEngine::new(options, Identity).is_err());
    }

    #[test]
    fn first_pointer_wins_ownership() {
        let mut engine = engine();
        let first = down(&mut engine, 1, 10.0, 10.0);
        assert_eq!(
            first,
            vec![
                Output::SetActive(true),
                Output::SetOrigin(Vec2::new(10.0, 10.0)),
                Output::SetHandle(Vec2::ZERO),
            ]
        );

        // A second concurrent pointer is ignored entirely.
        assert!(down(&mut engine, 2, 50.0, 50.0).is_empty());
        assert!(mv(&mut engine, 2, 60.0, 60.0).is_empty());
        assert_eq!(engine.direction(), Vec2::ZERO);
    }

    #[test]
    fn non_owner_up_leaves_session_unchanged() {
        let mut engine = engine();
        let _ = down(&mut engine, 1, 0.0, 0.0);
        let _ = mv(&mut engine, 1, 30.0, 0.0);

        assert!(up(&mut engine, 2).is_empty());
        assert!(engine.session_active());
        assert_eq!(engine.direction(), Vec2::new(0.3, 0.0));
    }

    #[test]
    fn up_without_session_is_a_silent_no_op() {
        let mut engine = engine();
        assert!(up(&mut engine, 7).is_empty());
        assert!(mv(&mut engine, 7, 1.0, 1.0).is_empty());
    }

    #[test]
    fn move_emits_handle_and_direction() {
        let mut engine = engine();
        let _ = down(&mut engine, 1, 10.0, 10.0);
        let outputs = mv(&mut engine, 1, 40.0, 50.0);
        assert_eq!(
            outputs,
            vec![
                Output::SetHandle(Vec2::new(30.0, 40.0)),
                Output::DirectionChanged(Vec2::new(0.3, 0.4)),
            ]
        );
    }

    #[test]
    fn displacement_clamps_preserving_direction() {
        let mut engine = engine();
        let _ = down(&mut engine, 1, 0.0, 0.0);
        let outputs = mv(&mut engine, 1, 300.0, 400.0);
        assert_eq!(
            outputs,
            vec![
                Output::SetHandle(Vec2::new(60.0, 80.0)),
                Output::DirectionChanged(Vec2::new(0.6, 0.8)),
            ]
        );
    }

    #[test]
    fn normalized_axes_bounded_for_all_moves() {
        let mut engine = engine();
        let _ = down(&mut engine, 1, 0.0, 0.0);
        for (x, y) in
            [(1000.0, 0.0), (-500.0, 900.0), (3.0, -4.0), (0.0, 0.0)]
        {
            for output in mv(&mut engine, 1, x, y) {
                if let Output::DirectionChanged(direction) = output {
                    assert!(direction.x.abs() <= 1.0 + 1e-6);
                    assert!(direction.y.abs() <= 1.0 + 1e-6);
                }
            }
        }
    }

    #[test]
    fn quick_motionless_release_emits_tap() {
        let mut engine = engine();
        let _ = down(&mut engine, 1, 0.0, 0.0);
        assert!(engine.tick(0.1).is_empty());
        let outputs = up(&mut engine, 1);
        assert_eq!(
            outputs,
            vec![
                Output::SetActive(false),
                Output::Gesture(Gesture::Tap),
                Output::SetHandle(Vec2::ZERO),
                Output::DirectionChanged(Vec2::ZERO),
            ]
        );
    }

    #[test]
    fn movement_disqualifies_tap() {
        let mut engine = engine();
        let _ = down(&mut engine, 1, 0.0, 0.0);
        let _ = mv(&mut engine, 1, 2.0, 0.0);
        assert_eq!(gestures(&up(&mut engine, 1)), vec![]);
    }

    #[test]
    fn hold_fires_once_at_threshold_crossing() {
        let mut engine = engine();
        let _ = down(&mut engine, 1, 0.0, 0.0);
        assert!(engine.tick(0.15).is_empty());
        assert_eq!(
            engine.tick(0.1),
            &[Output::Gesture(Gesture::Hold)]
        );
        // Past the threshold nothing re-emits, and release is not a tap.
        assert!(engine.tick(0.1).is_empty());
        assert_eq!(gestures(&up(&mut engine, 1)), vec![]);
    }

    #[test]
    fn fast_long_swipe_release_emits_flick() {
        let mut engine = engine();
        let _ = down(&mut engine, 1, 0.0, 0.0);
        let _ = engine.tick(0.05);
        let _ = mv(&mut engine, 1, 50.0, 0.0);
        let _ = engine.tick(0.05);
        assert_eq!(gestures(&up(&mut engine, 1)), vec![Gesture::Flick]);
    }

    #[test]
    fn slow_swipe_does_not_flick() {
        let mut engine = engine();
        let _ = down(&mut engine, 1, 0.0, 0.0);
        let _ = mv(&mut engine, 1, 50.0, 0.0);
        for _ in 0..10 {
            let _ = engine.tick(0.05);
        }
        assert_eq!(gestures(&up(&mut engine, 1)), vec![]);
    }

    #[test]
    fn short_swipe_does_not_flick() {
        let mut engine = engine();
        let _ = down(&mut engine, 1, 0.0, 0.0);
        let _ = mv(&mut engine, 1, 10.0, 0.0);
        let _ = engine.tick(0.05);
        assert_eq!(gestures(&up(&mut engine, 1)), vec![]);
    }

    #[test]
    fn hold_then_flick_can_share_a_session() {
        let mut engine = engine();
        let _ = down(&mut engine, 1, 0.0, 0.0);
        assert_eq!(
            gestures(engine.tick(0.25)),
            vec![Gesture::Hold]
        );
        // Flick timing starts at the first move, so a late fast swipe
        // still qualifies.
        let _ = mv(&mut engine, 1, 50.0, 0.0);
        let _ = engine.tick(0.05);
        assert_eq!(gestures(&up(&mut engine, 1)), vec![Gesture::Flick]);
    }

    #[test]
    fn release_resets_visual_and_direction() {
        let mut engine = engine();
        let _ = down(&mut engine, 1, 0.0, 0.0);
        let _ = mv(&mut engine, 1, 80.0, 0.0);
        let outputs = up(&mut engine, 1);
        assert!(outputs.contains(&Output::SetActive(false)));
        assert!(outputs.contains(&Output::SetHandle(Vec2::ZERO)));
        assert!(outputs.contains(&Output::DirectionChanged(Vec2::ZERO)));
        assert!(!engine.session_active());
        assert_eq!(engine.direction(), Vec2::ZERO);
    }

    #[test]
    fn new_session_starts_after_release() {
        let mut engine = engine();
        let _ = down(&mut engine, 1, 0.0, 0.0);
        let _ = up(&mut engine, 1);

        // Timers and flags reset with the new session.
        let outputs = down(&mut engine, 2, 5.0, 5.0);
        assert!(outputs.contains(&Output::SetOrigin(Vec2::new(5.0, 5.0))));
        assert!(engine.tick(0.15).is_empty());
        assert_eq!(gestures(&up(&mut engine, 2)), vec![Gesture::Tap]);
    }

    #[test]
    fn projection_applies_before_tracking() {
        use crate::geometry::RectProjection;

        let options = Options::default();
        let projection =
            RectProjection::new(Vec2::new(100.0, 100.0), Vec2::ONE);
        let mut engine = GestureEngine::new(options, projection).unwrap();
        let outputs = engine.handle_event(PointerEvent::Down {
            id: 1,
            position: Vec2::new(130.0, 140.0),
        });
        assert!(outputs
            .iter()
            .any(|o| *o == Output::SetOrigin(Vec2::new(30.0, 40.0))));
    }

    #[test]
    fn session_without_release_persists() {
        let mut engine = engine();
        let _ = down(&mut engine, 1, 0.0, 0.0);
        let _ = mv(&mut engine, 1, 40.0, 0.0);
        for _ in 0..1000 {
            let _ = engine.tick(0.016);
        }
        assert!(engine.session_active());
        assert_eq!(engine.direction(), Vec2::new(0.4, 0.0));
    }
}
