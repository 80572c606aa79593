use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Gestures", inline)]
#[serde(default)]
/// Gesture classification thresholds.
pub struct GestureOptions {
    /// Seconds of motionless contact before a hold is registered.
    #[schemars(title = "Hold Time", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub hold_time: f32,
    /// Seconds after movement begins within which a release still counts
    /// as a flick.
    #[schemars(title = "Flick Time", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub flick_time: f32,
    /// Minimum origin-to-release distance for a flick, in local units.
    #[schemars(title = "Min Swipe Distance", range(min = 1.0, max = 300.0), extend("step" = 1.0))]
    pub min_swipe_distance: f32,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            hold_time: 0.2,
            flick_time: 0.2,
            min_swipe_distance: 30.0,
        }
    }
}
