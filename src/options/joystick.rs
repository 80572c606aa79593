use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Joystick", inline)]
#[serde(default)]
/// Joystick displacement parameters.
pub struct JoystickOptions {
    /// Maximum distance the handle can travel from the origin, in local
    /// units.
    #[schemars(title = "Movement Range", range(min = 10.0, max = 500.0), extend("step" = 1.0))]
    pub movement_range: f32,
}

impl Default for JoystickOptions {
    fn default() -> Self {
        Self {
            movement_range: 100.0,
        }
    }
}
