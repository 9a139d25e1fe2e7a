//! Boiler — holds a temperature and responds to `heat` / `cool`.

use serde::Serialize;

use crate::action::{self, ActionSpec};
use crate::error::DeviceError;

/// A boiler with an integer temperature, in degrees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Boiler {
    temperature: i64,
}

impl Default for Boiler {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TEMPERATURE)
    }
}

impl Boiler {
    /// Device kind used in error messages.
    pub const KIND: &'static str = "boiler";

    /// Starting temperature when none is configured.
    pub const DEFAULT_TEMPERATURE: i64 = 83;

    /// Declared action table. Both actions take an `amount`.
    pub const ACTIONS: &'static [ActionSpec] = &[
        ActionSpec {
            name: "heat",
            params: &["amount"],
        },
        ActionSpec {
            name: "cool",
            params: &["amount"],
        },
    ];

    /// Create a boiler at the given starting temperature.
    #[must_use]
    pub fn new(temperature: i64) -> Self {
        Self { temperature }
    }

    /// Current temperature in degrees.
    #[must_use]
    pub fn temperature(&self) -> i64 {
        self.temperature
    }

    /// Raise the temperature by `amount` degrees, saturating at the extremes.
    pub fn heat(&mut self, amount: i64) -> String {
        self.temperature = self.temperature.saturating_add(amount);
        format!("heat the boiler up by {amount} degrees")
    }

    /// Lower the temperature by `amount` degrees, saturating at the extremes.
    pub fn cool(&mut self, amount: i64) -> String {
        self.temperature = self.temperature.saturating_sub(amount);
        format!("cool the boiler down by {amount} degrees")
    }

    /// Look up `action` in the table, check the argument, and apply it.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::ActionNotAvailable`] for unknown actions, or
    /// [`DeviceError::IncorrectAction`] when the amount is missing.
    pub fn perform(&mut self, action: &str, argument: Option<i64>) -> Result<String, DeviceError> {
        let spec = action::resolve(Self::ACTIONS, Self::KIND, action)?;
        spec.check_argument(Self::KIND, argument.is_some())?;
        match (spec.name, argument) {
            ("heat", Some(amount)) => Ok(self.heat(amount)),
            ("cool", Some(amount)) => Ok(self.cool(amount)),
            // Table and match cover the same names.
            (other, _) => Err(DeviceError::ActionNotAvailable {
                action: other.to_string(),
                device: Self::KIND,
            }),
        }
    }
}
