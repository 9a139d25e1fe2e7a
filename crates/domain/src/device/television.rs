//! Television — responds to `switch_on` / `switch_off`.

use serde::Serialize;

use crate::action::{self, ActionSpec};
use crate::error::DeviceError;

/// A television, off by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Television {
    is_on: bool,
}

impl Television {
    /// Device kind used in error messages.
    pub const KIND: &'static str = "television";

    /// Declared action table.
    pub const ACTIONS: &'static [ActionSpec] = &[
        ActionSpec {
            name: "switch_on",
            params: &[],
        },
        ActionSpec {
            name: "switch_off",
            params: &[],
        },
    ];

    /// Whether the television is currently on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Switch the television on. Idempotent.
    pub fn switch_on(&mut self) -> String {
        self.is_on = true;
        "switch on the television".to_string()
    }

    /// Switch the television off. Idempotent.
    pub fn switch_off(&mut self) -> String {
        self.is_on = false;
        "switch off the television".to_string()
    }

    /// Look up `action` in the table, check the argument, and apply it.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::ActionNotAvailable`] for unknown actions, or
    /// [`DeviceError::IncorrectAction`] when an argument is supplied.
    pub fn perform(&mut self, action: &str, argument: Option<i64>) -> Result<String, DeviceError> {
        let spec = action::resolve(Self::ACTIONS, Self::KIND, action)?;
        spec.check_argument(Self::KIND, argument.is_some())?;
        match spec.name {
            "switch_on" => Ok(self.switch_on()),
            "switch_off" => Ok(self.switch_off()),
            // Table and match cover the same names.
            other => Err(DeviceError::ActionNotAvailable {
                action: other.to_string(),
                device: Self::KIND,
            }),
        }
    }
}
