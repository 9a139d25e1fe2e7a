//! Garage — a door that responds to `open` / `close`.

use serde::Serialize;

use crate::action::{self, ActionSpec};
use crate::error::DeviceError;

/// A garage door, closed by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Garage {
    is_open: bool,
}

impl Garage {
    /// Device kind used in error messages.
    pub const KIND: &'static str = "garage";

    /// Declared action table.
    pub const ACTIONS: &'static [ActionSpec] = &[
        ActionSpec {
            name: "open",
            params: &[],
        },
        ActionSpec {
            name: "close",
            params: &[],
        },
    ];

    /// Whether the door is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Open the door.
    pub fn open(&mut self) -> String {
        self.is_open = true;
        "opening the garage".to_string()
    }

    /// Close the door.
    pub fn close(&mut self) -> String {
        self.is_open = false;
        "closing the garage".to_string()
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
            "open" => Ok(self.open()),
            "close" => Ok(self.close()),
            // Table and match cover the same names.
            other => Err(DeviceError::ActionNotAvailable {
                action: other.to_string(),
                device: Self::KIND,
            }),
        }
    }
}
