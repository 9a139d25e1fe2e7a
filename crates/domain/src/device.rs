//! Device — a stateful home appliance exposing a fixed action table.
//!
//! Each concrete device owns its state and its `const` action table; the
//! [`Device`] wrapper enum is what the registry stores and the interpreter
//! dispatches on. There is one instance per device name for the lifetime of
//! the process, with no teardown beyond process exit.

mod boiler;
mod garage;
mod television;

pub use boiler::Boiler;
pub use garage::Garage;
pub use television::Television;

use std::fmt;

use serde::Serialize;

use crate::action::ActionSpec;
use crate::error::DeviceError;

/// Wrapper enum for the concrete device types.
///
/// Serializes as the inner device's state alone; the registry already keys
/// snapshots by device name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Device {
    Garage(Garage),
    Boiler(Boiler),
    Television(Television),
}

impl Device {
    /// The device kind, as used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Garage(_) => Garage::KIND,
            Self::Boiler(_) => Boiler::KIND,
            Self::Television(_) => Television::KIND,
        }
    }

    /// The declared action table of this device.
    #[must_use]
    pub fn actions(&self) -> &'static [ActionSpec] {
        match self {
            Self::Garage(_) => Garage::ACTIONS,
            Self::Boiler(_) => Boiler::ACTIONS,
            Self::Television(_) => Television::ACTIONS,
        }
    }

    /// Perform a named action, mutating this device's state only.
    ///
    /// The action is looked up in the device's table and arity-checked before
    /// it is invoked.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::ActionNotAvailable`] when the action is not in
    /// the table, or [`DeviceError::IncorrectAction`] when the supplied
    /// argument count does not match the declared arity.
    pub fn perform(&mut self, action: &str, argument: Option<i64>) -> Result<Outcome, DeviceError> {
        let status = match self {
            Self::Garage(device) => device.perform(action, argument),
            Self::Boiler(device) => device.perform(action, argument),
            Self::Television(device) => device.perform(action, argument),
        }?;
        Ok(Outcome {
            device: self.kind(),
            status,
        })
    }
}

/// Record of a successfully applied action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Kind of the device that applied the action.
    pub device: &'static str,
    /// Human-readable status line describing the effect.
    pub status: String,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.status)
    }
}
