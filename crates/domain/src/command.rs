//! Command — the parsed form of one input line.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An immutable `(action, device, argument)` triple.
///
/// `action` and `device` are non-empty word groups joined with `_`; the
/// parser guarantees both before constructing a `Command`. The argument, when
/// present, has already been coerced to an integer, so a `Command` can never
/// hold non-numeric argument text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Action to perform, e.g. `switch_on`.
    pub action: String,
    /// Target device name, e.g. `television`.
    pub device: String,
    /// Optional numeric argument, e.g. the amount for `heat`.
    pub argument: Option<i64>,
}

impl Command {
    /// Assemble a command from its parts.
    pub fn new(
        action: impl Into<String>,
        device: impl Into<String>,
        argument: Option<i64>,
    ) -> Self {
        Self {
            action: action.into(),
            device: device.into(),
            argument,
        }
    }
}

impl fmt::Display for Command {
    /// Canonical `action -> device [-> argument]` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.action, self.device)?;
        if let Some(argument) = self.argument {
            write!(f, " -> {argument}")?;
        }
        Ok(())
    }
}
