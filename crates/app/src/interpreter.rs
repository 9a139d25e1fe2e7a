//! Interpreter — the parse → resolve → dispatch use-case.

use homecmd_domain::device::Outcome;
use homecmd_domain::error::DeviceError;

use crate::parser::{self, ParseError};
use crate::registry::{DeviceNotAvailable, DeviceRegistry};

/// Everything that can go wrong while interpreting one input line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InterpretError {
    /// Input does not match the command grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Device name not in the registry.
    #[error(transparent)]
    DeviceNotAvailable(#[from] DeviceNotAvailable),

    /// Action unknown for the resolved device, or arity mismatch.
    #[error(transparent)]
    Device(#[from] DeviceError),
}

/// Dispatches command lines against an explicitly injected registry.
pub struct Interpreter {
    registry: DeviceRegistry,
}

impl Interpreter {
    /// Create an interpreter over the given registry.
    #[must_use]
    pub fn new(registry: DeviceRegistry) -> Self {
        Self { registry }
    }

    /// Read-only access to the registry, for state inspection and reports.
    #[must_use]
    pub fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }

    /// Interpret one input line: parse it, resolve the target device, and
    /// perform the action on it.
    ///
    /// On success exactly the target device's state changes, per the action's
    /// documented effect. Every failure is synchronous and scoped to this one
    /// line; nothing is retried or swallowed, and the caller decides whether
    /// to continue with the next line.
    ///
    /// # Errors
    ///
    /// - [`InterpretError::Parse`] — the line does not match the grammar
    /// - [`InterpretError::DeviceNotAvailable`] — unknown device name
    /// - [`InterpretError::Device`] — the action is not declared for the
    ///   device, or its argument count does not match the declared arity
    #[tracing::instrument(skip(self))]
    pub fn interpret(&mut self, input: &str) -> Result<Outcome, InterpretError> {
        let command = parser::parse(input)?;
        tracing::debug!(
            action = %command.action,
            device = %command.device,
            argument = ?command.argument,
            "parsed command",
        );
        let device = self.registry.resolve(&command.device)?;
        let outcome = device.perform(&command.action, command.argument)?;
        tracing::info!(device = outcome.device, status = %outcome.status, "applied action");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homecmd_domain::device::Device;

    fn interpreter() -> Interpreter {
        Interpreter::new(DeviceRegistry::standard())
    }

    fn boiler_temperature(interpreter: &Interpreter) -> i64 {
        match interpreter.registry().device("boiler") {
            Some(Device::Boiler(boiler)) => boiler.temperature(),
            _ => panic!("standard registry should hold a boiler"),
        }
    }

    #[test]
    fn should_open_the_garage() {
        let mut interpreter = interpreter();
        let outcome = interpreter.interpret("open -> garage").unwrap();
        assert_eq!(outcome.status, "opening the garage");
        assert!(matches!(
            interpreter.registry().device("garage"),
            Some(Device::Garage(garage)) if garage.is_open()
        ));
    }

    #[test]
    fn should_heat_the_boiler_by_the_given_amount() {
        let mut interpreter = interpreter();
        let before = boiler_temperature(&interpreter);
        let outcome = interpreter.interpret("heat -> boiler -> 5").unwrap();
        assert_eq!(outcome.status, "heat the boiler up by 5 degrees");
        assert_eq!(boiler_temperature(&interpreter), before + 5);
    }

    #[test]
    fn should_fail_with_parse_error_on_malformed_line() {
        let mut interpreter = interpreter();
        let err = interpreter.interpret("open the garage").unwrap_err();
        assert!(matches!(err, InterpretError::Parse(_)));
    }

    #[test]
    fn should_fail_with_device_not_available_on_unknown_device() {
        let mut interpreter = interpreter();
        let err = interpreter.interpret("read -> book").unwrap_err();
        assert_eq!(
            err,
            InterpretError::DeviceNotAvailable(DeviceNotAvailable("book".to_string()))
        );
    }

    #[test]
    fn should_fail_with_action_not_available_on_foreign_action() {
        let mut interpreter = interpreter();
        // `open` exists on the garage, but not on the television.
        let err = interpreter.interpret("open -> television").unwrap_err();
        assert!(matches!(
            err,
            InterpretError::Device(DeviceError::ActionNotAvailable { .. })
        ));
    }

    #[test]
    fn should_fail_with_incorrect_action_on_arity_mismatch() {
        let mut interpreter = interpreter();
        let err = interpreter.interpret("heat -> boiler").unwrap_err();
        assert!(matches!(
            err,
            InterpretError::Device(DeviceError::IncorrectAction { .. })
        ));
    }

    #[test]
    fn should_not_touch_other_devices_on_failure() {
        let mut interpreter = interpreter();
        interpreter.interpret("open -> garage").unwrap();
        let before = boiler_temperature(&interpreter);

        interpreter.interpret("throw away -> television").unwrap_err();

        assert_eq!(boiler_temperature(&interpreter), before);
        assert!(matches!(
            interpreter.registry().device("garage"),
            Some(Device::Garage(garage)) if garage.is_open()
        ));
    }
}
