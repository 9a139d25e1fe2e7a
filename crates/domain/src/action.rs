//! Action tables — the declared operations of a device.
//!
//! Dispatch is table-driven: every device exposes a `const` list of
//! [`ActionSpec`] entries, and an action is looked up and arity-checked there
//! before anything is invoked.

use serde::Serialize;

use crate::error::DeviceError;

/// One declared action: its name and the parameters it expects.
///
/// Arity is the number of declared parameters — strictly 0 or 1 in this
/// system; optional arguments are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionSpec {
    /// Action name as it appears in commands (word groups joined with `_`).
    pub name: &'static str,
    /// Names of the expected parameters, in order.
    pub params: &'static [&'static str],
}

impl ActionSpec {
    /// Number of arguments the action accepts.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.params.len()
    }

    /// Check the supplied argument count against the declared arity.
    pub(crate) fn check_argument(
        &self,
        device: &'static str,
        supplied: bool,
    ) -> Result<(), DeviceError> {
        if self.arity() == usize::from(supplied) {
            Ok(())
        } else {
            Err(DeviceError::IncorrectAction {
                action: self.name.to_string(),
                device,
                params: self.params,
            })
        }
    }
}

/// Find `action` in a device's table.
pub(crate) fn resolve<'t>(
    table: &'t [ActionSpec],
    device: &'static str,
    action: &str,
) -> Result<&'t ActionSpec, DeviceError> {
    table
        .iter()
        .find(|spec| spec.name == action)
        .ok_or_else(|| DeviceError::ActionNotAvailable {
            action: action.to_string(),
            device,
        })
}

/// Human-readable arity expectation used in error messages.
pub(crate) fn expected_parameters(params: &[&str]) -> String {
    if params.is_empty() {
        "no parameters".to_string()
    } else {
        let names = params
            .iter()
            .map(|name| format!("\"{name}\""))
            .collect::<Vec<_>>()
            .join(", ");
        format!("these parameters [{names}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[ActionSpec] = &[
        ActionSpec {
            name: "open",
            params: &[],
        },
        ActionSpec {
            name: "heat",
            params: &["amount"],
        },
    ];

    #[test]
    fn should_report_arity_from_parameter_count() {
        assert_eq!(TABLE[0].arity(), 0);
        assert_eq!(TABLE[1].arity(), 1);
    }

    #[test]
    fn should_resolve_declared_action() {
        let spec = resolve(TABLE, "garage", "open").unwrap();
        assert_eq!(spec.name, "open");
    }

    #[test]
    fn should_reject_unknown_action() {
        let err = resolve(TABLE, "garage", "launch").unwrap_err();
        assert_eq!(
            err,
            DeviceError::ActionNotAvailable {
                action: "launch".to_string(),
                device: "garage",
            }
        );
    }

    #[test]
    fn should_accept_matching_argument_count() {
        assert!(TABLE[0].check_argument("garage", false).is_ok());
        assert!(TABLE[1].check_argument("boiler", true).is_ok());
    }

    #[test]
    fn should_reject_argument_for_nullary_action() {
        let err = TABLE[0].check_argument("garage", true).unwrap_err();
        assert!(matches!(err, DeviceError::IncorrectAction { params: &[], .. }));
    }

    #[test]
    fn should_reject_missing_argument_for_unary_action() {
        let err = TABLE[1].check_argument("boiler", false).unwrap_err();
        assert!(matches!(
            err,
            DeviceError::IncorrectAction { params: &["amount"], .. }
        ));
    }

    #[test]
    fn should_describe_expected_parameters() {
        assert_eq!(expected_parameters(&[]), "no parameters");
        assert_eq!(
            expected_parameters(&["amount"]),
            "these parameters [\"amount\"]"
        );
    }
}
