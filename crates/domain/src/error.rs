//! Typed errors raised while dispatching an action on a device.
//!
//! Each layer defines its own typed errors; the `app` crate wraps these with
//! `#[from]` conversions into its interpreter error. No `String` variants.

use crate::action::expected_parameters;

/// Errors raised by [`Device::perform`](crate::device::Device::perform).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    /// The action is not in the device's declared action table, even if
    /// another device defines it.
    #[error("\"{action}\" is not available for {device}")]
    ActionNotAvailable {
        action: String,
        device: &'static str,
    },

    /// The action exists but the supplied argument count does not match its
    /// declared arity. The message enumerates the expected parameter names,
    /// or states "no parameters".
    #[error("\"{action}\" on {device} must be called with {}", expected_parameters(.params))]
    IncorrectAction {
        action: String,
        device: &'static str,
        params: &'static [&'static str],
    },
}
