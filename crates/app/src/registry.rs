//! Device registry — the fixed name → device mapping.
//!
//! The registry is constructed once by the composition root and injected into
//! the interpreter; there is no hidden global device table. The device *set*
//! never changes after construction, only device state does.

use std::collections::BTreeMap;

use homecmd_domain::device::{Boiler, Device, Garage, Television};

/// Lookup error carrying the offending device name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("\"{0}\" is not an available device")]
pub struct DeviceNotAvailable(pub String);

/// Mapping from device name to its single owned instance.
#[derive(Debug, Clone)]
pub struct DeviceRegistry {
    devices: BTreeMap<String, Device>,
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl DeviceRegistry {
    /// The standard device set: a closed `garage`, a `boiler` at the default
    /// temperature, and an off `television`.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_devices([
            (Garage::KIND, Device::Garage(Garage::default())),
            (Boiler::KIND, Device::Boiler(Boiler::default())),
            (Television::KIND, Device::Television(Television::default())),
        ])
    }

    /// Build a registry from an explicit device set.
    pub fn from_devices<N: Into<String>>(devices: impl IntoIterator<Item = (N, Device)>) -> Self {
        Self {
            devices: devices
                .into_iter()
                .map(|(name, device)| (name.into(), device))
                .collect(),
        }
    }

    /// Resolve a device name for dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceNotAvailable`] when no device is registered under
    /// `name`.
    pub fn resolve(&mut self, name: &str) -> Result<&mut Device, DeviceNotAvailable> {
        self.devices
            .get_mut(name)
            .ok_or_else(|| DeviceNotAvailable(name.to_string()))
    }

    /// Read-only access to a device by name.
    #[must_use]
    pub fn device(&self, name: &str) -> Option<&Device> {
        self.devices.get(name)
    }

    /// Serializable view of every device's state, in name order.
    #[must_use]
    pub fn snapshot(&self) -> &BTreeMap<String, Device> {
        &self.devices
    }

    /// Registered device names, in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.devices.keys().map(String::as_str)
    }
}
