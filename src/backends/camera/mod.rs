// SPDX-License-Identifier: MPL-2.0

//! Capture device backend
//!
//! The concrete backend is CoreMediaIO: identifiers come from the hardware
//! system object, status comes from two boolean device properties. Probing
//! happens once per run; nothing is cached between runs.

#[cfg(target_os = "macos")]
pub mod cmio;
pub mod types;

pub use types::{CameraDevice, DeviceStatus};

use crate::errors::EnumerationError;

/// Enumerate the registry and probe every capture device.
///
/// Fails only when the device list itself cannot be obtained; unreadable
/// per-device properties degrade to defaults inside the backend.
#[cfg(target_os = "macos")]
pub fn probe_cameras() -> Result<Vec<CameraDevice>, EnumerationError> {
    cmio::probe_all()
}

/// Without CoreMediaIO there is nothing to enumerate; the classifier and
/// report logic stay buildable and testable on other hosts.
#[cfg(not(target_os = "macos"))]
pub fn probe_cameras() -> Result<Vec<CameraDevice>, EnumerationError> {
    Err(EnumerationError::Unsupported)
}
