// SPDX-License-Identifier: MPL-2.0
// Shared types for the capture device backend

//! Shared types for capture device probing

use std::fmt;

/// One video-capture device as probed from the platform registry.
///
/// Identifiers are only valid for the run that enumerated them; nothing here
/// is cached or persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraDevice {
    /// Opaque object identifier issued by the registry
    pub id: u32,
    /// Display name; empty when the name property was unreadable
    pub name: String,
    /// This process is streaming from the device
    pub is_running: bool,
    /// Some process on the system is streaming from the device
    pub is_running_somewhere: bool,
}

impl CameraDevice {
    /// Display label: the device name, or `Camera <id>` when the name
    /// property came back empty.
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            format!("Camera {}", self.id)
        } else {
            self.name.clone()
        }
    }

    /// Derive the usage status from the two running flags
    pub fn status(&self) -> DeviceStatus {
        DeviceStatus::classify(self.is_running, self.is_running_somewhere)
    }
}

/// Usage status of a capture device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceStatus {
    /// Nobody is streaming from the device
    Free,
    /// The querying process is streaming from the device
    InUseByThisProcess,
    /// Another process is streaming from the device
    InUseByOtherProcess,
}

impl DeviceStatus {
    /// Classify from the two device flags.
    ///
    /// `running` (this process) wins over `somewhere` (any process): a device
    /// we are streaming from is always reported as ours, whatever the
    /// system-wide flag says.
    pub fn classify(running: bool, somewhere: bool) -> Self {
        if running {
            DeviceStatus::InUseByThisProcess
        } else if somewhere {
            DeviceStatus::InUseByOtherProcess
        } else {
            DeviceStatus::Free
        }
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceStatus::Free => write!(f, "free"),
            DeviceStatus::InUseByThisProcess => write!(f, "in use by this process"),
            DeviceStatus::InUseByOtherProcess => write!(f, "in use by another process"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(DeviceStatus::Free.to_string(), "free");
        assert_eq!(
            DeviceStatus::InUseByThisProcess.to_string(),
            "in use by this process"
        );
        assert_eq!(
            DeviceStatus::InUseByOtherProcess.to_string(),
            "in use by another process"
        );
    }

    #[test]
    fn test_label_prefers_name() {
        let device = CameraDevice {
            id: 42,
            name: "FaceTime HD".to_string(),
            is_running: false,
            is_running_somewhere: false,
        };
        assert_eq!(device.label(), "FaceTime HD");
    }
}
