// SPDX-License-Identifier: MPL-2.0

//! Report rendering for the camera checker
//!
//! One line per device, `<label>: <status>`. Kept out of `main` and generic
//! over the writer so the output contract is testable against a buffer.

use crate::backends::camera::{CameraDevice, DeviceStatus};
use std::io;

/// Print one status line per device.
///
/// Returns whether any device classified as in use by another process; the
/// caller maps that to the exit code.
pub fn print_report<W: io::Write>(devices: &[CameraDevice], out: &mut W) -> io::Result<bool> {
    let mut any_in_use_elsewhere = false;
    for device in devices {
        let status = device.status();
        if status == DeviceStatus::InUseByOtherProcess {
            any_in_use_elsewhere = true;
        }
        writeln!(out, "{}: {}", device.label(), status)?;
    }
    Ok(any_in_use_elsewhere)
}
