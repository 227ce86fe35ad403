// SPDX-License-Identifier: MPL-2.0

//! Integration tests for device status classification and report output

use camcheck::report::print_report;
use camcheck::{CameraDevice, DeviceStatus};

fn device(id: u32, name: &str, running: bool, somewhere: bool) -> CameraDevice {
    CameraDevice {
        id,
        name: name.to_string(),
        is_running: running,
        is_running_somewhere: somewhere,
    }
}

#[test]
fn test_classification_table() {
    // The status is a total function of the two flags; `running` wins.
    assert_eq!(DeviceStatus::classify(false, false), DeviceStatus::Free);
    assert_eq!(
        DeviceStatus::classify(false, true),
        DeviceStatus::InUseByOtherProcess
    );
    assert_eq!(
        DeviceStatus::classify(true, false),
        DeviceStatus::InUseByThisProcess
    );
    assert_eq!(
        DeviceStatus::classify(true, true),
        DeviceStatus::InUseByThisProcess
    );
}

#[test]
fn test_label_falls_back_to_identifier() {
    // A device with an unreadable name must print its identifier, not an
    // empty label
    let unnamed = device(2, "", false, false);
    assert_eq!(unnamed.label(), "Camera 2");
}

#[test]
fn test_report_scenario() {
    let devices = vec![
        device(1, "FaceTime HD", false, false),
        device(2, "", false, true),
    ];

    let mut out = Vec::new();
    let busy_elsewhere = print_report(&devices, &mut out).expect("report rendering failed");

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "FaceTime HD: free\nCamera 2: in use by another process\n"
    );
    assert!(busy_elsewhere, "device 2 is in use by another process");
}

#[test]
fn test_aggregate_busy_elsewhere_wins() {
    // One busy-elsewhere device flips the aggregate no matter how many
    // others are free
    let devices = vec![
        device(1, "A", false, false),
        device(2, "B", false, true),
        device(3, "C", false, false),
        device(4, "D", true, true),
    ];

    let mut out = Vec::new();
    let busy_elsewhere = print_report(&devices, &mut out).unwrap();
    assert!(busy_elsewhere);
}

#[test]
fn test_aggregate_clean_run() {
    // Free and in-use-by-this-process devices do not count as busy elsewhere
    let devices = vec![device(1, "A", false, false), device(2, "B", true, true)];

    let mut out = Vec::new();
    let busy_elsewhere = print_report(&devices, &mut out).unwrap();
    assert!(!busy_elsewhere);
}

#[test]
fn test_empty_device_list_prints_nothing() {
    let mut out = Vec::new();
    let busy_elsewhere = print_report(&[], &mut out).unwrap();
    assert!(out.is_empty());
    assert!(!busy_elsewhere);
}
