// SPDX-License-Identifier: GPL-3.0-only

//! CoreMediaIO property constants
//!
//! Selectors, scopes and elements are FourCC codes packed big-endian into a
//! `u32`, matching the values in `CMIOHardwareObject.h`.

/// FourCC code used for property selectors, scopes and elements
pub type FourCharCode = u32;

/// Pack a 4-byte ASCII tag into its FourCC value
pub const fn four_cc(tag: &[u8; 4]) -> FourCharCode {
    (tag[0] as u32) << 24 | (tag[1] as u32) << 16 | (tag[2] as u32) << 8 | tag[3] as u32
}

/// The one well-known object: the CoreMediaIO hardware system object
pub const SYSTEM_OBJECT_ID: u32 = 1;

/// Selector for the system object's device list (`kCMIOHardwarePropertyDevices`)
pub const PROPERTY_DEVICES: FourCharCode = four_cc(b"dev#");

/// Selector for an object's display name (`kCMIOObjectPropertyName`)
pub const PROPERTY_NAME: FourCharCode = four_cc(b"lnam");

/// Selector for "this process is streaming from the device"
/// (`kCMIODevicePropertyDeviceIsRunning`)
pub const PROPERTY_DEVICE_IS_RUNNING: FourCharCode = four_cc(b"goin");

/// Selector for "some process is streaming from the device"
/// (`kCMIODevicePropertyDeviceIsRunningSomewhere`)
pub const PROPERTY_DEVICE_IS_RUNNING_SOMEWHERE: FourCharCode = four_cc(b"gone");

/// Wildcard property scope (`kCMIOObjectPropertyScopeWildcard`)
pub const SCOPE_WILDCARD: FourCharCode = four_cc(b"****");

/// Wildcard property element (`kCMIOObjectPropertyElementWildcard`)
pub const ELEMENT_WILDCARD: u32 = 0xFFFF_FFFF;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_cc_packing() {
        assert_eq!(four_cc(b"abcd"), 0x6162_6364);
        assert_eq!(four_cc(b"\0\0\0\x01"), 1);
    }

    #[test]
    fn test_selector_values() {
        // Values from CMIOHardwareObject.h
        assert_eq!(PROPERTY_DEVICES, 0x6465_7623);
        assert_eq!(PROPERTY_NAME, 0x6C6E_616D);
        assert_eq!(PROPERTY_DEVICE_IS_RUNNING, 0x676F_696E);
        assert_eq!(PROPERTY_DEVICE_IS_RUNNING_SOMEWHERE, 0x676F_6E65);
        assert_eq!(SCOPE_WILDCARD, 0x2A2A_2A2A);
    }
}
