// SPDX-License-Identifier: GPL-3.0-only

//! CoreMediaIO property-query backend
//!
//! All raw framework access lives here: one `#[repr(C)]` address struct, the
//! three object-property calls, and typed readers on top of them. Callers
//! never see a raw pointer.
//!
//! Property reads follow one shape: check the object exposes the property,
//! size it, require the size the caller expects, fetch. Any step failing is a
//! [`QueryError`], which for per-device reads degrades to a default value
//! instead of aborting the run.

use crate::constants::{
    ELEMENT_WILDCARD, FourCharCode, PROPERTY_DEVICE_IS_RUNNING,
    PROPERTY_DEVICE_IS_RUNNING_SOMEWHERE, PROPERTY_DEVICES, PROPERTY_NAME, SCOPE_WILDCARD,
    SYSTEM_OBJECT_ID,
};
use crate::errors::{EnumerationError, OsStatus, QueryError};

use super::types::CameraDevice;
use core_foundation::base::TCFType;
use core_foundation::string::{CFString, CFStringRef};
use std::ffi::c_void;
use std::mem::{self, MaybeUninit};
use std::ptr;
use tracing::debug;

/// Object identifier issued by the registry (`CMIOObjectID`)
pub type CmioObjectId = u32;

/// The (selector, scope, element) triple identifying one queryable property
/// (`CMIOObjectPropertyAddress`)
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct PropertyAddress {
    pub selector: FourCharCode,
    pub scope: FourCharCode,
    pub element: u32,
}

impl PropertyAddress {
    /// Address a selector under the wildcard scope and element
    pub const fn wildcard(selector: FourCharCode) -> Self {
        PropertyAddress {
            selector,
            scope: SCOPE_WILDCARD,
            element: ELEMENT_WILDCARD,
        }
    }
}

#[link(name = "CoreMediaIO", kind = "framework")]
unsafe extern "C" {
    fn CMIOObjectHasProperty(object_id: CmioObjectId, address: *const PropertyAddress) -> u8;

    fn CMIOObjectGetPropertyDataSize(
        object_id: CmioObjectId,
        address: *const PropertyAddress,
        qualifier_data_size: u32,
        qualifier_data: *const c_void,
        data_size: *mut u32,
    ) -> OsStatus;

    fn CMIOObjectGetPropertyData(
        object_id: CmioObjectId,
        address: *const PropertyAddress,
        qualifier_data_size: u32,
        qualifier_data: *const c_void,
        data_size: u32,
        data_used: *mut u32,
        data: *mut c_void,
    ) -> OsStatus;
}

/// Read a fixed-size scalar property.
///
/// The encoded size must be exactly `size_of::<T>()`; a registry that
/// reports anything else yields [`QueryError::SizeMismatch`] rather than a
/// partially-filled value.
pub fn read_property<T: Copy>(
    object_id: CmioObjectId,
    address: &PropertyAddress,
) -> Result<T, QueryError> {
    if unsafe { CMIOObjectHasProperty(object_id, address) } == 0 {
        return Err(QueryError::NoSuchProperty);
    }

    let mut size: u32 = 0;
    let status =
        unsafe { CMIOObjectGetPropertyDataSize(object_id, address, 0, ptr::null(), &mut size) };
    if status != 0 {
        return Err(QueryError::SizeQuery(status));
    }

    let expected = mem::size_of::<T>();
    if size as usize != expected {
        return Err(QueryError::SizeMismatch {
            expected,
            actual: size as usize,
        });
    }

    let mut value = MaybeUninit::<T>::uninit();
    let mut used: u32 = 0;
    let status = unsafe {
        CMIOObjectGetPropertyData(
            object_id,
            address,
            0,
            ptr::null(),
            size,
            &mut used,
            value.as_mut_ptr().cast(),
        )
    };
    if status != 0 {
        return Err(QueryError::DataQuery(status));
    }

    Ok(unsafe { value.assume_init() })
}

/// Read a boolean property, encoded by the registry as one nonzero `u32`
pub fn read_bool(object_id: CmioObjectId, selector: FourCharCode) -> Result<bool, QueryError> {
    let address = PropertyAddress::wildcard(selector);
    read_property::<u32>(object_id, &address).map(|value| value != 0)
}

/// Read the display name, or `None` when the property is absent or unreadable
fn read_device_name(object_id: CmioObjectId) -> Option<String> {
    let address = PropertyAddress::wildcard(PROPERTY_NAME);
    let string_ref: CFStringRef = match read_property(object_id, &address) {
        Ok(string_ref) => string_ref,
        Err(err) => {
            debug!(object_id, %err, "Name property unreadable");
            return None;
        }
    };
    if string_ref.is_null() {
        return None;
    }
    // The name property follows the copy rule; wrapping takes over the release.
    Some(unsafe { CFString::wrap_under_create_rule(string_ref) }.to_string())
}

/// Fetch the registry's device identifier list.
///
/// Size query then data query against the system object; either failing is
/// fatal for the run. The result is truncated to the byte count the fetch
/// reports, so a list that shrank between the two calls never yields
/// trailing zero identifiers.
pub fn device_ids() -> Result<Vec<CmioObjectId>, EnumerationError> {
    let address = PropertyAddress::wildcard(PROPERTY_DEVICES);

    let mut size: u32 = 0;
    let status = unsafe {
        CMIOObjectGetPropertyDataSize(SYSTEM_OBJECT_ID, &address, 0, ptr::null(), &mut size)
    };
    if status != 0 {
        return Err(EnumerationError::SizeQuery(status));
    }

    let id_size = mem::size_of::<CmioObjectId>();
    let mut ids: Vec<CmioObjectId> = vec![0; size as usize / id_size];
    if ids.is_empty() {
        return Ok(ids);
    }

    let mut used: u32 = 0;
    let status = unsafe {
        CMIOObjectGetPropertyData(
            SYSTEM_OBJECT_ID,
            &address,
            0,
            ptr::null(),
            size,
            &mut used,
            ids.as_mut_ptr().cast(),
        )
    };
    if status != 0 {
        return Err(EnumerationError::DataQuery(status));
    }

    ids.truncate(used as usize / id_size);
    Ok(ids)
}

/// Probe every device in the registry.
///
/// Only the list fetch itself can fail; per-device properties degrade to
/// defaults (empty name, `false` flags) so one misbehaving device cannot
/// hide the rest.
pub fn probe_all() -> Result<Vec<CameraDevice>, EnumerationError> {
    let ids = device_ids()?;
    debug!(count = ids.len(), "Enumerated capture devices");
    Ok(ids.into_iter().map(probe_device).collect())
}

fn probe_device(id: CmioObjectId) -> CameraDevice {
    CameraDevice {
        id,
        name: read_device_name(id).unwrap_or_default(),
        is_running: read_flag(id, PROPERTY_DEVICE_IS_RUNNING),
        is_running_somewhere: read_flag(id, PROPERTY_DEVICE_IS_RUNNING_SOMEWHERE),
    }
}

fn read_flag(id: CmioObjectId, selector: FourCharCode) -> bool {
    match read_bool(id, selector) {
        Ok(value) => value,
        Err(err) => {
            debug!(object_id = id, selector, %err, "Flag unreadable, treating as false");
            false
        }
    }
}
