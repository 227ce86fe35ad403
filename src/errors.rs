// SPDX-License-Identifier: MPL-2.0

//! Error types for device enumeration and property queries

use std::fmt;

/// Result status returned by the CoreMediaIO C API (`OSStatus`)
pub type OsStatus = i32;

/// Fatal errors: the device list itself could not be obtained.
///
/// Anything in here aborts the run; per-device property problems are a
/// [`QueryError`] and are recovered locally instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumerationError {
    /// Sizing the device-list buffer failed
    SizeQuery(OsStatus),
    /// Fetching the device list failed
    DataQuery(OsStatus),
    /// Built without a property-query backend for this platform
    Unsupported,
}

/// Per-property query errors.
///
/// One unreadable property on one device must not take down the rest of the
/// run, so callers map these to a default value rather than propagating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The object does not expose the requested property
    NoSuchProperty,
    /// Sizing the property value failed
    SizeQuery(OsStatus),
    /// The encoded value is not the size the caller expects
    SizeMismatch { expected: usize, actual: usize },
    /// Fetching the property value failed
    DataQuery(OsStatus),
}

impl fmt::Display for EnumerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumerationError::SizeQuery(status) => {
                write!(f, "could not size the capture device list (status {})", status)
            }
            EnumerationError::DataQuery(status) => {
                write!(f, "could not read the capture device list (status {})", status)
            }
            EnumerationError::Unsupported => {
                write!(f, "capture device enumeration requires CoreMediaIO (macOS)")
            }
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::NoSuchProperty => write!(f, "property not present on object"),
            QueryError::SizeQuery(status) => {
                write!(f, "property size query failed (status {})", status)
            }
            QueryError::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "property size mismatch (expected {} bytes, got {})",
                    expected, actual
                )
            }
            QueryError::DataQuery(status) => {
                write!(f, "property data query failed (status {})", status)
            }
        }
    }
}

impl std::error::Error for EnumerationError {}
impl std::error::Error for QueryError {}
