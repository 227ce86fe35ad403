// SPDX-License-Identifier: MPL-2.0

//! camcheck - camera usage reporting and call-alert notifications
//!
//! This library backs two small command-line tools:
//!
//! - `camcheck` enumerates the system's video-capture devices through
//!   CoreMediaIO and reports, per device, whether it is free, in use by this
//!   process, or in use by another process.
//! - `camcheck-notify` sends a one-shot desktop notification through
//!   osascript.
//!
//! # Architecture
//!
//! - [`backends`]: platform hardware access (CoreMediaIO property queries)
//! - [`report`]: status line rendering and the busy-elsewhere aggregate
//! - [`notify`]: AppleScript notification builder and runner
//! - [`constants`]: FourCC property selectors and well-known object IDs
//! - [`errors`]: enumeration and property-query error types

pub mod backends;
pub mod constants;
pub mod errors;
pub mod notify;
pub mod report;

// Re-export commonly used types
pub use backends::camera::{CameraDevice, DeviceStatus};
pub use errors::{EnumerationError, QueryError};
