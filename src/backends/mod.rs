// SPDX-License-Identifier: MPL-2.0

//! Backend layer for platform hardware access
//!
//! - [`camera`]: capture device enumeration and property probing via
//!   CoreMediaIO

pub mod camera;
