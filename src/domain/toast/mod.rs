// SPDX-License-Identifier: MPL-2.0
//! Toast domain types.
//!
//! This module provides pure domain types for the notification queue:
//! - [`DisplayDuration`]: How long a toast stays visible
//! - [`SettleDelay`]: Pause between two presentations
//! - [`BufferCapacity`]: Capacity for the diagnostics event buffer

mod newtypes;

pub use newtypes::{BufferCapacity, DisplayDuration, SettleDelay};
