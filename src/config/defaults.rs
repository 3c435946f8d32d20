// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Display**: How long a toast stays visible
//! - **Animation**: Settle delay between two presentations
//! - **Layout**: Toast and overlay window geometry
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default time a toast stays visible once fully presented (in milliseconds).
pub const DEFAULT_DISPLAY_DURATION_MS: u64 = 4_500;

/// Minimum display duration. Zero means the toast is dismissed manually.
pub const MIN_DISPLAY_DURATION_MS: u64 = 0;

/// Maximum display duration (in milliseconds).
pub const MAX_DISPLAY_DURATION_MS: u64 = 60_000;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Delay between the exit of one toast and the next presentation (in milliseconds).
///
/// Matches the exit animation so the overlay is gone before the queue moves on.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 500;

/// Minimum settle delay (in milliseconds).
pub const MIN_SETTLE_DELAY_MS: u64 = 0;

/// Maximum settle delay (in milliseconds).
pub const MAX_SETTLE_DELAY_MS: u64 = 5_000;

/// Duration of the overlay window fade in/out (in milliseconds).
pub const WINDOW_ANIMATION_MS: u64 = 300;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Height requested from the surface when presenting a toast (points).
pub const DEFAULT_TOAST_HEIGHT: f32 = 80.0;

/// Rendered height of the toast card itself (points).
pub const TOAST_CARD_HEIGHT: f32 = 53.0;

/// Drag distance after which the toast starts fading out (points).
pub const DRAG_FADE_THRESHOLD: f32 = 15.0;

/// Extra window height below the toast so taps don't reach the view underneath.
pub const WINDOW_EXTRA_HEIGHT: f32 = 30.0;

/// Padding kept between the overlay window and the safe area (points).
pub const SAFE_AREA_PADDING: f32 = 24.0;

/// Additional offset used when the window is aligned to the very bottom.
pub const BOTTOM_ALIGN_OFFSET: f32 = 25.0;

/// Height of the browser bottom toolbar (points).
pub const BOTTOM_TOOLBAR_HEIGHT: f32 = 46.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of queue events kept in the diagnostics buffer.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;
