// SPDX-License-Identifier: MPL-2.0
//! Toast newtypes.
//!
//! This module provides type-safe wrappers for queue timing values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, DEFAULT_DISPLAY_DURATION_MS, DEFAULT_SETTLE_DELAY_MS,
    MAX_DIAGNOSTICS_BUFFER_CAPACITY, MAX_DISPLAY_DURATION_MS, MAX_SETTLE_DELAY_MS,
    MIN_DIAGNOSTICS_BUFFER_CAPACITY, MIN_DISPLAY_DURATION_MS, MIN_SETTLE_DELAY_MS,
};
use std::time::Duration;

// =============================================================================
// DisplayDuration
// =============================================================================

/// Time a toast remains visible once its entry animation finished.
///
/// A zero duration is valid and means the toast must be dismissed manually.
///
/// # Example
///
/// ```
/// use toast_queue::domain::toast::DisplayDuration;
///
/// let duration = DisplayDuration::from_secs_f32(4.5);
/// assert_eq!(duration.as_millis(), 4_500);
///
/// // Values outside range are clamped
/// let too_long = DisplayDuration::from_millis(3_600_000);
/// assert_eq!(too_long.as_millis(), 60_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DisplayDuration(u64);

impl DisplayDuration {
    /// Creates a display duration from milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(MIN_DISPLAY_DURATION_MS, MAX_DISPLAY_DURATION_MS))
    }

    /// Creates a display duration from fractional seconds.
    ///
    /// Negative and non-finite values map to zero.
    #[must_use]
    pub fn from_secs_f32(secs: f32) -> Self {
        if !secs.is_finite() || secs <= 0.0 {
            return Self(0);
        }
        // Saturating float-to-int cast, then clamped.
        Self::from_millis((secs * 1000.0).round() as u64)
    }

    /// A duration of zero: the toast never times out.
    #[must_use]
    pub fn manual() -> Self {
        Self(0)
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true when no dismiss timer should ever run.
    #[must_use]
    pub fn is_manual(self) -> bool {
        self.0 == 0
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        Self(DEFAULT_DISPLAY_DURATION_MS)
    }
}

// =============================================================================
// SettleDelay
// =============================================================================

/// Pause between dismissing a toast and presenting the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleDelay(u64);

impl SettleDelay {
    /// Creates a settle delay from milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(MIN_SETTLE_DELAY_MS, MAX_SETTLE_DELAY_MS))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for SettleDelay {
    fn default() -> Self {
        Self(DEFAULT_SETTLE_DELAY_MS)
    }
}

// =============================================================================
// BufferCapacity
// =============================================================================

/// Number of queue events kept by the diagnostics buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new buffer capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(
            MIN_DIAGNOSTICS_BUFFER_CAPACITY,
            MAX_DIAGNOSTICS_BUFFER_CAPACITY,
        ))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_duration_default_is_four_and_a_half_seconds() {
        assert_eq!(
            DisplayDuration::default().as_duration(),
            Duration::from_millis(4_500)
        );
        assert!(!DisplayDuration::default().is_manual());
    }

    #[test]
    fn display_duration_clamps_to_max() {
        assert_eq!(
            DisplayDuration::from_millis(u64::MAX).as_millis(),
            MAX_DISPLAY_DURATION_MS
        );
    }

    #[test]
    fn display_duration_from_secs_handles_odd_input() {
        assert!(DisplayDuration::from_secs_f32(-1.0).is_manual());
        assert!(DisplayDuration::from_secs_f32(f32::NAN).is_manual());
        assert_eq!(
            DisplayDuration::from_secs_f32(f32::INFINITY),
            DisplayDuration::manual()
        );
        assert_eq!(DisplayDuration::from_secs_f32(1.25).as_millis(), 1_250);
    }

    #[test]
    fn zero_display_duration_is_manual() {
        assert!(DisplayDuration::from_millis(0).is_manual());
        assert!(DisplayDuration::manual().is_manual());
    }

    #[test]
    fn settle_delay_clamps() {
        assert_eq!(
            SettleDelay::from_millis(60_000).as_duration(),
            Duration::from_millis(MAX_SETTLE_DELAY_MS)
        );
        assert_eq!(
            SettleDelay::default().as_duration(),
            Duration::from_millis(DEFAULT_SETTLE_DELAY_MS)
        );
    }

    #[test]
    fn buffer_capacity_clamps() {
        assert_eq!(
            BufferCapacity::new(0).value(),
            MIN_DIAGNOSTICS_BUFFER_CAPACITY
        );
        assert_eq!(
            BufferCapacity::new(1_000_000).value(),
            MAX_DIAGNOSTICS_BUFFER_CAPACITY
        );
        assert_eq!(BufferCapacity::new(500).value(), 500);
    }
}
