// SPDX-License-Identifier: MPL-2.0
//! Application layer - interfaces the queue consumes.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - The notification queue depends only on these ports
//! - Infrastructure (overlay windows, tokio timers) implements them
//! - Tests plug in fakes from [`crate::test_utils`]

pub mod port;
