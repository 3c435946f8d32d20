// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects shared by the queue, the surfaces and the config.
//!
//! # Modules
//!
//! - [`toast`]: Toast timing and buffer types ([`DisplayDuration`](toast::DisplayDuration),
//!   [`SettleDelay`](toast::SettleDelay), [`BufferCapacity`](toast::BufferCapacity))

pub mod toast;
