// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.
//!
//! # Categories
//!
//! - **Styled toast**: initial values of the style form
//! - **Toast surface**: how many toasts show at once
//! - **Diagnostics**: event buffer capacity

pub use crate::domain::style::{
    DEFAULT_BACKGROUND, DEFAULT_COLOR, DEFAULT_DURATION, DEFAULT_POSITION,
};

// ==========================================================================
// Toast Surface Defaults
// ==========================================================================

/// Default number of toasts visible at once.
pub const DEFAULT_MAX_VISIBLE: usize = crate::domain::limits::max_visible_bounds::DEFAULT;

/// Minimum number of toasts visible at once.
pub const MIN_MAX_VISIBLE: usize = crate::domain::limits::max_visible_bounds::MIN;

/// Maximum number of toasts visible at once.
pub const MAX_MAX_VISIBLE: usize = crate::domain::limits::max_visible_bounds::MAX;

/// Interval of the expiry tick while toasts are on screen (milliseconds).
pub const TOAST_TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default diagnostics buffer capacity (number of events).
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize =
    crate::domain::limits::buffer_capacity_bounds::DEFAULT;

/// Capacity of the channel between diagnostics handles and the collector.
pub const DIAGNOSTICS_CHANNEL_CAPACITY: usize = 256;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MAX_VISIBLE <= DEFAULT_MAX_VISIBLE);
    assert!(DEFAULT_MAX_VISIBLE <= MAX_MAX_VISIBLE);
    assert!(TOAST_TICK_INTERVAL_MS > 0);
    assert!(DIAGNOSTICS_CHANNEL_CAPACITY > 0);
};
