// SPDX-License-Identifier: MPL-2.0
//! Bounded count newtypes.
//!
//! Both types clamp on construction so a value read from a config file can
//! never request an empty or unbounded buffer.

/// Diagnostic buffer capacity bounds (100 to 10000 events).
pub mod buffer_capacity_bounds {
    pub const MIN: usize = 100;
    pub const MAX: usize = 10_000;
    pub const DEFAULT: usize = 1_000;
}

/// Visible toast bounds (1 to 20 toasts on screen at once).
pub mod max_visible_bounds {
    pub const MIN: usize = 1;
    pub const MAX: usize = 20;
    pub const DEFAULT: usize = 5;
}

/// Capacity of the diagnostics event buffer.
///
/// ```ignore
/// let capacity = BufferCapacity::new(50_000);
/// assert_eq!(capacity.value(), 10_000); // clamped
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new buffer capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

/// Number of toasts the surface shows at once before queueing the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxVisible(usize);

impl MaxVisible {
    /// Creates a new limit, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(max_visible_bounds::MIN, max_visible_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for MaxVisible {
    fn default() -> Self {
        Self(max_visible_bounds::DEFAULT)
    }
}
