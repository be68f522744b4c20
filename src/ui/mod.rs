// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! UI code follows the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`playground`] - Trigger buttons and the style form
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Toast surface: queue, lifecycle and overlay rendering
//! - [`styles`] - Centralized styling (buttons, containers, toasts)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod notifications;
pub mod playground;
pub mod styles;
pub mod theming;
