// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all UI components.

pub mod button;
pub mod container;
pub mod toast;

use crate::domain::style::HexColor;
use iced::Color;

/// Converts a form color into an Iced color.
#[must_use]
pub fn hex_to_color(hex: HexColor) -> Color {
    Color::from_rgb8(hex.r(), hex.g(), hex.b())
}
