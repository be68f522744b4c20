// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::domain::style::HexColor;
use crate::ui::design_tokens::{
    border,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::styles::hex_to_color;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (trigger buttons, "Test").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_300)),
            text_color: palette::GRAY_500,
            border: Border {
                color: palette::GRAY_500,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Small square color swatch. The selected swatch gets a thick ring.
pub fn swatch(
    color: HexColor,
    selected: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let ring = theme.extended_palette().background.strong.color;
        let (ring_color, ring_width) = match (selected, status) {
            (true, _) => (palette::PRIMARY_500, border::WIDTH_MD),
            (false, button::Status::Hovered) => (palette::PRIMARY_400, border::WIDTH_SM),
            (false, _) => (ring, border::WIDTH_SM),
        };

        button::Style {
            background: Some(Background::Color(hex_to_color(color))),
            text_color: Color::TRANSPARENT,
            border: Border {
                color: ring_color,
                width: ring_width,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
