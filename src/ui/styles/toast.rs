// SPDX-License-Identifier: MPL-2.0
//! Toast surface styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::notifications::ToastColors;
use crate::ui::styles::hex_to_color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Standard toast frame with a kind-colored accent border.
pub fn standard(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Toast drawn with explicit background and text colors.
pub fn styled(colors: ToastColors) -> container::Style {
    container::Style {
        background: Some(Background::Color(hex_to_color(colors.background))),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        text_color: Some(hex_to_color(colors.text)),
        ..Default::default()
    }
}

/// Card layout of custom toasts: a bordered panel with a header band.
pub fn custom_card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::MD,
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Dismiss button. Inherits the toast text color when one is given.
pub fn dismiss_button(
    text_color: Option<Color>,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text = text_color.unwrap_or(theme.extended_palette().background.base.text);
        let hover_alpha = match status {
            button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
            button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
            button::Status::Active | button::Status::Disabled => None,
        };

        button::Style {
            background: hover_alpha.map(|a| {
                Background::Color(Color {
                    a,
                    ..palette::GRAY_500
                })
            }),
            text_color: text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
