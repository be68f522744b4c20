// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::domain::style::HexColor;
use crate::ui::design_tokens::{border, opacity, radius};
use crate::ui::styles::hex_to_color;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface of the "Options and styles" form.
///
/// Derived from the active theme so it reads in both light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Header and footer bands of the card.
pub fn card_band(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Large preview square next to a color input.
pub fn swatch_preview(color: HexColor) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(Background::Color(hex_to_color(color))),
        border: Border {
            color: theme.extended_palette().background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_is_slightly_translucent() {
        let style = card(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, opacity::SURFACE),
            other => panic!("expected color background, got {other:?}"),
        }
    }

    #[test]
    fn swatch_preview_shows_the_color() {
        let color = HexColor::from_rgb(0x6c, 0x75, 0x7d);
        let style = swatch_preview(color)(&Theme::Dark);
        assert_eq!(style.background, Some(Background::Color(hex_to_color(color))));
    }
}
