// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::{Background, Theme};
    use iced_toaster::domain::style::{HexColor, DEFAULT_BACKGROUND, DEFAULT_COLOR};
    use iced_toaster::ui::design_tokens::{palette, sizing, spacing, swatches};
    use iced_toaster::ui::notifications::ToastColors;
    use iced_toaster::ui::styles::{self, button, container, toast};
    use iced_toaster::ui::theming::ThemeMode;

    #[test]
    fn all_styles_are_callable_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = button::primary(&theme, iced::widget::button::Status::Active);
            let _ = button::swatch(DEFAULT_BACKGROUND, true)(
                &theme,
                iced::widget::button::Status::Hovered,
            );
            let _ = container::card(&theme);
            let _ = container::card_band(&theme);
            let _ = container::swatch_preview(DEFAULT_COLOR)(&theme);
            let _ = toast::standard(&theme, palette::SUCCESS_500);
            let _ = toast::custom_card(&theme);
            let _ = toast::dismiss_button(None)(&theme, iced::widget::button::Status::Pressed);
        }
    }

    #[test]
    fn styled_toast_uses_exact_user_colors() {
        let colors = ToastColors {
            background: HexColor::from_rgb(0x12, 0x34, 0x56),
            text: HexColor::from_rgb(0xfe, 0xdc, 0xba),
        };
        let style = toast::styled(colors);

        assert_eq!(
            style.background,
            Some(Background::Color(styles::hex_to_color(colors.background)))
        );
        assert_eq!(style.text_color, Some(styles::hex_to_color(colors.text)));
    }

    #[test]
    fn default_style_colors_are_offered_as_swatches() {
        assert!(swatches::PRESETS.contains(&DEFAULT_BACKGROUND));
        assert!(swatches::PRESETS.contains(&DEFAULT_COLOR));
    }

    #[test]
    fn toast_fits_inside_the_card_column() {
        assert!(sizing::TOAST_WIDTH + 2.0 * spacing::MD < sizing::CARD_WIDTH);
    }

    #[test]
    fn fixed_theme_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.to_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.to_theme(), Theme::Dark);
    }
}
