// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants shared by every screen and by the toast surface.

## Organization

- **Palette**: Base and semantic colors
- **Swatches**: Preset colors offered by the style form
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_toaster::ui::design_tokens::{palette, spacing};

let padding = spacing::MD; // 16px
assert!(palette::PRIMARY_500.b > palette::PRIMARY_500.r);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_500: Color = Color::from_rgb(0.424, 0.459, 0.490); // #6c757d
    pub const GRAY_300: Color = Color::from_rgb(0.80, 0.82, 0.84);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.24, 0.55, 0.99);
    pub const PRIMARY_500: Color = Color::from_rgb(0.051, 0.431, 0.992); // #0d6efd
    pub const PRIMARY_600: Color = Color::from_rgb(0.04, 0.35, 0.80);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.863, 0.208, 0.271);
    pub const SUCCESS_500: Color = Color::from_rgb(0.098, 0.529, 0.329);
    pub const INFO_500: Color = Color::from_rgb(0.051, 0.792, 0.941);
}

// ============================================================================
// Style Form Swatches
// ============================================================================

/// Preset colors offered next to the background and text color inputs.
pub mod swatches {
    use crate::domain::style::HexColor;

    pub const PRESETS: [HexColor; 8] = [
        HexColor::from_rgb(0x6c, 0x75, 0x7d),
        HexColor::from_rgb(0xff, 0xff, 0xff),
        HexColor::from_rgb(0x21, 0x25, 0x29),
        HexColor::from_rgb(0x0d, 0x6e, 0xfd),
        HexColor::from_rgb(0x19, 0x87, 0x54),
        HexColor::from_rgb(0xdc, 0x35, 0x45),
        HexColor::from_rgb(0xff, 0xc1, 0x07),
        HexColor::from_rgb(0x6f, 0x42, 0xc1),
    ];
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;

    /// Toast and card surfaces
    pub const SURFACE: f32 = 0.97;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;

    pub const INPUT_WIDTH: f32 = 140.0;
    pub const SWATCH: f32 = 20.0;
    pub const SWATCH_PREVIEW: f32 = 36.0;

    pub const TOAST_WIDTH: f32 = 320.0;
    pub const CARD_WIDTH: f32 = 560.0;
    pub const POSITION_PICKER_WIDTH: f32 = 220.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page title
    pub const TITLE_LG: f32 = 30.0;

    /// Section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Most UI text, labels, toast bodies
    pub const BODY: f32 = 14.0;

    /// Hints and validation messages
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.15,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Floating toasts
    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 10.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::CARD_WIDTH > sizing::TOAST_WIDTH);
    assert!(sizing::SWATCH_PREVIEW > sizing::SWATCH);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
