// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing and size used by the showcase comes from here.

## Organization

- **Palette**: Gold-on-black studio colors plus grays and semantic colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border** / **Radius** / **Shadow**

## Examples

```
use m3dan_studio::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};
let padding = spacing::MD;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Page surfaces (near-black with a warm tint)
    pub const INK_950: Color = Color::from_rgb(0.039, 0.035, 0.031);
    pub const INK_900: Color = Color::from_rgb(0.071, 0.067, 0.059);
    pub const INK_800: Color = Color::from_rgb(0.110, 0.102, 0.090);

    pub const GRAY_600: Color = Color::from_rgb(0.42, 0.40, 0.38);
    pub const GRAY_400: Color = Color::from_rgb(0.60, 0.58, 0.55);
    pub const GRAY_200: Color = Color::from_rgb(0.82, 0.80, 0.77);
    pub const PAPER_50: Color = Color::from_rgb(0.98, 0.97, 0.95);

    // Brand gold
    pub const GOLD_300: Color = Color::from_rgb(0.945, 0.839, 0.561);
    pub const GOLD_400: Color = Color::from_rgb(0.902, 0.757, 0.380);
    pub const GOLD_500: Color = Color::from_rgb(0.831, 0.667, 0.227);
    pub const GOLD_600: Color = Color::from_rgb(0.706, 0.549, 0.161);
    pub const GOLD_700: Color = Color::from_rgb(0.545, 0.420, 0.122);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.478, 0.631, 0.820);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SUBTLE: f32 = 0.2;
    pub const MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Dimmed page behind the detail overlay.
    pub const BACKDROP: f32 = 0.85;

    /// Semi-transparent panels and cards.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
    pub const SECTION: f32 = 96.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const SPINNER: f32 = 48.0;
    pub const NAVBAR_HEIGHT: f32 = 64.0;

    /// Viewer viewport heights.
    pub const CARD_VIEWER_HEIGHT: f32 = 220.0;
    pub const DETAIL_VIEWER_HEIGHT: f32 = 420.0;
    pub const HERO_VIEWER_HEIGHT: f32 = 440.0;

    pub const CARD_WIDTH: f32 = 340.0;
    pub const CARD_HEIGHT: f32 = 520.0;
    pub const DETAIL_PANEL_WIDTH: f32 = 820.0;
    pub const CONTENT_MAX_WIDTH: f32 = 1180.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Fixed section heights of the page; the portfolio grows with its grid.
    pub const HERO_SECTION_HEIGHT: f32 = 760.0;
    pub const PORTFOLIO_HEADER_HEIGHT: f32 = 280.0;
    pub const ABOUT_SECTION_HEIGHT: f32 = 820.0;
    pub const CONTACT_SECTION_HEIGHT: f32 = 860.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale, from the hero headline down to badges.

    pub const DISPLAY: f32 = 52.0;
    pub const TITLE_LG: f32 = 34.0;
    pub const TITLE_MD: f32 = 22.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
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
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };

    /// Warm glow under hovered gold buttons.
    pub const GLOW: Shadow = Shadow {
        color: palette::GOLD_700,
        offset: Vector::ZERO,
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::SECTION > spacing::XXL);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > opacity::MEDIUM && opacity::BACKDROP < 1.0);

    assert!(sizing::DETAIL_VIEWER_HEIGHT > sizing::CARD_VIEWER_HEIGHT);
    assert!(sizing::CARD_HEIGHT > sizing::CARD_VIEWER_HEIGHT);
    assert!(sizing::HERO_SECTION_HEIGHT > sizing::HERO_VIEWER_HEIGHT);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn gold_scale_darkens_monotonically() {
        let golds = [
            palette::GOLD_300,
            palette::GOLD_400,
            palette::GOLD_500,
            palette::GOLD_600,
            palette::GOLD_700,
        ];
        for pair in golds.windows(2) {
            assert!(pair[0].r > pair[1].r);
            assert!(pair[0].r > pair[0].b, "gold keeps a warm hue");
        }
    }
}
