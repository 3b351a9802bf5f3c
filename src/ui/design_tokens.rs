// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the page.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use stellar_view::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::SPACE_900
};
let padding = spacing::MD; // 16px
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
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.9, 0.91, 0.93);

    // Deep-space surfaces
    pub const SPACE_900: Color = Color::from_rgb(0.03, 0.04, 0.09);
    pub const SPACE_800: Color = Color::from_rgb(0.06, 0.08, 0.15);
    pub const SPACE_700: Color = Color::from_rgb(0.10, 0.12, 0.22);

    // Brand colors (NASA blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.6, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.04, 0.24, 0.57);
    pub const PRIMARY_600: Color = Color::from_rgb(0.03, 0.18, 0.45);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;

    /// Card background over the page surface
    pub const SURFACE: f32 = 0.95;
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
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const SPINNER: f32 = 48.0;

    /// Fixed height of the header bar above the page scrollable.
    pub const HEADER_HEIGHT: f32 = 56.0;
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Largest height of a feature image inside a section.
    pub const FEATURE_IMAGE_HEIGHT: f32 = 380.0;
    pub const THUMBNAIL: f32 = 200.0;
    pub const LIBRARY_COLUMNS: usize = 3;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Section headings
    pub const TITLE_LG: f32 = 30.0;

    /// App name in the header
    pub const TITLE_MD: f32 = 20.0;

    /// Card headings
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY: f32 = 14.0;

    /// Dates, captions, credits
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
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
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::LIBRARY_COLUMNS > 0);
    assert!(sizing::BUTTON_HEIGHT < sizing::HEADER_HEIGHT);
    assert!(sizing::FEATURE_IMAGE_HEIGHT < crate::section::SECTION_HEIGHT);
};
