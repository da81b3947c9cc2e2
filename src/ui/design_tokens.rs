// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: palette, spacing, sizing, typography, radii,
//! shadows. Components pull from here instead of hard-coding values.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Semantic colors: LIKE is green, NOPE is red.
    pub const LIKE_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const LIKE_600: Color = Color::from_rgb(0.2, 0.58, 0.33);
    pub const NOPE_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const NOPE_600: Color = Color::from_rgb(0.76, 0.17, 0.16);

    // Accent (restart button, spinner)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Card dimensions in the stack.
    pub const CARD_WIDTH: f32 = 340.0;
    pub const CARD_HEIGHT: f32 = 440.0;

    /// Thumbnail edge in the summary gallery.
    pub const THUMBNAIL: f32 = 132.0;

    /// Loading spinner diameter.
    pub const SPINNER: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Summary headline.
    pub const TITLE_MD: f32 = 20.0;

    /// Status line, buttons.
    pub const BODY: f32 = 14.0;

    /// LIKE/NOPE stamps on the card.
    pub const STAMP: f32 = 28.0;
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
    use iced::{Shadow, Vector};

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
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
    assert!(spacing::XL > spacing::LG);
    assert!(sizing::CARD_HEIGHT > sizing::CARD_WIDTH);
};
