// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every view.
//!
//! - **Palette**: base, brand, semantic and vulnerability colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Border** / **Radius** / **Shadow**
//! - **Motion**: animation timings
//!
//! ```
//! use ip_inspector::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let scrim = Color {
//!     a: opacity::OVERLAY_MEDIUM,
//!     ..palette::BLACK
//! };
//! let padding = spacing::MD; // 16px
//! # let _ = (scrim, padding);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.43, 0.48);

    // Brand colors (teal scale)
    pub const PRIMARY_500: Color = Color::from_rgb(0.05, 0.58, 0.58);
    pub const PRIMARY_700: Color = Color::from_rgb(0.04, 0.42, 0.43);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);

    // Vulnerability severities
    pub const CRITICAL: Color = Color::from_rgb(0.6, 0.11, 0.11);
    pub const HIGH: Color = Color::from_rgb(0.86, 0.2, 0.2);
    pub const MEDIUM: Color = Color::from_rgb(0.92, 0.55, 0.1);
    pub const LOW: Color = Color::from_rgb(0.2, 0.55, 0.85);
    pub const UNKNOWN: Color = GRAY_400;
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Skeleton placeholder bars
    pub const SKELETON: f32 = 0.35;
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
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    pub const FORM_WIDTH: f32 = 360.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const MODAL_WIDTH: f32 = 420.0;

    /// Thickness of auto-expire progress bars
    pub const PROGRESS_HEIGHT: f32 = 3.0;
    /// Height of one skeleton text line
    pub const SKELETON_LINE: f32 = 14.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    use iced::font::{Font, Weight};

    /// Headings and emphasized labels
    pub const BOLD: Font = Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    };

    /// Service banners
    pub const MONO: Font = Font::MONOSPACE;

    /// Page heading
    pub const TITLE_LG: f32 = 26.0;

    /// Dialog and section headings
    pub const TITLE_MD: f32 = 20.0;

    /// Card headers
    pub const TITLE_SM: f32 = 17.0;

    /// Form inputs
    pub const BODY_LG: f32 = 15.0;

    /// Most UI text
    pub const BODY: f32 = 14.0;

    /// Secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Badges, timestamps
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Inputs and separators
    pub const WIDTH_SM: f32 = 1.0;

    /// Accent borders on notifications
    pub const WIDTH_MD: f32 = 2.0;

    /// Assertive notifications
    pub const WIDTH_LG: f32 = 3.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
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

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.35,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    use std::time::Duration;

    /// Frame interval of the animation/deadline tick.
    pub const TICK: Duration = Duration::from_millis(100);

    /// Delay between consecutive result fragments.
    pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);

    /// Delay between consecutive skeleton placeholders.
    pub const SKELETON_STAGGER: Duration = Duration::from_millis(200);

    /// Period of the skeleton pulse.
    pub const PULSE_PERIOD: Duration = Duration::from_millis(1500);

    /// How long a copy button shows its outcome.
    pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);
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
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SKELETON > 0.0 && opacity::SKELETON < 1.0);

    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_LG > border::WIDTH_MD);
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
