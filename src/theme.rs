//! Centralized theme constants for the converter window
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Palettes
// =============================================================================

/// Colors that change with the light/dark toggle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub bg_base: Color32,
    pub bg_card: Color32,
    pub bg_result: Color32,
    pub bg_toggle: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub border: Color32,
}

pub const LIGHT: Palette = Palette {
    bg_base: Color32::from_rgb(0xf3, 0xf4, 0xf6),    // gray-100
    bg_card: Color32::WHITE,
    bg_result: Color32::from_rgb(0xf3, 0xf4, 0xf6),  // gray-100
    bg_toggle: Color32::from_rgb(0xe5, 0xe7, 0xeb),  // gray-200
    text_primary: Color32::from_rgb(0x1f, 0x29, 0x37), // gray-800
    text_muted: Color32::from_rgb(0x6b, 0x72, 0x80),   // gray-500
    border: Color32::from_rgb(0xd1, 0xd5, 0xdb),       // gray-300
};

pub const DARK: Palette = Palette {
    bg_base: Color32::from_rgb(0x11, 0x18, 0x27),    // gray-900
    bg_card: Color32::from_rgb(0x1f, 0x29, 0x37),    // gray-800
    bg_result: Color32::from_rgb(0x37, 0x41, 0x51),  // gray-700
    bg_toggle: Color32::from_rgb(0x37, 0x41, 0x51),  // gray-700
    text_primary: Color32::from_rgb(0xf3, 0xf4, 0xf6), // gray-100
    text_muted: Color32::from_rgb(0x9c, 0xa3, 0xaf),   // gray-400
    border: Color32::from_rgb(0x4b, 0x55, 0x63),       // gray-600
};

pub fn palette(dark: bool) -> &'static Palette {
    if dark {
        &DARK
    } else {
        &LIGHT
    }
}

// =============================================================================
// COLORS - Accent (Indigo)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x4f, 0x46, 0xe5); // indigo-600
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 22.0;
pub const FONT_RESULT: f32 = 20.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_CAPTION: f32 = 11.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const CARD_WIDTH: f32 = 400.0;
pub const FLAG_SIZE: egui::Vec2 = egui::vec2(32.0, 24.0);
pub const BUTTON_HEIGHT_LARGE: f32 = 40.0;
pub const INPUT_HEIGHT: f32 = 36.0;

// =============================================================================
// CORNER RADIUS & SPACING
// =============================================================================
pub const RADIUS_SMALL: f32 = 2.0;
pub const RADIUS_DEFAULT: f32 = 6.0;
pub const RADIUS_LARGE: f32 = 12.0;
pub const STROKE_DEFAULT: f32 = 1.0;

pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 16.0;
pub const SPACING_XL: f32 = 24.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context, dark: bool) {
    let p = palette(dark);
    let base = if dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    let widget = |bg: Color32, stroke: Color32| egui::style::WidgetVisuals {
        bg_fill: bg,
        weak_bg_fill: bg,
        bg_stroke: egui::Stroke::new(STROKE_DEFAULT, stroke),
        fg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.text_primary),
        corner_radius: RADIUS_DEFAULT.into(),
        expansion: 0.0,
    };

    ctx.set_visuals(egui::Visuals {
        dark_mode: dark,
        panel_fill: p.bg_base,
        window_fill: p.bg_card,
        extreme_bg_color: p.bg_card,
        faint_bg_color: p.bg_result,
        hyperlink_color: ACCENT,
        override_text_color: Some(p.text_primary),
        widgets: egui::style::Widgets {
            noninteractive: widget(p.bg_card, p.border),
            inactive: widget(p.bg_card, p.border),
            hovered: widget(p.bg_result, ACCENT),
            active: widget(p.bg_toggle, ACCENT),
            open: widget(p.bg_result, p.border),
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        ..base
    });

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(SPACING_MD, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn card_frame(dark: bool) -> egui::Frame {
    egui::Frame::new()
        .fill(palette(dark).bg_card)
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
        .shadow(egui::epaint::Shadow {
            offset: [0, 6],
            blur: 18,
            spread: 0,
            color: Color32::from_black_alpha(40),
        })
}

pub fn result_frame(dark: bool) -> egui::Frame {
    egui::Frame::new()
        .fill(palette(dark).bg_result)
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Accent indigo button for the primary action
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text.into())
            .size(FONT_BODY)
            .color(Color32::WHITE),
    )
    .fill(ACCENT)
    .corner_radius(RADIUS_DEFAULT)
}

/// Round icon button used for the theme toggle
pub fn button_round(icon: &str, dark: bool) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(icon).size(FONT_BODY + 2.0))
        .fill(palette(dark).bg_toggle)
        .corner_radius(RADIUS_LARGE * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ_per_mode() {
        assert_eq!(palette(false), &LIGHT);
        assert_eq!(palette(true), &DARK);
        assert_ne!(LIGHT.bg_card, DARK.bg_card);
    }
}
