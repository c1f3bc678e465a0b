//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::catalog;
use crate::converter::ResultText;
use crate::theme;
use eframe::egui;

/// Flag icon, or an outlined placeholder while loading or after a failure
pub fn flag_image(ui: &mut egui::Ui, texture: Option<&egui::TextureHandle>, dark: bool) {
    match texture {
        Some(tex) => {
            ui.add(
                egui::Image::new(egui::load::SizedTexture::new(tex.id(), theme::FLAG_SIZE))
                    .corner_radius(theme::RADIUS_SMALL),
            );
        }
        None => {
            let (rect, _) = ui.allocate_exact_size(theme::FLAG_SIZE, egui::Sense::hover());
            ui.painter().rect_stroke(
                rect,
                theme::RADIUS_SMALL,
                egui::Stroke::new(theme::STROKE_DEFAULT, theme::palette(dark).border),
                egui::StrokeKind::Inside,
            );
        }
    }
}

/// Dropdown over every catalog code. Returns the newly picked code.
pub fn currency_selector(ui: &mut egui::Ui, id: &str, selected: &str, width: f32) -> Option<String> {
    let mut picked = None;
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected)
        .width(width)
        .height(320.0)
        .show_ui(ui, |ui| {
            for currency in catalog::all() {
                if ui
                    .selectable_label(currency.code == selected, currency.code)
                    .clicked()
                    && currency.code != selected
                {
                    picked = Some(currency.code.to_string());
                }
            }
        });
    picked
}

/// Small caption above a control
pub fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.add(egui::Label::new(egui::RichText::new(text).size(theme::FONT_LABEL)).selectable(false));
}

/// Accept an edit of the amount field only if it still reads as an unsigned
/// number (or a prefix of one). Otherwise the previous text stays.
pub fn amount_edit(previous: &str, edited: &str) -> String {
    if is_amount_prefix(edited) {
        edited.to_string()
    } else {
        previous.to_string()
    }
}

/// Digits with at most one decimal point, optionally followed by an exponent
/// (`e`, an optional sign, digits). Partial input such as `1.` or `2e-` passes.
fn is_amount_prefix(text: &str) -> bool {
    let mut seen_digit = false;
    let mut seen_dot = false;
    let mut seen_exp = false;
    let mut prev = None;
    for c in text.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot && !seen_exp => seen_dot = true,
            'e' | 'E' if seen_digit && !seen_exp => seen_exp = true,
            '+' | '-' if matches!(prev, Some('e' | 'E')) => {}
            _ => return false,
        }
        prev = Some(c);
    }
    true
}

/// Text of the result line: the value with its code, the error text, or a dash
pub fn result_line(result: &ResultText, target: &str) -> String {
    match result {
        ResultText::Value(value) => format!("{} {}", value, target),
        other => other.as_str().unwrap_or("—").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ERROR_TEXT;

    #[test]
    fn result_line_variants() {
        assert_eq!(
            result_line(&ResultText::Value("831.2340".into()), "INR"),
            "831.2340 INR"
        );
        assert_eq!(result_line(&ResultText::Error, "INR"), ERROR_TEXT);
        assert_eq!(result_line(&ResultText::Empty, "INR"), "—");
    }

    #[test]
    fn amount_edit_keeps_exponent_notation() {
        let kept = amount_edit("1e", "1e3");
        assert_eq!(kept, "1e3");
        assert_eq!(crate::converter::parse_amount(&kept), 1000.0);
        assert_eq!(amount_edit("1e", "1e-"), "1e-");
        assert_eq!(amount_edit("1e-", "1e-3"), "1e-3");
        assert_eq!(amount_edit("2.5", "2.5E+2"), "2.5E+2");
    }

    #[test]
    fn amount_edit_rejects_text_that_changes_meaning() {
        assert_eq!(amount_edit("1.2", "1.2.3"), "1.2");
        assert_eq!(amount_edit("5", "-5"), "5");
        assert_eq!(amount_edit("12.5", "12.5x"), "12.5");
        assert_eq!(amount_edit("1", "abc"), "1");
        assert_eq!(amount_edit("1", "e3"), "1");
        assert_eq!(amount_edit("1e3", "1e3e"), "1e3");
        assert_eq!(amount_edit("1e3", "1e3.5"), "1e3");
        assert_eq!(amount_edit("1", "1 000"), "1");
    }

    #[test]
    fn amount_edit_allows_partial_input() {
        assert_eq!(amount_edit("1", ""), "");
        assert_eq!(amount_edit("", "."), ".");
        assert_eq!(amount_edit("1", "1."), "1.");
        assert_eq!(amount_edit("0.5", ".5"), ".5");
    }
}
