//! Converter view rendering

use super::App;
use crate::constants::PROVIDER_HOME_URL;
use crate::converter::{Event, Phase, ResultText};
use crate::theme;
use crate::ui::components::{amount_edit, currency_selector, field_label, flag_image, result_line};
use crate::utils::format_updated;
use eframe::egui;
use egui_phosphor::regular as icons;

impl App {
    pub fn render_converter(&mut self, ctx: &egui::Context) {
        let dark = self.state.dark;
        let palette = theme::palette(dark);
        let source = self.state.source.clone();
        let target = self.state.target.clone();
        let source_flag = self.flag_texture(ctx, &source);
        let target_flag = self.flag_texture(ctx, &target);

        let mut events = Vec::new();
        let mut fetch_requested = false;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(palette.bg_base))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space((ui.available_height() - 480.0).max(0.0) / 2.0);
                    theme::card_frame(dark).show(ui, |ui| {
                        ui.set_width(theme::CARD_WIDTH);
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                            // Header: title + theme toggle
                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new("Currency Converter")
                                        .size(theme::FONT_TITLE)
                                        .strong(),
                                );
                                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                    let icon = if dark { icons::SUN } else { icons::MOON };
                                    if ui
                                        .add(theme::button_round(icon, dark))
                                        .on_hover_text("Toggle theme")
                                        .clicked()
                                    {
                                        events.push(Event::ToggleTheme);
                                    }
                                });
                            });
                            ui.add_space(theme::SPACING_LG);

                            // Amount
                            field_label(ui, "Amount");
                            let mut amount = self.state.amount.clone();
                            let response = ui.add_sized(
                                [ui.available_width(), theme::INPUT_HEIGHT],
                                egui::TextEdit::singleline(&mut amount)
                                    .vertical_align(egui::Align::Center)
                                    .font(egui::FontId::proportional(theme::FONT_BODY)),
                            );
                            if response.changed() {
                                let accepted = amount_edit(&self.state.amount, &amount);
                                events.push(Event::SetAmount(accepted));
                            }
                            ui.add_space(theme::SPACING_LG);

                            // From / To selectors
                            ui.columns(2, |cols| {
                                let column = |ui: &mut egui::Ui,
                                              label: &str,
                                              id: &str,
                                              code: &str,
                                              flag: Option<&egui::TextureHandle>| {
                                    field_label(ui, label);
                                    let mut picked = None;
                                    ui.horizontal(|ui| {
                                        flag_image(ui, flag, dark);
                                        let width = ui.available_width() - theme::SPACING_MD;
                                        picked = currency_selector(ui, id, code, width);
                                    });
                                    picked
                                };
                                if let Some(code) =
                                    column(&mut cols[0], "From", "from_currency", &source, source_flag.as_ref())
                                {
                                    events.push(Event::SetSource(code));
                                }
                                if let Some(code) =
                                    column(&mut cols[1], "To", "to_currency", &target, target_flag.as_ref())
                                {
                                    events.push(Event::SetTarget(code));
                                }
                            });

                            ui.vertical_centered(|ui| {
                                if ui
                                    .small_button(format!("{}  Swap", icons::ARROWS_LEFT_RIGHT))
                                    .on_hover_text("Swap currencies")
                                    .clicked()
                                {
                                    events.push(Event::SwapCurrencies);
                                }
                            });
                            ui.add_space(theme::SPACING_SM);

                            // Trigger
                            let label = if self.state.phase() == Phase::Loading {
                                "Loading..."
                            } else {
                                "Get Exchange Rate"
                            };
                            if ui
                                .add_sized(
                                    [ui.available_width(), theme::BUTTON_HEIGHT_LARGE],
                                    theme::button_accent(label),
                                )
                                .clicked()
                            {
                                fetch_requested = true;
                            }
                            ui.add_space(theme::SPACING_LG);

                            self.render_result(ui);

                            ui.add_space(theme::SPACING_MD);
                            ui.hyperlink_to(
                                egui::RichText::new("Data from open.er-api.com")
                                    .size(theme::FONT_CAPTION)
                                    .color(palette.text_muted),
                                PROVIDER_HOME_URL,
                            );
                        });
                    });
                });
            });

        for event in events {
            self.dispatch(event);
        }
        if fetch_requested {
            self.fetch_rate(ctx);
        }
    }

    fn render_result(&self, ui: &mut egui::Ui) {
        let state = &self.state;
        let palette = theme::palette(state.dark);

        theme::result_frame(state.dark).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(format!("{} {} =", state.amount, state.source))
                    .size(theme::FONT_BODY),
            );

            let color = match state.result {
                ResultText::Error => theme::STATUS_ERROR,
                _ => palette.text_primary,
            };
            ui.label(
                egui::RichText::new(result_line(&state.result, &state.target))
                    .size(theme::FONT_RESULT)
                    .color(color),
            );

            if let Some(rate) = state.rate {
                ui.label(
                    egui::RichText::new(format!("1 {} = {} {}", state.source, rate, state.target))
                        .size(theme::FONT_CAPTION),
                );
            }
            if let Some(updated) = state.updated_unix.and_then(format_updated) {
                ui.label(
                    egui::RichText::new(format!("Updated {}", updated))
                        .size(theme::FONT_CAPTION)
                        .color(palette.text_muted),
                );
            }
        });
    }
}
