//! Modal dialogs (About window)

use super::App;
use crate::constants::{ABOUT_CODE_SAMPLE, ABOUT_LINKS, APP_NAME, APP_VERSION};
use crate::theme;
use eframe::egui;
use tracing::{info, warn};

impl App {
    pub(crate) fn render_about(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }

        let visuals = ctx.style().visuals.clone();
        let mut dismissed = false;
        let modal_response = egui::Modal::new(egui::Id::new("about_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame(&visuals))
            .show(ctx, |ui| {
                ui.set_width(theme::ABOUT_WIDTH);

                ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!("About {}", APP_NAME))
                            .size(theme::FONT_HEADING)
                            .strong(),
                    )
                    .selectable(false),
                );
                ui.add_space(theme::SPACING_MD);
                ui.label(
                    "Every built-in color and text style of egui, drawn as a swatch. \
                     Adaptive colors follow the Dark Mode toggle; the tags under each \
                     chip show which platforms carry it. Each swatch reads its color \
                     the same way your own code would:",
                );
                ui.add_space(theme::SPACING_SM);
                theme::code_frame(&visuals).show(ui, |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(ABOUT_CODE_SAMPLE)
                                .monospace()
                                .color(visuals.strong_text_color()),
                        )
                        .selectable(true),
                    );
                });
                ui.add_space(theme::SPACING_LG);

                for (label, url) in ABOUT_LINKS {
                    let link = ui.add(egui::Link::new(
                        egui::RichText::new(format!("{}  {}", egui_phosphor::regular::LINK, label))
                            .color(theme::accent(visuals.dark_mode)),
                    ));
                    if link.clicked() {
                        open_link(url);
                    }
                    link.on_hover_text(*url);
                }

                ui.add_space(theme::SPACING_LG);
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!("v{}", APP_VERSION))
                                .size(theme::FONT_SMALL)
                                .color(visuals.weak_text_color()),
                        )
                        .selectable(false),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            dismissed = true;
                        }
                    });
                });
            });

        if dismissed || modal_response.should_close() {
            self.show_about = false;
        }
    }
}

fn open_link(url: &str) {
    match open::that(url) {
        Ok(()) => info!(url, "Opened link"),
        Err(e) => warn!(url, error = %e, "Failed to open link"),
    }
}
