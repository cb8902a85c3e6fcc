//! View rendering (header, grid picker, swatch grids)

use super::App;
use crate::catalog;
use crate::constants::WIDTH_SAMPLE_NAME;
use crate::flow::{FlowGrid, FlowState, MeasureKey, Measurement};
use crate::platform::PlatformProfile;
use crate::theme;
use crate::types::{ColorModel, GridEntries, Platform, TextModel};
use crate::ui::components;
use eframe::egui;
use tracing::warn;

impl App {
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!("{}  Swatches", egui_phosphor::regular::PALETTE))
                        .size(theme::FONT_TITLE)
                        .strong(),
                )
                .selectable(false),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.profile.show_about {
                    let about = ui.add(
                        egui::Button::new(format!("{}  About", egui_phosphor::regular::INFO))
                            .corner_radius(theme::RADIUS_DEFAULT),
                    );
                    if about.clicked() {
                        self.show_about = true;
                    }
                    ui.add_space(theme::SPACING_MD);
                }

                if self.profile.supports_dark_toggle {
                    let mut light = !self.dark_mode;
                    if theme::segmented_toggle(ui, "Light", "Dark", &mut light) {
                        self.set_dark_mode(ui.ctx(), !light);
                    }
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("Dark Mode")
                                .size(theme::FONT_LABEL)
                                .color(ui.visuals().weak_text_color()),
                        )
                        .selectable(false),
                    );
                }
            });
        });

        ui.add_space(theme::SPACING_MD);
        self.render_grid_picker(ui);
    }

    fn render_grid_picker(&mut self, ui: &mut egui::Ui) {
        // Stacked layouts show every grid at once
        if self.grids.is_empty() || self.profile.stack_all_grids {
            return;
        }
        let mut selected = self.selected_grid;

        if self.profile.platform == Platform::Watch {
            // Not enough room for tabs
            egui::ComboBox::from_id_salt("grid_picker")
                .selected_text(self.grids[selected].name)
                .show_ui(ui, |ui| {
                    for (i, grid) in self.grids.iter().enumerate() {
                        ui.selectable_value(&mut selected, i, grid.name);
                    }
                });
        } else {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(theme::SPACING_SM, theme::SPACING_SM);
                for (i, grid) in self.grids.iter().enumerate() {
                    if theme::grid_tab(ui, grid.name, i == selected).clicked() {
                        selected = i;
                    }
                }
            });
        }

        self.select_grid(selected);
    }

    /// Render the selected grid, dispatching on the swatch kind.
    pub(crate) fn render_grid(&mut self, ui: &mut egui::Ui) {
        if self.profile.stack_all_grids {
            self.render_stacked_grids(ui);
            return;
        }

        let Some(grid) = self.grids.get(self.selected_grid) else {
            ui.centered_and_justified(|ui| {
                ui.label("No swatches for this platform.");
            });
            return;
        };

        match &grid.entries {
            GridEntries::Colors(models) => {
                color_grid(ui, &mut self.color_flow, models, &self.profile);
            }
            GridEntries::Texts(models) => {
                sample_field(ui, &mut self.sample_text);
                ui.add_space(theme::SPACING_MD);
                text_grid(ui, &mut self.text_flow, models, &self.sample_text, &self.profile);
            }
        }
    }

    /// Every grid under its own title, each as one horizontally scrolling row.
    fn render_stacked_grids(&mut self, ui: &mut egui::Ui) {
        grid_scroll_area("stacked_grids").show(ui, |ui| {
            for grid in &self.grids {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(grid.name)
                            .size(theme::FONT_TITLE)
                            .strong(),
                    )
                    .selectable(false),
                );
                ui.add_space(theme::SPACING_SM);

                match &grid.entries {
                    GridEntries::Colors(models) => {
                        color_row(ui, &mut self.color_flow, grid.name, models, &self.profile);
                    }
                    GridEntries::Texts(models) => {
                        sample_field(ui, &mut self.sample_text);
                        ui.add_space(theme::SPACING_SM);
                        text_row(
                            ui,
                            &mut self.text_flow,
                            grid.name,
                            models,
                            &self.sample_text,
                            &self.profile,
                        );
                    }
                }
                ui.add_space(theme::SPACING_XL);
            }
        });
    }
}

/// Measure the sample cell once per key. Spacing is folded into both the
/// ideal and the container so the last column needs no trailing gap.
fn measure_cell(
    state: &mut FlowState,
    key: MeasureKey,
    measure: impl FnOnce() -> Measurement,
) -> Measurement {
    state.measure_with(key, || {
        let size = measure();
        Measurement {
            width: size.width + theme::SPACING_MD,
            ..size
        }
    })
}

fn flow_grid<'a, T>(
    ui: &egui::Ui,
    state: &mut FlowState,
    items: &'a [T],
    profile: &PlatformProfile,
) -> Option<FlowGrid<'a, T>> {
    let container = ui.available_width() + theme::SPACING_MD;
    match state.grid(items, container, profile.max_columns) {
        Ok(grid) => Some(grid),
        Err(e) => {
            warn!(error = %e, "Grid layout failed");
            None
        }
    }
}

fn color_key(ui: &egui::Ui, profile: &PlatformProfile, sample: &ColorModel) -> MeasureKey {
    MeasureKey {
        pixels_per_point: ui.ctx().pixels_per_point(),
        sample: sample.name.to_owned(),
        chip_min: profile.chip_min,
    }
}

fn text_key(ui: &egui::Ui, profile: &PlatformProfile, sample: &str) -> MeasureKey {
    MeasureKey {
        pixels_per_point: ui.ctx().pixels_per_point(),
        sample: sample.to_owned(),
        chip_min: profile.chip_min,
    }
}

fn grid_scroll_area(id: &str) -> egui::ScrollArea {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .id_salt(id)
}

fn color_grid(
    ui: &mut egui::Ui,
    state: &mut FlowState,
    models: &[ColorModel],
    profile: &PlatformProfile,
) {
    let sample = catalog::width_sample();
    let key = color_key(ui, profile, &sample);

    grid_scroll_area("color_grid").show(ui, |ui| {
        measure_cell(state, key, || components::measure_color_cell(ui, profile, &sample));
        let Some(grid) = flow_grid(ui, state, models, profile) else {
            return;
        };

        let cell_width = (grid.layout.cell_width - theme::SPACING_MD).floor().max(1.0);
        let size = egui::vec2(cell_width, grid.layout.cell_height.unwrap_or(cell_width));

        ui.spacing_mut().item_spacing = egui::vec2(theme::SPACING_MD, theme::SPACING_MD);
        for row in grid.rows {
            ui.horizontal(|ui| {
                for slot in row {
                    match slot {
                        Some(model) => {
                            components::color_swatch(ui, size, model, profile);
                        }
                        None => components::placeholder(ui, size),
                    }
                }
            });
        }
    });
}

fn text_grid(
    ui: &mut egui::Ui,
    state: &mut FlowState,
    models: &[TextModel],
    sample: &str,
    profile: &PlatformProfile,
) {
    let key = text_key(ui, profile, sample);

    grid_scroll_area("text_grid").show(ui, |ui| {
        measure_cell(state, key, || {
            components::measure_text_cell(ui, profile, sample, WIDTH_SAMPLE_NAME)
        });
        let Some(grid) = flow_grid(ui, state, models, profile) else {
            return;
        };

        let cell_width = (grid.layout.cell_width - theme::SPACING_MD).floor().max(1.0);

        ui.spacing_mut().item_spacing = egui::vec2(theme::SPACING_MD, theme::SPACING_MD);
        for row in grid.rows {
            // Rows size to their tallest wrapped sample
            let height = row
                .iter()
                .flatten()
                .map(|model| {
                    components::text_swatch_height(ui, profile, model, sample, cell_width)
                })
                .fold(0.0_f32, f32::max);
            let size = egui::vec2(cell_width, height);

            ui.horizontal(|ui| {
                for slot in row {
                    match slot {
                        Some(model) => {
                            components::text_swatch(ui, size, model, sample, profile);
                        }
                        None => components::placeholder(ui, size),
                    }
                }
            });
        }
    });
}

fn single_row_scroll(ui: &mut egui::Ui, id: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::ScrollArea::horizontal()
        .id_salt(id)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(theme::SPACING_MD, theme::SPACING_MD);
                add_contents(ui);
            });
        });
}

fn color_row(
    ui: &mut egui::Ui,
    state: &mut FlowState,
    id: &str,
    models: &[ColorModel],
    profile: &PlatformProfile,
) {
    let sample = catalog::width_sample();
    let key = color_key(ui, profile, &sample);
    let measured = measure_cell(state, key, || {
        components::measure_color_cell(ui, profile, &sample)
    });
    let cell_width = (measured.width - theme::SPACING_MD).max(1.0);
    let size = egui::vec2(cell_width, measured.height.unwrap_or(cell_width));

    single_row_scroll(ui, id, |ui| {
        for model in models {
            components::color_swatch(ui, size, model, profile);
        }
    });
}

fn text_row(
    ui: &mut egui::Ui,
    state: &mut FlowState,
    id: &str,
    models: &[TextModel],
    sample: &str,
    profile: &PlatformProfile,
) {
    let key = text_key(ui, profile, sample);
    let measured = measure_cell(state, key, || {
        components::measure_text_cell(ui, profile, sample, WIDTH_SAMPLE_NAME)
    });
    let cell_width = (measured.width - theme::SPACING_MD).max(1.0);
    let height = models
        .iter()
        .map(|model| components::text_swatch_height(ui, profile, model, sample, cell_width))
        .fold(0.0_f32, f32::max);
    let size = egui::vec2(cell_width, height);

    single_row_scroll(ui, id, |ui| {
        for model in models {
            components::text_swatch(ui, size, model, sample, profile);
        }
    });
}

fn sample_field(ui: &mut egui::Ui, sample_text: &mut String) {
    theme::section_frame(ui.visuals()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!("{}  Sample", egui_phosphor::regular::TEXT_AA))
                        .size(theme::FONT_LABEL)
                        .strong(),
                )
                .selectable(false),
            );
            ui.add(
                egui::TextEdit::singleline(sample_text)
                    .desired_width(theme::SAMPLE_FIELD_WIDTH)
                    .hint_text("Type to preview every style"),
            );
        });
    });
}
