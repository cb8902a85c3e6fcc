//! App module - contains the main application state and logic

mod modals;
mod views;

use crate::catalog;
use crate::flow::FlowState;
use crate::platform::PlatformProfile;
use crate::settings::Settings;
use crate::theme;
use crate::types::GridModel;
use eframe::egui;
use std::path::PathBuf;
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) profile: PlatformProfile,
    pub(crate) grids: Vec<GridModel>,
    pub(crate) selected_grid: usize,
    pub(crate) dark_mode: bool,
    pub(crate) sample_text: String,
    pub(crate) show_about: bool,
    // One re-flow state per swatch kind; they measure different samples
    pub(crate) color_flow: FlowState,
    pub(crate) text_flow: FlowState,
    // Settings
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Add Phosphor icons font (check/cross tags, header icons)
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let profile = PlatformProfile::for_platform(settings.platform);

        // First launch follows the system theme
        let requested_dark = settings.dark_mode.unwrap_or_else(|| {
            cc.egui_ctx.system_theme() == Some(egui::Theme::Dark)
        });
        let dark_mode = profile.effective_dark_mode(requested_dark);
        theme::apply_visuals(&cc.egui_ctx, dark_mode);

        let grids = catalog::grids_for(&profile);
        let selected_grid = settings.selected_grid.min(grids.len().saturating_sub(1));

        info!(
            platform = ?profile.platform,
            grids = grids.len(),
            swatches = grids.iter().map(GridModel::len).sum::<usize>(),
            dark_mode,
            "Swatch grids loaded"
        );

        Self {
            profile,
            grids,
            selected_grid,
            dark_mode,
            sample_text: settings.sample_text,
            show_about: false,
            color_flow: FlowState::new(),
            text_flow: FlowState::new(),
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            dark_mode: Some(self.dark_mode),
            selected_grid: self.selected_grid,
            platform: self.profile.platform,
            sample_text: self.sample_text.clone(),
        };
        settings.save(&self.data_dir);
    }

    pub fn select_grid(&mut self, index: usize) {
        if index == self.selected_grid || index >= self.grids.len() {
            return;
        }
        self.selected_grid = index;
        info!(grid = self.grids[index].name, "Grid selected");
    }

    /// Flip appearance. Profiles without a toggle stay dark.
    pub fn set_dark_mode(&mut self, ctx: &egui::Context, dark_mode: bool) {
        let dark_mode = self.profile.effective_dark_mode(dark_mode);
        if dark_mode == self.dark_mode {
            return;
        }
        self.dark_mode = dark_mode;
        theme::apply_visuals(ctx, dark_mode);
        info!(dark_mode, "Appearance changed");
    }
}
