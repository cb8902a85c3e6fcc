//! Centralized theme constants for Swatches
//! Chrome sizes and the few fixed colors live here. Everything the swatches
//! showcase comes from stock `egui::Visuals`, so apply_visuals leaves colors alone.

use crate::platform::PlatformProfile;
use egui::Color32;

// =============================================================================
// COLORS - Accent (Teal)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400
pub const ACCENT_DARK: Color32 = Color32::from_rgb(0x0d, 0x94, 0x88); // teal-600

// =============================================================================
// COLORS - Status (platform tags)
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99); // emerald-400
pub const STATUS_SUCCESS_DARK: Color32 = Color32::from_rgb(0x05, 0x96, 0x69); // emerald-600
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400
pub const STATUS_ERROR_DARK: Color32 = Color32::from_rgb(0xdc, 0x26, 0x26); // red-600

// =============================================================================
// COLORS - Checkerboard behind chips
// =============================================================================
pub const CHECKER_LIGHT: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const CHECKER_DARK: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400

// Watch swatches have no adaptive fill
pub const WATCH_SWATCH_FILL: Color32 = Color32::from_rgb(0x52, 0x52, 0x5b); // zinc-600
pub const WATCH_BACKGROUND: Color32 = Color32::BLACK;

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS - Swatches
// =============================================================================
pub const SWATCH_PADDING: f32 = 8.0;
pub const SWATCH_LABEL_GAP: f32 = 6.0;
pub const TAG_COLUMN_GAP: f32 = 6.0;
pub const CHECKER_CELL: f32 = 8.0;
pub const TEXT_CHIP_PADDING: f32 = 10.0;
/// Text chips never ask for more than this much width when measured.
pub const TEXT_CHIP_MAX_WIDTH: f32 = 320.0;
pub const SAMPLE_FIELD_WIDTH: f32 = 420.0;

// =============================================================================
// DIMENSIONS - Header
// =============================================================================
pub const TAB_HEIGHT: f32 = 28.0;
pub const TAB_PADDING: f32 = 12.0;
pub const TOGGLE_HEIGHT: f32 = 26.0;
pub const ABOUT_WIDTH: f32 = 380.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;
pub const RADIUS_SWATCH: f32 = 12.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_THICK: f32 = 2.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_XS: f32 = 2.0;
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context, dark_mode: bool) {
    let (theme, base) = if dark_mode {
        (egui::Theme::Dark, egui::Visuals::dark())
    } else {
        (egui::Theme::Light, egui::Visuals::light())
    };

    ctx.set_theme(theme);
    ctx.set_visuals_of(
        theme,
        egui::Visuals {
            interact_cursor: Some(egui::CursorIcon::PointingHand),
            window_corner_radius: egui::CornerRadius::same(RADIUS_LARGE as u8),
            menu_corner_radius: egui::CornerRadius::same(RADIUS_LARGE as u8),
            ..base
        },
    );

    ctx.all_styles_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_MD, 6.0);
        style.spacing.button_padding = egui::vec2(SPACING_LG, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

/// Fill behind a swatch frame.
pub fn swatch_fill(visuals: &egui::Visuals, profile: &PlatformProfile) -> Color32 {
    if profile.flat_swatch_fill {
        WATCH_SWATCH_FILL
    } else {
        visuals.widgets.noninteractive.weak_bg_fill
    }
}

/// Background for the whole window.
pub fn app_background(visuals: &egui::Visuals, profile: &PlatformProfile) -> Color32 {
    if profile.flat_swatch_fill {
        WATCH_BACKGROUND
    } else {
        visuals.panel_fill
    }
}

/// Check and cross colors that stay readable on either background.
pub fn tag_colors(dark_mode: bool) -> (Color32, Color32) {
    if dark_mode {
        (STATUS_SUCCESS, STATUS_ERROR)
    } else {
        (STATUS_SUCCESS_DARK, STATUS_ERROR_DARK)
    }
}

pub fn accent(dark_mode: bool) -> Color32 {
    if dark_mode {
        ACCENT
    } else {
        ACCENT_DARK
    }
}

// =============================================================================
// HELPER - Modal frame
// =============================================================================
pub fn modal_frame(visuals: &egui::Visuals) -> egui::Frame {
    egui::Frame::new()
        .fill(visuals.window_fill)
        .stroke(visuals.window_stroke)
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_XL)
}

// =============================================================================
// HELPER - Code sample frame
// =============================================================================
pub fn code_frame(visuals: &egui::Visuals) -> egui::Frame {
    egui::Frame::new()
        .fill(visuals.code_bg_color)
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::same(SPACING_MD as i8))
}

// =============================================================================
// HELPER - Section frame (sample text box)
// =============================================================================
pub fn section_frame(visuals: &egui::Visuals) -> egui::Frame {
    egui::Frame::new()
        .fill(visuals.faint_bg_color)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, visuals.widgets.noninteractive.bg_stroke.color))
        .corner_radius(RADIUS_SWATCH)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

// =============================================================================
// HELPER - Grid picker tab
// =============================================================================

/// Custom-painted tab for the grid picker. Returns the click response.
pub fn grid_tab(ui: &mut egui::Ui, label: &str, selected: bool) -> egui::Response {
    let font = egui::FontId::proportional(FONT_LABEL);
    let visuals = ui.visuals().clone();
    let text_color = if selected {
        visuals.strong_text_color()
    } else {
        visuals.weak_text_color()
    };
    let galley = ui.fonts(|f| f.layout_no_wrap(label.to_string(), font, text_color));
    let size = egui::vec2(galley.size().x + TAB_PADDING * 2.0, TAB_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let base_fill = if selected {
            visuals.selection.bg_fill
        } else {
            visuals.widgets.inactive.weak_bg_fill
        };
        let (fill, draw_rect) = button_visual(&response, base_fill, rect);
        let painter = ui.painter();
        painter.rect_filled(draw_rect, RADIUS_DEFAULT, fill);
        if selected {
            painter.rect_stroke(
                draw_rect,
                RADIUS_DEFAULT,
                egui::Stroke::new(STROKE_DEFAULT, visuals.selection.stroke.color),
                egui::StrokeKind::Inside,
            );
        }
        painter.galley(
            draw_rect.center() - galley.size() / 2.0,
            galley,
            text_color,
        );
    }
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response.widget_info(|| {
        egui::WidgetInfo::selected(egui::WidgetType::SelectableLabel, true, selected, label)
    });
    response
}

/// Returns (fill, draw_rect) for a custom-painted button with hover/press effects.
/// Lightens on hover, slightly lightens + shrinks on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (lighten(base_fill, 0.06), rect.shrink(1.5))
    } else if response.hovered() {
        (lighten(base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}

// =============================================================================
// HELPER - Segmented toggle (pill-style)
// =============================================================================

/// Renders a segmented toggle with two options. Returns true if selection changed.
/// `left_active` indicates if the left option is currently selected.
/// Container -> glow (1px) -> active fill, segments sized to their labels.
pub fn segmented_toggle(
    ui: &mut egui::Ui,
    left_label: &str,
    right_label: &str,
    left_active: &mut bool,
) -> bool {
    let mut changed = false;
    let height = TOGGLE_HEIGHT;
    let rounding = RADIUS_DEFAULT;
    let font = egui::FontId::proportional(FONT_SMALL);
    let visuals = ui.visuals().clone();

    let label_width = |text: &str| {
        ui.fonts(|f| {
            f.layout_no_wrap(text.to_string(), font.clone(), Color32::WHITE)
                .size()
                .x
        })
    };
    let left_width = label_width(left_label) + TAB_PADDING * 2.0;
    let right_width = label_width(right_label) + TAB_PADDING * 2.0;
    let total_width = left_width + right_width;

    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(total_width, height), egui::Sense::click());
    let painter = ui.painter();

    let container_color = visuals.widgets.inactive.weak_bg_fill;
    let active_color = visuals.selection.bg_fill;
    let glow_color = visuals.selection.stroke.color;
    let inactive_text = visuals.weak_text_color();
    let active_text = visuals.strong_text_color();

    // Layer 1: Container background
    painter.rect_filled(rect, rounding + 2.0, container_color);

    let left_rect =
        egui::Rect::from_min_max(rect.min, egui::pos2(rect.min.x + left_width, rect.max.y));
    let right_rect =
        egui::Rect::from_min_max(egui::pos2(rect.min.x + left_width, rect.min.y), rect.max);
    let active_rect = if *left_active { left_rect } else { right_rect };

    // Layer 2: Glow, inset 2px from the container
    let glow_rect = active_rect.shrink(SPACING_XS);
    painter.rect_filled(glow_rect, rounding, glow_color);

    // Layer 3: Active fill (shows 1px of glow)
    painter.rect_filled(glow_rect.shrink(1.0), rounding - 1.0, active_color);

    let (left_color, right_color) = if *left_active {
        (active_text, inactive_text)
    } else {
        (inactive_text, active_text)
    };
    painter.text(
        left_rect.center(),
        egui::Align2::CENTER_CENTER,
        left_label,
        font.clone(),
        left_color,
    );
    painter.text(
        right_rect.center(),
        egui::Align2::CENTER_CENTER,
        right_label,
        font,
        right_color,
    );

    // Show hand cursor on hover
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let clicked_left = pos.x < rect.min.x + left_width;
            if clicked_left != *left_active {
                *left_active = clicked_left;
                changed = true;
            }
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Platform;

    #[test]
    fn test_lighten_moves_toward_white() {
        assert_eq!(lighten(Color32::BLACK, 0.0), Color32::BLACK);
        assert_eq!(lighten(Color32::BLACK, 1.0), Color32::WHITE);
        let half = lighten(Color32::from_rgb(0, 100, 255), 0.5);
        assert_eq!((half.r(), half.g(), half.b()), (127, 177, 255));
    }

    #[test]
    fn test_watch_uses_flat_colors() {
        let watch = PlatformProfile::for_platform(Platform::Watch);
        let visuals = egui::Visuals::light();
        assert_eq!(swatch_fill(&visuals, &watch), WATCH_SWATCH_FILL);
        assert_eq!(app_background(&visuals, &watch), WATCH_BACKGROUND);

        let desktop = PlatformProfile::default();
        assert_eq!(app_background(&visuals, &desktop), visuals.panel_fill);
    }

    #[test]
    fn test_code_frame_follows_visuals() {
        let dark = egui::Visuals::dark();
        let light = egui::Visuals::light();
        assert_eq!(code_frame(&dark).fill, dark.code_bg_color);
        assert_eq!(code_frame(&light).fill, light.code_bg_color);
    }
}
