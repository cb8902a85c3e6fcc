//! Swatch widgets
//!
//! Painter-drawn pieces of a swatch: chips, checkerboard, platform tags,
//! label, and the invisible placeholder. The `measure_*` functions size a
//! sample cell with the same metrics the painters use, so the flow
//! calculator sees the width a real swatch wants.

use crate::flow::Measurement;
use crate::platform::PlatformProfile;
use crate::theme;
use crate::types::{ColorModel, Platform, SupportedPlatforms, TextModel};
use crate::utils::format_hex;
use eframe::egui;
use std::sync::Arc;

/// Platform tags are drawn as two columns of two.
const TAG_COLUMNS: [[Platform; 2]; 2] = [
    [Platform::Mobile, Platform::Desktop],
    [Platform::Watch, Platform::Tv],
];

fn tag_text(platform: Platform) -> String {
    format!("{}: ", platform.label())
}

#[derive(Debug, Clone, Copy)]
struct TagMetrics {
    column_widths: [f32; 2],
    row_height: f32,
    icon_width: f32,
}

impl TagMetrics {
    fn measure(ui: &egui::Ui, font_size: f32) -> Self {
        let font = egui::FontId::proportional(font_size);
        ui.fonts(|f| {
            let size = |text: String| {
                f.layout_no_wrap(text, font.clone(), egui::Color32::WHITE)
                    .size()
            };
            let icon = size(egui_phosphor::regular::CHECK.to_string())
                .max(size(egui_phosphor::regular::X.to_string()));

            let mut column_widths = [0.0_f32; 2];
            for (col, platforms) in TAG_COLUMNS.iter().enumerate() {
                for platform in platforms {
                    let text = size(tag_text(*platform));
                    column_widths[col] = column_widths[col].max(text.x + icon.x);
                }
            }

            Self {
                column_widths,
                row_height: f.row_height(&font).max(icon.y),
                icon_width: icon.x,
            }
        })
    }

    fn size(&self) -> egui::Vec2 {
        egui::vec2(
            self.column_widths[0] + theme::TAG_COLUMN_GAP + self.column_widths[1],
            self.row_height * 2.0,
        )
    }
}

fn paint_tags(
    painter: &egui::Painter,
    origin: egui::Pos2,
    metrics: &TagMetrics,
    supported: SupportedPlatforms,
    font_size: f32,
    text_color: egui::Color32,
    dark_mode: bool,
) {
    let font = egui::FontId::proportional(font_size);
    let (yes, no) = theme::tag_colors(dark_mode);
    let mut right = origin.x;

    for (col, platforms) in TAG_COLUMNS.iter().enumerate() {
        if col > 0 {
            right += theme::TAG_COLUMN_GAP;
        }
        right += metrics.column_widths[col];

        for (row, platform) in platforms.iter().enumerate() {
            let y = origin.y + row as f32 * metrics.row_height;
            let (icon, icon_color) = if supported.contains(*platform) {
                (egui_phosphor::regular::CHECK, yes)
            } else {
                (egui_phosphor::regular::X, no)
            };
            painter.text(
                egui::pos2(right, y),
                egui::Align2::RIGHT_TOP,
                icon,
                font.clone(),
                icon_color,
            );
            painter.text(
                egui::pos2(right - metrics.icon_width, y),
                egui::Align2::RIGHT_TOP,
                tag_text(*platform),
                font.clone(),
                text_color,
            );
        }
    }
}

/// Checkerboard so transparent and translucent chips read as such.
pub fn checkerboard(painter: &egui::Painter, rect: egui::Rect) {
    let painter = painter.with_clip_rect(rect.intersect(painter.clip_rect()));
    painter.rect_filled(rect, 0.0, theme::CHECKER_LIGHT);

    let cols = (rect.width() / theme::CHECKER_CELL).ceil() as usize;
    let rows = (rect.height() / theme::CHECKER_CELL).ceil() as usize;
    for row in 0..rows {
        for col in (row % 2..cols).step_by(2) {
            let min = rect.min
                + egui::vec2(col as f32 * theme::CHECKER_CELL, row as f32 * theme::CHECKER_CELL);
            painter.rect_filled(
                egui::Rect::from_min_size(min, egui::Vec2::splat(theme::CHECKER_CELL)),
                0.0,
                theme::CHECKER_DARK,
            );
        }
    }
}

/// Side of a square color chip given the room left for it.
///
/// Only `chip_max` bounds the drawn chip. `chip_min` sizes the measured cell;
/// a single column squeezed below that width shrinks the chip with it.
pub fn chip_side(avail_width: f32, avail_height: f32, profile: &PlatformProfile) -> f32 {
    avail_width.min(avail_height).clamp(0.0, profile.chip_max)
}

fn label_font() -> egui::FontId {
    egui::FontId::proportional(theme::FONT_BODY)
}

fn label_color(visuals: &egui::Visuals, profile: &PlatformProfile) -> egui::Color32 {
    if profile.flat_swatch_fill {
        egui::Color32::WHITE
    } else {
        visuals.strong_text_color()
    }
}

/// Centered label wrapped to `width`.
fn label_galley(
    ui: &egui::Ui,
    text: &str,
    width: f32,
    color: egui::Color32,
) -> Arc<egui::Galley> {
    let mut job = egui::text::LayoutJob::simple(text.to_owned(), label_font(), color, width);
    job.halign = egui::Align::Center;
    ui.fonts(|f| f.layout_job(job))
}

/// Paint `galley` horizontally centered on `center_x` with its top at `top`.
fn paint_centered(painter: &egui::Painter, galley: Arc<egui::Galley>, center_x: f32, top: f32) {
    let pos = egui::pos2(center_x - galley.rect.center().x, top);
    painter.galley(pos, galley, egui::Color32::PLACEHOLDER);
}

fn paint_frame(
    painter: &egui::Painter,
    rect: egui::Rect,
    visuals: &egui::Visuals,
    profile: &PlatformProfile,
) {
    painter.rect_filled(rect, theme::RADIUS_SWATCH, theme::swatch_fill(visuals, profile));
    painter.rect_stroke(
        rect.shrink(1.0),
        theme::RADIUS_SWATCH,
        egui::Stroke::new(theme::STROKE_THICK, visuals.text_color()),
        egui::StrokeKind::Inside,
    );
}

fn sample_galley(
    ui: &egui::Ui,
    model: &TextModel,
    sample: &str,
    wrap_width: f32,
    color: egui::Color32,
) -> Arc<egui::Galley> {
    let font = model.style.resolve(ui.style());
    ui.fonts(|f| f.layout(sample.to_owned(), font, color, wrap_width.max(1.0)))
}

// =============================================================================
// MEASUREMENT
// =============================================================================

/// Natural size of a color swatch for `sample`: smallest chip beside the
/// tags, with room for a two-line label.
pub fn measure_color_cell(
    ui: &egui::Ui,
    profile: &PlatformProfile,
    sample: &ColorModel,
) -> Measurement {
    let tags = TagMetrics::measure(ui, profile.tag_font_size).size();
    let font = label_font();
    let (label_width, row_height) = ui.fonts(|f| {
        let label = f.layout_no_wrap(sample.name.to_owned(), font.clone(), egui::Color32::WHITE);
        (label.size().x, f.row_height(&font))
    });

    let top_width = profile.chip_min + theme::TAG_COLUMN_GAP + tags.x;
    let width = top_width.max(label_width) + theme::SWATCH_PADDING * 2.0;
    let height = theme::SWATCH_PADDING * 2.0
        + profile.chip_min.max(tags.y)
        + theme::SWATCH_LABEL_GAP
        + row_height * 2.0;

    Measurement {
        width,
        height: Some(height),
    }
}

/// Natural width of a text swatch: the sample on one line, capped, and never
/// narrower than the tags or the width-sample label. Rows size their own height.
pub fn measure_text_cell(
    ui: &egui::Ui,
    profile: &PlatformProfile,
    sample: &str,
    width_sample: &str,
) -> Measurement {
    let tags = TagMetrics::measure(ui, profile.tag_font_size).size();
    let body = egui::TextStyle::Body.resolve(ui.style());
    let (sample_width, label_width) = ui.fonts(|f| {
        let sample = f.layout_no_wrap(sample.to_owned(), body, egui::Color32::WHITE);
        let label =
            f.layout_no_wrap(width_sample.to_owned(), label_font(), egui::Color32::WHITE);
        (sample.size().x, label.size().x)
    });

    let chip_width =
        (sample_width + theme::TEXT_CHIP_PADDING * 2.0).min(theme::TEXT_CHIP_MAX_WIDTH);
    Measurement {
        width: chip_width.max(tags.x).max(label_width) + theme::SWATCH_PADDING * 2.0,
        height: None,
    }
}

/// Height a text swatch needs at `width`.
pub fn text_swatch_height(
    ui: &egui::Ui,
    profile: &PlatformProfile,
    model: &TextModel,
    sample: &str,
    width: f32,
) -> f32 {
    let inner_width = (width - theme::SWATCH_PADDING * 2.0).max(1.0);
    let wrap_width = inner_width - theme::TEXT_CHIP_PADDING * 2.0;
    let text = sample_galley(ui, model, sample, wrap_width, egui::Color32::WHITE);
    let label = label_galley(ui, model.name, inner_width, egui::Color32::WHITE);
    let tags = TagMetrics::measure(ui, profile.tag_font_size).size();

    theme::SWATCH_PADDING * 2.0
        + text.size().y
        + theme::TEXT_CHIP_PADDING * 2.0
        + theme::SWATCH_LABEL_GAP
        + tags.y
        + theme::SWATCH_LABEL_GAP
        + label.size().y
}

// =============================================================================
// SWATCHES
// =============================================================================

/// Color swatch: chip on a checkerboard, platform tags beside it, label below.
pub fn color_swatch(
    ui: &mut egui::Ui,
    size: egui::Vec2,
    model: &ColorModel,
    profile: &PlatformProfile,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
    let visuals = ui.visuals().clone();
    let color = model.token.resolve(&visuals);

    if ui.is_rect_visible(rect) {
        let metrics = TagMetrics::measure(ui, profile.tag_font_size);
        let tags = metrics.size();
        let inner = rect.shrink(theme::SWATCH_PADDING);
        let label = label_galley(ui, model.name, inner.width(), label_color(&visuals, profile));
        let top_height = (inner.height() - label.size().y - theme::SWATCH_LABEL_GAP).max(0.0);
        let side = chip_side(inner.width() - tags.x - theme::TAG_COLUMN_GAP, top_height, profile);
        let top_row = side.max(tags.y);

        let painter = ui.painter_at(rect);
        paint_frame(&painter, rect, &visuals, profile);

        let chip = egui::Rect::from_min_size(
            egui::pos2(inner.min.x, inner.min.y + (top_row - side) / 2.0),
            egui::Vec2::splat(side),
        );
        checkerboard(&painter, chip);
        painter.rect_filled(chip, 0.0, color);
        painter.rect_stroke(
            chip,
            0.0,
            egui::Stroke::new(theme::STROKE_THICK, visuals.widgets.noninteractive.bg_stroke.color),
            egui::StrokeKind::Inside,
        );

        paint_tags(
            &painter,
            egui::pos2(chip.max.x + theme::TAG_COLUMN_GAP, inner.min.y + (top_row - tags.y) / 2.0),
            &metrics,
            model.supported,
            profile.tag_font_size,
            label_color(&visuals, profile),
            visuals.dark_mode,
        );

        paint_centered(
            &painter,
            label,
            inner.center().x,
            inner.min.y + top_row + theme::SWATCH_LABEL_GAP,
        );
    }

    let name = model.name;
    response.widget_info(|| {
        egui::WidgetInfo::labeled(egui::WidgetType::Other, true, format!("{} Color", name))
    });
    response.on_hover_text(hover_text(
        model.name,
        color,
        model.token.is_adaptive(),
        model.supported,
    ))
}

/// Text swatch: sample text in the model's style and color, tags, label.
pub fn text_swatch(
    ui: &mut egui::Ui,
    size: egui::Vec2,
    model: &TextModel,
    sample: &str,
    profile: &PlatformProfile,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
    let visuals = ui.visuals().clone();
    let color = model.color.resolve(&visuals);
    let font = model.style.resolve(ui.style());

    if ui.is_rect_visible(rect) {
        let metrics = TagMetrics::measure(ui, profile.tag_font_size);
        let tags = metrics.size();
        let inner = rect.shrink(theme::SWATCH_PADDING);
        let wrap_width = inner.width() - theme::TEXT_CHIP_PADDING * 2.0;
        let text = sample_galley(ui, model, sample, wrap_width, color);
        let label = label_galley(ui, model.name, inner.width(), label_color(&visuals, profile));

        let painter = ui.painter_at(rect);
        paint_frame(&painter, rect, &visuals, profile);

        let chip = egui::Rect::from_min_size(
            inner.min,
            egui::vec2(inner.width(), text.size().y + theme::TEXT_CHIP_PADDING * 2.0),
        );
        checkerboard(&painter, chip);
        painter.galley(
            chip.min + egui::Vec2::splat(theme::TEXT_CHIP_PADDING),
            text,
            color,
        );

        let tags_top = chip.max.y + theme::SWATCH_LABEL_GAP;
        paint_tags(
            &painter,
            egui::pos2(inner.center().x - tags.x / 2.0, tags_top),
            &metrics,
            model.supported,
            profile.tag_font_size,
            label_color(&visuals, profile),
            visuals.dark_mode,
        );

        paint_centered(
            &painter,
            label,
            inner.center().x,
            tags_top + tags.y + theme::SWATCH_LABEL_GAP,
        );
    }

    let name = model.name;
    response.widget_info(|| {
        egui::WidgetInfo::labeled(egui::WidgetType::Other, true, format!("{} Text", name))
    });
    let mut text = hover_text(model.name, color, model.color.is_adaptive(), model.supported);
    text.push_str(&format!("\n{:.0}pt {:?}", font.size, model.style));
    response.on_hover_text(text)
}

/// Tooltip body: name and hex, the platforms carrying the token, and a note
/// when the value follows Dark Mode.
fn hover_text(
    name: &str,
    color: egui::Color32,
    adaptive: bool,
    supported: SupportedPlatforms,
) -> String {
    let platforms: Vec<&str> = supported.iter().map(Platform::label).collect();
    let mut text = format!("{}  {}\n{}", name, format_hex(color), platforms.join(", "));
    if adaptive {
        text.push_str("\nAdapts to Dark Mode");
    }
    text
}

/// Invisible slot that keeps the last row's columns aligned.
pub fn placeholder(ui: &mut egui::Ui, size: egui::Vec2) {
    ui.allocate_exact_size(size, egui::Sense::hover());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chip_side_respects_bounds() {
        let desktop = PlatformProfile::default();
        assert_eq!(chip_side(300.0, 80.0, &desktop), 80.0);
        assert_eq!(chip_side(300.0, 400.0, &desktop), desktop.chip_max);
        assert_eq!(chip_side(20.0, 400.0, &desktop), 20.0);
        assert_eq!(chip_side(-5.0, 400.0, &desktop), 0.0);
    }

    #[test]
    fn test_hover_text_lists_platforms() {
        let text = hover_text(
            "Faint",
            egui::Color32::from_rgb(0x10, 0x20, 0x30),
            true,
            SupportedPlatforms::MOBILE_AND_DESKTOP,
        );
        assert_eq!(text, "Faint  #102030\nMobile, Desktop\nAdapts to Dark Mode");

        let fixed = hover_text("Red", egui::Color32::RED, false, SupportedPlatforms::ALL);
        assert_eq!(fixed, "Red  #ff0000\nMobile, Desktop, Watch, TV");
    }

    #[test]
    fn test_tag_text() {
        assert_eq!(tag_text(Platform::Tv), "TV: ");
        assert_eq!(tag_text(Platform::Mobile), "Mobile: ");
    }
}
