//! Utility functions

use crate::constants::APP_NAME;
use egui::Color32;
use std::path::PathBuf;
use tracing::warn;

// Four overlapping chips, square viewBox, for window/taskbar icons
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect x="4" y="4" width="34" height="34" rx="6" fill="#ef4444"/><rect x="26" y="4" width="34" height="34" rx="6" fill="#facc15" fill-opacity="0.9"/><rect x="4" y="26" width="34" height="34" rx="6" fill="#22c55e" fill-opacity="0.9"/><rect x="26" y="26" width="34" height="34" rx="6" fill="#3b82f6" fill-opacity="0.9"/></svg>"##;

/// Rasterize the icon SVG to a square RGBA image (for window/taskbar icons).
pub fn rasterize_icon_square(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = match resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()) {
        Ok(tree) => tree,
        Err(e) => {
            warn!(error = %e, "Failed to parse icon SVG");
            return None;
        }
    };
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Get the app data directory (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Format a color as `#rrggbb`, or `#rrggbbaa` when not opaque.
/// Channels are unmultiplied so the hex matches what a designer would type.
pub fn format_hex(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex(Color32::BLACK), "#000000");
        assert_eq!(format_hex(Color32::from_rgb(0x2d, 0xd4, 0xbf)), "#2dd4bf");
        assert_eq!(format_hex(Color32::TRANSPARENT), "#00000000");
    }

    #[test]
    fn test_icon_rasterizes_to_requested_size() {
        let (rgba, w, h) = rasterize_icon_square(32).unwrap();
        assert_eq!((w, h), (32, 32));
        assert_eq!(rgba.len(), 32 * 32 * 4);
        // Top-left chip is opaque red
        assert_eq!(&rgba[(8 * 32 + 8) * 4..(8 * 32 + 8) * 4 + 4], &[0xef, 0x44, 0x44, 0xff]);
    }
}
