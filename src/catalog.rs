//! Static swatch tables
//!
//! Every built-in egui color and text style, grouped into the grids the
//! header offers. Tables are rebuilt on demand; nothing here is mutated.

use crate::constants::WIDTH_SAMPLE_NAME;
use crate::platform::PlatformProfile;
use crate::types::{
    ColorModel, ColorToken, GridEntries, GridModel, SupportedPlatforms, TextModel, VisualsColor,
    WidgetState,
};
use egui::{Color32, TextStyle};

const ALL: SupportedPlatforms = SupportedPlatforms::ALL;
const NOT_WATCH: SupportedPlatforms = SupportedPlatforms::NOT_WATCH;
const MOBILE_AND_DESKTOP: SupportedPlatforms = SupportedPlatforms::MOBILE_AND_DESKTOP;

fn fixed(name: &'static str, color: Color32) -> ColorModel {
    ColorModel::new(name, ColorToken::Fixed(color), ALL)
}

fn adaptive(name: &'static str, color: VisualsColor, supported: SupportedPlatforms) -> ColorModel {
    ColorModel::new(name, ColorToken::Visuals(color), supported)
}

/// The named `Color32` constants. These never change with dark/light mode.
pub fn named_colors() -> Vec<ColorModel> {
    vec![
        fixed("Transparent", Color32::TRANSPARENT),
        fixed("Black", Color32::BLACK),
        fixed("Dark Gray", Color32::DARK_GRAY),
        fixed("Gray", Color32::GRAY),
        fixed("Light Gray", Color32::LIGHT_GRAY),
        fixed("White", Color32::WHITE),
        fixed("Brown", Color32::BROWN),
        fixed("Dark Red", Color32::DARK_RED),
        fixed("Red", Color32::RED),
        fixed("Light Red", Color32::LIGHT_RED),
        fixed("Yellow", Color32::YELLOW),
        fixed("Light Yellow", Color32::LIGHT_YELLOW),
        fixed("Khaki", Color32::KHAKI),
        fixed("Dark Green", Color32::DARK_GREEN),
        fixed("Green", Color32::GREEN),
        fixed("Light Green", Color32::LIGHT_GREEN),
        fixed("Dark Blue", Color32::DARK_BLUE),
        fixed("Blue", Color32::BLUE),
        fixed("Light Blue", Color32::LIGHT_BLUE),
        fixed("Gold", Color32::GOLD),
        fixed("Orange", Color32::ORANGE),
        fixed("Magenta", Color32::MAGENTA),
        fixed("Cyan", Color32::CYAN),
        fixed("Purple", Color32::PURPLE),
    ]
}

/// Surface and accent colors from `Visuals`. The TV only carries the
/// accent-like subset; the watch has no appearance modes at all.
pub fn adaptive_colors() -> Vec<ColorModel> {
    vec![
        adaptive("Hyperlink", VisualsColor::Hyperlink, NOT_WATCH),
        adaptive("Warn Fg", VisualsColor::WarnFg, NOT_WATCH),
        adaptive("Error Fg", VisualsColor::ErrorFg, NOT_WATCH),
        adaptive("Selection Bg", VisualsColor::SelectionBg, NOT_WATCH),
        adaptive("Selection Stroke", VisualsColor::SelectionStroke, NOT_WATCH),
        adaptive("Window Stroke", VisualsColor::WindowStroke, NOT_WATCH),
        // Backgrounds
        adaptive("Panel Fill", VisualsColor::PanelFill, MOBILE_AND_DESKTOP),
        adaptive("Window Fill", VisualsColor::WindowFill, MOBILE_AND_DESKTOP),
        adaptive("Extreme Bg", VisualsColor::ExtremeBg, MOBILE_AND_DESKTOP),
        adaptive("Faint Bg", VisualsColor::FaintBg, MOBILE_AND_DESKTOP),
        adaptive("Code Bg", VisualsColor::CodeBg, MOBILE_AND_DESKTOP),
    ]
}

/// Fill, weak fill and stroke for every widget state.
pub fn widget_colors() -> Vec<ColorModel> {
    const STATES: [(WidgetState, [&str; 3]); 5] = [
        (
            WidgetState::Noninteractive,
            ["Nonint. Fill", "Nonint. Weak Fill", "Nonint. Stroke"],
        ),
        (
            WidgetState::Inactive,
            ["Inactive Fill", "Inactive Weak Fill", "Inactive Stroke"],
        ),
        (
            WidgetState::Hovered,
            ["Hovered Fill", "Hovered Weak Fill", "Hovered Stroke"],
        ),
        (
            WidgetState::Active,
            ["Active Fill", "Active Weak Fill", "Active Stroke"],
        ),
        (WidgetState::Open, ["Open Fill", "Open Weak Fill", "Open Stroke"]),
    ];

    STATES
        .into_iter()
        .flat_map(|(state, [fill, weak, stroke])| {
            [
                adaptive(fill, VisualsColor::WidgetFill(state), MOBILE_AND_DESKTOP),
                adaptive(weak, VisualsColor::WidgetWeakFill(state), MOBILE_AND_DESKTOP),
                adaptive(stroke, VisualsColor::WidgetStroke(state), MOBILE_AND_DESKTOP),
            ]
        })
        .collect()
}

/// Text colors, all shown in the body style.
pub fn text_colors() -> Vec<TextModel> {
    let text = |name, color| TextModel {
        name,
        color: ColorToken::Visuals(color),
        style: TextStyle::Body,
        supported: NOT_WATCH,
    };
    vec![
        text("Text", VisualsColor::Text),
        text("Strong Text", VisualsColor::StrongText),
        text("Weak Text", VisualsColor::WeakText),
        text("Hyperlink", VisualsColor::Hyperlink),
        text("Warn", VisualsColor::WarnFg),
        text("Error", VisualsColor::ErrorFg),
        text("Button Text", VisualsColor::WidgetText(WidgetState::Inactive)),
    ]
}

/// Every built-in `TextStyle`, drawn in the regular text color.
pub fn text_styles() -> Vec<TextModel> {
    let style = |name, style| TextModel {
        name,
        color: ColorToken::Visuals(VisualsColor::Text),
        style,
        supported: NOT_WATCH,
    };
    vec![
        style("Small", TextStyle::Small),
        style("Body", TextStyle::Body),
        style("Monospace", TextStyle::Monospace),
        style("Button", TextStyle::Button),
        style("Heading", TextStyle::Heading),
    ]
}

/// All grids in header order, unfiltered.
pub fn all_grids() -> Vec<GridModel> {
    vec![
        GridModel {
            name: "Named",
            entries: GridEntries::Colors(named_colors()),
        },
        GridModel {
            name: "Adaptive",
            entries: GridEntries::Colors(adaptive_colors()),
        },
        GridModel {
            name: "Widgets",
            entries: GridEntries::Colors(widget_colors()),
        },
        GridModel {
            name: "Text Colors",
            entries: GridEntries::Texts(text_colors()),
        },
        GridModel {
            name: "Text Styles",
            entries: GridEntries::Texts(text_styles()),
        },
    ]
}

/// Grids the profile can show, with unsupported entries removed. Grids that
/// end up empty are dropped so the picker never offers a blank page.
pub fn grids_for(profile: &PlatformProfile) -> Vec<GridModel> {
    all_grids()
        .into_iter()
        .filter(|grid| profile.supports_text_grids || !grid.is_text())
        .map(|mut grid| {
            grid.entries.retain_platform(profile.platform);
            grid
        })
        .filter(|grid| !grid.is_empty())
        .collect()
}

/// A model with a reasonably long single line name, used to measure the
/// ideal cell width.
pub fn width_sample() -> ColorModel {
    ColorModel::new(WIDTH_SAMPLE_NAME, ColorToken::Fixed(Color32::TRANSPARENT), ALL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Platform;
    use std::collections::HashSet;

    #[test]
    fn test_names_unique_within_each_grid() {
        for grid in all_grids() {
            let names: Vec<&str> = match &grid.entries {
                GridEntries::Colors(models) => models.iter().map(|m| m.name).collect(),
                GridEntries::Texts(models) => models.iter().map(|m| m.name).collect(),
            };
            let unique: HashSet<&str> = names.iter().copied().collect();
            assert_eq!(unique.len(), names.len(), "duplicate name in {}", grid.name);
        }
    }

    #[test]
    fn test_named_colors_are_fixed_and_everywhere() {
        let colors = named_colors();
        assert_eq!(colors.len(), 24);
        assert!(colors.iter().all(|m| !m.token.is_adaptive()));
        assert!(colors.iter().all(|m| m.supported == SupportedPlatforms::ALL));
        assert_eq!(colors[0].token, ColorToken::Fixed(Color32::TRANSPARENT));
    }

    #[test]
    fn test_widget_colors_cover_every_state() {
        assert_eq!(widget_colors().len(), 15);
        assert!(widget_colors().iter().all(|m| m.token.is_adaptive()));
    }

    #[test]
    fn test_desktop_sees_everything() {
        let grids = grids_for(&PlatformProfile::for_platform(Platform::Desktop));
        assert_eq!(grids, all_grids());
    }

    #[test]
    fn test_watch_only_gets_named_colors() {
        let grids = grids_for(&PlatformProfile::for_platform(Platform::Watch));
        assert_eq!(grids.len(), 1);
        assert_eq!(grids[0].name, "Named");
        assert!(grids.iter().all(|g| !g.is_text()));
    }

    #[test]
    fn test_tv_gets_adaptive_subset() {
        let grids = grids_for(&PlatformProfile::for_platform(Platform::Tv));
        let names: Vec<&str> = grids.iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Named", "Adaptive", "Text Colors", "Text Styles"]);

        let adaptive = &grids[1];
        assert_eq!(adaptive.len(), 6);
        assert!(adaptive.len() < adaptive_colors().len());
    }

    #[test]
    fn test_width_sample_name() {
        assert_eq!(width_sample().name, "Secondary System");
    }
}
