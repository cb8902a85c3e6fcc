//! Common types and data structures

use egui::{Color32, TextStyle, Visuals};
use serde::{Deserialize, Serialize};

/// Form factor a swatch can be shown on. Phones and tablets share `Mobile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Mobile,
    Desktop,
    Watch,
    Tv,
}

impl Platform {
    /// Display order for platform tags.
    pub const ALL: [Platform; 4] = [
        Platform::Mobile,
        Platform::Desktop,
        Platform::Watch,
        Platform::Tv,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Platform::Mobile => "Mobile",
            Platform::Desktop => "Desktop",
            Platform::Watch => "Watch",
            Platform::Tv => "TV",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Platform::Mobile => 1 << 0,
            Platform::Desktop => 1 << 1,
            Platform::Watch => 1 << 2,
            Platform::Tv => 1 << 3,
        }
    }
}

/// Set of platforms a token is available on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SupportedPlatforms(u8);

impl SupportedPlatforms {
    pub const ALL: Self = Self(0b1111);
    pub const MOBILE_AND_DESKTOP: Self = Self(0b0011);
    /// Everything except the watch, which has no dark/light mode. The TV
    /// only carries a subset of the adaptive colors, so prefer
    /// `MOBILE_AND_DESKTOP` for those.
    pub const NOT_WATCH: Self = Self(0b1011);

    pub fn contains(self, platform: Platform) -> bool {
        self.0 & platform.bit() != 0
    }

    pub fn iter(self) -> impl Iterator<Item = Platform> {
        Platform::ALL.into_iter().filter(move |p| self.contains(*p))
    }
}

/// Widget interaction state in `egui::style::Widgets`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetState {
    Noninteractive,
    Inactive,
    Hovered,
    Active,
    Open,
}

impl WidgetState {
    fn visuals(self, visuals: &Visuals) -> &egui::style::WidgetVisuals {
        let widgets = &visuals.widgets;
        match self {
            WidgetState::Noninteractive => &widgets.noninteractive,
            WidgetState::Inactive => &widgets.inactive,
            WidgetState::Hovered => &widgets.hovered,
            WidgetState::Active => &widgets.active,
            WidgetState::Open => &widgets.open,
        }
    }
}

/// A color read out of the active `Visuals`, so it follows dark/light mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualsColor {
    PanelFill,
    WindowFill,
    ExtremeBg,
    FaintBg,
    CodeBg,
    SelectionBg,
    SelectionStroke,
    Hyperlink,
    WarnFg,
    ErrorFg,
    WindowStroke,
    Text,
    StrongText,
    WeakText,
    WidgetFill(WidgetState),
    WidgetWeakFill(WidgetState),
    WidgetStroke(WidgetState),
    WidgetText(WidgetState),
}

/// Opaque handle to a framework color. Swatch code passes it through to
/// [`ColorToken::resolve`] and never computes on the channels itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Fixed(Color32),
    Visuals(VisualsColor),
}

impl ColorToken {
    pub fn resolve(self, visuals: &Visuals) -> Color32 {
        let color = match self {
            ColorToken::Fixed(color) => return color,
            ColorToken::Visuals(color) => color,
        };
        match color {
            VisualsColor::PanelFill => visuals.panel_fill,
            VisualsColor::WindowFill => visuals.window_fill,
            VisualsColor::ExtremeBg => visuals.extreme_bg_color,
            VisualsColor::FaintBg => visuals.faint_bg_color,
            VisualsColor::CodeBg => visuals.code_bg_color,
            VisualsColor::SelectionBg => visuals.selection.bg_fill,
            VisualsColor::SelectionStroke => visuals.selection.stroke.color,
            VisualsColor::Hyperlink => visuals.hyperlink_color,
            VisualsColor::WarnFg => visuals.warn_fg_color,
            VisualsColor::ErrorFg => visuals.error_fg_color,
            VisualsColor::WindowStroke => visuals.window_stroke.color,
            VisualsColor::Text => visuals.text_color(),
            VisualsColor::StrongText => visuals.strong_text_color(),
            VisualsColor::WeakText => visuals.weak_text_color(),
            VisualsColor::WidgetFill(state) => state.visuals(visuals).bg_fill,
            VisualsColor::WidgetWeakFill(state) => state.visuals(visuals).weak_bg_fill,
            VisualsColor::WidgetStroke(state) => state.visuals(visuals).bg_stroke.color,
            VisualsColor::WidgetText(state) => state.visuals(visuals).fg_stroke.color,
        }
    }

    /// True when the value changes with dark/light mode.
    pub fn is_adaptive(self) -> bool {
        matches!(self, ColorToken::Visuals(_))
    }
}

/// Data needed to render a color swatch.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorModel {
    pub name: &'static str,
    pub token: ColorToken,
    pub supported: SupportedPlatforms,
}

impl ColorModel {
    pub const fn new(name: &'static str, token: ColorToken, supported: SupportedPlatforms) -> Self {
        Self {
            name,
            token,
            supported,
        }
    }
}

/// Data needed to render a text swatch: sample text drawn in `style` and `color`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextModel {
    pub name: &'static str,
    pub color: ColorToken,
    pub style: TextStyle,
    pub supported: SupportedPlatforms,
}

/// The swatches of one grid. Each kind has its own renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum GridEntries {
    Colors(Vec<ColorModel>),
    Texts(Vec<TextModel>),
}

impl GridEntries {
    pub fn len(&self) -> usize {
        match self {
            GridEntries::Colors(models) => models.len(),
            GridEntries::Texts(models) => models.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keep only the entries available on `platform`.
    pub fn retain_platform(&mut self, platform: Platform) {
        match self {
            GridEntries::Colors(models) => models.retain(|m| m.supported.contains(platform)),
            GridEntries::Texts(models) => models.retain(|m| m.supported.contains(platform)),
        }
    }
}

/// A named collection of swatches, picked from the header.
#[derive(Debug, Clone, PartialEq)]
pub struct GridModel {
    pub name: &'static str,
    pub entries: GridEntries,
}

impl GridModel {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_text(&self) -> bool {
        matches!(self.entries, GridEntries::Texts(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_sets() {
        assert!(Platform::ALL.iter().all(|p| SupportedPlatforms::ALL.contains(*p)));
        assert!(!SupportedPlatforms::NOT_WATCH.contains(Platform::Watch));
        assert!(SupportedPlatforms::NOT_WATCH.contains(Platform::Tv));
        assert!(!SupportedPlatforms::MOBILE_AND_DESKTOP.contains(Platform::Tv));
        assert_eq!(
            SupportedPlatforms::MOBILE_AND_DESKTOP.iter().collect::<Vec<_>>(),
            vec![Platform::Mobile, Platform::Desktop]
        );
        assert_eq!(
            SupportedPlatforms::NOT_WATCH.iter().collect::<Vec<_>>(),
            vec![Platform::Mobile, Platform::Desktop, Platform::Tv]
        );
    }

    #[test]
    fn test_adaptive_tokens_follow_visuals() {
        let token = ColorToken::Visuals(VisualsColor::PanelFill);
        let dark = Visuals::dark();
        let light = Visuals::light();
        assert_eq!(token.resolve(&dark), dark.panel_fill);
        assert_eq!(token.resolve(&light), light.panel_fill);
        assert_ne!(token.resolve(&dark), token.resolve(&light));
        assert!(token.is_adaptive());
    }

    #[test]
    fn test_fixed_tokens_ignore_visuals() {
        let token = ColorToken::Fixed(Color32::RED);
        assert_eq!(token.resolve(&Visuals::dark()), Color32::RED);
        assert_eq!(token.resolve(&Visuals::light()), Color32::RED);
        assert!(!token.is_adaptive());
    }

    #[test]
    fn test_widget_tokens() {
        let visuals = Visuals::light();
        let token = ColorToken::Visuals(VisualsColor::WidgetStroke(WidgetState::Hovered));
        assert_eq!(token.resolve(&visuals), visuals.widgets.hovered.bg_stroke.color);
    }

    #[test]
    fn test_retain_platform() {
        let mut entries = GridEntries::Colors(vec![
            ColorModel::new("A", ColorToken::Fixed(Color32::RED), SupportedPlatforms::ALL),
            ColorModel::new(
                "B",
                ColorToken::Visuals(VisualsColor::FaintBg),
                SupportedPlatforms::MOBILE_AND_DESKTOP,
            ),
        ]);
        entries.retain_platform(Platform::Tv);
        assert_eq!(entries.len(), 1);
        entries.retain_platform(Platform::Watch);
        assert!(!entries.is_empty());
    }
}
