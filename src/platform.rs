//! Per-form-factor constants, picked once at startup

use crate::types::Platform;

/// Everything that varies between form factors. The app reads these values
/// instead of branching on the platform at each call site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformProfile {
    pub platform: Platform,
    pub max_columns: usize,
    /// Color chip side length bounds.
    pub chip_min: f32,
    pub chip_max: f32,
    /// Font size for platform tags.
    pub tag_font_size: f32,
    pub supports_text_grids: bool,
    /// No dark/light switch on the watch; it always renders dark.
    pub supports_dark_toggle: bool,
    pub show_about: bool,
    /// Show every grid at once, one scrolling row each, instead of a picker.
    pub stack_all_grids: bool,
    /// Swatch background reads the widget fill. Watch uses a flat gray.
    pub flat_swatch_fill: bool,
}

impl PlatformProfile {
    pub const fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Mobile => Self {
                platform,
                max_columns: 2,
                chip_min: 50.0,
                chip_max: 100.0,
                tag_font_size: 10.0,
                supports_text_grids: true,
                supports_dark_toggle: true,
                show_about: true,
                stack_all_grids: false,
                flat_swatch_fill: false,
            },
            Platform::Desktop => Self {
                platform,
                max_columns: 8,
                chip_min: 50.0,
                chip_max: 100.0,
                tag_font_size: 12.0,
                supports_text_grids: true,
                supports_dark_toggle: true,
                show_about: true,
                stack_all_grids: false,
                flat_swatch_fill: false,
            },
            Platform::Watch => Self {
                platform,
                max_columns: 1,
                chip_min: 30.0,
                chip_max: 150.0,
                tag_font_size: 9.0,
                supports_text_grids: false,
                supports_dark_toggle: false,
                show_about: false,
                stack_all_grids: false,
                flat_swatch_fill: true,
            },
            Platform::Tv => Self {
                platform,
                max_columns: 5,
                chip_min: 100.0,
                chip_max: 300.0,
                tag_font_size: 14.0,
                supports_text_grids: true,
                supports_dark_toggle: true,
                show_about: true,
                stack_all_grids: true,
                flat_swatch_fill: false,
            },
        }
    }

    /// Dark mode to actually render, given what the user picked.
    pub fn effective_dark_mode(&self, requested: bool) -> bool {
        requested || !self.supports_dark_toggle
    }
}

impl Default for PlatformProfile {
    fn default() -> Self {
        Self::for_platform(Platform::Desktop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_profile_has_sane_bounds() {
        for platform in Platform::ALL {
            let profile = PlatformProfile::for_platform(platform);
            assert_eq!(profile.platform, platform);
            assert!(profile.max_columns >= 1);
            assert!(profile.chip_min > 0.0 && profile.chip_min <= profile.chip_max);
        }
    }

    #[test]
    fn test_only_tv_stacks_grids() {
        let tv = PlatformProfile::for_platform(Platform::Tv);
        assert!(tv.stack_all_grids);
        assert!(tv.supports_dark_toggle);
        assert!(tv.show_about);

        for platform in [Platform::Mobile, Platform::Desktop, Platform::Watch] {
            assert!(!PlatformProfile::for_platform(platform).stack_all_grids);
        }
    }

    #[test]
    fn test_watch_is_always_dark() {
        let watch = PlatformProfile::for_platform(Platform::Watch);
        assert!(watch.effective_dark_mode(false));
        assert!(!watch.supports_text_grids);

        let desktop = PlatformProfile::default();
        assert!(!desktop.effective_dark_mode(false));
        assert!(desktop.effective_dark_mode(true));
    }
}
