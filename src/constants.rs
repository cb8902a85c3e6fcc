//! Application constants and configuration

pub const APP_NAME: &str = "Swatches";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Links shown in the About window: (label, url)
pub const ABOUT_LINKS: &[(&str, &str)] = &[
    ("egui on GitHub", "https://github.com/emilk/egui"),
    ("Color32 docs", "https://docs.rs/egui/latest/egui/struct.Color32.html"),
    ("Visuals docs", "https://docs.rs/egui/latest/egui/style/struct.Visuals.html"),
    ("TextStyle docs", "https://docs.rs/egui/latest/egui/enum.TextStyle.html"),
];

/// Snippet shown in the About window
pub const ABOUT_CODE_SAMPLE: &str = r#"ui.label(
    RichText::new("Careful")
        .color(ui.visuals().warn_fg_color),
);"#;

/// Default sample string for text swatches
pub const DEFAULT_SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog.";

/// Long single-line label used to measure the ideal cell width
pub const WIDTH_SAMPLE_NAME: &str = "Secondary System";
