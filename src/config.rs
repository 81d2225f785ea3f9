use iced::{Size, Theme};

/// Compile-time application settings. Nothing is read from disk or the
/// command line.
#[derive(Debug, Clone)]
pub struct Settings {
    pub title: &'static str,
    pub window_size: Size,
    pub theme: Theme,
    /// Used when `RUST_LOG` is unset.
    pub log_filter: &'static str,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Number Converter",
            window_size: Size::new(420.0, 520.0),
            theme: Theme::Light,
            log_filter: "base_converter=info",
        }
    }
}
