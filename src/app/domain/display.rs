use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::settings::SnippetSettings;
use super::theme::Theme;
use crate::app::infrastructure::error::{AppError, Result};

pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 12..=24;
pub const PADDING_RANGE: RangeInclusive<u32> = 16..=64;
pub const BORDER_RADIUS_RANGE: RangeInclusive<u32> = 0..=16;

/// Raster format of an exported image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Lossless
    #[default]
    Png,
    /// Lossy
    Jpeg,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            _ => Err(AppError::UnknownImageFormat(s.to_string())),
        }
    }
}

/// User-adjustable look of the preview card.
///
/// Numeric fields are clamped into their documented ranges on every write,
/// so a stored value is always renderable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayConfig {
    theme: Theme,
    font_size_px: u32,
    padding_px: u32,
    border_radius_px: u32,
    show_line_numbers: bool,
    show_window_chrome: bool,
    export_format: ImageFormat,
}

fn clamp_to(value: i64, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(i64::from(*range.start()), i64::from(*range.end())) as u32
}

impl DisplayConfig {
    pub fn from_settings(settings: &SnippetSettings) -> Self {
        let mut config = Self::default();
        config.set_theme(settings.theme);
        config.set_font_size(settings.font_size);
        config.set_padding(settings.padding);
        config.set_border_radius(settings.border_radius);
        config.set_show_line_numbers(settings.line_numbers);
        config.set_show_window_chrome(settings.window_controls);
        config.set_export_format(settings.image_format);
        config
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn font_size_px(&self) -> u32 {
        self.font_size_px
    }

    pub fn padding_px(&self) -> u32 {
        self.padding_px
    }

    pub fn border_radius_px(&self) -> u32 {
        self.border_radius_px
    }

    pub fn show_line_numbers(&self) -> bool {
        self.show_line_numbers
    }

    pub fn show_window_chrome(&self) -> bool {
        self.show_window_chrome
    }

    pub fn export_format(&self) -> ImageFormat {
        self.export_format
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Set the theme by id; an unknown id is rejected and nothing changes
    pub fn set_theme_id(&mut self, id: &str) -> Result<()> {
        self.theme = Theme::from_id(id)?;
        Ok(())
    }

    /// Returns the value actually stored after clamping.
    pub fn set_font_size(&mut self, px: i64) -> u32 {
        self.font_size_px = clamp_to(px, &FONT_SIZE_RANGE);
        self.font_size_px
    }

    pub fn set_padding(&mut self, px: i64) -> u32 {
        self.padding_px = clamp_to(px, &PADDING_RANGE);
        self.padding_px
    }

    pub fn set_border_radius(&mut self, px: i64) -> u32 {
        self.border_radius_px = clamp_to(px, &BORDER_RADIUS_RANGE);
        self.border_radius_px
    }

    pub fn set_show_line_numbers(&mut self, show: bool) {
        self.show_line_numbers = show;
    }

    pub fn set_show_window_chrome(&mut self, show: bool) {
        self.show_window_chrome = show;
    }

    pub fn set_export_format(&mut self, format: ImageFormat) {
        self.export_format = format;
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: Theme::OneDark,
            font_size_px: 14,
            padding_px: 32,
            border_radius_px: 8,
            show_line_numbers: true,
            show_window_chrome: true,
            export_format: ImageFormat::Png,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.theme(), Theme::OneDark);
        assert_eq!(config.font_size_px(), 14);
        assert_eq!(config.padding_px(), 32);
        assert_eq!(config.border_radius_px(), 8);
        assert!(config.show_line_numbers());
        assert!(config.show_window_chrome());
        assert_eq!(config.export_format(), ImageFormat::Png);
    }

    #[test]
    fn test_font_size_clamps() {
        let mut config = DisplayConfig::default();
        assert_eq!(config.set_font_size(999), 24);
        assert_eq!(config.font_size_px(), 24);
        assert_eq!(config.set_font_size(0), 12);
        assert_eq!(config.set_font_size(-5), 12);
        assert_eq!(config.set_font_size(18), 18);
    }

    #[test]
    fn test_padding_clamps() {
        let mut config = DisplayConfig::default();
        assert_eq!(config.set_padding(8), 16);
        assert_eq!(config.set_padding(100), 64);
        assert_eq!(config.set_padding(40), 40);
    }

    #[test]
    fn test_border_radius_clamps() {
        let mut config = DisplayConfig::default();
        assert_eq!(config.set_border_radius(-1), 0);
        assert_eq!(config.set_border_radius(i64::MAX), 16);
        assert_eq!(config.set_border_radius(16), 16);
        assert_eq!(config.set_border_radius(0), 0);
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        let mut config = DisplayConfig::default();
        config.set_theme(Theme::Dracula);
        let err = config.set_theme_id("zenburn").unwrap_err();
        assert!(matches!(err, AppError::UnknownTheme(_)));
        assert_eq!(config.theme(), Theme::Dracula);

        config.set_theme_id("github").unwrap();
        assert_eq!(config.theme(), Theme::Github);
    }

    #[test]
    fn test_image_format_parsing() {
        assert_eq!("png".parse::<ImageFormat>().unwrap(), ImageFormat::Png);
        assert_eq!("JPEG".parse::<ImageFormat>().unwrap(), ImageFormat::Jpeg);
        assert_eq!("jpg".parse::<ImageFormat>().unwrap(), ImageFormat::Jpeg);
        assert!(matches!(
            "gif".parse::<ImageFormat>(),
            Err(AppError::UnknownImageFormat(_))
        ));
        assert_eq!(ImageFormat::Jpeg.extension(), "jpeg");
        assert_eq!(ImageFormat::Png.mime_type(), "image/png");
    }

    #[test]
    fn test_from_settings_clamps_out_of_range_values() {
        let settings = SnippetSettings {
            font_size: 40,
            padding: 2,
            border_radius: 99,
            line_numbers: false,
            ..Default::default()
        };
        let config = DisplayConfig::from_settings(&settings);
        assert_eq!(config.font_size_px(), 24);
        assert_eq!(config.padding_px(), 16);
        assert_eq!(config.border_radius_px(), 16);
        assert!(!config.show_line_numbers());
    }
}
