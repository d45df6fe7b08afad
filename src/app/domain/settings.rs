use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::display::ImageFormat;
use super::language::Language;
use super::theme::Theme;
use crate::app::infrastructure::error::Result;

/// Starting configuration of a snippet session.
///
/// Read-only: the session never writes settings back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnippetSettings {
    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default = "default_font_size")]
    pub font_size: i64,

    #[serde(default = "default_padding")]
    pub padding: i64,

    #[serde(default = "default_border_radius")]
    pub border_radius: i64,

    #[serde(default = "default_line_numbers")]
    pub line_numbers: bool,

    #[serde(default = "default_window_controls")]
    pub window_controls: bool,

    #[serde(default)]
    pub image_format: ImageFormat,

    /// Directory exported images are written to
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

fn default_font_size() -> i64 {
    14
}

fn default_padding() -> i64 {
    32
}

fn default_border_radius() -> i64 {
    8
}

fn default_line_numbers() -> bool {
    true
}

fn default_window_controls() -> bool {
    true
}

impl Default for SnippetSettings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            theme: Theme::default(),
            font_size: default_font_size(),
            padding: default_padding(),
            border_radius: default_border_radius(),
            line_numbers: default_line_numbers(),
            window_controls: default_window_controls(),
            image_format: ImageFormat::default(),
            export_dir: None,
        }
    }
}

impl SnippetSettings {
    /// Load settings from the config directory, falling back to defaults
    pub fn load() -> Self {
        Self::load_or_default(&Self::get_config_path())
    }

    /// A missing file is silent; any other read or parse failure is logged.
    fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!(
                    "Failed to read settings at {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("snippet-card");
        path.push("settings.json");
        path
    }

    /// Where exports land: the configured directory, else Downloads, else cwd
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
