use serde::{Deserialize, Serialize};

use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::text_ops::title_case;

/// Card themes. Each one fully specifies the four visual tokens applied to
/// the preview card, plus the syntect palette used for highlighted spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Monokai,
    Dracula,
    Github,
    GithubDark,
    #[default]
    OneDark,
}

/// The four colour tokens of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeTokens {
    pub background: &'static str,
    pub foreground: &'static str,
    pub accent: &'static str,
    pub editor_foreground: &'static str,
}

impl Theme {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Monokai => "monokai",
            Self::Dracula => "dracula",
            Self::Github => "github",
            Self::GithubDark => "github-dark",
            Self::OneDark => "one-dark",
        }
    }

    /// Title-cased id, e.g. "github-dark" -> "Github Dark"
    pub fn display_name(&self) -> String {
        title_case(self.id())
    }

    pub fn tokens(&self) -> ThemeTokens {
        match self {
            Self::Monokai => ThemeTokens {
                background: "#272822",
                foreground: "#f8f8f2",
                accent: "#49483e",
                editor_foreground: "#f8f8f2",
            },
            Self::Dracula => ThemeTokens {
                background: "#282a36",
                foreground: "#f8f8f2",
                accent: "#44475a",
                editor_foreground: "#f8f8f2",
            },
            Self::Github => ThemeTokens {
                background: "#ffffff",
                foreground: "#24292e",
                accent: "#e1e4e8",
                editor_foreground: "#24292e",
            },
            Self::GithubDark => ThemeTokens {
                background: "#0d1117",
                foreground: "#c9d1d9",
                accent: "#30363d",
                editor_foreground: "#c9d1d9",
            },
            Self::OneDark => ThemeTokens {
                background: "#282c34",
                foreground: "#abb2bf",
                accent: "#3e4451",
                editor_foreground: "#abb2bf",
            },
        }
    }

    pub fn is_dark(&self) -> bool {
        !matches!(self, Self::Github)
    }

    /// syntect theme key for the token palette drawn on this card
    pub fn syntax_theme_key(&self) -> &'static str {
        if self.is_dark() {
            "base16-ocean.dark"
        } else {
            "InspiredGitHub"
        }
    }

    pub fn from_id(id: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|theme| theme.id() == id)
            .ok_or_else(|| AppError::UnknownTheme(id.to_string()))
    }

    /// Get all available themes
    pub fn all() -> &'static [Theme] {
        &[
            Self::Monokai,
            Self::Dracula,
            Self::Github,
            Self::GithubDark,
            Self::OneDark,
        ]
    }
}
