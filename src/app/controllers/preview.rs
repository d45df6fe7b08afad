use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::app::domain::{DisplayConfig, EditorState};
use crate::app::services::syntax::SyntaxHighlighter;
use crate::app::services::text_ops::{escape_html, split_lines};

pub const CODE_FONT_FAMILY: &str = "\"Fira Code\", \"Fira Mono\", monospace";

/// Red, yellow, green.
pub const CHROME_DOT_COLORS: [&str; 3] = ["#ef4444", "#eab308", "#22c55e"];
const CHROME_RULE_COLOR: &str = "#374151";
const CHROME_DOT_SIZE_PX: u32 = 12;

const LINE_NUMBER_COLOR: &str = "#6b7280";
const LINE_NUMBER_WIDTH_PX: u32 = 48;
const LINE_NUMBER_GUTTER_PX: u32 = 16;

/// The card as the user sees it. Always derived from the current editor
/// and display state, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPreview {
    pub card: CardStyle,
    pub window_chrome: Option<WindowChrome>,
    pub code: CodeArea,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardStyle {
    pub background: &'static str,
    pub foreground: &'static str,
    /// Border colour
    pub accent: &'static str,
    pub border_radius_px: u32,
}

/// Title-bar strip drawn above the code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowChrome {
    pub dots: [&'static str; 3],
    pub rule_color: &'static str,
}

impl Default for WindowChrome {
    fn default() -> Self {
        Self {
            dots: CHROME_DOT_COLORS,
            rule_color: CHROME_RULE_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeArea {
    pub padding_px: u32,
    pub font_size_px: u32,
    pub font_family: &'static str,
    pub color: &'static str,
    pub body: CodeBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CodeBody {
    /// One row per source line, each highlighted on its own.
    Numbered(Vec<CodeRow>),
    /// The whole source highlighted in one pass.
    Block(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeRow {
    /// 1-based
    pub number: usize,
    pub markup: String,
}

/// Build the preview tree for the given state.
///
/// Pure: equal inputs produce equal trees.
pub fn render_preview(
    editor: &EditorState,
    display: &DisplayConfig,
    highlighter: &SyntaxHighlighter,
) -> RenderedPreview {
    let theme = display.theme();
    let tokens = theme.tokens();
    let language = editor.language();

    let body = if display.show_line_numbers() {
        let rows = split_lines(editor.source_text())
            .into_iter()
            .enumerate()
            .map(|(index, line)| CodeRow {
                number: index + 1,
                markup: highlighter.highlight_line(line, language, theme),
            })
            .collect();
        CodeBody::Numbered(rows)
    } else {
        CodeBody::Block(highlighter.highlight_source(editor.source_text(), language, theme))
    };

    RenderedPreview {
        card: CardStyle {
            background: tokens.background,
            foreground: tokens.foreground,
            accent: tokens.accent,
            border_radius_px: display.border_radius_px(),
        },
        window_chrome: display.show_window_chrome().then(WindowChrome::default),
        code: CodeArea {
            padding_px: display.padding_px(),
            font_size_px: display.font_size_px(),
            font_family: CODE_FONT_FAMILY,
            color: tokens.editor_foreground,
            body,
        },
    }
}

impl RenderedPreview {
    pub fn rows(&self) -> Option<&[CodeRow]> {
        match &self.code.body {
            CodeBody::Numbered(rows) => Some(rows),
            CodeBody::Block(_) => None,
        }
    }

    /// Serialize to a self-contained HTML fragment with inline styles.
    /// Highlighted markup is embedded as-is.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let card = &self.card;
        html.push_str(&format!(
            "<div style=\"{}\">",
            escape_html(&format!(
                "background-color:{};color:{};border:1px solid {};border-radius:{}px;overflow:hidden",
                card.background, card.foreground, card.accent, card.border_radius_px
            ))
        ));

        if let Some(chrome) = &self.window_chrome {
            html.push_str(&format!(
                "<div style=\"display:flex;gap:8px;padding:12px 16px;border-bottom:1px solid {}\">",
                escape_html(chrome.rule_color)
            ));
            for color in chrome.dots {
                html.push_str(&format!(
                    "<span style=\"display:inline-block;width:{size}px;height:{size}px;border-radius:50%;background-color:{}\"></span>",
                    escape_html(color),
                    size = CHROME_DOT_SIZE_PX
                ));
            }
            html.push_str("</div>");
        }

        let code = &self.code;
        html.push_str(&format!(
            "<div style=\"{}\">",
            escape_html(&format!(
                "padding:{}px;font-size:{}px;font-family:{};color:{}",
                code.padding_px, code.font_size_px, code.font_family, code.color
            ))
        ));
        match &code.body {
            CodeBody::Numbered(rows) => {
                html.push_str("<table style=\"border-collapse:collapse\"><tbody>");
                for row in rows {
                    html.push_str(&format!(
                        "<tr><td style=\"width:{}px;padding-right:{}px;text-align:right;vertical-align:top;color:{};user-select:none\">{}</td><td style=\"white-space:pre\">{}</td></tr>",
                        LINE_NUMBER_WIDTH_PX,
                        LINE_NUMBER_GUTTER_PX,
                        LINE_NUMBER_COLOR,
                        row.number,
                        row.markup
                    ));
                }
                html.push_str("</tbody></table>");
            }
            CodeBody::Block(markup) => {
                html.push_str(&format!(
                    "<pre style=\"margin:0;white-space:pre;font-family:inherit\">{}</pre>",
                    markup
                ));
            }
        }
        html.push_str("</div></div>");
        html
    }

    /// SHA-256 of `to_html()`, hex encoded.
    pub fn fingerprint(&self) -> String {
        hex::encode(Sha256::digest(self.to_html().as_bytes()))
    }
}
