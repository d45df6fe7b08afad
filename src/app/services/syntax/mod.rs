mod highlighter;

use std::iter;

use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;

use highlighter::LinesWithEndings;

use crate::app::domain::{Language, Theme};
use crate::app::services::text_ops::escape_html;

/// Wraps syntect's bundled grammars and palettes and turns source text
/// into inline-styled HTML spans.
///
/// Highlighting never fails: when a grammar or palette is missing, or
/// syntect reports an error, the text is emitted HTML-escaped without
/// styling and a warning is logged.
pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    /// Whether the language's grammar is present in the syntax set.
    pub fn has_grammar(&self, language: Language) -> bool {
        self.syntax_set
            .find_syntax_by_name(language.grammar_name())
            .is_some()
    }

    /// Whether the theme's token palette is present in the theme set.
    pub fn has_palette(&self, theme: Theme) -> bool {
        self.theme_set.themes.contains_key(theme.syntax_theme_key())
    }

    /// Highlight a single line with a fresh parser state.
    /// The returned markup contains no line terminator.
    pub fn highlight_line(&self, line: &str, language: Language, theme: Theme) -> String {
        let terminated = format!("{}\n", line);
        self.highlight(iter::once(terminated.as_str()), line, language, theme, true)
    }

    /// Highlight a whole source text, carrying parser state across lines.
    /// Line terminators are kept in the markup.
    pub fn highlight_source(&self, source: &str, language: Language, theme: Theme) -> String {
        self.highlight(LinesWithEndings::new(source), source, language, theme, false)
    }

    fn highlight<'a>(
        &self,
        lines: impl Iterator<Item = &'a str>,
        plain: &str,
        language: Language,
        theme: Theme,
        strip_newlines: bool,
    ) -> String {
        let Some(syntax) = self.syntax_set.find_syntax_by_name(language.grammar_name()) else {
            log::warn!("No grammar named {} for {}", language.grammar_name(), language.id());
            return escape_html(plain);
        };
        let Some(palette) = self.theme_set.themes.get(theme.syntax_theme_key()) else {
            log::warn!("No token palette {} for theme {}", theme.syntax_theme_key(), theme.id());
            return escape_html(plain);
        };

        match highlighter::highlight_to_html(lines, syntax, &self.syntax_set, palette, strip_newlines) {
            Ok(html) => html,
            Err(e) => {
                log::warn!("Highlighting {} failed: {}. Falling back to plain text.", language.id(), e);
                escape_html(plain)
            }
        }
    }
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
