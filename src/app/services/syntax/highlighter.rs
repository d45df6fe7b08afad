use syntect::highlighting::{HighlightIterator, HighlightState, Highlighter, Style, Theme};
use syntect::html::{IncludeBackground, styled_line_to_highlighted_html};
use syntect::parsing::{ParseState, ScopeStack, SyntaxReference, SyntaxSet};

/// Highlight `lines` with one continuous parse state and return inline-styled
/// HTML spans.
///
/// With `strip_newlines`, line terminators are dropped from the markup; the
/// caller feeds newline-terminated lines because the bundled grammars are
/// the `newlines` variants.
pub(super) fn highlight_to_html<'a>(
    lines: impl Iterator<Item = &'a str>,
    syntax: &SyntaxReference,
    syntax_set: &SyntaxSet,
    theme: &Theme,
    strip_newlines: bool,
) -> Result<String, syntect::Error> {
    let highlighter = Highlighter::new(theme);
    let mut parse_state = ParseState::new(syntax);
    let mut highlight_state = HighlightState::new(&highlighter, ScopeStack::new());
    let mut html = String::new();

    for line in lines {
        let ops = parse_state.parse_line(line, syntax_set)?;
        let iter = HighlightIterator::new(&mut highlight_state, &ops, line, &highlighter);
        let regions: Vec<(Style, &str)> = if strip_newlines {
            iter.map(|(style, piece)| (style, piece.trim_end_matches(['\r', '\n'])))
                .filter(|(_, piece)| !piece.is_empty())
                .collect()
        } else {
            iter.collect()
        };
        html.push_str(&styled_line_to_highlighted_html(&regions, IncludeBackground::No)?);
    }

    Ok(html)
}

/// Iterator that yields lines including their line endings.
pub(super) struct LinesWithEndings<'a> {
    text: &'a str,
}

impl<'a> LinesWithEndings<'a> {
    pub(super) fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl<'a> Iterator for LinesWithEndings<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.text.is_empty() {
            return None;
        }
        let end = self.text.find('\n').map(|i| i + 1).unwrap_or(self.text.len());
        let line = &self.text[..end];
        self.text = &self.text[end..];
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_with_endings() {
        let lines: Vec<&str> = LinesWithEndings::new("a\nb\n\nc").collect();
        assert_eq!(lines, vec!["a\n", "b\n", "\n", "c"]);
        assert_eq!(LinesWithEndings::new("").count(), 0);
    }
}
