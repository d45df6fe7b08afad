use super::language::Language;
use crate::app::infrastructure::error::Result;

/// Source-of-truth for the snippet text and its language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    source_text: String,
    language: Language,
}

impl EditorState {
    /// Start a session in `language`, showing its starter snippet
    pub fn new(language: Language) -> Self {
        Self {
            source_text: language.default_source().to_string(),
            language,
        }
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Replace the text verbatim. Any text, including empty, is accepted.
    pub fn set_source_text(&mut self, text: impl Into<String>) {
        self.source_text = text.into();
    }

    /// Switch language.
    ///
    /// This discards the current text and loads the new language's starter
    /// snippet, even when `language` is already active.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.source_text = language.default_source().to_string();
    }

    /// Switch language by identifier. Unknown ids leave the state untouched.
    pub fn set_language_id(&mut self, id: &str) -> Result<()> {
        let language = Language::from_id(id)?;
        self.set_language(language);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.source_text.clear();
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::error::AppError;

    #[test]
    fn test_new_loads_default_source() {
        let state = EditorState::new(Language::Go);
        assert_eq!(state.language(), Language::Go);
        assert_eq!(state.source_text(), Language::Go.default_source());
    }

    #[test]
    fn test_set_language_resets_text_for_every_language() {
        let mut state = EditorState::default();
        for lang in Language::all() {
            state.set_source_text("edited");
            state.set_language_id(lang.id()).unwrap();
            assert_eq!(state.language(), *lang);
            assert_eq!(state.source_text(), lang.default_source());
        }
    }

    #[test]
    fn test_unknown_language_leaves_state_unchanged() {
        let mut state = EditorState::new(Language::Rust);
        state.set_source_text("let x = 1;");
        let err = state.set_language_id("brainfuck").unwrap_err();
        assert!(matches!(err, AppError::UnknownLanguage(_)));
        assert_eq!(state.language(), Language::Rust);
        assert_eq!(state.source_text(), "let x = 1;");
    }

    #[test]
    fn test_set_source_text_is_verbatim() {
        let mut state = EditorState::default();
        state.set_source_text("  \t<b>&</b>\r\n\n");
        assert_eq!(state.source_text(), "  \t<b>&</b>\r\n\n");
        state.set_source_text("");
        assert_eq!(state.source_text(), "");
    }

    #[test]
    fn test_clear_keeps_language() {
        let mut state = EditorState::new(Language::Python);
        state.clear();
        assert_eq!(state.source_text(), "");
        assert_eq!(state.language(), Language::Python);
    }
}
