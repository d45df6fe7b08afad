//! Source canonicalization.
//!
//! `Formatter` is the seam the session formats through. `ScriptFormatter`
//! is the built-in implementation: it rewrites JavaScript into a fixed
//! layout (2-space indentation, one statement per line, explicit `;`).

mod lexer;
mod printer;

use std::future::Future;

use thiserror::Error;

use crate::app::domain::Language;

/// Source text could not be parsed. Positions are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} ({line}:{column})")]
pub struct FormatError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl FormatError {
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }
}

pub trait Formatter {
    /// Whether `format` may be called for `language`.
    fn supports(&self, language: Language) -> bool;

    fn format(
        &self,
        source: &str,
        language: Language,
    ) -> impl Future<Output = Result<String, FormatError>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptFormatter;

impl Formatter for ScriptFormatter {
    fn supports(&self, language: Language) -> bool {
        language == Language::JavaScript
    }

    async fn format(&self, source: &str, language: Language) -> Result<String, FormatError> {
        if !self.supports(language) {
            return Err(FormatError::new(
                format!("No formatter for {}", language.display_name()),
                1,
                1,
            ));
        }
        format_script(source)
    }
}

/// Canonicalize JavaScript source.
///
/// Idempotent: formatting the output again returns it unchanged.
pub fn format_script(source: &str) -> Result<String, FormatError> {
    let tokens = lexer::tokenize(source)?;
    printer::print(&tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_compact_function() {
        let out = format_script("function f(x){return x+1}").unwrap();
        assert!(out.contains("function f(x) {"));
        assert_eq!(out, "function f(x) {\n  return x + 1;\n}\n");
    }

    #[test]
    fn test_default_snippet_is_canonical() {
        let canonical = format!("{}\n", Language::JavaScript.default_source());
        assert_eq!(format_script(&canonical).unwrap(), canonical);
        assert_eq!(
            format_script(Language::JavaScript.default_source()).unwrap(),
            canonical
        );
    }

    #[test]
    fn test_idempotence() {
        let inputs = [
            "function f(x){return x+1}",
            "const o = {\na: 1,\nb: [1,2,3]\n}\nlet s = 'hi'",
            "if(a){b()}else{c()}\n\n\n// tail\nx = y ? 1 : -2",
            "items.map(x => x * 2).filter(function(y){return y>2})",
            "class A{\nconstructor(){this.x=1}\nget(){return this.x}\n}",
            "for (const k of keys) { total += k } // sum",
            "const {a, b} = obj\nconst [x, y] = pair",
            "import React, {useState} from 'react'\nexport { a, b }\nexport default {name: 'x'}",
            "switch (x) {\ncase 1:\nfoo()\nbreak\ndefault:\nbar()\n}",
            "function* gen(){yield 1;yield* rest()}",
            "items.forEach(function(x){log(x);});\nconst f = () => {a();};",
        ];
        for input in inputs {
            let once = format_script(input).unwrap();
            let twice = format_script(&once).unwrap();
            assert_eq!(once, twice, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(format_script("").unwrap(), "");
        assert_eq!(format_script("  \n\n ").unwrap(), "");
    }

    #[test]
    fn test_syntax_error_reports_position() {
        let err = format_script("function f(x){return x+1").unwrap_err();
        assert_eq!(err.message, "Unexpected end of input, `{` is never closed");
        assert_eq!((err.line, err.column), (1, 14));
        assert_eq!(err.to_string(), "Unexpected end of input, `{` is never closed (1:14)");
    }

    #[test]
    fn test_script_formatter_supports_only_javascript() {
        let formatter = ScriptFormatter;
        for lang in Language::all() {
            assert_eq!(formatter.supports(*lang), *lang == Language::JavaScript);
        }
    }

    #[test]
    fn test_script_formatter_async_contract() {
        let formatter = ScriptFormatter;
        let out = pollster::block_on(formatter.format("a=1", Language::JavaScript)).unwrap();
        assert_eq!(out, "a = 1;\n");

        let err = pollster::block_on(formatter.format("def f(x): return x+1", Language::Python))
            .unwrap_err();
        assert_eq!(err.message, "No formatter for Python");
    }
}
