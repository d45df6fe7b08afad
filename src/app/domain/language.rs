use serde::{Deserialize, Serialize};

use crate::app::infrastructure::error::{AppError, Result};

/// Languages available for snippets.
/// Each variant carries its display name, the syntect grammar used to
/// highlight it and a starter snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    JavaScript,
    TypeScript,
    Python,
    Java,
    CSharp,
    Ruby,
    Rust,
    Go,
    Sql,
}

impl Language {
    /// Stable identifier used by settings files and UI selects
    pub fn id(&self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Python => "python",
            Self::Java => "java",
            Self::CSharp => "csharp",
            Self::Ruby => "ruby",
            Self::Rust => "rust",
            Self::Go => "go",
            Self::Sql => "sql",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Python => "Python",
            Self::Java => "Java",
            Self::CSharp => "C#",
            Self::Ruby => "Ruby",
            Self::Rust => "Rust",
            Self::Go => "Go",
            Self::Sql => "SQL",
        }
    }

    /// Name of the syntect syntax definition used as this language's grammar.
    ///
    /// syntect's bundled set has no TypeScript grammar, so TypeScript is
    /// highlighted with the JavaScript one.
    pub fn grammar_name(&self) -> &'static str {
        match self {
            Self::JavaScript | Self::TypeScript => "JavaScript",
            Self::Python => "Python",
            Self::Java => "Java",
            Self::CSharp => "C#",
            Self::Ruby => "Ruby",
            Self::Rust => "Rust",
            Self::Go => "Go",
            Self::Sql => "SQL",
        }
    }

    pub fn default_source(&self) -> &'static str {
        match self {
            Self::JavaScript => DEFAULT_JAVASCRIPT,
            Self::TypeScript => DEFAULT_TYPESCRIPT,
            Self::Python => DEFAULT_PYTHON,
            Self::Java => DEFAULT_JAVA,
            Self::CSharp => DEFAULT_CSHARP,
            Self::Ruby => DEFAULT_RUBY,
            Self::Rust => DEFAULT_RUST,
            Self::Go => DEFAULT_GO,
            Self::Sql => DEFAULT_SQL,
        }
    }

    /// Look up a language by its identifier
    pub fn from_id(id: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.id() == id)
            .ok_or_else(|| AppError::UnknownLanguage(id.to_string()))
    }

    /// Get all available languages, in menu order
    pub fn all() -> &'static [Language] {
        &[
            Self::JavaScript,
            Self::TypeScript,
            Self::Python,
            Self::Java,
            Self::CSharp,
            Self::Ruby,
            Self::Rust,
            Self::Go,
            Self::Sql,
        ]
    }
}

const DEFAULT_JAVASCRIPT: &str = "function fibonacci(n) {
  if (n <= 1) return n;
  return fibonacci(n - 1) + fibonacci(n - 2);
}";

const DEFAULT_TYPESCRIPT: &str = "function fibonacci(n: number): number {
  if (n <= 1) return n;
  return fibonacci(n - 1) + fibonacci(n - 2);
}";

const DEFAULT_PYTHON: &str = "def fibonacci(n):
  if n <= 1:
    return n
  return fibonacci(n - 1) + fibonacci(n - 2)";

const DEFAULT_JAVA: &str = "public class Fibonacci {
  public static int fibonacci(int n) {
    if (n <= 1) return n;
    return fibonacci(n - 1) + fibonacci(n - 2);
  }
}";

const DEFAULT_CSHARP: &str = "public class Fibonacci {
  public static int Fibonacci(int n) {
    if (n <= 1) return n;
    return Fibonacci(n - 1) + Fibonacci(n - 2);
  }
}";

const DEFAULT_RUBY: &str = "def fibonacci(n)
  if n <= 1
    return n
  end
  fibonacci(n - 1) + fibonacci(n - 2)
end";

const DEFAULT_RUST: &str = "fn fibonacci(n: u32) -> u32 {
  if n <= 1 {
    return n;
  }
  fibonacci(n - 1) + fibonacci(n - 2)
}";

const DEFAULT_GO: &str = "package main

func fibonacci(n int) int {
  if n <= 1 {
    return n
  }
  return fibonacci(n-1) + fibonacci(n-2)
}";

const DEFAULT_SQL: &str = "CREATE TABLE Fibonacci (
  n INT PRIMARY KEY,
  value INT NOT NULL
);";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<&str> = Language::all().iter().map(|l| l.id()).collect();
        assert_eq!(ids.len(), Language::all().len());
    }

    #[test]
    fn test_from_id_round_trips_every_language() {
        for lang in Language::all() {
            assert_eq!(Language::from_id(lang.id()).unwrap(), *lang);
        }
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        let err = Language::from_id("cobol").unwrap_err();
        assert!(matches!(err, AppError::UnknownLanguage(ref id) if id == "cobol"));
        // ids are case-sensitive
        assert!(Language::from_id("JavaScript").is_err());
    }

    #[test]
    fn test_default_snippets_are_distinct() {
        let snippets: HashSet<&str> = Language::all().iter().map(|l| l.default_source()).collect();
        assert_eq!(snippets.len(), Language::all().len());
        for lang in Language::all() {
            let src = lang.default_source();
            match lang {
                Language::Sql => assert!(src.starts_with("CREATE TABLE")),
                Language::CSharp => assert!(src.contains("Fibonacci(n - 1)")),
                _ => assert!(src.contains("fibonacci")),
            }
        }
    }

    #[test]
    fn test_serde_uses_ids() {
        for lang in Language::all() {
            let json = serde_json::to_string(lang).unwrap();
            assert_eq!(json, format!("\"{}\"", lang.id()));
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Language::CSharp.display_name(), "C#");
        assert_eq!(Language::Sql.display_name(), "SQL");
        assert_eq!(Language::default(), Language::JavaScript);
    }
}
