use super::FormatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TokenKind {
    Word,
    Number,
    Str,
    Template,
    Regex,
    Punct,
    LineComment,
    BlockComment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Line breaks in the whitespace preceding this token.
    pub newlines_before: usize,
    pub line: usize,
    pub column: usize,
}

impl Token<'_> {
    pub fn is_comment(&self) -> bool {
        matches!(self.kind, TokenKind::LineComment | TokenKind::BlockComment)
    }

    pub fn is_punct(&self, text: &str) -> bool {
        self.kind == TokenKind::Punct && self.text == text
    }
}

/// Longest first, so the first prefix match wins.
const PUNCTUATORS: &[&str] = &[
    ">>>=", "...", "===", "!==", "**=", "<<=", ">>=", ">>>", "&&=", "||=", "??=", "=>", "==",
    "!=", "<=", ">=", "&&", "||", "??", "?.", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=",
    "|=", "^=", "**", "<<", ">>", "{", "}", "(", ")", "[", "]", ";", ",", "<", ">", "+", "-",
    "*", "/", "%", "&", "|", "^", "!", "~", "?", ":", "=", ".", "@",
];

/// Keywords after which an expression (not an operator) is expected.
pub(super) const EXPRESSION_KEYWORDS: &[&str] = &[
    "return", "typeof", "instanceof", "in", "of", "new", "delete", "void", "throw", "case", "do",
    "else", "yield", "await",
];

pub(super) fn tokenize(source: &str) -> Result<Vec<Token<'_>>, FormatError> {
    Lexer::new(source).run()
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token<'a>>,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Token<'a>>, FormatError> {
        loop {
            let newlines_before = self.skip_whitespace();
            let Some(ch) = self.peek() else {
                return Ok(self.tokens);
            };
            let (start, line, column) = (self.pos, self.line, self.column);

            let kind = if ch == '/' && self.peek_at(1) == Some('/') {
                self.take_while(|c| c != '\n');
                TokenKind::LineComment
            } else if ch == '/' && self.peek_at(1) == Some('*') {
                self.block_comment(line, column)?;
                TokenKind::BlockComment
            } else if ch == '"' || ch == '\'' {
                self.string(ch, line, column)?;
                TokenKind::Str
            } else if ch == '`' {
                self.template(line, column)?;
                TokenKind::Template
            } else if ch.is_ascii_digit()
                || (ch == '.' && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()))
            {
                self.number();
                TokenKind::Number
            } else if is_ident_start(ch) {
                self.bump();
                self.take_while(is_ident_part);
                TokenKind::Word
            } else if ch == '/' && self.regex_allowed() {
                self.regex(line, column)?;
                TokenKind::Regex
            } else if let Some(punct) = PUNCTUATORS.iter().find(|p| self.rest().starts_with(**p)) {
                for _ in 0..punct.len() {
                    self.bump();
                }
                TokenKind::Punct
            } else {
                return Err(FormatError::new(
                    format!("Unexpected character '{}'", ch),
                    line,
                    column,
                ));
            };

            self.tokens.push(Token {
                kind,
                text: &self.src[start..self.pos],
                newlines_before,
                line,
                column,
            });
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
    }

    fn skip_whitespace(&mut self) -> usize {
        let mut newlines = 0;
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            if ch == '\n' {
                newlines += 1;
            }
            self.bump();
        }
        newlines
    }

    fn block_comment(&mut self, line: usize, column: usize) -> Result<(), FormatError> {
        self.bump();
        self.bump();
        while !self.rest().starts_with("*/") {
            if self.bump().is_none() {
                return Err(FormatError::new("Unterminated comment", line, column));
            }
        }
        self.bump();
        self.bump();
        Ok(())
    }

    fn string(&mut self, quote: char, line: usize, column: usize) -> Result<(), FormatError> {
        self.bump();
        loop {
            match self.bump() {
                Some('\\') => {
                    self.bump();
                }
                Some(c) if c == quote => return Ok(()),
                Some('\n') | None => {
                    return Err(FormatError::new("Unterminated string literal", line, column));
                }
                Some(_) => {}
            }
        }
    }

    fn template(&mut self, line: usize, column: usize) -> Result<(), FormatError> {
        self.bump();
        // brace depth inside `${ ... }` substitutions
        let mut depth = 0usize;
        loop {
            match self.bump() {
                Some('\\') => {
                    self.bump();
                }
                Some('`') if depth == 0 => return Ok(()),
                Some('$') if depth == 0 && self.peek() == Some('{') => {
                    self.bump();
                    depth = 1;
                }
                Some('{') if depth > 0 => depth += 1,
                Some('}') if depth > 0 => depth -= 1,
                Some(q @ ('"' | '\'')) if depth > 0 => {
                    let (l, c) = (self.line, self.column);
                    self.string_body(q, l, c)?;
                }
                Some(_) => {}
                None => {
                    return Err(FormatError::new("Unterminated template literal", line, column));
                }
            }
        }
    }

    fn string_body(&mut self, quote: char, line: usize, column: usize) -> Result<(), FormatError> {
        loop {
            match self.bump() {
                Some('\\') => {
                    self.bump();
                }
                Some(c) if c == quote => return Ok(()),
                Some('\n') | None => {
                    return Err(FormatError::new("Unterminated string literal", line, column));
                }
                Some(_) => {}
            }
        }
    }

    fn number(&mut self) {
        let hex = self.rest().starts_with("0x") || self.rest().starts_with("0X");
        let mut prev = '\0';
        while let Some(ch) = self.peek() {
            let exponent_sign = !hex && (ch == '+' || ch == '-') && (prev == 'e' || prev == 'E');
            if !(ch.is_ascii_alphanumeric() || ch == '.' || ch == '_' || exponent_sign) {
                break;
            }
            prev = ch;
            self.bump();
        }
    }

    fn regex_allowed(&self) -> bool {
        match self.tokens.iter().rev().find(|t| !t.is_comment()) {
            None => true,
            Some(prev) => match prev.kind {
                TokenKind::Punct => !matches!(prev.text, ")" | "]" | "}" | "++" | "--"),
                TokenKind::Word => EXPRESSION_KEYWORDS.contains(&prev.text),
                _ => false,
            },
        }
    }

    fn regex(&mut self, line: usize, column: usize) -> Result<(), FormatError> {
        self.bump();
        let mut in_class = false;
        loop {
            match self.bump() {
                Some('\\') => {
                    self.bump();
                }
                Some('[') => in_class = true,
                Some(']') => in_class = false,
                Some('/') if !in_class => break,
                Some('\n') | None => {
                    return Err(FormatError::new(
                        "Unterminated regular expression",
                        line,
                        column,
                    ));
                }
                Some(_) => {}
            }
        }
        self.take_while(|c| c.is_ascii_alphabetic());
        Ok(())
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_' || ch == '$' || ch == '#'
}

fn is_ident_part(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}
