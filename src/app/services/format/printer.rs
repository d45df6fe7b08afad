use std::borrow::Cow;

use super::FormatError;
use super::lexer::{EXPRESSION_KEYWORDS, Token, TokenKind};

const INDENT: &str = "  ";

/// Keywords whose parenthesised part is a header, not a call.
const HEADER_KEYWORDS: &[&str] = &["if", "for", "while", "switch", "catch", "with"];

const SPACED_BEFORE_PAREN: &[&str] = &[
    "if", "for", "while", "switch", "catch", "with", "function", "async", "return", "typeof",
    "await", "yield", "in", "of", "new", "delete", "void", "throw", "case", "else", "do",
    "instanceof",
];

/// Keywords that stay on the line of the `}` they follow.
const CONTINUATION_KEYWORDS: &[&str] = &["else", "catch", "finally"];

const JUMP_KEYWORDS: &[&str] = &["return", "break", "continue"];

const DECLARATION_KEYWORDS: &[&str] = &["const", "let", "var"];

/// Words after which `{` or `[` opens a binding pattern or specifier list.
const PATTERN_KEYWORDS: &[&str] = &["const", "let", "var", "import", "export", "default"];

/// Words that open a `switch` clause ending at its `:`.
const CLAUSE_KEYWORDS: &[&str] = &["case", "default"];

/// Words after which a line break never ends the statement.
const OPEN_KEYWORDS: &[&str] = &[
    "const", "let", "var", "function", "class", "extends", "import", "export", "async", "static",
    "if", "for", "while", "switch", "catch", "with", "try", "finally",
];

/// Words that continue an expression across a line break.
const BINARY_WORDS: &[&str] = &["in", "of", "instanceof"];

const ASSIGNMENT_OPERATORS: &[&str] = &[
    "=", "+=", "-=", "*=", "/=", "%=", "**=", "<<=", ">>=", ">>>=", "&=", "|=", "^=", "&&=",
    "||=", "??=",
];

#[derive(Debug, Default)]
struct BlockState {
    statements: usize,
    /// A statement has started and not yet been terminated.
    pending: bool,
    /// The pending statement runs on past a closing `}` (`const f = () => {}`).
    continues: bool,
    /// The pending statement is a `case`/`default` label.
    clause: bool,
    /// Statements after a `case ...:` label are indented one extra level.
    clause_body: bool,
}

#[derive(Debug)]
enum FrameKind {
    Block(BlockState),
    Object { multiline: bool },
    Paren { header: bool },
    Bracket,
}

#[derive(Debug)]
struct Frame {
    kind: FrameKind,
    ternaries: usize,
    line: usize,
    column: usize,
}

impl Frame {
    fn new(kind: FrameKind, line: usize, column: usize) -> Self {
        Self {
            kind,
            ternaries: 0,
            line,
            column,
        }
    }

    fn opener(&self) -> &'static str {
        match self.kind {
            FrameKind::Block(_) | FrameKind::Object { .. } => "{",
            FrameKind::Paren { .. } => "(",
            FrameKind::Bracket => "[",
        }
    }
}

struct Emitted {
    kind: TokenKind,
    text: String,
    /// Unary or prefix operator: binds to the next token without a space.
    prefix: bool,
}

/// Re-emit a token stream in canonical layout.
pub(super) fn print(tokens: &[Token<'_>]) -> Result<String, FormatError> {
    let mut printer = Printer::new();
    for (i, tok) in tokens.iter().enumerate() {
        let next = tokens[i + 1..].iter().find(|t| !t.is_comment());
        if tok.is_comment() {
            printer.comment(tok, next);
        } else {
            printer.token(tok, next)?;
        }
    }
    printer.finish()
}

struct Printer {
    out: String,
    indent: usize,
    at_line_start: bool,
    /// Never empty: the root frame is the top-level block.
    frames: Vec<Frame>,
    prev: Option<Emitted>,
    need_newline: bool,
    after_block_close: bool,
    after_header: bool,
}

impl Printer {
    fn new() -> Self {
        Self {
            out: String::new(),
            indent: 0,
            at_line_start: true,
            frames: vec![Frame::new(FrameKind::Block(BlockState::default()), 1, 1)],
            prev: None,
            need_newline: false,
            after_block_close: false,
            after_header: false,
        }
    }

    fn top(&self) -> &Frame {
        &self.frames[self.frames.len() - 1]
    }

    fn top_mut(&mut self) -> &mut Frame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    /// The innermost frame, if it is a block.
    fn block(&mut self) -> Option<&mut BlockState> {
        match &mut self.top_mut().kind {
            FrameKind::Block(state) => Some(state),
            _ => None,
        }
    }

    fn in_block(&self) -> bool {
        matches!(self.top().kind, FrameKind::Block(_))
    }

    fn pending(&self) -> bool {
        matches!(&self.top().kind, FrameKind::Block(state) if state.pending)
    }

    fn prev_text(&self) -> &str {
        self.prev.as_ref().map_or("", |p| p.text.as_str())
    }

    fn token(&mut self, tok: &Token<'_>, next: Option<&Token<'_>>) -> Result<(), FormatError> {
        let mut starts_statement = false;
        if self.in_block() && !tok.is_punct("}") {
            if self.after_block_close
                && tok.kind == TokenKind::Word
                && CONTINUATION_KEYWORDS.contains(&tok.text)
            {
                self.need_newline = false;
                if let Some(block) = self.block() {
                    block.pending = true;
                }
            } else if self.pending() && tok.newlines_before > 0 && self.asi_applies(tok) {
                self.end_statement();
            }
            if !self.pending() && !tok.is_punct(";") {
                self.start_statement(tok);
                starts_statement = true;
            }
        }
        self.after_block_close = false;
        let after_header = std::mem::take(&mut self.after_header);

        if tok.kind != TokenKind::Punct {
            self.emit(tok, false);
            return Ok(());
        }

        match tok.text {
            "{" => self.open_brace(tok, next, starts_statement || after_header),
            "}" => self.close_brace(tok)?,
            "(" => {
                let header = self.prev.as_ref().is_some_and(|p| {
                    p.kind == TokenKind::Word && HEADER_KEYWORDS.contains(&p.text.as_str())
                });
                self.emit(tok, false);
                self.frames.push(Frame::new(FrameKind::Paren { header }, tok.line, tok.column));
            }
            "[" => {
                self.emit(tok, false);
                self.frames.push(Frame::new(FrameKind::Bracket, tok.line, tok.column));
            }
            ")" | "]" => self.close_group(tok)?,
            ";" => self.semicolon(tok)?,
            "," => self.comma(tok, next),
            "?" => {
                self.emit(tok, false);
                self.top_mut().ternaries += 1;
            }
            ":" => {
                self.emit(tok, false);
                let frame = self.top_mut();
                if frame.ternaries > 0 {
                    frame.ternaries -= 1;
                } else if matches!(&frame.kind, FrameKind::Block(state) if state.clause) {
                    self.end_statement_state();
                    let opened = self
                        .block()
                        .is_some_and(|b| !std::mem::replace(&mut b.clause_body, true));
                    if opened {
                        self.indent += 1;
                    }
                }
            }
            "*" if starts_statement => self.emit(tok, true),
            "+" | "-" | "++" | "--" => {
                let prefix = !self.prev_ends_operand();
                self.emit(tok, prefix);
            }
            "!" | "~" | "..." => self.emit(tok, true),
            op => {
                if ASSIGNMENT_OPERATORS.contains(&op) {
                    if let Some(block) = self.block() {
                        block.continues = true;
                    }
                }
                self.emit(tok, false);
            }
        }
        Ok(())
    }

    fn start_statement(&mut self, tok: &Token<'_>) {
        let clause = tok.kind == TokenKind::Word && CLAUSE_KEYWORDS.contains(&tok.text);
        if clause && self.block().is_some_and(|b| std::mem::take(&mut b.clause_body)) {
            self.indent = self.indent.saturating_sub(1);
        }
        let statements = self.block().map_or(0, |b| b.statements);
        if self.need_newline {
            if tok.newlines_before >= 2 && statements > 0 {
                self.blank_line();
            } else {
                self.newline();
            }
            self.need_newline = false;
        }
        if let Some(block) = self.block() {
            block.statements += 1;
            block.pending = true;
            block.continues =
                tok.kind == TokenKind::Word && DECLARATION_KEYWORDS.contains(&tok.text);
            block.clause = clause;
        }
    }

    fn end_statement(&mut self) {
        self.write(";");
        self.prev = Some(Emitted {
            kind: TokenKind::Punct,
            text: ";".to_string(),
            prefix: false,
        });
        if let Some(block) = self.block() {
            block.pending = false;
            block.continues = false;
            block.clause = false;
        }
        self.need_newline = true;
    }

    fn open_brace(&mut self, tok: &Token<'_>, next: Option<&Token<'_>>, force_block: bool) {
        if !force_block && self.brace_opens_object() {
            let multiline = next.is_some_and(|n| n.newlines_before > 0 && !n.is_punct("}"));
            self.emit(tok, false);
            self.frames.push(Frame::new(FrameKind::Object { multiline }, tok.line, tok.column));
            if multiline {
                self.indent += 1;
                self.need_newline = true;
            }
        } else {
            self.emit(tok, false);
            self.frames.push(Frame::new(
                FrameKind::Block(BlockState::default()),
                tok.line,
                tok.column,
            ));
            self.indent += 1;
            self.need_newline = true;
        }
    }

    fn brace_opens_object(&self) -> bool {
        let Some(prev) = &self.prev else {
            return false;
        };
        let p = prev.text.as_str();
        match prev.kind {
            TokenKind::Punct => match p {
                ")" | "=>" | ";" | "}" => false,
                ":" => !self.in_block(),
                _ => true,
            },
            TokenKind::Word => {
                PATTERN_KEYWORDS.contains(&p)
                    || (EXPRESSION_KEYWORDS.contains(&p) && !matches!(p, "else" | "do"))
            }
            _ => false,
        }
    }

    fn close_brace(&mut self, tok: &Token<'_>) -> Result<(), FormatError> {
        if self.frames.len() == 1 {
            return Err(unexpected(tok));
        }
        let frame = self.frames.pop().ok_or_else(|| unexpected(tok))?;
        match frame.kind {
            FrameKind::Block(state) => {
                if state.pending {
                    // the frame is already popped, so terminate by hand
                    self.write(";");
                }
                self.indent = self.indent.saturating_sub(1);
                if state.clause_body {
                    self.indent = self.indent.saturating_sub(1);
                }
                if self.out.ends_with('{') {
                    self.need_newline = false;
                } else {
                    self.newline();
                }
                self.write("}");
                self.set_prev(tok, false);
                self.need_newline = false;
                if let Some(parent) = self.block() {
                    if !parent.continues {
                        parent.pending = false;
                        self.need_newline = true;
                        self.after_block_close = true;
                    }
                }
            }
            FrameKind::Object { multiline: true } => {
                if !matches!(self.prev_text(), "," | "{") {
                    self.write(",");
                }
                self.indent = self.indent.saturating_sub(1);
                self.newline();
                self.need_newline = false;
                self.write("}");
                self.set_prev(tok, false);
            }
            FrameKind::Object { multiline: false } => {
                self.emit(tok, false);
            }
            FrameKind::Paren { .. } | FrameKind::Bracket => return Err(unexpected(tok)),
        }
        Ok(())
    }

    fn close_group(&mut self, tok: &Token<'_>) -> Result<(), FormatError> {
        let header = match (&self.top().kind, tok.text) {
            (FrameKind::Paren { header }, ")") => *header,
            (FrameKind::Bracket, "]") => false,
            _ => return Err(unexpected(tok)),
        };
        self.frames.pop();
        self.emit(tok, false);
        self.after_header = header;
        Ok(())
    }

    fn semicolon(&mut self, tok: &Token<'_>) -> Result<(), FormatError> {
        if self.in_block() {
            // a `;` with nothing pending is an empty statement and is dropped
            if self.pending() {
                self.emit(tok, false);
                self.end_statement_state();
            }
        } else if matches!(self.top().kind, FrameKind::Paren { .. }) {
            self.emit(tok, false);
        } else {
            return Err(unexpected(tok));
        }
        Ok(())
    }

    fn end_statement_state(&mut self) {
        if let Some(block) = self.block() {
            block.pending = false;
            block.continues = false;
            block.clause = false;
        }
        self.need_newline = true;
    }

    fn comma(&mut self, tok: &Token<'_>, next: Option<&Token<'_>>) {
        let before_closer = next.is_some_and(|n| {
            n.kind == TokenKind::Punct && matches!(n.text, ")" | "]" | "}")
        });
        let multiline_object = matches!(self.top().kind, FrameKind::Object { multiline: true });
        if multiline_object {
            self.emit(tok, false);
            self.need_newline = true;
        } else if !before_closer {
            self.emit(tok, false);
        }
    }

    fn comment(&mut self, tok: &Token<'_>, next: Option<&Token<'_>>) {
        let trailing = tok.newlines_before == 0 && !self.out.is_empty();

        if self.pending() {
            let ends = match next {
                None => true,
                Some(n) => n.is_punct("}") || (n.newlines_before > 0 && self.asi_applies(n)),
            };
            if ends {
                self.end_statement();
            }
        }

        if tok.kind == TokenKind::LineComment {
            self.after_block_close = false;
        }

        if trailing {
            if !self.at_line_start {
                self.out.push(' ');
            }
            self.write(tok.text);
            if tok.kind == TokenKind::LineComment {
                self.need_newline = true;
            }
            return;
        }

        let statements = match &self.top().kind {
            FrameKind::Block(state) if !state.pending => Some(state.statements),
            _ => None,
        };
        match statements {
            Some(count) => {
                if tok.newlines_before >= 2 && count > 0 {
                    self.blank_line();
                } else {
                    self.newline();
                }
                if let Some(block) = self.block() {
                    block.statements += 1;
                }
            }
            None => self.newline(),
        }
        self.write(tok.text);
        self.need_newline = true;
    }

    fn finish(mut self) -> Result<String, FormatError> {
        if self.frames.len() > 1 {
            let frame = self.top();
            return Err(FormatError::new(
                format!("Unexpected end of input, `{}` is never closed", frame.opener()),
                frame.line,
                frame.column,
            ));
        }
        if self.pending() {
            self.end_statement();
        }
        self.newline();
        Ok(self.out)
    }

    fn asi_applies(&self, next: &Token<'_>) -> bool {
        let Some(prev) = &self.prev else {
            return false;
        };
        if self.after_header {
            return false;
        }
        let p = prev.text.as_str();
        let prev_ends = match prev.kind {
            TokenKind::Word => {
                JUMP_KEYWORDS.contains(&p)
                    || !(EXPRESSION_KEYWORDS.contains(&p) || OPEN_KEYWORDS.contains(&p))
            }
            TokenKind::Number | TokenKind::Str | TokenKind::Template | TokenKind::Regex => true,
            TokenKind::Punct => {
                matches!(p, ")" | "]" | "}") || (!prev.prefix && matches!(p, "++" | "--"))
            }
            TokenKind::LineComment | TokenKind::BlockComment => false,
        };
        if !prev_ends {
            return false;
        }
        if prev.kind == TokenKind::Word && JUMP_KEYWORDS.contains(&p) {
            return true;
        }
        match next.kind {
            TokenKind::Word => !BINARY_WORDS.contains(&next.text),
            TokenKind::Number | TokenKind::Str | TokenKind::Template | TokenKind::Regex => true,
            TokenKind::Punct => matches!(next.text, "++" | "--" | "!" | "~"),
            TokenKind::LineComment | TokenKind::BlockComment => false,
        }
    }

    fn prev_ends_operand(&self) -> bool {
        let Some(prev) = &self.prev else {
            return false;
        };
        let p = prev.text.as_str();
        match prev.kind {
            TokenKind::Word => !(EXPRESSION_KEYWORDS.contains(&p) || PATTERN_KEYWORDS.contains(&p)),
            TokenKind::Number | TokenKind::Str | TokenKind::Template | TokenKind::Regex => true,
            TokenKind::Punct => {
                matches!(p, ")" | "]") || (!prev.prefix && matches!(p, "++" | "--"))
            }
            TokenKind::LineComment | TokenKind::BlockComment => false,
        }
    }

    fn wants_space(&self, tok: &Token<'_>) -> bool {
        if self.at_line_start {
            return false;
        }
        let Some(prev) = &self.prev else {
            return false;
        };
        let p = prev.text.as_str();
        if prev.prefix
            || (prev.kind == TokenKind::Punct && matches!(p, "(" | "[" | "." | "?." | "!" | "~" | "..."))
        {
            return false;
        }
        if tok.kind == TokenKind::Punct {
            match tok.text {
                "," | ";" | ")" | "]" | "." | "?." => return false,
                "}" => return p != "{",
                "(" => {
                    return match prev.kind {
                        TokenKind::Word => SPACED_BEFORE_PAREN.contains(&p),
                        TokenKind::Punct => !matches!(p, ")" | "]"),
                        _ => false,
                    };
                }
                "[" | "++" | "--" => return !self.prev_ends_operand(),
                // generator star binds to `function` / `yield`
                "*" if prev.kind == TokenKind::Word && matches!(p, "function" | "yield") => {
                    return false;
                }
                ":" => return self.top().ternaries > 0,
                _ => {}
            }
        }
        true
    }

    fn emit(&mut self, tok: &Token<'_>, prefix: bool) {
        if self.need_newline {
            self.newline();
            self.need_newline = false;
        } else if self.wants_space(tok) {
            self.out.push(' ');
        }
        let text = if tok.kind == TokenKind::Str {
            prefer_double_quotes(tok.text)
        } else {
            Cow::Borrowed(tok.text)
        };
        self.write(&text);
        self.set_prev(tok, prefix);
    }

    fn set_prev(&mut self, tok: &Token<'_>, prefix: bool) {
        self.prev = Some(Emitted {
            kind: tok.kind,
            text: tok.text.to_string(),
            prefix,
        });
    }

    fn write(&mut self, text: &str) {
        if self.at_line_start {
            for _ in 0..self.indent {
                self.out.push_str(INDENT);
            }
            self.at_line_start = false;
        }
        self.out.push_str(text);
    }

    fn newline(&mut self) {
        let trimmed = self.out.trim_end_matches(' ').len();
        self.out.truncate(trimmed);
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
        self.at_line_start = true;
    }

    fn blank_line(&mut self) {
        self.newline();
        if !self.out.is_empty() && !self.out.ends_with("\n\n") {
            self.out.push('\n');
        }
    }
}

fn unexpected(tok: &Token<'_>) -> FormatError {
    FormatError::new(format!("Unexpected token `{}`", tok.text), tok.line, tok.column)
}

/// `'abc'` becomes `"abc"` unless the body contains a double quote.
fn prefer_double_quotes(text: &str) -> Cow<'_, str> {
    match text.strip_prefix('\'').and_then(|t| t.strip_suffix('\'')) {
        Some(body) if !body.contains('"') => Cow::Owned(format!("\"{}\"", body.replace("\\'", "'"))),
        _ => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::format::lexer::tokenize;

    fn fmt(src: &str) -> String {
        print(&tokenize(src).unwrap()).unwrap()
    }

    #[test]
    fn test_prefer_double_quotes() {
        assert_eq!(prefer_double_quotes("'abc'"), "\"abc\"");
        assert_eq!(prefer_double_quotes("'it\\'s'"), "\"it's\"");
        assert_eq!(prefer_double_quotes("'say \"hi\"'"), "'say \"hi\"'");
        assert_eq!(prefer_double_quotes("\"x\""), "\"x\"");
    }

    #[test]
    fn test_operators_and_calls() {
        assert_eq!(fmt("let a=b*(c+d)-f(x,y)[0]"), "let a = b * (c + d) - f(x, y)[0];\n");
    }

    #[test]
    fn test_unary_and_update_operators() {
        assert_eq!(fmt("x=-y;i++;--j;z=!a&&~b"), "x = -y;\ni++;\n--j;\nz = !a && ~b;\n");
    }

    #[test]
    fn test_asi_at_line_breaks() {
        assert_eq!(fmt("a = 1\nb = 2\nfoo()"), "a = 1;\nb = 2;\nfoo();\n");
    }

    #[test]
    fn test_no_asi_inside_continued_expression() {
        assert_eq!(fmt("a = b +\n  c\n.d()"), "a = b + c.d();\n");
        assert_eq!(fmt("if (x)\n  go()"), "if (x) go();\n");
    }

    #[test]
    fn test_return_followed_by_newline() {
        assert_eq!(fmt("function f() {\nreturn\n1\n}"), "function f() {\n  return;\n  1;\n}\n");
    }

    #[test]
    fn test_else_stays_on_brace_line() {
        let src = "if (a) {\nx()\n}\nelse if (b) {\ny()\n} else {\nz()\n}";
        assert_eq!(
            fmt(src),
            "if (a) {\n  x();\n} else if (b) {\n  y();\n} else {\n  z();\n}\n"
        );
    }

    #[test]
    fn test_try_catch_finally() {
        assert_eq!(
            fmt("try{a()}catch(e){b(e)}finally{c()}"),
            "try {\n  a();\n} catch (e) {\n  b(e);\n} finally {\n  c();\n}\n"
        );
    }

    #[test]
    fn test_declaration_with_block_initializer_is_terminated() {
        assert_eq!(
            fmt("const f = (a, b) => {\nreturn a + b\n}"),
            "const f = (a, b) => {\n  return a + b;\n};\n"
        );
    }

    #[test]
    fn test_empty_block_and_empty_statements() {
        assert_eq!(fmt("function noop(){};;"), "function noop() {}\n");
    }

    #[test]
    fn test_inline_object_and_array() {
        assert_eq!(
            fmt("const o={a:1,b:[1,2,],c:{}}"),
            "const o = { a: 1, b: [1, 2], c: {} };\n"
        );
    }

    #[test]
    fn test_multiline_object_gets_trailing_comma() {
        assert_eq!(
            fmt("const o = {\na: 1,\nb: {\nc: 2\n}\n}"),
            "const o = {\n  a: 1,\n  b: {\n    c: 2,\n  },\n};\n"
        );
    }

    #[test]
    fn test_ternary_spacing() {
        assert_eq!(fmt("x=a?b:c"), "x = a ? b : c;\n");
        assert_eq!(fmt("f({k:a?1:2})"), "f({ k: a ? 1 : 2 });\n");
    }

    #[test]
    fn test_for_header() {
        assert_eq!(
            fmt("for(let i=0;i<n;i++){sum+=i}"),
            "for (let i = 0; i < n; i++) {\n  sum += i;\n}\n"
        );
        assert_eq!(fmt("for(;;){}"), "for (;;) {}\n");
    }

    #[test]
    fn test_callback_block() {
        assert_eq!(
            fmt("items.forEach(function(x){log(x)})"),
            "items.forEach(function (x) {\n  log(x);\n});\n"
        );
    }

    #[test]
    fn test_class_body() {
        assert_eq!(
            fmt("class A extends B{\nx = 1\nconstructor(){super();this.y=2}\n}"),
            "class A extends B {\n  x = 1;\n  constructor() {\n    super();\n    this.y = 2;\n  }\n}\n"
        );
    }

    #[test]
    fn test_blank_lines_collapse_to_one() {
        assert_eq!(fmt("a()\n\n\n\nb()"), "a();\n\nb();\n");
        assert_eq!(fmt("{\n\n\na()\n}"), "{\n  a();\n}\n");
    }

    #[test]
    fn test_comments_are_kept() {
        assert_eq!(
            fmt("// header\nx = 1 // trailing\n\n/* block */\ny = 2"),
            "// header\nx = 1; // trailing\n\n/* block */\ny = 2;\n"
        );
    }

    #[test]
    fn test_comment_before_closing_brace() {
        assert_eq!(
            fmt("function f() {\nreturn 1 // done\n}"),
            "function f() {\n  return 1; // done\n}\n"
        );
    }

    #[test]
    fn test_template_and_regex_pass_through() {
        assert_eq!(
            fmt("const s=`a ${b}`;const r=/x+/g"),
            "const s = `a ${b}`;\nconst r = /x+/g;\n"
        );
    }

    #[test]
    fn test_unbalanced_brackets() {
        let err = print(&tokenize("f(a]").unwrap()).unwrap_err();
        assert_eq!(err.message, "Unexpected token `]`");
        assert_eq!((err.line, err.column), (1, 4));

        let err = print(&tokenize("}").unwrap()).unwrap_err();
        assert_eq!(err.message, "Unexpected token `}`");

        let err = print(&tokenize("if (x) {\n  y(").unwrap()).unwrap_err();
        assert_eq!(err.message, "Unexpected end of input, `(` is never closed");
        assert_eq!((err.line, err.column), (2, 4));
    }

    #[test]
    fn test_semicolon_inside_list_is_an_error() {
        let err = print(&tokenize("x = [1; 2]").unwrap()).unwrap_err();
        assert_eq!(err.message, "Unexpected token `;`");
    }

    #[test]
    fn test_destructuring_patterns_stay_inline() {
        assert_eq!(fmt("const {a, b} = obj"), "const { a, b } = obj;\n");
        assert_eq!(fmt("let [x, y] = pair"), "let [x, y] = pair;\n");
        assert_eq!(fmt("for (const {k} of list) {use(k)}"), "for (const { k } of list) {\n  use(k);\n}\n");
        assert_eq!(fmt("const {\na,\nb\n} = obj"), "const {\n  a,\n  b,\n} = obj;\n");
    }

    #[test]
    fn test_import_and_export_specifiers() {
        assert_eq!(
            fmt("import { readFile } from 'fs'"),
            "import { readFile } from \"fs\";\n"
        );
        assert_eq!(fmt("export { a, b }"), "export { a, b };\n");
        assert_eq!(
            fmt("import React, {useState} from 'react'\nexport default {name: 'x'}"),
            "import React, { useState } from \"react\";\nexport default { name: \"x\" };\n"
        );
    }

    #[test]
    fn test_switch_clauses_are_indented() {
        assert_eq!(
            fmt("switch (x) {\ncase 1:\nfoo()\nbreak\ndefault:\nbar()\n}"),
            "switch (x) {\n  case 1:\n    foo();\n    break;\n  default:\n    bar();\n}\n"
        );
    }

    #[test]
    fn test_generator_stars() {
        assert_eq!(
            fmt("function* gen(){yield 1;yield* rest()}"),
            "function* gen() {\n  yield 1;\n  yield* rest();\n}\n"
        );
    }

    #[test]
    fn test_closing_brace_after_explicit_semicolon() {
        let callback = "items.forEach(function (x) {\n  log(x);\n});\n";
        assert_eq!(fmt(callback), callback);
        let arrow = "const f = () => {\n  a();\n};\n";
        assert_eq!(fmt(arrow), arrow);
        assert_eq!(fmt("g(() => {a();});"), "g(() => {\n  a();\n});\n");
    }
}
