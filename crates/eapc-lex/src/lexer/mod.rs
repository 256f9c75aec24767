mod comment;
mod identifier;
mod number;
mod operator;
mod string;

use eapc_util::{Handler, Span};

use crate::cursor::Cursor;
use crate::token::{KeywordTable, Token, TokenKind};

/// Tokenizer for EAP source text.
///
/// Transforms a UTF-8 string into a stream of [`Token`]s, stopping at
/// [`TokenKind::Eof`]. Unrecognized characters are reported to the
/// [`Handler`] as a syntax error with line/column (§4.1).
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    keywords: KeywordTable,
    handler: &'a mut Handler,
    token_start: usize,
    token_start_line: u32,
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            keywords: KeywordTable::new(),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Tokenizes the entire input, consuming `self`.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token();
            let done = tok.kind == TokenKind::Eof;
            tokens.push(tok);
            if done {
                break;
            }
        }
        tokens
    }

    fn start_span(&self) -> Span {
        Span::new(self.token_start_line, self.token_start_column)
    }

    fn error(&mut self, message: impl Into<String>) {
        self.handler.error(message, self.start_span());
    }

    /// Returns the next token, skipping whitespace and comments first.
    fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let kind = self.lex_token_kind();

        Token::new(kind, self.token_start_line, self.token_start_column)
    }

    /// Dispatches on the current character to the right sub-lexer. Shared
    /// between the normal per-token dispatch and the unexpected-character
    /// recovery path in `lexer/operator.rs`, which re-enters here after
    /// skipping the bad character instead of staying stuck in operator
    /// lexing.
    pub(crate) fn lex_token_kind(&mut self) -> TokenKind {
        if self.cursor.is_at_end() {
            TokenKind::Eof
        } else if is_identifier_start(self.cursor.current_char()) {
            self.lex_identifier_or_keyword()
        } else if self.cursor.current_char().is_ascii_digit() {
            self.lex_number()
        } else if self.cursor.current_char() == '"' {
            self.lex_string()
        } else {
            self.lex_operator_or_punct()
        }
    }
}

/// §4.1: a leading ASCII letter or any codepoint ≥ U+0370 (Greek / Greek
/// Extended).
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || (c as u32) >= 0x0370
}

/// §4.1: identifier continuation additionally allows digits and underscore.
pub fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit() || c == '_'
}
