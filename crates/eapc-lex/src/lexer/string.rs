//! String literal lexing.

use eapc_util::Symbol;

use super::Lexer;
use crate::token::TokenKind;

impl<'a> Lexer<'a> {
    /// Lexes a double-quoted string literal. There are no escape sequences;
    /// a quote simply closes the string. An unterminated string (no closing
    /// `"` before EOF) is accepted permissively and runs to end of input,
    /// per §4.1 "Strings".
    pub(crate) fn lex_string(&mut self) -> TokenKind {
        self.cursor.advance(); // opening '"'
        let start = self.cursor.position();
        while !self.cursor.is_at_end() && self.cursor.current_char() != '"' {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        if self.cursor.current_char() == '"' {
            self.cursor.advance();
        } else {
            self.error("unterminated string literal");
        }
        TokenKind::Str(Symbol::intern(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eapc_util::Handler;

    fn lex_first(source: &str) -> TokenKind {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new(source, &mut handler);
        lexer.next_token().kind
    }

    #[test]
    fn lexes_simple_string() {
        match lex_first(r#""hello""#) {
            TokenKind::Str(sym) => assert_eq!(sym.as_str(), "hello"),
            other => panic!("expected string, got {other:?}"),
        }
    }

    #[test]
    fn unterminated_string_runs_to_eof() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new(r#""oops"#, &mut handler);
        match lexer.next_token().kind {
            TokenKind::Str(sym) => assert_eq!(sym.as_str(), "oops"),
            other => panic!("expected string, got {other:?}"),
        }
        assert!(handler.has_errors());
    }
}
