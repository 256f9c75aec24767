//! Operator and punctuation lexing.

use super::Lexer;
use crate::token::TokenKind;

impl<'a> Lexer<'a> {
    /// Lexes a single operator or punctuation token. Two-character
    /// operators are tried before their one-character prefix so `:=` isn't
    /// mistaken for a lone `:`, and likewise for `<>`, `<=`, `>=`, `..`.
    ///
    /// A leading `%` before a call argument is tolerated and discarded
    /// (§4.2): it is lexed as [`TokenKind::Percent`] rather than rejected,
    /// leaving the parser free to simply skip over it.
    pub(crate) fn lex_operator_or_punct(&mut self) -> TokenKind {
        let c = self.cursor.current_char();
        let next = self.cursor.peek_char(1);

        macro_rules! two {
            ($kind:expr) => {{
                self.cursor.advance();
                self.cursor.advance();
                return $kind;
            }};
        }
        macro_rules! one {
            ($kind:expr) => {{
                self.cursor.advance();
                return $kind;
            }};
        }

        match (c, next) {
            (':', '=') => two!(TokenKind::Assign),
            ('<', '>') => two!(TokenKind::NotEq),
            ('<', '=') => two!(TokenKind::LtEq),
            ('>', '=') => two!(TokenKind::GtEq),
            ('.', '.') => two!(TokenKind::Range),
            _ => {}
        }

        match c {
            '+' => one!(TokenKind::Plus),
            '-' => one!(TokenKind::Minus),
            '*' => one!(TokenKind::Star),
            '/' => one!(TokenKind::Slash),
            '=' => one!(TokenKind::Eq),
            '<' => one!(TokenKind::Lt),
            '>' => one!(TokenKind::Gt),
            '(' => one!(TokenKind::LParen),
            ')' => one!(TokenKind::RParen),
            '[' => one!(TokenKind::LBracket),
            ']' => one!(TokenKind::RBracket),
            ',' => one!(TokenKind::Comma),
            ':' => one!(TokenKind::Colon),
            ';' => one!(TokenKind::Semicolon),
            '%' => one!(TokenKind::Percent),
            _ => {
                self.error(format!("unexpected character {c:?}"));
                self.cursor.advance();
                self.lex_token_kind()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use eapc_util::Handler;

    use crate::token::TokenKind;

    fn lex_first(source: &str) -> TokenKind {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new(source, &mut handler);
        lexer.next_token().kind
    }

    #[test]
    fn lexes_two_char_operators_before_one_char_prefix() {
        assert_eq!(lex_first(":="), TokenKind::Assign);
        assert_eq!(lex_first("<>"), TokenKind::NotEq);
        assert_eq!(lex_first("<="), TokenKind::LtEq);
        assert_eq!(lex_first(">="), TokenKind::GtEq);
    }

    #[test]
    fn lexes_one_char_operators() {
        assert_eq!(lex_first(":"), TokenKind::Colon);
        assert_eq!(lex_first("<"), TokenKind::Lt);
        assert_eq!(lex_first(">"), TokenKind::Gt);
    }

    #[test]
    fn lexes_percent_sigil() {
        assert_eq!(lex_first("%"), TokenKind::Percent);
    }

    #[test]
    fn unexpected_character_is_reported_and_skipped() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("@42", &mut handler);
        assert_eq!(lexer.next_token().kind, TokenKind::Integer(42));
        assert!(handler.has_errors());
    }
}
