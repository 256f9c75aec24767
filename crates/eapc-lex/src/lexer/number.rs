//! Numeric literal lexing.

use super::Lexer;
use crate::token::TokenKind;

impl<'a> Lexer<'a> {
    /// Lexes an integer or real literal.
    ///
    /// A run of digits followed by `.` and another digit continues as a
    /// real literal; a lone `.` (not followed by a digit) is not part of
    /// the number — it's left for the `..` range operator or a syntax
    /// error, per §4.1.
    pub(crate) fn lex_number(&mut self) -> TokenKind {
        let start = self.cursor.position();
        self.consume_digits();

        let is_real = self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit();
        if is_real {
            self.cursor.advance(); // '.'
            self.consume_digits();
        }

        let text = self.cursor.slice_from(start);
        if is_real {
            TokenKind::Real(text.parse().expect("validated real literal"))
        } else {
            match text.parse::<i64>() {
                Ok(n) => TokenKind::Integer(n),
                Err(_) => {
                    self.error(format!("integer literal out of range: {text}"));
                    TokenKind::Integer(0)
                }
            }
        }
    }

    fn consume_digits(&mut self) {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
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
    fn lexes_integer() {
        assert_eq!(lex_first("42"), TokenKind::Integer(42));
    }

    #[test]
    fn lexes_real() {
        assert_eq!(lex_first("3.5"), TokenKind::Real(3.5));
    }

    #[test]
    fn lone_dot_is_not_part_of_a_number() {
        // "7." with nothing following the dot: the dot stays unconsumed.
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("7.", &mut handler);
        assert_eq!(lexer.next_token().kind, TokenKind::Integer(7));
    }

    #[test]
    fn range_operator_after_integer() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("1..5", &mut handler);
        assert_eq!(lexer.next_token().kind, TokenKind::Integer(1));
        assert_eq!(lexer.next_token().kind, TokenKind::Range);
        assert_eq!(lexer.next_token().kind, TokenKind::Integer(5));
    }
}
