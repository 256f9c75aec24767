//! Whitespace and comment skipping.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace, `//` line comments, and non-nesting `/* */` block
    /// comments, in any interleaving, until real token text or EOF.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.current_char() {
                c if c.is_whitespace() => self.cursor.advance(),
                '/' if self.cursor.peek_char(1) == '/' => {
                    while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                        self.cursor.advance();
                    }
                }
                '/' if self.cursor.peek_char(1) == '*' => {
                    self.cursor.advance();
                    self.cursor.advance();
                    loop {
                        if self.cursor.is_at_end() {
                            self.error("unterminated block comment");
                            break;
                        }
                        if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                            self.cursor.advance();
                            self.cursor.advance();
                            break;
                        }
                        self.cursor.advance();
                    }
                }
                _ => break,
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
    fn skips_line_comment() {
        assert_eq!(lex_first("// a comment\n42"), TokenKind::Integer(42));
    }

    #[test]
    fn skips_block_comment() {
        assert_eq!(lex_first("/* a\nmultiline\ncomment */ 42"), TokenKind::Integer(42));
    }
}
