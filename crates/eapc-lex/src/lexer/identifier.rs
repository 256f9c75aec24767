//! Identifier and keyword lexing, including compound (hyphenated) keywords.

use eapc_util::{canonicalize, Symbol};

use super::{is_identifier_continue, Lexer};
use crate::token::TokenKind;

impl<'a> Lexer<'a> {
    /// Lexes an identifier, plain keyword, or compound keyword.
    ///
    /// A compound keyword (`ΕΑΝ-ΤΕΛΟΣ`, `ΓΙΑ-ΤΕΛΟΣ`, ...) is two
    /// identifier-like words joined by a hyphen. We read the first word,
    /// then speculatively read `-` + a second word and check whether the
    /// *pair* names a keyword before committing: if it doesn't, the hyphen
    /// is left unconsumed so it's free to be retokenized as the minus
    /// operator (§4.1 "Compound keywords").
    pub(crate) fn lex_identifier_or_keyword(&mut self) -> TokenKind {
        let first_start = self.cursor.position();
        self.consume_word();
        let first = self.cursor.slice_from(first_start);

        if self.cursor.current_char() == '-' {
            let before_hyphen = self.cursor.position();
            self.cursor.advance();
            let second_start = self.cursor.position();
            self.consume_word();
            let second = self.cursor.slice_from(second_start);

            if !second.is_empty() {
                let candidate = format!("{first}-{second}");
                if let Some(kind) = self.keywords.lookup_exact(&canonicalize(&candidate)) {
                    return kind;
                }
            }
            // Not a compound keyword: back out to just before the hyphen.
            self.cursor.reset_to(before_hyphen);
        }

        let canonical = canonicalize(first);
        self.keywords
            .lookup_exact(&canonical)
            .unwrap_or_else(|| TokenKind::Ident(Symbol::intern_canonical(first)))
    }

    fn consume_word(&mut self) {
        while is_identifier_continue(self.cursor.current_char()) {
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
    fn recognizes_ascii_and_greek_keyword_spellings() {
        assert_eq!(lex_first("IF"), TokenKind::If);
        assert_eq!(lex_first("ΕΑΝ"), TokenKind::If);
        assert_eq!(lex_first("εαν"), TokenKind::If);
    }

    #[test]
    fn recognizes_compound_keyword_atomically() {
        assert_eq!(lex_first("ΕΑΝ-ΤΕΛΟΣ"), TokenKind::EndIf);
        assert_eq!(lex_first("ΓΙΑ-ΤΕΛΟΣ"), TokenKind::EndFor);
    }

    #[test]
    fn plain_identifier_is_interned_canonically() {
        match lex_first("Αθροισμα") {
            TokenKind::Ident(sym) => assert_eq!(sym, Symbol::intern_canonical("ΑΘΡΟΙΣΜΑ")),
            other => panic!("expected identifier, got {other:?}"),
        }
    }

    #[test]
    fn hyphen_not_forming_a_keyword_is_left_for_the_operator_lexer() {
        // "x-1": "x" is an identifier, the hyphen must remain for Minus.
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("x-1", &mut handler);
        let first = lexer.next_token().kind;
        match first {
            TokenKind::Ident(sym) => assert_eq!(sym.as_str(), "X"),
            other => panic!("expected identifier, got {other:?}"),
        }
        let second = lexer.next_token().kind;
        assert_eq!(second, TokenKind::Minus);
    }
}
