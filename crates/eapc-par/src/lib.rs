//! eapc-par - Recursive-descent parser for EAP pseudocode.
//!
//! One token of lookahead over a materialized token vector. Parsing
//! functions return `Option<T>`, with `None` meaning an error was already
//! emitted to the [`Handler`]; callers check `handler.has_errors()` rather
//! than threading a `Result` through every production.

pub mod ast;
mod expr;
mod items;
mod stmt;

use eapc_lex::{Token, TokenKind};
use eapc_util::{Handler, Span, Symbol};

use ast::Program;

pub struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    handler: &'a mut Handler,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, handler: &'a mut Handler) -> Self {
        Self { tokens, pos: 0, handler }
    }

    /// Parses a whole program: `ALGORITHM <name>`, optional `CONSTANTS` and
    /// `DATA` blocks, zero or more subroutines, then `BEGIN ... END`
    /// (§4.2 "Entry point").
    pub fn parse_program(&mut self) -> Option<Program> {
        let span = self.current_span();
        self.expect(TokenKind::Algorithm, "'ALGORITHM'")?;
        let name = self.expect_ident()?;

        let constants = if self.check(&TokenKind::Constants) {
            self.parse_constants_block()?
        } else {
            Vec::new()
        };

        let variables = if self.check(&TokenKind::Data) {
            self.parse_data_block()?
        } else {
            Vec::new()
        };

        let subroutines = self.parse_subroutines()?;

        self.expect(TokenKind::Begin, "'BEGIN'")?;
        let body = self.parse_block()?;
        self.expect(TokenKind::End, "'END'")?;

        Some(Program { name, constants, variables, subroutines, body, span })
    }

    fn current_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    pub(crate) fn current(&self) -> &TokenKind {
        &self.current_token().kind
    }

    pub(crate) fn current_span(&self) -> Span {
        self.current_token().span()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.current(), TokenKind::Eof)
    }

    pub(crate) fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.current() == kind
    }

    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind, what: &str) -> Option<()> {
        if self.eat(&kind) {
            Some(())
        } else {
            let found = self.current().clone();
            self.error(format!("expected {what}, found {found:?}"));
            None
        }
    }

    pub(crate) fn expect_ident(&mut self) -> Option<Symbol> {
        match self.current().clone() {
            TokenKind::Ident(sym) => {
                self.advance();
                Some(sym)
            }
            other => {
                self.error(format!("expected identifier, found {other:?}"));
                None
            }
        }
    }

    pub(crate) fn error(&mut self, message: impl Into<String>) {
        self.handler.error(message, self.current_span());
    }

    /// Error recovery: after a statement/declaration/subroutine fails to
    /// parse (and the error has already been recorded), skip tokens until
    /// one plausibly starts the next item, so the rest of the program still
    /// gets checked instead of aborting the whole parse on the first
    /// mistake. Always consumes at least the token that caused the failure,
    /// so this can't spin in place when that token already looks like a
    /// sync point.
    pub(crate) fn synchronize(&mut self, is_sync_point: impl Fn(&TokenKind) -> bool) {
        if self.is_at_end() {
            return;
        }
        self.advance();
        while !self.is_at_end() && !is_sync_point(self.current()) {
            if matches!(self.current(), TokenKind::Semicolon) {
                self.advance();
                return;
            }
            self.advance();
        }
    }
}

/// Tokenizes and parses `source` in one step, for callers that don't need
/// the intermediate token stream.
pub fn parse(source: &str, handler: &mut Handler) -> Option<Program> {
    let tokens = eapc_lex::Lexer::new(source, handler).tokenize();
    Parser::new(tokens, handler).parse_program()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ast::{BinaryOp, Expr, Literal, ParamMode, Stmt, VarType};

    fn parse_ok(source: &str) -> Program {
        let mut handler = Handler::new();
        let program = parse(source, &mut handler);
        assert!(!handler.has_errors(), "unexpected errors: {:?}", handler.diagnostics());
        program.expect("expected a program")
    }

    #[test]
    fn parses_minimal_program() {
        let program = parse_ok("ΑΛΓΟΡΙΘΜΟΣ Hi ΑΡΧΗ ΤΥΠΩΣΕ(\"Γεια\", EOLN) ΤΕΛΟΣ");
        assert_eq!(program.body.len(), 1);
        assert!(matches!(program.body[0], Stmt::Print { .. }));
    }

    #[test]
    fn parses_constants_and_data_blocks() {
        let program = parse_ok(
            "ALGORITHM Demo \
             CONSTANTS N = 10; \
             DATA a, b : INTEGER; \
             BEGIN a := N ΤΕΛΟΣ",
        );
        assert_eq!(program.constants.len(), 1);
        assert_eq!(program.variables.len(), 2);
        assert!(matches!(program.variables[0].ty, VarType::Scalar(_)));
    }

    #[test]
    fn parses_array_type() {
        let program = parse_ok(
            "ALGORITHM Demo DATA A : ARRAY[1..3] OF INTEGER BEGIN A[1] := 0 ΤΕΛΟΣ",
        );
        match &program.variables[0].ty {
            VarType::Array(arr) => assert_eq!(arr.dimensions.len(), 1),
            other => panic!("expected array type, got {other:?}"),
        }
    }

    #[test]
    fn parses_function_with_interface_and_merges_reference_params() {
        let program = parse_ok(
            "ΑΛΓΟΡΙΘΜΟΣ Demo \
             ΣΥΝΑΡΤΗΣΗ fact(n): ΑΚΕΡΑΙΟΣ \
             ΔΙΕΠΑΦΗ ΕΙΣΟΔΟΣ n: ΑΚΕΡΑΙΟΣ; \
             ΑΡΧΗ ΕΑΝ n <= 1 ΤΟΤΕ fact := 1 ΑΛΛΙΩΣ fact := n * fact(n-1) ΕΑΝ-ΤΕΛΟΣ ΤΕΛΟΣ-ΣΥΝΑΡΤΗΣΗΣ \
             ΑΡΧΗ ΤΕΛΟΣ",
        );
        assert_eq!(program.subroutines.len(), 1);
        let ast::Subroutine::Function(f) = &program.subroutines[0] else {
            panic!("expected a function");
        };
        assert_eq!(f.params.len(), 1);
        assert_eq!(f.params[0].mode, ParamMode::ByValue);
    }

    #[test]
    fn parses_for_loop_with_default_step() {
        let program = parse_ok(
            "ΑΛΓΟΡΙΘΜΟΣ Demo ΑΡΧΗ ΓΙΑ i := 1 ΕΩΣ 10 ΕΠΑΝΑΛΑΒΕ ΤΥΠΩΣΕ(i) ΓΙΑ-ΤΕΛΟΣ ΤΕΛΟΣ",
        );
        let Stmt::For { step, .. } = &program.body[0] else {
            panic!("expected a FOR statement");
        };
        assert!(matches!(step, Expr::Literal(Literal::Integer(1), _)));
    }

    #[test]
    fn comparison_is_non_associative() {
        let mut handler = Handler::new();
        let result = parse("ΑΛΓΟΡΙΘΜΟΣ Demo ΑΡΧΗ ΤΥΠΩΣΕ(1 = 2 = 3) ΤΕΛΟΣ", &mut handler);
        assert!(result.is_none() || handler.has_errors());
    }

    #[test]
    fn recovers_from_a_bad_statement_and_accumulates_multiple_errors() {
        let mut handler = Handler::new();
        let program = parse(
            "ΑΛΓΟΡΙΘΜΟΣ Demo ΑΡΧΗ \
             + \
             ΤΥΠΩΣΕ(1) \
             * \
             ΤΥΠΩΣΕ(2) \
             ΤΕΛΟΣ",
            &mut handler,
        );
        let program = program.expect("recovery should still produce a program");
        assert_eq!(program.body.len(), 2, "both valid PRINT statements should survive recovery");
        assert!(matches!(program.body[0], Stmt::Print { .. }));
        assert!(matches!(program.body[1], Stmt::Print { .. }));
        assert_eq!(
            handler.diagnostics().len(),
            2,
            "both bad tokens should be reported, not just the first: {:?}",
            handler.diagnostics()
        );
    }

    #[test]
    fn recovers_from_a_malformed_declaration_between_two_good_ones() {
        let mut handler = Handler::new();
        let program = parse(
            "ΑΛΓΟΡΙΘΜΟΣ Demo \
             ΣΤΑΘΕΡΕΣ N = 10; M; K = 20; \
             ΑΡΧΗ ΤΥΠΩΣΕ(N + K) ΤΕΛΟΣ",
            &mut handler,
        );
        let program = program.expect("recovery should still produce a program");
        assert_eq!(program.constants.len(), 2, "both well-formed constants should survive");
        assert!(handler.has_errors());
    }

    #[test]
    fn binary_precedence_nests_multiplicative_inside_additive() {
        let program = parse_ok("ΑΛΓΟΡΙΘΜΟΣ Demo ΑΡΧΗ ΤΥΠΩΣΕ(1 + 2 * 3) ΤΕΛΟΣ");
        let Stmt::Print { args, .. } = &program.body[0] else {
            panic!("expected PRINT");
        };
        let Expr::Binary { op: BinaryOp::Add, right, .. } = &args[0] else {
            panic!("expected an addition at the top");
        };
        assert!(matches!(**right, Expr::Binary { op: BinaryOp::Mul, .. }));
    }
}
