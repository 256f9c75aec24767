//! Statement grammar (§4.2): assignment, IF/FOR/WHILE/REPEAT, PRINT, READ,
//! and calls. Trailing semicolons after statements are optional and are
//! simply absorbed wherever they appear.

use eapc_lex::TokenKind;

use crate::ast::{Block, Expr, LValue, Stmt};
use crate::Parser;

/// Tokens that end a statement block. A block is parsed by repeatedly
/// parsing statements until one of these is seen (or EOF, which is always
/// a parse error at the call site).
const BLOCK_TERMINATORS: &[TokenKind] = &[
    TokenKind::End,
    TokenKind::EndIf,
    TokenKind::Else,
    TokenKind::EndFor,
    TokenKind::EndWhile,
    TokenKind::Until,
    TokenKind::EndFunction,
    TokenKind::EndProcedure,
];

/// Tokens that plausibly start a fresh statement, used as resynchronization
/// points after a statement fails to parse: a block terminator ends the
/// recovery scan just as it would end ordinary parsing, and any of these
/// keywords (or a bare identifier, which starts an assignment or call) is
/// where the next statement attempt should resume.
fn is_stmt_boundary(kind: &TokenKind) -> bool {
    BLOCK_TERMINATORS.contains(kind)
        || matches!(
            kind,
            TokenKind::If
                | TokenKind::For
                | TokenKind::While
                | TokenKind::Repeat
                | TokenKind::Print
                | TokenKind::Read
                | TokenKind::Calculate
                | TokenKind::Ident(_)
        )
}

impl<'a> Parser<'a> {
    pub(crate) fn parse_block(&mut self) -> Option<Block> {
        let mut stmts = Vec::new();
        while !BLOCK_TERMINATORS.contains(self.current()) && !self.is_at_end() {
            match self.parse_stmt() {
                Some(stmt) => {
                    stmts.push(stmt);
                    self.eat(&TokenKind::Semicolon);
                }
                None => self.synchronize(is_stmt_boundary),
            }
        }
        Some(stmts)
    }

    fn parse_stmt(&mut self) -> Option<Stmt> {
        match self.current() {
            TokenKind::If => self.parse_if_stmt(),
            TokenKind::For => self.parse_for_stmt(),
            TokenKind::While => self.parse_while_stmt(),
            TokenKind::Repeat => self.parse_repeat_stmt(),
            TokenKind::Print => self.parse_print_stmt(),
            TokenKind::Read => self.parse_read_stmt(),
            TokenKind::Calculate => self.parse_calculate_stmt(),
            TokenKind::Ident(_) => self.parse_assign_or_call_stmt(),
            other => {
                self.error(format!("expected statement, found {other:?}"));
                None
            }
        }
    }

    fn parse_if_stmt(&mut self) -> Option<Stmt> {
        self.advance(); // IF
        let cond = self.parse_expr()?;
        self.expect(TokenKind::Then, "'THEN'")?;
        let then_block = self.parse_block()?;
        let else_block = if self.eat(&TokenKind::Else) {
            Some(self.parse_block()?)
        } else {
            None
        };
        self.expect(TokenKind::EndIf, "'END_IF'")?;
        Some(Stmt::If { cond, then_block, else_block })
    }

    fn parse_for_stmt(&mut self) -> Option<Stmt> {
        let span = self.current_span();
        self.advance(); // FOR
        let var = self.expect_ident()?;
        self.expect(TokenKind::Assign, "':='")?;
        let start = self.parse_expr()?;
        self.expect(TokenKind::To, "'TO'")?;
        let end = self.parse_expr()?;
        let step = if self.eat(&TokenKind::With) {
            self.expect(TokenKind::Step, "'STEP'")?;
            self.parse_expr()?
        } else {
            Expr::Literal(crate::ast::Literal::Integer(1), span)
        };
        self.expect(TokenKind::Repeat, "'REPEAT'")?;
        let body = self.parse_block()?;
        self.expect(TokenKind::EndFor, "'END_FOR'")?;
        Some(Stmt::For { var, start, end, step, body, span })
    }

    fn parse_while_stmt(&mut self) -> Option<Stmt> {
        self.advance(); // WHILE
        let cond = self.parse_expr()?;
        self.expect(TokenKind::Repeat, "'REPEAT'")?;
        let body = self.parse_block()?;
        self.expect(TokenKind::EndWhile, "'END_WHILE'")?;
        Some(Stmt::While { cond, body })
    }

    /// `REPEAT body UNTIL cond`, desugared into a dedicated node: the body
    /// runs once unconditionally, then repeats while `cond` is false
    /// (textbook semantics, chosen over the source's test-first reading —
    /// see DESIGN.md).
    fn parse_repeat_stmt(&mut self) -> Option<Stmt> {
        self.advance(); // REPEAT
        let body = self.parse_block()?;
        self.expect(TokenKind::Until, "'UNTIL'")?;
        let cond = self.parse_expr()?;
        Some(Stmt::RepeatUntil { body, cond })
    }

    fn parse_print_stmt(&mut self) -> Option<Stmt> {
        let span = self.current_span();
        self.advance(); // PRINT
        self.expect(TokenKind::LParen, "'('")?;
        let args = self.parse_arg_list()?;
        self.expect(TokenKind::RParen, "')'")?;
        Some(Stmt::Print { args, span })
    }

    fn parse_read_stmt(&mut self) -> Option<Stmt> {
        let span = self.current_span();
        self.advance(); // READ
        self.expect(TokenKind::LParen, "'('")?;
        let mut targets = Vec::new();
        loop {
            targets.push(self.parse_lvalue()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen, "')'")?;
        Some(Stmt::Read { targets, span })
    }

    fn parse_calculate_stmt(&mut self) -> Option<Stmt> {
        let span = self.current_span();
        self.advance(); // CALCULATE
        let callee = self.expect_ident()?;
        self.expect(TokenKind::LParen, "'('")?;
        let args = self.parse_arg_list()?;
        self.expect(TokenKind::RParen, "')'")?;
        Some(Stmt::Call { callee, args, span })
    }

    /// An identifier in statement position is either an assignment target
    /// (`name := ...` / `name[i] := ...`) or a bare procedure call
    /// (`name(args...)`).
    fn parse_assign_or_call_stmt(&mut self) -> Option<Stmt> {
        let span = self.current_span();
        let name = self.expect_ident()?;

        if self.eat(&TokenKind::LParen) {
            let args = self.parse_arg_list()?;
            self.expect(TokenKind::RParen, "')'")?;
            return Some(Stmt::Call { callee: name, args, span });
        }

        let target = if self.eat(&TokenKind::LBracket) {
            let mut indices = Vec::new();
            loop {
                indices.push(self.parse_expr()?);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
            self.expect(TokenKind::RBracket, "']'")?;
            LValue::Index(name, indices, span)
        } else {
            LValue::Ident(name, span)
        };

        self.expect(TokenKind::Assign, "':='")?;
        let value = self.parse_expr()?;
        Some(Stmt::Assign { target, value })
    }

    fn parse_lvalue(&mut self) -> Option<LValue> {
        let span = self.current_span();
        let name = self.expect_ident()?;
        if self.eat(&TokenKind::LBracket) {
            let mut indices = Vec::new();
            loop {
                indices.push(self.parse_expr()?);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
            self.expect(TokenKind::RBracket, "']'")?;
            Some(LValue::Index(name, indices, span))
        } else {
            Some(LValue::Ident(name, span))
        }
    }
}
