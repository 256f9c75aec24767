//! Expression grammar (§4.2), lowest to highest precedence:
//! OR, AND, comparison (non-associative), additive, multiplicative, unary,
//! primary. Each precedence level gets its own recursive-descent function
//! rather than a single Pratt loop with a binding-power table, since
//! comparisons are deliberately non-associative (`a = b = c` is rejected,
//! not left-folded) and the level count is small and fixed.

use eapc_lex::TokenKind;
use eapc_util::Span;

use crate::ast::{BinaryOp, Expr, Literal, UnaryOp};
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_expr(&mut self) -> Option<Expr> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> Option<Expr> {
        let mut left = self.parse_and()?;
        while self.eat(&TokenKind::Or) {
            let span = left.span();
            let right = self.parse_and()?;
            left = Expr::Binary {
                op: BinaryOp::Or,
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }
        Some(left)
    }

    fn parse_and(&mut self) -> Option<Expr> {
        let mut left = self.parse_comparison()?;
        while self.eat(&TokenKind::And) {
            let span = left.span();
            let right = self.parse_comparison()?;
            left = Expr::Binary {
                op: BinaryOp::And,
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }
        Some(left)
    }

    /// Non-associative: at most one comparison operator per level.
    fn parse_comparison(&mut self) -> Option<Expr> {
        let left = self.parse_additive()?;
        let op = match self.current() {
            TokenKind::Eq => BinaryOp::Eq,
            TokenKind::NotEq => BinaryOp::NotEq,
            TokenKind::Lt => BinaryOp::Lt,
            TokenKind::Gt => BinaryOp::Gt,
            TokenKind::LtEq => BinaryOp::LtEq,
            TokenKind::GtEq => BinaryOp::GtEq,
            _ => return Some(left),
        };
        let span = left.span();
        self.advance();
        let right = self.parse_additive()?;
        Some(Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
            span,
        })
    }

    fn parse_additive(&mut self) -> Option<Expr> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.current() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            let span = left.span();
            self.advance();
            let right = self.parse_multiplicative()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }
        Some(left)
    }

    fn parse_multiplicative(&mut self) -> Option<Expr> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.current() {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::Div => BinaryOp::IDiv,
                TokenKind::Mod | TokenKind::Percent => BinaryOp::Mod,
                _ => break,
            };
            let span = left.span();
            self.advance();
            let right = self.parse_unary()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }
        Some(left)
    }

    fn parse_unary(&mut self) -> Option<Expr> {
        let span = self.current_span();
        match self.current() {
            TokenKind::Minus => {
                self.advance();
                let expr = self.parse_unary()?;
                Some(Expr::Unary {
                    op: UnaryOp::Neg,
                    expr: Box::new(expr),
                    span,
                })
            }
            TokenKind::Not => {
                self.advance();
                let expr = self.parse_unary()?;
                Some(Expr::Unary {
                    op: UnaryOp::Not,
                    expr: Box::new(expr),
                    span,
                })
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Option<Expr> {
        let span = self.current_span();
        match self.current().clone() {
            TokenKind::Integer(n) => {
                self.advance();
                Some(Expr::Literal(Literal::Integer(n), span))
            }
            TokenKind::Real(n) => {
                self.advance();
                Some(Expr::Literal(Literal::Real(n), span))
            }
            TokenKind::Str(sym) => {
                self.advance();
                Some(Expr::Literal(Literal::Str(sym), span))
            }
            TokenKind::True => {
                self.advance();
                Some(Expr::Literal(Literal::Bool(true), span))
            }
            TokenKind::False => {
                self.advance();
                Some(Expr::Literal(Literal::Bool(false), span))
            }
            TokenKind::Ident(name) => {
                self.advance();
                self.parse_ident_trailer(name, span)
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen, "')'")?;
                Some(inner)
            }
            other => {
                self.error(format!("expected expression, found {other:?}"));
                None
            }
        }
    }

    /// After a bare identifier, checks for a call `(...)` or array index
    /// `[...]`; otherwise it's a plain variable reference.
    fn parse_ident_trailer(&mut self, name: eapc_util::Symbol, span: Span) -> Option<Expr> {
        if self.eat(&TokenKind::LParen) {
            let args = self.parse_arg_list()?;
            self.expect(TokenKind::RParen, "')'")?;
            return Some(Expr::Call { callee: name, args, span });
        }
        if self.eat(&TokenKind::LBracket) {
            let indices = self.parse_index_list()?;
            self.expect(TokenKind::RBracket, "']'")?;
            return Some(Expr::ArrayAccess { name, indices, span });
        }
        Some(Expr::Identifier(name, span))
    }

    /// Call argument list: comma-separated expressions, each optionally
    /// preceded by a `%` sigil that is tolerated and discarded (§4.2 "Call
    /// arguments").
    pub(crate) fn parse_arg_list(&mut self) -> Option<Vec<Expr>> {
        let mut args = Vec::new();
        if self.check(&TokenKind::RParen) {
            return Some(args);
        }
        loop {
            self.eat(&TokenKind::Percent);
            args.push(self.parse_expr()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        Some(args)
    }

    fn parse_index_list(&mut self) -> Option<Vec<Expr>> {
        let mut indices = Vec::new();
        loop {
            indices.push(self.parse_expr()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        Some(indices)
    }
}
