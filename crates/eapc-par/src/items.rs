//! Declarations: constants, variables, array types, and subroutines
//! (§4.2 "Declaration blocks", "Types", "Subroutines").

use eapc_lex::TokenKind;
use eapc_util::Symbol;

use crate::ast::{
    ArrayType, ConstantDecl, FunctionDecl, ParamMode, Parameter, ProcedureDecl, ScalarType,
    Subroutine, VarType, VariableDecl,
};
use crate::Parser;

impl<'a> Parser<'a> {
    /// `CONSTANTS name = expr; name2 = expr2; ...` until the next section
    /// keyword.
    pub(crate) fn parse_constants_block(&mut self) -> Option<Vec<ConstantDecl>> {
        self.advance(); // CONSTANTS
        let mut decls = Vec::new();
        while matches!(self.current(), TokenKind::Ident(_)) {
            let span = self.current_span();
            match self.parse_constant_decl(span) {
                Some(decl) => decls.push(decl),
                None => self.synchronize(is_decl_boundary),
            }
        }
        Some(decls)
    }

    fn parse_constant_decl(&mut self, span: eapc_util::Span) -> Option<ConstantDecl> {
        let name = self.expect_ident()?;
        self.expect(TokenKind::Eq, "'='")?;
        let init = self.parse_expr()?;
        self.eat(&TokenKind::Semicolon);
        Some(ConstantDecl { name, init, span })
    }

    /// `DATA a, b, c : REAL; ...` (and the local-declaration section inside
    /// a subroutine, which shares the same grammar).
    pub(crate) fn parse_data_block(&mut self) -> Option<Vec<VariableDecl>> {
        self.advance(); // DATA
        self.parse_variable_decl_groups()
    }

    pub(crate) fn parse_variable_decl_groups(&mut self) -> Option<Vec<VariableDecl>> {
        let mut decls = Vec::new();
        while matches!(self.current(), TokenKind::Ident(_)) {
            let span = self.current_span();
            match self.parse_variable_decl_group(span) {
                Some(group) => decls.extend(group),
                None => self.synchronize(is_decl_boundary),
            }
        }
        Some(decls)
    }

    fn parse_variable_decl_group(&mut self, span: eapc_util::Span) -> Option<Vec<VariableDecl>> {
        let names = self.parse_name_list()?;
        self.expect(TokenKind::Colon, "':'")?;
        let ty = self.parse_type()?;
        self.eat(&TokenKind::Semicolon);
        Some(names.into_iter().map(|name| VariableDecl { name, ty: ty.clone(), span }).collect())
    }

    fn parse_name_list(&mut self) -> Option<Vec<Symbol>> {
        let mut names = vec![self.expect_ident()?];
        while self.eat(&TokenKind::Comma) {
            names.push(self.expect_ident()?);
        }
        Some(names)
    }

    /// A scalar type tag, or `ARRAY [e1..e2, ...] OF <scalar>`. Array-of-
    /// array is rejected: the element type must be scalar.
    pub(crate) fn parse_type(&mut self) -> Option<VarType> {
        if self.eat(&TokenKind::Array) {
            self.expect(TokenKind::LBracket, "'['")?;
            let mut dimensions = Vec::new();
            loop {
                let lower = self.parse_expr()?;
                self.expect(TokenKind::Range, "'..'")?;
                let upper = self.parse_expr()?;
                dimensions.push((lower, upper));
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
            self.expect(TokenKind::RBracket, "']'")?;
            self.expect(TokenKind::Of, "'OF'")?;
            if self.check(&TokenKind::Array) {
                self.error("array-of-array is not permitted");
                return None;
            }
            let element = self.parse_scalar_type()?;
            return Some(VarType::Array(ArrayType { element, dimensions }));
        }
        Some(VarType::Scalar(self.parse_scalar_type()?))
    }

    fn parse_scalar_type(&mut self) -> Option<ScalarType> {
        let ty = match self.current() {
            TokenKind::IntegerType => ScalarType::Integer,
            TokenKind::RealType => ScalarType::Real,
            TokenKind::CharacterType => ScalarType::Character,
            TokenKind::StringType => ScalarType::StringType,
            TokenKind::BooleanType => ScalarType::Boolean,
            other => {
                self.error(format!("expected a type, found {other:?}"));
                return None;
            }
        };
        self.advance();
        Some(ty)
    }

    /// Zero or more `FUNCTION`/`PROCEDURE` declarations, stopping at `BEGIN`.
    pub(crate) fn parse_subroutines(&mut self) -> Option<Vec<Subroutine>> {
        let mut subs = Vec::new();
        loop {
            match self.current() {
                TokenKind::Function => match self.parse_function_decl() {
                    Some(f) => subs.push(Subroutine::Function(f)),
                    None => self.synchronize(is_subroutine_boundary),
                },
                TokenKind::Procedure => match self.parse_procedure_decl() {
                    Some(p) => subs.push(Subroutine::Procedure(p)),
                    None => self.synchronize(is_subroutine_boundary),
                },
                _ => break,
            }
        }
        Some(subs)
    }

    fn parse_function_decl(&mut self) -> Option<FunctionDecl> {
        let span = self.current_span();
        self.advance(); // FUNCTION
        let name = self.expect_ident()?;
        self.skip_informal_name_list();
        self.expect(TokenKind::Colon, "':'")?;
        let return_type = self.parse_scalar_type()?;
        let params = self.parse_interface(Some(name))?;
        let locals = self.parse_variable_decl_groups()?;
        self.expect(TokenKind::Begin, "'BEGIN'")?;
        let body = self.parse_block()?;
        self.expect(TokenKind::EndFunction, "'END_FUNCTION'")?;
        Some(FunctionDecl { name, return_type, params, locals, body, span })
    }

    fn parse_procedure_decl(&mut self) -> Option<ProcedureDecl> {
        let span = self.current_span();
        self.advance(); // PROCEDURE
        let name = self.expect_ident()?;
        self.skip_informal_name_list();
        let params = self.parse_interface(None)?;
        let locals = self.parse_variable_decl_groups()?;
        self.expect(TokenKind::Begin, "'BEGIN'")?;
        let body = self.parse_block()?;
        self.expect(TokenKind::EndProcedure, "'END_PROCEDURE'")?;
        Some(ProcedureDecl { name, params, locals, body, span })
    }

    /// The signature line may carry an informal `(a, b, c)` name list;
    /// it's purely documentary, so it's consumed and discarded (§4.2
    /// "Subroutines").
    fn skip_informal_name_list(&mut self) {
        if self.eat(&TokenKind::LParen) {
            while !self.check(&TokenKind::RParen) && !self.is_at_end() {
                self.advance();
            }
            self.eat(&TokenKind::RParen);
        }
    }

    /// `INTERFACE [INPUT decls] [OUTPUT decls]`. A name in both INPUT and
    /// OUTPUT becomes one by-reference parameter; for functions, an OUTPUT
    /// parameter named like the function itself is dropped — it names the
    /// return slot, not a caller-visible parameter (§4.2).
    fn parse_interface(&mut self, owner_name: Option<Symbol>) -> Option<Vec<Parameter>> {
        self.expect(TokenKind::Interface, "'INTERFACE'")?;

        let inputs = if self.eat(&TokenKind::Input) {
            self.parse_variable_decl_groups()?
        } else {
            Vec::new()
        };
        let outputs = if self.eat(&TokenKind::Output) {
            self.parse_variable_decl_groups()?
        } else {
            Vec::new()
        };

        let mut params = Vec::new();
        for decl in inputs {
            let mode = if outputs.iter().any(|o| o.name == decl.name) {
                ParamMode::ByReference
            } else {
                ParamMode::ByValue
            };
            params.push(Parameter { name: decl.name, ty: decl.ty, mode });
        }
        for decl in outputs {
            if params.iter().any(|p| p.name == decl.name) {
                continue; // already added as a merged by-reference parameter
            }
            if owner_name == Some(decl.name) {
                continue; // names the function's return slot, not a parameter
            }
            params.push(Parameter { name: decl.name, ty: decl.ty, mode: ParamMode::ByReference });
        }
        Some(params)
    }
}

/// A declaration group (`CONSTANTS`/`DATA`/`INPUT`/`OUTPUT` entries) resumes
/// scanning at the next name, or at whatever section keyword follows.
fn is_decl_boundary(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Ident(_)
            | TokenKind::Data
            | TokenKind::Begin
            | TokenKind::Function
            | TokenKind::Procedure
            | TokenKind::Interface
            | TokenKind::Input
            | TokenKind::Output
    )
}

/// A malformed subroutine resumes scanning at the next `FUNCTION`/
/// `PROCEDURE` declaration, or at the main program's `BEGIN`.
fn is_subroutine_boundary(kind: &TokenKind) -> bool {
    matches!(kind, TokenKind::Function | TokenKind::Procedure | TokenKind::Begin)
}
