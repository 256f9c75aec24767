//! Tree-walking evaluator (§4.4 "Evaluator").

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use eapc_par::ast::{
    ArrayType, BinaryOp, Block, Expr, LValue, Literal, ParamMode, Program, Stmt, Subroutine,
    UnaryOp, VarType,
};
use eapc_util::Symbol;

use crate::env::{Environment, EnvHandle};
use crate::error::{Result, RuntimeError};
use crate::io::LineInput;
use crate::value::{Array, Value};

/// Runs `program` to completion against `input`/`stdout`/`stderr`. This is
/// the "parse-and-execute operation" the core exposes (§1).
pub fn run(
    program: &Program,
    input: &mut dyn LineInput,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<()> {
    Interpreter::new(input, stdout, stderr).run(program)
}

struct Interpreter<'a> {
    input: &'a mut dyn LineInput,
    stdout: &'a mut dyn Write,
    stderr: &'a mut dyn Write,
    /// Whether a separator space is due before the next printed value. This
    /// carries across PRINT statements, not just across one call's argument
    /// list, so that "between adjacent non-EOLN values a single space is
    /// written" (§4.4) holds for the whole output stream, e.g. successive
    /// `ΤΥΠΩΣΕ(i, " ")` calls inside a loop (§8 scenario 3).
    need_space: bool,
}

/// Signals from statement execution that unwind through block/loop bodies:
/// a function/procedure body runs to the end of its statement list, there's
/// no early RETURN or BREAK in the language, so this only ever reaches the
/// I/O-error case (write failures into `stdout`/`stderr`).
impl<'a> Interpreter<'a> {
    fn new(input: &'a mut dyn LineInput, stdout: &'a mut dyn Write, stderr: &'a mut dyn Write) -> Self {
        Self { input, stdout, stderr, need_space: false }
    }

    fn run(&mut self, program: &Program) -> Result<()> {
        let global = Environment::new_root();
        Environment::define(&global, Symbol::intern_canonical("EOLN"), Value::Eoln);

        // Pass 1: constants and subroutines, so forward references among
        // subroutines resolve and array bounds can reference constants
        // (§4.4 "Declarations are processed in two passes").
        for decl in &program.constants {
            let value = self.eval_expr(&global, &decl.init)?;
            Environment::define(&global, decl.name, value);
        }
        for sub in &program.subroutines {
            Environment::define_subroutine(&global, sub.name(), Rc::new(sub.clone()));
        }

        // Pass 2: variables.
        for decl in &program.variables {
            let value = self.instantiate(&global, &decl.ty)?;
            Environment::define(&global, decl.name, value);
        }

        self.exec_block(&global, &global, &program.body)
    }

    /// Builds the initial value for a freshly declared variable: a
    /// zero-filled array for an array type, integer zero for a scalar.
    fn instantiate(&mut self, env: &EnvHandle, ty: &VarType) -> Result<Value> {
        match ty {
            VarType::Scalar(_) => Ok(Value::Integer(0)),
            VarType::Array(array_ty) => {
                let array = self.build_array(env, array_ty)?;
                Ok(Value::Array(Rc::new(RefCell::new(array))))
            }
        }
    }

    fn build_array(&mut self, env: &EnvHandle, ty: &ArrayType) -> Result<Array> {
        let mut bounds = Vec::with_capacity(ty.dimensions.len());
        for (lower, upper) in &ty.dimensions {
            let lower = self.eval_int(env, lower, RuntimeError::NonIntegerBound)?;
            let upper = self.eval_int(env, upper, RuntimeError::NonIntegerBound)?;
            bounds.push((lower, upper));
        }
        Ok(Array::new(bounds))
    }

    fn eval_int(&mut self, env: &EnvHandle, expr: &Expr, on_non_integer: RuntimeError) -> Result<i64> {
        match self.eval_expr(env, expr)? {
            Value::Integer(n) => Ok(n),
            _ => Err(on_non_integer),
        }
    }

    // -- statements ---------------------------------------------------

    fn exec_block(&mut self, global: &EnvHandle, env: &EnvHandle, block: &Block) -> Result<()> {
        for stmt in block {
            self.exec_stmt(global, env, stmt)?;
        }
        Ok(())
    }

    fn exec_stmt(&mut self, global: &EnvHandle, env: &EnvHandle, stmt: &Stmt) -> Result<()> {
        match stmt {
            Stmt::Assign { target, value } => {
                let value = self.eval_expr(env, value)?;
                self.assign(global, env, target, value)
            }
            Stmt::Print { args, .. } => self.exec_print(env, args),
            Stmt::Read { targets, .. } => self.exec_read(global, env, targets),
            Stmt::If { cond, then_block, else_block } => {
                if self.eval_expr(env, cond)?.is_truthy() {
                    self.exec_block(global, env, then_block)
                } else if let Some(else_block) = else_block {
                    self.exec_block(global, env, else_block)
                } else {
                    Ok(())
                }
            }
            Stmt::For { var, start, end, step, body, .. } => {
                self.exec_for(global, env, *var, (start, end, step), body)
            }
            Stmt::While { cond, body } => {
                while self.eval_expr(env, cond)?.is_truthy() {
                    self.exec_block(global, env, body)?;
                }
                Ok(())
            }
            Stmt::RepeatUntil { body, cond } => {
                loop {
                    self.exec_block(global, env, body)?;
                    if self.eval_expr(env, cond)?.is_truthy() {
                        break;
                    }
                }
                Ok(())
            }
            Stmt::Call { callee, args, .. } => {
                self.call(global, env, *callee, args)?;
                Ok(())
            }
        }
    }

    fn exec_for(
        &mut self,
        global: &EnvHandle,
        env: &EnvHandle,
        var: Symbol,
        (start, end, step): (&Expr, &Expr, &Expr),
        body: &Block,
    ) -> Result<()> {
        let start = self.eval_int(env, start, RuntimeError::TypeMismatch("FOR start must be INTEGER".into()))?;
        let end = self.eval_int(env, end, RuntimeError::TypeMismatch("FOR end must be INTEGER".into()))?;
        let step = self.eval_int(env, step, RuntimeError::TypeMismatch("FOR step must be INTEGER".into()))?;
        if step == 0 {
            return Err(RuntimeError::ZeroStep);
        }

        let mut current = start;
        loop {
            if step > 0 {
                if current > end {
                    break;
                }
            } else if current < end {
                break;
            }
            Environment::assign(env, var, Value::Integer(current));
            self.exec_block(global, env, body)?;
            current += step;
        }
        Ok(())
    }

    fn exec_print(&mut self, env: &EnvHandle, args: &[Expr]) -> Result<()> {
        for arg in args {
            let value = self.eval_expr(env, arg)?;
            if matches!(value, Value::Eoln) {
                let _ = writeln!(self.stdout);
                self.need_space = false;
                continue;
            }
            let text = value.to_string();
            // A value that already begins with whitespace (e.g. a literal
            // " " argument used for extra spacing) doesn't need the
            // automatic separator stacked in front of it too.
            let starts_with_space = text.chars().next().is_some_and(char::is_whitespace);
            if self.need_space && !starts_with_space {
                let _ = write!(self.stdout, " ");
            }
            let _ = write!(self.stdout, "{text}");
            self.need_space = true;
        }
        Ok(())
    }

    fn exec_read(&mut self, global: &EnvHandle, env: &EnvHandle, targets: &[LValue]) -> Result<()> {
        for target in targets {
            let prompt = self.describe_lvalue(env, target)?;
            let _ = write!(self.stderr, "Enter value for {prompt}: ");
            let _ = self.stderr.flush();
            let value = match self.input.read_line() {
                None => Value::Integer(-1),
                Some(line) => parse_read_value(&line),
            };
            self.assign(global, env, target, value)?;
        }
        Ok(())
    }

    fn describe_lvalue(&mut self, env: &EnvHandle, lvalue: &LValue) -> Result<String> {
        match lvalue {
            LValue::Ident(name, _) => Ok(name.to_string()),
            LValue::Index(name, indices, _) => {
                let mut rendered = Vec::with_capacity(indices.len());
                for index in indices {
                    rendered.push(self.eval_int(env, index, RuntimeError::NonIntegerIndex)?.to_string());
                }
                Ok(format!("{name}[{}]", rendered.join(",")))
            }
        }
    }

    fn assign(&mut self, global: &EnvHandle, env: &EnvHandle, target: &LValue, value: Value) -> Result<()> {
        match target {
            LValue::Ident(name, _) => {
                Environment::assign(env, *name, value);
                Ok(())
            }
            LValue::Index(name, indices, _) => {
                let array = self.resolve_array(env, *name)?;
                let indices = self.eval_indices(env, indices)?;
                array.borrow().set(&indices, value)?;
                let _ = global; // array assignment never creates a new binding
                Ok(())
            }
        }
    }

    fn eval_indices(&mut self, env: &EnvHandle, indices: &[Expr]) -> Result<Vec<i64>> {
        indices.iter().map(|e| self.eval_int(env, e, RuntimeError::NonIntegerIndex)).collect()
    }

    fn resolve_array(&mut self, env: &EnvHandle, name: Symbol) -> Result<Rc<RefCell<Array>>> {
        let cell = Environment::find_cell(env, name).ok_or(RuntimeError::UndefinedIdentifier(name))?;
        let borrowed = cell.borrow();
        match &*borrowed {
            Value::Array(array) => Ok(Rc::clone(array)),
            _ => Err(RuntimeError::NotAnArray(name)),
        }
    }

    // -- expressions ----------------------------------------------------

    fn eval_expr(&mut self, env: &EnvHandle, expr: &Expr) -> Result<Value> {
        match expr {
            Expr::Literal(lit, _) => Ok(match lit {
                Literal::Integer(n) => Value::Integer(*n),
                Literal::Real(r) => Value::Real(*r),
                Literal::Str(sym) => Value::Str(sym.as_str().to_owned()),
                Literal::Bool(b) => Value::Boolean(*b),
            }),
            Expr::Identifier(name, _) => {
                let cell = Environment::find_cell(env, *name).ok_or(RuntimeError::UndefinedIdentifier(*name))?;
                let value = cell.borrow().clone();
                Ok(value)
            }
            Expr::ArrayAccess { name, indices, .. } => {
                let array = self.resolve_array(env, *name)?;
                let indices = self.eval_indices(env, indices)?;
                let value = array.borrow().get(&indices)?;
                Ok(value)
            }
            Expr::Call { callee, args, .. } => {
                let global = root_of(env);
                self.call(&global, env, *callee, args)?.ok_or(RuntimeError::ProcedureUsedAsExpression(*callee))
            }
            Expr::Unary { op, expr, .. } => self.eval_unary(env, *op, expr),
            Expr::Binary { op, left, right, .. } => self.eval_binary(env, *op, left, right),
        }
    }

    fn eval_unary(&mut self, env: &EnvHandle, op: UnaryOp, expr: &Expr) -> Result<Value> {
        let value = self.eval_expr(env, expr)?;
        match op {
            UnaryOp::Not => Ok(Value::Boolean(!value.is_truthy())),
            UnaryOp::Neg => match value {
                Value::Integer(n) => Ok(Value::Integer(n.checked_neg().ok_or(RuntimeError::IntegerOverflow)?)),
                Value::Real(r) => Ok(Value::Real(-r)),
                other => Err(RuntimeError::TypeMismatch(format!("cannot negate {}", other.type_name()))),
            },
        }
    }

    fn eval_binary(&mut self, env: &EnvHandle, op: BinaryOp, left: &Expr, right: &Expr) -> Result<Value> {
        // AND/OR short-circuit, so the right operand isn't evaluated unless
        // it can affect the result (§4.4 "Arithmetic").
        if op == BinaryOp::And {
            let left = self.eval_expr(env, left)?;
            return Ok(Value::Boolean(left.is_truthy() && self.eval_expr(env, right)?.is_truthy()));
        }
        if op == BinaryOp::Or {
            let left = self.eval_expr(env, left)?;
            return Ok(Value::Boolean(left.is_truthy() || self.eval_expr(env, right)?.is_truthy()));
        }

        let left = self.eval_expr(env, left)?;
        let right = self.eval_expr(env, right)?;

        match op {
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul => arith(op, &left, &right),
            BinaryOp::Div => {
                let (a, b) = (as_f64(&left)?, as_f64(&right)?);
                if b == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(Value::Real(a / b))
            }
            BinaryOp::IDiv => {
                let (a, b) = (as_i64(&left)?, as_i64(&right)?);
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(Value::Integer(a.checked_div(b).ok_or(RuntimeError::IntegerOverflow)?))
            }
            BinaryOp::Mod => {
                let (a, b) = (as_i64(&left)?, as_i64(&right)?);
                if b == 0 {
                    return Err(RuntimeError::ModuloByZero);
                }
                Ok(Value::Integer(a.checked_rem(b).ok_or(RuntimeError::IntegerOverflow)?))
            }
            BinaryOp::Eq => Ok(Value::Boolean(values_equal(&left, &right)?)),
            BinaryOp::NotEq => Ok(Value::Boolean(!values_equal(&left, &right)?)),
            BinaryOp::Lt => compare(&left, &right, |o| o.is_lt()),
            BinaryOp::Gt => compare(&left, &right, |o| o.is_gt()),
            BinaryOp::LtEq => compare(&left, &right, |o| o.is_le()),
            BinaryOp::GtEq => compare(&left, &right, |o| o.is_ge()),
            BinaryOp::And | BinaryOp::Or => unreachable!("handled above"),
        }
    }

    // -- calls ------------------------------------------------------------

    fn call(&mut self, global: &EnvHandle, caller: &EnvHandle, name: Symbol, args: &[Expr]) -> Result<Option<Value>> {
        let sub = Environment::find_subroutine(global, name).ok_or(RuntimeError::UndefinedSubroutine(name))?;
        let params: &[eapc_par::ast::Parameter] = match sub.as_ref() {
            Subroutine::Function(f) => &f.params,
            Subroutine::Procedure(p) => &p.params,
        };
        if params.len() != args.len() {
            return Err(RuntimeError::WrongArgumentCount { name, expected: params.len(), found: args.len() });
        }

        let local = Environment::child_of(global);
        for (param, arg) in params.iter().zip(args) {
            match param.mode {
                ParamMode::ByValue => {
                    let value = self.eval_expr(caller, arg)?;
                    let value = match value {
                        Value::Array(array) => Value::Array(Rc::new(RefCell::new(array.borrow().deep_clone()))),
                        other => other,
                    };
                    Environment::define(&local, param.name, value);
                }
                ParamMode::ByReference => {
                    let cell = self.reference_cell(caller, arg)?;
                    Environment::define_cell(&local, param.name, cell);
                }
            }
        }

        let locals: &[eapc_par::ast::VariableDecl] = match sub.as_ref() {
            Subroutine::Function(f) => &f.locals,
            Subroutine::Procedure(p) => &p.locals,
        };
        for decl in locals {
            let value = self.instantiate(&local, &decl.ty)?;
            Environment::define(&local, decl.name, value);
        }

        let body: &Block = match sub.as_ref() {
            Subroutine::Function(f) => &f.body,
            Subroutine::Procedure(p) => &p.body,
        };
        self.exec_block(global, &local, body)?;

        match sub.as_ref() {
            Subroutine::Function(_) => {
                let value = Environment::own_value(&local, name).ok_or(RuntimeError::UndefinedIdentifier(name))?;
                Ok(Some(value))
            }
            Subroutine::Procedure(_) => Ok(None),
        }
    }

    /// Resolves a by-reference argument to the shared cell it names. Must be
    /// an identifier or array access (§4.4 "Function/procedure call
    /// protocol" step 3).
    fn reference_cell(&mut self, caller: &EnvHandle, arg: &Expr) -> Result<Rc<RefCell<Value>>> {
        match arg {
            Expr::Identifier(name, _) => {
                Environment::find_cell(caller, *name).ok_or(RuntimeError::UndefinedIdentifier(*name))
            }
            Expr::ArrayAccess { name, indices, .. } => {
                let array = self.resolve_array(caller, *name)?;
                let indices = self.eval_indices(caller, indices)?;
                let cell = array.borrow().cell(&indices)?;
                Ok(cell)
            }
            _ => Err(RuntimeError::InvalidReferenceArgument),
        }
    }
}

fn root_of(env: &EnvHandle) -> EnvHandle {
    Environment::root_of(env)
}

/// Renders a READ line per §4.5: empty → -1, a `.`-containing real, a plain
/// integer, or the raw string as a last resort.
fn parse_read_value(line: &str) -> Value {
    if line.is_empty() {
        return Value::Integer(-1);
    }
    if line.contains('.') {
        if let Ok(r) = line.parse::<f64>() {
            return Value::Real(r);
        }
    }
    if let Ok(n) = line.parse::<i64>() {
        return Value::Integer(n);
    }
    Value::Str(line.to_owned())
}

fn as_f64(value: &Value) -> Result<f64> {
    match value {
        Value::Integer(n) => Ok(*n as f64),
        Value::Real(r) => Ok(*r),
        other => Err(RuntimeError::TypeMismatch(format!("expected a number, found {}", other.type_name()))),
    }
}

fn as_i64(value: &Value) -> Result<i64> {
    match value {
        Value::Integer(n) => Ok(*n),
        other => Err(RuntimeError::TypeMismatch(format!("expected INTEGER, found {}", other.type_name()))),
    }
}

/// `+`, `-`, `*` operate pointwise; the result is real if either operand is
/// real, integer otherwise (§3 "Runtime value variants"). String `+` is not
/// defined.
fn arith(op: BinaryOp, left: &Value, right: &Value) -> Result<Value> {
    if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
        let result = match op {
            BinaryOp::Add => a.checked_add(*b),
            BinaryOp::Sub => a.checked_sub(*b),
            BinaryOp::Mul => a.checked_mul(*b),
            _ => unreachable!(),
        };
        return Ok(Value::Integer(result.ok_or(RuntimeError::IntegerOverflow)?));
    }
    let (a, b) = (as_f64(left)?, as_f64(right)?);
    Ok(Value::Real(match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        _ => unreachable!(),
    }))
}

/// Equality across mismatched types (e.g. a number against the raw-string
/// READ fallback) is simply false rather than a runtime error, for the same
/// reason as [`compare`].
fn values_equal(left: &Value, right: &Value) -> Result<bool> {
    Ok(match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Character(a), Value::Character(b)) => a == b,
        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        (a, b) if matches!(a, Value::Integer(_) | Value::Real(_)) && matches!(b, Value::Integer(_) | Value::Real(_)) => {
            as_f64(a)? == as_f64(b)?
        }
        _ => false,
    })
}

/// Ordering comparisons coerce both sides to numbers when possible. A
/// non-numeric operand (the raw-string fallback of a READ, see §4.5) can't
/// be ordered against a number; rather than raising a runtime error, the
/// comparison is simply false, which is what keeps the `REPEAT ... UNTIL x
/// >= 0` defensive-read idiom retrying instead of crashing on "abc".
fn compare(left: &Value, right: &Value, matches_ordering: impl Fn(std::cmp::Ordering) -> bool) -> Result<Value> {
    let (Ok(a), Ok(b)) = (as_f64(left), as_f64(right)) else {
        return Ok(Value::Boolean(false));
    };
    let Some(ordering) = a.partial_cmp(&b) else {
        return Ok(Value::Boolean(false));
    };
    Ok(Value::Boolean(matches_ordering(ordering)))
}

#[cfg(test)]
mod tests {
    use eapc_util::Handler;

    use super::*;
    use crate::io::FixedInput;

    fn run_source(source: &str, input_lines: &[&str]) -> (String, Result<()>) {
        let mut handler = Handler::new();
        let program = eapc_par::parse(source, &mut handler).expect("expected a program");
        assert!(!handler.has_errors(), "unexpected errors: {:?}", handler.diagnostics());

        let mut input = FixedInput::new(input_lines.iter().copied());
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let result = run(&program, &mut input, &mut stdout, &mut stderr);
        (String::from_utf8(stdout).unwrap(), result)
    }

    #[test]
    fn hello_world_with_eoln() {
        let (out, result) = run_source("ΑΛΓΟΡΙΘΜΟΣ Hi ΑΡΧΗ ΤΥΠΩΣΕ(\"Γεια\", EOLN) ΤΕΛΟΣ", &[]);
        result.unwrap();
        assert_eq!(out, "Γεια\n");
    }

    #[test]
    fn arithmetic_div_mod_and_real_division() {
        let (out, result) =
            run_source("ΑΛΓΟΡΙΘΜΟΣ Demo ΑΡΧΗ ΤΥΠΩΣΕ(7 DIV 2, 7 MOD 2, 7/2, EOLN) ΤΕΛΟΣ", &[]);
        result.unwrap();
        assert_eq!(out, "3 1 3.5\n");
    }

    #[test]
    fn for_loop_with_negative_step() {
        let (out, result) = run_source(
            "ΑΛΓΟΡΙΘΜΟΣ Demo ΑΡΧΗ \
             ΓΙΑ i := 10 ΕΩΣ 4 ΜΕ ΒΗΜΑ -2 ΕΠΑΝΑΛΑΒΕ ΤΥΠΩΣΕ(i, \" \") ΓΙΑ-ΤΕΛΟΣ \
             ΤΥΠΩΣΕ(EOLN) ΤΕΛΟΣ",
            &[],
        );
        result.unwrap();
        assert_eq!(out, "10  8  6  4 \n");
    }

    #[test]
    fn read_retries_until_non_negative_via_empty_line_sentinel() {
        let (out, result) = run_source(
            "ΑΛΓΟΡΙΘΜΟΣ Demo ΔΕΔΟΜΕΝΑ x : ΑΚΕΡΑΙΟΣ ΑΡΧΗ \
             ΕΠΑΝΑΛΑΒΕ ΔΙΑΒΑΣΕ(x) ΜΕΧΡΙ x >= 0 \
             ΤΥΠΩΣΕ(x) ΤΕΛΟΣ",
            &["", "abc", "5"],
        );
        result.unwrap();
        assert_eq!(out, "5");
    }

    #[test]
    fn recursive_function_returns_by_same_named_assignment() {
        let (out, result) = run_source(
            "ΑΛΓΟΡΙΘΜΟΣ Demo \
             ΣΥΝΑΡΤΗΣΗ fact(n): ΑΚΕΡΑΙΟΣ \
             ΔΙΕΠΑΦΗ ΕΙΣΟΔΟΣ n: ΑΚΕΡΑΙΟΣ; \
             ΑΡΧΗ ΕΑΝ n <= 1 ΤΟΤΕ fact := 1 ΑΛΛΙΩΣ fact := n * fact(n-1) ΕΑΝ-ΤΕΛΟΣ ΤΕΛΟΣ-ΣΥΝΑΡΤΗΣΗΣ \
             ΑΡΧΗ ΤΥΠΩΣΕ(fact(5)) ΤΕΛΟΣ",
            &[],
        );
        result.unwrap();
        assert_eq!(out, "120");
    }

    #[test]
    fn array_write_out_of_bounds_reports_dimension_and_range() {
        let (_out, result) = run_source(
            "ΑΛΓΟΡΙΘΜΟΣ Demo ΔΕΔΟΜΕΝΑ A : ΠΙΝΑΚΑΣ[1..3] ΑΠΟ ΑΚΕΡΑΙΟΣ ΑΡΧΗ A[4] := 0 ΤΕΛΟΣ",
            &[],
        );
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::IndexOutOfBounds { dimension: 1, index: 4, lower: 1, upper: 3 }
        ));
    }

    #[test]
    fn reference_parameter_writes_back_through_the_caller_chain() {
        let (out, result) = run_source(
            "ΑΛΓΟΡΙΘΜΟΣ Demo \
             ΔΕΔΟΜΕΝΑ n : ΑΚΕΡΑΙΟΣ \
             ΔΙΑΔΙΚΑΣΙΑ bump(x) \
             ΔΙΕΠΑΦΗ ΕΙΣΟΔΟΣ x: ΑΚΕΡΑΙΟΣ ΕΞΟΔΟΣ x: ΑΚΕΡΑΙΟΣ \
             ΑΡΧΗ x := x + 1 ΤΕΛΟΣ-ΔΙΑΔΙΚΑΣΙΑΣ \
             ΑΡΧΗ n := 1; ΚΑΛΕΣΕ bump(n); ΤΥΠΩΣΕ(n) ΤΕΛΟΣ",
            &[],
        );
        result.unwrap();
        assert_eq!(out, "2");
    }
}
