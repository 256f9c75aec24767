//! Lexical environment chain (§3 "Environment", §9 "Environment chain").
//!
//! Names are stored under their canonical [`Symbol`] (already NFD-stripped
//! and upper-cased by the tokenizer), so lookup is a single hash-map hit
//! with no extra case/accent folding needed at evaluation time.

use std::cell::RefCell;
use std::rc::Rc;

use eapc_par::ast::Subroutine;
use eapc_util::Symbol;
use rustc_hash::FxHashMap;

use crate::value::Value;

pub type Cell = Rc<RefCell<Value>>;
pub type EnvHandle = Rc<RefCell<Environment>>;

pub struct Environment {
    vars: FxHashMap<Symbol, Cell>,
    subs: FxHashMap<Symbol, Rc<Subroutine>>,
    parent: Option<EnvHandle>,
}

impl Environment {
    pub fn new_root() -> EnvHandle {
        Rc::new(RefCell::new(Environment {
            vars: FxHashMap::default(),
            subs: FxHashMap::default(),
            parent: None,
        }))
    }

    /// A fresh activation record. Its parent is always the *global*
    /// environment regardless of call nesting, giving lexical scoping with
    /// a single global frame (§3 "Lifecycle").
    pub fn child_of(parent: &EnvHandle) -> EnvHandle {
        Rc::new(RefCell::new(Environment {
            vars: FxHashMap::default(),
            subs: FxHashMap::default(),
            parent: Some(Rc::clone(parent)),
        }))
    }

    pub fn define(env: &EnvHandle, name: Symbol, value: Value) {
        env.borrow_mut().vars.insert(name, Rc::new(RefCell::new(value)));
    }

    pub fn define_cell(env: &EnvHandle, name: Symbol, cell: Cell) {
        env.borrow_mut().vars.insert(name, cell);
    }

    pub fn define_subroutine(env: &EnvHandle, name: Symbol, sub: Rc<Subroutine>) {
        env.borrow_mut().subs.insert(name, sub);
    }

    /// Walks the parent chain for an existing binding's cell.
    pub fn find_cell(env: &EnvHandle, name: Symbol) -> Option<Cell> {
        let mut current = Some(Rc::clone(env));
        while let Some(frame) = current {
            if let Some(cell) = frame.borrow().vars.get(&name) {
                return Some(Rc::clone(cell));
            }
            current = frame.borrow().parent.clone();
        }
        None
    }

    /// The binding for `name` in `env`'s own frame, ignoring parents. Used
    /// to read a function's return value, which lives only in the callee's
    /// local frame (§4.4 step 5).
    pub fn own_value(env: &EnvHandle, name: Symbol) -> Option<Value> {
        env.borrow().vars.get(&name).map(|cell| cell.borrow().clone())
    }

    /// Walks up to the environment with no parent — the global frame.
    pub fn root_of(env: &EnvHandle) -> EnvHandle {
        let mut current = Rc::clone(env);
        loop {
            let parent = current.borrow().parent.clone();
            match parent {
                Some(next) => current = next,
                None => return current,
            }
        }
    }

    pub fn find_subroutine(env: &EnvHandle, name: Symbol) -> Option<Rc<Subroutine>> {
        let mut current = Some(Rc::clone(env));
        while let Some(frame) = current {
            if let Some(sub) = frame.borrow().subs.get(&name) {
                return Some(Rc::clone(sub));
            }
            current = frame.borrow().parent.clone();
        }
        None
    }

    /// Assignment semantics (§4.4 "Assignment"): update an existing binding
    /// anywhere in the chain, or create one in `env`'s own frame if none
    /// exists yet. The fallback is what makes function return-by-name
    /// work: the callee's frame has no prior binding for its own name, so
    /// the first assignment creates it there.
    pub fn assign(env: &EnvHandle, name: Symbol, value: Value) {
        if let Some(cell) = Self::find_cell(env, name) {
            *cell.borrow_mut() = value;
        } else {
            Self::define(env, name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_creates_binding_in_current_frame_when_absent() {
        let global = Environment::new_root();
        let local = Environment::child_of(&global);
        let name = Symbol::intern("X");
        Environment::assign(&local, name, Value::Integer(1));
        assert!(Environment::find_cell(&global, name).is_none());
        assert!(Environment::find_cell(&local, name).is_some());
    }

    #[test]
    fn assign_updates_binding_found_in_parent_chain() {
        let global = Environment::new_root();
        let name = Symbol::intern("X");
        Environment::define(&global, name, Value::Integer(1));
        let local = Environment::child_of(&global);
        Environment::assign(&local, name, Value::Integer(2));
        match Environment::find_cell(&global, name).unwrap().borrow().clone() {
            Value::Integer(n) => assert_eq!(n, 2),
            _ => panic!("expected integer"),
        }
    }

    #[test]
    fn reference_binding_shares_the_same_cell() {
        let global = Environment::new_root();
        let name = Symbol::intern("X");
        Environment::define(&global, name, Value::Integer(1));
        let cell = Environment::find_cell(&global, name).unwrap();

        let local = Environment::child_of(&global);
        Environment::define_cell(&local, Symbol::intern("PARAM"), cell);
        Environment::assign(&local, Symbol::intern("PARAM"), Value::Integer(42));

        match Environment::find_cell(&global, name).unwrap().borrow().clone() {
            Value::Integer(n) => assert_eq!(n, 42),
            _ => panic!("expected integer"),
        }
    }
}
