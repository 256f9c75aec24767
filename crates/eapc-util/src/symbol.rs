//! String interning, specialized for EAP's case- and accent-insensitive
//! identifiers.
//!
//! EAP keywords and identifiers compare equal under NFD decomposition with
//! combining marks (Unicode category Mn) stripped and the result upper-cased
//! (§4.1 "Keyword recognition", GLOSSARY "Accent-folding"). [`Symbol`] interns
//! the *canonical* form so two spellings of the same name — `Αθροισμα` and
//! `ΑΘΡΟΙΣΜΑ` — intern to the same symbol and compare with a single integer
//! comparison, the same trick a compiler's string interner uses to avoid
//! repeated string hashing.
//!
//! The interner is a single global table guarded by a `Mutex`: the
//! interpreter runs one source program on one thread (see the concurrency
//! notes on `§5`), so the lock-free concurrent interner a multi-file,
//! multi-threaded compiler needs would just be unused ceremony here.

use std::sync::{Mutex, OnceLock};

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold a string to EAP's canonical identifier form: NFD-decompose, drop
/// combining marks, upper-case.
pub fn canonicalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_uppercase()
}

struct Interner {
    strings: Vec<&'static str>,
    lookup: rustc_hash::FxHashMap<&'static str, Symbol>,
}

impl Interner {
    fn new() -> Self {
        Self {
            strings: Vec::new(),
            lookup: rustc_hash::FxHashMap::default(),
        }
    }

    fn intern(&mut self, text: &str) -> Symbol {
        if let Some(sym) = self.lookup.get(text) {
            return *sym;
        }
        let leaked: &'static str = Box::leak(text.to_owned().into_boxed_str());
        let sym = Symbol(self.strings.len() as u32);
        self.strings.push(leaked);
        self.lookup.insert(leaked, sym);
        sym
    }

    fn resolve(&self, sym: Symbol) -> &'static str {
        self.strings[sym.0 as usize]
    }
}

fn table() -> &'static Mutex<Interner> {
    static TABLE: OnceLock<Mutex<Interner>> = OnceLock::new();
    TABLE.get_or_init(|| Mutex::new(Interner::new()))
}

/// An interned string. Two symbols compare equal iff their original strings
/// were identical; see [`Symbol::intern_canonical`] for the accent/case-folded
/// variant used for identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    /// Intern a string verbatim (used for string literals, where EAP's
    /// case/accent folding does not apply).
    pub fn intern(text: &str) -> Self {
        table().lock().unwrap().intern(text)
    }

    /// Intern the canonical (accent-folded, upper-cased) form of `text`.
    /// Use this for every identifier and keyword lookup.
    pub fn intern_canonical(text: &str) -> Self {
        Self::intern(&canonicalize(text))
    }

    pub fn as_str(&self) -> &'static str {
        table().lock().unwrap().resolve(*self)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_strips_accents_and_case() {
        assert_eq!(canonicalize("Αθροισμα"), canonicalize("ΑΘΡΟΙΣΜΑ"));
        assert_eq!(canonicalize("άλφα"), "ΑΛΦΑ");
    }

    #[test]
    fn canonical_symbols_unify_accent_variants() {
        let a = Symbol::intern_canonical("Αθροισμα");
        let b = Symbol::intern_canonical("ΑΘΡΟΙΣΜΑ");
        assert_eq!(a, b);
    }

    #[test]
    fn verbatim_intern_preserves_distinct_strings() {
        let a = Symbol::intern("abc");
        let b = Symbol::intern("abd");
        assert_ne!(a, b);
        assert_eq!(Symbol::intern("abc").as_str(), "abc");
    }
}
