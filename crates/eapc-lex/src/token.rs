//! Token kinds and keyword recognition.
//!
//! Keyword lookup is accent- and case-insensitive (§4.1): the candidate
//! lexeme is canonicalized with [`eapc_util::canonicalize`] before it is
//! compared against the table below, so `Εαν`, `ΕΑΝ`, and `εαν` all resolve
//! to [`TokenKind::If`].

use eapc_util::{canonicalize, Symbol};

/// A lexical category, with its payload where one exists.
///
/// Every compound keyword (`ΕΑΝ-ΤΕΛΟΣ`, `ΓΙΑ-ΤΕΛΟΣ`, ...) gets its own
/// variant rather than being reconstructed from `Minus` + two identifiers;
/// the lexer recognizes them atomically (see [`keyword_from_text`]).
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Program structure
    Algorithm,
    Constants,
    Data,
    Begin,
    End,

    // Subroutines
    Function,
    Procedure,
    Interface,
    Input,
    Output,
    EndFunction,
    EndProcedure,

    // Control flow
    If,
    Then,
    Else,
    EndIf,
    For,
    To,
    With,
    Step,
    Repeat,
    EndFor,
    While,
    EndWhile,
    Until,

    // Statements
    Print,
    Read,
    Calculate,

    // Scalar types
    IntegerType,
    RealType,
    CharacterType,
    StringType,
    BooleanType,
    Array,
    Of,

    // Logical/arithmetic word operators
    Or,
    And,
    Not,
    Div,
    Mod,

    // Literals
    True,
    False,
    Ident(Symbol),
    Integer(i64),
    Real(f64),
    Str(Symbol),

    // Operators and punctuation
    Plus,
    Minus,
    Star,
    Slash,
    Assign,     // :=
    Eq,         // =
    NotEq,      // <>
    Lt,
    Gt,
    LtEq,
    GtEq,
    Range,      // ..
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Colon,
    Semicolon,
    Percent, // leading `%` argument sigil (§4.2 "tolerated and discarded")

    Eof,
}

/// One keyword's Greek and (optional) English spelling, both canonicalized
/// at startup so lookup is a single hash-map hit.
struct Keyword {
    greek: &'static str,
    english: Option<&'static str>,
    kind: TokenKind,
}

macro_rules! kw {
    ($greek:expr, $english:expr, $kind:expr) => {
        Keyword {
            greek: $greek,
            english: Some($english),
            kind: $kind,
        }
    };
    ($greek:expr, $kind:expr) => {
        Keyword {
            greek: $greek,
            english: None,
            kind: $kind,
        }
    };
}

fn keyword_table() -> Vec<Keyword> {
    use TokenKind::*;
    vec![
        kw!("ΑΛΓΟΡΙΘΜΟΣ", "ALGORITHM", Algorithm),
        kw!("ΣΤΑΘΕΡΕΣ", "CONSTANTS", Constants),
        kw!("ΔΕΔΟΜΕΝΑ", "DATA", Data),
        kw!("ΑΡΧΗ", "BEGIN", Begin),
        kw!("ΤΕΛΟΣ", "END", End),
        kw!("ΣΥΝΑΡΤΗΣΗ", "FUNCTION", Function),
        kw!("ΔΙΑΔΙΚΑΣΙΑ", "PROCEDURE", Procedure),
        kw!("ΔΙΕΠΑΦΗ", "INTERFACE", Interface),
        // Deliberately Greek-only: §4.1 keeps INPUT/OUTPUT free for use as identifiers.
        kw!("ΕΙΣΟΔΟΣ", Input),
        kw!("ΕΞΟΔΟΣ", Output),
        kw!("ΤΕΛΟΣ-ΣΥΝΑΡΤΗΣΗΣ", "END_FUNCTION", EndFunction),
        kw!("ΤΕΛΟΣ-ΔΙΑΔΙΚΑΣΙΑΣ", "END_PROCEDURE", EndProcedure),
        kw!("ΕΑΝ", "IF", If),
        kw!("ΤΟΤΕ", "THEN", Then),
        kw!("ΑΛΛΙΩΣ", "ELSE", Else),
        kw!("ΕΑΝ-ΤΕΛΟΣ", "END_IF", EndIf),
        kw!("ΓΙΑ", "FOR", For),
        kw!("ΕΩΣ", "TO", To),
        kw!("ΜΕ", "WITH", With),
        kw!("ΒΗΜΑ", "STEP", Step),
        kw!("ΕΠΑΝΑΛΑΒΕ", "REPEAT", Repeat),
        kw!("ΓΙΑ-ΤΕΛΟΣ", "END_FOR", EndFor),
        kw!("ΕΝΟΣΩ", "WHILE", While),
        kw!("ΕΝΟΣΩ-ΤΕΛΟΣ", "END_WHILE", EndWhile),
        kw!("ΜΕΧΡΙ", "UNTIL", Until),
        kw!("ΤΥΠΩΣΕ", "PRINT", Print),
        kw!("ΔΙΑΒΑΣΕ", "READ", Read),
        kw!("ΚΑΛΕΣΕ", "CALCULATE", Calculate),
        kw!("ΑΚΕΡΑΙΟΣ", "INTEGER", IntegerType),
        kw!("ΠΡΑΓΜΑΤΙΚΟΣ", "REAL", RealType),
        kw!("ΧΑΡΑΚΤΗΡΑΣ", "CHARACTER", CharacterType),
        kw!("ΑΛΦΑΡΙΘΜΗΤΙΚΟ", "STRING", StringType),
        kw!("ΛΟΓΙΚΗ", "BOOLEAN", BooleanType),
        kw!("ΠΙΝΑΚΑΣ", "ARRAY", Array),
        kw!("ΑΠΟ", "OF", Of),
        kw!("Η", "OR", Or),
        kw!("ΚΑΙ", "AND", And),
        kw!("ΟΧΙ", "NOT", Not),
        kw!("DIV", Div),
        kw!("MOD", Mod),
        kw!("ΑΛΗΘΗΣ", "TRUE", True),
        kw!("ΨΕΥΔΗΣ", "FALSE", False),
    ]
}

/// Canonical-form (accent-folded, upper-cased) keyword lexemes.
pub struct KeywordTable {
    entries: Vec<(String, TokenKind)>,
}

impl KeywordTable {
    pub fn new() -> Self {
        let entries: Vec<(String, TokenKind)> = keyword_table()
            .into_iter()
            .flat_map(|k| {
                let mut v = vec![(canonicalize(k.greek), k.kind.clone())];
                if let Some(en) = k.english {
                    v.push((canonicalize(en), k.kind));
                }
                v
            })
            .collect();
        Self { entries }
    }

    /// Returns the keyword kind whose canonical spelling matches `canonical`
    /// exactly. Works for both plain keywords (`ΕΑΝ`) and, since their
    /// canonical spelling still contains the hyphen, compound keywords
    /// (`ΕΑΝ-ΤΕΛΟΣ`) — see `lexer/identifier.rs` for how the two-word lexeme
    /// is assembled before this lookup runs.
    pub fn lookup_exact(&self, canonical: &str) -> Option<TokenKind> {
        self.entries
            .iter()
            .find(|(text, _)| text == canonical)
            .map(|(_, kind)| kind.clone())
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new()
    }
}

/// A token: its kind plus the source position where it starts, used for
/// diagnostics (§3 "Token").
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, line: u32, column: u32) -> Self {
        Self { kind, line, column }
    }

    pub fn span(&self) -> eapc_util::Span {
        eapc_util::Span::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_keyword_case_and_accent_insensitively() {
        let table = KeywordTable::new();
        assert_eq!(table.lookup_exact(&canonicalize("εαν")), Some(TokenKind::If));
        assert_eq!(table.lookup_exact(&canonicalize("ΕΆΝ")), Some(TokenKind::If));
        assert_eq!(table.lookup_exact("IF"), Some(TokenKind::If));
    }

    #[test]
    fn compound_keyword_looked_up_by_full_canonical_spelling() {
        let table = KeywordTable::new();
        assert_eq!(
            table.lookup_exact(&canonicalize("ΕΑΝ-ΤΕΛΟΣ")),
            Some(TokenKind::EndIf)
        );
    }
}
