//! Source location tracking.
//!
//! The interpreter only ever processes a single source text (there is no
//! module system, see the GLOSSARY), so unlike a multi-file compiler we don't
//! need a `SourceMap`/`FileId` pair — a line and column is enough to pin a
//! diagnostic to a spot in the program.

/// A location in the source text: a 1-based line and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Placeholder span for synthesized nodes that have no source position.
    pub const DUMMY: Span = Span { line: 0, column: 0 };
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
