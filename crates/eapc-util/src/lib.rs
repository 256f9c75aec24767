//! eapc-util - Foundation types shared by the tokenizer, parser, and evaluator.
//!
//! Three concerns live here because every later stage needs them:
//!
//! - [`span`]: source positions, used to tag tokens and AST nodes for diagnostics.
//! - [`diagnostic`]: the `Diagnostic`/`Level`/`Handler` types used to report
//!   syntax and runtime errors.
//! - [`symbol`]: a string interner that canonicalizes EAP identifiers and
//!   keywords (NFD accent-fold + uppercase) so lookups are case- and
//!   accent-insensitive, per the language's identifier rules.

pub mod diagnostic;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use span::Span;
pub use symbol::{canonicalize, Symbol};
