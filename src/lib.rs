//! jfront: a resilient front-end for small Java-like snippets.
//!
//! The crate lexes and parses possibly malformed snippet sources into a
//! structural tree without ever failing: syntax problems become
//! [`Diagnostic`](parser::Diagnostic) records alongside the tree instead of
//! aborting the pass. It is built for tooling that must keep working on
//! half-written or mangled input: editors, linters, and batch scanners.
//!
//! Each parse call is independent and holds no shared state, so separate
//! sources can be parsed from separate threads without coordination.
//!
//! ```
//! let (file, diagnostics) = jfront::parse("public final class X {}");
//! assert_eq!(file.declarations.len(), 1);
//! assert!(diagnostics.is_empty());
//! ```

pub mod ast;
pub mod consts;
pub mod parser;

pub use ast::{AstNode, AstPrinter, AstVisitor, SourceFile};
pub use parser::{parse, tokenize, tokenize_lossless, Diagnostic, Severity};
