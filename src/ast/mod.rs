//! Abstract Syntax Tree (AST) representation for parsed snippets
//!
//! This module defines the tree the parser produces. The tree is a
//! structural record of the source: names in `extends`/`implements` clauses
//! are lookup keys, not ownership edges, so the tree is never cyclic and is
//! owned entirely by its [`SourceFile`].

pub mod nodes;
pub mod printer;
pub mod visitor;

pub use nodes::*;
pub use printer::*;
pub use visitor::*;

pub use crate::parser::span::{Location, Span};

use std::fmt;

/// AST node trait that all AST nodes implement
pub trait AstNode {
    /// Get the source span of this node
    fn span(&self) -> Span;

    /// Accept a visitor
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output;
}

/// Root node: one parsed source text
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub package: Option<PackageDecl>,
    pub imports: Vec<ImportDecl>,
    pub declarations: Vec<Declaration>,
    pub span: Span,
}

impl SourceFile {
    /// Look up the first top-level declaration with the given name.
    /// Duplicates are retained in source order, so later declarations with
    /// the same name are reachable through `declarations` directly.
    pub fn find_declaration(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.name() == name)
    }
}

impl AstNode for SourceFile {
    fn span(&self) -> Span {
        self.span
    }

    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_source_file(self)
    }
}

impl fmt::Display for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref package) = self.package {
            writeln!(f, "{}", package)?;
        }

        for import in &self.imports {
            writeln!(f, "{}", import)?;
        }

        for declaration in &self.declarations {
            writeln!(f, "{}", declaration)?;
        }

        Ok(())
    }
}
