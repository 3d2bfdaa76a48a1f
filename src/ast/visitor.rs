use super::*;

/// AST visitor trait for traversing and processing AST nodes
pub trait AstVisitor {
    type Output;

    // Root
    fn visit_source_file(&mut self, file: &SourceFile) -> Self::Output;

    // Package and imports
    fn visit_package_decl(&mut self, package: &PackageDecl) -> Self::Output;
    fn visit_import_decl(&mut self, import: &ImportDecl) -> Self::Output;

    // Top-level declarations
    fn visit_class_decl(&mut self, class: &ClassDecl) -> Self::Output;
    fn visit_interface_decl(&mut self, interface: &InterfaceDecl) -> Self::Output;
    fn visit_enum_decl(&mut self, enum_decl: &EnumDecl) -> Self::Output;

    // Members
    fn visit_field(&mut self, field: &FieldSig) -> Self::Output;
    fn visit_method(&mut self, method: &MethodSig) -> Self::Output;
    fn visit_parameter(&mut self, parameter: &Parameter) -> Self::Output;

    // Statements
    fn visit_block(&mut self, block: &Block) -> Self::Output;
    fn visit_stmt(&mut self, stmt: &Stmt) -> Self::Output;

    // Expressions and types
    fn visit_expr(&mut self, expr: &Expr) -> Self::Output;
    fn visit_type_ref(&mut self, type_ref: &TypeRef) -> Self::Output;
}
