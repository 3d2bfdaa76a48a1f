use super::nodes::*;
use super::visitor::AstVisitor;
use super::{AstNode, SourceFile};

/// Serializes a tree into an indented, diffable textual form that exposes
/// every node field. Used by tooling and round-trip tests.
pub struct AstPrinter {
    indent_level: usize,
    output: String,
}

impl AstPrinter {
    pub fn new() -> Self {
        Self {
            indent_level: 0,
            output: String::new(),
        }
    }

    pub fn print(&mut self, file: &SourceFile) -> String {
        self.output.clear();
        self.visit_source_file(file);
        self.output.clone()
    }

    fn indent(&mut self) {
        self.indent_level += 2;
    }

    fn dedent(&mut self) {
        if self.indent_level >= 2 {
            self.indent_level -= 2;
        }
    }

    fn writeln(&mut self, s: &str) {
        for _ in 0..self.indent_level {
            self.output.push(' ');
        }
        self.output.push_str(s);
        self.output.push('\n');
    }

    fn write_modifiers(&mut self, modifiers: &[Modifier]) {
        if modifiers.is_empty() {
            return;
        }
        let joined = modifiers
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.writeln(&format!("modifiers: {}", joined));
    }

    fn write_type_list(&mut self, label: &str, types: &[TypeRef]) {
        if types.is_empty() {
            return;
        }
        let joined = types
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        self.writeln(&format!("{}: {}", label, joined));
    }
}

impl Default for AstPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl AstVisitor for AstPrinter {
    type Output = ();

    fn visit_source_file(&mut self, file: &SourceFile) {
        self.writeln("source-file");
        self.indent();

        if let Some(ref package) = file.package {
            self.visit_package_decl(package);
        }
        for import in &file.imports {
            self.visit_import_decl(import);
        }
        for declaration in &file.declarations {
            declaration.accept(self);
        }

        self.dedent();
    }

    fn visit_package_decl(&mut self, package: &PackageDecl) {
        self.writeln(&format!("package: {}", package.name));
    }

    fn visit_import_decl(&mut self, import: &ImportDecl) {
        let mut line = format!("import: {}", import.name);
        if import.is_wildcard {
            line.push_str(".*");
        }
        if import.is_static {
            line.push_str(" (static)");
        }
        self.writeln(&line);
    }

    fn visit_class_decl(&mut self, class: &ClassDecl) {
        self.writeln(&format!("class: {} @ {}", class.name, class.span));
        self.indent();
        self.write_modifiers(&class.modifiers);
        if let Some(ref superclass) = class.extends {
            self.writeln(&format!("extends: {}", superclass));
        }
        self.write_type_list("implements", &class.implements);
        for member in &class.members {
            match member {
                ClassMember::Field(field) => self.visit_field(field),
                ClassMember::Method(method) => self.visit_method(method),
                ClassMember::Nested(declaration) => declaration.accept(self),
            }
        }
        self.dedent();
    }

    fn visit_interface_decl(&mut self, interface: &InterfaceDecl) {
        self.writeln(&format!("interface: {} @ {}", interface.name, interface.span));
        self.indent();
        self.write_modifiers(&interface.modifiers);
        self.write_type_list("extends", &interface.extends);
        for member in &interface.members {
            match member {
                InterfaceMember::Field(field) => self.visit_field(field),
                InterfaceMember::Method(method) => self.visit_method(method),
            }
        }
        self.dedent();
    }

    fn visit_enum_decl(&mut self, enum_decl: &EnumDecl) {
        self.writeln(&format!("enum: {} @ {}", enum_decl.name, enum_decl.span));
        self.indent();
        self.write_modifiers(&enum_decl.modifiers);
        for constant in &enum_decl.constants {
            self.writeln(&format!("constant: {}", constant.name));
        }
        self.dedent();
    }

    fn visit_field(&mut self, field: &FieldSig) {
        self.writeln(&format!("field: {}", field.name));
        self.indent();
        self.write_modifiers(&field.modifiers);
        self.writeln(&format!("type: {}", field.type_ref));
        if let Some(ref init) = field.initializer {
            self.writeln(&format!("init: {}", init));
        }
        self.dedent();
    }

    fn visit_method(&mut self, method: &MethodSig) {
        self.writeln(&format!("method: {}", method.name));
        self.indent();
        self.write_modifiers(&method.modifiers);
        match method.return_type {
            Some(ref ty) => self.writeln(&format!("returns: {}", ty)),
            None => self.writeln("returns: void"),
        }
        for parameter in &method.parameters {
            self.visit_parameter(parameter);
        }
        self.write_type_list("throws", &method.throws);
        match method.body {
            Some(ref body) => self.visit_block(body),
            None => self.writeln("body: absent"),
        }
        self.dedent();
    }

    fn visit_parameter(&mut self, parameter: &Parameter) {
        let mut line = String::from("param: ");
        for modifier in &parameter.modifiers {
            line.push_str(&modifier.to_string());
            line.push(' ');
        }
        line.push_str(&format!("{} {}", parameter.type_ref, parameter.name));
        self.writeln(&line);
    }

    fn visit_block(&mut self, block: &Block) {
        self.writeln("body:");
        self.indent();
        for stmt in &block.statements {
            self.visit_stmt(stmt);
        }
        self.dedent();
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Expression(s) => self.writeln(&format!("expr-stmt: {}", s.expr)),
            Stmt::VarDecl(s) => {
                match s.initializer {
                    Some(ref init) => self.writeln(&format!(
                        "var-decl: {} {} = {}",
                        s.type_ref, s.name, init
                    )),
                    None => self.writeln(&format!("var-decl: {} {}", s.type_ref, s.name)),
                }
            }
            Stmt::Return(s) => match s.value {
                Some(ref value) => self.writeln(&format!("return: {}", value)),
                None => self.writeln("return"),
            },
            Stmt::If(s) => {
                self.writeln(&format!("if: {}", s.condition));
                self.indent();
                self.visit_stmt(&s.then_branch);
                if let Some(ref else_branch) = s.else_branch {
                    self.writeln("else:");
                    self.visit_stmt(else_branch);
                }
                self.dedent();
            }
            Stmt::While(s) => {
                self.writeln(&format!("while: {}", s.condition));
                self.indent();
                self.visit_stmt(&s.body);
                self.dedent();
            }
            Stmt::For(s) => {
                self.writeln("for:");
                self.indent();
                if let Some(ref init) = s.init {
                    self.visit_stmt(init);
                }
                if let Some(ref condition) = s.condition {
                    self.writeln(&format!("cond: {}", condition));
                }
                for update in &s.update {
                    self.writeln(&format!("update: {}", update));
                }
                self.visit_stmt(&s.body);
                self.dedent();
            }
            Stmt::ForEach(s) => {
                self.writeln(&format!(
                    "for-each: {} {} : {}",
                    s.type_ref, s.name, s.iterable
                ));
                self.indent();
                self.visit_stmt(&s.body);
                self.dedent();
            }
            Stmt::Block(block) => self.visit_block(block),
        }
    }

    fn visit_expr(&mut self, expr: &Expr) {
        self.writeln(&expr.to_string());
    }

    fn visit_type_ref(&mut self, type_ref: &TypeRef) {
        self.writeln(&type_ref.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn prints_every_declaration_field() {
        let source = r#"
package demo;

import java.util.List;

public interface Store extends Base<String> {
  List<String> items;
  Thing get(final int id) throws Failure;
}
"#;
        let (file, diagnostics) = parse(source);
        assert!(diagnostics.is_empty(), "{:?}", diagnostics);

        let out = AstPrinter::new().print(&file);
        assert!(out.contains("package: demo"));
        assert!(out.contains("import: java.util.List"));
        assert!(out.contains("interface: Store"));
        assert!(out.contains("modifiers: public"));
        assert!(out.contains("extends: Base<String>"));
        assert!(out.contains("field: items"));
        assert!(out.contains("type: List<String>"));
        assert!(out.contains("method: get"));
        assert!(out.contains("param: final int id"));
        assert!(out.contains("throws: Failure"));
        assert!(out.contains("body: absent"));
    }

    #[test]
    fn prints_method_bodies() {
        let source = r#"
class Runner {
  void run() {
    Counter counter = new Counter();
    counter.tick(1);
    return;
  }
}
"#;
        let (file, diagnostics) = parse(source);
        assert!(diagnostics.is_empty(), "{:?}", diagnostics);

        let out = AstPrinter::new().print(&file);
        assert!(out.contains("var-decl: Counter counter = new Counter()"));
        assert!(out.contains("expr-stmt: counter.tick(1)"));
        assert!(out.contains("return"));
    }
}
