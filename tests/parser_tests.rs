use jfront::ast::nodes::*;
use jfront::ast::{AstNode, AstPrinter};
use jfront::parser::{RecoveryAction, Severity};

const HELLO_WORLD: &str = r#"package HelloWorld;

import goodbye.GoodbyeWorld;

protected interface ITest extends Div, Something, Else {
  String string;
  Bool boolean;
  Object object;

  Thing getThing (String thing, final Number id) throws Exception;
}

public final class HelloWorld {
  public static void main (String[] args) {
    console.log('Hello!');

    GoodbyeWorld goodbyeWorld = new GoodbyeWorld();

    goodbyeWorld.printGoodbyeWorld();
  }
}
"#;

const EXAMPLE_PROGRAM: &str = r#"package ExampleProgram;

import interfaces.IExampleInterface;
import ExampleImplementation;

public final class ExampleProgram {
  private static enum ExampleEnum {
    UP,
    DOWN,
    LEFT,
    RIGHT
  }

  public static void main (String[] args) {
    console.log('This is an example.');

    IExampleInterface exampleInterface = ExampleProgram.getExample();

    String[] names;

    for (String name : names) {
      String firstChar = name.charAt(0);
    }

    ExampleEnum exampleEnum = ExampleEnum.UP;
  }

  public static IExampleInterface getExample () {
    ExampleImplementation exampleImplementation = new ExampleImplementation();

    return exampleImplementation;
  }
}
"#;

fn class(declaration: &Declaration) -> &ClassDecl {
    match declaration {
        Declaration::Class(c) => c,
        other => panic!("expected class, got {:?}", other),
    }
}

fn interface(declaration: &Declaration) -> &InterfaceDecl {
    match declaration {
        Declaration::Interface(i) => i,
        other => panic!("expected interface, got {:?}", other),
    }
}

#[test]
fn clean_minimal_class() {
    let (file, diagnostics) = jfront::parse("public final class X {}");
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);
    assert_eq!(file.declarations.len(), 1);
    let c = class(&file.declarations[0]);
    assert_eq!(c.name, "X");
    assert_eq!(c.modifiers, vec![Modifier::Public, Modifier::Final]);
    assert!(c.extends.is_none());
    assert!(c.implements.is_empty());
    assert!(c.members.is_empty());
}

#[test]
fn interface_with_inheritance_and_abstract_method() {
    let source = "interface I extends A, B, C { Thing get(); }";
    let (file, diagnostics) = jfront::parse(source);
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);

    let i = interface(&file.declarations[0]);
    let names: Vec<&str> = i.extends.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    match &i.members[0] {
        InterfaceMember::Method(m) => {
            assert_eq!(m.name, "get");
            assert!(m.parameters.is_empty());
            assert!(m.body.is_none());
        }
        other => panic!("expected method, got {:?}", other),
    }
}

#[test]
fn duplicate_declarations_both_kept_with_warning() {
    let source = "class HelloWorld { int a; } class HelloWorld { int b; }";
    let (file, diagnostics) = jfront::parse(source);

    assert_eq!(file.declarations.len(), 2);
    assert!(file.find_declaration("HelloWorld").is_some());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
    assert!(!diagnostics[0].is_error());
}

#[test]
fn top_level_garbage_between_declarations() {
    let source = "public final class First {} < interface Second {}";
    let (file, diagnostics) = jfront::parse(source);

    assert_eq!(file.declarations.len(), 2);
    assert_eq!(file.declarations[0].name(), "First");
    assert_eq!(file.declarations[1].name(), "Second");

    let errors: Vec<_> = diagnostics.iter().filter(|d| d.is_error()).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].recovery, RecoveryAction::SkippedToDeclaration);
}

#[test]
fn hello_world_fixture_reports_exactly_the_reserved_name() {
    let (file, diagnostics) = jfront::parse(HELLO_WORLD);

    assert_eq!(file.package.as_ref().map(|p| p.name.as_str()), Some("HelloWorld"));
    assert_eq!(file.imports.len(), 1);
    assert_eq!(file.declarations.len(), 2);

    let i = interface(&file.declarations[0]);
    assert_eq!(i.name, "ITest");
    assert_eq!(i.extends.len(), 3);
    // The 'Bool boolean;' member is dropped; its neighbors survive
    assert_eq!(i.members.len(), 3);
    match &i.members[2] {
        InterfaceMember::Method(m) => {
            assert_eq!(m.name, "getThing");
            assert_eq!(m.parameters.len(), 2);
            assert_eq!(m.parameters[1].modifiers, vec![Modifier::Final]);
            assert_eq!(m.throws.len(), 1);
        }
        other => panic!("expected method, got {:?}", other),
    }

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].is_error());
    assert!(diagnostics[0].message.contains("reserved word 'boolean'"));
    assert_eq!(diagnostics[0].recovery, RecoveryAction::SkippedToMemberBoundary);
}

#[test]
fn example_program_fixture_parses_clean() {
    let (file, diagnostics) = jfront::parse(EXAMPLE_PROGRAM);
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);

    let c = class(&file.declarations[0]);
    assert_eq!(c.name, "ExampleProgram");
    assert_eq!(c.members.len(), 3);

    match &c.members[0] {
        ClassMember::Nested(Declaration::Enum(e)) => {
            assert_eq!(e.name, "ExampleEnum");
            let constants: Vec<&str> = e.constants.iter().map(|k| k.name.as_str()).collect();
            assert_eq!(constants, vec!["UP", "DOWN", "LEFT", "RIGHT"]);
        }
        other => panic!("expected nested enum, got {:?}", other),
    }

    let main = match &c.members[1] {
        ClassMember::Method(m) => m,
        other => panic!("expected method, got {:?}", other),
    };
    assert!(main.return_type.is_none());
    assert_eq!(main.parameters[0].type_ref.array_dims, 1);
    let body = main.body.as_ref().unwrap();
    assert!(body.statements.iter().any(|s| matches!(s, Stmt::ForEach(_))));
}

#[test]
fn deeply_nested_generic_round_trips_through_display() {
    let source = "class Holder { String<Test<Thing<What>>>[] slot; }";
    let (file, diagnostics) = jfront::parse(source);
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);

    let c = class(&file.declarations[0]);
    let field = match &c.members[0] {
        ClassMember::Field(f) => f,
        other => panic!("expected field, got {:?}", other),
    };
    assert_eq!(field.type_ref.generic_depth(), 3);
    assert_eq!(field.type_ref.array_dims, 1);
    assert_eq!(field.type_ref.to_string(), "String<Test<Thing<What>>>[]");
}

#[test]
fn parse_never_fails_and_never_hangs() {
    let nasty = [
        "",
        " ",
        "\u{FEFF}",
        "class",
        "class {",
        "interface I extends {",
        "enum E { , , , }",
        "}}}}}}",
        "{{{{{{",
        "<<<<<<>>>>>>",
        "public public public",
        "class A { class B { class C {",
        "\"unterminated\nclass X {}",
        "class D { void m( }",
        "package ; import ; class ;",
    ];
    for source in nasty {
        let (_, _) = jfront::parse(source);
    }
}

#[test]
fn diagnostic_spans_point_at_real_positions() {
    let source = "class A { Bool boolean; }\n@\nclass B { int x; }";
    let (file, diagnostics) = jfront::parse(source);
    assert_eq!(file.declarations.len(), 2);
    assert!(diagnostics.len() >= 2);
    assert!(diagnostics.iter().all(|d| d.span.start.offset <= source.len()));
    // The stray '@' was reported by the lexer with its own recovery note
    assert!(diagnostics
        .iter()
        .any(|d| d.recovery == RecoveryAction::SkippedCharacter));
}

#[test]
fn printer_exposes_structure() {
    let (file, diagnostics) = jfront::parse(HELLO_WORLD);
    assert_eq!(diagnostics.len(), 1);

    let out = AstPrinter::new().print(&file);
    assert!(out.contains("package: HelloWorld"));
    assert!(out.contains("import: goodbye.GoodbyeWorld"));
    assert!(out.contains("interface: ITest"));
    assert!(out.contains("modifiers: protected"));
    assert!(out.contains("field: string"));
    assert!(out.contains("method: getThing"));
    assert!(out.contains("param: final Number id"));
    assert!(out.contains("throws: Exception"));
    assert!(out.contains("class: HelloWorld"));
    assert!(out.contains("expr-stmt: console.log(\"Hello!\")"));
    assert!(out.contains("var-decl: GoodbyeWorld goodbyeWorld = new GoodbyeWorld()"));
}

#[test]
fn spans_map_back_to_source_text() {
    let source = "class A {} class B {}";
    let (file, _) = jfront::parse(source);
    assert_eq!(file.declarations[0].span().source_text(source), "class A {}");
    assert_eq!(file.declarations[1].span().source_text(source), "class B {}");
}

#[test]
fn truncated_source_still_yields_declarations() {
    let source = "class Cut { void go() { int x = ";
    let (file, diagnostics) = jfront::parse(source);
    assert_eq!(file.declarations.len(), 1);
    assert_eq!(file.declarations[0].name(), "Cut");
    assert!(!diagnostics.is_empty());
}
