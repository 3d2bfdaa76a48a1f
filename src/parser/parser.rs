use super::diagnostics::{Diagnostic, RecoveryAction};
use super::error::{ParseError, ParseResult};
use super::lexer::{Lexer, LexicalToken, Token};
use super::span::{Location, Span};
use crate::ast::nodes::*;
use crate::ast::{AstNode, SourceFile};
use crate::consts::{PARSER_MAX_LOOP_ITERS, PARSER_MAX_SYNC_STEPS, RESERVED_WORDS};

use std::collections::HashSet;

/// Recursive-descent parser over the non-trivia token stream.
///
/// The parser is total: it always produces a `SourceFile`, however mangled
/// the input. Productions that fail to match raise a `ParseError` internally;
/// the error is converted into a `Diagnostic`, the stream is resynchronized
/// at a structural boundary, and parsing continues. No input panics and no
/// input loops forever.
pub struct Parser {
    tokens: Vec<LexicalToken>,
    current: usize,
    diagnostics: Vec<Diagnostic>,
    end_location: Location,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        let (tokens, diagnostics) = Lexer::new(source).tokenize();
        let mut end_location = Location::start();
        end_location.advance_str(source);
        Self {
            tokens,
            current: 0,
            diagnostics,
            end_location,
        }
    }

    /// Parse the whole source. Always returns a tree; problems are reported
    /// through the diagnostics list, errors first come from the lexer and
    /// then from the parse in source order.
    pub fn parse(mut self) -> (SourceFile, Vec<Diagnostic>) {
        let start = Location::start();

        let package = if self.check(&Token::Package) {
            match self.parse_package_decl() {
                Ok(package) => Some(package),
                Err(err) => {
                    self.report(&err, RecoveryAction::SkippedToDeclaration);
                    self.synchronize_toplevel();
                    None
                }
            }
        } else {
            None
        };

        let mut imports = Vec::new();
        let mut iters = 0;
        while self.check(&Token::Import) && iters < PARSER_MAX_LOOP_ITERS {
            iters += 1;
            let before = self.current;
            match self.parse_import_decl() {
                Ok(import) => imports.push(import),
                Err(err) => {
                    self.report(&err, RecoveryAction::SkippedToDeclaration);
                    self.synchronize_toplevel();
                }
            }
            if self.current == before && !self.is_at_end() {
                self.current += 1;
            }
        }

        let mut declarations = Vec::new();
        let mut iters = 0;
        while !self.is_at_end() && iters < PARSER_MAX_LOOP_ITERS {
            iters += 1;
            let before = self.current;
            match self.parse_declaration() {
                Ok(declaration) => declarations.push(declaration),
                Err(err) => {
                    self.report(&err, RecoveryAction::SkippedToDeclaration);
                    self.synchronize_toplevel();
                }
            }
            if self.current == before && !self.is_at_end() {
                self.current += 1;
            }
        }

        self.warn_duplicate_names(&declarations);

        let file = SourceFile {
            package,
            imports,
            declarations,
            span: Span::new(start, self.end_location),
        };
        (file, self.diagnostics)
    }

    // Token stream primitives

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    fn peek(&self) -> Option<&LexicalToken> {
        self.tokens.get(self.current)
    }

    fn peek_next(&self) -> Option<&LexicalToken> {
        self.tokens.get(self.current + 1)
    }

    fn check(&self, token: &Token) -> bool {
        self.peek().map(|t| t.is(token)).unwrap_or(false)
    }

    fn match_token(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn advance(&mut self) -> Option<LexicalToken> {
        let token = self.tokens.get(self.current).cloned();
        if token.is_some() {
            self.current += 1;
        }
        token
    }

    fn consume(&mut self, token: &Token, expected: &str) -> ParseResult<LexicalToken> {
        if self.check(token) {
            let t = self.tokens[self.current].clone();
            self.current += 1;
            Ok(t)
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Consume an identifier, producing a dedicated error when a reserved
    /// word sits in identifier position.
    fn consume_identifier(&mut self, expected: &str) -> ParseResult<(String, Span)> {
        match self.peek() {
            Some(t) if t.is(&Token::Identifier) => {
                let name = t.lexeme().to_string();
                let span = t.span();
                self.current += 1;
                Ok((name, span))
            }
            Some(t) if RESERVED_WORDS.contains(t.lexeme()) => Err(ParseError::ReservedWord {
                word: t.lexeme().to_string(),
                location: t.location(),
            }),
            Some(t) => Err(ParseError::unexpected_token(
                expected,
                &format!("'{}'", t.lexeme()),
                t.location(),
            )),
            None => Err(ParseError::unexpected_end_of_input(
                expected,
                self.end_location,
            )),
        }
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(t) => ParseError::unexpected_token(
                expected,
                &format!("'{}'", t.lexeme()),
                t.location(),
            ),
            None => ParseError::unexpected_end_of_input(expected, self.end_location),
        }
    }

    fn current_location(&self) -> Location {
        self.peek().map(|t| t.location()).unwrap_or(self.end_location)
    }

    fn previous_end(&self) -> Location {
        if self.current == 0 {
            Location::start()
        } else {
            self.tokens[self.current - 1].span().end
        }
    }

    fn report(&mut self, err: &ParseError, recovery: RecoveryAction) {
        self.diagnostics
            .push(Diagnostic::from_parse_error(err, recovery));
    }

    // Recovery

    /// Skip ahead to the next top-level declaration keyword, respecting
    /// brace nesting so keywords inside a body are not mistaken for a new
    /// declaration. Stray closing braces at depth zero are consumed.
    fn synchronize_toplevel(&mut self) {
        let mut depth: usize = 0;
        let mut steps = 0;
        while !self.is_at_end() && steps < PARSER_MAX_SYNC_STEPS {
            steps += 1;
            let token = &self.tokens[self.current];
            match token.token_type() {
                Token::LBrace => depth += 1,
                Token::RBrace => depth = depth.saturating_sub(1),
                Token::Class | Token::Interface | Token::Enum if depth == 0 => return,
                Token::Public | Token::Protected | Token::Private | Token::Static
                | Token::Final | Token::Abstract
                    if depth == 0 =>
                {
                    return;
                }
                _ => {}
            }
            self.current += 1;
        }
    }

    /// Skip ahead to the next member boundary inside a type body: past the
    /// next ';' at nesting depth zero, or up to (not past) the closing '}'.
    fn synchronize_member(&mut self) {
        let mut depth: usize = 0;
        let mut steps = 0;
        while !self.is_at_end() && steps < PARSER_MAX_SYNC_STEPS {
            steps += 1;
            let token = &self.tokens[self.current];
            match token.token_type() {
                Token::Semicolon if depth == 0 => {
                    self.current += 1;
                    return;
                }
                Token::LBrace => depth += 1,
                Token::RBrace => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                    self.current += 1;
                    if depth == 0 {
                        return;
                    }
                    continue;
                }
                _ => {}
            }
            self.current += 1;
        }
    }

    // Package and imports

    fn parse_package_decl(&mut self) -> ParseResult<PackageDecl> {
        let start = self.current_location();
        self.consume(&Token::Package, "'package'")?;
        let name = self.parse_qualified_name()?;
        self.consume(&Token::Semicolon, "';'")?;
        Ok(PackageDecl {
            name,
            span: Span::new(start, self.previous_end()),
        })
    }

    fn parse_import_decl(&mut self) -> ParseResult<ImportDecl> {
        let start = self.current_location();
        self.consume(&Token::Import, "'import'")?;
        let is_static = self.match_token(&Token::Static);

        let (first, _) = self.consume_identifier("import path")?;
        let mut name = first;
        let mut is_wildcard = false;
        let mut iters = 0;
        while self.match_token(&Token::Dot) && iters < PARSER_MAX_LOOP_ITERS {
            iters += 1;
            if self.match_token(&Token::Star) {
                is_wildcard = true;
                break;
            }
            let (part, _) = self.consume_identifier("import path segment")?;
            name.push('.');
            name.push_str(&part);
        }

        self.consume(&Token::Semicolon, "';'")?;
        Ok(ImportDecl {
            name,
            is_static,
            is_wildcard,
            span: Span::new(start, self.previous_end()),
        })
    }

    fn parse_qualified_name(&mut self) -> ParseResult<String> {
        let (first, _) = self.consume_identifier("name")?;
        let mut name = first;
        let mut iters = 0;
        while self.check(&Token::Dot) && iters < PARSER_MAX_LOOP_ITERS {
            iters += 1;
            // Only swallow the dot when another segment follows
            match self.peek_next() {
                Some(t) if t.is(&Token::Identifier) => {
                    self.current += 1;
                    let (part, _) = self.consume_identifier("name segment")?;
                    name.push('.');
                    name.push_str(&part);
                }
                _ => break,
            }
        }
        Ok(name)
    }

    // Declarations

    fn parse_declaration(&mut self) -> ParseResult<Declaration> {
        let start = self.current_location();
        let modifiers = self.parse_modifiers();

        match self.peek().map(|t| t.token_type().clone()) {
            Some(Token::Class) => self.parse_class_decl(modifiers, start).map(Declaration::Class),
            Some(Token::Interface) => self
                .parse_interface_decl(modifiers, start)
                .map(Declaration::Interface),
            Some(Token::Enum) => self.parse_enum_decl(modifiers, start).map(Declaration::Enum),
            _ => Err(self.unexpected("'class', 'interface', or 'enum'")),
        }
    }

    fn parse_modifiers(&mut self) -> Vec<Modifier> {
        let mut modifiers = Vec::new();
        let mut iters = 0;
        while iters < PARSER_MAX_LOOP_ITERS {
            iters += 1;
            let modifier = match self.peek().map(|t| t.token_type()) {
                Some(Token::Public) => Modifier::Public,
                Some(Token::Protected) => Modifier::Protected,
                Some(Token::Private) => Modifier::Private,
                Some(Token::Static) => Modifier::Static,
                Some(Token::Final) => Modifier::Final,
                Some(Token::Abstract) => Modifier::Abstract,
                _ => break,
            };
            modifiers.push(modifier);
            self.current += 1;
        }
        modifiers
    }

    fn parse_class_decl(
        &mut self,
        modifiers: Vec<Modifier>,
        start: Location,
    ) -> ParseResult<ClassDecl> {
        self.consume(&Token::Class, "'class'")?;
        let (name, _) = self.consume_identifier("class name")?;

        let extends = if self.match_token(&Token::Extends) {
            Some(self.parse_type_ref()?)
        } else {
            None
        };

        let mut implements = Vec::new();
        if self.match_token(&Token::Implements) {
            implements.push(self.parse_type_ref()?);
            let mut iters = 0;
            while self.match_token(&Token::Comma) && iters < PARSER_MAX_LOOP_ITERS {
                iters += 1;
                implements.push(self.parse_type_ref()?);
            }
        }

        self.consume(&Token::LBrace, "'{'")?;
        let members = self.parse_class_body();

        Ok(ClassDecl {
            modifiers,
            name,
            extends,
            implements,
            members,
            span: Span::new(start, self.previous_end()),
        })
    }

    /// Members up to the closing brace. Member-level errors never abort the
    /// enclosing declaration; the stream resynchronizes at the next ';' or
    /// '}' and the loop continues.
    fn parse_class_body(&mut self) -> Vec<ClassMember> {
        let mut members = Vec::new();
        let mut iters = 0;
        while !self.is_at_end() && !self.check(&Token::RBrace) && iters < PARSER_MAX_LOOP_ITERS {
            iters += 1;
            let before = self.current;
            match self.parse_class_member() {
                Ok(member) => members.push(member),
                Err(err) => {
                    self.report(&err, RecoveryAction::SkippedToMemberBoundary);
                    self.synchronize_member();
                }
            }
            if self.current == before && !self.is_at_end() && !self.check(&Token::RBrace) {
                self.current += 1;
            }
        }
        self.close_body();
        members
    }

    fn close_body(&mut self) {
        if !self.match_token(&Token::RBrace) {
            let err = self.unexpected("'}'");
            self.report(&err, RecoveryAction::None);
        }
    }

    fn parse_class_member(&mut self) -> ParseResult<ClassMember> {
        let start = self.current_location();
        let modifiers = self.parse_modifiers();

        // Nested type declaration
        if self.check(&Token::Class) {
            return self
                .parse_class_decl(modifiers, start)
                .map(|c| ClassMember::Nested(Declaration::Class(c)));
        }
        if self.check(&Token::Interface) {
            return self
                .parse_interface_decl(modifiers, start)
                .map(|i| ClassMember::Nested(Declaration::Interface(i)));
        }
        if self.check(&Token::Enum) {
            return self
                .parse_enum_decl(modifiers, start)
                .map(|e| ClassMember::Nested(Declaration::Enum(e)));
        }

        // void can only introduce a method
        if self.match_token(&Token::Void) {
            let (name, _) = self.consume_identifier("method name")?;
            return self
                .parse_method_rest(modifiers, None, name, start, true)
                .map(ClassMember::Method);
        }

        let type_ref = self.parse_type_ref()?;
        let (name, _) = self.consume_identifier("member name")?;

        if self.check(&Token::LParen) {
            self.parse_method_rest(modifiers, Some(type_ref), name, start, true)
                .map(ClassMember::Method)
        } else {
            self.parse_field_rest(modifiers, type_ref, name, start)
                .map(ClassMember::Field)
        }
    }

    fn parse_field_rest(
        &mut self,
        modifiers: Vec<Modifier>,
        type_ref: TypeRef,
        name: String,
        start: Location,
    ) -> ParseResult<FieldSig> {
        let initializer = if self.match_token(&Token::Assign) {
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.consume(&Token::Semicolon, "';'")?;
        Ok(FieldSig {
            modifiers,
            type_ref,
            name,
            initializer,
            span: Span::new(start, self.previous_end()),
        })
    }

    /// Parameters, throws clause, and body (or terminating ';'). Shared by
    /// class and interface members; `allow_body` is false inside interfaces
    /// where methods stay abstract.
    fn parse_method_rest(
        &mut self,
        modifiers: Vec<Modifier>,
        return_type: Option<TypeRef>,
        name: String,
        start: Location,
        allow_body: bool,
    ) -> ParseResult<MethodSig> {
        self.consume(&Token::LParen, "'('")?;
        let parameters = self.parse_parameters()?;

        let mut throws = Vec::new();
        if self.match_token(&Token::Throws) {
            throws.push(self.parse_type_ref()?);
            let mut iters = 0;
            while self.match_token(&Token::Comma) && iters < PARSER_MAX_LOOP_ITERS {
                iters += 1;
                throws.push(self.parse_type_ref()?);
            }
        }

        let body = if allow_body && self.check(&Token::LBrace) {
            Some(self.parse_block()?)
        } else {
            self.consume(&Token::Semicolon, "';' or method body")?;
            None
        };

        Ok(MethodSig {
            modifiers,
            return_type,
            name,
            parameters,
            throws,
            body,
            span: Span::new(start, self.previous_end()),
        })
    }

    fn parse_parameters(&mut self) -> ParseResult<Vec<Parameter>> {
        let mut parameters = Vec::new();
        if self.match_token(&Token::RParen) {
            return Ok(parameters);
        }

        let mut iters = 0;
        loop {
            iters += 1;
            if iters > PARSER_MAX_LOOP_ITERS {
                return Err(self.unexpected("')'"));
            }
            let start = self.current_location();
            let modifiers = self.parse_modifiers();
            let type_ref = self.parse_type_ref()?;
            let (name, _) = self.consume_identifier("parameter name")?;
            parameters.push(Parameter {
                modifiers,
                type_ref,
                name,
                span: Span::new(start, self.previous_end()),
            });

            if self.match_token(&Token::Comma) {
                continue;
            }
            self.consume(&Token::RParen, "')'")?;
            return Ok(parameters);
        }
    }

    fn parse_interface_decl(
        &mut self,
        modifiers: Vec<Modifier>,
        start: Location,
    ) -> ParseResult<InterfaceDecl> {
        self.consume(&Token::Interface, "'interface'")?;
        let (name, _) = self.consume_identifier("interface name")?;

        let mut extends = Vec::new();
        if self.match_token(&Token::Extends) {
            extends.push(self.parse_type_ref()?);
            let mut iters = 0;
            while self.match_token(&Token::Comma) && iters < PARSER_MAX_LOOP_ITERS {
                iters += 1;
                extends.push(self.parse_type_ref()?);
            }
        }

        self.consume(&Token::LBrace, "'{'")?;

        let mut members = Vec::new();
        let mut iters = 0;
        while !self.is_at_end() && !self.check(&Token::RBrace) && iters < PARSER_MAX_LOOP_ITERS {
            iters += 1;
            let before = self.current;
            match self.parse_interface_member() {
                Ok(member) => members.push(member),
                Err(err) => {
                    self.report(&err, RecoveryAction::SkippedToMemberBoundary);
                    self.synchronize_member();
                }
            }
            if self.current == before && !self.is_at_end() && !self.check(&Token::RBrace) {
                self.current += 1;
            }
        }
        self.close_body();

        Ok(InterfaceDecl {
            modifiers,
            name,
            extends,
            members,
            span: Span::new(start, self.previous_end()),
        })
    }

    fn parse_interface_member(&mut self) -> ParseResult<InterfaceMember> {
        let start = self.current_location();
        let modifiers = self.parse_modifiers();

        if self.match_token(&Token::Void) {
            let (name, _) = self.consume_identifier("method name")?;
            return self
                .parse_method_rest(modifiers, None, name, start, false)
                .map(InterfaceMember::Method);
        }

        let type_ref = self.parse_type_ref()?;
        let (name, _) = self.consume_identifier("member name")?;

        if self.check(&Token::LParen) {
            self.parse_method_rest(modifiers, Some(type_ref), name, start, false)
                .map(InterfaceMember::Method)
        } else {
            self.parse_field_rest(modifiers, type_ref, name, start)
                .map(InterfaceMember::Field)
        }
    }

    fn parse_enum_decl(
        &mut self,
        modifiers: Vec<Modifier>,
        start: Location,
    ) -> ParseResult<EnumDecl> {
        self.consume(&Token::Enum, "'enum'")?;
        let (name, _) = self.consume_identifier("enum name")?;
        self.consume(&Token::LBrace, "'{'")?;

        let mut constants = Vec::new();
        let mut iters = 0;
        while !self.is_at_end() && !self.check(&Token::RBrace) && iters < PARSER_MAX_LOOP_ITERS {
            iters += 1;
            let (constant, span) = self.consume_identifier("enum constant")?;
            constants.push(EnumConstant {
                name: constant,
                span,
            });
            if self.match_token(&Token::Comma) {
                continue;
            }
            break;
        }

        // Constants may end with ';'; anything after it (constructors,
        // methods) is outside the snippet grammar and gets skipped whole.
        if self.match_token(&Token::Semicolon) && !self.check(&Token::RBrace) {
            let err = ParseError::invalid_syntax(
                "enum members beyond constants are not supported",
                self.current_location(),
            );
            self.report(&err, RecoveryAction::SkippedToMemberBoundary);
            let mut steps = 0;
            while !self.is_at_end() && !self.check(&Token::RBrace) && steps < PARSER_MAX_SYNC_STEPS
            {
                steps += 1;
                self.synchronize_member();
            }
        }
        self.close_body();

        Ok(EnumDecl {
            modifiers,
            name,
            constants,
            span: Span::new(start, self.previous_end()),
        })
    }

    // Types

    /// A possibly generic, possibly array type reference. Nested generic
    /// argument lists close one '>' at a time since the lexer never fuses
    /// consecutive closing brackets.
    fn parse_type_ref(&mut self) -> ParseResult<TypeRef> {
        let start = self.current_location();
        let name = self.parse_type_name()?;

        let mut type_args = Vec::new();
        if self.match_token(&Token::Lt) {
            // Diamond: empty argument list
            if !self.match_token(&Token::Gt) {
                type_args.push(self.parse_type_ref()?);
                let mut iters = 0;
                while self.match_token(&Token::Comma) && iters < PARSER_MAX_LOOP_ITERS {
                    iters += 1;
                    type_args.push(self.parse_type_ref()?);
                }
                self.consume(&Token::Gt, "'>'")?;
            }
        }

        let mut array_dims = 0;
        let mut iters = 0;
        while self.check(&Token::LBracket) && iters < PARSER_MAX_LOOP_ITERS {
            iters += 1;
            // '[' must pair with ']' to count as an array dimension
            match self.peek_next() {
                Some(t) if t.is(&Token::RBracket) => {
                    self.current += 2;
                    array_dims += 1;
                }
                _ => break,
            }
        }

        Ok(TypeRef {
            name,
            type_args,
            array_dims,
            span: Span::new(start, self.previous_end()),
        })
    }

    fn parse_type_name(&mut self) -> ParseResult<String> {
        match self.peek() {
            Some(t) if t.is(&Token::Identifier) => self.parse_qualified_name(),
            Some(t) if t.token_type().is_primitive_type() => {
                let name = t.lexeme().to_string();
                self.current += 1;
                Ok(name)
            }
            _ => Err(self.unexpected("type name")),
        }
    }

    /// Speculatively parse `Type name`, rewinding on failure. Diagnostics are
    /// never emitted from inside a speculation.
    fn lookahead_typed_name(&mut self) -> bool {
        let saved = self.current;
        let matched = self.parse_type_ref().is_ok() && self.check(&Token::Identifier);
        self.current = saved;
        matched
    }

    // Statements

    fn parse_block(&mut self) -> ParseResult<Block> {
        let start = self.current_location();
        self.consume(&Token::LBrace, "'{'")?;

        let mut statements = Vec::new();
        let mut iters = 0;
        while !self.is_at_end() && !self.check(&Token::RBrace) && iters < PARSER_MAX_LOOP_ITERS {
            iters += 1;
            let before = self.current;
            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    self.report(&err, RecoveryAction::RawStatement);
                    statements.push(self.raw_statement(before));
                }
            }
            if self.current == before && !self.is_at_end() && !self.check(&Token::RBrace) {
                self.current += 1;
            }
        }
        self.close_body();

        Ok(Block {
            statements,
            span: Span::new(start, self.previous_end()),
        })
    }

    fn parse_statement(&mut self) -> ParseResult<Stmt> {
        match self.peek().map(|t| t.token_type().clone()) {
            Some(Token::LBrace) => self.parse_block().map(Stmt::Block),
            Some(Token::Return) => self.parse_return_statement(),
            Some(Token::If) => self.parse_if_statement(),
            Some(Token::While) => self.parse_while_statement(),
            Some(Token::For) => self.parse_for_statement(),
            _ => {
                if self.lookahead_typed_name() {
                    self.parse_var_decl_statement()
                } else {
                    self.parse_expression_statement()
                }
            }
        }
    }

    fn parse_return_statement(&mut self) -> ParseResult<Stmt> {
        let start = self.current_location();
        self.consume(&Token::Return, "'return'")?;
        let value = if self.check(&Token::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.consume(&Token::Semicolon, "';'")?;
        Ok(Stmt::Return(ReturnStmt {
            value,
            span: Span::new(start, self.previous_end()),
        }))
    }

    fn parse_if_statement(&mut self) -> ParseResult<Stmt> {
        let start = self.current_location();
        self.consume(&Token::If, "'if'")?;
        self.consume(&Token::LParen, "'('")?;
        let condition = self.parse_expression()?;
        self.consume(&Token::RParen, "')'")?;
        let then_branch = Box::new(self.parse_statement()?);
        let else_branch = if self.match_token(&Token::Else) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };
        Ok(Stmt::If(IfStmt {
            condition,
            then_branch,
            else_branch,
            span: Span::new(start, self.previous_end()),
        }))
    }

    fn parse_while_statement(&mut self) -> ParseResult<Stmt> {
        let start = self.current_location();
        self.consume(&Token::While, "'while'")?;
        self.consume(&Token::LParen, "'('")?;
        let condition = self.parse_expression()?;
        self.consume(&Token::RParen, "')'")?;
        let body = Box::new(self.parse_statement()?);
        Ok(Stmt::While(WhileStmt {
            condition,
            body,
            span: Span::new(start, self.previous_end()),
        }))
    }

    fn parse_for_statement(&mut self) -> ParseResult<Stmt> {
        let start = self.current_location();
        self.consume(&Token::For, "'for'")?;
        self.consume(&Token::LParen, "'('")?;

        // Enhanced form: for (Type name : iterable)
        let saved = self.current;
        if let Ok(type_ref) = self.parse_type_ref() {
            if let Ok((name, _)) = self.consume_identifier("loop variable") {
                if self.match_token(&Token::Colon) {
                    let iterable = self.parse_expression()?;
                    self.consume(&Token::RParen, "')'")?;
                    let body = Box::new(self.parse_statement()?);
                    return Ok(Stmt::ForEach(ForEachStmt {
                        type_ref,
                        name,
                        iterable,
                        body,
                        span: Span::new(start, self.previous_end()),
                    }));
                }
            }
        }
        self.current = saved;

        let init = if self.match_token(&Token::Semicolon) {
            None
        } else if self.lookahead_typed_name() {
            Some(Box::new(self.parse_var_decl_statement()?))
        } else {
            Some(Box::new(self.parse_expression_statement()?))
        };

        let condition = if self.check(&Token::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.consume(&Token::Semicolon, "';'")?;

        let mut update = Vec::new();
        if !self.check(&Token::RParen) {
            update.push(self.parse_expression()?);
            let mut iters = 0;
            while self.match_token(&Token::Comma) && iters < PARSER_MAX_LOOP_ITERS {
                iters += 1;
                update.push(self.parse_expression()?);
            }
        }
        self.consume(&Token::RParen, "')'")?;

        let body = Box::new(self.parse_statement()?);
        Ok(Stmt::For(ForStmt {
            init,
            condition,
            update,
            body,
            span: Span::new(start, self.previous_end()),
        }))
    }

    fn parse_var_decl_statement(&mut self) -> ParseResult<Stmt> {
        let start = self.current_location();
        let type_ref = self.parse_type_ref()?;
        let (name, _) = self.consume_identifier("variable name")?;
        let initializer = if self.match_token(&Token::Assign) {
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.consume(&Token::Semicolon, "';'")?;
        Ok(Stmt::VarDecl(VarDeclStmt {
            type_ref,
            name,
            initializer,
            span: Span::new(start, self.previous_end()),
        }))
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Stmt> {
        let start = self.current_location();
        let expr = self.parse_expression()?;
        self.consume(&Token::Semicolon, "';'")?;
        Ok(Stmt::Expression(ExprStmt {
            expr,
            span: Span::new(start, self.previous_end()),
        }))
    }

    /// Fallback for a statement no production matched: rewind to where the
    /// statement began and keep its tokens verbatim, up to the next ';' or
    /// the enclosing '}'.
    fn raw_statement(&mut self, from: usize) -> Stmt {
        self.current = from;
        let start = self.current_location();
        let mut pieces = Vec::new();
        let mut steps = 0;
        while !self.is_at_end() && steps < PARSER_MAX_SYNC_STEPS {
            steps += 1;
            if self.check(&Token::RBrace) {
                break;
            }
            if self.check(&Token::Semicolon) {
                self.current += 1;
                break;
            }
            if let Some(token) = self.advance() {
                pieces.push(token.lexeme().to_string());
            }
        }
        let span = Span::new(start, self.previous_end());
        Stmt::Expression(ExprStmt {
            expr: Expr::Raw(RawExpr {
                text: pieces.join(" "),
                span,
            }),
            span,
        })
    }

    // Expressions, in precedence order

    fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_assignment()
    }

    fn parse_assignment(&mut self) -> ParseResult<Expr> {
        let start = self.current_location();
        let target = self.parse_or()?;
        if self.match_token(&Token::Assign) {
            let value = self.parse_assignment()?;
            let span = Span::new(start, self.previous_end());
            return Ok(Expr::Assignment(AssignmentExpr {
                target: Box::new(target),
                value: Box::new(value),
                span,
            }));
        }
        Ok(target)
    }

    fn parse_or(&mut self) -> ParseResult<Expr> {
        let start = self.current_location();
        let mut left = self.parse_and()?;
        let mut iters = 0;
        while self.match_token(&Token::PipePipe) && iters < PARSER_MAX_LOOP_ITERS {
            iters += 1;
            let right = self.parse_and()?;
            left = Expr::Binary(BinaryExpr {
                left: Box::new(left),
                operator: BinaryOp::Or,
                right: Box::new(right),
                span: Span::new(start, self.previous_end()),
            });
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> ParseResult<Expr> {
        let start = self.current_location();
        let mut left = self.parse_equality()?;
        let mut iters = 0;
        while self.match_token(&Token::AndAnd) && iters < PARSER_MAX_LOOP_ITERS {
            iters += 1;
            let right = self.parse_equality()?;
            left = Expr::Binary(BinaryExpr {
                left: Box::new(left),
                operator: BinaryOp::And,
                right: Box::new(right),
                span: Span::new(start, self.previous_end()),
            });
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> ParseResult<Expr> {
        let start = self.current_location();
        let mut left = self.parse_relational()?;
        let mut iters = 0;
        while iters < PARSER_MAX_LOOP_ITERS {
            iters += 1;
            let operator = match self.peek().map(|t| t.token_type()) {
                Some(Token::Eq) => BinaryOp::Eq,
                Some(Token::Ne) => BinaryOp::Ne,
                _ => break,
            };
            self.current += 1;
            let right = self.parse_relational()?;
            left = Expr::Binary(BinaryExpr {
                left: Box::new(left),
                operator,
                right: Box::new(right),
                span: Span::new(start, self.previous_end()),
            });
        }
        Ok(left)
    }

    fn parse_relational(&mut self) -> ParseResult<Expr> {
        let start = self.current_location();
        let mut left = self.parse_additive()?;
        let mut iters = 0;
        while iters < PARSER_MAX_LOOP_ITERS {
            iters += 1;
            let operator = match self.peek().map(|t| t.token_type()) {
                Some(Token::Lt) => BinaryOp::Lt,
                Some(Token::Le) => BinaryOp::Le,
                Some(Token::Gt) => BinaryOp::Gt,
                Some(Token::Ge) => BinaryOp::Ge,
                _ => break,
            };
            self.current += 1;
            let right = self.parse_additive()?;
            left = Expr::Binary(BinaryExpr {
                left: Box::new(left),
                operator,
                right: Box::new(right),
                span: Span::new(start, self.previous_end()),
            });
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> ParseResult<Expr> {
        let start = self.current_location();
        let mut left = self.parse_multiplicative()?;
        let mut iters = 0;
        while iters < PARSER_MAX_LOOP_ITERS {
            iters += 1;
            let operator = match self.peek().map(|t| t.token_type()) {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => break,
            };
            self.current += 1;
            let right = self.parse_multiplicative()?;
            left = Expr::Binary(BinaryExpr {
                left: Box::new(left),
                operator,
                right: Box::new(right),
                span: Span::new(start, self.previous_end()),
            });
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let start = self.current_location();
        let mut left = self.parse_unary()?;
        let mut iters = 0;
        while iters < PARSER_MAX_LOOP_ITERS {
            iters += 1;
            let operator = match self.peek().map(|t| t.token_type()) {
                Some(Token::Star) => BinaryOp::Mul,
                Some(Token::Slash) => BinaryOp::Div,
                Some(Token::Percent) => BinaryOp::Mod,
                _ => break,
            };
            self.current += 1;
            let right = self.parse_unary()?;
            left = Expr::Binary(BinaryExpr {
                left: Box::new(left),
                operator,
                right: Box::new(right),
                span: Span::new(start, self.previous_end()),
            });
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> ParseResult<Expr> {
        let start = self.current_location();
        let operator = match self.peek().map(|t| t.token_type()) {
            Some(Token::Plus) => Some(UnaryOp::Plus),
            Some(Token::Minus) => Some(UnaryOp::Minus),
            Some(Token::Bang) => Some(UnaryOp::Not),
            _ => None,
        };
        if let Some(operator) = operator {
            self.current += 1;
            let operand = self.parse_unary()?;
            return Ok(Expr::Unary(UnaryExpr {
                operator,
                operand: Box::new(operand),
                span: Span::new(start, self.previous_end()),
            }));
        }
        self.parse_postfix()
    }

    fn parse_postfix(&mut self) -> ParseResult<Expr> {
        let start = self.current_location();
        let mut expr = self.parse_primary()?;
        let mut iters = 0;
        while iters < PARSER_MAX_LOOP_ITERS {
            iters += 1;
            if self.match_token(&Token::Dot) {
                let (name, _) = self.consume_identifier("member name")?;
                if self.check(&Token::LParen) {
                    let arguments = self.parse_arguments()?;
                    expr = Expr::MethodCall(MethodCallExpr {
                        target: Some(Box::new(expr)),
                        name,
                        arguments,
                        span: Span::new(start, self.previous_end()),
                    });
                } else {
                    expr = Expr::FieldAccess(FieldAccessExpr {
                        target: Box::new(expr),
                        name,
                        span: Span::new(start, self.previous_end()),
                    });
                }
            } else if self.match_token(&Token::LBracket) {
                let index = self.parse_expression()?;
                self.consume(&Token::RBracket, "']'")?;
                expr = Expr::ArrayAccess(ArrayAccessExpr {
                    array: Box::new(expr),
                    index: Box::new(index),
                    span: Span::new(start, self.previous_end()),
                });
            } else {
                break;
            }
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let token = match self.peek() {
            Some(t) => t.clone(),
            None => {
                return Err(ParseError::unexpected_end_of_input(
                    "expression",
                    self.end_location,
                ))
            }
        };
        let start = token.location();

        match token.token_type() {
            Token::True => {
                self.current += 1;
                Ok(Expr::Literal(LiteralExpr {
                    value: Literal::Boolean(true),
                    span: token.span(),
                }))
            }
            Token::False => {
                self.current += 1;
                Ok(Expr::Literal(LiteralExpr {
                    value: Literal::Boolean(false),
                    span: token.span(),
                }))
            }
            Token::Null => {
                self.current += 1;
                Ok(Expr::Literal(LiteralExpr {
                    value: Literal::Null,
                    span: token.span(),
                }))
            }
            Token::StringLiteral => {
                self.current += 1;
                Ok(Expr::Literal(LiteralExpr {
                    value: Literal::String(strip_quotes(token.lexeme())),
                    span: token.span(),
                }))
            }
            Token::UnterminatedString => {
                // Already reported by the lexer; treat the text after the
                // opening quote as the literal's value
                self.current += 1;
                Ok(Expr::Literal(LiteralExpr {
                    value: Literal::String(token.lexeme()[1..].to_string()),
                    span: token.span(),
                }))
            }
            Token::NumberLiteral => {
                self.current += 1;
                let value = parse_number(token.lexeme(), start)?;
                Ok(Expr::Literal(LiteralExpr {
                    value,
                    span: token.span(),
                }))
            }
            Token::This | Token::Super => {
                self.current += 1;
                let name = token.lexeme().to_string();
                if self.check(&Token::LParen) {
                    let arguments = self.parse_arguments()?;
                    return Ok(Expr::MethodCall(MethodCallExpr {
                        target: None,
                        name,
                        arguments,
                        span: Span::new(start, self.previous_end()),
                    }));
                }
                Ok(Expr::Identifier(IdentifierExpr {
                    name,
                    span: token.span(),
                }))
            }
            Token::New => self.parse_new_expression(start),
            Token::LParen => {
                self.current += 1;
                let inner = self.parse_expression()?;
                self.consume(&Token::RParen, "')'")?;
                Ok(Expr::Parenthesized(Box::new(inner)))
            }
            Token::Identifier => {
                self.current += 1;
                let name = token.lexeme().to_string();
                if self.check(&Token::LParen) {
                    let arguments = self.parse_arguments()?;
                    return Ok(Expr::MethodCall(MethodCallExpr {
                        target: None,
                        name,
                        arguments,
                        span: Span::new(start, self.previous_end()),
                    }));
                }
                Ok(Expr::Identifier(IdentifierExpr {
                    name,
                    span: token.span(),
                }))
            }
            _ => Err(self.unexpected("expression")),
        }
    }

    fn parse_new_expression(&mut self, start: Location) -> ParseResult<Expr> {
        self.consume(&Token::New, "'new'")?;
        let mut target_type = self.parse_type_ref()?;

        // Array form: new T[len]
        if self.match_token(&Token::LBracket) {
            let length = self.parse_expression()?;
            self.consume(&Token::RBracket, "']'")?;
            target_type.array_dims += 1;
            return Ok(Expr::New(NewExpr {
                target_type,
                arguments: vec![length],
                span: Span::new(start, self.previous_end()),
            }));
        }

        let arguments = self.parse_arguments()?;
        Ok(Expr::New(NewExpr {
            target_type,
            arguments,
            span: Span::new(start, self.previous_end()),
        }))
    }

    fn parse_arguments(&mut self) -> ParseResult<Vec<Expr>> {
        self.consume(&Token::LParen, "'('")?;
        let mut arguments = Vec::new();
        if self.match_token(&Token::RParen) {
            return Ok(arguments);
        }
        arguments.push(self.parse_expression()?);
        let mut iters = 0;
        while self.match_token(&Token::Comma) && iters < PARSER_MAX_LOOP_ITERS {
            iters += 1;
            arguments.push(self.parse_expression()?);
        }
        self.consume(&Token::RParen, "')'")?;
        Ok(arguments)
    }

    // Post-parse checks

    /// Same-name top-level declarations both stay in the tree; the later one
    /// gets a warning.
    fn warn_duplicate_names(&mut self, declarations: &[Declaration]) {
        let mut seen: HashSet<&str> = HashSet::new();
        for declaration in declarations {
            if !seen.insert(declaration.name()) {
                self.diagnostics.push(Diagnostic::warning(
                    format!(
                        "duplicate top-level declaration '{}'",
                        declaration.name()
                    ),
                    declaration.span(),
                    RecoveryAction::None,
                ));
            }
        }
    }
}

fn strip_quotes(lexeme: &str) -> String {
    if lexeme.len() >= 2 {
        lexeme[1..lexeme.len() - 1].to_string()
    } else {
        lexeme.to_string()
    }
}

fn parse_number(lexeme: &str, location: Location) -> ParseResult<Literal> {
    if lexeme.contains('.') {
        let trimmed = lexeme.trim_end_matches(['f', 'F', 'd', 'D']);
        return trimmed
            .parse::<f64>()
            .map(Literal::Float)
            .map_err(|_| ParseError::invalid_syntax("malformed number literal", location));
    }
    if let Some(hex) = lexeme.strip_prefix("0x").or_else(|| lexeme.strip_prefix("0X")) {
        return i64::from_str_radix(hex, 16)
            .map(Literal::Integer)
            .map_err(|_| ParseError::invalid_syntax("integer literal out of range", location));
    }
    let cleaned: String = lexeme
        .trim_end_matches(['l', 'L'])
        .chars()
        .filter(|c| *c != '_')
        .collect();
    cleaned
        .parse::<i64>()
        .map(Literal::Integer)
        .map_err(|_| ParseError::invalid_syntax("integer literal out of range", location))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::AstNode;

    fn parse(source: &str) -> (SourceFile, Vec<Diagnostic>) {
        Parser::new(source).parse()
    }

    #[test]
    fn clean_class_produces_no_diagnostics() {
        let (file, diagnostics) = parse("public final class X {}");
        assert!(diagnostics.is_empty(), "{:?}", diagnostics);
        assert_eq!(file.declarations.len(), 1);
        let class = match &file.declarations[0] {
            Declaration::Class(c) => c,
            other => panic!("expected class, got {:?}", other),
        };
        assert_eq!(class.name, "X");
        assert_eq!(class.modifiers, vec![Modifier::Public, Modifier::Final]);
    }

    #[test]
    fn interface_with_multiple_extends() {
        let (file, diagnostics) = parse("interface I extends A, B, C { Thing get(); }");
        assert!(diagnostics.is_empty(), "{:?}", diagnostics);
        let interface = match &file.declarations[0] {
            Declaration::Interface(i) => i,
            other => panic!("expected interface, got {:?}", other),
        };
        assert_eq!(interface.extends.len(), 3);
        assert_eq!(interface.members.len(), 1);
        match &interface.members[0] {
            InterfaceMember::Method(m) => {
                assert_eq!(m.name, "get");
                assert!(m.body.is_none());
                assert_eq!(m.return_type.as_ref().map(|t| t.name.as_str()), Some("Thing"));
            }
            other => panic!("expected method, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_top_level_names_keep_both_and_warn() {
        let (file, diagnostics) = parse("class HelloWorld {} class HelloWorld {}");
        assert_eq!(file.declarations.len(), 2);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, crate::parser::diagnostics::Severity::Warning);
        assert!(diagnostics[0].message.contains("HelloWorld"));
    }

    #[test]
    fn dangling_bracket_recovers_at_next_declaration() {
        let (file, diagnostics) = parse("public final class First {} < interface Second {}");
        assert_eq!(file.declarations.len(), 2);
        assert_eq!(file.declarations[0].name(), "First");
        assert_eq!(file.declarations[1].name(), "Second");
        assert_eq!(diagnostics.iter().filter(|d| d.is_error()).count(), 1);
        assert_eq!(
            diagnostics[0].recovery,
            RecoveryAction::SkippedToDeclaration
        );
    }

    #[test]
    fn reserved_word_field_name_reports_and_recovers() {
        let source = "class Demo { Bool boolean; int next; }";
        let (file, diagnostics) = parse(source);
        let class = match &file.declarations[0] {
            Declaration::Class(c) => c,
            other => panic!("expected class, got {:?}", other),
        };
        // The bad field is dropped; the following one parses fine
        assert_eq!(class.members.len(), 1);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("reserved word 'boolean'"));
        assert_eq!(
            diagnostics[0].recovery,
            RecoveryAction::SkippedToMemberBoundary
        );
    }

    #[test]
    fn nested_generic_type_round_trips() {
        let source = "class Holder { String<Test<Thing<What>>>[] slot; }";
        let (file, diagnostics) = parse(source);
        assert!(diagnostics.is_empty(), "{:?}", diagnostics);
        let class = match &file.declarations[0] {
            Declaration::Class(c) => c,
            other => panic!("expected class, got {:?}", other),
        };
        let field = match &class.members[0] {
            ClassMember::Field(f) => f,
            other => panic!("expected field, got {:?}", other),
        };
        assert_eq!(field.type_ref.generic_depth(), 3);
        assert_eq!(field.type_ref.array_dims, 1);
        assert_eq!(field.type_ref.to_string(), "String<Test<Thing<What>>>[]");
    }

    #[test]
    fn empty_input_yields_empty_file() {
        let (file, diagnostics) = parse("");
        assert!(file.package.is_none());
        assert!(file.imports.is_empty());
        assert!(file.declarations.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn garbage_input_terminates_with_diagnostics() {
        let (file, diagnostics) = parse("%%% ))) {{{ ??? }}} <<<");
        assert!(file.declarations.is_empty());
        assert!(!diagnostics.is_empty());
    }

    #[test]
    fn nested_enum_inside_class() {
        let source = "class Outer { private static enum Color { RED, GREEN, BLUE } }";
        let (file, diagnostics) = parse(source);
        assert!(diagnostics.is_empty(), "{:?}", diagnostics);
        let class = match &file.declarations[0] {
            Declaration::Class(c) => c,
            other => panic!("expected class, got {:?}", other),
        };
        match &class.members[0] {
            ClassMember::Nested(Declaration::Enum(e)) => {
                assert_eq!(e.name, "Color");
                assert_eq!(e.constants.len(), 3);
                assert_eq!(e.modifiers, vec![Modifier::Private, Modifier::Static]);
            }
            other => panic!("expected nested enum, got {:?}", other),
        }
    }

    #[test]
    fn method_body_statements_parse() {
        let source = r#"
class Looper {
    void run(int limit) {
        int total = 0;
        for (int i = 0; i < limit; i = i + 1) {
            total = total + i;
        }
        if (total > 10) {
            console.log('big');
        } else {
            console.log("small");
        }
        while (total > 0) {
            total = total - 1;
        }
    }
}
"#;
        let (file, diagnostics) = parse(source);
        assert!(diagnostics.is_empty(), "{:?}", diagnostics);
        let class = match &file.declarations[0] {
            Declaration::Class(c) => c,
            other => panic!("expected class, got {:?}", other),
        };
        let method = match &class.members[0] {
            ClassMember::Method(m) => m,
            other => panic!("expected method, got {:?}", other),
        };
        let body = method.body.as_ref().unwrap();
        assert_eq!(body.statements.len(), 4);
        assert!(matches!(body.statements[0], Stmt::VarDecl(_)));
        assert!(matches!(body.statements[1], Stmt::For(_)));
        assert!(matches!(body.statements[2], Stmt::If(_)));
        assert!(matches!(body.statements[3], Stmt::While(_)));
    }

    #[test]
    fn enhanced_for_parses() {
        let source = "class C { void each(List<String> items) { for (String item : items) { use(item); } } }";
        let (file, diagnostics) = parse(source);
        assert!(diagnostics.is_empty(), "{:?}", diagnostics);
        let class = match &file.declarations[0] {
            Declaration::Class(c) => c,
            other => panic!("expected class, got {:?}", other),
        };
        let method = match &class.members[0] {
            ClassMember::Method(m) => m,
            other => panic!("expected method, got {:?}", other),
        };
        let body = method.body.as_ref().unwrap();
        match &body.statements[0] {
            Stmt::ForEach(f) => {
                assert_eq!(f.type_ref.name, "String");
                assert_eq!(f.name, "item");
            }
            other => panic!("expected for-each, got {:?}", other),
        }
    }

    #[test]
    fn unparseable_statement_kept_raw() {
        let source = "class C { void go() { ??? what ???; int x = 1; } }";
        let (file, diagnostics) = parse(source);
        let class = match &file.declarations[0] {
            Declaration::Class(c) => c,
            other => panic!("expected class, got {:?}", other),
        };
        let method = match &class.members[0] {
            ClassMember::Method(m) => m,
            other => panic!("expected method, got {:?}", other),
        };
        let body = method.body.as_ref().unwrap();
        assert_eq!(body.statements.len(), 2);
        match &body.statements[0] {
            Stmt::Expression(s) => assert!(matches!(s.expr, Expr::Raw(_))),
            other => panic!("expected raw statement, got {:?}", other),
        }
        assert!(matches!(body.statements[1], Stmt::VarDecl(_)));
        assert!(diagnostics
            .iter()
            .any(|d| d.recovery == RecoveryAction::RawStatement));
    }

    #[test]
    fn truncated_input_closes_open_bodies() {
        let (file, diagnostics) = parse("class Cut { void go() { int x = ");
        assert_eq!(file.declarations.len(), 1);
        assert!(!diagnostics.is_empty());
        assert!(diagnostics
            .iter()
            .all(|d| d.span.end.offset <= "class Cut { void go() { int x = ".len()));
    }

    #[test]
    fn package_and_imports() {
        let source = "package com.example.demo;\nimport java.util.List;\nimport static java.util.Arrays.*;\nclass D {}";
        let (file, diagnostics) = parse(source);
        assert!(diagnostics.is_empty(), "{:?}", diagnostics);
        assert_eq!(file.package.as_ref().unwrap().name, "com.example.demo");
        assert_eq!(file.imports.len(), 2);
        assert_eq!(file.imports[0].name, "java.util.List");
        assert!(!file.imports[0].is_wildcard);
        assert!(file.imports[1].is_static);
        assert!(file.imports[1].is_wildcard);
    }

    #[test]
    fn declaration_spans_cover_source_text() {
        let source = "class A {} class B {}";
        let (file, _) = parse(source);
        assert_eq!(file.declarations[0].span().source_text(source), "class A {}");
        assert_eq!(file.declarations[1].span().source_text(source), "class B {}");
    }
}
