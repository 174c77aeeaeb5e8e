//! Typed AST wrappers over the untyped rowan CST.
//!
//! This module provides strongly-typed accessors for the Java syntax nodes
//! the declaration model and the bean-reference engine navigate.
//! Each struct wraps a SyntaxNode and provides methods to access children.

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

fn tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens().filter_map(|e| e.into_token())
}

fn has_token(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    tokens(node).any(|t| t.kind() == kind)
}

fn ident_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    tokens(node).find(|t| t.kind() == SyntaxKind::IDENT)
}

/// Node text with trivia removed (`com . x . Foo` becomes `com.x.Foo`).
fn compact_text(node: &SyntaxNode) -> String {
    node.descendants_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(|t| !t.kind().is_trivia())
        .map(|t| t.text().to_string())
        .collect()
}

// ============================================================================
// Source File
// ============================================================================

ast_node!(SourceFile, SOURCE_FILE);

impl SourceFile {
    pub fn package(&self) -> Option<PackageDecl> {
        self.0.children().find_map(PackageDecl::cast)
    }

    pub fn imports(&self) -> impl Iterator<Item = ImportDecl> + '_ {
        self.0.children().filter_map(ImportDecl::cast)
    }

    /// Top-level type declarations
    pub fn classes(&self) -> impl Iterator<Item = ClassDecl> + '_ {
        self.0.children().filter_map(ClassDecl::cast)
    }
}

ast_node!(PackageDecl, PACKAGE_DECL);

impl PackageDecl {
    pub fn name(&self) -> Option<QualifiedName> {
        self.0.children().find_map(QualifiedName::cast)
    }
}

ast_node!(ImportDecl, IMPORT_DECL);

impl ImportDecl {
    /// Get the qualified name being imported
    pub fn target(&self) -> Option<QualifiedName> {
        self.0.children().find_map(QualifiedName::cast)
    }

    pub fn is_static(&self) -> bool {
        has_token(&self.0, SyntaxKind::STATIC_KW)
    }

    /// Check if this is an on-demand import (`.*`)
    pub fn is_wildcard(&self) -> bool {
        has_token(&self.0, SyntaxKind::STAR)
    }
}

// ============================================================================
// Names
// ============================================================================

ast_node!(Name, NAME);

impl Name {
    pub fn ident(&self) -> Option<SyntaxToken> {
        ident_token(&self.0)
    }

    pub fn text(&self) -> Option<String> {
        self.ident().map(|t| t.text().to_string())
    }
}

ast_node!(QualifiedName, QUALIFIED_NAME);

impl QualifiedName {
    /// Get all name segments
    pub fn segments(&self) -> Vec<String> {
        tokens(&self.0)
            .filter(|t| t.kind() == SyntaxKind::IDENT)
            .map(|t| t.text().to_string())
            .collect()
    }

    /// Dotted form, e.g. `org.example.Service`
    pub fn to_dotted(&self) -> String {
        self.segments().join(".")
    }

    pub fn last_segment(&self) -> Option<String> {
        tokens(&self.0)
            .filter(|t| t.kind() == SyntaxKind::IDENT)
            .last()
            .map(|t| t.text().to_string())
    }
}

// ============================================================================
// Type declarations
// ============================================================================

/// What kind of type a `ClassDecl` declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
}

ast_node!(ClassDecl, CLASS_DECL);

impl ClassDecl {
    pub fn kind(&self) -> ClassKind {
        let mut saw_at = false;
        for token in tokens(&self.0) {
            match token.kind() {
                SyntaxKind::AT => saw_at = true,
                SyntaxKind::INTERFACE_KW if saw_at => return ClassKind::Annotation,
                SyntaxKind::INTERFACE_KW => return ClassKind::Interface,
                SyntaxKind::ENUM_KW => return ClassKind::Enum,
                SyntaxKind::RECORD_KW => return ClassKind::Record,
                SyntaxKind::CLASS_KW => return ClassKind::Class,
                _ => {}
            }
        }
        ClassKind::Class
    }

    pub fn modifiers(&self) -> Option<Modifiers> {
        self.0.children().find_map(Modifiers::cast)
    }

    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }

    pub fn extends(&self) -> impl Iterator<Item = TypeRef> + '_ {
        self.0
            .children()
            .filter(|n| n.kind() == SyntaxKind::EXTENDS_CLAUSE)
            .flat_map(|n| n.children().filter_map(TypeRef::cast).collect::<Vec<_>>())
    }

    pub fn implements(&self) -> impl Iterator<Item = TypeRef> + '_ {
        self.0
            .children()
            .filter(|n| n.kind() == SyntaxKind::IMPLEMENTS_CLAUSE)
            .flat_map(|n| n.children().filter_map(TypeRef::cast).collect::<Vec<_>>())
    }

    /// Record components (`record Point(int x, int y)`)
    pub fn record_components(&self) -> impl Iterator<Item = Param> + '_ {
        self.0
            .children()
            .filter(|n| n.kind() == SyntaxKind::PARAM_LIST)
            .flat_map(|n| n.children().filter_map(Param::cast).collect::<Vec<_>>())
    }

    pub fn body(&self) -> Option<SyntaxNode> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::CLASS_BODY)
    }

    pub fn members(&self) -> impl Iterator<Item = ClassMember> + '_ {
        self.body()
            .into_iter()
            .flat_map(|body| body.children().filter_map(ClassMember::cast).collect::<Vec<_>>())
    }

    pub fn methods(&self) -> impl Iterator<Item = MethodDecl> + '_ {
        self.members().filter_map(|m| match m {
            ClassMember::Method(method) => Some(method),
            _ => None,
        })
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldDecl> + '_ {
        self.members().filter_map(|m| match m {
            ClassMember::Field(field) => Some(field),
            _ => None,
        })
    }

    pub fn nested_classes(&self) -> impl Iterator<Item = ClassDecl> + '_ {
        self.members().filter_map(|m| match m {
            ClassMember::Class(class) => Some(class),
            _ => None,
        })
    }

    pub fn enum_constants(&self) -> impl Iterator<Item = Name> + '_ {
        self.body().into_iter().flat_map(|body| {
            body.children()
                .filter(|n| n.kind() == SyntaxKind::ENUM_CONSTANT)
                .filter_map(|n| n.children().find_map(Name::cast))
                .collect::<Vec<_>>()
        })
    }
}

/// A member of a class body
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassMember {
    Class(ClassDecl),
    Method(MethodDecl),
    Field(FieldDecl),
}

impl AstNode for ClassMember {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::CLASS_DECL | SyntaxKind::METHOD_DECL | SyntaxKind::FIELD_DECL
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::CLASS_DECL => Some(Self::Class(ClassDecl(node))),
            SyntaxKind::METHOD_DECL => Some(Self::Method(MethodDecl(node))),
            SyntaxKind::FIELD_DECL => Some(Self::Field(FieldDecl(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Class(n) => n.syntax(),
            Self::Method(n) => n.syntax(),
            Self::Field(n) => n.syntax(),
        }
    }
}

// ============================================================================
// Modifiers and annotations
// ============================================================================

ast_node!(Modifiers, MODIFIERS);

impl Modifiers {
    pub fn annotations(&self) -> impl Iterator<Item = Annotation> + '_ {
        self.0.children().filter_map(Annotation::cast)
    }

    pub fn has(&self, kind: SyntaxKind) -> bool {
        has_token(&self.0, kind)
    }

    pub fn is_public(&self) -> bool {
        self.has(SyntaxKind::PUBLIC_KW)
    }

    pub fn is_static(&self) -> bool {
        self.has(SyntaxKind::STATIC_KW)
    }

    pub fn is_final(&self) -> bool {
        self.has(SyntaxKind::FINAL_KW)
    }
}

ast_node!(Annotation, ANNOTATION);

impl Annotation {
    pub fn name(&self) -> Option<QualifiedName> {
        self.0.children().find_map(QualifiedName::cast)
    }

    pub fn args(&self) -> impl Iterator<Item = AnnotationArg> + '_ {
        self.0
            .children()
            .filter(|n| n.kind() == SyntaxKind::ANNOTATION_ARG_LIST)
            .flat_map(|n| n.children().filter_map(AnnotationArg::cast).collect::<Vec<_>>())
    }
}

ast_node!(AnnotationArg, ANNOTATION_ARG);

impl AnnotationArg {
    /// Attribute name; `None` for the single-element shorthand `@A("v")`
    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }

    pub fn value(&self) -> Option<AnnotationValue> {
        self.0.children().find_map(AnnotationValue::cast)
    }
}

/// The value of an annotation attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationValue {
    Expr(Expr),
    Array(SyntaxNode),
    Annotation(Annotation),
}

impl AnnotationValue {
    /// Element values of an array initializer, or the value itself
    pub fn elements(&self) -> Vec<AnnotationValue> {
        match self {
            Self::Array(node) => node.children().filter_map(AnnotationValue::cast).collect(),
            other => vec![other.clone()],
        }
    }
}

impl AstNode for AnnotationValue {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind == SyntaxKind::ANNOTATION_ARRAY
            || kind == SyntaxKind::ANNOTATION
            || Expr::can_cast(kind)
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::ANNOTATION_ARRAY => Some(Self::Array(node)),
            SyntaxKind::ANNOTATION => Some(Self::Annotation(Annotation(node))),
            _ => Expr::cast(node).map(Self::Expr),
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Expr(e) => e.syntax(),
            Self::Array(n) => n,
            Self::Annotation(a) => a.syntax(),
        }
    }
}

// ============================================================================
// Members
// ============================================================================

ast_node!(MethodDecl, METHOD_DECL);

impl MethodDecl {
    pub fn modifiers(&self) -> Option<Modifiers> {
        self.0.children().find_map(Modifiers::cast)
    }

    /// Declared return type; `None` for constructors
    pub fn return_type(&self) -> Option<TypeRef> {
        self.0.children().find_map(TypeRef::cast)
    }

    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }

    pub fn is_constructor(&self) -> bool {
        self.return_type().is_none()
    }

    pub fn params(&self) -> impl Iterator<Item = Param> + '_ {
        self.0
            .children()
            .filter(|n| n.kind() == SyntaxKind::PARAM_LIST)
            .flat_map(|n| n.children().filter_map(Param::cast).collect::<Vec<_>>())
    }

    pub fn body(&self) -> Option<SyntaxNode> {
        self.0.children().find(|n| n.kind() == SyntaxKind::BLOCK)
    }
}

ast_node!(Param, PARAM);

impl Param {
    pub fn ty(&self) -> Option<TypeRef> {
        self.0.children().find_map(TypeRef::cast)
    }

    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }
}

ast_node!(FieldDecl, FIELD_DECL);

impl FieldDecl {
    pub fn modifiers(&self) -> Option<Modifiers> {
        self.0.children().find_map(Modifiers::cast)
    }

    pub fn ty(&self) -> Option<TypeRef> {
        self.0.children().find_map(TypeRef::cast)
    }

    pub fn declarators(&self) -> impl Iterator<Item = VarDeclarator> + '_ {
        self.0.children().filter_map(VarDeclarator::cast)
    }
}

ast_node!(VarDeclarator, VAR_DECLARATOR);

impl VarDeclarator {
    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }

    /// Declared with extra dimensions (`String names[]`)
    pub fn has_dims(&self) -> bool {
        has_token(&self.0, SyntaxKind::L_BRACKET)
    }

    pub fn initializer(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

ast_node!(LocalVarDecl, LOCAL_VAR_DECL);

impl LocalVarDecl {
    pub fn modifiers(&self) -> Option<Modifiers> {
        self.0.children().find_map(Modifiers::cast)
    }

    pub fn is_final(&self) -> bool {
        self.modifiers().is_some_and(|m| m.is_final())
    }

    pub fn ty(&self) -> Option<TypeRef> {
        self.0.children().find_map(TypeRef::cast)
    }

    pub fn declarators(&self) -> impl Iterator<Item = VarDeclarator> + '_ {
        self.0.children().filter_map(VarDeclarator::cast)
    }
}

// ============================================================================
// Types
// ============================================================================

ast_node!(TypeRef, TYPE_REF);

impl TypeRef {
    /// Dotted name without type arguments (`java.util.Map` for `java.util.Map<K, V>`)
    pub fn path(&self) -> String {
        let mut path = String::new();
        for token in tokens(&self.0) {
            match token.kind() {
                SyntaxKind::IDENT => path.push_str(token.text()),
                SyntaxKind::DOT => path.push('.'),
                kind if kind.is_primitive_type() => path.push_str(token.text()),
                _ => {}
            }
        }
        path
    }

    /// Last segment of the path
    pub fn simple_name(&self) -> String {
        let path = self.path();
        match path.rsplit_once('.') {
            Some((_, last)) => last.to_string(),
            None => path,
        }
    }

    pub fn is_array(&self) -> bool {
        has_token(&self.0, SyntaxKind::L_BRACKET)
    }

    pub fn is_primitive(&self) -> bool {
        tokens(&self.0).any(|t| t.kind().is_primitive_type())
    }

    pub fn type_args(&self) -> impl Iterator<Item = TypeRef> + '_ {
        self.0
            .children()
            .filter(|n| n.kind() == SyntaxKind::TYPE_ARGS)
            .flat_map(|n| n.children().filter_map(TypeRef::cast).collect::<Vec<_>>())
    }
}

// ============================================================================
// Expressions
// ============================================================================

/// Any expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Literal(Literal),
    NameRef(NameRef),
    FieldAccess(FieldAccessExpr),
    MethodCall(MethodCallExpr),
    ClassLiteral(ClassLiteral),
    Bin(BinExpr),
    Paren(ParenExpr),
    /// Expressions the engine never looks inside (`new`, lambdas, casts...)
    Other(SyntaxNode),
}

impl AstNode for Expr {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::LITERAL
                | SyntaxKind::NAME_REF
                | SyntaxKind::THIS_EXPR
                | SyntaxKind::SUPER_EXPR
                | SyntaxKind::FIELD_ACCESS_EXPR
                | SyntaxKind::METHOD_CALL_EXPR
                | SyntaxKind::CLASS_LITERAL
                | SyntaxKind::NEW_EXPR
                | SyntaxKind::ARRAY_INIT
                | SyntaxKind::CAST_EXPR
                | SyntaxKind::LAMBDA_EXPR
                | SyntaxKind::METHOD_REF_EXPR
                | SyntaxKind::PAREN_EXPR
                | SyntaxKind::PREFIX_EXPR
                | SyntaxKind::POSTFIX_EXPR
                | SyntaxKind::BIN_EXPR
                | SyntaxKind::INSTANCEOF_EXPR
                | SyntaxKind::CONDITIONAL_EXPR
                | SyntaxKind::ASSIGN_EXPR
                | SyntaxKind::INDEX_EXPR
                | SyntaxKind::SWITCH_STMT
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        if !Self::can_cast(node.kind()) {
            return None;
        }
        Some(match node.kind() {
            SyntaxKind::LITERAL => Self::Literal(Literal(node)),
            SyntaxKind::NAME_REF => Self::NameRef(NameRef(node)),
            SyntaxKind::FIELD_ACCESS_EXPR => Self::FieldAccess(FieldAccessExpr(node)),
            SyntaxKind::METHOD_CALL_EXPR => Self::MethodCall(MethodCallExpr(node)),
            SyntaxKind::CLASS_LITERAL => Self::ClassLiteral(ClassLiteral(node)),
            SyntaxKind::BIN_EXPR => Self::Bin(BinExpr(node)),
            SyntaxKind::PAREN_EXPR => Self::Paren(ParenExpr(node)),
            _ => Self::Other(node),
        })
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Literal(n) => n.syntax(),
            Self::NameRef(n) => n.syntax(),
            Self::FieldAccess(n) => n.syntax(),
            Self::MethodCall(n) => n.syntax(),
            Self::ClassLiteral(n) => n.syntax(),
            Self::Bin(n) => n.syntax(),
            Self::Paren(n) => n.syntax(),
            Self::Other(n) => n,
        }
    }
}

/// Kind of a literal token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    String,
    Char,
    Int,
    Float,
    Bool,
    Null,
}

ast_node!(Literal, LITERAL);

impl Literal {
    pub fn token(&self) -> Option<SyntaxToken> {
        tokens(&self.0).find(|t| t.kind().is_literal())
    }

    pub fn kind(&self) -> Option<LiteralKind> {
        let kind = match self.token()?.kind() {
            SyntaxKind::STRING => LiteralKind::String,
            SyntaxKind::CHAR => LiteralKind::Char,
            SyntaxKind::INT_NUMBER => LiteralKind::Int,
            SyntaxKind::FLOAT_NUMBER => LiteralKind::Float,
            SyntaxKind::TRUE_KW | SyntaxKind::FALSE_KW => LiteralKind::Bool,
            _ => LiteralKind::Null,
        };
        Some(kind)
    }

    pub fn is_string(&self) -> bool {
        self.kind() == Some(LiteralKind::String)
    }

    /// Raw source text including the delimiters
    pub fn raw_text(&self) -> String {
        self.token().map(|t| t.text().to_string()).unwrap_or_default()
    }

    /// The unescaped value of a string literal
    pub fn string_value(&self) -> Option<String> {
        if !self.is_string() {
            return None;
        }
        let raw = self.raw_text();
        let inner = raw.strip_prefix('"')?;
        let inner = inner.strip_suffix('"').unwrap_or(inner);
        Some(unescape(inner))
    }
}

/// Resolve Java escape sequences. Malformed escapes are kept verbatim.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('n') => {
                chars.next();
                out.push('\n');
            }
            Some('t') => {
                chars.next();
                out.push('\t');
            }
            Some('b') => {
                chars.next();
                out.push('\u{8}');
            }
            Some('f') => {
                chars.next();
                out.push('\u{c}');
            }
            Some('r') => {
                chars.next();
                out.push('\r');
            }
            Some('s') => {
                chars.next();
                out.push(' ');
            }
            Some(q @ ('"' | '\'' | '\\')) => {
                chars.next();
                out.push(q);
            }
            Some('u') => {
                while chars.peek() == Some(&'u') {
                    chars.next();
                }
                let hex: String = chars.clone().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if hex.len() == 4 => {
                        for _ in 0..4 {
                            chars.next();
                        }
                        out.push(decoded);
                    }
                    _ => out.push_str("\\u"),
                }
            }
            Some(d @ '0'..='7') => {
                // up to three octal digits, max \377
                let max_len = if d <= '3' { 3 } else { 2 };
                let mut value = 0u32;
                let mut len = 0;
                while len < max_len {
                    match chars.peek().and_then(|c| c.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                            len += 1;
                        }
                        None => break,
                    }
                }
                out.extend(char::from_u32(value));
            }
            _ => out.push('\\'),
        }
    }
    out
}

ast_node!(NameRef, NAME_REF);

impl NameRef {
    pub fn ident(&self) -> Option<SyntaxToken> {
        ident_token(&self.0)
    }

    pub fn text(&self) -> Option<String> {
        self.ident().map(|t| t.text().to_string())
    }
}

ast_node!(FieldAccessExpr, FIELD_ACCESS_EXPR);

impl FieldAccessExpr {
    pub fn receiver(&self) -> Option<Expr> {
        self.0.children().next().and_then(Expr::cast)
    }

    pub fn name_ref(&self) -> Option<NameRef> {
        self.0.children().skip(1).find_map(NameRef::cast)
    }

    /// Dotted path when the receiver chain is made of plain names (`a.b.C`)
    pub fn path(&self) -> Option<Vec<String>> {
        let mut segments = match self.receiver()? {
            Expr::NameRef(name) => vec![name.text()?],
            Expr::FieldAccess(inner) => inner.path()?,
            _ => return None,
        };
        segments.push(self.name_ref()?.text()?);
        Some(segments)
    }
}

ast_node!(MethodCallExpr, METHOD_CALL_EXPR);

impl MethodCallExpr {
    /// The receiver expression, if the call is qualified (`recv.name(...)`)
    pub fn receiver(&self) -> Option<Expr> {
        if !has_token(&self.0, SyntaxKind::DOT) {
            return None;
        }
        self.0.children().next().and_then(Expr::cast)
    }

    /// The called method's name (the last `NameRef` child)
    pub fn name_ref(&self) -> Option<NameRef> {
        self.0.children().filter_map(NameRef::cast).last()
    }

    pub fn name_text(&self) -> Option<String> {
        self.name_ref()?.text()
    }

    pub fn arg_list(&self) -> Option<ArgList> {
        self.0.children().find_map(ArgList::cast)
    }

    pub fn args(&self) -> Vec<Expr> {
        self.arg_list().map(|list| list.args().collect()).unwrap_or_default()
    }
}

ast_node!(ArgList, ARG_LIST);

impl ArgList {
    pub fn args(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

ast_node!(ClassLiteral, CLASS_LITERAL);

impl ClassLiteral {
    /// The type part of `T.class`, trivia removed (`com.x.T`, `int`, `T[]`)
    pub fn type_text(&self) -> Option<String> {
        self.0.children().next().map(|n| compact_text(&n))
    }
}

ast_node!(BinExpr, BIN_EXPR);

impl BinExpr {
    pub fn lhs(&self) -> Option<Expr> {
        self.0.children().next().and_then(Expr::cast)
    }

    pub fn rhs(&self) -> Option<Expr> {
        self.0.children().nth(1).and_then(Expr::cast)
    }

    pub fn op_kind(&self) -> Option<SyntaxKind> {
        tokens(&self.0).map(|t| t.kind()).find(|k| !k.is_trivia())
    }

    pub fn is_concat(&self) -> bool {
        self.op_kind() == Some(SyntaxKind::PLUS)
    }

    /// Operands of a left-nested chain of the same operator, in source order
    pub fn flattened_operands(&self) -> Vec<Option<Expr>> {
        let op = self.op_kind();
        let mut operands = match self.lhs() {
            Some(Expr::Bin(inner)) if inner.op_kind() == op => inner.flattened_operands(),
            lhs => vec![lhs],
        };
        operands.push(self.rhs());
        operands
    }
}

ast_node!(ParenExpr, PAREN_EXPR);

impl ParenExpr {
    pub fn inner(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}
