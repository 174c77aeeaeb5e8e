//! Folding of bean-name expressions to string constants.
//!
//! Supported forms, recursively:
//! - string literals
//! - parenthesized expressions
//! - `+` concatenations whose operands all fold
//! - `final String` locals, fields and statically imported fields whose
//!   initializer folds (`NAME`, `Consts.NAME`, `com.acme.Consts.NAME`)
//!
//! Everything else fails the whole expression.

use rustc_hash::FxHashSet;
use tracing::trace;

use super::semantics::SyntaxSource;
use crate::base::FileId;
use crate::hir::{ClassId, DeclId, NodePtr, SymbolIndex, last_segment};
use crate::parser::{
    AstNode, Expr, FieldAccessExpr, LocalVarDecl, MethodDecl, NameRef, SyntaxKind, SyntaxNode,
    VarDeclarator,
};

/// Initializer chains deeper than this are treated as unresolvable.
const MAX_DEPTH: u32 = 32;

pub struct ConstantEvaluator<'a> {
    index: &'a dyn SymbolIndex,
    sources: &'a dyn SyntaxSource,
}

#[derive(Default)]
struct EvalState {
    /// Initializers currently being evaluated
    in_progress: FxHashSet<NodePtr>,
    depth: u32,
}

/// What a simple name refers to inside a method body.
enum LocalBinding {
    /// `final String` local with an initializer
    Constant(Expr),
    /// Parameter or non-constant local; hides any field of that name
    Opaque,
}

impl<'a> ConstantEvaluator<'a> {
    pub fn new(index: &'a dyn SymbolIndex, sources: &'a dyn SyntaxSource) -> Self {
        Self { index, sources }
    }

    /// Fold `expr`, which lives in `file`, to a string.
    pub fn evaluate(&self, file: FileId, expr: &Expr) -> Option<String> {
        self.eval(file, expr, &mut EvalState::default())
    }

    fn eval(&self, file: FileId, expr: &Expr, state: &mut EvalState) -> Option<String> {
        if state.depth >= MAX_DEPTH {
            return None;
        }
        match expr {
            Expr::Literal(lit) => lit.string_value(),
            Expr::Paren(paren) => self.eval(file, &paren.inner()?, state),
            Expr::Bin(bin) if bin.is_concat() => {
                let mut out = String::new();
                for operand in bin.flattened_operands() {
                    out.push_str(&self.eval(file, &operand?, state)?);
                }
                Some(out)
            }
            Expr::NameRef(name) => self.eval_name(file, name, state),
            Expr::FieldAccess(access) => self.eval_field_access(file, access, state),
            _ => None,
        }
    }

    fn nested(&self, file: FileId, expr: &Expr, state: &mut EvalState) -> Option<String> {
        state.depth += 1;
        let value = self.eval(file, expr, state);
        state.depth -= 1;
        value
    }

    fn eval_name(&self, file: FileId, name: &NameRef, state: &mut EvalState) -> Option<String> {
        let ident = name.text()?;
        match find_local(name.syntax(), &ident) {
            Some(LocalBinding::Constant(init)) => return self.nested(file, &init, state),
            Some(LocalBinding::Opaque) => return None,
            None => {}
        }
        let context = self.index.class_at(file, name.syntax().text_range())?;
        if let Some(field) = self.index.find_field(context, &ident) {
            return self.eval_field(field, state);
        }
        let field = self.static_import(context, &ident)?;
        self.eval_field(field, state)
    }

    fn eval_field_access(
        &self,
        file: FileId,
        access: &FieldAccessExpr,
        state: &mut EvalState,
    ) -> Option<String> {
        let mut path = access.path()?;
        let field_name = path.pop()?;
        let context = self.index.class_at(file, access.syntax().text_range())?;
        let owner = self.index.resolve_type(&path.join("."), context)?;
        let field = self.index.find_field(owner, &field_name)?;
        self.eval_field(field, state)
    }

    /// Field brought in by `import static a.B.NAME;` or `import static a.B.*;`
    fn static_import(&self, context: ClassId, name: &str) -> Option<DeclId> {
        let scope = self.index.class(context)?.scope.clone();
        for import in scope.imports.iter().filter(|i| i.is_static) {
            let owner_name = if import.is_wildcard {
                import.path.as_str()
            } else if last_segment(&import.path) == name {
                import.path.rsplit_once('.')?.0
            } else {
                continue;
            };
            let Some(owner) = self.index.class_by_qualified_name(owner_name) else {
                continue;
            };
            if let Some(field) = self.index.find_field(owner, name) {
                return Some(field);
            }
        }
        None
    }

    fn eval_field(&self, decl: DeclId, state: &mut EvalState) -> Option<String> {
        let field = self.index.field(decl)?;
        if !field.is_string_constant() {
            trace!(field = %field.name, "not a string constant");
            return None;
        }
        let ptr = field.initializer?;
        if !state.in_progress.insert(ptr) {
            trace!(field = %field.name, "cyclic constant");
            return None;
        }
        let value = self
            .sources
            .syntax_root(ptr.file)
            .and_then(|root| ptr.to_node(&root))
            .and_then(Expr::cast)
            .and_then(|init| self.nested(ptr.file, &init, state));
        state.in_progress.remove(&ptr);
        value
    }
}

/// Resolve `name` against locals and parameters visible at `node`.
fn find_local(node: &SyntaxNode, name: &str) -> Option<LocalBinding> {
    let offset = node.text_range().start();
    for ancestor in node.ancestors().skip(1) {
        match ancestor.kind() {
            SyntaxKind::CLASS_BODY => return None,
            SyntaxKind::BLOCK => {
                let found = ancestor
                    .children()
                    .filter(|stmt| stmt.text_range().end() <= offset)
                    .filter_map(LocalVarDecl::cast)
                    .filter_map(|decl| declarator_named(&decl, name).map(|d| (decl, d)))
                    .last();
                if let Some((decl, declarator)) = found {
                    return Some(local_binding(&decl, &declarator));
                }
            }
            SyntaxKind::FOR_STMT => {
                let found = ancestor
                    .children()
                    .filter(|child| child.kind() == SyntaxKind::FOR_HEADER)
                    .flat_map(|header| header.children())
                    .filter_map(LocalVarDecl::cast)
                    .find_map(|decl| declarator_named(&decl, name).map(|d| (decl, d)));
                if let Some((decl, declarator)) = found {
                    return Some(local_binding(&decl, &declarator));
                }
            }
            SyntaxKind::METHOD_DECL => {
                let method = MethodDecl::cast(ancestor.clone())?;
                if method
                    .params()
                    .any(|p| p.name().and_then(|n| n.text()).as_deref() == Some(name))
                {
                    return Some(LocalBinding::Opaque);
                }
            }
            SyntaxKind::LAMBDA_EXPR | SyntaxKind::CATCH_CLAUSE => {
                if declares_param(&ancestor, name) {
                    return Some(LocalBinding::Opaque);
                }
            }
            _ => {}
        }
    }
    None
}

fn declarator_named(decl: &LocalVarDecl, name: &str) -> Option<VarDeclarator> {
    decl.declarators()
        .find(|d| d.name().and_then(|n| n.text()).as_deref() == Some(name))
}

fn local_binding(decl: &LocalVarDecl, declarator: &VarDeclarator) -> LocalBinding {
    let string_typed = decl
        .ty()
        .is_some_and(|ty| matches!(ty.path().as_str(), "String" | "java.lang.String" | "var"));
    match declarator.initializer() {
        Some(init) if decl.is_final() && string_typed && !declarator.has_dims() => {
            LocalBinding::Constant(init)
        }
        _ => LocalBinding::Opaque,
    }
}

/// Lambda and catch parameters: `x -> ..`, `(a, b) -> ..`, `(String a) -> ..`, `catch (E e)`
fn declares_param(node: &SyntaxNode, name: &str) -> bool {
    let names_match = |n: &SyntaxNode| {
        n.descendants()
            .find(|d| d.kind() == SyntaxKind::NAME)
            .and_then(|d| d.first_token())
            .is_some_and(|t| t.text() == name)
    };
    node.children().any(|child| match child.kind() {
        SyntaxKind::NAME => names_match(&child),
        SyntaxKind::PARAM => child
            .children()
            .filter(|c| c.kind() == SyntaxKind::NAME)
            .any(|c| names_match(&c)),
        SyntaxKind::LAMBDA_PARAMS => child.children().any(|p| match p.kind() {
            SyntaxKind::NAME => names_match(&p),
            SyntaxKind::PARAM => p
                .children()
                .filter(|c| c.kind() == SyntaxKind::NAME)
                .any(|c| names_match(&c)),
            _ => false,
        }),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hir::ProjectIndex;
    use crate::parser::{AstNode, GreenNode, SourceFile, parse_java};
    use rstest::rstest;

    struct Files(Vec<GreenNode>);

    impl SyntaxSource for Files {
        fn syntax_root(&self, file: FileId) -> Option<SyntaxNode> {
            self.0.get(file.index()).cloned().map(SyntaxNode::new_root)
        }
    }

    fn setup(files: &[&str]) -> (ProjectIndex, Files) {
        let mut index = ProjectIndex::new();
        let mut greens = Vec::new();
        for (i, text) in files.iter().enumerate() {
            let parse = parse_java(text);
            let source = SourceFile::cast(parse.syntax()).unwrap();
            index.add_file(FileId::new(i as u32), &source);
            greens.push(parse.green);
        }
        (index, Files(greens))
    }

    /// Evaluate the first argument of the `bean(...)` call in file 0.
    fn eval_arg(files: &[&str]) -> Option<String> {
        let (index, sources) = setup(files);
        let root = sources.syntax_root(FileId::new(0)).unwrap();
        let call = root
            .descendants()
            .filter_map(crate::parser::MethodCallExpr::cast)
            .find(|c| c.name_text().as_deref() == Some("bean"))
            .unwrap();
        let arg = call.args().into_iter().next().unwrap();
        ConstantEvaluator::new(&index, &sources).evaluate(FileId::new(0), &arg)
    }

    fn route(field_decls: &str, body: &str) -> String {
        format!("class Route {{ {field_decls} void configure() {{ {body} }} }}")
    }

    #[rstest]
    #[case("", r#"x.bean("svc");"#, Some("svc"))]
    #[case("", r#"x.bean(("svc"));"#, Some("svc"))]
    #[case("", r#"x.bean("a" + "b" + "c");"#, Some("abc"))]
    #[case(r#"static final String CONST = "x";"#, r#"x.bean("pfx" + CONST);"#, Some("pfxx"))]
    #[case(r#"static final String CONST = other();"#, r#"x.bean("pfx" + CONST);"#, None)]
    #[case(r#"static String CONST = "x";"#, r#"x.bean(CONST);"#, None)]
    #[case(r#"static final int CONST = 1;"#, r#"x.bean(CONST);"#, None)]
    #[case(r#"static final String A = "a"; static final String B = A + A;"#, r#"x.bean(B);"#, Some("aa"))]
    #[case(r#"static final String A = B; static final String B = A;"#, r#"x.bean(A);"#, None)]
    #[case("", r#"x.bean("a" + 1);"#, None)]
    #[case("", r#"x.bean(name());"#, None)]
    #[case("", r#"final String local = "loc"; x.bean(local);"#, Some("loc"))]
    #[case("", r#"String local = "loc"; x.bean(local);"#, None)]
    #[case(r#"static final String local = "field";"#, r#"String local = "loc"; x.bean(local);"#, None)]
    #[case("", r#"x.bean(Route.NAME);"#, None)]
    fn test_evaluate(#[case] fields: &str, #[case] body: &str, #[case] expected: Option<&str>) {
        let text = route(fields, body);
        assert_eq!(eval_arg(&[&text]).as_deref(), expected);
    }

    #[test]
    fn test_qualified_constant_in_other_file() {
        let consts = "package com.acme; public class Names { public static final String ORDERS = \"order\" + \"Service\"; }";
        let text = "package com.acme.routes; import com.acme.Names; class Route { void f() { x.bean(Names.ORDERS); } }";
        assert_eq!(eval_arg(&[text, consts]).as_deref(), Some("orderService"));

        let qualified = "class Route { void f() { x.bean(com.acme.Names.ORDERS); } }";
        assert_eq!(eval_arg(&[qualified, consts]).as_deref(), Some("orderService"));
    }

    #[rstest]
    #[case("import static com.acme.Names.ORDERS;")]
    #[case("import static com.acme.Names.*;")]
    fn test_static_import(#[case] import: &str) {
        let consts = "package com.acme; public interface Names { String ORDERS = \"orders\"; }";
        let text = format!("{import} class Route {{ void f() {{ x.bean(ORDERS); }} }}");
        assert_eq!(eval_arg(&[&text, consts]).as_deref(), Some("orders"));
    }

    #[test]
    fn test_parameter_shadows_field() {
        let text = "class Route { static final String NAME = \"n\"; void f(String NAME) { x.bean(NAME); } }";
        assert_eq!(eval_arg(&[text]), None);
        let lambda = "class Route { static final String NAME = \"n\"; void f() { run(NAME -> x.bean(NAME)); } }";
        assert_eq!(eval_arg(&[lambda]), None);
    }

    #[test]
    fn test_inherited_constant() {
        let text = "class Base { protected static final String NAME = \"base\"; } class Route extends Base { void f() { x.bean(NAME + \"Svc\"); } }";
        assert_eq!(eval_arg(&[text]).as_deref(), Some("baseSvc"));
    }
}
