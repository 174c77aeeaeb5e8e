//! Recognition of `<expr>.bean(arg0[, arg1])` call sites.

use crate::parser::{
    AstNode, ClassLiteral, Expr, Literal, MethodCallExpr, SyntaxKind, SyntaxNode,
};

use super::conventions::BeanConventions;

/// First argument of a recognized call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg0 {
    StringLiteral(Literal),
    ClassLiteral(ClassLiteral),
    /// Anything else; may still fold to a string constant
    Other(Expr),
}

/// Second argument of a recognized call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg1 {
    StringLiteral(Literal),
    Other(Expr),
}

/// A call expression whose simple name is the recognized call name and
/// which has one or two arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub call: MethodCallExpr,
    pub arg0: Arg0,
    pub arg1: Option<Arg1>,
}

impl CallSite {
    pub fn arg0_expr(&self) -> &SyntaxNode {
        match &self.arg0 {
            Arg0::StringLiteral(lit) => lit.syntax(),
            Arg0::ClassLiteral(class) => class.syntax(),
            Arg0::Other(expr) => expr.syntax(),
        }
    }

    pub fn arg1_expr(&self) -> Option<&SyntaxNode> {
        self.arg1.as_ref().map(|arg| match arg {
            Arg1::StringLiteral(lit) => lit.syntax(),
            Arg1::Other(expr) => expr.syntax(),
        })
    }

    /// String literal passed as the first argument
    pub fn arg0_literal(&self) -> Option<&Literal> {
        match &self.arg0 {
            Arg0::StringLiteral(lit) => Some(lit),
            _ => None,
        }
    }

    /// String literal passed as the second argument
    pub fn arg1_literal(&self) -> Option<&Literal> {
        match &self.arg1 {
            Some(Arg1::StringLiteral(lit)) => Some(lit),
            _ => None,
        }
    }

    /// Index of the argument that is `node` or contains it
    pub fn argument_index(&self, node: &SyntaxNode) -> Option<usize> {
        let range = node.text_range();
        if self.arg0_expr().text_range().contains_range(range) {
            return Some(0);
        }
        self.arg1_expr()
            .filter(|arg| arg.text_range().contains_range(range))
            .map(|_| 1)
    }
}

/// Find the nearest call enclosing `node` (or `node` itself) and classify
/// its arguments. `None` unless that call has the recognized name.
pub fn detect(node: &SyntaxNode, conventions: &BeanConventions) -> Option<CallSite> {
    let call = node.ancestors().find_map(MethodCallExpr::cast)?;
    if call.name_text()? != conventions.call_name.as_str() {
        return None;
    }
    let mut args = call.args().into_iter();
    let arg0 = match args.next()? {
        Expr::Literal(lit) if lit.is_string() => Arg0::StringLiteral(lit),
        Expr::ClassLiteral(class) => Arg0::ClassLiteral(class),
        other => Arg0::Other(other),
    };
    let arg1 = args.next().map(|expr| match expr {
        Expr::Literal(lit) if lit.is_string() => Arg1::StringLiteral(lit),
        other => Arg1::Other(other),
    });
    if args.next().is_some() {
        return None;
    }
    Some(CallSite { call, arg0, arg1 })
}

/// `node` is a string literal passed directly as an argument of a recognized call.
pub fn is_string_argument_of_recognized_call(
    node: &SyntaxNode,
    conventions: &BeanConventions,
) -> bool {
    literal_argument_index(node, conventions).is_some()
}

pub fn is_arg0(node: &SyntaxNode, conventions: &BeanConventions) -> bool {
    literal_argument_index(node, conventions) == Some(0)
}

pub fn is_arg1(node: &SyntaxNode, conventions: &BeanConventions) -> bool {
    literal_argument_index(node, conventions) == Some(1)
}

fn literal_argument_index(node: &SyntaxNode, conventions: &BeanConventions) -> Option<usize> {
    if node.kind() != SyntaxKind::LITERAL || !Literal::cast(node.clone())?.is_string() {
        return None;
    }
    // the literal must be the argument itself, not nested inside one
    if node.parent()?.kind() != SyntaxKind::ARG_LIST {
        return None;
    }
    let site = detect(node, conventions)?;
    if site.arg0_expr() == node {
        Some(0)
    } else if site.arg1_expr() == Some(node) {
        Some(1)
    } else {
        None
    }
}
