//! Placeholder names for interpolated expressions.
//!
//! Both extractors turn an embedded expression into an i18next placeholder
//! (`{{name}}`). Only identifiers and dotted property-access chains have a name;
//! every other expression kind yields `None` and contributes nothing.

use swc_ecma_ast::{Expr, MemberExpr, MemberProp};

/// Strip any number of wrapping parentheses.
pub fn unwrap_parens(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_parens(&paren.expr),
        _ => expr,
    }
}

/// Placeholder name of an expression: `name` or `a.b.c`.
pub fn placeholder_name(expr: &Expr) -> Option<String> {
    match unwrap_parens(expr) {
        Expr::Ident(ident) => Some(ident.sym.to_string()),
        Expr::Member(member) => member_path(member),
        _ => None,
    }
}

/// Dotted path of a property-access chain, innermost object first.
///
/// Computed (`a[b]`) and private (`a.#b`) accesses are unsupported.
fn member_path(member: &MemberExpr) -> Option<String> {
    let MemberProp::Ident(prop) = &member.prop else {
        return None;
    };
    let object = match unwrap_parens(&member.obj) {
        Expr::Ident(ident) => ident.sym.to_string(),
        Expr::Member(inner) => member_path(inner)?,
        _ => return None,
    };
    Some(format!("{}.{}", object, prop.sym))
}

/// Render a placeholder token: `name` → `{{name}}`.
pub fn placeholder(name: &str) -> String {
    format!("{{{{{}}}}}", name)
}
