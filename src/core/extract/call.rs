//! Occurrences from translation function calls (`t("key", { count })`).

use swc_ecma_ast::{
    CallExpr, Callee, Expr, ExprOrSpread, Lit, Prop, PropName, PropOrSpread, Tpl,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::expr_path::{placeholder, placeholder_name, unwrap_parens};
use super::{Metadata, Occurrence, OccurrenceExtractor};
use crate::core::parsers::jsx::ParsedJSX;

#[derive(Debug, Clone)]
pub struct CallExtractor {
    function_names: Vec<String>,
}

impl CallExtractor {
    pub fn new(function_names: Vec<String>) -> Self {
        Self { function_names }
    }
}

impl Default for CallExtractor {
    fn default() -> Self {
        Self::new(vec!["t".to_string()])
    }
}

impl OccurrenceExtractor for CallExtractor {
    fn name(&self) -> &'static str {
        "call"
    }

    fn extract(&self, file_path: &str, parsed: &ParsedJSX) -> Vec<Occurrence> {
        let mut visitor = CallVisitor {
            function_names: &self.function_names,
            file_path,
            parsed,
            occurrences: Vec::new(),
        };
        parsed.module.visit_with(&mut visitor);
        visitor.occurrences
    }
}

struct CallVisitor<'a> {
    function_names: &'a [String],
    file_path: &'a str,
    parsed: &'a ParsedJSX,
    occurrences: Vec<Occurrence>,
}

impl CallVisitor<'_> {
    fn is_translation_fn(&self, callee: &Callee) -> bool {
        if let Callee::Expr(expr) = callee
            && let Expr::Ident(ident) = &**expr
        {
            let fn_name = ident.sym.as_str();
            return self.function_names.iter().any(|n| n == fn_name);
        }
        false
    }
}

impl Visit for CallVisitor<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if self.is_translation_fn(&node.callee)
            && let Some(first) = node.args.first()
            && let Some(raw_key) = key_from_argument(first)
            && !raw_key.is_empty()
        {
            let metadata = node
                .args
                .get(1)
                .map(metadata_from_options)
                .unwrap_or_default();
            let (line, column) = self.parsed.line_col(node.span.lo);

            self.occurrences.push(Occurrence {
                raw_key,
                metadata,
                file_path: self.file_path.to_string(),
                line,
                column,
            });
        }

        // Nested calls, e.g. t("a", { defaultValue: t("b") })
        node.visit_children_with(self);
    }
}

/// Raw key from the first call argument: a string literal or an untagged template.
fn key_from_argument(arg: &ExprOrSpread) -> Option<String> {
    if arg.spread.is_some() {
        return None;
    }
    match unwrap_parens(&arg.expr) {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(str::to_string),
        Expr::Tpl(tpl) => Some(flatten_template(tpl)),
        _ => None,
    }
}

/// Concatenate raw template chunks, replacing `${name}` / `${a.b}` slots with
/// placeholders. Unsupported slots leave no text behind.
fn flatten_template(tpl: &Tpl) -> String {
    let mut key = String::new();
    for (idx, quasi) in tpl.quasis.iter().enumerate() {
        key.push_str(&quasi.raw);
        if let Some(expr) = tpl.exprs.get(idx)
            && let Some(name) = placeholder_name(expr)
        {
            key.push_str(&placeholder(&name));
        }
    }
    key
}

/// Metadata from an options object literal passed as the second argument.
fn metadata_from_options(arg: &ExprOrSpread) -> Metadata {
    let mut metadata = Metadata::default();
    if arg.spread.is_some() {
        return metadata;
    }
    let Expr::Object(object) = unwrap_parens(&arg.expr) else {
        return metadata;
    };

    for prop in &object.props {
        let PropOrSpread::Prop(prop) = prop else {
            continue;
        };
        match &**prop {
            Prop::KeyValue(kv) => {
                if let Some(name) = prop_name(&kv.key) {
                    apply_option(&mut metadata, &name, &kv.value);
                }
            }
            // `{ count }` is `{ count: count }`
            Prop::Shorthand(ident) if ident.sym == "count" => {
                metadata.count = Some(ident.sym.to_string());
            }
            _ => {}
        }
    }

    metadata
}

fn prop_name(key: &PropName) -> Option<String> {
    match key {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => s.value.as_str().map(str::to_string),
        _ => None,
    }
}

/// Apply one option property. Values of the wrong kind are ignored.
fn apply_option(metadata: &mut Metadata, name: &str, value: &Expr) {
    let string_value = || match unwrap_parens(value) {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(str::to_string),
        _ => None,
    };

    match name {
        "count" => {
            if let Expr::Ident(ident) = unwrap_parens(value) {
                metadata.count = Some(ident.sym.to_string());
            }
        }
        "context" => {
            if let Some(s) = string_value() {
                metadata.context = Some(s);
            }
        }
        "ns" => {
            if let Some(s) = string_value() {
                metadata.namespace = Some(s);
            }
        }
        "defaultValue" => {
            if let Some(s) = string_value() {
                metadata.default_value = Some(s);
            }
        }
        _ => {}
    }
}
