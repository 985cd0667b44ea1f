//! Occurrences from translation wrapper components (`<Trans>...</Trans>`).
//!
//! The key comes from a string `i18nKey` attribute when present. Otherwise the
//! element's children are flattened to text: trimmed text nodes, nested element
//! text, and `{{name}}` placeholders for `{name}` / `{a.b}` expressions, joined by
//! single spaces.
//!
//! A wrapper nested inside another wrapper contributes to the outer element's text
//! and is also reported as an occurrence of its own.

use swc_ecma_ast::{
    JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXElement, JSXElementChild, JSXElementName,
    JSXExpr, JSXOpeningElement,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::expr_path::{placeholder, placeholder_name};
use super::{Metadata, Occurrence, OccurrenceExtractor};
use crate::core::parsers::jsx::ParsedJSX;

/// Attribute carrying an explicit translation key.
pub const KEY_ATTRIBUTE: &str = "i18nKey";

#[derive(Debug, Clone)]
pub struct ComponentExtractor {
    component_names: Vec<String>,
}

impl ComponentExtractor {
    pub fn new(component_names: Vec<String>) -> Self {
        Self { component_names }
    }
}

impl Default for ComponentExtractor {
    fn default() -> Self {
        Self::new(vec!["Trans".to_string()])
    }
}

impl OccurrenceExtractor for ComponentExtractor {
    fn name(&self) -> &'static str {
        "component"
    }

    fn extract(&self, file_path: &str, parsed: &ParsedJSX) -> Vec<Occurrence> {
        let mut visitor = ComponentVisitor {
            component_names: &self.component_names,
            file_path,
            parsed,
            occurrences: Vec::new(),
        };
        parsed.module.visit_with(&mut visitor);
        visitor.occurrences
    }
}

struct ComponentVisitor<'a> {
    component_names: &'a [String],
    file_path: &'a str,
    parsed: &'a ParsedJSX,
    occurrences: Vec<Occurrence>,
}

impl ComponentVisitor<'_> {
    fn is_wrapper(&self, name: &JSXElementName) -> bool {
        match name {
            JSXElementName::Ident(ident) => self
                .component_names
                .iter()
                .any(|n| n.as_str() == ident.sym.as_str()),
            _ => false,
        }
    }
}

impl Visit for ComponentVisitor<'_> {
    fn visit_jsx_element(&mut self, node: &JSXElement) {
        if self.is_wrapper(&node.opening.name) {
            let raw_key = explicit_key(&node.opening).unwrap_or_else(|| flatten_children(&node.children));

            if !raw_key.is_empty() {
                let (line, column) = self.parsed.line_col(node.span.lo);
                self.occurrences.push(Occurrence {
                    raw_key,
                    metadata: Metadata::default(),
                    file_path: self.file_path.to_string(),
                    line,
                    column,
                });
            }
        }

        node.visit_children_with(self);
    }
}

/// Value of a string-literal `i18nKey` attribute.
///
/// `i18nKey={expr}` does not count as explicit; the children are flattened instead.
fn explicit_key(opening: &JSXOpeningElement) -> Option<String> {
    opening.attrs.iter().find_map(|attr| {
        let JSXAttrOrSpread::JSXAttr(attr) = attr else {
            return None;
        };
        let JSXAttrName::Ident(name) = &attr.name else {
            return None;
        };
        if name.sym != KEY_ATTRIBUTE {
            return None;
        }
        match &attr.value {
            Some(JSXAttrValue::Str(s)) => s.value.as_str().map(str::to_string),
            _ => None,
        }
    })
}

/// Flatten element children into key text.
fn flatten_children(children: &[JSXElementChild]) -> String {
    let mut fragments: Vec<String> = Vec::new();

    for child in children {
        let fragment = match child {
            JSXElementChild::JSXText(text) => text.value.trim().to_string(),
            JSXElementChild::JSXElement(element) => flatten_children(&element.children),
            JSXElementChild::JSXFragment(fragment) => flatten_children(&fragment.children),
            JSXElementChild::JSXExprContainer(container) => match &container.expr {
                JSXExpr::Expr(expr) => placeholder_name(expr)
                    .map(|name| placeholder(&name))
                    .unwrap_or_default(),
                _ => String::new(),
            },
            _ => String::new(),
        };

        if !fragment.is_empty() {
            fragments.push(fragment);
        }
    }

    fragments.join(" ")
}
