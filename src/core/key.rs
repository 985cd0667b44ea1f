//! Key synthesis: raw key + metadata → inventory key.
//!
//! Metadata is appended as suffixes in a fixed order:
//!
//! ```text
//! <key>, count={{<var>}}, context=<ctx>, ns=<namespace>
//! ```
//!
//! This suffix grammar is part of the on-disk inventory format. `parse_key`
//! reads it back so tools can relate qualified keys to their base key.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::extract::Metadata;

const SEPARATOR: &str = ", ";

/// Build the final inventory key. `default_value` never becomes part of the key.
///
/// # Examples
///
/// ```
/// use transkit::core::extract::Metadata;
/// use transkit::core::key::synthesize;
///
/// assert_eq!(synthesize("home.title", &Metadata::default()), "home.title");
///
/// let metadata = Metadata {
///     count: Some("n".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(synthesize("x", &metadata), "x, count={{n}}");
/// ```
pub fn synthesize(raw_key: &str, metadata: &Metadata) -> String {
    let mut key = raw_key.to_string();
    if let Some(count) = &metadata.count {
        key.push_str(&format!("{}count={{{{{}}}}}", SEPARATOR, count));
    }
    if let Some(context) = &metadata.context {
        key.push_str(&format!("{}context={}", SEPARATOR, context));
    }
    if let Some(namespace) = &metadata.namespace {
        key.push_str(&format!("{}ns={}", SEPARATOR, namespace));
    }
    key
}

/// A synthesized key split back into its base key and qualifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedKey {
    pub base: String,
    pub count: Option<String>,
    pub context: Option<String>,
    pub namespace: Option<String>,
}

impl SynthesizedKey {
    pub fn is_qualified(&self) -> bool {
        self.count.is_some() || self.context.is_some() || self.namespace.is_some()
    }
}

static SUFFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // Lazy base so that trailing qualifiers are claimed by the suffix groups.
    Regex::new(
        r"(?s)^(?P<base>.*?)(?:, count=\{\{(?P<count>[^{}]*)\}\})?(?:, context=(?P<context>.*?))?(?:, ns=(?P<ns>.*))?$",
    )
    .unwrap()
});

/// Split a key produced by [`synthesize`] into its parts.
///
/// Keys without qualifiers come back as just `base`.
pub fn parse_key(key: &str) -> SynthesizedKey {
    let Some(caps) = SUFFIX_REGEX.captures(key) else {
        return SynthesizedKey {
            base: key.to_string(),
            count: None,
            context: None,
            namespace: None,
        };
    };
    let group = |name: &str| caps.name(name).map(|m| m.as_str().to_string());

    SynthesizedKey {
        base: group("base").unwrap_or_default(),
        count: group("count"),
        context: group("context"),
        namespace: group("ns"),
    }
}
