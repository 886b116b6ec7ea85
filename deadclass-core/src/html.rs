//! Class reference extraction from HTML document text.
//!
//! Finds every `class="..."` / `class='...'` attribute value and registers
//! each whitespace-separated token against the enclosing opening tag. Some
//! corpora store documents as entity-escaped blobs
//! (`&lt;div class=&quot;x&quot;&gt;`), so an unescape pass runs first and its
//! output is used whenever it still contains a literal `class=`.
//!
//! Resilience: no HTML validation of any kind. Duplicate attributes, stray
//! quotes, and missing tags degrade to fewer matches, never to a failure.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

use crate::record::ClassMap;

/// Matches a quoted `class` attribute value, case-insensitively.
fn class_attr_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r#"(?i)class\s*=\s*["']([^"']+)["']"#)
            .expect("Hardcoded regex pattern is valid")
    })
}

/// A labeled HTML document and the classes it references.
///
/// Like [`crate::css::CssSource`], the class map is derived once at
/// construction; a replaced document is a new `HtmlSource`.
#[derive(Debug, Clone)]
pub struct HtmlSource {
    /// URL or file label of the document
    pub url: String,
    /// Raw document text
    pub html: String,
    classes: ClassMap,
}

impl HtmlSource {
    /// Parse a document into its used-class map.
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        let html = html.into();
        let classes = extract_used_classes(&html);
        Self {
            url: url.into(),
            html,
            classes,
        }
    }

    /// The used-class map.
    pub fn classes(&self) -> &ClassMap {
        &self.classes
    }
}

/// Decode HTML entities, falling back to the raw text on any decode error
/// (bare `&`, unknown entity). Permissive by policy.
fn unescape_entities(html: &str) -> Cow<'_, str> {
    match quick_xml::escape::unescape(html) {
        Ok(decoded) => decoded,
        Err(_) => Cow::Borrowed(html),
    }
}

/// The smallest enclosing tag text around a `class` attribute match:
/// from the nearest preceding `<` to the nearest following `>`.
/// Empty when either bracket is missing.
fn enclosing_tag(text: &str, attr_start: usize) -> String {
    let tag_start = text[..attr_start].rfind('<');
    let tag_end = text[attr_start..].find('>').map(|i| attr_start + i);

    match (tag_start, tag_end) {
        (Some(start), Some(end)) => text[start..=end].trim().to_string(),
        _ => String::new(),
    }
}

/// Extract every class referenced via a `class` attribute in HTML text.
///
/// Each token occurrence registers once; comparison stays case-sensitive,
/// so `Btn` and `btn` are distinct classes.
pub fn extract_used_classes(html: &str) -> ClassMap {
    let decoded = unescape_entities(html);
    let working: &str = if decoded.contains("class=") {
        &decoded
    } else {
        html
    };

    let mut classes = ClassMap::new();

    for attr in class_attr_regex().captures_iter(working) {
        let Some(value) = attr.get(1) else {
            continue;
        };
        let context = enclosing_tag(working, value.start());

        for token in value.as_str().split_whitespace() {
            classes.add(token, &context);
        }
    }

    classes
}
