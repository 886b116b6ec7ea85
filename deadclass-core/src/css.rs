//! Class selector extraction from stylesheet text.
//!
//! Scans top-level rule blocks (`selector-list { body }`) and registers every
//! class token found in the selector list against the selector text. The scan
//! is block-local and does not recurse into nested braces, so classes inside
//! at-rule bodies (media queries, CSS nesting) can be misattributed or missed.
//!
//! Resilience: malformed stylesheets are never rejected; text that matches no
//! rule block simply yields an empty map.

use regex::Regex;
use std::sync::OnceLock;

use crate::record::ClassMap;

/// Matches one brace-delimited rule block, capturing the selector list.
fn rule_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"([^{}]+)\{[^{}]*\}").expect("Hardcoded regex pattern is valid")
    })
}

/// Matches one class token inside a selector list.
fn class_token_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"\.([A-Za-z_-][A-Za-z0-9_-]*)").expect("Hardcoded regex pattern is valid")
    })
}

/// A named stylesheet and the classes it declares.
///
/// The class map is derived from the source text at construction and never
/// mutated afterwards; replacing the stylesheet means constructing a new
/// `CssSource`.
#[derive(Debug, Clone)]
pub struct CssSource {
    /// File name or label of the stylesheet
    pub name: String,
    /// Raw stylesheet text
    pub source: String,
    classes: ClassMap,
}

impl CssSource {
    /// Parse a stylesheet into its declared-class map.
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let classes = extract_declared_classes(&source);
        Self {
            name: name.into(),
            source,
            classes,
        }
    }

    /// The declared-class map.
    pub fn classes(&self) -> &ClassMap {
        &self.classes
    }
}

/// Extract every class selector declared in stylesheet text.
///
/// Each class token registers once per match position within a selector list,
/// so a compound selector like `.a.a` counts twice with a single context.
/// That inflation is part of the observable contract, not a bug.
pub fn extract_declared_classes(source: &str) -> ClassMap {
    let mut classes = ClassMap::new();

    for rule in rule_regex().captures_iter(source) {
        let Some(selector_match) = rule.get(1) else {
            continue;
        };
        let selector = selector_match.as_str().trim();
        if selector.is_empty() {
            continue;
        }

        for token in class_token_regex().captures_iter(selector) {
            if let Some(name) = token.get(1) {
                classes.add(name.as_str(), selector);
            }
        }
    }

    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descendant_selector() {
        let classes = extract_declared_classes(".a .b { color: red; }");

        let a = classes.get("a").unwrap();
        assert_eq!(a.count, 1);
        assert!(a.contexts.contains(".a .b"));

        let b = classes.get("b").unwrap();
        assert_eq!(b.count, 1);
        assert!(b.contexts.contains(".a .b"));
    }

    #[test]
    fn test_compound_selector_counts_each_match() {
        let classes = extract_declared_classes(".a.a { color: red; }");

        let a = classes.get("a").unwrap();
        assert_eq!(a.count, 2, "each match position registers");
        assert_eq!(a.contexts.len(), 1, "same selector text stored once");
    }

    #[test]
    fn test_same_class_across_rules() {
        let classes = extract_declared_classes(".btn { color: red; } div .btn { margin: 0; }");

        let btn = classes.get("btn").unwrap();
        assert_eq!(btn.count, 2);
        assert_eq!(btn.contexts.len(), 2);
    }

    #[test]
    fn test_non_class_selectors_ignored() {
        let classes = extract_declared_classes("#id, div, [data-x] { color: red; }");
        assert!(classes.is_empty());
    }

    #[test]
    fn test_identifier_charset() {
        let classes = extract_declared_classes(".btn-primary_2 { x: y; } .-leading { x: y; }");
        assert!(classes.contains("btn-primary_2"));
        assert!(classes.contains("-leading"));
    }

    #[test]
    fn test_empty_and_malformed_input() {
        assert!(extract_declared_classes("").is_empty());
        assert!(extract_declared_classes("not a stylesheet at all").is_empty());
        assert!(extract_declared_classes(".a { unclosed").is_empty());
    }

    #[test]
    fn test_selector_list_with_commas() {
        let classes = extract_declared_classes(".a, .b { color: red; }");
        assert_eq!(classes.get("a").unwrap().count, 1);
        assert_eq!(classes.get("b").unwrap().count, 1);
        assert!(classes.get("a").unwrap().contexts.contains(".a, .b"));
    }

    #[test]
    fn test_css_source_owns_immutable_map() {
        let css = CssSource::new("style.css", ".used {} .dead {}");
        assert_eq!(css.name, "style.css");
        assert_eq!(css.classes().len(), 2);
        assert!(css.classes().contains("used"));
        assert!(css.classes().contains("dead"));
    }

    // Documented limitation: the block-local scan does not recurse into
    // nested braces. The flat scan happens to pick up the inner rule of a
    // simple media query, but the at-rule itself is never parsed as such.
    #[test]
    fn test_nested_at_rule_not_recursed() {
        let classes =
            extract_declared_classes("@media screen { .inner { color: red; } } .outer { x: y; }");
        assert!(classes.contains("inner"));
        assert!(classes.contains("outer"));
        assert!(classes.get("inner").unwrap().contexts.contains(".inner"));
    }
}
