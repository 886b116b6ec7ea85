//! Usage comparison and dead class derivation.
//!
//! `compare` answers "for each declared class, how often does the corpus use
//! it"; `unused` filters that report down to the dead subset. Both are pure
//! functions of their inputs, so any change to the stylesheet or the corpus
//! is handled by recomputing from scratch. There is no incremental path.
//!
//! Performance characteristics:
//! - Compare: O(|D| log |U|) where D = declared classes, U = used classes
//! - Unused: O(|R|) single pass over the report

use crate::merge::merge;
use crate::record::{ClassMap, ClassRecord};

/// Compare declared classes against aggregate usage.
///
/// The result is scoped to the declared set: every declared name appears with
/// the corpus usage count (0 when absent), carrying the declaring selectors
/// as contexts for drill-down. Names used in the corpus but never declared
/// are not reported.
pub fn compare(declared: &ClassMap, used: &ClassMap) -> ClassMap {
    let mut report = ClassMap::new();

    for rec in declared.records() {
        let count = used.get(&rec.name).map_or(0, |u| u.count);
        report.insert_record(ClassRecord {
            name: rec.name.clone(),
            count,
            contexts: rec.contexts.clone(),
        });
    }

    report
}

/// The subset of a usage report whose count is exactly zero.
pub fn unused(report: &ClassMap) -> ClassMap {
    let mut dead = ClassMap::new();

    for rec in report.records() {
        if rec.count == 0 {
            dead.insert_record(rec.clone());
        }
    }

    dead
}

/// Names present in `a` but absent from `b`.
pub fn unique_to(a: &ClassMap, b: &ClassMap) -> Vec<String> {
    a.names()
        .filter(|name| !b.contains(name))
        .map(String::from)
        .collect()
}

/// Names present in both maps.
pub fn common_with(a: &ClassMap, b: &ClassMap) -> Vec<String> {
    a.names()
        .filter(|name| b.contains(name))
        .map(String::from)
        .collect()
}

/// Names in `a` absent from `b`.
///
/// Alias of [`unique_to`], kept because call sites evolved around both names.
/// One implementation, two entry points.
pub fn missing_in(a: &ClassMap, b: &ClassMap) -> Vec<String> {
    unique_to(a, b)
}

/// Statistics about a class usage audit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditStats {
    pub declared_count: usize,
    pub used_count: usize,
    pub dead_count: usize,
}

/// Result of a full audit run.
#[derive(Debug, Clone)]
pub struct AuditResult {
    /// Per-declared-class usage counts
    pub report: ClassMap,
    /// Declared classes with zero corpus usage
    pub unused: ClassMap,
    /// Statistics
    pub stats: AuditStats,
}

/// One stylesheet's declared classes held against a merged usage corpus.
#[derive(Debug, Clone, Default)]
pub struct ClassAudit {
    declared: ClassMap,
    used: ClassMap,
}

impl ClassAudit {
    /// Build an audit from declared classes and per-document usage maps.
    pub fn new(declared: ClassMap, usages: &[ClassMap]) -> Self {
        Self {
            declared,
            used: merge(usages),
        }
    }

    /// The merged corpus usage map.
    pub fn used(&self) -> &ClassMap {
        &self.used
    }

    /// Run the comparison and derive the dead subset.
    pub fn analyze(&self) -> AuditResult {
        let report = compare(&self.declared, &self.used);
        let dead = unused(&report);

        let stats = AuditStats {
            declared_count: self.declared.len(),
            used_count: self.declared.len() - dead.len(),
            dead_count: dead.len(),
        };

        AuditResult {
            report,
            unused: dead,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_of(entries: &[(&str, &str)]) -> ClassMap {
        let mut map = ClassMap::new();
        for (name, ctx) in entries {
            map.add(name, ctx);
        }
        map
    }

    #[test]
    fn test_compare_reports_usage_counts() {
        let declared = map_of(&[("used", ".used"), ("dead", ".dead")]);
        let mut used = ClassMap::new();
        used.add("used", "<p class=\"used\">");
        used.add("used", "<i class=\"used\">");

        let report = compare(&declared, &used);

        assert_eq!(report.get("used").unwrap().count, 2, "usage, not declaration count");
        assert_eq!(report.get("dead").unwrap().count, 0);
    }

    #[test]
    fn test_compare_carries_declared_contexts() {
        let declared = map_of(&[("btn", ".btn:hover")]);
        let used = map_of(&[("btn", "<a class=\"btn\">")]);

        let report = compare(&declared, &used);
        assert!(report.get("btn").unwrap().contexts.contains(".btn:hover"));
    }

    #[test]
    fn test_compare_excludes_undeclared_names() {
        let declared = map_of(&[("a", ".a")]);
        let used = map_of(&[("a", "ctx"), ("rogue", "ctx")]);

        let report = compare(&declared, &used);
        assert!(report.contains("a"));
        assert!(!report.contains("rogue"));
    }

    #[test]
    fn test_compare_against_empty_corpus() {
        let declared = map_of(&[("a", ".a"), ("b", ".b")]);
        let report = compare(&declared, &merge(&[]));

        assert_eq!(report.len(), 2);
        assert!(report.records().all(|r| r.count == 0));

        let dead = unused(&report);
        assert_eq!(dead.len(), 2, "every declared class is dead");
    }

    #[test]
    fn test_unused_filters_zero_counts() {
        let declared = map_of(&[("used", ".used"), ("dead", ".dead")]);
        let used = map_of(&[("used", "ctx")]);

        let dead = unused(&compare(&declared, &used));
        assert_eq!(dead.len(), 1);
        assert!(dead.contains("dead"));
        assert_eq!(dead.get("dead").unwrap().count, 0);
    }

    #[test]
    fn test_set_algebra() {
        let a = map_of(&[("x", "c"), ("y", "c")]);
        let b = map_of(&[("y", "c"), ("z", "c")]);

        assert_eq!(unique_to(&a, &b), vec!["x".to_string()]);
        assert_eq!(common_with(&a, &b), vec!["y".to_string()]);
        assert_eq!(missing_in(&a, &b), unique_to(&a, &b));
        assert_eq!(unique_to(&b, &a), vec!["z".to_string()]);
    }

    #[test]
    fn test_audit_analyze() {
        let declared = map_of(&[("used", ".used"), ("dead", ".dead")]);
        let doc = map_of(&[("used", "<p class=\"used\">")]);

        let result = ClassAudit::new(declared, &[doc]).analyze();

        assert_eq!(result.stats.declared_count, 2);
        assert_eq!(result.stats.used_count, 1);
        assert_eq!(result.stats.dead_count, 1);
        assert_eq!(result.report.get("used").unwrap().count, 1);
        assert!(result.unused.contains("dead"));
    }

    #[test]
    fn test_analyze_idempotent() {
        let declared = map_of(&[("a", ".a")]);
        let audit = ClassAudit::new(declared, &[map_of(&[("a", "ctx")])]);

        let first = audit.analyze();
        let second = audit.analyze();
        assert_eq!(first.report, second.report);
        assert_eq!(first.unused, second.unused);
        assert_eq!(first.stats, second.stats);
    }
}
