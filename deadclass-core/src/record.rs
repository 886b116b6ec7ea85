//! Class occurrence records and the name-keyed class map.
//!
//! `ClassMap` is the one shape shared by every stage of the pipeline:
//! stylesheet extraction, document extraction, corpus aggregation, and the
//! final audit report all produce it. Simpler views (bare name -> count) are
//! derived from it rather than maintained in parallel.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A single class name with its occurrence count and provenance.
///
/// `count` and `contexts` deliberately diverge: the count increments once per
/// registration, while a context string is only stored the first time it is
/// seen. "How many places reference this class" and "how many distinct
/// phrasings reference it" are different questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    /// Bare class token, no leading `.`
    pub name: String,
    /// Number of registrations (selector matches or attribute tokens)
    pub count: usize,
    /// Distinct originating selectors (CSS) or opening tags (HTML)
    pub contexts: BTreeSet<String>,
}

impl ClassRecord {
    /// Create an empty record for a class name (count 0, no contexts).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count: 0,
            contexts: BTreeSet::new(),
        }
    }

    /// Register one occurrence with its originating context.
    pub fn register(&mut self, context: &str) {
        self.count += 1;
        if !self.contexts.contains(context) {
            self.contexts.insert(context.to_string());
        }
    }
}

/// Associative mapping from class name to [`ClassRecord`].
///
/// Keys are unique; iteration order is name order, so equal maps compare
/// equal regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMap {
    entries: BTreeMap<String, ClassRecord>,
}

impl ClassMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one occurrence of `name` against `context`.
    ///
    /// A new name gets a record with count 1 and one context; an existing
    /// name has its count incremented and the context added only if novel.
    pub fn add(&mut self, name: &str, context: &str) {
        self.entries
            .entry(name.to_string())
            .or_insert_with(|| ClassRecord::new(name))
            .register(context);
    }

    /// Insert a finished record, replacing any existing entry for its name.
    pub fn insert_record(&mut self, record: ClassRecord) {
        self.entries.insert(record.name.clone(), record);
    }

    /// Look up a record by class name.
    pub fn get(&self, name: &str) -> Option<&ClassRecord> {
        self.entries.get(name)
    }

    /// Whether a class name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of distinct class names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the map has at least one entry.
    pub fn is_not_empty(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Iterate over records in name order.
    pub fn records(&self) -> impl Iterator<Item = &ClassRecord> {
        self.entries.values()
    }

    /// Iterate over class names in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    /// Derive the bare name -> count view.
    pub fn counts(&self) -> BTreeMap<String, usize> {
        self.entries
            .iter()
            .map(|(name, rec)| (name.clone(), rec.count))
            .collect()
    }
}
