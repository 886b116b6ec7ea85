//! Builder API for running a CSS usage audit.
//!
//! Models the audit lifecycle: load one stylesheet, grow or shrink the HTML
//! corpus, then `analyze()`. Results are a view over the current inputs -
//! every call re-derives the full pipeline from scratch, so mutating the
//! corpus never leaves stale partial state behind.
//!
//! ```rust,ignore
//! use deadclass_core::prelude::*;
//!
//! let result = Deadclass::new()
//!     .stylesheet("app.css", css_text)
//!     .add_document("index.html", html_text)
//!     .analyze()?;
//!
//! for name in result.unused.names() {
//!     println!("Dead class: {}", name);
//! }
//! ```

use std::path::Path;

use tracing::info;

use crate::audit::{AuditResult, ClassAudit};
use crate::css::CssSource;
use crate::error::{DeadclassError, DeadclassResult, IoResultExt};
use crate::html::HtmlSource;
use crate::record::ClassMap;

/// Builder holding the stylesheet under audit and the HTML corpus.
#[derive(Debug, Clone, Default)]
pub struct Deadclass {
    stylesheet: Option<CssSource>,
    documents: Vec<HtmlSource>,
    ignored_patterns: Vec<String>,
}

impl Deadclass {
    /// Create an empty audit builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the stylesheet to audit, replacing any previous one.
    pub fn stylesheet(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.stylesheet = Some(CssSource::new(name, source));
        self
    }

    /// Add one HTML document to the corpus.
    pub fn add_document(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.documents.push(HtmlSource::new(url, html));
        self
    }

    /// Add patterns for class names to exclude from the dead list.
    pub fn ignore_patterns(mut self, patterns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.ignored_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Load the stylesheet from a file.
    pub fn load_stylesheet_file(&mut self, path: &Path) -> DeadclassResult<()> {
        let source = std::fs::read_to_string(path).with_path(path)?;
        self.stylesheet = Some(CssSource::new(path.display().to_string(), source));
        Ok(())
    }

    /// Add one HTML document from a file.
    pub fn add_document_file(&mut self, path: &Path) -> DeadclassResult<()> {
        let html = std::fs::read_to_string(path).with_path(path)?;
        self.documents
            .push(HtmlSource::new(path.display().to_string(), html));
        Ok(())
    }

    /// Remove the document with the given label. Returns whether one existed.
    pub fn remove_document(&mut self, url: &str) -> bool {
        let before = self.documents.len();
        self.documents.retain(|doc| doc.url != url);
        self.documents.len() < before
    }

    /// Drop the whole corpus.
    pub fn clear_documents(&mut self) {
        self.documents.clear();
    }

    /// Number of documents currently in the corpus.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Run the full audit pipeline over the current inputs.
    ///
    /// Errors only when no stylesheet has been loaded; an empty corpus is a
    /// valid input that marks every declared class dead.
    pub fn analyze(&self) -> DeadclassResult<AuditResult> {
        let stylesheet = self
            .stylesheet
            .as_ref()
            .ok_or_else(|| DeadclassError::invalid_argument("no stylesheet loaded"))?;

        let declared = self.filter_ignored(stylesheet.classes());
        let usages: Vec<ClassMap> = self
            .documents
            .iter()
            .map(|doc| doc.classes().clone())
            .collect();

        info!(
            stylesheet = %stylesheet.name,
            declared = declared.len(),
            documents = usages.len(),
            "running class audit"
        );

        Ok(ClassAudit::new(declared, &usages).analyze())
    }

    /// Copy of the declared map without classes matching an ignore pattern.
    fn filter_ignored(&self, declared: &ClassMap) -> ClassMap {
        if self.ignored_patterns.is_empty() {
            return declared.clone();
        }

        let mut filtered = ClassMap::new();
        for rec in declared.records() {
            if !self.is_ignored(&rec.name) {
                filtered.insert_record(rec.clone());
            }
        }
        filtered
    }

    /// Check if a class name matches any ignored pattern.
    fn is_ignored(&self, name: &str) -> bool {
        for pattern in &self.ignored_patterns {
            if pattern.ends_with('*') {
                let prefix = &pattern[..pattern.len() - 1];
                if name.starts_with(prefix) {
                    return true;
                }
            } else if let Some(suffix) = pattern.strip_prefix('*') {
                if name.ends_with(suffix) {
                    return true;
                }
            } else if name == pattern || name.contains(pattern) {
                return true;
            }
        }
        false
    }
}
