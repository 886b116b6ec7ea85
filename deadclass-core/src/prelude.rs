//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use deadclass_core::prelude::*;
//! ```

// Core value types
pub use crate::error::{DeadclassError, DeadclassResult};
pub use crate::record::{ClassMap, ClassRecord};

// Parsing
pub use crate::css::{extract_declared_classes, CssSource};
pub use crate::html::{extract_used_classes, HtmlSource};

// Aggregation and comparison
pub use crate::audit::{compare, unused, AuditResult, AuditStats, ClassAudit};
pub use crate::merge::merge;

// File scanning
pub use crate::scan::{gather_css_files, gather_html_files};

// Configuration
pub use crate::config::{load_config, DeadclassConfig};

// Builder API
pub use crate::builder::Deadclass;
