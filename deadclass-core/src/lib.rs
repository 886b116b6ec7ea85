//! deadclass-core: dead CSS class detection library
//!
//! This library provides modular components for parsing stylesheets and HTML
//! documents, aggregating class usage across a document corpus, and reporting
//! which declared CSS classes are never referenced.
//!
//! # Features
//!
//! - **Stylesheet parsing**: Extract class selectors from rule blocks with
//!   selector provenance
//! - **Document parsing**: Extract `class` attribute references, including
//!   from entity-escaped HTML blobs
//! - **Corpus aggregation**: Order-independent merge of per-document usage
//! - **Audit**: Per-class usage report and the derived dead-class subset
//! - **File scanning**: Parallel discovery of `.css` / `.html` assets
//!
//! # Quick Start
//!
//! Use the [`prelude`] module for convenient imports:
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
//!
//! # Module Organization
//!
//! - [`record`]: Class records and the shared name-keyed map
//! - [`css`]: Class selector extraction from stylesheet text
//! - [`html`]: Class attribute extraction from document text
//! - [`merge`]: Corpus aggregation
//! - [`audit`]: Usage comparison, dead class derivation, set algebra
//! - [`builder`]: Fluent audit API over the full pipeline
//! - [`scan`]: Parallel asset file discovery
//! - [`config`]: deadclass.toml loading
//! - [`report`]: Plaintext and JSON output
//! - [`error`]: Typed error handling

pub mod audit;
pub mod builder;
pub mod config;
pub mod css;
pub mod error;
pub mod html;
pub mod logging;
pub mod merge;
pub mod prelude;
pub mod record;
pub mod report;
pub mod scan;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Error types
pub use error::{DeadclassError, DeadclassResult, IoResultExt};

// Value types
pub use record::{ClassMap, ClassRecord};

// Parsing
pub use css::{extract_declared_classes, CssSource};
pub use html::{extract_used_classes, HtmlSource};

// Aggregation
pub use merge::merge;

// Audit
pub use audit::{
    common_with, compare, missing_in, unique_to, unused,
    AuditResult, AuditStats, ClassAudit,
};

// Builder API
pub use builder::Deadclass;

// Logging
pub use logging::{init_structured_logging, log_error, log_info, log_warn};

// Configuration
pub use config::{load_config, DeadclassConfig, OutputConfig};

// Reporting
pub use report::{print_json, print_plain, print_report_plain};

// File scanning
pub use scan::{gather_asset_files, gather_css_files, gather_html_files};
