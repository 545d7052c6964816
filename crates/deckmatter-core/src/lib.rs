//! Deckmatter Core - structured frontmatter conversion for slide layouts
//!
//! This crate converts human-authored, nested slide descriptions
//! ("structured frontmatter") into flat placeholder-slot mappings for a
//! fixed catalog of presentation layouts. Authors write domain concepts
//! (`columns`, `comparison`, `media`); templates expose physical slot names
//! ("Content Placeholder 3"); the converter bridges the two.
//!
//! # Main Components
//!
//! - **Path Resolver**: dot/bracket path expressions over nested JSON data
//! - **Pattern Registry**: static layout patterns plus mapping rules
//!   synthesized from an external slot catalog
//! - **Structural Validator**: tri-level validation reports (valid flag,
//!   warnings, errors) that never raise
//! - **Converter**: structured input to flat slot-keyed output
//! - **Help**: read-only introspection of supported layouts
//!
//! # Example
//!
//! ```
//! use deckmatter_core::{SlotCatalog, StructuredConverter};
//! use serde_json::json;
//!
//! # fn example() -> deckmatter_core::Result<()> {
//! let catalog = SlotCatalog::from_value(json!({
//!     "layouts": {
//!         "Picture with Caption": {
//!             "placeholders": {"3": "Text Placeholder 3"}
//!         }
//!     }
//! }))?;
//!
//! let converter = StructuredConverter::new(catalog);
//! let output = converter.convert(&json!({
//!     "layout": "Picture with Caption",
//!     "title": "Arch",
//!     "media": {"caption": "diagram", "description": "text"}
//! }));
//!
//! assert_eq!(output["Text Placeholder 3"], json!("diagram"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod converter;
pub mod error;
pub mod help;
pub mod path;
pub mod registry;
pub mod types;
pub mod validator;

// Re-export main types for convenience
pub use converter::StructuredConverter;
pub use error::{Error, Result};
pub use help::structured_frontmatter_help;
pub use path::{PathSegment, StructuredPath};
pub use registry::{
    structure_patterns, MappingRules, PatternRegistry, SlotClass, StructureDefinition,
    StructurePattern, ValidationRules,
};
pub use types::{
    LayoutSlots, MappingTarget, SlotCatalog, StructureType, ValidationReport,
};
pub use validator::StructureValidator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-shot conversion of structured frontmatter against a slot catalog.
///
/// Convenience wrapper over [`StructuredConverter`] for callers that do not
/// hold a converter across calls.
pub fn convert_structured(structured: &serde_json::Value, catalog: &SlotCatalog) -> serde_json::Value {
    StructuredConverter::new(catalog.clone()).convert(structured)
}
