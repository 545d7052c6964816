//! Core types and data structures for the Deckmatter conversion engine
//!
//! This module defines the data structures shared across the library:
//! the externally supplied slot catalog, mapping-rule targets, structure
//! type tags, and the validation report returned by the validator.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

/// Marker prefix for mapping targets that name a semantic output key
/// instead of a physical placeholder slot.
const SEMANTIC_PREFIX: &str = "semantic:";

/// External slot catalog: per layout, the placeholder slots the template
/// actually provides.
///
/// The catalog is supplied wholesale at construction time and read-only
/// thereafter. Layouts and placeholders preserve the iteration order of the
/// source document; the media-caption rule depends on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlotCatalog {
    /// Layout name -> slots available in that layout
    #[serde(default)]
    pub layouts: IndexMap<String, LayoutSlots>,
}

/// Placeholder slots for a single layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutSlots {
    /// Ordinal slot index (as text, per the template document) -> slot name
    #[serde(default)]
    pub placeholders: IndexMap<String, String>,
}

impl SlotCatalog {
    /// Build a catalog from an already-parsed JSON document
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::Catalog {
                message: "slot catalog root must be a JSON object".to_string(),
                source: None,
            });
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Parse a catalog from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file on disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Slots for a layout, if the catalog knows it
    pub fn slots_for(&self, layout_name: &str) -> Option<&LayoutSlots> {
        self.layouts.get(layout_name)
    }

    /// Whether the catalog carries any layouts at all
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

/// Structural kind of a layout pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureType {
    /// Repeated column entries with per-column title and content
    Columns,
    /// Left/right side-by-side comparison
    Comparison,
    /// Fixed number of content sections
    Sections,
    /// Media slide with caption and description
    Media,
}

impl fmt::Display for StructureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureType::Columns => write!(f, "columns"),
            StructureType::Comparison => write!(f, "comparison"),
            StructureType::Sections => write!(f, "sections"),
            StructureType::Media => write!(f, "media"),
        }
    }
}

/// Target of a mapping rule: where an extracted value lands in the flat
/// output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingTarget {
    /// Physical placeholder-slot name from the catalog (e.g. "Text Placeholder 3")
    Slot(String),
    /// Slot-independent semantic output key (e.g. "title", "content")
    Semantic(String),
}

impl MappingTarget {
    /// Parse a raw rule target, honoring the `semantic:` marker
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(SEMANTIC_PREFIX) {
            Some(key) => MappingTarget::Semantic(key.to_string()),
            None => MappingTarget::Slot(raw.to_string()),
        }
    }

    /// The key this target writes to in the flat output
    pub fn output_key(&self) -> &str {
        match self {
            MappingTarget::Slot(name) => name,
            MappingTarget::Semantic(key) => key,
        }
    }
}

impl fmt::Display for MappingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingTarget::Slot(name) => write!(f, "{}", name),
            MappingTarget::Semantic(key) => write!(f, "{}{}", SEMANTIC_PREFIX, key),
        }
    }
}

/// Result of validating structured frontmatter against a layout's rules
///
/// Produced fresh per validation call. `valid` is false only when a hard
/// error condition fired; see [`StructureValidator`](crate::StructureValidator)
/// for which conditions those are.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Whether the input satisfies the layout's hard requirements
    pub valid: bool,
    /// Non-fatal issues, in encounter order
    pub warnings: Vec<String>,
    /// Hard problems, in encounter order
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// A clean report with no findings
    pub fn new() -> Self {
        Self {
            valid: true,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Record a warning without affecting validity
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Record an error without affecting validity
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Record an error and clear the valid flag
    pub fn fail(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(message.into());
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_catalog_from_value() {
        let catalog = SlotCatalog::from_value(json!({
            "layouts": {
                "Four Columns": {
                    "placeholders": {
                        "13": "Col 1 Title Placeholder 2",
                        "14": "Col 1 Text Placeholder 3"
                    }
                }
            }
        }))
        .unwrap();

        assert!(!catalog.is_empty());
        assert!(SlotCatalog::default().is_empty());

        let slots = catalog.slots_for("Four Columns").unwrap();
        assert_eq!(slots.placeholders.len(), 2);
        assert_eq!(
            slots.placeholders.get("13").map(String::as_str),
            Some("Col 1 Title Placeholder 2")
        );
        assert!(catalog.slots_for("Unknown").is_none());
    }

    #[test]
    fn test_catalog_rejects_non_object_root() {
        let result = SlotCatalog::from_value(json!([1, 2, 3]));
        assert!(matches!(result, Err(Error::Catalog { .. })));
    }

    #[test]
    fn test_catalog_preserves_document_order() {
        let catalog = SlotCatalog::from_json(
            r#"{"layouts": {"Picture with Caption": {"placeholders": {
                "2": "Text Placeholder 3",
                "1": "Text Placeholder 9"
            }}}}"#,
        )
        .unwrap();

        let slots = catalog.slots_for("Picture with Caption").unwrap();
        let first = slots.placeholders.iter().next().unwrap();
        assert_eq!(first.1, "Text Placeholder 3");
    }

    #[test]
    fn test_mapping_target_parse() {
        assert_eq!(
            MappingTarget::parse("semantic:title"),
            MappingTarget::Semantic("title".to_string())
        );
        assert_eq!(
            MappingTarget::parse("Content Placeholder 2"),
            MappingTarget::Slot("Content Placeholder 2".to_string())
        );
    }

    #[test]
    fn test_mapping_target_display_round_trip() {
        let semantic = MappingTarget::Semantic("content".to_string());
        assert_eq!(semantic.to_string(), "semantic:content");
        assert_eq!(MappingTarget::parse(&semantic.to_string()), semantic);

        let slot = MappingTarget::Slot("Text Placeholder 4".to_string());
        assert_eq!(slot.to_string(), "Text Placeholder 4");
        assert_eq!(slot.output_key(), "Text Placeholder 4");
    }

    #[test]
    fn test_structure_type_display() {
        assert_eq!(StructureType::Columns.to_string(), "columns");
        assert_eq!(StructureType::Media.to_string(), "media");
    }

    #[test]
    fn test_report_accumulation() {
        let mut report = ValidationReport::new();
        assert!(report.valid);

        report.warn("first warning");
        report.error("soft error");
        assert!(report.valid);

        report.fail("hard error");
        assert!(!report.valid);
        assert_eq!(report.errors, vec!["soft error", "hard error"]);
    }
}
