//! Conversion of structured frontmatter to flat placeholder mappings
//!
//! The converter orchestrates the registry and the path resolver: it looks
//! up the layout's synthesized mapping rules, extracts each rule's value
//! from the structured input, and writes present values into a flat output
//! keyed by slot name or semantic key. Conversion is one-directional and
//! tolerant: inputs without a recognized layout pass through unchanged.
//!
//! Copyright (c) 2025 Deckmatter Team
//! Licensed under the Apache-2.0 license

use serde_json::{Map, Value};

use crate::path;
use crate::registry::PatternRegistry;
use crate::types::SlotCatalog;

/// Converter from structured frontmatter to placeholder field names
#[derive(Debug, Clone, Default)]
pub struct StructuredConverter {
    registry: PatternRegistry,
}

impl StructuredConverter {
    /// Create a converter reading the given slot catalog
    pub fn new(catalog: SlotCatalog) -> Self {
        Self {
            registry: PatternRegistry::new(catalog),
        }
    }

    /// Create a converter over an existing registry
    pub fn with_registry(registry: PatternRegistry) -> Self {
        Self { registry }
    }

    /// The registry this converter consults
    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Convert structured frontmatter to a flat placeholder mapping.
    ///
    /// Inputs with no `layout` key, or naming a layout without a structured
    /// pattern, are returned unchanged. Otherwise the output carries
    /// `type = <layout name>` plus one entry per mapping rule whose path
    /// resolved to a present, non-null value.
    pub fn convert(&self, structured: &Value) -> Value {
        let Some(layout_name) = structured.get("layout").and_then(Value::as_str) else {
            log::debug!("structured input has no layout key, passing through");
            return structured.clone();
        };

        let Some(definition) = self.registry.get_structure_definition(layout_name) else {
            log::debug!(
                "layout '{}' has no structured pattern, passing through",
                layout_name
            );
            return structured.clone();
        };

        let mut output = Map::new();
        output.insert(
            "type".to_string(),
            Value::String(layout_name.to_string()),
        );

        for (structured_path, target) in &definition.mapping_rules {
            let Some(value) = path::extract(structured_path, structured) else {
                continue;
            };
            if value.is_null() {
                continue;
            }
            output.insert(target.output_key().to_string(), value.clone());
        }

        Value::Object(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn comparison_catalog() -> SlotCatalog {
        SlotCatalog::from_value(json!({
            "layouts": {
                "Comparison": {
                    "placeholders": {
                        "2": "Text Placeholder 2",
                        "3": "Content Placeholder 3",
                        "4": "Text Placeholder 4",
                        "5": "Content Placeholder 5"
                    }
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_no_layout_key_passes_through() {
        let converter = StructuredConverter::default();
        let input = json!({"title": "No layout here", "body": ["a", "b"]});

        assert_eq!(converter.convert(&input), input);
    }

    #[test]
    fn test_unsupported_layout_passes_through() {
        let converter = StructuredConverter::default();
        let input = json!({"layout": "Freeform Collage", "title": "Untouched"});

        assert_eq!(converter.convert(&input), input);
    }

    #[test]
    fn test_non_string_layout_passes_through() {
        let converter = StructuredConverter::default();
        let input = json!({"layout": {"nested": true}});

        assert_eq!(converter.convert(&input), input);
    }

    #[test]
    fn test_with_registry_shares_catalog() {
        let registry = crate::registry::PatternRegistry::new(comparison_catalog());
        let converter = StructuredConverter::with_registry(registry);
        assert!(converter.registry().supports_structured_frontmatter("Comparison"));
    }

    #[test]
    fn test_comparison_conversion() {
        let converter = StructuredConverter::new(comparison_catalog());
        let output = converter.convert(&json!({
            "layout": "Comparison",
            "title": "Solution Analysis",
            "comparison": {
                "left": {"title": "Traditional", "content": "Proven"},
                "right": {"title": "Modern", "content": "Efficient"}
            }
        }));

        assert_eq!(output["type"], json!("Comparison"));
        assert_eq!(output["title"], json!("Solution Analysis"));
        assert_eq!(output["Text Placeholder 2"], json!("Traditional"));
        assert_eq!(output["Content Placeholder 3"], json!("Proven"));
        assert_eq!(output["Text Placeholder 4"], json!("Modern"));
        assert_eq!(output["Content Placeholder 5"], json!("Efficient"));
    }

    #[test]
    fn test_absent_values_contribute_nothing() {
        let converter = StructuredConverter::new(comparison_catalog());
        let output = converter.convert(&json!({
            "layout": "Comparison",
            "title": "Half",
            "comparison": {
                "left": {"title": "Only left"}
            }
        }));

        let object = output.as_object().unwrap();
        assert_eq!(object.get("Text Placeholder 2"), Some(&json!("Only left")));
        assert!(!object.contains_key("Text Placeholder 4"));
        assert!(!object.contains_key("Content Placeholder 3"));
    }

    #[test]
    fn test_null_values_are_skipped() {
        let converter = StructuredConverter::new(comparison_catalog());
        let output = converter.convert(&json!({
            "layout": "Comparison",
            "title": null,
            "comparison": {
                "left": {"title": "Present"}
            }
        }));

        let object = output.as_object().unwrap();
        assert!(!object.contains_key("title"));
        assert_eq!(object.get("Text Placeholder 2"), Some(&json!("Present")));
    }

    #[test]
    fn test_values_keep_their_type() {
        let catalog = SlotCatalog::from_value(json!({
            "layouts": {
                "Two Content": {
                    "placeholders": {
                        "2": "Content Placeholder 2",
                        "3": "Content Placeholder 3"
                    }
                }
            }
        }))
        .unwrap();
        let converter = StructuredConverter::new(catalog);

        let output = converter.convert(&json!({
            "layout": "Two Content",
            "title": "Before and After",
            "sections": [
                {"title": "Now", "content": ["Manual processes", "Slow workflows"]},
                {"title": "Later", "content": ["Automated systems"]}
            ]
        }));

        assert_eq!(
            output["Content Placeholder 2"],
            json!(["Manual processes", "Slow workflows"])
        );
        assert_eq!(output["Content Placeholder 3"], json!(["Automated systems"]));
    }
}
