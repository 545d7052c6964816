//! Read-only help and introspection over the supported layouts
//!
//! Purely a reporting view: no side effects, no mutation. Problems surface
//! as an `error` field in the returned record, never as a Rust error.
//!
//! Copyright (c) 2025 Deckmatter Team
//! Licensed under the Apache-2.0 license

use serde_json::{json, Map, Value};

use crate::registry::{structure_patterns, MappingRules, PatternRegistry};
use crate::types::SlotCatalog;

const USAGE: &str =
    "Use 'layout: <LayoutName>' in frontmatter, then follow the structured format for that layout";

/// Help information for structured frontmatter authoring.
///
/// With a layout name: that layout's description, example, validation and
/// mapping rules, or an `error` record when the layout is unsupported.
/// Without one: the supported layout overview.
pub fn structured_frontmatter_help(
    layout_name: Option<&str>,
    catalog: Option<&SlotCatalog>,
) -> Value {
    let registry = match catalog {
        Some(catalog) => PatternRegistry::new(catalog.clone()),
        None => PatternRegistry::default(),
    };

    let Some(layout_name) = layout_name else {
        return general_help(&registry);
    };

    match registry.get_structure_definition(layout_name) {
        None => json!({
            "error": format!(
                "Layout '{}' does not support structured frontmatter",
                layout_name
            ),
            "supported_layouts": registry.get_supported_layouts(),
        }),
        Some(definition) => json!({
            "layout": layout_name,
            "description": definition.pattern.description,
            "structure_type": definition.pattern.structure_type,
            "example": definition.pattern.example,
            "validation_rules": &definition.pattern.validation,
            "mapping_rules": render_mapping_rules(&definition.mapping_rules),
        }),
    }
}

fn general_help(registry: &PatternRegistry) -> Value {
    let mut layout_info = Map::new();
    for (name, pattern) in structure_patterns() {
        layout_info.insert(
            name.to_string(),
            json!({
                "description": pattern.description,
                "structure_type": pattern.structure_type,
            }),
        );
    }

    json!({
        "supported_layouts": registry.get_supported_layouts(),
        "layout_info": layout_info,
        "usage": USAGE,
    })
}

fn render_mapping_rules(rules: &MappingRules) -> Value {
    let mut rendered = Map::new();
    for (structured_path, target) in rules {
        rendered.insert(structured_path.clone(), Value::String(target.to_string()));
    }
    Value::Object(rendered)
}
