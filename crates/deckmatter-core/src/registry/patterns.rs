//! Static structure-pattern table
//!
//! One pattern per supported layout name, defining the expected shape of
//! the structured frontmatter, its validation thresholds, and a literal
//! authoring example. The table is built once at first use and read-only
//! thereafter.
//!
//! Copyright (c) 2025 Deckmatter Team
//! Licensed under the Apache-2.0 license

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::OnceLock;

use crate::types::StructureType;

/// Structure pattern for one supported layout
#[derive(Debug)]
pub struct StructurePattern {
    /// Structural kind driving rule synthesis and validation
    pub structure_type: StructureType,
    /// Human-readable description of the layout
    pub description: &'static str,
    /// Nested template of expected field names and types
    pub shape_template: Value,
    /// Layout-specific validation thresholds
    pub validation: ValidationRules,
    /// Literal frontmatter example for this layout
    pub example: &'static str,
}

/// Validation thresholds for a layout pattern
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationRules {
    /// Top-level fields that must be present
    pub required_fields: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_columns: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_columns: Option<usize>,
    /// Sides that must be present under `comparison`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required_comparison_fields: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_sections: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_sections: Option<usize>,
}

static PATTERNS: OnceLock<IndexMap<&'static str, StructurePattern>> = OnceLock::new();

/// Read-only accessor for the static pattern table
pub fn structure_patterns() -> &'static IndexMap<&'static str, StructurePattern> {
    PATTERNS.get_or_init(build_patterns)
}

fn build_patterns() -> IndexMap<&'static str, StructurePattern> {
    let mut patterns = IndexMap::new();

    patterns.insert(
        "Four Columns",
        StructurePattern {
            structure_type: StructureType::Columns,
            description: "Four-column comparison layout with individual titles and content",
            shape_template: json!({
                "layout": "Four Columns",
                "title": "str",
                "columns": [
                    {"title": "str", "content": "str"}
                ]
            }),
            validation: ValidationRules {
                required_fields: vec!["title", "columns"],
                min_columns: Some(1),
                max_columns: Some(4),
                ..Default::default()
            },
            example: r#"---
layout: Four Columns
title: Feature Comparison
columns:
  - title: Performance
    content: Fast processing with optimized algorithms
  - title: Security
    content: Enterprise-grade encryption and compliance
  - title: Usability
    content: Intuitive interface with minimal learning curve
  - title: Cost
    content: Competitive pricing with flexible plans
---"#,
        },
    );

    patterns.insert(
        "Comparison",
        StructurePattern {
            structure_type: StructureType::Comparison,
            description: "Side-by-side comparison layout for contrasting two options",
            shape_template: json!({
                "layout": "Comparison",
                "title": "str",
                "comparison": {
                    "left": {"title": "str", "content": "str"},
                    "right": {"title": "str", "content": "str"}
                }
            }),
            validation: ValidationRules {
                required_fields: vec!["title", "comparison"],
                required_comparison_fields: vec!["left", "right"],
                ..Default::default()
            },
            example: r#"---
layout: Comparison
title: Solution Analysis
comparison:
  left:
    title: Traditional Approach
    content: Proven reliability with established workflows
  right:
    title: Modern Solution
    content: Advanced features with improved efficiency
---"#,
        },
    );

    patterns.insert(
        "Two Content",
        StructurePattern {
            structure_type: StructureType::Sections,
            description: "Side-by-side layout with two content areas",
            shape_template: json!({
                "layout": "Two Content",
                "title": "str",
                "sections": [
                    {"title": "str", "content": ["str"]}
                ]
            }),
            validation: ValidationRules {
                required_fields: vec!["title", "sections"],
                min_sections: Some(2),
                max_sections: Some(2),
                ..Default::default()
            },
            example: r#"---
layout: Two Content
title: Before and After
sections:
  - title: Current State
    content:
      - Manual processes
      - Time-consuming workflows
  - title: Future State
    content:
      - Automated systems
      - Streamlined operations
---"#,
        },
    );

    patterns.insert(
        "Picture with Caption",
        StructurePattern {
            structure_type: StructureType::Media,
            description: "Media slide with image placeholder and caption text",
            shape_template: json!({
                "layout": "Picture with Caption",
                "title": "str",
                "media": {
                    "caption": "str",
                    "description": "str"
                }
            }),
            validation: ValidationRules {
                required_fields: vec!["title", "media"],
                ..Default::default()
            },
            example: r#"---
layout: Picture with Caption
title: System Architecture
media:
  caption: High-level system architecture diagram
  description: |
    Main components include:
    - Frontend: React-based interface
    - API: RESTful services
    - Database: PostgreSQL with Redis
---"#,
        },
    );

    patterns
}
