//! End-to-end integration tests for the structured frontmatter pipeline
//!
//! These tests exercise catalog loading, rule synthesis, validation, and
//! conversion together, over realistic template catalogs.

use deckmatter_core::{
    structured_frontmatter_help, SlotCatalog, StructureValidator, StructuredConverter,
};
use serde_json::{json, Value};

fn template_catalog() -> SlotCatalog {
    SlotCatalog::from_value(json!({
        "layouts": {
            "Four Columns": {
                "placeholders": {
                    "1": "Title 1",
                    "13": "Col 1 Title Placeholder 2",
                    "14": "Col 1 Text Placeholder 3",
                    "15": "Col 2 Title Placeholder 4",
                    "16": "Col 2 Text Placeholder 5",
                    "17": "Col 3 Title Placeholder 6",
                    "18": "Col 3 Text Placeholder 7",
                    "19": "Col 4 Title Placeholder 8",
                    "20": "Col 4 Text Placeholder 9"
                }
            },
            "Comparison": {
                "placeholders": {
                    "1": "Title 1",
                    "2": "Text Placeholder 2",
                    "3": "Content Placeholder 3",
                    "4": "Text Placeholder 4",
                    "5": "Content Placeholder 5"
                }
            },
            "Two Content": {
                "placeholders": {
                    "1": "Title 1",
                    "2": "Content Placeholder 2",
                    "3": "Content Placeholder 3"
                }
            },
            "Picture with Caption": {
                "placeholders": {
                    "1": "Title 1",
                    "2": "Picture Placeholder 2",
                    "3": "Text Placeholder 3"
                }
            }
        }
    }))
    .expect("catalog fixture should parse")
}

#[test]
fn four_columns_full_conversion() {
    let converter = StructuredConverter::new(template_catalog());
    let output = converter.convert(&json!({
        "layout": "Four Columns",
        "title": "Feature Comparison",
        "columns": [
            {"title": "Performance", "content": "Fast processing"},
            {"title": "Security", "content": "Enterprise encryption"},
            {"title": "Usability", "content": "Intuitive interface"},
            {"title": "Cost", "content": "Flexible plans"}
        ]
    }));

    let object = output.as_object().unwrap();
    // type + title + 4 column titles + 4 column contents
    assert_eq!(object.len(), 10);
    assert_eq!(output["type"], json!("Four Columns"));
    assert_eq!(output["title"], json!("Feature Comparison"));
    assert_eq!(output["Col 1 Title Placeholder 2"], json!("Performance"));
    assert_eq!(output["Col 1 Text Placeholder 3"], json!("Fast processing"));
    assert_eq!(output["Col 4 Title Placeholder 8"], json!("Cost"));
    assert_eq!(output["Col 4 Text Placeholder 9"], json!("Flexible plans"));
}

#[test]
fn excess_columns_are_silently_dropped() {
    let converter = StructuredConverter::new(template_catalog());
    let columns: Vec<Value> = (1..=6)
        .map(|i| json!({"title": format!("C{}", i), "content": format!("body {}", i)}))
        .collect();

    let output = converter.convert(&json!({
        "layout": "Four Columns",
        "title": "Too many",
        "columns": columns
    }));

    let object = output.as_object().unwrap();
    // Only 4 title slots and 4 content slots exist in the catalog.
    assert_eq!(object.len(), 10);
    assert_eq!(output["Col 4 Title Placeholder 8"], json!("C4"));
    assert!(!object.values().any(|v| v == &json!("C5")));
}

#[test]
fn comparison_validation_and_conversion_are_independent() {
    let input = json!({
        "layout": "Comparison",
        "title": "Solution Analysis",
        "comparison": {
            "left": {"title": "Traditional", "content": "Proven workflows"}
        }
    });

    let report = StructureValidator::new().validate(&input, "Comparison");
    assert!(!report.valid);
    assert!(report.errors.iter().any(|e| e.contains("'right'")));

    // Conversion still emits whatever the left side resolves.
    let output = StructuredConverter::new(template_catalog()).convert(&input);
    assert_eq!(output["Text Placeholder 2"], json!("Traditional"));
    assert_eq!(output["Content Placeholder 3"], json!("Proven workflows"));
    assert!(output.get("Text Placeholder 4").is_none());
}

#[test]
fn two_content_single_section() {
    let input = json!({
        "layout": "Two Content",
        "title": "Before and After",
        "sections": [
            {"title": "Current State", "content": ["Manual processes"]}
        ]
    });

    let report = StructureValidator::new().validate(&input, "Two Content");
    assert!(!report.valid);
    assert!(report
        .errors
        .iter()
        .any(|e| e.contains("at least 2") && e.contains("got 1")));

    let output = StructuredConverter::new(template_catalog()).convert(&input);
    assert_eq!(output["Content Placeholder 2"], json!(["Manual processes"]));
    assert!(output.get("Content Placeholder 3").is_none());
}

#[test]
fn picture_with_caption_example_scenario() {
    let converter = StructuredConverter::new(template_catalog());
    let output = converter.convert(&json!({
        "layout": "Picture with Caption",
        "title": "Arch",
        "media": {"caption": "diagram", "description": "text"}
    }));

    assert_eq!(
        output,
        json!({
            "type": "Picture with Caption",
            "title": "Arch",
            "Text Placeholder 3": "diagram",
            "content": "text"
        })
    );
}

#[test]
fn unsupported_layout_is_identity() {
    let converter = StructuredConverter::new(template_catalog());
    let input = json!({
        "layout": "Title and Vertical Text",
        "title": "Untouched",
        "extra": {"deep": [1, 2, 3]}
    });

    assert_eq!(converter.convert(&input), input);
}

#[test]
fn help_reflects_catalog_rules() {
    let catalog = template_catalog();
    let help = structured_frontmatter_help(Some("Four Columns"), Some(&catalog));

    assert_eq!(help["structure_type"], json!("columns"));
    assert_eq!(
        help["mapping_rules"]["columns[0].title"],
        json!("Col 1 Title Placeholder 2")
    );
    assert_eq!(help["mapping_rules"]["title"], json!("semantic:title"));
    assert_eq!(help["validation_rules"]["max_columns"], json!(4));
}

#[test]
fn catalog_loads_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("template.json");
    std::fs::write(
        &path,
        serde_json::to_string_pretty(&json!({
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
        .unwrap(),
    )
    .expect("write catalog");

    let catalog = SlotCatalog::from_file(&path).expect("catalog should load");
    let converter = StructuredConverter::new(catalog);
    let output = converter.convert(&json!({
        "layout": "Comparison",
        "title": "From disk",
        "comparison": {
            "left": {"title": "L"},
            "right": {"title": "R"}
        }
    }));

    assert_eq!(output["Text Placeholder 2"], json!("L"));
    assert_eq!(output["Text Placeholder 4"], json!("R"));
}

#[test]
fn missing_catalog_file_is_an_io_error() {
    let result = SlotCatalog::from_file("/nonexistent/deckmatter/template.json");
    assert!(matches!(result, Err(deckmatter_core::Error::Io { .. })));
}
