//! Structural validation of structured frontmatter
//!
//! The validator checks a parsed structured input against a layout's
//! validation rules and reports findings entirely through a
//! [`ValidationReport`]: it never raises, even for deeply malformed input.
//! Only the hard-error conditions clear the `valid` flag: a missing
//! required top-level field, a missing required comparison side, or a
//! below-minimum entry count. A non-object column or side is recorded as
//! an error without clearing `valid`; that asymmetry matches the observed
//! behavior of existing decks and is preserved deliberately.
//!
//! Copyright (c) 2025 Deckmatter Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;

use crate::registry::patterns::{structure_patterns, ValidationRules};
use crate::types::{StructureType, ValidationReport};

const DEFAULT_MIN_COLUMNS: usize = 1;
const DEFAULT_MAX_COLUMNS: usize = 4;
const DEFAULT_MIN_SECTIONS: usize = 2;
const DEFAULT_MAX_SECTIONS: usize = 2;
const DEFAULT_SIDES: &[&str] = &["left", "right"];

/// Validator for structured frontmatter against layout requirements
#[derive(Debug, Clone, Copy, Default)]
pub struct StructureValidator;

impl StructureValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate structured input against a layout's rules.
    ///
    /// Unknown layouts are valid with a single warning; the absence of a
    /// pattern is not a user error.
    pub fn validate(&self, data: &Value, layout_name: &str) -> ValidationReport {
        let Some(pattern) = structure_patterns().get(layout_name) else {
            let mut report = ValidationReport::new();
            report.warn("No validation rules available for this layout");
            return report;
        };

        let rules = &pattern.validation;
        let mut report = ValidationReport::new();

        for field in &rules.required_fields {
            if data.get(field).is_none() {
                report.fail(format!("Missing required field: '{}'", field));
            }
        }

        match pattern.structure_type {
            StructureType::Columns if data.get("columns").is_some() => {
                self.validate_columns(data, rules, &mut report);
            }
            StructureType::Comparison if data.get("comparison").is_some() => {
                self.validate_comparison(data, rules, &mut report);
            }
            StructureType::Sections if data.get("sections").is_some() => {
                self.validate_sections(data, rules, &mut report);
            }
            _ => {}
        }

        report
    }

    fn validate_columns(&self, data: &Value, rules: &ValidationRules, report: &mut ValidationReport) {
        let columns = match data.get("columns").and_then(Value::as_array) {
            Some(columns) => columns.as_slice(),
            // Non-sequence value: treat as zero entries so the count check reports it
            None => &[],
        };

        let min = rules.min_columns.unwrap_or(DEFAULT_MIN_COLUMNS);
        let max = rules.max_columns.unwrap_or(DEFAULT_MAX_COLUMNS);

        if columns.len() < min {
            report.fail(format!(
                "Expected at least {} columns, got {}",
                min,
                columns.len()
            ));
        } else if columns.len() > max {
            report.warn(format!(
                "Expected at most {} columns, got {} (extra columns will be ignored)",
                max,
                columns.len()
            ));
        }

        for (i, column) in columns.iter().enumerate() {
            let Some(entry) = column.as_object() else {
                report.error(format!(
                    "Column {} must be an object with 'title' and 'content'",
                    i + 1
                ));
                continue;
            };

            if !entry.contains_key("title") {
                report.warn(format!("Column {} missing 'title' field", i + 1));
            }
            if !entry.contains_key("content") {
                report.warn(format!("Column {} missing 'content' field", i + 1));
            }
        }
    }

    fn validate_comparison(
        &self,
        data: &Value,
        rules: &ValidationRules,
        report: &mut ValidationReport,
    ) {
        let comparison = data.get("comparison");
        let sides = if rules.required_comparison_fields.is_empty() {
            DEFAULT_SIDES
        } else {
            rules.required_comparison_fields.as_slice()
        };

        for side in sides {
            let Some(side_data) = comparison.and_then(|c| c.get(side)) else {
                report.fail(format!("Missing required comparison side: '{}'", side));
                continue;
            };

            let Some(entry) = side_data.as_object() else {
                report.error(format!("Comparison '{}' must be an object", side));
                continue;
            };

            if !entry.contains_key("title") {
                report.warn(format!("Comparison '{}' missing 'title' field", side));
            }
            if !entry.contains_key("content") {
                report.warn(format!("Comparison '{}' missing 'content' field", side));
            }
        }
    }

    fn validate_sections(
        &self,
        data: &Value,
        rules: &ValidationRules,
        report: &mut ValidationReport,
    ) {
        let count = data
            .get("sections")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);

        let min = rules.min_sections.unwrap_or(DEFAULT_MIN_SECTIONS);
        let max = rules.max_sections.unwrap_or(DEFAULT_MAX_SECTIONS);

        if count < min {
            report.fail(format!("Expected at least {} sections, got {}", min, count));
        } else if count > max {
            report.warn(format!(
                "Expected at most {} sections, got {} (extra sections will be ignored)",
                max, count
            ));
        }
    }
}
