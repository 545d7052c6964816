//! Path resolver for structured frontmatter expressions
//!
//! This module parses and evaluates dot/bracket path expressions
//! (`columns[0].title`, `comparison.left.content`) against nested JSON
//! data. Extraction is the read direction used by the converter; assignment
//! is the symmetric create-on-demand write supporting the same grammar.
//!
//! Copyright (c) 2025 Deckmatter Team
//! Licensed under the Apache-2.0 license

pub mod parser;
pub mod resolver;


pub use parser::PathSegment;

use serde_json::Value;
use std::fmt;

/// A parsed structured path ready for repeated evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredPath {
    segments: Vec<PathSegment>,
}

impl StructuredPath {
    /// Parse a path expression. Never fails; malformed syntax degrades to
    /// field-name segments (see [`parser::parse`]).
    pub fn parse(path: &str) -> Self {
        Self {
            segments: parser::parse(path),
        }
    }

    /// The parsed segment sequence
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Extract the value at this path, or absent
    pub fn extract<'a>(&self, data: &'a Value) -> Option<&'a Value> {
        resolver::extract(data, &self.segments)
    }

    /// Extract an owned copy of the value at this path
    pub fn extract_owned(&self, data: &Value) -> Option<Value> {
        self.extract(data).cloned()
    }

    /// Set the value at this path, creating missing structure on demand
    pub fn assign(&self, data: &mut Value, value: Value) {
        resolver::assign(data, &self.segments, value)
    }

    /// Whether the path resolves to a value in the data
    pub fn exists(&self, data: &Value) -> bool {
        self.extract(data).is_some()
    }
}

impl fmt::Display for StructuredPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// Extract the value at `path` from `data`, or absent
pub fn extract<'a>(path: &str, data: &'a Value) -> Option<&'a Value> {
    StructuredPath::parse(path).extract(data)
}

/// Set the value at `path` in `data`, creating missing structure
pub fn assign(path: &str, data: &mut Value, value: Value) {
    StructuredPath::parse(path).assign(data, value)
}
