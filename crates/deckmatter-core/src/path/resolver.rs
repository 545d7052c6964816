//! Walks parsed path segments over nested JSON values
//!
//! Extraction returns borrowed values and reports missing structure as
//! absent (`None`), never as an error. Assignment creates intermediate
//! structure on demand, growing arrays and replacing wrong-typed
//! intermediates so the write always lands.
//!
//! Copyright (c) 2025 Deckmatter Team
//! Licensed under the Apache-2.0 license

use serde_json::{Map, Value};

use super::parser::PathSegment;

/// Extract the value at the segment sequence, or absent.
///
/// A field step requires the current value to be an object containing the
/// key; an index step requires an array strictly longer than the index.
pub fn extract<'a>(root: &'a Value, segments: &[PathSegment]) -> Option<&'a Value> {
    let mut current = root;
    for segment in segments {
        current = match segment {
            PathSegment::Field(key) => current.as_object()?.get(key)?,
            PathSegment::Index(index) => current.as_array()?.get(*index)?,
        };
    }
    Some(current)
}

/// Set the value at the segment sequence, creating missing structure.
///
/// A missing object key is created as `{}`, or `[]` when the next segment
/// is an index. Arrays grow to make the index addressable: intermediate
/// positions pad with `{}`, the final position pads with null. The final
/// slot is overwritten unconditionally.
pub fn assign(root: &mut Value, segments: &[PathSegment], value: Value) {
    let Some((last, intermediate)) = segments.split_last() else {
        return;
    };

    let mut current = root;
    for (i, segment) in intermediate.iter().enumerate() {
        match segment {
            PathSegment::Field(key) => {
                let next_is_index = matches!(segments[i + 1], PathSegment::Index(_));
                if !current.is_object() {
                    *current = Value::Object(Map::new());
                }
                let Value::Object(entries) = current else {
                    unreachable!()
                };
                current = entries.entry(key.clone()).or_insert_with(|| {
                    if next_is_index {
                        Value::Array(Vec::new())
                    } else {
                        Value::Object(Map::new())
                    }
                });
            }
            PathSegment::Index(index) => {
                if !current.is_array() {
                    *current = Value::Array(Vec::new());
                }
                let Value::Array(items) = current else {
                    unreachable!()
                };
                while items.len() <= *index {
                    items.push(Value::Object(Map::new()));
                }
                current = &mut items[*index];
            }
        }
    }

    match last {
        PathSegment::Field(key) => {
            if !current.is_object() {
                *current = Value::Object(Map::new());
            }
            let Value::Object(entries) = current else {
                unreachable!()
            };
            entries.insert(key.clone(), value);
        }
        PathSegment::Index(index) => {
            if !current.is_array() {
                *current = Value::Array(Vec::new());
            }
            let Value::Array(items) = current else {
                unreachable!()
            };
            while items.len() < *index {
                items.push(Value::Null);
            }
            if items.len() == *index {
                items.push(value);
            } else {
                items[*index] = value;
            }
        }
    }
}
