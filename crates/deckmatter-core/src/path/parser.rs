//! Tokenizer for structured path expressions
//!
//! Parses dot/bracket paths like `columns[0].title` into an ordered list of
//! segments. Parsing is infallible: malformed bracket syntax degrades to a
//! best-effort field-name interpretation instead of raising.
//!
//! Copyright (c) 2025 Deckmatter Team
//! Licensed under the Apache-2.0 license

/// One step in a structured path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Mapping key lookup (e.g. `title`)
    Field(String),
    /// Sequence ordinal lookup (e.g. `[0]`)
    Index(usize),
}

/// Tokenize a path expression into segments.
///
/// Grammar notes, all degradations rather than errors:
/// - Bracket content that is not a valid non-negative integer becomes a
///   `Field` segment (`foo[bar]` reads key `"bar"`).
/// - An unclosed `[` is folded into the surrounding field token as a
///   literal character.
/// - A single `.` immediately after `]` is consumed as a separator.
/// - Trailing or doubled dots yield empty field tokens, which behave as
///   ordinary failing lookups downstream.
pub fn parse(path: &str) -> Vec<PathSegment> {
    let chars: Vec<char> = path.chars().collect();
    let mut segments = Vec::new();
    let mut field = String::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '[' => match find_closing_bracket(&chars, i + 1) {
                Some(close) => {
                    if !field.is_empty() {
                        segments.push(PathSegment::Field(std::mem::take(&mut field)));
                    }
                    let inner: String = chars[i + 1..close].iter().collect();
                    match inner.parse::<usize>() {
                        Ok(index) => segments.push(PathSegment::Index(index)),
                        // Non-integer bracket content falls back to a string key
                        Err(_) => segments.push(PathSegment::Field(inner)),
                    }
                    i = close + 1;
                    if i < chars.len() && chars[i] == '.' {
                        i += 1;
                    }
                }
                None => {
                    // No closing bracket: keep the '[' as literal text
                    field.push('[');
                    i += 1;
                }
            },
            '.' => {
                segments.push(PathSegment::Field(std::mem::take(&mut field)));
                i += 1;
            }
            ch => {
                field.push(ch);
                i += 1;
            }
        }
    }

    if !field.is_empty() || path.ends_with('.') {
        segments.push(PathSegment::Field(field));
    }

    segments
}

fn find_closing_bracket(chars: &[char], from: usize) -> Option<usize> {
    (from..chars.len()).find(|&j| chars[j] == ']')
}
