//! Slot-name classification heuristics
//!
//! Placeholder names in slide templates carry no formal schema; the only
//! signal is the name itself ("Col 1 Title Placeholder 2", "Content
//! Placeholder 3"). This module keeps the substring heuristics as named
//! predicates and exposes a single pure classification function so the
//! rules stay independently testable.
//!
//! Copyright (c) 2025 Deckmatter Team
//! Licensed under the Apache-2.0 license

use crate::types::StructureType;

/// Role a catalog slot plays within a layout's structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotClass {
    /// Per-column title slot in a columns layout
    ColumnTitle,
    /// Per-column body slot in a columns layout
    ColumnContent,
    /// Left/right title slot in a comparison layout
    SideTitle,
    /// Left/right body slot in a comparison layout
    SideContent,
    /// Numbered content area in a sections layout
    SectionContent,
    /// Caption text slot in a media layout
    Caption,
}

/// Name contains both "col" and "title" (case-insensitive)
pub fn is_column_title(slot_name: &str) -> bool {
    let name = slot_name.to_lowercase();
    name.contains("col") && name.contains("title")
}

/// Name contains "col" and either "text" or "content" (case-insensitive)
pub fn is_column_content(slot_name: &str) -> bool {
    let name = slot_name.to_lowercase();
    name.contains("col") && (name.contains("text") || name.contains("content"))
}

/// Name contains both "text" and "placeholder" (case-insensitive)
pub fn is_text_placeholder(slot_name: &str) -> bool {
    let name = slot_name.to_lowercase();
    name.contains("text") && name.contains("placeholder")
}

/// Name contains both "content" and "placeholder" (case-insensitive)
pub fn is_content_placeholder(slot_name: &str) -> bool {
    let name = slot_name.to_lowercase();
    name.contains("content") && name.contains("placeholder")
}

/// Classify a slot name for a given structure kind.
///
/// The title predicates win over the content predicates: a name matching
/// both (e.g. "Col 1 Title Text Placeholder") is a title slot.
pub fn classify(structure_type: StructureType, slot_name: &str) -> Option<SlotClass> {
    match structure_type {
        StructureType::Columns => {
            if is_column_title(slot_name) {
                Some(SlotClass::ColumnTitle)
            } else if is_column_content(slot_name) {
                Some(SlotClass::ColumnContent)
            } else {
                None
            }
        }
        StructureType::Comparison => {
            if is_text_placeholder(slot_name) {
                Some(SlotClass::SideTitle)
            } else if is_content_placeholder(slot_name) {
                Some(SlotClass::SideContent)
            } else {
                None
            }
        }
        StructureType::Sections => {
            if is_content_placeholder(slot_name) {
                Some(SlotClass::SectionContent)
            } else {
                None
            }
        }
        StructureType::Media => {
            if is_text_placeholder(slot_name) {
                Some(SlotClass::Caption)
            } else {
                None
            }
        }
    }
}
