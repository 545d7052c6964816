//! Pattern registry and dynamic mapping-rule synthesis
//!
//! The registry joins the static structure-pattern table with the external
//! slot catalog. Pattern lookups return the static pattern plus a freshly
//! synthesized rule set mapping structured paths to placeholder slots,
//! built by classifying the catalog's slot names for that layout.
//!
//! Copyright (c) 2025 Deckmatter Team
//! Licensed under the Apache-2.0 license

pub mod classify;
pub mod patterns;

pub use classify::SlotClass;
pub use patterns::{structure_patterns, StructurePattern, ValidationRules};

use indexmap::IndexMap;

use crate::types::{LayoutSlots, MappingTarget, SlotCatalog, StructureType};
use classify::classify;

/// Rule set for one layout: structured path -> output target, in emission order
pub type MappingRules = IndexMap<String, MappingTarget>;

/// A pattern lookup result: the static pattern merged with dynamically
/// synthesized mapping rules. Built fresh per lookup, not persisted.
#[derive(Debug)]
pub struct StructureDefinition {
    /// The static pattern for this layout
    pub pattern: &'static StructurePattern,
    /// Structured path -> slot/semantic target
    pub mapping_rules: MappingRules,
}

/// Registry of structured frontmatter patterns for the supported layouts
#[derive(Debug, Clone, Default)]
pub struct PatternRegistry {
    catalog: SlotCatalog,
}

impl PatternRegistry {
    /// Create a registry reading the given slot catalog
    pub fn new(catalog: SlotCatalog) -> Self {
        Self { catalog }
    }

    /// Look up a layout's pattern with its synthesized mapping rules.
    ///
    /// Returns `None` for layout names outside the supported set.
    pub fn get_structure_definition(&self, layout_name: &str) -> Option<StructureDefinition> {
        let pattern = structure_patterns().get(layout_name)?;
        let mapping_rules = self.build_mapping_rules(layout_name, pattern.structure_type);
        Some(StructureDefinition {
            pattern,
            mapping_rules,
        })
    }

    /// Whether a layout supports structured frontmatter
    pub fn supports_structured_frontmatter(&self, layout_name: &str) -> bool {
        structure_patterns().contains_key(layout_name)
    }

    /// Names of all layouts that support structured frontmatter
    pub fn get_supported_layouts(&self) -> Vec<&'static str> {
        structure_patterns().keys().copied().collect()
    }

    /// Literal authoring example for a layout, if supported
    pub fn get_example(&self, layout_name: &str) -> Option<&'static str> {
        structure_patterns().get(layout_name).map(|p| p.example)
    }

    /// Synthesize the path -> target rules for one layout.
    ///
    /// The title rule is unconditional; slot rules come from classifying the
    /// catalog's placeholder names for this layout.
    fn build_mapping_rules(&self, layout_name: &str, structure_type: StructureType) -> MappingRules {
        let mut rules = MappingRules::new();
        rules.insert(
            "title".to_string(),
            MappingTarget::Semantic("title".to_string()),
        );

        let slots = self.catalog.slots_for(layout_name);
        match structure_type {
            StructureType::Columns => {
                if let Some(slots) = slots {
                    synthesize_column_rules(layout_name, slots, &mut rules);
                }
            }
            StructureType::Comparison => {
                if let Some(slots) = slots {
                    synthesize_comparison_rules(layout_name, slots, &mut rules);
                }
            }
            StructureType::Sections => {
                if let Some(slots) = slots {
                    synthesize_section_rules(layout_name, slots, &mut rules);
                }
            }
            StructureType::Media => {
                if let Some(slots) = slots {
                    synthesize_media_caption_rule(slots, &mut rules);
                }
                // Description always resolves through semantic detection
                rules.insert(
                    "media.description".to_string(),
                    MappingTarget::Semantic("content".to_string()),
                );
            }
        }

        rules
    }
}

/// Classified slots of one class, ordered by ordinal index
fn classified_slots(
    layout_name: &str,
    slots: &LayoutSlots,
    structure_type: StructureType,
    class: SlotClass,
) -> Vec<String> {
    let mut matched: Vec<(u32, String)> = Vec::new();
    for (index, slot_name) in &slots.placeholders {
        if classify(structure_type, slot_name) != Some(class) {
            continue;
        }
        match index.parse::<u32>() {
            Ok(ordinal) => matched.push((ordinal, slot_name.clone())),
            Err(_) => {
                log::warn!(
                    "layout '{}': slot '{}' has non-numeric ordinal '{}', skipping",
                    layout_name,
                    slot_name,
                    index
                );
            }
        }
    }
    matched.sort_by_key(|(ordinal, _)| *ordinal);
    matched.into_iter().map(|(_, name)| name).collect()
}

fn synthesize_column_rules(layout_name: &str, slots: &LayoutSlots, rules: &mut MappingRules) {
    let titles = classified_slots(layout_name, slots, StructureType::Columns, SlotClass::ColumnTitle);
    let contents =
        classified_slots(layout_name, slots, StructureType::Columns, SlotClass::ColumnContent);

    for (i, slot_name) in titles.into_iter().enumerate() {
        rules.insert(format!("columns[{}].title", i), MappingTarget::Slot(slot_name));
    }
    for (i, slot_name) in contents.into_iter().enumerate() {
        rules.insert(format!("columns[{}].content", i), MappingTarget::Slot(slot_name));
    }
}

fn synthesize_comparison_rules(layout_name: &str, slots: &LayoutSlots, rules: &mut MappingRules) {
    let titles =
        classified_slots(layout_name, slots, StructureType::Comparison, SlotClass::SideTitle);
    let contents =
        classified_slots(layout_name, slots, StructureType::Comparison, SlotClass::SideContent);

    if let [left, right, ..] = titles.as_slice() {
        rules.insert(
            "comparison.left.title".to_string(),
            MappingTarget::Slot(left.clone()),
        );
        rules.insert(
            "comparison.right.title".to_string(),
            MappingTarget::Slot(right.clone()),
        );
    } else if !titles.is_empty() {
        log::warn!(
            "layout '{}': found {} side title slot(s), need 2; omitting title rules",
            layout_name,
            titles.len()
        );
    }

    if let [left, right, ..] = contents.as_slice() {
        rules.insert(
            "comparison.left.content".to_string(),
            MappingTarget::Slot(left.clone()),
        );
        rules.insert(
            "comparison.right.content".to_string(),
            MappingTarget::Slot(right.clone()),
        );
    } else if !contents.is_empty() {
        log::warn!(
            "layout '{}': found {} side content slot(s), need 2; omitting content rules",
            layout_name,
            contents.len()
        );
    }
}

fn synthesize_section_rules(layout_name: &str, slots: &LayoutSlots, rules: &mut MappingRules) {
    let contents =
        classified_slots(layout_name, slots, StructureType::Sections, SlotClass::SectionContent);

    for (i, slot_name) in contents.into_iter().take(2).enumerate() {
        rules.insert(
            format!("sections[{}].content", i),
            MappingTarget::Slot(slot_name),
        );
    }
}

/// First text placeholder in catalog iteration order becomes the caption slot
fn synthesize_media_caption_rule(slots: &LayoutSlots, rules: &mut MappingRules) {
    for slot_name in slots.placeholders.values() {
        if classify(StructureType::Media, slot_name) == Some(SlotClass::Caption) {
            rules.insert(
                "media.caption".to_string(),
                MappingTarget::Slot(slot_name.clone()),
            );
            break;
        }
    }
}
