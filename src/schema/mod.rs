//! Schema type classification.
//!
//! Partitions discovered schema.org type names into page-defining types and
//! supporting entities, deduplicated and sorted for reporting.

mod taxonomy;

use std::collections::BTreeSet;

pub use taxonomy::{SchemaTaxonomy, SchemaTier, ENTITY_TYPES, PAGE_DEFINING_TYPES};

use crate::utils::join_or_none;

/// Classified schema types of one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaClassification {
    /// Sorted, unique page-defining types.
    pub primary: Vec<String>,
    /// Sorted, unique entity types.
    pub entities: Vec<String>,
}

impl SchemaClassification {
    /// `Schema_Types`: comma-joined primary types, or `"None"`.
    pub fn schema_types(&self) -> String {
        join_or_none(&self.primary)
    }

    /// `Schema_Present`: true only when a page-defining type was found.
    pub fn schema_present(&self) -> bool {
        !self.primary.is_empty()
    }

    /// `Entity_Schema_Present`: comma-joined entities, only when there are any.
    pub fn entity_schema_present(&self) -> Option<String> {
        if self.entities.is_empty() {
            None
        } else {
            Some(self.entities.join(", "))
        }
    }
}

/// Classifies discovered type names against a taxonomy.
///
/// Empty names are skipped; ignored and unknown names are dropped silently.
pub fn classify_schema_types<'a, I>(types: I, taxonomy: &SchemaTaxonomy) -> SchemaClassification
where
    I: IntoIterator<Item = &'a str>,
{
    let mut primary = BTreeSet::new();
    let mut entities = BTreeSet::new();

    for name in types {
        if name.is_empty() {
            continue;
        }
        match taxonomy.tier(name) {
            SchemaTier::PageDefining => {
                primary.insert(name.to_string());
            }
            SchemaTier::Entity => {
                entities.insert(name.to_string());
            }
            SchemaTier::Ignored => {}
        }
    }

    SchemaClassification {
        primary: primary.into_iter().collect(),
        entities: entities.into_iter().collect(),
    }
}
