//! Schema.org type taxonomy.

use std::collections::HashSet;

/// Types that express the primary intent of a page.
pub const PAGE_DEFINING_TYPES: &[&str] = &[
    "Article",
    "BlogPosting",
    "NewsArticle",
    "TechArticle",
    "Product",
    "LocalBusiness",
    "Service",
    "Restaurant",
    "FAQPage",
    "QAPage",
    "Event",
    "JobPosting",
    "Recipe",
    "Review",
    "WebPage",
    "MedicalWebPage",
    "Course",
];

/// Supporting entities, reported separately from page intent.
pub const ENTITY_TYPES: &[&str] = &["Person", "Organization"];

/// Tier a schema type name falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaTier {
    /// Primary page intent (`Product`, `Article`, ...)
    PageDefining,
    /// Supporting entity (`Person`, `Organization`)
    Entity,
    /// Structural/helper type or unknown name; never reported
    Ignored,
}

/// Immutable three-tier classification table.
///
/// Anything not in the page-defining or entity sets is ignored, which covers
/// helper types such as `PostalAddress`, `BreadcrumbList`, `WebSite` or
/// `Offer` as well as names nobody listed. Matching is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaTaxonomy {
    page_defining: HashSet<String>,
    entities: HashSet<String>,
}

impl SchemaTaxonomy {
    /// Builds a taxonomy from explicit sets.
    ///
    /// A name listed in both sets is treated as page-defining.
    pub fn new<P, E, S>(page_defining: P, entities: E) -> Self
    where
        P: IntoIterator<Item = S>,
        E: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            page_defining: page_defining.into_iter().map(Into::into).collect(),
            entities: entities.into_iter().map(Into::into).collect(),
        }
    }

    /// Tier of a single type name.
    pub fn tier(&self, type_name: &str) -> SchemaTier {
        if self.page_defining.contains(type_name) {
            SchemaTier::PageDefining
        } else if self.entities.contains(type_name) {
            SchemaTier::Entity
        } else {
            SchemaTier::Ignored
        }
    }
}

impl Default for SchemaTaxonomy {
    fn default() -> Self {
        Self::new(
            PAGE_DEFINING_TYPES.iter().copied(),
            ENTITY_TYPES.iter().copied(),
        )
    }
}
