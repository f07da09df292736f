//! Rule-based issue synthesis.
//!
//! Rules are evaluated top to bottom and each appends at most one message per
//! check; categories never short-circuit each other. The resulting list keeps
//! rule order and is neither sorted nor deduplicated.

use crate::config::{
    META_DESC_MAX_CHARS, META_DESC_MIN_CHARS, THIN_CONTENT_WORDS, TITLE_MAX_CHARS,
    TITLE_MIN_CHARS,
};
use crate::keywords::PrimaryKeywordMatch;
use crate::parse::{CanonicalType, PageStructure};
use crate::schema::SchemaClassification;

/// Everything the rule table looks at.
#[derive(Debug, Clone, Copy)]
pub struct IssueInputs<'a> {
    /// Structural fields of the page.
    pub page: &'a PageStructure,
    /// Classified schema types.
    pub schema: &'a SchemaClassification,
    /// Primary keyword evaluation; `None` when no keyword was supplied.
    pub primary: Option<&'a PrimaryKeywordMatch>,
}

/// Applies the rule table and returns the ordered issue list.
pub fn synthesize_issues(inputs: IssueInputs<'_>) -> Vec<String> {
    let IssueInputs {
        page,
        schema,
        primary,
    } = inputs;
    let mut issues = Vec::new();

    let title_len = page.title.chars().count();
    if page.title.is_empty() {
        issues.push("Missing Page Title".to_string());
    } else if title_len < TITLE_MIN_CHARS {
        issues.push(format!("Title too short ({title_len} chars)"));
    } else if title_len > TITLE_MAX_CHARS {
        issues.push(format!("Title too long ({title_len} chars)"));
    }

    let desc_len = page.meta_description.chars().count();
    if page.meta_description.is_empty() {
        issues.push("Missing Meta Description".to_string());
    } else if desc_len < META_DESC_MIN_CHARS {
        issues.push(format!("Meta Description too short ({desc_len} chars)"));
    } else if desc_len > META_DESC_MAX_CHARS {
        issues.push(format!("Meta Description too long ({desc_len} chars)"));
    }

    if page.canonical_url.is_empty() {
        issues.push("Missing Canonical URL".to_string());
    } else if page.canonical_type == CanonicalType::Canonicalized {
        issues.push(format!("Page is canonicalized to: {}", page.canonical_url));
    }

    if page.h1().is_empty() {
        issues.push("Missing H1 Tag".to_string());
    } else if page.h1_count() > 1 {
        issues.push(format!("Multiple H1 Tags found ({})", page.h1_count()));
    }

    if page.text.word_count < THIN_CONTENT_WORDS {
        issues.push(format!(
            "Thin Content (Only {} words)",
            page.text.word_count
        ));
    }

    let missing_alt = page.images.missing_alt_count();
    if missing_alt > 0 {
        issues.push(format!("Missing Alt Text on {missing_alt} images"));
    }

    if !schema.schema_present() {
        issues.push("No Schema Markup detected".to_string());
    }

    // Presence in the URL and in the full content is reported but never flagged
    if let Some(primary) = primary {
        if !primary.in_title {
            issues.push("Primary Keyword missing from Title".to_string());
        }
        if !primary.in_h1 {
            issues.push("Primary Keyword missing from H1".to_string());
        }
        if !primary.in_first_words {
            issues.push("Primary Keyword missing from First 100 Words".to_string());
        }
        if !primary.in_meta_description {
            issues.push("Primary Keyword missing from Meta Description".to_string());
        }
    }

    issues
}
