//! Keyword presence and frequency analysis.
//!
//! All checks are case-insensitive substring containment: `"widget"` matches
//! `"Widgets"` and `"subwidgetry"`. Nothing is tokenized or stemmed.

use crate::parse::PageStructure;
use crate::utils::{join_or_none, yes_no};

/// Where the primary keyword was (or was not) found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimaryKeywordMatch {
    /// Found in the title.
    pub in_title: bool,
    /// Found in the first H1.
    pub in_h1: bool,
    /// Found in the raw requested URL string.
    pub in_url: bool,
    /// Found anywhere in the visible text.
    pub in_content: bool,
    /// Found in the first 100 words.
    pub in_first_words: bool,
    /// Found in the meta description.
    pub in_meta_description: bool,
}

/// Secondary keyword report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecondaryKeywordMatch {
    /// Keywords (as supplied) found in the joined H2 text.
    pub in_h2: Vec<String>,
    /// Keywords (as supplied) found in the joined H3 text.
    pub in_h3: Vec<String>,
    /// `(keyword, occurrences)` in the visible text; zero counts omitted.
    pub content_counts: Vec<(String, usize)>,
}

impl SecondaryKeywordMatch {
    /// `Secondary_in_H2` display value.
    pub fn in_h2_display(&self) -> String {
        join_or_none(&self.in_h2)
    }

    /// `Secondary_in_H3` display value.
    pub fn in_h3_display(&self) -> String {
        join_or_none(&self.in_h3)
    }

    /// `Secondary_in_Content_List` display value, e.g. `"kw (3), other (1)"`.
    pub fn content_display(&self) -> String {
        let entries: Vec<String> = self
            .content_counts
            .iter()
            .map(|(keyword, count)| format!("{keyword} ({count})"))
            .collect();
        join_or_none(&entries)
    }
}

/// Evaluates the primary keyword against a page.
///
/// Returns `None` when the keyword is empty: the keyword was not evaluated,
/// which is reported as `"N/A"` rather than `"No"`.
pub fn match_primary_keyword(
    keyword: &str,
    url: &str,
    page: &PageStructure,
) -> Option<PrimaryKeywordMatch> {
    if keyword.is_empty() {
        return None;
    }
    let needle = keyword.to_lowercase();
    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    Some(PrimaryKeywordMatch {
        in_title: contains(&page.title),
        in_h1: contains(page.h1()),
        in_url: contains(url),
        in_content: contains(&page.text.content),
        // already lowercased by the extractor
        in_first_words: page.text.first_words.contains(&needle),
        in_meta_description: contains(&page.meta_description),
    })
}

/// Evaluates secondary keywords against a page.
///
/// Each keyword is trimmed for matching and skipped when empty; reports list
/// the keyword as supplied. Content counts are non-overlapping substring
/// occurrences, not word matches.
pub fn match_secondary_keywords<S: AsRef<str>>(
    keywords: &[S],
    page: &PageStructure,
) -> SecondaryKeywordMatch {
    let h2_text = page.h2_texts.join(" ").to_lowercase();
    let h3_text = page.h3_texts.join(" ").to_lowercase();
    let content = page.text.content.to_lowercase();

    let mut result = SecondaryKeywordMatch::default();
    for keyword in keywords {
        let keyword = keyword.as_ref();
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            continue;
        }
        if h2_text.contains(&needle) {
            result.in_h2.push(keyword.to_string());
        }
        if h3_text.contains(&needle) {
            result.in_h3.push(keyword.to_string());
        }
        let count = content.matches(needle.as_str()).count();
        if count > 0 {
            result.content_counts.push((keyword.to_string(), count));
        }
    }
    result
}

/// Formats one primary-keyword flag, `"N/A"` when not evaluated.
pub fn primary_flag(
    matched: Option<&PrimaryKeywordMatch>,
    pick: impl Fn(&PrimaryKeywordMatch) -> bool,
) -> String {
    match matched {
        Some(m) => yes_no(pick(m)),
        None => crate::config::NOT_AVAILABLE.to_string(),
    }
}
