//! Visible text extraction.

use scraper::{Html, Node};

use crate::config::FIRST_WORDS_WINDOW;

/// Elements whose text never reaches the reader.
const HIDDEN_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Text content of a page as a reader would see it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleText {
    /// Every text node outside `<script>`/`<style>`, joined with single spaces.
    pub content: String,
    /// Number of whitespace-separated tokens in `content`.
    pub word_count: usize,
    /// The first [`FIRST_WORDS_WINDOW`] tokens, single-space joined and lowercased.
    pub first_words: String,
}

/// Collects the visible text of a document.
///
/// Text inside `<script>` and `<style>` subtrees is skipped. Comments and the
/// doctype are not text nodes and never contribute. Fragments are joined with a
/// space so adjacent elements (`<p>a</p><p>b</p>`) do not fuse into one word.
pub fn extract_visible_text(document: &Html) -> VisibleText {
    let mut fragments: Vec<&str> = Vec::new();

    for node in document.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| HIDDEN_TEXT_ELEMENTS.contains(&element.name()))
        });
        if !hidden {
            fragments.push(&**text);
        }
    }

    let content = fragments.join(" ");
    let words: Vec<&str> = content.split_whitespace().collect();
    let first_words = words
        .iter()
        .take(FIRST_WORDS_WINDOW)
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    VisibleText {
        word_count: words.len(),
        first_words,
        content,
    }
}
