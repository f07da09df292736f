//! Per-page analysis pipeline.
//!
//! Fetch → structural extraction → structured data discovery → schema
//! classification → keyword matching → issue synthesis → result assembly.
//! Each call is self-contained: nothing is cached or shared between calls
//! apart from the HTTP client.

mod result;

use std::sync::Arc;

use log::{debug, warn};
use scraper::Html;

pub use result::{AnalysisResult, StatusCode, RESULT_KEYS};

use crate::fetch::fetch_document;
use crate::issues::{synthesize_issues, IssueInputs};
use crate::keywords::{match_primary_keyword, match_secondary_keywords, primary_flag};
use crate::parse::{extract_page_structure, extract_structured_data};
use crate::schema::{classify_schema_types, SchemaTaxonomy};
use crate::utils::{join_or_none, yes_no};

/// What to analyze and which keywords to check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisInput {
    /// Absolute URL of the page.
    pub url: String,
    /// Primary keyword; empty means "not evaluated".
    pub primary_keyword: String,
    /// Secondary keywords in the order supplied.
    pub secondary_keywords: Vec<String>,
}

impl AnalysisInput {
    /// Convenience constructor.
    pub fn new(
        url: impl Into<String>,
        primary_keyword: impl Into<String>,
        secondary_keywords: Vec<String>,
    ) -> Self {
        Self {
            url: url.into(),
            primary_keyword: primary_keyword.into(),
            secondary_keywords,
        }
    }
}

/// Fetches pages and turns them into audit records.
#[derive(Debug, Clone)]
pub struct SeoAnalyzer {
    client: Arc<reqwest::Client>,
    taxonomy: SchemaTaxonomy,
}

impl SeoAnalyzer {
    /// Creates an analyzer using the given client and schema taxonomy.
    pub fn new(client: Arc<reqwest::Client>, taxonomy: SchemaTaxonomy) -> Self {
        Self { client, taxonomy }
    }

    /// Analyzes one page.
    ///
    /// Never fails: transport errors and non-200 responses produce the
    /// error-shaped record.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use seo_audit::initialization::init_client;
    /// use seo_audit::{Config, SchemaTaxonomy, SeoAnalyzer};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = init_client(&Config::default())?;
    /// let analyzer = SeoAnalyzer::new(client, SchemaTaxonomy::default());
    /// let result = analyzer
    ///     .analyze("https://example.com/", "example", &["domain".to_string()])
    ///     .await;
    /// println!("{} -> {:?}", result.status_code, result.issues_list);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn analyze(
        &self,
        url: &str,
        primary_keyword: &str,
        secondary_keywords: &[String],
    ) -> AnalysisResult {
        let input = AnalysisInput::new(url, primary_keyword, secondary_keywords.to_vec());
        self.analyze_input(&input).await
    }

    /// Analyzes one page described by an [`AnalysisInput`].
    pub async fn analyze_input(&self, input: &AnalysisInput) -> AnalysisResult {
        match fetch_document(&self.client, &input.url).await {
            Ok(document) => {
                analyze_document(input, document.status, &document.body, &self.taxonomy)
            }
            Err(e) => {
                warn!("Failed to fetch {}: {e}", input.url);
                AnalysisResult::error(StatusCode::from_failure(e))
            }
        }
    }
}

/// Runs the pipeline over an already-fetched document.
///
/// Any status other than 200 yields the error shape carrying that status; no
/// partially populated record is ever returned. The output depends only on the
/// arguments, so identical inputs produce identical records.
pub fn analyze_document(
    input: &AnalysisInput,
    status: u16,
    body: &str,
    taxonomy: &SchemaTaxonomy,
) -> AnalysisResult {
    if status != 200 {
        debug!("{} answered {status}; reporting error shape", input.url);
        return AnalysisResult::error(StatusCode::Http(status));
    }

    let document = Html::parse_document(body);
    let page = extract_page_structure(&document, &input.url);
    let structured = extract_structured_data(&document, body);
    let schema = classify_schema_types(structured.all_types(), taxonomy);
    debug!(
        "Schema for {}: primary={:?}, entities={:?}, malformed JSON-LD scripts={}",
        input.url, schema.primary, schema.entities, structured.malformed_json_ld
    );

    let primary = match_primary_keyword(&input.primary_keyword, &input.url, &page);
    let secondary = match_secondary_keywords(&input.secondary_keywords, &page);
    let issues = synthesize_issues(IssueInputs {
        page: &page,
        schema: &schema,
        primary: primary.as_ref(),
    });
    debug!("{} issues for {}", issues.len(), input.url);

    let flag = |pick: fn(&crate::keywords::PrimaryKeywordMatch) -> bool| {
        primary_flag(primary.as_ref(), pick)
    };

    AnalysisResult {
        status_code: StatusCode::Http(status),
        title_length: Some(page.title.chars().count()),
        meta_desc_length: Some(page.meta_description.chars().count()),
        canonical_type: page.canonical_type.to_string(),
        meta_robots: page.meta_robots_or_default().to_string(),
        h1: page.h1().to_string(),
        h1_count: Some(page.h1_count()),
        word_count: Some(page.text.word_count),
        internal_links: Some(page.internal_links),
        images: Some(page.images.total),
        missing_alt_count: Some(page.images.missing_alt_count()),
        missing_alt_files: join_or_none(&page.images.missing_alt_files),
        schema_types: schema.schema_types(),
        schema_present: yes_no(schema.schema_present()),
        entity_schema_present: schema.entity_schema_present(),
        primary_keyword: input.primary_keyword.clone(),
        primary_in_title: flag(|m| m.in_title),
        primary_in_h1: flag(|m| m.in_h1),
        primary_in_url: flag(|m| m.in_url),
        primary_in_content: flag(|m| m.in_content),
        primary_in_first_100: flag(|m| m.in_first_words),
        primary_in_meta_desc: flag(|m| m.in_meta_description),
        secondary_keywords: input.secondary_keywords.join(", "),
        secondary_in_h2: secondary.in_h2_display(),
        secondary_in_h3: secondary.in_h3_display(),
        secondary_in_content_list: secondary.content_display(),
        has_critical_issues: Some(!issues.is_empty()),
        issues_list: Some(issues),
        title: page.title,
        meta_description: page.meta_description,
        canonical_url: page.canonical_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://shop.example.com/widgets";

    fn run(html: &str, primary: &str, secondary: &[&str]) -> AnalysisResult {
        let input = AnalysisInput::new(
            URL,
            primary,
            secondary.iter().map(|s| s.to_string()).collect(),
        );
        analyze_document(&input, 200, html, &SchemaTaxonomy::default())
    }

    #[test]
    fn test_non_200_is_error_shape() {
        let input = AnalysisInput::new(URL, "widget", vec![]);
        let result = analyze_document(
            &input,
            404,
            "<title>Not found</title>",
            &SchemaTaxonomy::default(),
        );
        assert_eq!(result, AnalysisResult::error(StatusCode::Http(404)));
    }

    #[test]
    fn test_json_ld_product_and_organization() {
        let result = run(
            r#"<script type="application/ld+json">{"@type": ["Product", "Organization"]}</script>"#,
            "",
            &[],
        );
        assert_eq!(result.schema_types, "Product");
        assert_eq!(result.schema_present, "Yes");
        assert_eq!(result.entity_schema_present.as_deref(), Some("Organization"));
    }

    #[test]
    fn test_regex_fallback_classification() {
        let result = run(
            r#"<html><body><pre>{"@type": "FAQPage"} and again {"@type": "FAQPage"}</pre></body></html>"#,
            "",
            &[],
        );
        assert_eq!(result.schema_types, "FAQPage");
        assert_eq!(result.schema_present, "Yes");
        assert_eq!(result.entity_schema_present, None);
    }

    #[test]
    fn test_empty_primary_keyword_reports_not_available() {
        let result = run("<title>Widgets</title>", "", &[]);
        for value in [
            &result.primary_in_title,
            &result.primary_in_h1,
            &result.primary_in_url,
            &result.primary_in_content,
            &result.primary_in_first_100,
            &result.primary_in_meta_desc,
        ] {
            assert_eq!(value, "N/A");
        }
        assert!(!result
            .issues()
            .iter()
            .any(|issue| issue.starts_with("Primary Keyword")));
    }

    #[test]
    fn test_primary_keyword_in_title() {
        let result = run("<title>Best Widgets Online</title>", "Widget", &[]);
        assert_eq!(result.primary_in_title, "Yes");
        assert_eq!(result.primary_in_url, "Yes");
        assert_eq!(result.primary_in_h1, "No");
        assert!(result
            .issues()
            .contains(&"Primary Keyword missing from H1".to_string()));
    }

    #[test]
    fn test_two_h1_elements() {
        let result = run("<h1>One</h1><h1>Two</h1>", "", &[]);
        assert_eq!(result.h1_count, Some(2));
        assert_eq!(result.h1, "One");
        assert!(result
            .issues()
            .contains(&"Multiple H1 Tags found (2)".to_string()));
    }

    #[test]
    fn test_zero_h1_elements() {
        let result = run("<p>text</p>", "", &[]);
        assert_eq!(result.h1, "");
        assert_eq!(result.h1_count, Some(0));
        assert!(result.issues().contains(&"Missing H1 Tag".to_string()));
        assert_eq!(result.has_critical_issues, Some(true));
    }

    #[test]
    fn test_secondary_keyword_counts() {
        let result = run(
            "<h2>Gadget guide</h2><p>a gadget, another gadget</p>",
            "",
            &["gadget", "missing"],
        );
        assert_eq!(result.secondary_keywords, "gadget, missing");
        assert_eq!(result.secondary_in_h2, "gadget");
        assert_eq!(result.secondary_in_h3, "None");
        assert_eq!(result.secondary_in_content_list, "gadget (3)");
    }

    #[test]
    fn test_meta_robots_default_and_declared() {
        assert_eq!(run("<p>x</p>", "", &[]).meta_robots, "index, follow");
        assert_eq!(
            run(r#"<meta name="robots" content="noindex">"#, "", &[]).meta_robots,
            "noindex"
        );
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let html = r#"<title>Repeatable page title for testing</title><h1>A</h1><img src="x.png">"#;
        let first = serde_json::to_string(&run(html, "page", &["a"])).expect("serializable");
        let second = serde_json::to_string(&run(html, "page", &["a"])).expect("serializable");
        assert_eq!(first, second);
    }

    #[test]
    fn test_success_shape_has_every_key() {
        let result = run("<title>x</title>", "x", &["y"]);
        let value = serde_json::to_value(&result).expect("serializable");
        let object = value.as_object().expect("object");
        assert_eq!(object.len(), RESULT_KEYS.len());
        for key in RESULT_KEYS {
            assert!(object.contains_key(*key), "missing {key}");
        }
    }
}
