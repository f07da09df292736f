//! Integration tests for single-page analysis against a mock server.

mod helpers;

use helpers::{closed_port_url, healthy_page, mount_page, mount_status, test_client};
use seo_audit::{SchemaTaxonomy, SeoAnalyzer, StatusCode};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn analyzer() -> SeoAnalyzer {
    SeoAnalyzer::new(test_client(), SchemaTaxonomy::default())
}

#[tokio::test]
async fn test_healthy_page_has_no_issues() {
    let server = MockServer::start().await;
    let url = format!("{}/widgets", server.uri());
    mount_page(&server, "/widgets", healthy_page(&url)).await;

    let secondary = vec![
        "widget sizes".to_string(),
        "care".to_string(),
        "absent".to_string(),
    ];
    let result = analyzer().analyze(&url, "widget", &secondary).await;

    assert_eq!(result.status_code, StatusCode::Http(200));
    assert!(result.issues().is_empty(), "issues: {:?}", result.issues());
    assert_eq!(result.has_critical_issues, Some(false));
    assert_eq!(result.title, "Blue Widgets for Every Workshop and Garage");
    assert_eq!(result.canonical_type, "Self");
    assert_eq!(result.meta_robots, "index, follow");
    assert_eq!(result.h1, "Blue Widgets");
    assert_eq!(result.h1_count, Some(1));
    assert_eq!(result.internal_links, Some(1));
    assert_eq!(result.images, Some(1));
    assert_eq!(result.missing_alt_files, "None");
    assert_eq!(result.schema_types, "Product");
    assert_eq!(result.schema_present, "Yes");
    assert_eq!(result.entity_schema_present.as_deref(), Some("Organization"));
    assert_eq!(result.primary_in_title, "Yes");
    assert_eq!(result.primary_in_h1, "Yes");
    assert_eq!(result.primary_in_url, "Yes");
    assert_eq!(result.primary_in_first_100, "Yes");
    assert_eq!(result.primary_in_meta_desc, "Yes");
    assert_eq!(result.secondary_keywords, "widget sizes, care, absent");
    assert_eq!(result.secondary_in_h2, "widget sizes");
    assert_eq!(result.secondary_in_h3, "care");
    assert_eq!(result.secondary_in_content_list, "widget sizes (1), care (1)");
}

#[tokio::test]
async fn test_not_found_yields_error_shape() {
    let server = MockServer::start().await;
    mount_status(&server, "/gone", 404).await;

    let url = format!("{}/gone", server.uri());
    let result = analyzer().analyze(&url, "widget", &[]).await;

    let value = serde_json::to_value(&result).expect("serializable");
    assert_eq!(value["Status_Code"], 404);
    assert_eq!(value["Title"], "N/A");
    assert_eq!(value["Word_Count"], "N/A");
    assert_eq!(value["Issues_List"], "N/A");
    assert_eq!(value["Has_Critical_Issues"], "N/A");
    assert_eq!(value["Primary_Keyword"], "N/A");
    assert_eq!(value["Entity_Schema_Present"], "N/A");
}

#[tokio::test]
async fn test_connection_failure_yields_error_status() {
    let result = analyzer().analyze(&closed_port_url(), "", &[]).await;

    match &result.status_code {
        StatusCode::Error(message) => assert!(message.starts_with("Error: "), "{message}"),
        other => panic!("expected an error status, got {other:?}"),
    }
    assert!(result.is_error());
    assert_eq!(result.title, "N/A");
    assert_eq!(result.issues_list, None);
}

#[tokio::test]
async fn test_canonicalized_page_is_flagged() {
    let server = MockServer::start().await;
    let url = format!("{}/widgets", server.uri());
    mount_page(
        &server,
        "/widgets",
        healthy_page("https://shop.example.com/widgets"),
    )
    .await;

    let result = analyzer().analyze(&url, "", &[]).await;
    assert_eq!(result.canonical_type, "Canonicalized");
    assert_eq!(
        result.issues(),
        ["Page is canonicalized to: https://shop.example.com/widgets"]
    );
    assert_eq!(result.primary_in_title, "N/A");
}

#[tokio::test]
async fn test_redirected_page_is_compared_with_requested_url() {
    let server = MockServer::start().await;
    let requested = format!("{}/old", server.uri());
    let target = format!("{}/widgets", server.uri());
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", target.as_str()))
        .mount(&server)
        .await;
    // The page declares the URL the caller asked for
    mount_page(&server, "/widgets", healthy_page(&requested)).await;

    let result = analyzer().analyze(&requested, "", &[]).await;
    assert_eq!(result.status_code, StatusCode::Http(200));
    assert_eq!(result.canonical_type, "Self");
}

#[tokio::test]
async fn test_thin_page_without_schema() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/thin",
        r#"<html><head><title>Short</title></head>
        <body><h1>Hi</h1><h1>Again</h1><img src="/a/b/photo.jpg"><img src="x.gif" alt=""></body></html>"#
            .to_string(),
    )
    .await;

    let url = format!("{}/thin", server.uri());
    let result = analyzer().analyze(&url, "", &[]).await;
    assert_eq!(
        result.issues(),
        [
            "Title too short (5 chars)",
            "Missing Meta Description",
            "Missing Canonical URL",
            "Multiple H1 Tags found (2)",
            "Thin Content (Only 3 words)",
            "Missing Alt Text on 2 images",
            "No Schema Markup detected",
        ]
    );
    assert_eq!(result.missing_alt_files, "photo.jpg, x.gif");
    assert_eq!(result.schema_types, "None");
    assert_eq!(result.entity_schema_present, None);
}
