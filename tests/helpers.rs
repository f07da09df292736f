// Shared test helpers for page fixtures, mock servers and temporary stores.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::sync::Arc;

use seo_audit::initialization::init_client;
use seo_audit::{ClientStore, Config, LogFormat, LogLevel};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A page that passes every structural rule and mentions "widgets" everywhere.
#[allow(dead_code)] // Used by other test files
pub fn healthy_page(canonical: &str) -> String {
    let body_words = vec!["widgets are great"; 110].join(" ");
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>Blue Widgets for Every Workshop and Garage</title>
  <meta name="description" content="Shop durable blue widgets in every size, with free shipping and a lifetime guarantee on all orders.">
  <link rel="canonical" href="{canonical}">
  <script type="application/ld+json">{{"@context": "https://schema.org", "@type": "Product", "brand": {{"@type": "Organization", "name": "Acme"}}}}</script>
</head>
<body>
  <h1>Blue Widgets</h1>
  <h2>Choosing widget sizes</h2>
  <h3>Widget care</h3>
  <p>{body_words}</p>
  <a href="/about">About</a>
  <img src="/img/widget.png" alt="A blue widget">
</body>
</html>"#
    )
}

/// Serves `html` with status 200 at `route`.
#[allow(dead_code)]
pub async fn mount_page(server: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(html),
        )
        .mount(server)
        .await;
}

/// Serves an empty body with `status` at `route`.
#[allow(dead_code)]
pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Creates a Config suitable for tests, writing its data file under `dir`.
#[allow(dead_code)]
pub fn create_test_config(dir: &TempDir, max_concurrency: usize) -> Config {
    Config {
        data_file: dir.path().join("clients.json"),
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
        max_concurrency,
        timeout_seconds: 5,
        user_agent: "seo_audit_test/1.0".to_string(),
    }
}

/// Opens a fresh store in a new temporary directory.
#[allow(dead_code)]
pub fn create_temp_store() -> (TempDir, ClientStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store =
        ClientStore::open(temp_dir.path().join("clients.json")).expect("Failed to open store");
    (temp_dir, store)
}

/// HTTP client with test settings.
#[allow(dead_code)]
pub fn test_client() -> Arc<reqwest::Client> {
    let config = Config {
        timeout_seconds: 5,
        ..Default::default()
    };
    init_client(&config).expect("Failed to build HTTP client")
}

/// A URL on a port nothing listens on.
#[allow(dead_code)]
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{addr}/")
}
