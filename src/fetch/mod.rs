//! Page retrieval.
//!
//! A single GET per page with the shared client; redirects are followed by
//! reqwest. Non-200 responses are returned as-is (status only) so the caller
//! can build the error shape; their bodies are never read.

use log::{debug, info, warn};

use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::FetchError;

/// A fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedDocument {
    /// HTTP status of the final response.
    pub status: u16,
    /// URL after redirects.
    pub final_url: String,
    /// Decoded body; empty for non-200 responses.
    pub body: String,
}

/// Fetches `url` with the shared client.
///
/// # Errors
///
/// Returns [`FetchError::Transport`] when no response could be obtained or the
/// body could not be read, and [`FetchError::BodyTooLarge`] when a 200 body
/// exceeds [`MAX_RESPONSE_BODY_SIZE`].
pub async fn fetch_document(
    client: &reqwest::Client,
    url: &str,
) -> Result<FetchedDocument, FetchError> {
    debug!("Requesting {url}");
    let response = client.get(url).send().await?;

    let status = response.status().as_u16();
    let final_url = response.url().to_string();
    if final_url != url {
        debug!("Final url after redirects: {final_url}");
    }

    if status != 200 {
        info!("{url} answered {status}");
        return Ok(FetchedDocument {
            status,
            final_url,
            body: String::new(),
        });
    }

    if let Some(length) = response.content_length() {
        let length = usize::try_from(length).unwrap_or(usize::MAX);
        if length > MAX_RESPONSE_BODY_SIZE {
            warn!("Skipping large body for {url}: {length} bytes");
            return Err(FetchError::BodyTooLarge {
                size: length,
                limit: MAX_RESPONSE_BODY_SIZE,
            });
        }
    }

    // reqwest decodes the charset and any content encoding
    let body = response.text().await?;
    if body.len() > MAX_RESPONSE_BODY_SIZE {
        warn!("Skipping large body for {url}: {} bytes", body.len());
        return Err(FetchError::BodyTooLarge {
            size: body.len(),
            limit: MAX_RESPONSE_BODY_SIZE,
        });
    }
    debug!("Body length for {url}: {} bytes", body.len());

    Ok(FetchedDocument {
        status,
        final_url,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_ok_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html; charset=utf-8")
                    .set_body_string("<title>Hello</title>"),
            )
            .mount(&server)
            .await;

        let url = format!("{}/page", server.uri());
        let doc = fetch_document(&reqwest::Client::new(), &url)
            .await
            .expect("fetch should succeed");
        assert_eq!(doc.status, 200);
        assert_eq!(doc.final_url, url);
        assert_eq!(doc.body, "<title>Hello</title>");
    }

    #[tokio::test]
    async fn test_fetch_non_200_skips_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;

        let doc = fetch_document(&reqwest::Client::new(), &server.uri())
            .await
            .expect("a response was received");
        assert_eq!(doc.status, 503);
        assert!(doc.body.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_large_page_is_kept() {
        let server = MockServer::start().await;
        let body = format!("<title>Big</title>{}", "<p>word</p>".repeat(600_000));
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body.clone()))
            .mount(&server)
            .await;

        let doc = fetch_document(&reqwest::Client::new(), &server.uri())
            .await
            .expect("pages of several megabytes are fetched");
        assert_eq!(doc.status, 200);
        assert_eq!(doc.body.len(), body.len());
    }

    #[tokio::test]
    async fn test_fetch_body_too_large() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("a".repeat(MAX_RESPONSE_BODY_SIZE + 1)),
            )
            .mount(&server)
            .await;

        let err = fetch_document(&reqwest::Client::new(), &server.uri())
            .await
            .expect_err("body exceeds cap");
        assert!(matches!(err, FetchError::BodyTooLarge { .. }));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_transport_error() {
        // Bind then drop a listener so the port is closed
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let err = fetch_document(&reqwest::Client::new(), &format!("http://{addr}/"))
            .await
            .expect_err("nothing is listening");
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
