use std::time::Duration;

use reqwest::Url;

use bookfinder_core::{Book, CatalogConfig, SearchRequest, SearchResponse};

use crate::error::{CatalogError, Result};
use crate::http::HttpClient;

/// Client for the Open Library search service.
///
/// The base URL comes from [`CatalogConfig`], so tests can point it at a
/// local mock server.
pub struct CatalogClient {
    http: HttpClient,
    base_url: String,
}

impl CatalogClient {
    pub fn new() -> Self {
        Self::from_config(&CatalogConfig::default())
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self {
            http: HttpClient::new(
                Duration::from_millis(config.min_request_interval_ms),
                &config.user_agent,
            ),
            base_url: config.base_url.clone(),
        }
    }

    /// Submit one search. The query string carries exactly the pairs
    /// produced by [`SearchRequest::build`], in their canonical order.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let mut url = self.parse_base()?;
        {
            let mut segs = url
                .path_segments_mut()
                .map_err(|_| CatalogError::InvalidUrl(self.base_url.clone()))?;
            segs.push("search.json");
        }
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in request.build() {
                query.append_pair(key, &value);
            }
        }

        self.http.get_json(url.as_str()).await
    }

    /// Fetch a single record by its catalog key, e.g. `/works/OL45883W`.
    pub async fn fetch_by_key(&self, key: &str) -> Result<Book> {
        let base = self.base_url.trim_end_matches('/');
        let url = if key.starts_with('/') {
            format!("{base}{key}.json")
        } else {
            format!("{base}/{key}.json")
        };

        self.http.get_json(&url).await
    }

    fn parse_base(&self) -> Result<Url> {
        Url::parse(&self.base_url).map_err(|e| {
            CatalogError::InvalidUrl(format!("{}: {e}", self.base_url))
        })
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use mockito::Server;

    use super::*;

    fn test_client(base_url: String) -> CatalogClient {
        CatalogClient::from_config(&CatalogConfig {
            base_url,
            min_request_interval_ms: 0,
            ..CatalogConfig::default()
        })
    }

    #[tokio::test]
    async fn search_sends_built_pairs() {
        let mut server = Server::new_async().await;

        let _m = server
            .mock("GET", "/search.json?title=Dune&limit=20")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "numFound": 2,
                    "start": 0,
                    "docs": [
                        {
                            "key": "/works/OL45883W",
                            "title": "Dune",
                            "author_name": ["Frank Herbert"],
                            "first_publish_year": 1965,
                            "cover_i": 12345,
                            "ratings_average": 4.25
                        },
                        {
                            "key": "/works/OL893415W",
                            "title": "Dune Messiah"
                        }
                    ]
                }"#,
            )
            .create_async()
            .await;

        let client = test_client(server.url());
        let request = SearchRequest {
            title: Some("Dune".into()),
            ..Default::default()
        };
        let response = client.search(&request).await.unwrap();

        assert_eq!(response.num_found, 2);
        assert_eq!(response.docs.len(), 2);
        assert_eq!(response.docs[0].first_publish_year, Some(1965));
        assert_eq!(response.docs[1].first_publish_year, None);
    }

    #[tokio::test]
    async fn search_encodes_free_text() {
        let mut server = Server::new_async().await;

        let _m = server
            .mock("GET", "/search.json?q=lord+of+the+rings&limit=20")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"numFound": 0, "start": 0, "docs": []}"#)
            .create_async()
            .await;

        let client = test_client(server.url());
        let response = client
            .search(&SearchRequest::from_query("lord of the rings"))
            .await
            .unwrap();

        assert_eq!(response.num_found, 0);
        assert!(response.docs.is_empty());
    }

    #[tokio::test]
    async fn non_2xx_is_a_hard_failure() {
        let mut server = Server::new_async().await;

        let _m = server
            .mock("GET", "/search.json?q=dune&limit=20")
            .with_status(503)
            .with_body("upstream unavailable")
            .create_async()
            .await;

        let client = test_client(server.url());
        let err = client
            .search(&SearchRequest::from_query("dune"))
            .await
            .unwrap_err();

        match err {
            CatalogError::Api { status, .. } => assert_eq!(status, 503),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_by_key_hits_record_path() {
        let mut server = Server::new_async().await;

        let _m = server
            .mock("GET", "/works/OL45883W.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"key": "/works/OL45883W", "title": "Dune"}"#)
            .create_async()
            .await;

        let client = test_client(server.url());
        let book = client.fetch_by_key("/works/OL45883W").await.unwrap();

        assert_eq!(book.title, "Dune");
    }

    #[tokio::test]
    async fn garbage_body_is_a_parse_error() {
        let mut server = Server::new_async().await;

        let _m = server
            .mock("GET", "/search.json?q=dune&limit=20")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = test_client(server.url());
        let err = client
            .search(&SearchRequest::from_query("dune"))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
