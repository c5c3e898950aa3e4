//! Pexels image-search client

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::ImageSearchConfig;

#[derive(Error, Debug)]
pub enum ImageSearchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Image search returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Search response; only the fields we read
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    src: PhotoSources,
}

#[derive(Debug, Deserialize)]
struct PhotoSources {
    large: Option<String>,
}

/// Client for `GET /v1/search`
#[derive(Debug, Clone)]
pub struct PexelsClient {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    per_page: u32,
}

impl PexelsClient {
    pub fn new(api_key: impl Into<String>, config: &ImageSearchConfig) -> Result<Self, ImageSearchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            endpoint: config.endpoint.clone(),
            per_page: config.per_page,
        })
    }

    /// Large-variant URLs of one landscape results page
    pub async fn search(&self, query: &str, page: u32) -> Result<Vec<String>, ImageSearchError> {
        tracing::debug!("Searching images for {:?} (page {})", query, page);

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", &self.api_key)
            .query(&[
                ("query", query.to_string()),
                ("orientation", "landscape".to_string()),
                ("per_page", self.per_page.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ImageSearchError::Status { status, body });
        }

        let body: SearchResponse = response.json().await?;
        Ok(body
            .photos
            .into_iter()
            .filter_map(|photo| photo.src.large)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> ImageSearchConfig {
        ImageSearchConfig {
            endpoint: format!("{}/v1/search", server.uri()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_search_sends_query_and_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(header("Authorization", "secret"))
            .and(query_param("query", "web development coding"))
            .and(query_param("orientation", "landscape"))
            .and(query_param("per_page", "15"))
            .and(query_param("page", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "photos": [
                    {"src": {"large": "https://img.example/1.jpg"}},
                    {"src": {"original": "https://img.example/no-large.jpg"}},
                    {"src": {"large": "https://img.example/2.jpg"}}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = PexelsClient::new("secret", &config_for(&server)).unwrap();
        let urls = client.search("web development coding", 3).await.unwrap();
        assert_eq!(
            urls,
            vec!["https://img.example/1.jpg", "https://img.example/2.jpg"]
        );
    }

    #[tokio::test]
    async fn test_search_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
            .mount(&server)
            .await;

        let client = PexelsClient::new("wrong", &config_for(&server)).unwrap();
        let err = client.search("anything", 1).await.unwrap_err();
        match err {
            ImageSearchError::Status { status, body } => {
                assert_eq!(status.as_u16(), 401);
                assert_eq!(body, "bad key");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
