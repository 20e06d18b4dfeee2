//! HTTP client implementation

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{ReaderError, Result};
use crate::highlight::{Highlight, NewHighlight};

use super::types::{Chapter, ErrorBody, ProgressUpdate};

/// Client for the Fabula backend API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(ApiClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Fetch a chapter by id, including its rendered content.
    pub async fn get_chapter(&self, chapter_id: &str) -> Result<Chapter> {
        let response = self
            .authed(self.http.get(self.url(&format!("/chapters/{}", chapter_id))))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ReaderError::ChapterNotFound(chapter_id.to_string()));
        }
        decode(response).await
    }

    /// List the requesting user's highlights for a chapter, in backend order.
    pub async fn list_highlights(&self, chapter_id: &str) -> Result<Vec<Highlight>> {
        let response = self
            .authed(
                self.http
                    .get(self.url(&format!("/chapters/{}/highlights", chapter_id))),
            )
            .send()
            .await?;
        decode(response).await
    }

    /// Create a highlight; the backend assigns the id and echoes the fields.
    pub async fn create_highlight(
        &self,
        chapter_id: &str,
        new_highlight: &NewHighlight,
    ) -> Result<Highlight> {
        let response = self
            .authed(
                self.http
                    .post(self.url(&format!("/chapters/{}/highlights", chapter_id))),
            )
            .json(new_highlight)
            .send()
            .await?;
        decode(response).await
    }

    /// Delete a highlight by id.
    pub async fn delete_highlight(&self, highlight_id: &str) -> Result<()> {
        let response = self
            .authed(
                self.http
                    .delete(self.url(&format!("/highlights/{}", highlight_id))),
            )
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(ReaderError::HighlightNotFound(highlight_id.to_string())),
            _ => Err(error_from(response).await),
        }
    }

    /// Fire-and-forget reading-progress ping.
    ///
    /// Progress tracking is non-critical, so failures are swallowed after a
    /// debug log rather than propagated.
    pub async fn update_progress(&self, chapter_id: &str, progress: u8) {
        let payload = ProgressUpdate {
            progress: progress.min(100),
        };

        let result = self
            .authed(
                self.http
                    .post(self.url(&format!("/chapters/{}/progress", chapter_id))),
            )
            .json(&payload)
            .send()
            .await;

        match result {
            Ok(response) if !response.status().is_success() => {
                tracing::debug!(
                    chapter_id,
                    status = %response.status(),
                    "progress ping rejected"
                );
            }
            Err(e) => {
                tracing::debug!(chapter_id, error = %e, "progress ping failed");
            }
            Ok(_) => {}
        }
    }
}

/// Decode a success body, or map a non-success status to an API error.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    if response.status().is_success() {
        Ok(response.json().await?)
    } else {
        Err(error_from(response).await)
    }
}

async fn error_from(response: Response) -> ReaderError {
    let status = response.status().as_u16();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => "Request failed".to_string(),
    };
    ReaderError::Api { status, message }
}
