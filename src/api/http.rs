//! HTTP Location Store
//!
//! `reqwest` client for the location store. On wasm32 requests go through
//! the browser's fetch, so relative base URLs are resolved against the page
//! origin.

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::LocationApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{ErrorBody, LocationQuery, LocationsResponse, StarredIdsResponse};

const LOCATIONS_PATH: &str = "/locations";
const STARRED_IDS_PATH: &str = "/starred_location_ids";

pub struct HttpLocationApi {
    client: Client,
    base_url: String,
}

impl HttpLocationApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: absolute_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Map a non-2xx response to [`ApiError::Status`], preferring the store's
/// `error_msg` over the generic reason phrase.
async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let reason = status.canonical_reason().unwrap_or("unexpected status");
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error_msg,
        Err(_) => reason.to_string(),
    };
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait(?Send)]
impl LocationApi for HttpLocationApi {
    async fn fetch_locations(&self, query: &LocationQuery) -> ApiResult<LocationsResponse> {
        let response = self
            .client
            .get(self.url(LOCATIONS_PATH))
            .query(query)
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }

    async fn fetch_starred_ids(&self) -> ApiResult<Vec<u32>> {
        let response = self.client.get(self.url(STARRED_IDS_PATH)).send().await?;
        let body: StarredIdsResponse = check_status(response).await?.json().await?;
        Ok(body.location_ids)
    }

    async fn replace_starred_ids(&self, ids: &[u32]) -> ApiResult<()> {
        let response = self
            .client
            .put(self.url(STARRED_IDS_PATH))
            .json(ids)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

fn absolute_base_url(base_url: &str) -> String {
    let base_url = base_url.trim_end_matches('/');
    if base_url.starts_with("http://") || base_url.starts_with("https://") {
        return base_url.to_string();
    }
    match page_origin() {
        Some(origin) if base_url.is_empty() || base_url.starts_with('/') => {
            format!("{origin}{base_url}")
        }
        Some(origin) => format!("{origin}/{base_url}"),
        None => base_url.to_string(),
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_base_url_is_kept() {
        let api = HttpLocationApi::new("https://fleet.example.com/api/");
        assert_eq!(api.base_url(), "https://fleet.example.com/api");
        assert_eq!(
            api.url(STARRED_IDS_PATH),
            "https://fleet.example.com/api/starred_location_ids"
        );
    }

    #[test]
    fn test_relative_base_url_without_page_is_unchanged() {
        assert_eq!(absolute_base_url("/api"), "/api");
    }
}
