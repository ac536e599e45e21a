//! Places directory client (Google Places web service API).
//!
//! Thin typed wrapper over the two endpoints the pipeline needs: text search
//! (paginated via `next_page_token`) and place details. The base URL is
//! overridable so tests can point the client at a local fixture server.

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

const DETAILS_FIELDS: &str = "name,website,formatted_address,formatted_phone_number,rating,user_ratings_total,reviews";

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<PlaceSummary>,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceSummary {
    pub name: Option<String>,
    pub place_id: Option<String>,
    pub rating: Option<f32>,
    #[serde(default)]
    pub user_ratings_total: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    #[serde(default)]
    result: Option<PlaceDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetails {
    pub name: Option<String>,
    pub website: Option<String>,
    pub formatted_address: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub rating: Option<f32>,
    #[serde(default)]
    pub user_ratings_total: Option<i64>,
    #[serde(default)]
    pub reviews: Vec<PlaceReview>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceReview {
    pub text: Option<String>,
    pub rating: Option<f32>,
}

pub struct PlacesClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl PlacesClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client elsewhere (fixture servers in tests).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// One page of text search results plus the token for the next page,
    /// if the directory has more.
    pub async fn text_search(
        &self,
        category: &str,
        location: &str,
        page_token: Option<&str>,
    ) -> Result<(Vec<PlaceSummary>, Option<String>)> {
        let url = format!("{}/textsearch/json", self.base_url);
        let query = format!("{category} in {location}");

        let mut params: Vec<(&str, &str)> = vec![("query", &query), ("key", &self.api_key)];
        if let Some(token) = page_token {
            params.push(("pagetoken", token));
        }

        let resp: SearchResponse = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .context("places text search request")?
            .error_for_status()
            .context("places text search status")?
            .json()
            .await
            .context("parsing places text search response")?;

        if let Some(status) = resp.status.as_deref() {
            if status != "OK" && status != "ZERO_RESULTS" {
                tracing::warn!(status, "directory returned non-OK search status");
            }
        }

        Ok((resp.results, resp.next_page_token))
    }

    /// Full details for one place, including review snippets. A place the
    /// directory no longer knows yields empty details rather than an error.
    pub async fn details(&self, place_id: &str) -> Result<PlaceDetails> {
        let url = format!("{}/details/json", self.base_url);
        let params = [
            ("place_id", place_id),
            ("fields", DETAILS_FIELDS),
            ("key", &self.api_key),
        ];

        let resp: DetailsResponse = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .context("place details request")?
            .error_for_status()
            .context("place details status")?
            .json()
            .await
            .context("parsing place details response")?;

        Ok(resp.result.unwrap_or_default())
    }
}
