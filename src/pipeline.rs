//! Discovery/extraction pipeline: drive the directory client across pages,
//! enrich each business with details and website markup, and run the pure
//! scoring core over the result.
//!
//! Per-business failures degrade to defaults and are logged; only a failure
//! of the initial search aborts a run.

use anyhow::Result;
use serde::Serialize;
use std::cmp::Ordering;
use std::time::Duration;
use tracing::{info, warn};

use crate::engine::ScoringEngine;
use crate::places::{PlaceDetails, PlaceSummary, PlacesClient};
use crate::signals::{extract, BusinessRecord};
use crate::website;

/// Review snippets longer than this are truncated before classification;
/// the directory caps snippets anyway, this guards against odd payloads.
const MAX_REVIEW_CHARS: usize = 1000;

#[derive(Debug, Clone)]
pub struct ScoutParams {
    pub category: String,
    pub location: String,
    /// Stop once this many businesses have been scored.
    pub target_n: usize,
    /// Pause between directory requests. Also gives the next-page token
    /// time to activate; the directory rejects tokens used too early.
    pub pace: Duration,
}

impl Default for ScoutParams {
    fn default() -> Self {
        Self {
            category: String::new(),
            location: String::new(),
            target_n: 50,
            pace: Duration::from_millis(1500),
        }
    }
}

/// One scored lead, ready for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct LeadRow {
    pub name: String,
    pub place_id: String,
    pub rating: Option<f32>,
    pub review_count: i64,
    pub website: String,
    pub contact_email: Option<String>,
    pub avg_sentiment: f32,
    pub lead_score: f32,
    pub reasons: String,
}

/// Assemble an immutable business record from one directory result.
/// Pure; exercised directly by tests with fixture payloads.
pub fn record_from_details(
    category: &str,
    summary: &PlaceSummary,
    details: &PlaceDetails,
    site_markup: Option<String>,
) -> BusinessRecord {
    let reviews = details
        .reviews
        .iter()
        .map(|r| {
            let text = r.text.clone().unwrap_or_default();
            text.chars().take(MAX_REVIEW_CHARS).collect()
        })
        .collect();

    BusinessRecord {
        name: details
            .name
            .clone()
            .or_else(|| summary.name.clone())
            .unwrap_or_default(),
        address: details.formatted_address.clone().unwrap_or_default(),
        category: category.to_string(),
        phone: details.formatted_phone_number.clone(),
        website: details.website.clone(),
        rating: details.rating.or(summary.rating),
        review_count: details
            .user_ratings_total
            .or(summary.user_ratings_total)
            .unwrap_or(0),
        reviews,
        site_markup,
    }
}

/// Discover, enrich, and score up to `target_n` businesses. Rows come back
/// sorted by lead score, best opportunity first.
pub async fn scout_leads(
    client: &PlacesClient,
    engine: &ScoringEngine,
    params: &ScoutParams,
) -> Result<Vec<LeadRow>> {
    let mut candidates: Vec<PlaceSummary> = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let (batch, next) = client
            .text_search(&params.category, &params.location, page_token.as_deref())
            .await?;
        if batch.is_empty() {
            break;
        }
        candidates.extend(batch);
        if candidates.len() >= params.target_n || next.is_none() {
            break;
        }
        page_token = next;
        tokio::time::sleep(params.pace.max(Duration::from_millis(1500))).await;
    }
    candidates.truncate(params.target_n);

    info!(
        count = candidates.len(),
        category = %params.category,
        location = %params.location,
        "candidate businesses found"
    );

    let http = reqwest::Client::new();
    let mut rows = Vec::with_capacity(candidates.len());

    for summary in &candidates {
        let place_id = match summary.place_id.as_deref() {
            Some(id) => id,
            None => {
                warn!(name = ?summary.name, "search result without place_id, skipping");
                continue;
            }
        };

        let details = match client.details(place_id).await {
            Ok(d) => d,
            Err(e) => {
                warn!(error = ?e, place_id, "details fetch failed, scoring on search data only");
                PlaceDetails::default()
            }
        };

        let site_markup = match details.website.as_deref() {
            Some(url) => website::fetch_site(&http, url).await,
            None => None,
        };
        let contact_email = site_markup
            .as_deref()
            .and_then(|html| website::inspect_markup(html).contact_email);

        let record = record_from_details(&params.category, summary, &details, site_markup);
        let signals = extract(&record);
        let scored = engine.score(&signals);

        rows.push(LeadRow {
            name: record.name.clone(),
            place_id: place_id.to_string(),
            rating: record.rating,
            review_count: record.review_count,
            website: record.website.clone().unwrap_or_default(),
            contact_email,
            avg_sentiment: signals.sentiment_score,
            lead_score: scored.total_score,
            reasons: scored.reasons.join("; "),
        });

        tokio::time::sleep(params.pace).await;
    }

    rows.sort_by(|a, b| {
        b.lead_score
            .partial_cmp(&a.lead_score)
            .unwrap_or(Ordering::Equal)
    });

    Ok(rows)
}
