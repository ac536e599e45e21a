//! Signal extraction: one immutable business record in, a fixed set of
//! bounded, normalized signals out.
//!
//! Extraction is deterministic and side-effect-free. Network work (directory
//! lookups, website fetches) happens upstream in the pipeline; this module
//! only interprets what it is handed. Missing source data maps to documented
//! defaults, never to an error.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::sentiment::SentimentAnalyzer;
use crate::website;

/// A discovered business as assembled by the pipeline. Immutable once built;
/// passed by reference into `extract`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub name: String,
    pub address: String,
    pub category: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    /// Directory star rating, typically 1.0..=5.0 when present.
    pub rating: Option<f32>,
    /// Directory review total; upstream data occasionally reports nonsense
    /// negatives, which extraction clamps away.
    pub review_count: i64,
    /// Ordered review texts, newest first as the directory returns them.
    pub reviews: Vec<String>,
    /// Raw HTML of the business website, when the pipeline fetched one.
    pub site_markup: Option<String>,
}

/// The fixed signal set consumed by the scoring engine. Every field is always
/// present and bounded to its documented range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSignals {
    pub has_website: bool,
    pub has_phone: bool,
    pub review_count: u32,
    /// In [0, 5]; 0 when the directory had no rating.
    pub average_rating: f32,
    /// In [-1, 1]; 0 for businesses without reviews.
    pub sentiment_score: f32,
    /// True iff fetched markup carried a non-empty title or meta description.
    pub seo_indicator: bool,
}

impl Default for NormalizedSignals {
    fn default() -> Self {
        Self {
            has_website: false,
            has_phone: false,
            review_count: 0,
            average_rating: 0.0,
            sentiment_score: 0.0,
            seo_indicator: false,
        }
    }
}

/// Derive the normalized signal set from one business record.
pub fn extract(record: &BusinessRecord) -> NormalizedSignals {
    let analyzer = SentimentAnalyzer::new();

    let has_website = record
        .website
        .as_deref()
        .map(is_well_formed_url)
        .unwrap_or(false);

    let has_phone = record
        .phone
        .as_deref()
        .map(|p| !p.trim().is_empty())
        .unwrap_or(false);

    let review_count = u32::try_from(record.review_count.max(0)).unwrap_or(u32::MAX);

    let average_rating = record.rating.unwrap_or(0.0).clamp(0.0, 5.0);

    let sentiment_score = analyzer.aggregate(&record.reviews).clamp(-1.0, 1.0);

    let seo_indicator = record
        .site_markup
        .as_deref()
        .map(|html| website::inspect_markup(html).seo_ok())
        .unwrap_or(false);

    NormalizedSignals {
        has_website,
        has_phone,
        review_count,
        average_rating,
        sentiment_score,
        seo_indicator,
    }
}

fn is_well_formed_url(s: &str) -> bool {
    if s.trim().is_empty() {
        return false;
    }
    // Absolute URL with a host; "not a url" and bare fragments fail here.
    match Url::parse(s) {
        Ok(u) => u.has_host(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> BusinessRecord {
        BusinessRecord {
            name: "Blue Fern Cafe".into(),
            address: "12 Main St".into(),
            category: "cafe".into(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_record_maps_to_defaults() {
        let s = extract(&record());
        assert_eq!(s, NormalizedSignals::default());
    }

    #[test]
    fn malformed_website_is_not_a_website() {
        let mut r = record();
        r.website = Some("not a url".into());
        assert!(!extract(&r).has_website);
        r.website = Some("".into());
        assert!(!extract(&r).has_website);
        r.website = Some("https://bluefern.example.com".into());
        assert!(extract(&r).has_website);
    }

    #[test]
    fn blank_phone_is_no_phone() {
        let mut r = record();
        r.phone = Some("   ".into());
        assert!(!extract(&r).has_phone);
        r.phone = Some("+1 555 0100".into());
        assert!(extract(&r).has_phone);
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        let mut r = record();
        r.rating = Some(7.5);
        r.review_count = -3;
        let s = extract(&r);
        assert_eq!(s.average_rating, 5.0);
        assert_eq!(s.review_count, 0);
    }

    #[test]
    fn seo_indicator_needs_supplied_markup() {
        let mut r = record();
        assert!(!extract(&r).seo_indicator);
        r.site_markup = Some("<title>Blue Fern</title>".into());
        assert!(extract(&r).seo_indicator);
        r.site_markup = Some("<html><body>hi</body></html>".into());
        assert!(!extract(&r).seo_indicator);
    }

    #[test]
    fn sentiment_flows_from_reviews() {
        let mut r = record();
        r.reviews = vec!["great coffee, friendly staff".into()];
        assert!(extract(&r).sentiment_score > 0.0);
        r.reviews = vec!["rude staff, terrible coffee".into()];
        assert!(extract(&r).sentiment_score < 0.0);
    }
}
