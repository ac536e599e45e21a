//! # Lead Scoring Engine
//! Pure, testable logic that maps a normalized signal set to a bounded
//! 0-100 lead score with a per-factor breakdown. No I/O, no hidden state;
//! identical inputs always produce bit-identical output.
//!
//! Scoring is deliberately additive and linear: each factor contributes
//! independently so the breakdown can answer *why* a business scored as it
//! did, and so that improving any single signal never lowers the total.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::signals::NormalizedSignals;
use crate::weights::WeightTable;

/// Stable factor names used as breakdown keys and in reports.
pub mod factor {
    pub const WEBSITE: &str = "website";
    pub const PHONE: &str = "phone";
    pub const REVIEW_VOLUME: &str = "review_volume";
    pub const RATING: &str = "rating";
    pub const SENTIMENT: &str = "sentiment";
    pub const SEO: &str = "seo";
}

/// One scored business: factor point map, clamped total, and plain-language
/// notes on the weak spots (the sales pitch angles).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub breakdown: BTreeMap<String, f32>,
    pub total_score: f32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<String>,
}

impl ScoreBreakdown {
    /// Sum of the per-factor contributions (pre-clamp total).
    pub fn contribution_sum(&self) -> f32 {
        self.breakdown.values().sum()
    }
}

/// Scoring engine with an explicit weight table fixed at construction.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    weights: WeightTable,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(WeightTable::default())
    }
}

impl ScoringEngine {
    pub fn new(weights: WeightTable) -> Self {
        let total = weights.total();
        if (total - 100.0).abs() > 0.01 {
            tracing::warn!(total, "weight table maxima do not sum to 100");
        }
        Self { weights }
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Score one signal set. Never fails: out-of-range signals are clamped
    /// into their documented bounds before contributing.
    pub fn score(&self, signals: &NormalizedSignals) -> ScoreBreakdown {
        let w = &self.weights;

        let rating = signals.average_rating.clamp(0.0, 5.0);
        let sentiment = signals.sentiment_score.clamp(-1.0, 1.0);
        let sat = w.review_saturation.max(1);
        let reviews_capped = signals.review_count.min(sat);

        let mut breakdown = BTreeMap::new();
        breakdown.insert(
            factor::WEBSITE.to_string(),
            if signals.has_website { w.website } else { 0.0 },
        );
        breakdown.insert(
            factor::PHONE.to_string(),
            if signals.has_phone { w.phone } else { 0.0 },
        );
        breakdown.insert(
            factor::REVIEW_VOLUME.to_string(),
            reviews_capped as f32 / sat as f32 * w.review_volume,
        );
        breakdown.insert(factor::RATING.to_string(), rating / 5.0 * w.rating);
        breakdown.insert(
            factor::SENTIMENT.to_string(),
            (sentiment + 1.0) / 2.0 * w.sentiment,
        );
        breakdown.insert(
            factor::SEO.to_string(),
            if signals.seo_indicator { w.seo } else { 0.0 },
        );

        let total_score = breakdown.values().sum::<f32>().clamp(0.0, 100.0);
        let reasons = weak_spots(signals, rating);

        ScoreBreakdown {
            breakdown,
            total_score,
            reasons,
        }
    }
}

/// Plain-language notes on weak factors. Thresholds match the cutoffs the
/// reporting side has always used: rating below 3.5, fewer than 20 reviews.
fn weak_spots(signals: &NormalizedSignals, rating: f32) -> Vec<String> {
    let mut reasons = Vec::new();
    if !signals.has_website {
        reasons.push("No website found".to_string());
    }
    if !signals.has_phone {
        reasons.push("No phone number listed".to_string());
    }
    if rating < 3.5 {
        reasons.push(format!("Low rating: {rating:.1}"));
    }
    if signals.review_count < 20 {
        reasons.push(format!("Low review count: {}", signals.review_count));
    }
    if signals.sentiment_score < 0.0 {
        reasons.push("Negative review sentiment".to_string());
    }
    if !signals.seo_indicator {
        reasons.push("Missing title or meta description".to_string());
    }
    reasons
}
