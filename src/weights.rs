//! Per-factor maximum point allocation for the lead score.
//!
//! JSON shape (config/weights.json):
//! {
//!   "website": 20.0,
//!   "phone": 10.0,
//!   "review_volume": 15.0,
//!   "rating": 25.0,
//!   "sentiment": 20.0,
//!   "seo": 10.0,
//!   "review_saturation": 50
//! }
//!
//! The factor maxima are expected to sum to 100; the engine clamps the final
//! total regardless, so a tuned table that sums slightly off only skews the
//! scale, it cannot break the 0-100 bound.

use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};

fn default_review_saturation() -> u32 {
    WeightTable::default().review_saturation
}

/// Maximum point contribution per factor, plus the review-count saturation
/// threshold (reviews beyond it earn no extra points).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    pub website: f32,
    pub phone: f32,
    pub review_volume: f32,
    pub rating: f32,
    pub sentiment: f32,
    pub seo: f32,
    #[serde(default = "default_review_saturation")]
    pub review_saturation: u32,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            website: 20.0,
            phone: 10.0,
            review_volume: 15.0,
            rating: 25.0,
            sentiment: 20.0,
            seo: 10.0,
            review_saturation: 50,
        }
    }
}

impl WeightTable {
    /// Sum of all factor maxima. 100.0 for the default table.
    pub fn total(&self) -> f32 {
        self.website + self.phone + self.review_volume + self.rating + self.sentiment + self.seo
    }
}

/// Load a weight table directly (no caching). Public for tests/tools.
pub fn load_weights_file(path: &Path) -> io::Result<WeightTable> {
    let bytes = fs::read(path)?;
    let w: WeightTable = serde_json::from_slice(&bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(w)
}

/// Load from an optional path: `None` or a missing file falls back to the
/// defaults; a present-but-invalid file is a real error.
pub fn load_weights_or_default(path: Option<&Path>) -> io::Result<WeightTable> {
    match path {
        Some(p) if p.exists() => load_weights_file(p),
        Some(p) => {
            tracing::warn!(path = %p.display(), "weights file not found, using defaults");
            Ok(WeightTable::default())
        }
        None => Ok(WeightTable::default()),
    }
}
