//! # Sentiment Aggregator
//! Lexicon/rule-based polarity classifier for customer review text.
//!
//! Each review is scored independently: token valences come from the embedded
//! lexicon, a negator within the 3 preceding tokens inverts a hit, and the raw
//! integer sum is squashed into a compound polarity in [-1, 1]. Business-level
//! sentiment is the arithmetic mean of compound polarity across all reviews.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static LEXICON: Lazy<HashMap<String, i32>> = Lazy::new(|| {
    let raw = include_str!("../sentiment_lexicon.json");
    serde_json::from_str::<HashMap<String, i32>>(raw).expect("valid sentiment lexicon")
});

/// Squashing constant for raw-sum normalization. Larger values flatten the
/// curve; 15 keeps a single strong word (|valence| 3) around |0.6|.
const NORM_ALPHA: f32 = 15.0;

#[derive(Debug, Clone, Default)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Lexicon valence for a word (0 if unknown).
    #[inline]
    fn word_score(&self, w: &str) -> i32 {
        *LEXICON.get(w).unwrap_or(&0)
    }

    /// Raw lexicon sum and token count for one text.
    ///
    /// Negation: if a negator appears in the last 1..=3 tokens before a
    /// lexicon hit, the hit's sign is inverted.
    pub fn score_text(&self, text: &str) -> (i32, usize) {
        // Collect into a vector; negation needs backward indexing.
        let tokens: Vec<String> = tokenize(text).collect();
        let mut score: i32 = 0;

        for i in 0..tokens.len() {
            let w = tokens[i].as_str();

            let negated = (1..=3).any(|k| i >= k && is_negator(tokens[i - k].as_str()));

            let base = self.word_score(w);
            if base != 0 {
                let adj = if negated { -base } else { base };
                score += adj;
            }
        }

        (score, tokens.len())
    }

    /// Compound polarity for one text, in [-1, 1]. Empty or lexicon-free
    /// text scores exactly 0.0.
    pub fn compound(&self, text: &str) -> f32 {
        let (raw, _tokens) = self.score_text(text);
        if raw == 0 {
            return 0.0;
        }
        let s = raw as f32;
        s / (s * s + NORM_ALPHA).sqrt()
    }

    /// Business-level sentiment: mean compound polarity over all reviews.
    ///
    /// Empty input yields exactly 0.0 (neutral). Empty or unscorable reviews
    /// contribute 0.0 to the mean rather than being skipped, so an all-empty
    /// batch is indistinguishable from no reviews at all.
    pub fn aggregate<S: AsRef<str>>(&self, reviews: &[S]) -> f32 {
        if reviews.is_empty() {
            return 0.0;
        }
        let sum: f32 = reviews.iter().map(|r| self.compound(r.as_ref())).sum();
        sum / reviews.len() as f32
    }
}

/// Module-level tokenization: lower-cased tokens, apostrophes kept inside
/// words so contractions like "isn't" survive as single negator tokens.
fn tokenize(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_ascii_lowercase())
}

/// Small negator set; one round is enough ("no longer" is covered by "no").
fn is_negator(tok: &str) -> bool {
    matches!(
        tok,
        "not"
            | "no"
            | "never"
            | "isn't"
            | "wasn't"
            | "aren't"
            | "won't"
            | "can't"
            | "cannot"
            | "don't"
            | "didn't"
            | "doesn't"
            | "couldn't"
            | "wouldn't"
            | "without"
    )
}
