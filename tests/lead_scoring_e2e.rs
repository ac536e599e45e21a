// tests/lead_scoring_e2e.rs
//
// Offline end-to-end: directory fixture JSON -> business record -> signals
// -> score, with no network access anywhere.

use lead_scout::engine::ScoringEngine;
use lead_scout::pipeline::record_from_details;
use lead_scout::places::{PlaceDetails, PlaceSummary};
use lead_scout::signals::extract;

fn summary(name: &str, id: &str) -> PlaceSummary {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "place_id": id,
        "rating": 4.0,
        "user_ratings_total": 25
    }))
    .unwrap()
}

#[test]
fn strong_presence_scores_near_the_ceiling() {
    let details: PlaceDetails = serde_json::from_str(
        r#"{
            "name": "Harbor Lights Gym",
            "website": "https://harborlights.example.com",
            "formatted_address": "900 Bay Ave",
            "formatted_phone_number": "+1 555-0188",
            "rating": 5.0,
            "user_ratings_total": 50,
            "reviews": [
                {"text": "amazing gym, wonderful trainers, spotless", "rating": 5},
                {"text": "best gym in town, loved every visit", "rating": 5},
                {"text": "excellent equipment, friendly and helpful staff", "rating": 5}
            ]
        }"#,
    )
    .unwrap();

    let markup = r#"<html><head>
        <title>Harbor Lights Gym</title>
        <meta name="description" content="Strength and cardio by the bay">
        </head></html>"#;

    let record = record_from_details("gym", &summary("Harbor Lights Gym", "p-strong"), &details, Some(markup.to_string()));
    let signals = extract(&record);
    let out = ScoringEngine::default().score(&signals);

    // Everything maxed except sentiment, which a lexicon never pins to 1.0.
    assert!(out.total_score > 85.0, "{out:?}");
    assert!(out.reasons.is_empty(), "{:?}", out.reasons);
}

#[test]
fn weak_presence_scores_low_with_pitch_angles() {
    let details: PlaceDetails = serde_json::from_str(
        r#"{
            "name": "Dusty Corner Shop",
            "rating": 2.1,
            "user_ratings_total": 4,
            "reviews": [
                {"text": "rude owner, terrible selection", "rating": 1},
                {"text": "dirty shelves, would not recommend", "rating": 2}
            ]
        }"#,
    )
    .unwrap();

    let record = record_from_details("shop", &summary("Dusty Corner Shop", "p-weak"), &details, None);
    let signals = extract(&record);
    let out = ScoringEngine::default().score(&signals);

    assert!(out.total_score < 30.0, "{out:?}");
    let joined = out.reasons.join("; ");
    assert!(joined.contains("No website found"));
    assert!(joined.contains("No phone number listed"));
    assert!(joined.contains("Low rating"));
    assert!(joined.contains("Low review count"));
    assert!(joined.contains("Negative review sentiment"));
    assert!(joined.contains("Missing title or meta description"));
}

#[test]
fn details_failure_fallback_still_produces_a_score() {
    // Empty details (the pipeline's fallback when a details fetch fails)
    // must still score off search-page data alone.
    let record = record_from_details(
        "cafe",
        &summary("Fallback Cafe", "p-fallback"),
        &PlaceDetails::default(),
        None,
    );
    let signals = extract(&record);
    assert_eq!(signals.review_count, 25);
    assert_eq!(signals.average_rating, 4.0);

    let out = ScoringEngine::default().score(&signals);
    assert!(out.total_score > 0.0 && out.total_score < 100.0);
}
