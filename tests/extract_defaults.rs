// tests/extract_defaults.rs
//
// Signal extraction over whole business records: defaults for missing data,
// clamping of malformed upstream values, and markup-driven SEO detection.

use lead_scout::{extract, BusinessRecord};

fn base() -> BusinessRecord {
    BusinessRecord {
        name: "Corner Bakery".into(),
        address: "5 Elm St".into(),
        category: "bakery".into(),
        ..Default::default()
    }
}

#[test]
fn missing_fields_resolve_to_documented_defaults() {
    let s = extract(&base());
    assert!(!s.has_website);
    assert!(!s.has_phone);
    assert_eq!(s.review_count, 0);
    assert_eq!(s.average_rating, 0.0);
    assert_eq!(s.sentiment_score, 0.0);
    assert!(!s.seo_indicator);
}

#[test]
fn well_formed_url_required_for_website_signal() {
    let mut r = base();
    for bad in ["", "   ", "not a url", "www.missing-scheme.example"] {
        r.website = Some(bad.into());
        assert!(!extract(&r).has_website, "accepted {bad:?}");
    }
    r.website = Some("https://cornerbakery.example.com/menu".into());
    assert!(extract(&r).has_website);
}

#[test]
fn upstream_nonsense_is_clamped_into_range() {
    let mut r = base();
    r.rating = Some(11.0);
    r.review_count = -42;
    let s = extract(&r);
    assert_eq!(s.average_rating, 5.0);
    assert_eq!(s.review_count, 0);

    r.rating = Some(-2.0);
    assert_eq!(extract(&r).average_rating, 0.0);
}

#[test]
fn seo_indicator_follows_supplied_markup() {
    let mut r = base();
    r.website = Some("https://cornerbakery.example.com".into());

    // URL present but markup never fetched: indicator stays false.
    assert!(!extract(&r).seo_indicator);

    r.site_markup = Some(
        r#"<html><head><meta name="description" content="Fresh bread daily"></head></html>"#
            .into(),
    );
    assert!(extract(&r).seo_indicator);

    r.site_markup = Some("<html><head><title></title></head></html>".into());
    assert!(!extract(&r).seo_indicator);
}

#[test]
fn extraction_is_deterministic() {
    let mut r = base();
    r.phone = Some("+1 555 0100".into());
    r.website = Some("https://cornerbakery.example.com".into());
    r.rating = Some(4.4);
    r.review_count = 87;
    r.reviews = vec![
        "wonderful pastries, friendly staff".into(),
        "a bit slow on weekends".into(),
    ];
    assert_eq!(extract(&r), extract(&r));
}
