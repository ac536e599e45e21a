//! Website markup inspection: SEO basics, contact email, structured data.
//!
//! `inspect_markup` is pure and operates on already-fetched HTML; the network
//! side lives in [`fetch_site`], which deliberately swallows failures so one
//! unreachable site never aborts a scouting run.

use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;

const USER_AGENT: &str = "LeadScoutBot/1.0";
const FETCH_TIMEOUT: Duration = Duration::from_secs(6);

static RE_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("title regex"));
static RE_META_DESC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?is)<meta[^>]+(?:name\s*=\s*["']description["']|property\s*=\s*["']og:description["'])[^>]*>"#,
    )
    .expect("meta description regex")
});
static RE_META_CONTENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?is)content\s*=\s*["']([^"']*)["']"#).expect("content regex"));
static RE_LDJSON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<script[^>]+type\s*=\s*["']application/ld\+json["']"#).expect("ldjson regex")
});
static RE_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.\-]+@[\w.\-]+\.\w+").expect("email regex"));

/// What a fetched page tells us about the business's web presence.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct SiteInfo {
    pub reachable: bool,
    pub has_title: bool,
    pub has_meta_description: bool,
    pub has_ldjson: bool,
    pub contact_email: Option<String>,
}

impl SiteInfo {
    /// SEO baseline: a non-empty title or meta description.
    pub fn seo_ok(&self) -> bool {
        self.has_title || self.has_meta_description
    }
}

/// Inspect raw HTML. Pure; tolerant of arbitrary/broken markup.
pub fn inspect_markup(html: &str) -> SiteInfo {
    let has_title = RE_TITLE
        .captures(html)
        .map(|c| {
            let t = html_escape::decode_html_entities(&c[1]).to_string();
            !t.trim().is_empty()
        })
        .unwrap_or(false);

    let has_meta_description = RE_META_DESC
        .find(html)
        .map(|m| {
            RE_META_CONTENT
                .captures(m.as_str())
                .map(|c| !c[1].trim().is_empty())
                .unwrap_or(false)
        })
        .unwrap_or(false);

    let has_ldjson = RE_LDJSON.is_match(html);
    let contact_email = RE_EMAIL.find(html).map(|m| m.as_str().to_string());

    SiteInfo {
        reachable: true,
        has_title,
        has_meta_description,
        has_ldjson,
        contact_email,
    }
}

/// Fetch a site's HTML. Any failure (DNS, timeout, non-2xx) yields `None`;
/// an unreachable website is a signal, not an error.
pub async fn fetch_site(client: &reqwest::Client, url: &str) -> Option<String> {
    let resp = client
        .get(url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .send()
        .await
        .ok()?;
    let resp = match resp.error_for_status() {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!(error = ?e, url, "site returned error status");
            return None;
        }
    };
    resp.text().await.ok()
}
