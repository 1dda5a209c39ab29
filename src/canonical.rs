/// URL canonicalization for Job Stash
use url::Url;

use crate::config::JOB_LISTING_MARKER;

/// Canonicalize a URL so equivalent addresses compare equal
///
/// Algorithm:
/// 1. Trim surrounding whitespace
/// 2. Parse with the `url` crate and drop the query string
/// 3. If the URL does not parse, fall back to cutting at the first '?'
///
/// Examples:
/// - https://x.com/a?x=1 → https://x.com/a
/// - https://jobs.example.com/jobs/42?ref=feed#apply → https://jobs.example.com/jobs/42#apply
/// - not a url?x=1 → not a url
pub fn canonical_url(raw: &str) -> String {
    let trimmed = raw.trim();

    match Url::parse(trimmed) {
        Ok(mut parsed) => {
            parsed.set_query(None);
            parsed.to_string()
        }
        Err(_) => trimmed
            .split('?')
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}

/// Compare two URLs under canonicalization
pub fn same_url(a: &str, b: &str) -> bool {
    canonical_url(a) == canonical_url(b)
}

/// Whether page info extraction applies to this URL
///
/// Only the path counts, so a marker inside the query or fragment does not match.
pub fn is_job_listing(url: &str) -> bool {
    match Url::parse(url.trim()) {
        Ok(parsed) => parsed.path().contains(JOB_LISTING_MARKER),
        Err(_) => canonical_url(url)
            .split('#')
            .next()
            .unwrap_or_default()
            .contains(JOB_LISTING_MARKER),
    }
}
