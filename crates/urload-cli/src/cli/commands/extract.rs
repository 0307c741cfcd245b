//! Shared fetch-and-extract loop behind `href` and `img`.

use super::{CommandResult, Env};
use urload_core::fetch::Response;
use urload_core::UrlRecord;

/// Fetches every record and collects what `extract` finds in its body.
///
/// Each found URL becomes a record whose `Referer` is the page it came from.
/// A page that fails to fetch is reported and skipped.
pub(super) fn scrape(
    records: &[UrlRecord],
    env: &mut Env<'_>,
    extract: fn(&str, &str) -> Vec<String>,
) -> CommandResult {
    let mut found = Vec::new();
    for record in records {
        let resp = match env
            .fetcher
            .get(&record.url, &record.headers)
            .and_then(Response::error_for_status)
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(url = %record.url, "fetch failed: {}", e);
                writeln!(env.out, "Error fetching {}: {}", record.url, e)?;
                continue;
            }
        };
        let before = found.len();
        found.extend(
            extract(&resp.text(), &record.url)
                .into_iter()
                .map(|url| UrlRecord::with_referer(url, record.url.clone())),
        );
        tracing::debug!(page = %record.url, count = found.len() - before, "extracted urls");
    }
    Ok(found)
}
