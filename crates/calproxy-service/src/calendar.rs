//! The calendar proxy pipeline.

use calproxy_rfc::Document;
use chrono::TimeDelta;

use crate::error::ServiceResult;
use crate::transform::{apply_event_durations, set_refresh_interval};
use crate::upstream::UpstreamClient;

/// Refresh interval advertised to calendar clients, replacing the upstream
/// default of one hour.
const REFRESH_INTERVAL_MINUTES: i64 = 15;

/// Fetches one upstream calendar and applies the proxy rewrites.
///
/// The parsed document is owned by this call alone: fetched text is parsed,
/// rewritten in place, and serialized before returning. Serialization never
/// re-parses its own output.
///
/// ## Errors
/// Propagates fetch, parse, and duration-formatting failures. A parse
/// failure yields no partial output.
#[tracing::instrument(skip(upstream, token))]
pub async fn proxy_calendar(
    upstream: &UpstreamClient,
    uid: &str,
    cid: &str,
    token: &str,
) -> ServiceResult<Vec<u8>> {
    let text = upstream.fetch_calendar(uid, cid, token).await?;

    let mut document = Document::parse(&text)?;
    set_refresh_interval(&mut document, TimeDelta::minutes(REFRESH_INTERVAL_MINUTES))?;
    apply_event_durations(&mut document);

    Ok(document.to_bytes())
}
