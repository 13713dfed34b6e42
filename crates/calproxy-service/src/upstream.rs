//! Upstream calendar fetching.

use calproxy_core::constants::{CALENDAR_FILE_EXTENSION, CALENDAR_ROUTE_PREFIX};

use crate::error::{ServiceError, ServiceResult};

/// HTTP client for the proxied calendar service.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    origin: String,
}

impl UpstreamClient {
    /// Creates a client for the given upstream origin (scheme included,
    /// no trailing slash).
    #[must_use]
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            origin: origin.into(),
        }
    }

    /// Builds the upstream URL for a calendar resource.
    fn calendar_url(&self, uid: &str, cid: &str, token: &str) -> String {
        format!(
            "{}{CALENDAR_ROUTE_PREFIX}/{uid}/{cid}/{token}{CALENDAR_FILE_EXTENSION}",
            self.origin
        )
    }

    /// Fetches the raw iCalendar text for a calendar.
    ///
    /// ## Errors
    /// - [`ServiceError::CalendarNotFound`] when upstream answers 404
    /// - [`ServiceError::UpstreamStatus`] for any other non-success status
    /// - [`ServiceError::UpstreamContentType`] when the response does not
    ///   declare `text/calendar`
    /// - [`ServiceError::Upstream`] for transport failures
    #[tracing::instrument(skip(self, token))]
    pub async fn fetch_calendar(&self, uid: &str, cid: &str, token: &str) -> ServiceResult<String> {
        let url = self.calendar_url(uid, cid, token);

        let response = self.client.get(&url).send().await?;

        match response.status() {
            reqwest::StatusCode::NOT_FOUND => return Err(ServiceError::CalendarNotFound),
            status if !status.is_success() => return Err(ServiceError::UpstreamStatus(status)),
            _ => {}
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !content_type.contains("text/calendar") {
            return Err(ServiceError::UpstreamContentType(content_type));
        }

        tracing::debug!(uid, cid, "Fetched upstream calendar");

        Ok(response.text().await?)
    }
}
