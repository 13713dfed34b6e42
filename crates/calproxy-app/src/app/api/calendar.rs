//! The calendar proxy endpoint.

use calproxy_core::constants::CALENDAR_FILE_EXTENSION;
use calproxy_service::calendar::proxy_calendar;
use calproxy_service::error::ServiceError;
use salvo::http::{HeaderValue, StatusCode};
use salvo::writing::Text;
use salvo::{Depot, Request, Response, handler};

use crate::client_handler::get_upstream_from_depot;
use crate::error::{AppError, AppResult};

/// ## Summary
/// Handles GET requests for a proxied calendar: fetches the upstream feed,
/// rewrites the refresh interval and event durations, and returns the
/// serialized result.
///
/// ## Errors
/// Responds 404 when the request lacks the `.ics` suffix or the upstream
/// does not know the calendar, and 500 with a plain-text message for any
/// other fetch, parse, or transform failure. A parse failure never produces
/// a partial calendar response.
#[handler]
#[tracing::instrument(skip(req, res, depot), fields(path = %req.uri().path()))]
pub async fn transform_calendar(req: &mut Request, res: &mut Response, depot: &Depot) {
    let uid = req.param::<String>("uid").unwrap_or_default();
    let cid = req.param::<String>("cid").unwrap_or_default();
    let token = req.param::<String>("token").unwrap_or_default();

    // The route leaves the extension inside the token parameter.
    let Some(token) = token.strip_suffix(CALENDAR_FILE_EXTENSION) else {
        res.status_code(StatusCode::NOT_FOUND);
        return;
    };

    match fetch_and_transform(depot, &uid, &cid, token).await {
        Ok(body) => {
            let _ = res.add_header(
                "Access-Control-Allow-Origin",
                HeaderValue::from_static("*"),
                true,
            );
            let _ = res.add_header(
                "Content-Type",
                HeaderValue::from_static("text/calendar; charset=utf-8"),
                true,
            );
            let _ = res.add_header(
                "Cache-Control",
                HeaderValue::from_static("no-store, no-cache, must-revalidate, proxy-revalidate"),
                true,
            );
            let _ = res.add_header("Pragma", HeaderValue::from_static("no-cache"), true);
            let _ = res.add_header("Expires", HeaderValue::from_static("0"), true);
            res.status_code(StatusCode::OK);
            if let Err(error) = res.write_body(body) {
                tracing::error!(%error, "Failed to write calendar response");
            }
        }
        Err(AppError::ServiceError(ServiceError::CalendarNotFound)) => {
            res.status_code(StatusCode::NOT_FOUND);
            res.render(Text::Plain("calendar not found"));
        }
        Err(error) => {
            tracing::error!(%error, "Calendar proxy request failed");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Text::Plain(error.to_string()));
        }
    }
}

/// Resolves the shared upstream client and runs the proxy pipeline.
async fn fetch_and_transform(
    depot: &Depot,
    uid: &str,
    cid: &str,
    token: &str,
) -> AppResult<Vec<u8>> {
    let upstream = get_upstream_from_depot(depot)?;
    Ok(proxy_calendar(&upstream, uid, cid, token).await?)
}
