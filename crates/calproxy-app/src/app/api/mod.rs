mod calendar;
mod readme;

use salvo::Router;

// Re-export route constants from core
pub use calproxy_core::constants::{CALENDAR_ROUTE_COMPONENT, CALENDAR_ROUTE_PREFIX};

/// ## Summary
/// Constructs the main router: the usage page at the root and the calendar
/// proxy endpoint.
#[must_use]
pub fn routes() -> Router {
    Router::new().get(readme::readme).push(
        Router::with_path(CALENDAR_ROUTE_COMPONENT).push(
            Router::with_path("{uid}/{cid}/{token}").get(calendar::transform_calendar),
        ),
    )
}
