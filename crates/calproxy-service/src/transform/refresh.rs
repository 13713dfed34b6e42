//! Published refresh interval override.

use calproxy_rfc::{Document, format_duration};
use chrono::TimeDelta;

use crate::error::ServiceResult;

/// Property names announcing a publication refresh interval.
const REFRESH_PROPERTIES: [&str; 2] = ["X-PUBLISHED-TTL", "REFRESH-INTERVAL"];

/// Sets the published refresh interval of every calendar in the document.
///
/// Only exact property-name matches are rewritten; a parameterized variant
/// such as `REFRESH-INTERVAL;VALUE=DURATION` is left untouched.
///
/// ## Errors
/// Fails if `interval` is outside the formattable RFC 5545 range.
pub fn set_refresh_interval(document: &mut Document, interval: TimeDelta) -> ServiceResult<()> {
    let value = format_duration(interval)?;

    for calendar in &mut document.calendars {
        for property in calendar.properties_mut() {
            if REFRESH_PROPERTIES.contains(&property.name.as_str()) {
                property.value.clone_from(&value);
            }
        }
    }

    Ok(())
}
