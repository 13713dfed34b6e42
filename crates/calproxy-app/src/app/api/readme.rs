//! Plain-text usage page served at the root.

use salvo::writing::Text;
use salvo::{Depot, Response, handler};

use calproxy_core::constants::DEFAULT_UPSTREAM_ORIGIN;

use crate::config::get_config_from_depot;

/// ## Summary
/// Renders the usage page, with the configured upstream origin woven into
/// the description.
#[handler]
pub async fn readme(res: &mut Response, depot: &Depot) {
    let upstream = get_config_from_depot(depot)
        .map(|settings| settings.upstream.origin.clone())
        .unwrap_or_else(|_| DEFAULT_UPSTREAM_ORIGIN.to_string());

    res.render(Text::Plain(usage_page(&upstream)));
}

fn usage_page(upstream: &str) -> String {
    format!(
        "\
NAME
    calproxy - Adds additional features to proxied iCalendar feeds

SYNOPSIS
    /                                 - Shows this message
    /calendar/{{uid}}/{{cid}}/{{token}}.ics - Proxies an upstream calendar URL

DESCRIPTION
    calproxy modifies the calendars served by {upstream} to add additional
    features. To use it with a calendar URL, just replace
    {upstream}/calendar/ with the URL of this proxy.

FEATURES
    Refresh Interval
    -- The refresh interval is reduced from 1 hour to 15 minutes.

    Event Duration
    -- A custom event duration can be set by adding \"Calendar::Duration=dur\"
       on its own line (without the quotes) at the top of the event
       description. Replace dur with a span between 1s and 7d, for example
       1d, 2h, 1h30m, 15m30s, and so on. If not specified, the upstream
       default of 1h is used.

ABOUT
    If using this with a private calendar, consider hosting your own
    instance.

    Version - {version}
",
        version = env!("CARGO_PKG_VERSION"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_page_names_the_upstream() {
        let page = usage_page("https://calendars.example.com");
        assert!(page.contains("https://calendars.example.com/calendar/"));
        assert!(page.contains("Calendar::Duration=dur"));
    }
}
