/// Route component constants shared across crates
pub const CALENDAR_ROUTE_COMPONENT: &str = "calendar";
pub const CALENDAR_ROUTE_PREFIX: &str = const_str::concat!("/", CALENDAR_ROUTE_COMPONENT);

/// Calendar resources are addressed with this file extension, matching the
/// upstream URL scheme.
pub const CALENDAR_FILE_EXTENSION: &str = ".ics";

/// Default origin proxied when no upstream is configured.
pub const DEFAULT_UPSTREAM_ORIGIN: &str = "https://trello.com";
