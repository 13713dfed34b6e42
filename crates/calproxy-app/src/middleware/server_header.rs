//! Server identification header middleware.

use salvo::http::HeaderValue;
use salvo::{Response, handler};

/// Identification advertised on every response.
const SERVER_IDENT: &str = concat!("calproxy (", env!("CARGO_PKG_VERSION"), ")");

/// ## Summary
/// Sets the `Server` header on every response. Applied as a router hoop.
#[handler]
pub async fn server_header(res: &mut Response) {
    let _ = res.add_header("Server", HeaderValue::from_static(SERVER_IDENT), true);
}
