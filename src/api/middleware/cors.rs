//! Open cross-origin policy.
//!
//! Every response, errors and 405s included, carries
//! `Access-Control-Allow-Origin: *`. There is no origin allow-list.

use axum::http::{HeaderValue, header};
use tower_http::set_header::SetResponseHeaderLayer;

/// Creates the layer stamping the wildcard allow-origin header.
///
/// A value already set by a handler is replaced.
pub fn layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    )
}
