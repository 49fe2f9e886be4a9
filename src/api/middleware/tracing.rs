//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Request logging for the user routes and `/`.
///
/// Every user call is logged once with its status, so 400/404/405 outcomes
/// show up at `INFO` next to the 201/204 ones. A 500 from a failed SQLite
/// statement is also reported at `ERROR`, alongside the `sqlx` error logged
/// by [`AppError`](crate::error::AppError).
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/user version=HTTP/1.1}: finished processing request latency=3 ms status=201
/// INFO request{method=DELETE uri=/user/delete/7 version=HTTP/1.1}: finished processing request latency=1 ms status=404
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(DefaultOnFailure::new().level(Level::ERROR))
}
