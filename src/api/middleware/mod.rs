//! HTTP middleware for request processing.
//!
//! - [`cors`] - Wildcard allow-origin header on every response
//! - [`tracing`] - Request spans and latency logging

pub mod cors;
pub mod tracing;
