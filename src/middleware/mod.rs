//! Middleware components for HTTP request processing.

pub mod cors;

pub use cors::cors_middleware;
