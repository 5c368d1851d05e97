//! # globview
//!
//! A local image browser backend. At startup a glob pattern is resolved
//! against the working directory, the matches are narrowed to image files,
//! and the result is frozen into an [`index::ImageIndex`]. An Axum server then
//! exposes that index to a browser viewer; only files in the index can ever
//! be served.
//!
//! ## Core Components
//!
//! - [`scanner`]: glob matching over a directory walk, plus the image filter
//! - [`index`]: the immutable image index and its two-phase construction
//! - [`routes`]: HTTP handlers and router assembly
//! - [`middleware`]: CORS headers and `OPTIONS` short-circuit
//! - [`mime`]: extension to content-type table
//! - [`state`]: shared read-only request state
//! - [`config`], [`error`], [`cli`]: configuration, error types, argument parsing

pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod middleware;
pub mod mime;
pub mod routes;
pub mod scanner;
pub mod state;

#[cfg(test)]
mod tests;
