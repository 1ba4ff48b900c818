#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! HTTP surface that re-serves the superseedr status snapshot.
//!
//! Layout: `app/state.rs` (shared request state), `http/` (router, handlers and
//! error mapping), `error.rs` (server bootstrap failures).

pub(crate) mod app;
pub mod error;
pub mod http;

pub use error::{ApiServerError, ApiServerResult};
pub use http::router::ApiServer;
