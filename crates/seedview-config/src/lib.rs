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

//! Process configuration resolved once from the environment.
//!
//! Layout: `model.rs` (`ServiceConfig` and defaults), `error.rs` (validation
//! failures).

pub mod error;
pub mod model;

pub use error::{ConfigError, ConfigResult};
pub use model::{
    DEFAULT_BIND_ADDR, DEFAULT_LOG_LEVEL, DEFAULT_PORT, DEFAULT_STATUS_FILE, ENV_BIND_ADDR,
    ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_PORT, ENV_STATUS_FILE, ServiceConfig,
};
