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

//! Snapshot reader for the superseedr status artifact.
//!
//! Every call performs one fresh read of the artifact and an all-or-nothing
//! decode. Nothing is cached between calls, so a result only ever reflects the
//! artifact as it was at the moment of that read.
//!
//! Layout: `error.rs` (failure taxonomy), `reader.rs` (`SnapshotSource` trait and
//! the file-backed reader).

pub mod error;
pub mod reader;

pub use error::{SnapshotError, SnapshotResult};
pub use reader::{FileSnapshotReader, SnapshotSource, decode_snapshot};
