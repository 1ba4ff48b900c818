//! Application state shared by handlers.

pub(crate) mod state;
