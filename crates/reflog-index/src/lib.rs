//! reflog-index library
//!
//! This module exports the index pipeline of reflog-index for use in
//! integration tests and as a library.

pub mod config;
pub mod filter;
pub mod render;
pub mod section;
pub mod update;

pub use render::LinkStyle;
pub use section::{DEFAULT_MARKER, Document, SectionMode};
pub use update::{UpdateError, UpdateOptions, UpdatePlan, Updater};
