//! Typed error definitions for wanwatch.
//!
//! All errors are designed to be:
//!
//! - **Serializable** so they can be logged as structured fields
//! - **Matchable** so tests can assert on the exact failure
//! - **Composable** via thiserror derive macros

mod ingest;
mod store;

pub use ingest::IngestError;
pub use store::StoreError;
