//! HTTP handlers
//!
//! The mwan3 hook script POSTs transition events here. There is no other API.

mod ingest;


pub use ingest::ingest_event;
