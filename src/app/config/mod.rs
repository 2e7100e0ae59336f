//! File-backed configuration loaders.
//!
//! Parsing produces a `RequestDraft`; validation happens when the draft is
//! finalized by the input collector.

mod load_request_file;

pub use load_request_file::{load_request_file, parse_yes_no};
