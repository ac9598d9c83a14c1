//! Output formatting
//!
//! The three stdout lines (per-request, per-worker average, run total) are a
//! compatibility contract: existing tooling parses them, so their format
//! lives here in one place and nothing else is written to stdout by default.

pub mod text;
