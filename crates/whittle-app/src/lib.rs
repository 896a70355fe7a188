//! Use case orchestration for whittle.
//!
//! The application layer drives the domain engine over a line source and
//! owns the run counters and timing. The CLI crate depends on this; it only
//! handles argument parsing and file I/O.

#![forbid(unsafe_code)]

mod filter;
mod report;

pub use filter::{run_filter, FilterOutput};
pub use report::render_summary;
