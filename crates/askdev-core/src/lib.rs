//! Core of askdev: the null-safety demo harness and the Android error log
//! analysis used by the `askdev` CLI.

pub mod analyze;
pub mod blocks;
pub mod catalog;
pub mod demo;
pub mod errors;
pub mod frames;
pub mod parser;
pub mod sink;

pub use analyze::{Analyzer, Diagnosis, MatchSource};
pub use catalog::{Catalog, CatalogEntry};
pub use demo::{NullSafetyDemo, Outcome, Scenario};
pub use errors::{AskdevError, Result};
pub use sink::{CaptureSink, OutputSink, StdoutSink};
