//! Test doubles for infrastructure ports
//!
//! Available to unit tests and, through the `testing` feature, to dependents.

pub mod fixtures;

pub use fixtures::{sample_guides, sample_source, StaticGuideSource};
