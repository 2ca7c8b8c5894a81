//! Rule-based report generation.
//!
//! The analyzer maps a free-text symptom description to a fully
//! populated [`crate::models::HealthReport`] by evaluating an ordered
//! table of keyword category rules with accumulation semantics, then
//! deriving a bounded health score and a templated summary. It is a
//! content lookup, not a learned model; given the same text it always
//! produces the same advisory content.

pub mod emergency;
pub mod engine;
pub mod rules;

pub use emergency::EmergencyNotice;
pub use engine::HealthAnalyzer;
