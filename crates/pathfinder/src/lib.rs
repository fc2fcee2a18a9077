//! Core library for the Pathfinder career archetype assessment.
//!
//! The `assessment` module owns the scoring and classification engine plus the
//! service facade and HTTP router; `config`, `telemetry`, and `error` carry the
//! runtime plumbing shared with the API binary.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
