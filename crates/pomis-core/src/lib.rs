//! # pomis-core
//!
//! Shared vocabulary for POMIS+ discovery: variable sets, intervention
//! sequences, candidate pairs, the per-subsystem error enums, layered TOML
//! configuration, and tracing initialization.

pub mod config;
pub mod errors;
pub mod tracing_setup;
pub mod types;

pub use config::PomisConfig;
pub use errors::{PomisError, PomisResult};
pub use types::{CandidatePair, Sequence, SequenceSet, VarSet};
