//! Wildfire readiness scoring: a trained classifier wrapped with a rule-based
//! precipitation adjustment, confidence banding, and plain-language rationale,
//! plus ZIP-driven historical scenarios for demo mode.

pub mod config;
pub mod error;
pub mod scenario;
pub mod scoring;
pub mod telemetry;
