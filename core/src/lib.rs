//! Core scalar-statistics and spectral helpers for the Rust vital-signs
//! platform.
//!
//! The modules mirror the embedded physiological-signal math layer while
//! providing slice-based abstractions, explicit input validation, and
//! well-defined numerical contracts.

pub mod math;
pub mod prelude;
pub mod report;
pub mod telemetry;

pub use prelude::{StatsError, StatsResult};
