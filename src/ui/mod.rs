//! Console output for validation and preview runs.
//!
//! Orchestration code hands finished reports to [`Reporter`], which owns all
//! formatting so output stays identical across reruns.

pub mod report;
pub mod settings;

pub use report::Reporter;
