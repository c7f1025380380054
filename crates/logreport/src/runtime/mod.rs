//! Runtime module — process lifecycle: boot, then run a single report.

pub mod boot;
pub mod run;

pub use run::{run, RunRequest};
