// Module structure for logreport: read access logs, aggregate, render.

// Core
pub mod error;
pub mod reader;
pub mod report;

// Surfaces
pub mod render;
pub mod conf;
pub mod runtime;

pub use error::{ReportError, ReportResult};
