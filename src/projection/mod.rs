//! Compound-growth projection engine and its request/result types

mod engine;
mod request;

pub use engine::{ProjectionEngine, DEFAULT_ESTIMATE_YEARS};
pub use request::{ProjectionRequest, ProjectionResult};
