pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod types;

pub use engines::metrics::{MetricsEngine, Ratios, ScenarioProjector};
pub use error::{FinboardError, Result};
