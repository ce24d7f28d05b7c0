pub mod ratios;
pub mod scenario;
pub mod engine;

pub use ratios::Ratios;
pub use scenario::ScenarioProjector;
pub use engine::MetricsEngine;
