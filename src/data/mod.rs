pub mod connectors;
pub mod scenario;

pub use connectors::{DataValidator, SnapshotConnector, SnapshotField};
pub use scenario::ScenarioLoader;
