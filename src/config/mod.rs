pub mod traits;
pub mod scenario;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use scenario::ScenarioConfig;
pub use traits::ConfigSection;
