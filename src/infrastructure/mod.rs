//! Infrastructure layer - Configuration, scenario files and logging

pub mod config;
pub mod logging;
pub mod scenario;

pub use config::Config;
pub use logging::init_logging;
pub use scenario::{LoadedScenario, Scenario};
