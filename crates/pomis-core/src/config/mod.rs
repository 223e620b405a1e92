//! Configuration system for POMIS+ discovery.
//! TOML-based, layered resolution: overrides > env > project file > defaults.

pub mod arm_config;
pub mod defaults;
pub mod enumeration_config;
pub mod logging_config;
pub mod pomis_config;

pub use arm_config::ArmConfig;
pub use enumeration_config::EnumerationConfig;
pub use logging_config::LoggingConfig;
pub use pomis_config::{ConfigOverrides, PomisConfig};
