//! Error handling for POMIS+ discovery.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod arm_error;
pub mod config_error;
pub mod enumeration_error;
pub mod error_code;
pub mod graph_error;
pub mod partition_error;
pub mod pomis_error;

pub use arm_error::ArmError;
pub use config_error::ConfigError;
pub use enumeration_error::EnumerationError;
pub use error_code::PomisErrorCode;
pub use graph_error::GraphError;
pub use partition_error::PartitionError;
pub use pomis_error::{PomisError, PomisResult};
