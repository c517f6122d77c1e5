//! Utility modules for cmakewiz

pub mod logging;

pub use logging::{init_logging, LoggingConfig};
