//! Common utilities for the Weft framework

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{Result, WeftError};
pub use logging::{init_default_logging, init_logging, LoggingConfig};
