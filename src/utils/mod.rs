//! Utility modules
//!
//! Provides logging initialization and profile directory resolution shared by
//! settings storage and the log file appender.

pub mod logging;
pub mod paths;

pub use logging::init_logging;
pub use paths::profile_dir;
