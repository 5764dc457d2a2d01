//! Logging configuration constants

/// Default log level when not specified
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log mode when not specified
pub const DEFAULT_LOG_MODE: &str = "stdout";

/// Default base path for file logging, rolled by date
pub const DEFAULT_LOG_FILE_PATH: &str = "logs/address-checker.log";
