//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty console output on stderr
//! - Optional rolling JSON log files
//! - Secret scrubbing for configuration dumps

pub mod logger;
pub mod secret_scrubbing;

pub use logger::{LoggerImpl, TracingWarnLogger, LOG_FILE_NAME};
pub use secret_scrubbing::{SecretScrubber, REDACTED};
