//! Observability and telemetry.

mod logging;

pub use logging::{LogFormat, LoggingConfig, init_logging};
