//! Application-wide error types.
//!
//! Remote failures inside the simplify and pictogram pipelines degrade in
//! place and never surface here; `AppError` covers the startup path only:
//! config, logger, and server bring-up.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("server error: {0}")]
    Server(String),
}
