//! Logging initialisation via tracing-subscriber.
//!
//! Call [`init`] once at startup, after CLI flags and config are resolved.
//! Output goes to stderr so stdout stays clean when the binary is driven
//! by scripts.

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Initialise the global tracing subscriber.
///
/// `level` accepts the standard level strings (`"error"` through `"trace"`)
/// or any tracing filter directive. With `prefer_level` set, `level` wins
/// over `RUST_LOG`; otherwise `RUST_LOG` wins and `level` is the fallback.
pub fn init(level: &str, prefer_level: bool) -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level, prefer_level)?)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))
}

fn build_filter(level: &str, prefer_level: bool) -> Result<EnvFilter, AppError> {
    let from_level =
        EnvFilter::try_new(level).map_err(|e| format!("invalid log level '{level}': {e}"));
    let from_env =
        EnvFilter::try_from_default_env().map_err(|e| format!("RUST_LOG unusable: {e}"));

    let (primary, fallback) = if prefer_level {
        (from_level, from_env)
    } else {
        (from_env, from_level)
    };

    match primary {
        Ok(filter) => Ok(filter),
        Err(primary_err) => fallback.map_err(|fallback_err| {
            AppError::Logger(format!("{primary_err}; {fallback_err}"))
        }),
    }
}
