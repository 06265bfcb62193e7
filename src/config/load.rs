//! File reading and override resolution.
//!
//! The path default is `config/default.toml` relative to the working
//! directory. `ECHOVOX_BIND` and `ECHOVOX_LOG_LEVEL` beat the file, and
//! the model credential is captured from `OPENAI_API_KEY` here, exactly
//! once; nothing downstream re-reads the environment.

use std::env;
use std::fs;
use std::path::Path;

use crate::error::AppError;

use super::raw::RawConfig;
use super::types::*;

/// Load config from the given path, or `config/default.toml`, then apply
/// env-var overrides. An explicitly given path must exist; the default path
/// is optional because every raw field carries a default.
pub fn load(config_path: Option<&str>) -> Result<Config, AppError> {
    let bind_override = env::var("ECHOVOX_BIND").ok();
    let log_level_override = env::var("ECHOVOX_LOG_LEVEL").ok();

    if let Some(path) = config_path {
        return load_from(
            Path::new(path),
            bind_override.as_deref(),
            log_level_override.as_deref(),
        );
    }

    let default_path = Path::new("config/default.toml");
    if default_path.exists() {
        load_from(
            default_path,
            bind_override.as_deref(),
            log_level_override.as_deref(),
        )
    } else {
        Ok(resolve(
            RawConfig::default(),
            bind_override.as_deref(),
            log_level_override.as_deref(),
        ))
    }
}

/// Loader taking an explicit path and optional overrides. Tests pass
/// overrides directly instead of mutating env vars.
pub fn load_from(
    path: &Path,
    bind_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<Config, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let parsed: RawConfig = toml::from_str(&raw)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?;

    Ok(resolve(parsed, bind_override, log_level_override))
}

/// Turn a raw parse into the public [`Config`], applying overrides and
/// capturing the model credential.
fn resolve(
    parsed: RawConfig,
    bind_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Config {
    Config {
        log_level: log_level_override
            .unwrap_or(&parsed.service.log_level)
            .to_string(),
        server: ServerConfig {
            bind: bind_override.unwrap_or(&parsed.server.bind).to_string(),
        },
        llm: LlmConfig {
            provider: parsed.llm.provider,
            openai: OpenAiConfig {
                api_base_url: parsed.llm.openai.api_base_url,
                model: parsed.llm.openai.model,
                temperature: parsed.llm.openai.temperature,
                timeout_seconds: parsed.llm.openai.timeout_seconds,
            },
        },
        pictograms: PictogramsConfig {
            api_base_url: parsed.pictograms.api_base_url,
            timeout_seconds: parsed.pictograms.timeout_seconds,
        },
        openai_api_key: env::var("OPENAI_API_KEY").ok(),
    }
}
