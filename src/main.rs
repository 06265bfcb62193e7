//! Service entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Parse CLI flags
//!   3. Load config
//!   4. Resolve effective log level (CLI `-v` flags > env > config)
//!   5. Init logger once
//!   6. Build the simplifier and the pictogram client
//!   7. Spawn Ctrl-C → shutdown signal watcher
//!   8. Serve HTTP until shutdown

use tokio_util::sync::CancellationToken;
use tracing::info;

use echovox_simplify::config;
use echovox_simplify::error::AppError;
use echovox_simplify::logger;
use echovox_simplify::pictograms::PictogramService;
use echovox_simplify::server::{self, AppState};
use echovox_simplify::simplify::TextSimplifier;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let args = parse_cli_args();

    let config = config::load(args.config_path.as_deref())?;

    let effective_log_level = args.log_level.unwrap_or(config.log_level.as_str());
    let force_cli_level = args.log_level.is_some();

    logger::init(effective_log_level, force_cli_level)?;

    info!(
        bind = %config.server.bind,
        llm_provider = %config.llm.provider,
        llm_model = %config.llm.openai.model,
        pictogram_api = %config.pictograms.api_base_url,
        configured_log_level = %config.log_level,
        effective_log_level = %effective_log_level,
        "config loaded"
    );

    let simplifier = TextSimplifier::from_config(&config.llm, config.openai_api_key.clone())
        .map_err(|e| AppError::Config(e.to_string()))?;
    let pictograms = PictogramService::from_config(&config.pictograms)?;

    info!(
        model_backed = simplifier.has_model(),
        "simplification pipeline ready"
    );

    let state = AppState::new(simplifier, pictograms);

    // Shared shutdown token — Ctrl-C cancels it, the server watches it.
    let shutdown = CancellationToken::new();
    let ctrlc_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("ctrl-c received — initiating shutdown");
            ctrlc_token.cancel();
        }
    });

    server::run(&config.server.bind, state, shutdown).await
}

struct CliArgs {
    log_level: Option<&'static str>,
    config_path: Option<String>,
}

fn parse_cli_args() -> CliArgs {
    let mut verbosity = 0u8;
    let mut config_path = None;

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--" {
            break;
        }

        match arg.as_str() {
            "-h" | "--help" => {
                println!("Usage: echovox-simplify [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -h, --help                 Print help");
                println!(
                    "  -f, --config <PATH>        Path to configuration file (default: config/default.toml)"
                );
                println!("  -v, -vv, -vvv, -vvvv       Increase logging verbosity");
                std::process::exit(0);
            }
            "-f" | "--config" => {
                if let Some(path) = iter.next() {
                    config_path = Some(path);
                } else {
                    eprintln!("error: -f/--config requires a path argument");
                    std::process::exit(1);
                }
            }
            "--verbose" => verbosity = verbosity.saturating_add(1),
            a if a.starts_with('-') && a.len() > 1 && a.chars().skip(1).all(|c| c == 'v') => {
                verbosity = verbosity.saturating_add((a.len() - 1) as u8);
            }
            _ => {}
        }
    }

    // Each -v raises verbosity one tier from the config default:
    //   -v      → warn   (suppress info noise, show warnings+errors only)
    //   -vv     → info   (normal operational output)
    //   -vvv    → debug  (flow-level diagnostics: keyword counts, lookup misses)
    //   -vvvv+  → trace  (full payload dumps, very verbose)
    let log_level = match verbosity {
        0 => None,
        1 => Some("warn"),
        2 => Some("info"),
        3 => Some("debug"),
        _ => Some("trace"),
    };

    CliArgs {
        log_level,
        config_path,
    }
}
