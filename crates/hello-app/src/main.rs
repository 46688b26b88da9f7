mod app_state;
mod cli;
mod shell;

use std::path::Path;

use hello_common::{ConfigError, HelloError};
use hello_config::HelloConfig;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const FALLBACK_DIRECTIVE: &str = "hellowebview=info";

/// Filter used while the config file is read, before its level is known.
const BOOTSTRAP_DIRECTIVE: &str = "hellowebview=info,hello_config=info";

fn load_config(args: &cli::Args) -> Result<HelloConfig, ConfigError> {
    match args.config {
        Some(ref path) => hello_config::load_config_from(Path::new(path)),
        None => hello_config::load_config(),
    }
}

/// `--log-level` wins over the config file's `[logging] level`.
fn log_directive(args: &cli::Args, config: &HelloConfig) -> String {
    args.log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.directive())
}

/// Split a comma-separated filter into directives.
///
/// Returns the parsed directives and the parts that failed to parse.
fn parse_directives(directive: &str) -> (Vec<Directive>, Vec<String>) {
    let mut parsed = Vec::new();
    let mut rejected = Vec::new();
    for part in directive.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.parse::<Directive>() {
            Ok(d) => parsed.push(d),
            Err(_) => rejected.push(part.to_string()),
        }
    }
    (parsed, rejected)
}

/// `RUST_LOG` plus `directive`, or plus the fallback when nothing in
/// `directive` parses.
fn build_filter(directive: &str) -> (EnvFilter, Vec<String>) {
    let (mut parsed, rejected) = parse_directives(directive);
    if parsed.is_empty() {
        parsed = parse_directives(FALLBACK_DIRECTIVE).0;
    }
    let filter = parsed
        .into_iter()
        .fold(EnvFilter::from_default_env(), EnvFilter::add_directive);
    (filter, rejected)
}

fn init_logging(directive: &str) {
    let (filter, rejected) = build_filter(directive);
    tracing_subscriber::fmt().with_env_filter(filter).init();
    for part in rejected {
        tracing::warn!("ignoring invalid log directive: {part}");
    }
}

fn bootstrap_filter(args: &cli::Args) -> EnvFilter {
    build_filter(args.log_level.as_deref().unwrap_or(BOOTSTRAP_DIRECTIVE)).0
}

/// Read the config with a temporary subscriber so loader messages are kept.
fn load_config_logged(args: &cli::Args) -> Result<HelloConfig, ConfigError> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(bootstrap_filter(args))
        .finish();
    tracing::subscriber::with_default(subscriber, || load_config(args))
}

fn run() -> Result<(), HelloError> {
    let args = cli::parse();

    let loaded = load_config_logged(&args);
    let config = loaded.as_ref().cloned().unwrap_or_default();

    init_logging(&log_directive(&args, &config));
    tracing::info!("HelloWebView v{} starting...", env!("CARGO_PKG_VERSION"));

    match loaded {
        Ok(_) => tracing::info!(title = %config.window.title, "Config loaded"),
        Err(e) => tracing::warn!("Config load failed, using defaults: {e}"),
    }
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }

    let event_loop = EventLoop::new().map_err(|e| HelloError::EventLoop(e.to_string()))?;
    let mut app = app_state::HelloApp::new(config, Box::new(shell::NativePresenter));

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| HelloError::EventLoop(e.to_string()))?;
    tracing::info!("Shutdown complete");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        tracing::error!("{e}");
        eprintln!("hellowebview: {e}");
        std::process::exit(1);
    }
}
