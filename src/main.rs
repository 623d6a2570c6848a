//! appstore binary entrypoint kept minimal. The runtime lives in the library crate.

use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

use appstore::{app, args, catalog::Catalog, state::AppState, theme};
use clap::Parser;

struct AppstoreTimer;

impl tracing_subscriber::fmt::time::FormatTime for AppstoreTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        // "YYYY-MM-DD-T HH:MM:SS"
        let ts = chrono::Local::now()
            .format("%Y-%m-%d-T %H:%M:%S")
            .to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset
///
/// Details:
/// - Writes to `<config>/logs/appstore.log` through a non-blocking appender;
///   falls back to stderr when the file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let mut log_path = theme::logs_dir();
    log_path.push("appstore.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(AppstoreTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so startup is never blocked
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(AppstoreTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

/// What: Pick the catalog source: `--catalog`, then the `catalog_path` setting, then the built-in one.
fn load_catalog(
    cli_path: Option<&PathBuf>,
    settings: &theme::Settings,
) -> Result<Catalog, appstore::catalog::CatalogError> {
    match cli_path.or(settings.catalog_path.as_ref()) {
        Some(path) => Catalog::from_path(path),
        None => Catalog::builtin(),
    }
}

fn main() {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "appstore starting");

    let settings = theme::settings();
    let catalog = match load_catalog(cli.catalog.as_ref(), &settings) {
        Ok(c) => c,
        Err(err) => {
            tracing::error!(error = %err, "failed to load catalog");
            eprintln!("appstore: {err}");
            std::process::exit(1);
        }
    };

    match args::process_args(&cli, &catalog) {
        Ok(true) => return,
        Ok(false) => {}
        Err(err) => {
            tracing::error!(error = %err, "listing failed");
            eprintln!("appstore: {err}");
            std::process::exit(1);
        }
    }

    let mut state = AppState::with_settings(catalog, &settings, appstore::util::today());
    state.set_filter(cli.filter_state());
    if let Err(err) = app::run(state) {
        tracing::error!(error = ?err, "Application error");
        eprintln!("appstore: {err}");
        std::process::exit(1);
    }
    tracing::info!("appstore exited");
}
