mod cli;
mod driver;

use std::io::{self, BufRead, Write};
use std::path::Path;

use folio_common::types::Rect;
use folio_config::FolioConfig;
use folio_platform::KeybindRegistry;
use folio_tiling::WindowController;
use tracing_subscriber::EnvFilter;

fn load_config(path: Option<&str>) -> FolioConfig {
    let loaded = match path {
        Some(path) => {
            tracing::info!("Using config override: {path}");
            folio_config::toml_loader::load_from_path(Path::new(path))
        }
        None => folio_config::load_config(),
    };
    loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        FolioConfig::default()
    })
}

fn main() -> io::Result<()> {
    let args = cli::parse();

    // Logs go to stderr so stdout carries only command output.
    let log_directive = args.log_level.as_deref().unwrap_or("folio=info");
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(
            log_directive.parse().unwrap_or_else(|_| {
                tracing_subscriber::filter::Directive::from(tracing::Level::INFO)
            }),
        ))
        .init();

    tracing::info!("Folio v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = load_config(args.config.as_deref());
    let registry = KeybindRegistry::from_config(&config.keybinds);
    tracing::info!("Keybind registry loaded ({} bindings)", registry.len());

    let container = Rect::new(0.0, 0.0, args.width, args.height);
    let controller = WindowController::new(config.tiling, container);
    let mut driver = driver::Driver::new(controller, registry);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        match driver.run_line(&line?) {
            Ok(Some(output)) => writeln!(stdout, "{output}")?,
            Ok(None) => {}
            Err(e) => {
                tracing::debug!("command failed: {e}");
                writeln!(stdout, "{}", serde_json::json!({ "error": e.to_string() }))?;
            }
        }
        stdout.flush()?;
    }

    tracing::info!("stdin closed, exiting");
    Ok(())
}
