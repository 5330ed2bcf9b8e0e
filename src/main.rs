//! txview main entry point

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::Runtime;
use txview_api::{start_server, AppState};
use txview_config::Config;
use txview_core::{load_or_empty, JsonFileSource, SourceRef};

#[derive(Parser, Debug)]
#[command(name = "txview")]
#[command(version)]
#[command(about = "Browse a member's transaction history in the browser", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let config = load_config(&args.config)?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    log::info!(
        "Config loaded: snapshot={}, listen={}",
        config.user_path().display(),
        config.bind_addr()
    );

    let rt = Runtime::new().context("failed to start tokio runtime")?;
    rt.block_on(async {
        let source: SourceRef = Arc::new(JsonFileSource::from_config(&config));
        let user = load_or_empty(source.as_ref())
            .await
            .map_err(|e| anyhow::anyhow!(e.to_details().to_string()))?;

        start_server(AppState::new(config, source, user))
            .await
            .context("server error")
    })
}

/// A missing file at the default location falls back to built-in defaults
fn load_config(path: &Path) -> anyhow::Result<Config> {
    match Config::load(path.to_path_buf()) {
        Ok(config) => Ok(config),
        Err(txview_config::ConfigError::FileNotFound { .. }) if path == Path::new("config.yaml") => {
            eprintln!("[WARN] config.yaml not found, using defaults");
            Ok(Config::default())
        }
        Err(e) => Err(anyhow::anyhow!(e.to_details().to_string())),
    }
}
