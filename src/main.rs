mod cli;
mod config;
mod error;
mod filter;
mod kubernetes;
mod resolver;
mod types;
mod ui;
mod version;

use clap::Parser;
use tracing::{info, warn};

use cli::{Cli, Command};
use config::{ConnectionOptions, ResolveSettings, connect};
use error::ClogsError;
use kubernetes::{KubeCatalog, KubeLogSource, stream_logs};
use ui::TerminalPrompt;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the container's log bytes
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Some(Command::Version) = cli.command {
        version::report_version(&mut std::io::stdout().lock(), VERSION)?;
        return Ok(());
    }

    let (client, default_namespace) = connect(&ConnectionOptions::from_cli(&cli)).await?;
    let settings = ResolveSettings::from_cli(&cli, &default_namespace);

    let catalog = KubeCatalog::new(client.clone());
    let mut prompt = TerminalPrompt;
    let target = resolver::resolve(&catalog, &mut prompt, &settings).await?;

    info!(
        pod = target.pod_name(),
        container = target.container_name(),
        namespace = target.namespace(),
        "Logs from pod..."
    );

    let source = KubeLogSource::new(client);
    let mut stdout = std::io::stdout().lock();
    tokio::select! {
        res = stream_logs(&source, &target, &mut stdout) => {
            res?;
        }
        _ = tokio::signal::ctrl_c() => {
            warn!(resolved = %target, "Interrupted, closing log stream");
            return Err(ClogsError::Interrupted.into());
        }
    }

    Ok(())
}
