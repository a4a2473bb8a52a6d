//! Binary entry point: parse the CLI, detect the host, run the pipeline.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use sdk_provision::cli::Cli;
use sdk_provision_core::config::InstallConfig;
use sdk_provision_core::exec::SystemRunner;
use sdk_provision_core::host::HostContext;
use sdk_provision_toolchain::Provisioner;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => InstallConfig::load(path).await?,
        None => cli
            .install_config()
            .context("--api-level, --target, and --arch are required without --config")?,
    };

    let mut host = HostContext::detect()?;
    if let Some(sdk_home) = cli.sdk_home {
        host.sdk_home = sdk_home;
    }

    info!("Provisioning Android SDK in {}", host.sdk_home.display());

    let provisioner = Provisioner::new(Arc::new(SystemRunner), host);
    if let Err(err) = provisioner.provision(&config).await {
        error!("{}", err);
        std::process::exit(1);
    }

    info!("SDK provisioning complete.");
    Ok(())
}
