//! Group controller binary.

use anyhow::Result;
use clap::Parser;
use kube::Client;
use tracing_subscriber::EnvFilter;

/// Reconciles Group resources into per-cluster PlacementRules.
#[derive(Debug, Parser)]
#[command(name = "ran-lcm-controller", version)]
struct Args {
    /// Watch a single namespace instead of the whole cluster.
    #[arg(long)]
    namespace: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let client = Client::try_default().await?;

    ran_lcm_controller::controller::run(client, args.namespace.as_deref()).await?;

    Ok(())
}
