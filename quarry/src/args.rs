use std::path::PathBuf;

use clap::Parser;

/// Quarry Bedrock gateway
#[derive(Debug, Parser)]
#[command(name = "quarry", about = "HTTP gateway for Bedrock chat completion and embedding models")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "quarry.toml", env = "QUARRY_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "QUARRY_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
