#![allow(clippy::must_use_candidate)]

pub mod bedrock;
mod env;
pub mod health;
mod loader;
pub mod server;

use serde::Deserialize;

pub use bedrock::BedrockConfig;
pub use health::HealthConfig;
pub use server::ServerConfig;

/// Top-level Quarry configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Bedrock backend configuration
    #[serde(default)]
    pub bedrock: BedrockConfig,
}
