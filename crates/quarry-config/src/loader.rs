use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the Bedrock section or health route is invalid
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_bedrock_config()?;
        self.validate_health_config()?;
        Ok(())
    }

    fn validate_bedrock_config(&self) -> anyhow::Result<()> {
        if self.bedrock.region.is_empty() {
            anyhow::bail!("bedrock.region must not be empty");
        }

        // Credentials are optional as a pair; a lone half silently falls
        // back to the default chain, which is always a misconfiguration
        let has_key_id = self
            .bedrock
            .access_key_id
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty());
        let has_secret = self
            .bedrock
            .secret_access_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty());

        if has_key_id != has_secret {
            anyhow::bail!("bedrock.access_key_id and bedrock.secret_access_key must be set together");
        }

        Ok(())
    }

    fn validate_health_config(&self) -> anyhow::Result<()> {
        if self.server.health.enabled && !self.server.health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/'");
        }

        Ok(())
    }
}
