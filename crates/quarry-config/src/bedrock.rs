use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// AWS Bedrock backend configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BedrockConfig {
    /// AWS region the models are invoked in
    #[serde(default = "default_region")]
    pub region: String,
    /// Access key ID; the default credential chain is used when absent
    #[serde(default)]
    pub access_key_id: Option<SecretString>,
    /// Secret access key
    #[serde(default)]
    pub secret_access_key: Option<SecretString>,
}

impl BedrockConfig {
    /// Explicit credential pair, when both halves are configured non-empty
    ///
    /// Empty strings count as absent so env-var placeholders can default
    /// to `""` without disabling the default credential chain.
    pub fn credentials(&self) -> Option<(&SecretString, &SecretString)> {
        let access_key = self.access_key_id.as_ref().filter(|k| !k.expose_secret().is_empty())?;
        let secret_key = self
            .secret_access_key
            .as_ref()
            .filter(|k| !k.expose_secret().is_empty())?;
        Some((access_key, secret_key))
    }
}

impl Default for BedrockConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            access_key_id: None,
            secret_access_key: None,
        }
    }
}

fn default_region() -> String {
    "us-east-1".to_string()
}
