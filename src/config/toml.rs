//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// API credentials
    #[serde(default)]
    pub credentials: CredentialsSection,

    /// API endpoint configuration
    #[serde(default)]
    pub api: ApiSection,

    /// Defaults for the checkout command
    #[serde(default)]
    pub checkout: CheckoutSection,
}

/// Credentials section.
#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialsSection {
    /// Bearer token (JWT)
    pub token: Option<String>,

    /// Application public key
    pub public_key: Option<String>,

    /// Application secret key
    pub secret_key: Option<String>,
}

impl std::fmt::Debug for CredentialsSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsSection")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("public_key", &self.public_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// API endpoint section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSection {
    /// Base API URL
    pub url: Option<String>,
}

/// Checkout defaults section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckoutSection {
    /// Payment method identifier
    pub payment_method: Option<String>,

    /// Checkout page language: "en" or "ru"
    pub language: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Payop CLI Configuration File

[credentials]
# Bearer token (JWT) issued in the Payop dashboard (required for API calls)
# token = "eyJ0eXAiOiJKV1Qi..."

# Application public key (required for API calls)
# public_key = "application-..."

# Application secret key (required to create invoices and sign orders)
# secret_key = "your-secret-key"

[api]
# Base API URL (default: https://payop.com)
# url = "https://payop.com"

[checkout]
# Payment method identifier (default: 381, bank cards)
# payment_method = "381"

# Checkout page language: "en" or "ru" (default: en)
# language = "en"
"#
    .to_string()
}
