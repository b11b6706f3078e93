//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction;
//! credentials stay optional until a command actually needs them.

use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

use crate::client::PayopConfig;
use crate::model::Language;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config,
/// or [`ValidatedConfig::load`] to also locate and read the config file.
pub struct ValidatedConfig {
    /// Bearer token, if provided
    pub token: Option<String>,

    /// Application public key, if provided
    pub public_key: Option<String>,

    /// Application secret key, if provided
    pub secret_key: Option<String>,

    /// Base API URL
    pub api_url: Url,

    /// Default payment method for checkouts
    pub payment_method: String,

    /// Default checkout language
    pub language: Language,

    /// Config file the values were read from, if any
    pub config_file: Option<PathBuf>,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Debug for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("public_key", &self.public_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url.as_str())
            .field("payment_method", &self.payment_method)
            .field("language", &self.language)
            .field("config_file", &self.config_file)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config_file_str = self
            .config_file
            .as_ref()
            .map_or_else(|| "none".to_string(), |p| p.display().to_string());

        write!(
            f,
            "Config {{ api_url: {}, token: {}, public_key: {}, secret_key: {}, \
             payment_method: {}, language: {}, config_file: {} }}",
            self.api_url,
            presence(self.token.as_ref()),
            self.public_key.as_deref().unwrap_or("unset"),
            presence(self.secret_key.as_ref()),
            self.payment_method,
            self.language,
            config_file_str,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values, which take
    /// precedence over built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API URL is invalid
    /// - The configured language is not `en` or `ru`
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let credentials = toml.map(|t| &t.credentials);

        let token = cli
            .token
            .clone()
            .or_else(|| credentials.and_then(|c| c.token.clone()));
        let public_key = cli
            .public_key
            .clone()
            .or_else(|| credentials.and_then(|c| c.public_key.clone()));
        let secret_key = cli
            .secret_key
            .clone()
            .or_else(|| credentials.and_then(|c| c.secret_key.clone()));

        let api_url = Self::resolve_api_url(cli, toml)?;
        let language = Self::resolve_language(toml)?;

        let payment_method = toml
            .and_then(|t| t.checkout.payment_method.clone())
            .unwrap_or_else(|| defaults::PAYMENT_METHOD.to_string());

        Ok(Self {
            token,
            public_key,
            secret_key,
            api_url,
            payment_method,
            language,
            config_file: None,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and the config file.
    ///
    /// Reads `cli.config` if set; otherwise reads the default config file
    /// if it exists. Without either, only CLI values and defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let path = resolve_config_path(cli.config.as_deref(), defaults::config_path());
        let toml = path.as_deref().map(TomlConfig::load).transpose()?;

        let mut config = Self::from_raw(cli, toml.as_ref())?;
        config.config_file = path;
        Ok(config)
    }

    /// Builds the client configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] if the token or public key is absent.
    pub fn client_config(&self) -> Result<PayopConfig, ConfigError> {
        let token = self.token.as_deref().ok_or_else(|| {
            ConfigError::missing(
                field::TOKEN,
                "Use --token or set credentials.token in config file",
            )
        })?;
        let public_key = self.public_key.as_deref().ok_or_else(|| {
            ConfigError::missing(
                field::PUBLIC_KEY,
                "Use --public-key or set credentials.public_key in config file",
            )
        })?;

        let config = PayopConfig::new(token, public_key).with_api_url(self.api_url.as_str());
        Ok(match self.secret_key.as_deref() {
            Some(secret) => config.with_secret_key(secret),
            None => config,
        })
    }

    /// Returns the secret key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] if it is absent.
    pub fn require_secret_key(&self) -> Result<&str, ConfigError> {
        self.secret_key.as_deref().ok_or_else(|| {
            ConfigError::missing(
                field::SECRET_KEY,
                "Use --secret-key or set credentials.secret_key in config file",
            )
        })
    }

    fn resolve_api_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let url_str = cli
            .api_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.api.url.as_deref()))
            .unwrap_or(defaults::API_URL);

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                url: url_str.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(url)
    }

    fn resolve_language(toml: Option<&TomlConfig>) -> Result<Language, ConfigError> {
        toml.and_then(|t| t.checkout.language.as_deref())
            .map_or(Ok(Language::default()), |value| {
                value.parse().map_err(|_| ConfigError::InvalidLanguage {
                    value: value.to_string(),
                })
            })
    }
}

/// Writes the default configuration template to a file.
///
/// Creates missing parent directories and never overwrites an existing file.
///
/// # Errors
///
/// Returns an error if the file exists or cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    let write_error = |source| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(write_error)
}

/// Picks the config file to read: the explicit path, else the default
/// location when a file exists there.
pub(super) fn resolve_config_path(
    explicit: Option<&Path>,
    default: Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| default.filter(|p| p.is_file()))
}

const fn presence<T>(value: Option<&T>) -> &'static str {
    if value.is_some() { "set" } else { "unset" }
}
