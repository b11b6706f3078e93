//! Tests for validated configuration.

use std::path::{Path, PathBuf};

use crate::model::Language;

use super::ConfigError;
use super::cli::Cli;
use super::toml::TomlConfig;
use super::validated::{ValidatedConfig, resolve_config_path, write_default_config};

/// Helper to create CLI args from a slice; appends the `methods` subcommand.
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["payop"];
    full_args.extend(args);
    full_args.push("methods");
    Cli::parse_from_iter(full_args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

fn file_credentials() -> TomlConfig {
    toml(
        r#"
        [credentials]
        token = "file-token"
        public_key = "file-pk"
        secret_key = "file-sk"
    "#,
    )
}

mod defaults {
    use super::*;

    #[test]
    fn empty_sources_use_defaults() {
        let config = ValidatedConfig::from_raw(&cli(&[]), None).unwrap();

        assert_eq!(config.api_url.as_str(), "https://payop.com/");
        assert_eq!(config.payment_method, "381");
        assert_eq!(config.language, Language::En);
        assert!(config.token.is_none());
        assert!(config.public_key.is_none());
        assert!(config.secret_key.is_none());
        assert!(config.config_file.is_none());
        assert!(!config.verbose);
    }

    #[test]
    fn verbose_from_cli() {
        let config = ValidatedConfig::from_raw(&cli(&["--verbose"]), None).unwrap();
        assert!(config.verbose);
    }
}

mod precedence {
    use super::*;

    #[test]
    fn credentials_from_toml() {
        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&file_credentials())).unwrap();

        assert_eq!(config.token.as_deref(), Some("file-token"));
        assert_eq!(config.public_key.as_deref(), Some("file-pk"));
        assert_eq!(config.secret_key.as_deref(), Some("file-sk"));
    }

    #[test]
    fn cli_credentials_override_toml() {
        let cli = cli(&["--token", "cli-token", "--secret-key", "cli-sk"]);
        let config = ValidatedConfig::from_raw(&cli, Some(&file_credentials())).unwrap();

        assert_eq!(config.token.as_deref(), Some("cli-token"));
        assert_eq!(config.public_key.as_deref(), Some("file-pk"));
        assert_eq!(config.secret_key.as_deref(), Some("cli-sk"));
    }

    #[test]
    fn api_url_cli_over_toml_over_default() {
        let file = toml("[api]\nurl = \"https://file.example.com\"");

        let from_file = ValidatedConfig::from_raw(&cli(&[]), Some(&file)).unwrap();
        assert_eq!(from_file.api_url.as_str(), "https://file.example.com/");

        let from_cli = ValidatedConfig::from_raw(
            &cli(&["--api-url", "https://cli.example.com"]),
            Some(&file),
        )
        .unwrap();
        assert_eq!(from_cli.api_url.as_str(), "https://cli.example.com/");
    }

    #[test]
    fn checkout_defaults_from_toml() {
        let file = toml("[checkout]\npayment_method = \"200\"\nlanguage = \"RU\"");
        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&file)).unwrap();

        assert_eq!(config.payment_method, "200");
        assert_eq!(config.language, Language::Ru);
    }
}

mod validation {
    use super::*;

    #[test]
    fn invalid_api_url() {
        let result = ValidatedConfig::from_raw(&cli(&["--api-url", "not a url"]), None);

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn api_url_must_accept_paths() {
        let result = ValidatedConfig::from_raw(&cli(&["--api-url", "mailto:a@example.com"]), None);

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn invalid_language() {
        let file = toml("[checkout]\nlanguage = \"de\"");
        let result = ValidatedConfig::from_raw(&cli(&[]), Some(&file));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidLanguage { ref value }) if value == "de"
        ));
    }
}

mod client_config {
    use super::*;

    #[test]
    fn builds_from_credentials() {
        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&file_credentials())).unwrap();

        let client = config.client_config().unwrap();

        assert_eq!(client.token(), "file-token");
        assert_eq!(client.public_key(), "file-pk");
        assert_eq!(client.secret_key(), Some("file-sk"));
        assert_eq!(client.api_url(), "https://payop.com/");
    }

    #[test]
    fn secret_key_is_optional() {
        let cli = cli(&["--token", "t", "--public-key", "pk"]);
        let config = ValidatedConfig::from_raw(&cli, None).unwrap();

        assert_eq!(config.client_config().unwrap().secret_key(), None);
    }

    #[test]
    fn missing_token() {
        let config = ValidatedConfig::from_raw(&cli(&["--public-key", "pk"]), None).unwrap();

        assert!(matches!(
            config.client_config(),
            Err(ConfigError::MissingRequired { field: "token", .. })
        ));
    }

    #[test]
    fn missing_public_key() {
        let config = ValidatedConfig::from_raw(&cli(&["--token", "t"]), None).unwrap();

        assert!(matches!(
            config.client_config(),
            Err(ConfigError::MissingRequired {
                field: "public_key",
                ..
            })
        ));
    }

    #[test]
    fn require_secret_key() {
        let without = ValidatedConfig::from_raw(&cli(&[]), None).unwrap();
        assert!(matches!(
            without.require_secret_key(),
            Err(ConfigError::MissingRequired {
                field: "secret_key",
                ..
            })
        ));

        let with = ValidatedConfig::from_raw(&cli(&["--secret-key", "sk"]), None).unwrap();
        assert_eq!(with.require_secret_key().unwrap(), "sk");
    }
}

mod display {
    use super::*;

    #[test]
    fn display_masks_secrets() {
        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&file_credentials())).unwrap();

        let shown = config.to_string();

        assert!(!shown.contains("file-token"));
        assert!(!shown.contains("file-sk"));
        assert!(shown.contains("token: set"));
        assert!(shown.contains("public_key: file-pk"));
        assert!(shown.contains("config_file: none"));
    }

    #[test]
    fn debug_masks_secrets() {
        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&file_credentials())).unwrap();

        let debug = format!("{config:?}");

        assert!(!debug.contains("file-token"));
        assert!(!debug.contains("file-sk"));
    }
}

mod loading {
    use super::*;

    #[test]
    fn load_reads_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payop.toml");
        std::fs::write(&path, "[credentials]\ntoken = \"from-file\"\n").unwrap();

        let cli = cli(&["--config", path.to_str().unwrap()]);
        let config = ValidatedConfig::load(&cli).unwrap();

        assert_eq!(config.token.as_deref(), Some("from-file"));
        assert_eq!(config.config_file.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn load_missing_explicit_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let cli = cli(&["--config", path.to_str().unwrap()]);

        assert!(matches!(
            ValidatedConfig::load(&cli),
            Err(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn explicit_path_wins() {
        let resolved = resolve_config_path(
            Some(Path::new("explicit.toml")),
            Some(PathBuf::from("default.toml")),
        );

        assert_eq!(resolved, Some(PathBuf::from("explicit.toml")));
    }

    #[test]
    fn default_path_used_only_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let default = dir.path().join("config.toml");

        assert_eq!(resolve_config_path(None, Some(default.clone())), None);

        std::fs::write(&default, "").unwrap();
        assert_eq!(
            resolve_config_path(None, Some(default.clone())),
            Some(default)
        );
    }

    #[test]
    fn no_default_location() {
        assert_eq!(resolve_config_path(None, None), None);
    }
}

mod init {
    use super::*;

    #[test]
    fn writes_template_creating_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        write_default_config(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(TomlConfig::parse(&written).is_ok());
    }

    #[test]
    fn refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "keep me").unwrap();

        let result = write_default_config(&path);

        assert!(matches!(result, Err(ConfigError::AlreadyExists { .. })));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");
    }
}
