//! Tests for client settings.

use super::{CHECKOUT_HOST, DEFAULT_API_URL, PayopConfig, checkout_url};
use crate::model::Language;

mod payop_config {
    use super::*;

    #[test]
    fn new_uses_defaults() {
        let config = PayopConfig::new("token", "public");

        assert_eq!(config.token(), "token");
        assert_eq!(config.public_key(), "public");
        assert_eq!(config.secret_key(), None);
        assert_eq!(config.api_url(), DEFAULT_API_URL);
        assert!(config.span().is_none());
    }

    #[test]
    fn builders_override_fields() {
        let config = PayopConfig::new("token", "public")
            .with_secret_key("secret")
            .with_api_url("https://sandbox.example.com")
            .with_span(tracing::Span::none());

        assert_eq!(config.secret_key(), Some("secret"));
        assert_eq!(config.api_url(), "https://sandbox.example.com");
        assert!(config.span().is_some());
    }

    #[test]
    fn debug_redacts_credentials() {
        let config = PayopConfig::new("jwt-secret-token", "public").with_secret_key("signing-key");

        let debug = format!("{config:?}");

        assert!(!debug.contains("jwt-secret-token"));
        assert!(!debug.contains("signing-key"));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("public"));
    }

    #[test]
    fn debug_shows_absent_secret() {
        let debug = format!("{:?}", PayopConfig::new("t", "p"));
        assert!(debug.contains("secret_key: None"));
    }
}

mod checkout_page {
    use super::*;

    #[test]
    fn formats_english_page() {
        assert_eq!(
            checkout_url(Language::En, "inv-1"),
            "https://payop.com/en/payment/invoice-preprocessing/inv-1"
        );
    }

    #[test]
    fn formats_russian_page() {
        assert_eq!(
            checkout_url(Language::Ru, "inv-1"),
            "https://payop.com/ru/payment/invoice-preprocessing/inv-1"
        );
    }

    #[test]
    fn uses_checkout_host() {
        assert!(checkout_url(Language::En, "x").starts_with(CHECKOUT_HOST));
    }
}
