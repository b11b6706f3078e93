//! Tests for order signatures.

use super::{sign, verify};

mod signing {
    use super::*;

    #[test]
    fn matches_known_digest() {
        assert_eq!(
            sign("order-1", "10.00", "EUR", "secret"),
            "608dcbb4c77844cc098be9a6f4c92310e3ef9f4eaa3a5a708ce306aa79f10673"
        );
    }

    #[test]
    fn all_empty_fields_hash_the_separators() {
        assert_eq!(
            sign("", "", "", ""),
            "f1ae2a75ed1f99721f02ef869e2fb3d4df102fdd73e2d00b424a222f9c1ea69c"
        );
    }

    #[test]
    fn is_deterministic() {
        let first = sign("o1", "1", "EUR", "s");
        let second = sign("o1", "1", "EUR", "s");

        assert_eq!(first, second);
    }

    #[test]
    fn output_is_lowercase_hex() {
        let sig = sign("o1", "1", "EUR", "s");

        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn changing_any_single_field_changes_output() {
        let base = sign("o1", "1", "EUR", "s");

        assert_ne!(base, sign("o2", "1", "EUR", "s"));
        assert_ne!(base, sign("o1", "2", "EUR", "s"));
        assert_ne!(base, sign("o1", "1", "USD", "s"));
        assert_ne!(base, sign("o1", "1", "EUR", "t"));
        assert_ne!(base, sign("o1", "1", "EUR", ""));
    }

    #[test]
    fn empty_secret_differs_from_nonempty_secret() {
        assert_ne!(
            sign("order-1", "10.00", "EUR", ""),
            sign("order-1", "10.00", "EUR", "secret")
        );
    }

    #[test]
    fn amount_is_hashed_textually() {
        assert_ne!(sign("o1", "10", "EUR", "s"), sign("o1", "10.00", "EUR", "s"));
    }
}

mod verification {
    use super::*;

    #[test]
    fn identical_signatures_verify() {
        let sig = sign("o1", "1", "EUR", "s");
        assert!(verify(&sig, &sig));
    }

    #[test]
    fn different_signatures_do_not_verify() {
        let sig = sign("o1", "1", "EUR", "s");
        let other = sign("o1", "1", "EUR", "t");

        assert!(!verify(&sig, &other));
    }

    #[test]
    fn different_lengths_do_not_verify() {
        let sig = sign("o1", "1", "EUR", "s");

        assert!(!verify(&sig, &sig[..63]));
        assert!(!verify(&sig, ""));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let sig = sign("o1", "1", "EUR", "s");
        assert!(!verify(&sig, &sig.to_uppercase()));
    }
}
