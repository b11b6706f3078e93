//! Tests for transaction records and state classification.

use super::{Transaction, TransactionStatus};
use rust_decimal::Decimal;
use serde_json::json;

mod classification {
    use super::*;

    #[test]
    fn documented_codes_map_to_states() {
        assert_eq!(TransactionStatus::classify(1), Some(TransactionStatus::New));
        assert_eq!(
            TransactionStatus::classify(2),
            Some(TransactionStatus::Accepted)
        );
        assert_eq!(
            TransactionStatus::classify(4),
            Some(TransactionStatus::Pending)
        );
    }

    #[test]
    fn both_failure_codes_map_to_failed() {
        assert_eq!(TransactionStatus::classify(3), Some(TransactionStatus::Failed));
        assert_eq!(TransactionStatus::classify(5), Some(TransactionStatus::Failed));
    }

    #[test]
    fn undocumented_codes_are_unclassified() {
        for code in [0, 6, 9, 255] {
            assert_eq!(TransactionStatus::classify(code), None, "code {code}");
        }
    }

    #[test]
    fn canonical_code_round_trips_through_classify() {
        for status in [
            TransactionStatus::New,
            TransactionStatus::Accepted,
            TransactionStatus::Pending,
            TransactionStatus::Failed,
        ] {
            assert_eq!(TransactionStatus::classify(status.code()), Some(status));
        }
        assert_eq!(TransactionStatus::Failed.code(), 3);
    }

    #[test]
    fn only_accepted_and_failed_are_final() {
        assert!(TransactionStatus::Accepted.is_final());
        assert!(TransactionStatus::Failed.is_final());
        assert!(!TransactionStatus::New.is_final());
        assert!(!TransactionStatus::Pending.is_final());
    }
}

mod transaction {
    use super::*;

    #[test]
    fn deserializes_minimal_record() {
        let tx: Transaction = serde_json::from_value(json!({
            "identifier": "tx-1",
            "amount": 10,
            "currency": "EUR",
            "state": 1,
            "createdAt": 1_700_000_000
        }))
        .unwrap();

        assert_eq!(tx.identifier, "tx-1");
        assert_eq!(tx.amount, Decimal::from(10));
        assert_eq!(tx.status(), Some(TransactionStatus::New));
        assert!(tx.refund.is_none());
        assert!(tx.commission.is_empty());
        assert!(tx.exchange.is_empty());
    }

    #[test]
    fn deserializes_full_record() {
        let tx: Transaction = serde_json::from_value(json!({
            "identifier": "tx-2",
            "walletIdentifier": "wallet-9",
            "amount": "10.50",
            "currency": "EUR",
            "payAmount": 11.25,
            "payCurrency": "USD",
            "state": 5,
            "orderIdentifier": "order-1",
            "paymentMethodIdentifier": "381",
            "errorMessage": "Declined",
            "createdAt": 1_700_000_000,
            "updatedAt": 1_700_000_100,
            "refund": {"identifier": "rf-1", "amount": 5, "currency": "EUR", "state": 2},
            "chargeback": {"reason": "fraud"},
            "geoInformation": {"ip": "203.0.113.7", "country": "DE", "city": "Berlin"},
            "cardInfo": {"bin": "411111", "lastDigits": "1111", "brand": "VISA"},
            "commission": [{"percent": 2.5, "amount": 0.26, "currency": "EUR"}],
            "exchange": [{"rate": 1.07, "fromCurrency": "EUR", "toCurrency": "USD"}]
        }))
        .unwrap();

        assert_eq!(tx.wallet_identifier.as_deref(), Some("wallet-9"));
        assert_eq!(tx.amount, Decimal::new(1050, 2));
        assert_eq!(tx.pay_amount, Some(Decimal::new(1125, 2)));
        assert_eq!(tx.pay_currency.as_deref(), Some("USD"));
        assert_eq!(tx.status(), Some(TransactionStatus::Failed));
        assert_eq!(tx.error_message.as_deref(), Some("Declined"));
        assert_eq!(tx.updated_at, Some(1_700_000_100));
        assert_eq!(tx.refund.as_ref().unwrap().identifier, "rf-1");
        assert_eq!(tx.chargeback.as_ref().unwrap().reason.as_deref(), Some("fraud"));
        assert_eq!(
            tx.geo_information.as_ref().unwrap().country.as_deref(),
            Some("DE")
        );
        assert_eq!(
            tx.card_info.as_ref().unwrap().last_digits.as_deref(),
            Some("1111")
        );
        assert_eq!(tx.commission.len(), 1);
        assert_eq!(tx.commission[0].percent, Some(Decimal::new(25, 1)));
        assert_eq!(tx.exchange[0].to_currency.as_deref(), Some("USD"));
    }

    #[test]
    fn null_lists_become_empty() {
        let tx: Transaction = serde_json::from_value(json!({
            "identifier": "tx-3",
            "amount": 1,
            "currency": "EUR",
            "state": 2,
            "createdAt": 0,
            "commission": null,
            "exchange": null
        }))
        .unwrap();

        assert!(tx.commission.is_empty());
        assert!(tx.exchange.is_empty());
    }

    #[test]
    fn missing_required_field_fails() {
        let result = serde_json::from_value::<Transaction>(json!({
            "identifier": "tx-4",
            "currency": "EUR",
            "state": 2,
            "createdAt": 0
        }));

        assert!(result.unwrap_err().to_string().contains("amount"));
    }

    #[test]
    fn undocumented_state_is_kept_raw() {
        let tx: Transaction = serde_json::from_value(json!({
            "identifier": "tx-5",
            "amount": 1,
            "currency": "EUR",
            "state": 9,
            "createdAt": 0
        }))
        .unwrap();

        assert_eq!(tx.state, 9);
        assert_eq!(tx.status(), None);
    }
}
